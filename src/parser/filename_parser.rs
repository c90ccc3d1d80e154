use regex::Regex;
use std::sync::OnceLock;
use super::*;
use crate::error::{DatasetError, Result};

const FILENAME_PATTERN: &str =
    r"^(?P<source>gpt|claude|gemini|human)(?P<num>\d+)_(?P<section>abstract|noDiscussion|noIntro)\.txt$";

/// 进程内只编译一次
fn filename_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(FILENAME_PATTERN).unwrap())
}

/// 文件名解析器
///
/// 只接受完全匹配的文件名，大小写敏感，不做模糊匹配
#[derive(Clone)]
pub struct FilenameParser {
    pattern: &'static Regex,
}

impl FilenameParser {
    pub fn new() -> Self {
        Self {
            pattern: filename_pattern(),
        }
    }

    /// 解析文件名
    ///
    /// # 参数
    /// - `file_name`: 不含目录的文件名
    ///
    /// # 返回
    /// 解析结果；不匹配或序号溢出时返回 `DatasetError::Format`
    pub fn parse(&self, file_name: &str) -> Result<ParsedName> {
        let unrecognized = || DatasetError::Format(file_name.to_string());

        let caps = self.pattern.captures(file_name).ok_or_else(unrecognized)?;

        // 正则已限定取值范围，这里的查表不会失败
        let source_key = SourceKey::from_tag(&caps["source"]).ok_or_else(unrecognized)?;
        let section_tag = SectionTag::from_tag(&caps["section"]).ok_or_else(unrecognized)?;
        let number = caps["num"].parse::<u64>().map_err(|_| unrecognized())?;

        Ok(ParsedName {
            source_key,
            number,
            section_tag,
        })
    }
}

impl Default for FilenameParser {
    fn default() -> Self {
        Self::new()
    }
}
