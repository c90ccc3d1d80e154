use std::path::Path;

use crate::catalog::{Section, SectionTag, SourceKey, Truth};
use crate::error::{DatasetError, Result};
use crate::parser::{FilenameParser, ParsedName, TxtReader};

/// 单个段落文件对应的记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    pub source_key: SourceKey,
    pub number: u64,
    /// 展示章节
    pub section: Section,
    pub title: String,
    /// 去除首尾空白后的正文，非空
    pub text: String,
    pub truth: Truth,
    /// 来源文件名，用于报错和重复检测
    pub file_name: String,
}

impl SourceRecord {
    /// 排序键：来源标记字符串、序号、展示章节字符串
    pub fn sort_key(&self) -> (&'static str, u64, &'static str) {
        (self.source_key.as_str(), self.number, self.section.as_str())
    }
}

/// 标题格式："<来源标记大写> <序号> <章节标记>"
pub fn build_title(source_key: SourceKey, number: u64, section_tag: SectionTag) -> String {
    format!(
        "{} {} {}",
        source_key.as_str().to_uppercase(),
        number,
        section_tag
    )
}

/// 记录构建器
///
/// 文件名解析 + 正文读取 + 静态表查找
pub struct RecordBuilder {
    filename_parser: FilenameParser,
    reader: TxtReader,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            filename_parser: FilenameParser::new(),
            reader: TxtReader::new(),
        }
    }

    /// 由已解析的文件名和正文构建记录
    ///
    /// 正文去除空白后为空时返回 `DatasetError::Content`
    pub fn build(&self, file_name: &str, parsed: ParsedName, content: &str) -> Result<SourceRecord> {
        let text = content.trim();
        if text.is_empty() {
            return Err(DatasetError::Content(file_name.to_string()));
        }

        Ok(SourceRecord {
            source_key: parsed.source_key,
            number: parsed.number,
            section: parsed.section_tag.section(),
            title: build_title(parsed.source_key, parsed.number, parsed.section_tag),
            text: text.to_string(),
            truth: parsed.source_key.source().truth(),
            file_name: file_name.to_string(),
        })
    }

    /// 从文件构建记录
    ///
    /// 先校验文件名，再读取文件
    pub fn build_from_file(&self, file_path: &Path) -> Result<SourceRecord> {
        let file_name = file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let parsed = self.filename_parser.parse(&file_name)?;
        let content = self.reader.read(file_path)?;
        self.build(&file_name, parsed, &content)
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
