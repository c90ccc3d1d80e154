use crate::catalog::{SectionTag, SourceKey};

// 子模块声明
pub mod filename_parser;
pub mod txt_reader;

pub use filename_parser::FilenameParser;
pub use txt_reader::TxtReader;

/// 文件名解析结果
///
/// `<source><number>_<section>.txt` 中编码的三个组成部分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedName {
    /// 来源标记
    pub source_key: SourceKey,
    /// 序号（允许前导零）
    pub number: u64,
    /// 章节标记
    pub section_tag: SectionTag,
}

impl ParsedName {
    /// 还原成规范文件名（不含前导零）
    pub fn file_name(&self) -> String {
        format!("{}{}_{}.txt", self.source_key, self.number, self.section_tag)
    }
}
