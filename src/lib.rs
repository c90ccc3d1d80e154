use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod catalog;
pub mod cli;
pub mod collator;
pub mod error;
pub mod inspect;
pub mod parser;
pub mod record_builder;
pub mod writer;


pub use catalog::{Section, SectionTag, Source, SourceKey, Truth};
pub use cli::{Cli, ConvertConfig};
pub use collator::{DuplicatePolicy, OutputItem};
pub use error::{DatasetError, Result};
pub use record_builder::{RecordBuilder, SourceRecord};

/// 转换结果
#[derive(Debug, Clone)]
pub struct ConvertReport {
    pub items: Vec<OutputItem>,
    pub output: PathBuf,
}

/// 列出输入目录中的 .txt 文件
///
/// 不递归，忽略隐藏文件和目录，按文件名排序；目录不存在或没有文件时返回 `DatasetError::NotFound`
pub fn collect_input_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(input_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(DatasetError::NotFound(input_dir.to_path_buf()));
        }
        Err(e) => return Err(DatasetError::io(input_dir, e)),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DatasetError::io(input_dir, e))?;
        let path = entry.path();

        let is_txt = path.extension().map_or(false, |ext| ext == "txt");
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if !is_txt || hidden || !path.is_file() {
            continue;
        }
        files.push(path);
    }

    if files.is_empty() {
        return Err(DatasetError::NotFound(input_dir.to_path_buf()));
    }

    files.sort();
    Ok(files)
}

/// 读取、排序并编号，不写文件
pub fn build_items(config: &ConvertConfig) -> Result<Vec<OutputItem>> {
    let files = collect_input_files(&config.input_dir)?;
    info!(count = files.len(), dir = %config.input_dir.display(), "found passage files");

    let builder = RecordBuilder::new();
    let mut records = Vec::with_capacity(files.len());
    for path in &files {
        let record = builder.build_from_file(path)?;
        debug!(file = %record.file_name, title = %record.title, "parsed passage");
        records.push(record);
    }

    collator::collate(records, config.duplicates)
}

/// 完整转换流程
///
/// 任一文件失败即整体失败，此时不会写出任何内容
pub fn convert(config: &ConvertConfig) -> Result<ConvertReport> {
    let items = build_items(config)?;
    writer::write_dataset(&items, &config.output)?;

    Ok(ConvertReport {
        items,
        output: config.output.clone(),
    })
}
