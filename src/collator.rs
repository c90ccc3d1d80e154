use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{Section, Truth};
use crate::error::{DatasetError, Result};
use crate::record_builder::SourceRecord;

/// 输出数据项
///
/// 字段顺序即 JSON 输出顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputItem {
    pub id: String,
    pub section: Section,
    pub title: String,
    pub text: String,
    pub truth: Truth,
}

/// 重复排序键的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// 记录警告并保留全部记录
    #[default]
    Warn,
    /// 直接报错
    Deny,
}

/// 序号从 1 开始，至少两位
pub fn format_id(index: usize) -> String {
    format!("S{:02}", index)
}

/// 排序并分配编号
///
/// 稳定排序，排序键相同的记录保持输入顺序；调用方按文件名顺序传入即可保证输出确定
pub fn collate(mut records: Vec<SourceRecord>, policy: DuplicatePolicy) -> Result<Vec<OutputItem>> {
    records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    for pair in records.windows(2) {
        let (first, second) = (&pair[0], &pair[1]);
        if first.sort_key() != second.sort_key() {
            continue;
        }

        let (source_key, number, section) = first.sort_key();
        let key = format!("({}, {}, {})", source_key, number, section);
        match policy {
            DuplicatePolicy::Deny => {
                return Err(DatasetError::Duplicate {
                    key,
                    first: first.file_name.clone(),
                    second: second.file_name.clone(),
                });
            }
            DuplicatePolicy::Warn => {
                warn!(%key, first = %first.file_name, second = %second.file_name, "duplicate passage key");
            }
        }
    }

    let items: Vec<OutputItem> = records
        .into_iter()
        .enumerate()
        .map(|(i, record)| OutputItem {
            id: format_id(i + 1),
            section: record.section,
            title: record.title,
            text: record.text,
            truth: record.truth,
        })
        .collect();

    debug!(count = items.len(), "collated items");
    Ok(items)
}
