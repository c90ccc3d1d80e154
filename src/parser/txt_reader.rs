use encoding_rs::*;
use std::fs;
use std::path::Path;
use tracing::trace;

use crate::error::{DatasetError, Result};

/// 段落文件读取器
///
/// 按 UTF-8 严格解码单个 .txt 段落文件，去除 BOM 和首尾空白
#[derive(Clone)]
pub struct TxtReader;

impl TxtReader {
    pub fn new() -> Self {
        Self
    }

    /// 读取并解码文件
    ///
    /// # 返回
    /// 去除首尾空白后的文本，可能为空；读取失败返回 `DatasetError::Io`，
    /// 含非法字节返回 `DatasetError::Encoding`
    pub fn read(&self, file_path: &Path) -> Result<String> {
        let bytes = fs::read(file_path).map_err(|e| DatasetError::io(file_path, e))?;
        let content = self.decode(&bytes).ok_or_else(|| {
            let file_name = file_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| file_path.display().to_string());
            DatasetError::Encoding(file_name)
        })?;

        trace!(path = %file_path.display(), bytes = bytes.len(), "read passage");
        Ok(content.trim().to_string())
    }

    /// UTF-8 解码
    ///
    /// 出现替换字符即视为失败，返回 None
    fn decode(&self, bytes: &[u8]) -> Option<String> {
        let (content, had_errors) = UTF_8.decode_with_bom_removal(bytes);
        if had_errors {
            return None;
        }
        Some(content.into_owned())
    }
}

impl Default for TxtReader {
    fn default() -> Self {
        Self::new()
    }
}
