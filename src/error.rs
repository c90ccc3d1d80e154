use std::path::{Path, PathBuf};
use thiserror::Error;

/// 数据集转换错误
///
/// 所有错误都是致命的，一旦出现立即终止本次转换
#[derive(Error, Debug)]
pub enum DatasetError {
    /// 文件名不符合 `<source><number>_<section>.txt` 格式
    #[error("Unrecognized filename: {0}")]
    Format(String),
    /// 文件内容去除空白后为空
    #[error("Empty passage in {0}")]
    Content(String),
    /// 文件内容不是合法的 UTF-8 文本
    #[error("Invalid UTF-8 in {0}")]
    Encoding(String),
    /// 输入目录中没有任何 .txt 文件
    #[error("No .txt files found in {}", .0.display())]
    NotFound(PathBuf),
    #[error("IO错误 {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 两个文件解析出相同的排序键（仅在拒绝重复时出现）
    #[error("Duplicate passage key {key}: {first} and {second}")]
    Duplicate {
        key: String,
        first: String,
        second: String,
    },
    #[error("JSON错误 {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DatasetError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_names_file() {
        let err = DatasetError::Format("foo.txt".to_string());
        assert_eq!(err.to_string(), "Unrecognized filename: foo.txt");
    }

    #[test]
    fn test_not_found_names_directory() {
        let err = DatasetError::NotFound(PathBuf::from("passages"));
        assert_eq!(err.to_string(), "No .txt files found in passages");
    }

    #[test]
    fn test_io_error_keeps_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = DatasetError::io(Path::new("out.json"), inner);
        assert!(err.to_string().contains("out.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
