use std::fs;
use std::path::Path;
use tracing::info;

use crate::collator::OutputItem;
use crate::error::{DatasetError, Result};

/// 序列化为 JSON 文本
///
/// 两空格缩进，保留非 ASCII 字符，末尾带换行
pub fn to_json(items: &[OutputItem]) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(items)?;
    json.push('\n');
    Ok(json)
}

/// 写出数据集文件
///
/// 写入失败时返回 `DatasetError::Io`
pub fn write_dataset(items: &[OutputItem], output_path: &Path) -> Result<()> {
    let json = to_json(items).map_err(|e| DatasetError::json(output_path, e))?;
    fs::write(output_path, json).map_err(|e| DatasetError::io(output_path, e))?;

    info!(count = items.len(), path = %output_path.display(), "dataset written");
    Ok(())
}

/// 读取数据集文件
pub fn read_dataset(path: &Path) -> Result<Vec<OutputItem>> {
    let content = fs::read_to_string(path).map_err(|e| DatasetError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| DatasetError::json(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Section, Source};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn item(id: &str, text: &str) -> OutputItem {
        OutputItem {
            id: id.to_string(),
            section: Section::Intro,
            title: "CLAUDE 4 noDiscussion".to_string(),
            text: text.to_string(),
            truth: Source::Claude.truth(),
        }
    }

    #[test]
    fn test_json_layout() {
        let json = to_json(&[item("S01", "Hi")]).unwrap();
        let expected = r##"[
  {
    "id": "S01",
    "section": "intro",
    "title": "CLAUDE 4 noDiscussion",
    "text": "Hi",
    "truth": {
      "source": "claude",
      "model_detail": "Claude 3.5 Sonnet",
      "shade_hex": "#b83280"
    }
  }
]
"##;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_non_ascii_preserved() {
        let json = to_json(&[item("S01", "Ça va — 好的")]).unwrap();
        assert!(json.contains("Ça va — 好的"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(to_json(&[]).unwrap(), "[]\n");
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        let items = vec![item("S01", "one"), item("S02", "two")];

        write_dataset(&items, &path).unwrap();
        assert_eq!(read_dataset(&path).unwrap(), items);
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("data.json");
        assert!(matches!(
            write_dataset(&[item("S01", "x")], &path),
            Err(DatasetError::Io { .. })
        ));
    }

    #[test]
    fn test_read_rejects_unknown_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(
            &path,
            r##"[{"id":"S01","section":"intro","title":"t","text":"x","truth":{"source":"bard","model_detail":"?","shade_hex":"#000"}}]"##,
        )
        .unwrap();
        assert!(matches!(read_dataset(&path), Err(DatasetError::Json { .. })));
    }
}
