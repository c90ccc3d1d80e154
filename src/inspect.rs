use std::collections::BTreeMap;
use std::fmt;

use crate::catalog::{Section, Source};
use crate::collator::{format_id, OutputItem};

/// 数据集中发现的问题
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// 编号与位置不符
    IdOutOfSequence { found: String, expected: String },
    /// 真值标注与静态表不一致
    TruthMismatch { id: String, source: Source },
    EmptyText { id: String },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::IdOutOfSequence { found, expected } => {
                write!(f, "id {} out of sequence, expected {}", found, expected)
            }
            Problem::TruthMismatch { id, source } => {
                write!(f, "{}: truth annotation does not match catalog for {}", id, source)
            }
            Problem::EmptyText { id } => write!(f, "{}: empty passage text", id),
        }
    }
}

/// 检查结果：按来源、章节的计数和问题列表
#[derive(Debug, Clone, Default)]
pub struct InspectReport {
    pub total: usize,
    pub by_source: BTreeMap<&'static str, usize>,
    pub by_section: BTreeMap<&'static str, usize>,
    pub problems: Vec<Problem>,
}

impl InspectReport {
    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }
}

/// 校验编号连续、真值标注与静态表一致、正文非空
pub fn inspect(items: &[OutputItem]) -> InspectReport {
    let mut report = InspectReport {
        total: items.len(),
        ..Default::default()
    };

    for (i, item) in items.iter().enumerate() {
        let expected = format_id(i + 1);
        if item.id != expected {
            report.problems.push(Problem::IdOutOfSequence {
                found: item.id.clone(),
                expected,
            });
        }
        if !item.truth.matches_catalog() {
            report.problems.push(Problem::TruthMismatch {
                id: item.id.clone(),
                source: item.truth.source,
            });
        }
        if item.text.trim().is_empty() {
            report.problems.push(Problem::EmptyText { id: item.id.clone() });
        }

        *report.by_source.entry(item.truth.source.as_str()).or_default() += 1;
        *report.by_section.entry(item.section.as_str()).or_default() += 1;
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(id: &str, source: Source, section: Section) -> OutputItem {
        OutputItem {
            id: id.to_string(),
            section,
            title: "t".to_string(),
            text: "passage".to_string(),
            truth: source.truth(),
        }
    }

    #[test]
    fn test_clean_dataset() {
        let items = vec![
            item("S01", Source::Claude, Section::Abstract),
            item("S02", Source::Human, Section::Intro),
            item("S03", Source::Human, Section::Abstract),
        ];

        let report = inspect(&items);
        assert!(report.is_valid());
        assert_eq!(report.total, 3);
        assert_eq!(report.by_source.get("human"), Some(&2));
        assert_eq!(report.by_source.get("claude"), Some(&1));
        assert_eq!(report.by_section.get("abstract"), Some(&2));
    }

    #[test]
    fn test_id_gap_reported() {
        let items = vec![
            item("S01", Source::Gemini, Section::Abstract),
            item("S03", Source::Gemini, Section::Intro),
        ];

        let report = inspect(&items);
        assert_eq!(
            report.problems,
            vec![Problem::IdOutOfSequence {
                found: "S03".to_string(),
                expected: "S02".to_string(),
            }]
        );
    }

    #[test]
    fn test_tampered_truth_reported() {
        let mut tampered = item("S01", Source::Chatgpt, Section::Discussion);
        tampered.truth.model_detail = "GPT-3".to_string();
        let mut blank = item("S02", Source::Human, Section::Discussion);
        blank.text = "  ".to_string();

        let report = inspect(&[tampered, blank]);
        assert!(!report.is_valid());
        assert_eq!(
            report.problems,
            vec![
                Problem::TruthMismatch {
                    id: "S01".to_string(),
                    source: Source::Chatgpt,
                },
                Problem::EmptyText { id: "S02".to_string() },
            ]
        );
        assert_eq!(
            report.problems[0].to_string(),
            "S01: truth annotation does not match catalog for chatgpt"
        );
    }
}
