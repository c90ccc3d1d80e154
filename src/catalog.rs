use serde::{Deserialize, Serialize};
use std::fmt;

/// 文件名中的来源标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKey {
    Gpt,
    Claude,
    Gemini,
    Human,
}

impl SourceKey {
    pub const ALL: [SourceKey; 4] = [
        SourceKey::Gpt,
        SourceKey::Claude,
        SourceKey::Gemini,
        SourceKey::Human,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SourceKey::Gpt => "gpt",
            SourceKey::Claude => "claude",
            SourceKey::Gemini => "gemini",
            SourceKey::Human => "human",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == tag)
    }

    /// 来源标记到规范来源名称的映射
    pub fn source(self) -> Source {
        match self {
            SourceKey::Gpt => Source::Chatgpt,
            SourceKey::Claude => Source::Claude,
            SourceKey::Gemini => Source::Gemini,
            SourceKey::Human => Source::Human,
        }
    }
}

impl fmt::Display for SourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 文件名中的章节标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionTag {
    Abstract,
    NoDiscussion,
    NoIntro,
}

impl SectionTag {
    pub const ALL: [SectionTag; 3] = [
        SectionTag::Abstract,
        SectionTag::NoDiscussion,
        SectionTag::NoIntro,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionTag::Abstract => "abstract",
            SectionTag::NoDiscussion => "noDiscussion",
            SectionTag::NoIntro => "noIntro",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.as_str() == tag)
    }

    /// 文件命名约定到展示章节的映射
    ///
    /// `noDiscussion` 文件截取自引言，`noIntro` 文件截取自讨论
    pub fn section(self) -> Section {
        match self {
            SectionTag::Abstract => Section::Abstract,
            SectionTag::NoDiscussion => Section::Intro,
            SectionTag::NoIntro => Section::Discussion,
        }
    }
}

impl fmt::Display for SectionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 展示章节
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Abstract,
    Intro,
    Discussion,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Abstract => "abstract",
            Section::Intro => "intro",
            Section::Discussion => "discussion",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 规范来源名称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Chatgpt,
    Claude,
    Gemini,
    Human,
}

impl Source {
    pub fn as_str(self) -> &'static str {
        match self {
            Source::Chatgpt => "chatgpt",
            Source::Claude => "claude",
            Source::Gemini => "gemini",
            Source::Human => "human",
        }
    }

    /// 展示用的模型说明
    pub fn model_detail(self) -> &'static str {
        match self {
            Source::Chatgpt => "GPT-4.1",
            Source::Claude => "Claude 3.5 Sonnet",
            Source::Gemini => "Gemini 1.5 Pro",
            Source::Human => "Human",
        }
    }

    /// 徽章颜色
    pub fn shade_hex(self) -> &'static str {
        match self {
            Source::Human => "#2f855a",
            Source::Chatgpt => "#4c51bf",
            Source::Claude => "#b83280",
            Source::Gemini => "#d97706",
        }
    }

    pub fn truth(self) -> Truth {
        Truth {
            source: self,
            model_detail: self.model_detail().to_string(),
            shade_hex: self.shade_hex().to_string(),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 真值标注
///
/// 附在每条数据上，供前端揭晓答案时展示来源、模型和颜色
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Truth {
    pub source: Source,
    pub model_detail: String,
    pub shade_hex: String,
}

impl Truth {
    /// 检查标注是否与静态表一致
    pub fn matches_catalog(&self) -> bool {
        self.model_detail == self.source.model_detail() && self.shade_hex == self.source.shade_hex()
    }
}
