use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::Level;

use crate::collator::DuplicatePolicy;

pub const DEFAULT_OUTPUT: &str = "spot-the-bot-data.json";

/// 转换配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// 段落文件所在目录
    pub input_dir: PathBuf,
    /// 输出 JSON 路径
    pub output: PathBuf,
    pub duplicates: DuplicatePolicy,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            duplicates: DuplicatePolicy::Warn,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "spot-dataset",
    disable_help_subcommand = true,
    about = "Convert Spot the Bot .txt passages into JSON dataset.",
    after_help = "Passage files must be named <source><number>_<section>.txt, e.g. gpt1_abstract.txt."
)]
pub struct Cli {
    #[arg(
        value_name = "INPUT_DIR",
        default_value = ".",
        help = "Directory containing passage .txt files."
    )]
    pub input_dir: PathBuf,
    #[arg(
        short,
        long,
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT,
        help = "Output JSON file path."
    )]
    pub output: PathBuf,
    #[arg(
        long = "deny-duplicates",
        help = "Fail when two files resolve to the same source, number and section"
    )]
    pub deny_duplicates: bool,
    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity (-v, -vv, -vvv)")]
    pub verbose: u8,
}

impl Cli {
    pub fn config(&self) -> ConvertConfig {
        ConvertConfig {
            input_dir: self.input_dir.clone(),
            output: self.output.clone(),
            duplicates: if self.deny_duplicates {
                DuplicatePolicy::Deny
            } else {
                DuplicatePolicy::Warn
            },
        }
    }
}

/// `-v` 次数到日志级别
pub fn log_level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// 安装输出到 stderr 的日志订阅器
pub fn init_logging(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(log_level(verbosity))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["spot-dataset"]).unwrap();
        assert_eq!(cli.config(), ConvertConfig::default());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_short_output_flag() {
        let cli = Cli::try_parse_from(["spot-dataset", "passages", "-o", "out.json"]).unwrap();
        let config = cli.config();
        assert_eq!(config.input_dir, PathBuf::from("passages"));
        assert_eq!(config.output, PathBuf::from("out.json"));
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from([
            "spot-dataset",
            "--output",
            "data.json",
            "--deny-duplicates",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.config().duplicates, DuplicatePolicy::Deny);
        assert_eq!(log_level(cli.verbose), Level::DEBUG);
    }

    #[test]
    fn test_rejects_extra_positional() {
        assert!(Cli::try_parse_from(["spot-dataset", "a", "b"]).is_err());
    }
}
