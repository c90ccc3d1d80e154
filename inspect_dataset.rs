/// 检查数据集文件
///
/// 读取转换生成的 JSON，校验编号和真值标注，并按来源、章节统计数量

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use spot_dataset_lib::cli::{init_logging, DEFAULT_OUTPUT};
use spot_dataset_lib::inspect::inspect;
use spot_dataset_lib::writer::read_dataset;
use tracing::error;

#[derive(Debug, Parser)]
#[command(
    name = "inspect_dataset",
    disable_help_subcommand = true,
    about = "Validate a Spot the Bot dataset and print per-source counts"
)]
struct InspectCli {
    #[arg(value_name = "PATH", default_value = DEFAULT_OUTPUT, help = "Dataset JSON file")]
    path: PathBuf,
    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = InspectCli::parse();
    init_logging(args.verbose);

    let items = read_dataset(&args.path)
        .with_context(|| format!("failed to load {}", args.path.display()))?;

    println!("正在检查数据集: {:?}", args.path);
    let report = inspect(&items);

    println!("  条目数量: {}", report.total);
    for (source, count) in &report.by_source {
        println!("  来源 {}: {}", source, count);
    }
    for (section, count) in &report.by_section {
        println!("  章节 {}: {}", section, count);
    }

    for problem in &report.problems {
        error!(%problem, "dataset problem");
    }
    if !report.is_valid() {
        bail!("{} problem(s) found in {}", report.problems.len(), args.path.display());
    }

    println!("✓ 数据集校验通过");
    Ok(())
}
