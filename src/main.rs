use clap::Parser;
use spot_dataset_lib::{cli, convert, Cli};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    cli::init_logging(args.verbose);

    let report = convert(&args.config())?;
    println!(
        "Wrote {} items to {}",
        report.items.len(),
        report.output.display()
    );

    Ok(())
}
