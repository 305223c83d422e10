use clap::Parser;
use vault::{Cli, init_logging, run};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let data_dir = cli.data_directory();

    init_logging(data_dir.root(), &cli.log_level)?;

    let output = run(&cli)?;
    print!("{output}");

    tracing::info!("Command finished");
    Ok(())
}
