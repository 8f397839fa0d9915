use anyhow::{Context, Result};
use csvsplit::{Cli, Splitter};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    let json = cli.json;
    let config = cli.into_config()?;
    let input = config.input.clone();

    let report = Splitter::new(config)
        .run()
        .with_context(|| format!("Failed to split {}", input.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Rows parsed:          {}", report.rows);
    println!("Lines per file:       {}", report.lines_per_file);
    println!("Files created:        {}", report.file_count());
    println!(
        "\n✓ CSV file successfully split into {}",
        report.directory.display()
    );

    Ok(())
}

/// Logs go to stderr; stdout carries the summary. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
