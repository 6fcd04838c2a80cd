use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use macroplan::importer;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Import a hardmacro connectivity matrix and print the floorplan as JSON",
    long_about = None
)]
struct Cli {
    /// CSV/TSV file: first row and first column are block names, diagonal = areas
    #[arg(value_name = "MATRIX_FILE")]
    matrix_file: Utf8PathBuf,

    /// Print only the block/connection counts
    #[arg(long)]
    summary: bool,

    /// Emit single-line JSON instead of pretty-printed JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    macroplan::logging::init();
    let cli = Cli::parse();
    let plan = importer::import_file(&cli.matrix_file)
        .with_context(|| format!("Failed to load {}", cli.matrix_file))?;

    if cli.summary {
        println!("{}", plan.summary());
        return Ok(());
    }
    let json = if cli.compact {
        serde_json::to_string(&plan)?
    } else {
        serde_json::to_string_pretty(&plan)?
    };
    println!("{}", json);
    Ok(())
}
