// src/bin/readme_table.rs
use fishcount_index::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run_table(std::env::args().skip(1))?;
    Ok(())
}
