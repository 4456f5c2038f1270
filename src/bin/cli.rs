// src/bin/cli.rs
use color_eyre::eyre::Result;
use rs_requests::{cli, log};

fn main() -> Result<()> {
    color_eyre::install()?;
    log::init();

    let config = match cli::parse_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };

    // Extraction errors bubble up here and exit 1 via the eyre report
    cli::run(&config)?;
    Ok(())
}
