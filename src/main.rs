use clap::Parser;
use std::error::Error;
use subnet_planner::cli::{self, Cli};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    cli::init_logging(&cli.log_config);
    log::info!("#Start main()");

    cli::run(&cli)?;

    Ok(())
}
