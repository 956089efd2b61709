//! Command line surface.
//!
//! Lives in the library so the dispatch can be tested; `main.rs` only parses
//! arguments, sets up logging and calls [`run`].

use crate::error::PlanError;
use crate::models::NetworkDocument;
use crate::output::{example_document, json_schema, render_table, ExampleKind, PlanReport};
use crate::{plan, MergeOptions};
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "subnet-planner", version, about)]
pub struct Cli {
    /// Configuration file to use for the subnet structure generation.
    /// Or destination file if --generate-json-schema or --generate-example is set.
    pub target: PathBuf,

    /// Generate the JSON schema to the given file.
    #[arg(long)]
    pub generate_json_schema: bool,

    /// Generate an example configuration file.
    #[arg(long, value_enum, value_name = "KIND", conflicts_with = "generate_json_schema")]
    pub generate_example: Option<ExampleKind>,

    /// Print the subnet table to stdout (the default when no other output is set).
    #[arg(long, alias = "out-stdin")]
    pub out_stdout: bool,

    /// Store the subnet table in the given text file.
    #[arg(long, value_name = "FILE")]
    pub out_txt: Option<PathBuf>,

    /// Store the output in the given JSON file.
    #[arg(long, value_name = "FILE")]
    pub out_json: Option<PathBuf>,

    /// Store the output in the given YAML file.
    #[arg(long, value_name = "FILE")]
    pub out_yaml: Option<PathBuf>,

    /// Include reserved (placeholder) ranges in the output.
    #[arg(long)]
    pub show_reserved: bool,

    /// log4rs configuration file.
    #[arg(
        long,
        env = "SUBNET_PLANNER_LOG_CONFIG",
        default_value = "log4rs.yml",
        value_name = "FILE"
    )]
    pub log_config: PathBuf,
}

/// Initialize log4rs from `config`, or log warnings to stderr if the file is missing.
pub fn init_logging(config: &Path) {
    if config.exists() {
        match log4rs::init_file(config, Default::default()) {
            Ok(()) => return,
            Err(e) => eprintln!("Error initializing log4rs from {}: {e}", config.display()),
        }
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();
    let fallback = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn));
    match fallback {
        Ok(fallback) => {
            if let Err(e) = log4rs::init_config(fallback) {
                eprintln!("Error initializing logging: {e}");
            }
        }
        Err(e) => eprintln!("Error building logging config: {e}"),
    }
}

pub fn run(cli: &Cli) -> Result<(), PlanError> {
    if cli.generate_json_schema {
        return write_file(&cli.target, &json_schema()?);
    }
    if let Some(kind) = cli.generate_example {
        return write_file(&cli.target, example_document(kind));
    }

    let document = NetworkDocument::load(&cli.target)?;
    let records = plan(
        &document,
        MergeOptions {
            include_reserved: cli.show_reserved,
        },
    )?;

    let file_outputs = cli.out_txt.is_some() || cli.out_json.is_some() || cli.out_yaml.is_some();
    if cli.out_stdout || !file_outputs {
        println!("{}", render_table(&records, std::io::stdout().is_terminal()));
    }
    if let Some(path) = &cli.out_txt {
        write_file(path, &format!("{}\n", render_table(&records, false)))?;
    }

    let report = PlanReport::new(document.network_cidr, records);
    if let Some(path) = &cli.out_json {
        write_file(path, &report.to_json()?)?;
    }
    if let Some(path) = &cli.out_yaml {
        write_file(path, &report.to_yaml()?)?;
    }
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), PlanError> {
    log::info!("Writing {}", path.display());
    std::fs::write(path, contents).map_err(|e| PlanError::io(path, e))
}
