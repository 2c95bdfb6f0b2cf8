use campus_records::report::{self, JsonReport};
use campus_records::utils::{logger, validation::Validate};
use campus_records::{CliConfig, OutputFormat, Repository, Result};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting campus-records");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(2);
    }

    if let Err(e) = run(&config) {
        tracing::error!("Batch load failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing::info!("Batch load completed");
}

fn run(config: &CliConfig) -> Result<()> {
    let repository = Repository::load(config)?;

    match config.format {
        OutputFormat::Table => {
            println!("{}", report::student_table(&repository.student_summaries()));
            println!();
            println!(
                "{}",
                report::instructor_table(&repository.instructor_summaries())
            );
            println!();
            println!("{}", report::major_table(&repository.major_summaries()));
        }
        OutputFormat::Json => {
            println!("{}", JsonReport::from_repository(&repository).to_json()?);
        }
    }

    Ok(())
}
