use clap::Parser;
use tracing_subscriber::EnvFilter;
use twoslashify::application::{RewriteDocumentService, RewriteOptions};
use twoslashify::cli::{format_report, Cli};
use twoslashify::error::TwoslashError;
use twoslashify::infrastructure::{Config, DocumentFile};

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
    tracing::debug!("Verbose mode enabled");
}

fn run(cli: Cli) -> Result<(), TwoslashError> {
    // Defaults <- config file <- command-line flags
    let base = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let config = base.merge(cli.overrides());

    let options = RewriteOptions {
        rule: config.rule()?,
        engine: config.engine(),
        dry_run: cli.dry_run,
    };

    let service = RewriteDocumentService::new(DocumentFile::new(cli.file));
    let report = service.execute(&options)?;

    println!("{}", format_report(&report));
    Ok(())
}
