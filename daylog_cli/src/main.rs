mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use daylog_core::FileLogger;
use daylog_core::target::target_for;
use daylog_fs::DiskStore;
use daylog_traits::{DateSource, SystemDate};
use eyre::{Result, WrapErr};
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Console logging: RUST_LOG wins, --log-level is the fallback.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();
    init_tracing(&args.log_level);

    tracing::debug!(dir = %args.dir.display(), "using log directory");

    match args.cmd {
        Commands::Log { message } => {
            let mut logger = FileLogger::builder()
                .with_store(DiskStore::new(&args.dir))
                .with_dates(SystemDate::new())
                .with_weekend_archive(args.archive_weekends)
                .build()
                .wrap_err("assemble logger")?;

            let receipt = logger.log(&message).wrap_err("write log entry")?;

            if args.json {
                println!(
                    "{}",
                    json!({
                        "file": receipt.file,
                        "created": receipt.created,
                        "archived_to": receipt.archived_to,
                    })
                );
            } else {
                if let Some(archive) = &receipt.archived_to {
                    println!("archived previous weekend log to {archive}");
                }
                let verb = if receipt.created {
                    "created"
                } else {
                    "appended to"
                };
                println!("{verb} {}", receipt.file);
            }
        }
        Commands::Target => {
            let file = target_for(SystemDate::new().today());
            if args.json {
                println!("{}", json!({ "file": file }));
            } else {
                println!("{file}");
            }
        }
    }

    Ok(())
}
