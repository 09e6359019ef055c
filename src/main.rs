// fieldbook - Species capture logbook client
// Author: kelexine (https://github.com/kelexine)

use anyhow::Result;
use clap::Parser;
use fieldbook::catalog;
use fieldbook::cli::{Args, Command, ExportFormat};
use fieldbook::config::AppConfig;
use fieldbook::media;
use fieldbook::resolver::UrlResolver;
use fieldbook::storage::StorageClient;
use fieldbook::utils::{logging, version};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let config = AppConfig::load()?;

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting fieldbook v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Run the requested command
    match args.command {
        Command::Export {
            input,
            format,
            output,
        } => {
            let captures = catalog::load_catalog(&input)?;
            info!("Loaded {} captures from {}", captures.len(), input.display());

            let rendered = match format {
                ExportFormat::Csv => catalog::export::to_csv(&captures),
                ExportFormat::Json => catalog::export::to_json(&captures)?,
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    info!("Wrote export to {}", path.display());
                }
                None => print!("{}", rendered),
            }
        }

        Command::Resolve { references } => {
            let storage = StorageClient::new(&config.storage, &config.retry)?;
            let resolver = UrlResolver::new(storage, &config.resolver, &config.limits);

            let resolved = resolver
                .resolve_many(references.iter().map(String::as_str))
                .await;

            for reference in &references {
                let url = resolved
                    .get(reference)
                    .cloned()
                    .unwrap_or_else(|| reference.clone());
                if media::is_embedded(reference) {
                    println!("{}\t<embedded image>", reference);
                } else {
                    println!(
                        "{}\t{}",
                        reference,
                        version::with_cache_bust(&url, env!("CARGO_PKG_VERSION"))
                    );
                }
            }

            let stats = resolver.stats();
            debug!(
                "Resolver stats: {} hits, {} misses, {} creates, {} fallbacks",
                stats.hits, stats.misses, stats.creates, stats.fallbacks
            );
        }

        Command::Inspect { file } => {
            let bytes = std::fs::read(&file)?;
            let report = media::quality::assess(&bytes)?;
            println!(
                "{}: {}x{}, mean luma {:.1} -> {}",
                file.display(),
                report.width,
                report.height,
                report.mean_luma,
                report.verdict.as_str()
            );
        }
    }

    Ok(())
}
