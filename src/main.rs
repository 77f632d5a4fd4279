use clap::Parser;
use sookshma::{cli, config, error, logging, report, simulate};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use sookshma_common::DetectionSimulator;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Detect { images, seed, no_delay, json, with_preview, output } => {
            if !json {
                println!("🌱 sookshma - produce detection\n");
            }

            let seed = seed.or(config.seed);
            let mut simulator = match seed {
                Some(seed) => DetectionSimulator::from_seed(seed),
                None => DetectionSimulator::from_entropy(),
            };
            let options = simulate::SimulationOptions {
                simulate_delay: config.simulate_delay && !no_delay,
                show_progress: !json,
            };

            let mut report = simulate::run_batch(&images, &mut simulator, options).await?;

            if json {
                if !with_preview {
                    report.preview = None;
                }
                let content = serde_json::to_string_pretty(&report)?;
                match output {
                    Some(path) => {
                        std::fs::write(&path, content)?;
                        eprintln!("✔ Saved: {}", path.display());
                    }
                    None => println!("{}", content),
                }
            }
        }

        Commands::Catalog => {
            print!("{}", report::render_catalog());
        }

        Commands::Farmer { lang, alert } => {
            let language = lang.unwrap_or(config.language);
            print!("{}", report::render_farmer(language, alert));
        }

        Commands::Routes => {
            print!("{}", report::render_routes());
        }

        Commands::Config { set_language, set_seed, clear_seed, set_delay, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(language) = set_language {
                config.language = language;
                changed = true;
            }
            if let Some(seed) = set_seed {
                config.seed = Some(seed);
                changed = true;
            }
            if clear_seed {
                config.seed = None;
                changed = true;
            }
            if let Some(delay) = set_delay {
                config.simulate_delay = delay;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ Config saved: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("Config:");
                println!("  language: {}", config.language);
                println!(
                    "  seed: {}",
                    config.seed.map(|s| s.to_string()).unwrap_or_else(|| "random".into())
                );
                println!("  simulate delay: {}", config.simulate_delay);
            }
        }
    }

    Ok(())
}
