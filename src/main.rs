use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use nav_trend::data::{load_request, save_payload, write_payload};
use nav_trend::{Cli, Command, EngineConfig, Point, Size, TrendEngine};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::debug!("Parsed arguments: {:?}", args);

    // C. Engine settings
    let config = match &args.config {
        Some(path) => EngineConfig::load_from_path(path)?,
        None => EngineConfig::default(),
    };
    let engine = TrendEngine::new(config);

    match args.command {
        Command::Chart {
            request,
            output,
            pretty,
        } => {
            let chart_request = load_request(&request)?;
            let payload = engine
                .build_chart(&chart_request)
                .with_context(|| format!("Failed to build chart for {:?}", request))?;

            log::info!(
                "{}: {} days, {} spans",
                payload.code,
                payload.axis.len(),
                payload.spans.len()
            );

            match output {
                Some(path) => save_payload(&path, &payload, pretty)?,
                None => {
                    let stdout = io::stdout();
                    let mut handle = stdout.lock();
                    write_payload(&mut handle, &payload, pretty)?;
                    writeln!(handle).context("Failed to write to stdout")?;
                }
            }
        }
        Command::Tooltip {
            x,
            y,
            width,
            height,
            viewport_width,
            viewport_height,
        } => {
            let placement = engine.place_tooltip(
                Point::new(x, y),
                Size::new(width, height),
                Size::new(viewport_width, viewport_height),
            );
            println!(
                "{}",
                serde_json::to_string(&placement).context("Failed to serialize placement")?
            );
        }
    }

    Ok(())
}
