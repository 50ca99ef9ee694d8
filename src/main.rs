use std::fs;

use trislice::config::DemoConfig;
use trislice::{DemoError, Engine};

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trislice=info"))
        .format_timestamp(None)
        .init();
}

fn run(config: DemoConfig) -> Result<(), DemoError> {
    let mut engine = Engine::from_config(&config)?;
    log::info!(
        "slicing {} ({} triangles) over {} frames",
        engine.mesh().name(),
        engine.mesh().triangle_count(),
        config.frames
    );

    fs::create_dir_all(&config.out)?;

    let mut uncapped = 0;
    for _ in 0..config.frames {
        let report = match engine.step() {
            Ok(report) => report,
            Err(err) => {
                log::error!("frame {}: {err}", engine.frame());
                return Err(DemoError::Slice(err));
            }
        };
        if !report.capped && report.corners > 0 {
            uncapped += 1;
        }

        let path = config.out.join(format!("slice_{:03}.png", report.frame));
        engine.save_frame(&path)?;
        log::info!(
            "frame {:3}: {} triangles, {} corners -> {}",
            report.frame,
            report.triangles,
            report.corners,
            path.display()
        );
    }

    if uncapped > 0 {
        log::warn!("{uncapped} of {} frames had a cross-section that could not be capped", config.frames);
    }
    Ok(())
}

fn main() -> Result<(), DemoError> {
    init_logging();

    let config = match DemoConfig::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(DemoError::Args(err)) => err.exit(),
        Err(err) => return Err(err),
    };
    run(config)
}
