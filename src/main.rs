//! Lava Run headless driver
//!
//! Plays the bundled campaign at a fixed timestep and logs what happens.
//! There is no input, so the player stands still; this is a smoke run of
//! the simulation, not a playable game.
//!
//! Usage: `lava-run [settings.json]`

use std::process::ExitCode;

use lava_run::consts::SIM_DT;
use lava_run::sim::{Dictionary, LevelParser};
use lava_run::{Campaign, CampaignError, CampaignEvent, LevelSet, Settings};

/// Stop after this many ticks (one minute of game time)
const MAX_TICKS: u32 = 60 * 60;

fn load_settings() -> Settings {
    let Some(path) = std::env::args().nth(1) else {
        return Settings::default();
    };
    match std::fs::read_to_string(&path).map(|json| Settings::from_json(&json)) {
        Ok(Ok(settings)) => {
            log::info!("Loaded settings from {}", path);
            settings
        }
        Ok(Err(e)) => {
            log::warn!("Bad settings file {}: {}; using defaults", path, e);
            Settings::default()
        }
        Err(e) => {
            log::warn!("Cannot read {}: {}; using defaults", path, e);
            Settings::default()
        }
    }
}

fn run(settings: Settings) -> Result<(), CampaignError> {
    let parser = LevelParser::with_seed(Dictionary::standard(), settings.seed);
    let mut campaign = Campaign::new(LevelSet::bundled()?, parser, settings)?;

    for tick in 0..MAX_TICKS {
        match campaign.step(SIM_DT)? {
            CampaignEvent::Continue => {}
            CampaignEvent::LevelWon(i) => log::info!("Tick {}: won level {}", tick, i + 1),
            CampaignEvent::LevelLost(i) => log::info!("Tick {}: lost level {}", tick, i + 1),
            CampaignEvent::Completed => {
                log::info!("Tick {}: campaign completed", tick);
                return Ok(());
            }
        }
    }

    let level = campaign.level();
    log::info!(
        "Stopped after {} ticks on level {} ({:?}, {} actors left)",
        MAX_TICKS,
        campaign.index() + 1,
        level.status(),
        level.actor_count()
    );
    Ok(())
}

fn main() -> ExitCode {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Lava Run starting...");

    match run(load_settings()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
