//! Level sets and campaign progression
//!
//! A campaign plays plans in order. Winning a level moves on to the next
//! plan, losing rebuilds the same plan from scratch.

use serde::{Deserialize, Serialize};

use crate::error::CampaignError;
use crate::settings::Settings;
use crate::sim::{Level, LevelParser, Status, tick};

/// Levels shipped with the crate
const BUNDLED_LEVELS: &str = include_str!("../levels/default.json");

/// Ordered list of level plans
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelSet {
    pub plans: Vec<Vec<String>>,
}

impl LevelSet {
    /// Parse a JSON array of plans (each plan an array of row strings)
    pub fn from_json(json: &str) -> Result<Self, CampaignError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn bundled() -> Result<Self, CampaignError> {
        Self::from_json(BUNDLED_LEVELS)
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

/// What happened during a campaign step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignEvent {
    /// Current level still running
    Continue,
    /// Level at this index was won; the next one is loaded
    LevelWon(usize),
    /// Level at this index was lost and has been restarted
    LevelLost(usize),
    /// Final level won
    Completed,
}

/// Plays a [`LevelSet`] level by level
#[derive(Debug)]
pub struct Campaign {
    levels: LevelSet,
    parser: LevelParser,
    settings: Settings,
    index: usize,
    level: Level,
    completed: bool,
}

impl Campaign {
    pub fn new(
        levels: LevelSet,
        mut parser: LevelParser,
        settings: Settings,
    ) -> Result<Self, CampaignError> {
        let first = levels.plans.first().ok_or(CampaignError::Empty)?;
        let level = build_level(&mut parser, first, &settings);
        log::info!("Campaign started with {} levels", levels.len());

        Ok(Self {
            levels,
            parser,
            settings,
            index: 0,
            level,
            completed: false,
        })
    }

    /// Index of the level being played
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn level_mut(&mut self) -> &mut Level {
        &mut self.level
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Advance the current level by `dt` seconds
    pub fn step(&mut self, dt: f64) -> Result<CampaignEvent, CampaignError> {
        if self.completed {
            return Ok(CampaignEvent::Completed);
        }

        tick(&mut self.level, dt, self.settings.max_step)?;
        if !self.level.is_finished() {
            return Ok(CampaignEvent::Continue);
        }

        let finished = self.index;
        match self.level.status() {
            Status::Won => {
                let Some(plan) = self.levels.plans.get(finished + 1) else {
                    log::info!("Campaign completed after {} levels", self.levels.len());
                    self.completed = true;
                    return Ok(CampaignEvent::Completed);
                };
                log::info!("Level {} won", finished + 1);
                self.level = build_level(&mut self.parser, plan, &self.settings);
                self.index = finished + 1;
                Ok(CampaignEvent::LevelWon(finished))
            }
            // is_finished() is false while playing
            Status::Playing => Ok(CampaignEvent::Continue),
            Status::Lost => {
                log::info!("Level {} lost, restarting", finished + 1);
                if let Some(plan) = self.levels.plans.get(finished) {
                    self.level = build_level(&mut self.parser, plan, &self.settings);
                }
                Ok(CampaignEvent::LevelLost(finished))
            }
        }
    }
}

fn build_level(parser: &mut LevelParser, plan: &[String], settings: &Settings) -> Level {
    let mut level = parser.parse(plan);
    level.finish_delay = settings.finish_delay;
    level
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;
    use crate::sim::Dictionary;

    fn campaign(json: &str) -> Campaign {
        let levels = LevelSet::from_json(json).unwrap();
        let parser = LevelParser::with_seed(Dictionary::standard(), 1);
        Campaign::new(levels, parser, Settings::default()).unwrap()
    }

    fn run_until_event(campaign: &mut Campaign) -> CampaignEvent {
        for _ in 0..1000 {
            let event = campaign.step(0.1).unwrap();
            if event != CampaignEvent::Continue {
                return event;
            }
        }
        CampaignEvent::Continue
    }

    #[test]
    fn test_bundled_levels_parse() {
        let levels = LevelSet::bundled().unwrap();
        assert!(!levels.is_empty());

        let mut parser = LevelParser::new(Dictionary::standard());
        for plan in &levels.plans {
            let level = parser.parse(plan);
            assert!(level.player().is_some());
            assert!(!level.no_more_actors(crate::sim::ActorKind::Coin));
        }
    }

    #[test]
    fn test_empty_set_is_rejected() {
        let parser = LevelParser::new(Dictionary::standard());
        let result = Campaign::new(LevelSet::default(), parser, Settings::default());
        assert!(matches!(result, Err(CampaignError::Empty)));
    }

    #[test]
    fn test_bad_json_is_rejected() {
        assert!(matches!(
            LevelSet::from_json(r#"[["ok"], 3]"#),
            Err(CampaignError::Parse(_))
        ));
    }

    #[test]
    fn test_win_advances_then_completes() {
        let mut campaign = campaign(r#"[["o", "@"], ["o ", "@ "]]"#);
        assert_eq!(campaign.index(), 0);

        assert_eq!(run_until_event(&mut campaign), CampaignEvent::LevelWon(0));
        assert_eq!(campaign.index(), 1);
        assert_eq!(campaign.level().status(), Status::Playing);

        assert_eq!(run_until_event(&mut campaign), CampaignEvent::Completed);
        assert!(campaign.is_completed());
        assert_eq!(campaign.step(0.1).unwrap(), CampaignEvent::Completed);
    }

    #[test]
    fn test_loss_restarts_same_level() {
        let mut campaign = campaign(r#"[["!  o", "@   "], ["o", "@"]]"#);

        assert_eq!(run_until_event(&mut campaign), CampaignEvent::LevelLost(0));
        assert_eq!(campaign.index(), 0);
        assert_eq!(campaign.level().status(), Status::Playing);
        assert_eq!(campaign.level().actor_count(), 2);
    }

    #[test]
    fn test_infinite_dt_is_an_error() {
        let mut campaign = campaign(r#"[["o", "@"]]"#);
        assert!(matches!(
            campaign.step(f64::INFINITY),
            Err(CampaignError::Sim(SimError::InvalidTime(_)))
        ));
        assert_eq!(campaign.level().status(), Status::Playing);
    }

    #[test]
    fn test_finish_delay_comes_from_settings() {
        let levels = LevelSet::from_json(r#"[["o", "@"]]"#).unwrap();
        let parser = LevelParser::new(Dictionary::standard());
        let settings = Settings {
            finish_delay: 0.3,
            ..Settings::default()
        };
        let mut campaign = Campaign::new(levels, parser, settings).unwrap();
        assert_eq!(campaign.level().finish_delay, 0.3);

        // Won in the first slice, finished once 0.3s have run out
        assert_eq!(campaign.step(0.2).unwrap(), CampaignEvent::Continue);
        assert_eq!(campaign.level().status(), Status::Won);
        assert_eq!(campaign.step(0.2).unwrap(), CampaignEvent::Completed);
    }
}
