//! Turns textual level plans into [`Level`]s
//!
//! A plan is a list of rows, top row first, one character per cell.
//! `x` is a wall, `!` is lava and a space is empty. Any other character is
//! looked up in the parser's [`Dictionary`]; unknown characters are empty
//! space. Parsing never fails: factories that error out or build a
//! malformed actor are skipped.

use std::collections::HashMap;
use std::fmt;

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use super::actor::Actor;
use super::actors::{Coin, Fireball, Player};
use super::grid::{Grid, Obstacle};
use super::state::Level;
use super::vector::Vector;
use crate::consts::DEFAULT_SEED;
use crate::error::SimError;

/// Builds an actor for the cell at the given position
pub type ActorFactory = Box<dyn Fn(Vector, &mut dyn RngCore) -> Result<Box<dyn Actor>, SimError>>;

fn boxed<A: Actor + 'static>(actor: Result<A, SimError>) -> Result<Box<dyn Actor>, SimError> {
    actor.map(|a| Box::new(a) as Box<dyn Actor>)
}

/// Symbol to actor factory table
#[derive(Default)]
pub struct Dictionary {
    factories: HashMap<char, ActorFactory>,
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut symbols: Vec<_> = self.factories.keys().collect();
        symbols.sort();
        f.debug_struct("Dictionary").field("symbols", &symbols).finish()
    }
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock symbol table
    ///
    /// | symbol | actor |
    /// |---|---|
    /// | `@` | player |
    /// | `o` | coin |
    /// | `=` | horizontal fireball |
    /// | `\|` | vertical fireball |
    /// | `v` | fire rain |
    pub fn standard() -> Self {
        let mut dictionary = Self::new();
        dictionary.insert('@', |pos, _| boxed(Player::new(pos)));
        dictionary.insert('o', |pos, rng| boxed(Coin::new(pos, rng)));
        dictionary.insert('=', |pos, _| boxed(Fireball::horizontal(pos)));
        dictionary.insert('|', |pos, _| boxed(Fireball::vertical(pos)));
        dictionary.insert('v', |pos, _| boxed(Fireball::rain(pos)));
        dictionary
    }

    /// Map `symbol` to `factory`, replacing any previous entry
    pub fn insert<F>(&mut self, symbol: char, factory: F)
    where
        F: Fn(Vector, &mut dyn RngCore) -> Result<Box<dyn Actor>, SimError> + 'static,
    {
        self.factories.insert(symbol, Box::new(factory));
    }

    pub fn get(&self, symbol: char) -> Option<&ActorFactory> {
        self.factories.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

/// Plan parser with its own symbol table and coin RNG
#[derive(Debug)]
pub struct LevelParser {
    dictionary: Dictionary,
    rng: Pcg32,
}

impl LevelParser {
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_seed(dictionary, DEFAULT_SEED)
    }

    /// Parser whose random actor properties derive from `seed`
    pub fn with_seed(dictionary: Dictionary, seed: u64) -> Self {
        Self {
            dictionary,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn actor_from_symbol(&self, symbol: char) -> Option<&ActorFactory> {
        self.dictionary.get(symbol)
    }

    pub fn obstacle_from_symbol(symbol: char) -> Option<Obstacle> {
        Obstacle::from_symbol(symbol)
    }

    pub fn create_grid<S: AsRef<str>>(&self, plan: &[S]) -> Grid {
        Grid::new(
            plan.iter()
                .map(|row| row.as_ref().chars().map(Self::obstacle_from_symbol).collect())
                .collect(),
        )
    }

    /// Actors for every mapped symbol, in row-major order
    pub fn create_actors<S: AsRef<str>>(&mut self, plan: &[S]) -> Vec<Box<dyn Actor>> {
        let Self { dictionary, rng } = self;
        let rng: &mut dyn RngCore = rng;
        let mut actors = Vec::new();

        for (y, row) in plan.iter().enumerate() {
            for (x, symbol) in row.as_ref().chars().enumerate() {
                let Some(factory) = dictionary.get(symbol) else {
                    continue;
                };
                let pos = Vector::new(x as f64, y as f64);
                match factory(pos, &mut *rng).and_then(|actor| actor.body().check().map(|()| actor)) {
                    Ok(actor) => actors.push(actor),
                    Err(e) => log::debug!("Skipping '{}' at ({}, {}): {}", symbol, x, y, e),
                }
            }
        }

        actors
    }

    pub fn parse<S: AsRef<str>>(&mut self, plan: &[S]) -> Level {
        let grid = self.create_grid(plan);
        let actors = self.create_actors(plan);
        log::debug!(
            "Parsed {}x{} level with {} actors",
            grid.width(),
            grid.height(),
            actors.len()
        );
        Level::new(grid, actors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::actor::{ActorKind, Body, Prop};
    use crate::sim::state::Status;

    #[test]
    fn test_symbol_lookups() {
        let parser = LevelParser::new(Dictionary::standard());
        assert!(parser.actor_from_symbol('@').is_some());
        assert!(parser.actor_from_symbol('x').is_none());
        assert!(parser.actor_from_symbol('#').is_none());
        assert_eq!(LevelParser::obstacle_from_symbol('x'), Some(Obstacle::Wall));
        assert_eq!(LevelParser::obstacle_from_symbol('!'), Some(Obstacle::Lava));
        assert_eq!(LevelParser::obstacle_from_symbol('@'), None);
        assert_eq!(parser.dictionary().len(), 5);
    }

    #[test]
    fn test_parse_small_plan() {
        let mut dictionary = Dictionary::new();
        dictionary.insert('@', |pos, _| boxed(Player::new(pos)));
        let mut parser = LevelParser::new(dictionary);

        let level = parser.parse(&["  @ ", " x!x "]);
        assert_eq!(level.height(), 2);
        assert_eq!(level.width(), 5);

        let grid = level.grid();
        assert_eq!(grid.cell(0, 1), None);
        assert_eq!(grid.cell(1, 1), Some(Obstacle::Wall));
        assert_eq!(grid.cell(2, 1), Some(Obstacle::Lava));
        assert_eq!(grid.cell(3, 1), Some(Obstacle::Wall));
        assert_eq!(grid.cell(2, 0), None);

        assert_eq!(level.actor_count(), 1);
        let player = level.player().unwrap();
        assert_eq!(player.kind(), ActorKind::Player);
        assert_eq!(player.pos(), Vector::new(2.0, -0.5));
    }

    #[test]
    fn test_unknown_symbols_are_empty() {
        let mut parser = LevelParser::new(Dictionary::new());
        let level = parser.parse(&["ab#", "?@"]);
        assert_eq!(level.actor_count(), 0);
        assert!(level.grid().rows().iter().flatten().all(Option::is_none));
        assert_eq!(level.width(), 3);
    }

    #[test]
    fn test_actors_in_plan_order() {
        let mut parser = LevelParser::new(Dictionary::standard());
        let level = parser.parse(&[" o =", "|  v", "@   "]);
        let kinds: Vec<_> = level.actors().map(|(_, a)| a.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ActorKind::Coin,
                ActorKind::Fireball,
                ActorKind::Fireball,
                ActorKind::Fireball,
                ActorKind::Player,
            ]
        );
        let speeds: Vec<_> = level.actors().map(|(_, a)| a.speed()).collect();
        assert_eq!(speeds[1], Vector::new(2.0, 0.0));
        assert_eq!(speeds[2], Vector::new(0.0, 2.0));
        assert_eq!(speeds[3], Vector::new(0.0, 3.0));
    }

    #[test]
    fn test_bad_factories_are_skipped() {
        let mut dictionary = Dictionary::new();
        dictionary.insert('e', |_, _| Err(SimError::InvalidActor("broken".into())));
        dictionary.insert('n', |_, _| {
            let mut prop = Prop::default();
            prop.body = Body {
                pos: Vector::new(f64::NAN, 0.0),
                ..Body::default()
            };
            Ok(Box::new(prop) as Box<dyn Actor>)
        });
        dictionary.insert('p', |pos, _| {
            boxed(Prop::new(pos, Vector::ONE, Vector::ZERO))
        });
        let mut parser = LevelParser::new(dictionary);

        let level = parser.parse(&["enp"]);
        assert_eq!(level.actor_count(), 1);
        let (_, actor) = level.actors().next().unwrap();
        assert_eq!(actor.pos(), Vector::new(2.0, 0.0));
    }

    #[test]
    fn test_ragged_rows() {
        let mut parser = LevelParser::new(Dictionary::standard());
        let level = parser.parse(&["x", "x  o", ""]);
        assert_eq!(level.width(), 4);
        assert_eq!(level.height(), 3);
        assert_eq!(level.actor_count(), 1);
        assert_eq!(level.status(), Status::Playing);
    }

    #[test]
    fn test_same_seed_same_coins() {
        let plan = ["o o o"];
        let mut a = LevelParser::with_seed(Dictionary::standard(), 42);
        let mut b = LevelParser::with_seed(Dictionary::standard(), 42);
        let mut la = a.parse(&plan);
        let mut lb = b.parse(&plan);

        la.act_all(0.3).unwrap();
        lb.act_all(0.3).unwrap();
        let pa: Vec<_> = la.actors().map(|(_, c)| c.pos()).collect();
        let pb: Vec<_> = lb.actors().map(|(_, c)| c.pos()).collect();
        assert_eq!(pa, pb);
    }
}
