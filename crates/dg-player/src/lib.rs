//! dg-player: player collaborator for the dungeon engine.
//!
//! Tracks a player's location, trail, and collected treasure on top of the
//! engine's move queries. The engine stays pure; all movement validation
//! happens here against [`Dungeon::possible_moves`].

use serde::Serialize;
use thiserror::Error;

use dg_core::dungeon::{Coord, Direction, Dungeon, Treasure};

/// Movement failures reported to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    /// No passage exists in the requested direction.
    #[error("no passage {dir} from {from}")]
    Blocked { from: Coord, dir: Direction },

    /// The target cell is not linked to the current one.
    #[error("cell {to} is not reachable from {from}")]
    NotAdjacent { from: Coord, to: Coord },
}

/// A player walking a generated dungeon.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    location: Coord,
    trail: Vec<Coord>,
    satchel: Vec<Treasure>,
}

impl Player {
    /// Place a new player at the dungeon's start position.
    pub fn enter(dungeon: &Dungeon) -> Self {
        let start = dungeon.start_position();
        Self {
            location: start,
            trail: vec![start],
            satchel: Vec::new(),
        }
    }

    pub fn location(&self) -> Coord {
        self.location
    }

    /// Every cell visited so far, in order, starting at the entrance.
    pub fn trail(&self) -> &[Coord] {
        &self.trail
    }

    /// Treasure collected so far.
    pub fn satchel(&self) -> &[Treasure] {
        &self.satchel
    }

    /// Step one cell in the given direction, honoring wraparound links.
    pub fn step(&mut self, dungeon: &Dungeon, dir: Direction) -> Result<Coord, PlayerError> {
        let to = dungeon
            .neighbor(self.location, dir)
            .ok_or(PlayerError::Blocked {
                from: self.location,
                dir,
            })?;
        self.relocate(to);
        Ok(to)
    }

    /// Move to a cell linked to the current one.
    pub fn move_to(&mut self, dungeon: &Dungeon, to: Coord) -> Result<(), PlayerError> {
        if !dungeon.possible_moves(self.location).contains(&to) {
            return Err(PlayerError::NotAdjacent {
                from: self.location,
                to,
            });
        }
        self.relocate(to);
        Ok(())
    }

    /// Collect everything lying in the current cell. Returns the number of
    /// items picked up.
    pub fn pick_up(&mut self, dungeon: &mut Dungeon) -> usize {
        let found = dungeon.take_treasures(self.location);
        let count = found.len();
        self.satchel.extend(found);
        count
    }

    pub fn at_end(&self, dungeon: &Dungeon) -> bool {
        self.location == dungeon.end_position()
    }

    fn relocate(&mut self, to: Coord) {
        self.location = to;
        self.trail.push(to);
    }
}
