use alloc::vec::Vec;

use log::{debug, info};
use rand::Rng;

use crate::{
    board::Board,
    cell::CellKind,
    common::{BoardError, Coord},
    config::FleetConfig,
    ship::{Ship, ShipId},
};

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
}

/// How a finished session compares against the stored best score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    NewRecord,
    TiedRecord,
    NormalWin,
}

/// Classify a winning shot count against the best score so far.
pub fn classify_outcome(shots: u32, best: Option<u32>) -> Outcome {
    match best {
        None => Outcome::NewRecord,
        Some(best) if shots < best => Outcome::NewRecord,
        Some(best) if shots == best => Outcome::TiedRecord,
        Some(_) => Outcome::NormalWin,
    }
}

/// Everything a presentation layer needs to render one effective shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotReport {
    pub coord: Coord,
    pub hit: bool,
    pub destroyed: Option<ShipId>,
    /// Cells revealed by this shot, the target first.
    pub revealed: Vec<Coord>,
    pub session_over: bool,
    pub outcome: Option<Outcome>,
}

/// Counters for the stats panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub shots: u32,
    pub hits: u32,
    pub remaining_ships: usize,
    pub last_shot: Option<Coord>,
}

impl SessionStats {
    /// Hit percentage, `None` before the first shot.
    pub fn accuracy(&self) -> Option<f64> {
        (self.shots > 0).then(|| self.hits as f64 / self.shots as f64 * 100.0)
    }
}

/// One game from fresh placement to victory. Restarting means building a new one.
pub struct GameSession {
    config: FleetConfig,
    board: Board,
    fleet: Vec<Ship>,
    sunk: Vec<Ship>,
    status: GameStatus,
    shots: u32,
    hits: u32,
    last_shot: Option<Coord>,
    best_score: Option<u32>,
    outcome: Option<Outcome>,
}

impl GameSession {
    /// Place a fresh fleet described by `config` using `rng`.
    /// `best_score` is the stored record, if any, used to classify the win.
    pub fn new<R: Rng + ?Sized>(
        config: FleetConfig,
        rng: &mut R,
        best_score: Option<u32>,
    ) -> Result<Self, BoardError> {
        config.validate()?;
        let fleet: Vec<Ship> = config
            .ship_lengths()
            .into_iter()
            .enumerate()
            .map(|(i, decks)| Ship::new(ShipId(i as u8 + 1), decks))
            .collect();
        let mut board = Board::new(config.board_size);
        board.place_fleet(rng, &fleet, config.max_attempts)?;
        debug!("placed {} ships on {}x{} board", fleet.len(), config.board_size, config.board_size);
        Ok(Self {
            config,
            board,
            fleet,
            sunk: Vec::new(),
            status: GameStatus::InProgress,
            shots: 0,
            hits: 0,
            last_shot: None,
            best_score,
            outcome: None,
        })
    }

    /// Standard 10x10 game with the classic fleet.
    pub fn standard<R: Rng + ?Sized>(rng: &mut R, best_score: Option<u32>) -> Result<Self, BoardError> {
        Self::new(FleetConfig::default(), rng, best_score)
    }

    /// Fire at (`col`, `row`).
    ///
    /// Out-of-range or already revealed targets are ignored and yield `None`.
    ///
    /// # Panics
    ///
    /// Panics if the session is already won.
    pub fn fire(&mut self, col: i64, row: i64) -> Option<ShotReport> {
        assert!(
            self.status == GameStatus::InProgress,
            "fire called on a finished session"
        );
        let coord = Coord::checked(col, row, self.board.size())?;
        let kind = self.board.fire_at(coord)?;

        self.shots += 1;
        self.last_shot = Some(coord);
        let mut revealed = alloc::vec![coord];
        let mut destroyed = None;

        let hit = if let CellKind::Ship(id) = kind {
            self.hits += 1;
            let idx = self
                .fleet
                .iter()
                .position(|s| s.id() == id)
                .unwrap_or_else(|| unreachable!("ship {} hit outside the active fleet", id));
            if self.fleet[idx].hit() {
                let ship = self.fleet.remove(idx);
                revealed.extend(self.board.reveal_ring(id));
                info!("ship {} ({} decks) destroyed at {}", id, ship.decks(), coord);
                self.sunk.push(ship);
                destroyed = Some(id);
            }
            true
        } else {
            false
        };

        if self.fleet.is_empty() {
            self.status = GameStatus::Won;
            revealed.extend(self.board.reveal_all());
            let outcome = classify_outcome(self.shots, self.best_score);
            info!("all ships destroyed in {} shots: {:?}", self.shots, outcome);
            self.outcome = Some(outcome);
        }

        Some(ShotReport {
            coord,
            hit,
            destroyed,
            revealed,
            session_over: self.is_over(),
            outcome: self.outcome,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn remaining_ships(&self) -> usize {
        self.fleet.len()
    }

    pub fn shots(&self) -> u32 {
        self.shots
    }

    pub fn best_score(&self) -> Option<u32> {
        self.best_score
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Shot count to persist as the new best, present only after a record win.
    pub fn record_to_commit(&self) -> Option<u32> {
        (self.outcome == Some(Outcome::NewRecord)).then_some(self.shots)
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            shots: self.shots,
            hits: self.hits,
            remaining_ships: self.fleet.len(),
            last_shot: self.last_shot,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    /// Ships still afloat.
    pub fn fleet(&self) -> &[Ship] {
        &self.fleet
    }

    /// Destroyed ships in order of sinking.
    pub fn sunk(&self) -> &[Ship] {
        &self.sunk
    }
}
