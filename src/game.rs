//! Turn-based match between the player and the computer.

use alloc::boxed::Box;
use core::fmt;
use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::common::{EngineError, ShotOutcome};
use crate::config::{GameConfig, SHOT_DRAWS_PER_CELL};

/// Phase of a match. Every public [`Game`] operation is gated on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    Waiting,
    GameStart,
    PlayerTurn,
    ComputerTurn,
    GameOver,
}

/// Winner of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    #[default]
    None,
    Player,
    Computer,
}

impl Winner {
    /// `0` for no winner, `1` for the player, `2` for the computer.
    pub fn code(&self) -> u8 {
        match self {
            Winner::None => 0,
            Winner::Player => 1,
            Winner::Computer => 2,
        }
    }
}

/// Selects one of the two boards owned by a [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardSide {
    Player,
    Computer,
}

/// Running counters, reset by every [`Game::start_game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// Completed computer shots.
    pub turns: usize,
    /// Unhit cells on the player board, as of the last snapshot.
    pub alives: usize,
    /// Player shots that hit.
    pub hits: usize,
    /// Player shots that missed.
    pub misses: usize,
}

type GameoverHook = Box<dyn FnMut(Winner)>;

/// Core game logic holding both boards, the phase and the random source.
pub struct Game<R = SmallRng> {
    state: GameState,
    stats: Stats,
    player_board: Board,
    computer_board: Board,
    winner: Winner,
    on_gameover: Option<GameoverHook>,
    rng: R,
}

impl Game<SmallRng> {
    /// Create a game whose random source is seeded from `config`.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config.board_size, SmallRng::seed_from_u64(config.seed))
    }
}

impl<R: Rng> Game<R> {
    /// Create a game drawing placement and computer shots from `rng`.
    pub fn with_rng(board_size: usize, rng: R) -> Self {
        Self {
            state: GameState::Waiting,
            stats: Stats::default(),
            player_board: Board::new(board_size),
            computer_board: Board::new(board_size),
            winner: Winner::None,
            on_gameover: None,
            rng,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn winner(&self) -> Winner {
        self.winner
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    pub fn board(&self, side: BoardSide) -> &Board {
        match side {
            BoardSide::Player => &self.player_board,
            BoardSide::Computer => &self.computer_board,
        }
    }

    /// Register the single game-over subscriber, replacing any previous one.
    pub fn set_on_gameover<F>(&mut self, hook: F)
    where
        F: FnMut(Winner) + 'static,
    {
        self.on_gameover = Some(Box::new(hook));
    }

    pub fn clear_on_gameover(&mut self) {
        self.on_gameover = None;
    }

    /// Reset everything and auto-place the computer's fleet. Legal from any
    /// state; on failure the previous match is left as it was.
    pub fn start_game(&mut self) -> Result<(), EngineError> {
        let mut fleet = Board::new(self.computer_board.size());
        fleet.init();
        fleet.place_random(&mut self.rng)?;

        self.stats = Stats::default();
        self.winner = Winner::None;
        self.state = GameState::GameStart;
        self.player_board.init();
        self.computer_board = fleet;
        info!("game started on a {0}x{0} board", self.player_board.size());
        Ok(())
    }

    /// Auto-place whatever is left on both boards and hand the first shot to
    /// the player.
    pub fn start_turn(&mut self) -> Result<(), EngineError> {
        self.require(GameState::GameStart)?;
        self.player_board.place_random(&mut self.rng)?;
        self.computer_board.place_random(&mut self.rng)?;
        self.stats.alives = self.player_board.alives();
        self.state = GameState::PlayerTurn;
        info!("player turn, {} alive cells", self.stats.alives);
        Ok(())
    }

    /// Place a piece on one of the boards during setup.
    pub fn place(
        &mut self,
        side: BoardSide,
        piece: &str,
        x: usize,
        y: usize,
        orientation: &str,
    ) -> Result<bool, EngineError> {
        self.require(GameState::GameStart)?;
        let board = match side {
            BoardSide::Player => &mut self.player_board,
            BoardSide::Computer => &mut self.computer_board,
        };
        board.place_piece(piece, x, y, orientation)
    }

    /// Player fires at the computer board. Returns `true` on a hit.
    pub fn shoot(&mut self, x: usize, y: usize) -> Result<bool, EngineError> {
        self.require(GameState::PlayerTurn)?;
        let hit = self.player_board.shoot(&mut self.computer_board, x, y)?;
        self.state = GameState::ComputerTurn;
        if hit {
            self.stats.hits += 1;
            if self.computer_board.alives() == 0 {
                self.finish(Winner::Player);
            }
        } else {
            self.stats.misses += 1;
        }
        Ok(hit)
    }

    /// Computer fires at a uniformly random cell it has not shot yet.
    ///
    /// Fails with [`EngineError::Failed`] when no unshot cell remains.
    pub fn computer_shoot(&mut self) -> Result<ShotOutcome, EngineError> {
        self.require(GameState::ComputerTurn)?;
        if !self.player_board.has_unshot_cell() {
            warn!("computer has no legal target left");
            return Err(EngineError::Failed);
        }
        let size = self.player_board.size();
        for _ in 0..size * size * SHOT_DRAWS_PER_CELL {
            let x = self.rng.random_range(0..size);
            let y = self.rng.random_range(0..size);
            match self.computer_board.shoot(&mut self.player_board, x, y) {
                Ok(hit) => return Ok(self.after_computer_shot(x, y, hit)),
                Err(EngineError::AlreadyShoot) => continue,
                Err(e) => return Err(e),
            }
        }
        warn!("random draws exhausted, choosing among remaining cells");
        let cells = self.player_board.unshot_cells();
        let (x, y) = cells[self.rng.random_range(0..cells.len())];
        let hit = self.computer_board.shoot(&mut self.player_board, x, y)?;
        Ok(self.after_computer_shot(x, y, hit))
    }

    /// Unhit ship cells on one board while a match is in progress.
    pub fn alives(&self, side: BoardSide) -> Result<usize, EngineError> {
        match self.state {
            GameState::PlayerTurn | GameState::ComputerTurn => Ok(self.board(side).alives()),
            _ => Err(EngineError::NotInGameState),
        }
    }

    fn after_computer_shot(&mut self, x: usize, y: usize, hit: bool) -> ShotOutcome {
        self.state = GameState::PlayerTurn;
        self.stats.turns += 1;
        self.stats.alives = self.player_board.alives();
        debug!("computer turn {} at ({}, {}), hit: {}", self.stats.turns, x, y, hit);
        if self.stats.alives == 0 {
            self.finish(Winner::Computer);
        }
        ShotOutcome { x, y, hit }
    }

    fn finish(&mut self, winner: Winner) {
        self.winner = winner;
        self.state = GameState::GameOver;
        info!("game over, winner: {:?}", winner);
        if let Some(hook) = self.on_gameover.as_mut() {
            hook(winner);
        }
    }

    fn require(&self, state: GameState) -> Result<(), EngineError> {
        if self.state == state {
            Ok(())
        } else {
            Err(EngineError::NotInGameState)
        }
    }
}

impl<R> fmt::Debug for Game<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("stats", &self.stats)
            .field("winner", &self.winner)
            .field("player_board", &self.player_board)
            .field("computer_board", &self.computer_board)
            .field("on_gameover", &self.on_gameover.is_some())
            .finish()
    }
}
