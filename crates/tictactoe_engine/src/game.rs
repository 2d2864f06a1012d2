//! Match orchestration: players, turns and termination.

use crate::board::Board;
use crate::error::MatchError;
use crate::phases::{Outcome, Phase};
use crate::rules;
use crate::snapshot::MatchSnapshot;
use crate::types::{Mark, Player};
use tracing::{debug, info, instrument, warn};

/// A single tic-tac-toe match between two seated players.
///
/// The match owns its board and resets it between games rather than
/// replacing it. Seat 0 always plays X and moves first.
#[derive(Debug, Clone, Default)]
pub struct Match {
    board: Board,
    players: Option<[Player; 2]>,
    turn: Mark,
    phase: Phase,
    history: Vec<usize>,
}

impl Match {
    /// Creates an idle match with an empty board and no players.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an idle match around an existing board, which is emptied.
    #[instrument(skip(board))]
    pub fn with_board(mut board: Board) -> Self {
        board.reset();
        Self {
            board,
            ..Self::default()
        }
    }

    /// Seats two new players (X = `name1`, O = `name2`) and starts a fresh game.
    ///
    /// Names are taken as given; trimming and rejecting blanks is up to the caller.
    #[instrument(skip(self, name1, name2))]
    pub fn start_game(&mut self, name1: impl Into<String>, name2: impl Into<String>) {
        let players = [Player::new(name1, Mark::X), Player::new(name2, Mark::O)];
        info!(
            player_x = %players[0].name(),
            player_o = %players[1].name(),
            "Game started"
        );
        self.players = Some(players);
        self.restart_board();
        self.phase = Phase::InProgress;
    }

    /// The player whose turn it is.
    ///
    /// After a finishing move this stays the player who made it.
    pub fn current_player(&self) -> Result<&Player, MatchError> {
        self.players
            .as_ref()
            .map(|players| &players[self.turn.seat()])
            .ok_or(MatchError::NotStarted)
    }

    /// Plays the current player's mark at `index`.
    ///
    /// Returns `false` when the move is refused, in which case nothing
    /// changed. Use [`Match::try_play_round`] for the reason.
    pub fn play_round(&mut self, index: usize) -> bool {
        self.try_play_round(index).is_ok()
    }

    /// Plays the current player's mark at `index` and returns the new phase.
    ///
    /// # Errors
    ///
    /// - [`MatchError::GameOver`] if the match already has an outcome.
    /// - [`MatchError::NotStarted`] if no players are seated.
    /// - [`MatchError::CellUnavailable`] if the cell is taken or off the board.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn try_play_round(&mut self, index: usize) -> Result<Phase, MatchError> {
        match self.phase {
            Phase::Over(_) => {
                warn!("Game over! Start a new game.");
                return Err(MatchError::GameOver);
            }
            Phase::Idle => {
                warn!("Move attempted before a game was started");
                return Err(MatchError::NotStarted);
            }
            Phase::InProgress => {}
        }

        let mark = self.turn;
        if !self.board.set_mark(index, mark) {
            warn!(index, "Position already taken or invalid");
            return Err(MatchError::CellUnavailable(index));
        }
        self.history.push(index);
        if let Ok(player) = self.current_player() {
            info!(player = %player.name(), %mark, index, "Mark placed");
        }

        if let Some(winner) = self.check_winner() {
            self.phase = Phase::Over(Outcome::Winner(winner));
            info!(%winner, "Game won");
            debug!(board = %self.board, "Final board");
        } else if self.check_tie() {
            self.phase = Phase::Over(Outcome::Tie);
            info!("It's a tie");
            debug!(board = %self.board, "Final board");
        } else {
            self.turn = self.turn.opponent();
            if let Ok(next) = self.current_player() {
                debug!(player = %next.name(), mark = %next.mark(), "Current player");
            }
        }

        #[cfg(debug_assertions)]
        self.verify_invariants();

        Ok(self.phase)
    }

    /// The mark holding three in a row, scanning lines in catalogue order.
    pub fn check_winner(&self) -> Option<Mark> {
        rules::check_winner(&self.board)
    }

    /// True if the board is full and no line is complete.
    pub fn check_tie(&self) -> bool {
        rules::is_tie(&self.board)
    }

    /// Soft reset: same players, empty board, X to move.
    ///
    /// Without seated players the match stays idle.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.restart_board();
        self.phase = if self.players.is_some() {
            Phase::InProgress
        } else {
            Phase::Idle
        };
        info!(phase = ?self.phase, "Game reset");
    }

    /// Hard reset: unseats both players and returns to idle.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.restart_board();
        self.players = None;
        self.phase = Phase::Idle;
        info!("Game cleared, waiting for players");
    }

    /// True once the match has an outcome.
    pub fn is_game_over(&self) -> bool {
        self.phase.is_over()
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seated players (X first), if a game has been started.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// Mark whose turn it is.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Indices played in this game, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Serializable read-only view for presentation layers.
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::from(self)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn restart_board(&mut self) {
        self.board.reset();
        self.history.clear();
        self.turn = Mark::X;
    }

    #[cfg(debug_assertions)]
    fn verify_invariants(&self) {
        use crate::invariants::{InvariantSet, MatchInvariants};

        let result = MatchInvariants::check_all(self);
        if let Err(violations) = &result {
            for violation in violations {
                warn!(invariant = %violation.description, "Invariant violated");
            }
        }
        debug_assert!(result.is_ok(), "Match invariants violated");
    }
}
