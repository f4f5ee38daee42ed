use crate::ai::{Agent, ValueStore};
use crate::checkpoint::{flush_store, TablePersistence};
use crate::error::SessionError;
use crate::game::{has_four, Board, GameOutcome, Player};
use crate::session::reward::{compute_reward, RewardConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Ended(GameOutcome),
}

/// What happened during one half-move.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    pub player: Player,
    pub column: usize,
    pub row: usize,
    pub reward: f64,
    /// Value stored for (pre-move state, column) after the update.
    pub new_value: f64,
}

/// Hooks for presenting a game. All methods default to no-ops.
pub trait SessionObserver {
    fn on_start(&mut self, _board: &Board) {}

    fn before_move(&mut self, _board: &Board, _player: Player, _automated: bool) {}

    fn after_move(&mut self, _board: &Board, _report: &TurnReport) {}

    fn on_end(&mut self, _board: &Board, _outcome: GameOutcome) {}
}

/// Observer that ignores every event.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}

/// One game of Connect Four with a learning update after every half-move.
pub struct Session<'a> {
    board: Board,
    active: Player,
    state: SessionState,
    moves: usize,
    store: &'a mut ValueStore,
    rewards: RewardConfig,
    persistence: Option<&'a dyn TablePersistence>,
}

impl<'a> Session<'a> {
    /// Fresh game; the human side moves first.
    pub fn new(store: &'a mut ValueStore, rewards: RewardConfig) -> Self {
        Self::from_position(Board::new(), Player::Human, store, rewards)
    }

    /// Continue from an existing position with `active` to move.
    pub fn from_position(
        board: Board,
        active: Player,
        store: &'a mut ValueStore,
        rewards: RewardConfig,
    ) -> Self {
        let state = if has_four(&board, active.other()) {
            SessionState::Ended(GameOutcome::Winner(active.other()))
        } else if has_four(&board, active) {
            SessionState::Ended(GameOutcome::Winner(active))
        } else if board.is_full() {
            SessionState::Ended(GameOutcome::Draw)
        } else {
            SessionState::InProgress
        };

        Session {
            board,
            active,
            state,
            moves: 0,
            store,
            rewards,
            persistence: None,
        }
    }

    /// Flush the value table to `persistence` when the game ends.
    pub fn with_persistence(mut self, persistence: &'a dyn TablePersistence) -> Self {
        self.persistence = Some(persistence);
        self
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Half-moves played in this session.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    pub fn store(&self) -> &ValueStore {
        &*self.store
    }

    /// Play one half-move for the active player using `agent`.
    pub fn play_turn(
        &mut self,
        agent: &mut dyn Agent,
        observer: &mut dyn SessionObserver,
    ) -> Result<TurnReport, SessionError> {
        if self.state != SessionState::InProgress {
            return Err(SessionError::GameOver);
        }

        let player = self.active;
        let before = self.board.state_key();

        observer.before_move(&self.board, player, agent.is_automated());
        let column = agent.select_action(&self.board, player, &*self.store)?;
        let row = self.board.drop_piece(column, player)?;
        self.moves += 1;

        let reward = compute_reward(&self.board, player, &self.rewards);
        let after = self.board.state_key();
        let new_value = self.store.update(&before, column, reward, &after);

        if has_four(&self.board, player) {
            self.state = SessionState::Ended(GameOutcome::Winner(player));
        } else if self.board.valid_columns().is_empty() {
            self.state = SessionState::Ended(GameOutcome::Draw);
        } else {
            self.active = player.other();
        }

        let report = TurnReport {
            player,
            column,
            row,
            reward,
            new_value,
        };
        log::debug!(
            "{} -> column {} (reward {}, Q {:.4})",
            player.name(),
            column,
            reward,
            new_value
        );
        observer.after_move(&self.board, &report);
        Ok(report)
    }

    /// Play until the game ends, then flush the value table.
    pub fn run(
        &mut self,
        human: &mut dyn Agent,
        ai: &mut dyn Agent,
        observer: &mut dyn SessionObserver,
    ) -> Result<GameOutcome, SessionError> {
        observer.on_start(&self.board);

        let outcome = loop {
            if let SessionState::Ended(outcome) = self.state {
                break outcome;
            }
            let agent: &mut dyn Agent = match self.active {
                Player::Human => &mut *human,
                Player::Ai => &mut *ai,
            };
            self.play_turn(agent, observer)?;
        };

        match outcome {
            GameOutcome::Winner(p) => log::info!("{} wins after {} moves", p.name(), self.moves),
            GameOutcome::Draw => log::info!("Draw after {} moves", self.moves),
        }
        observer.on_end(&self.board, outcome);

        if let Some(persistence) = self.persistence {
            flush_store(persistence, &*self.store);
        }
        Ok(outcome)
    }
}
