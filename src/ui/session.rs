//! Game session management for the Isolation GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::config::AgentConfig;
use crate::engine::{SearchEngine, SearchOutcome};
use crate::eval::HeuristicEvaluator;
use crate::search::Termination;
use crate::{Board, Player, Pos, SearchConfig};

type Agent = SearchEngine<HeuristicEvaluator>;

/// Who controls each side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    HumanVsAgent { human: Player },
    AgentVsAgent,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::HumanVsAgent {
            human: Player::First,
        }
    }
}

/// Agent computation state
pub enum AgentState {
    Idle,
    Thinking {
        /// The engine comes back with its outcome so heuristic memo state
        /// survives between turns
        receiver: Receiver<(Agent, SearchOutcome<Pos>)>,
        player: Player,
        start_time: Instant,
    },
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Loser had no legal move on their turn
    Isolated { winner: Player },
    /// Agent failed to produce a move before its deadline
    Forfeit { winner: Player },
}

impl GameResult {
    pub fn winner(self) -> Player {
        match self {
            GameResult::Isolated { winner } | GameResult::Forfeit { winner } => winner,
        }
    }
}

/// Turn timer
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub agent_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            agent_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.start_time = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// One game of Isolation plus the agents playing it
pub struct GameSession {
    pub board: Board,
    pub mode: GameMode,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<Pos>,
    pub last_report: Option<(Player, SearchOutcome<Pos>)>,
    pub agent_state: AgentState,
    pub move_timer: MoveTimer,
    pub message: Option<String>,

    config: AgentConfig,
    search: SearchConfig,
    initial: Board,
    /// Idle engines per side; `None` while one is out on the worker thread
    agents: [Option<Agent>; 2],
}

impl GameSession {
    pub fn new(
        mode: GameMode,
        config: AgentConfig,
        search: SearchConfig,
        initial: Board,
    ) -> Self {
        let agents = [
            Some(Self::fresh_agent(&config, search)),
            Some(Self::fresh_agent(&config, search)),
        ];
        Self {
            board: initial,
            mode,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_report: None,
            agent_state: AgentState::Idle,
            move_timer: MoveTimer::default(),
            message: None,
            config,
            search,
            initial,
            agents,
        }
    }

    fn fresh_agent(config: &AgentConfig, search: SearchConfig) -> Agent {
        SearchEngine::new(search, config.heuristic.evaluator())
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Start over in `mode`. Any search still running is abandoned.
    pub fn restart(&mut self, mode: GameMode) {
        info!(?mode, width = self.initial.width(), height = self.initial.height(), "new game");
        *self = Self::new(mode, self.config.clone(), self.search, self.initial);
    }

    pub fn current_turn(&self) -> Player {
        self.board.active_player()
    }

    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::HumanVsAgent { human } => self.current_turn() == human,
            GameMode::AgentVsAgent => false,
        }
    }

    pub fn is_agent_turn(&self) -> bool {
        !self.is_human_turn()
    }

    pub fn is_agent_thinking(&self) -> bool {
        matches!(self.agent_state, AgentState::Thinking { .. })
    }

    /// Legal destinations for the side to move
    pub fn legal_moves(&self) -> Vec<Pos> {
        self.board.legal_moves()
    }

    /// Attempt a human move
    pub fn try_move(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }
        if self.is_agent_thinking() {
            return Err("Agent is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        self.execute_move(pos).map_err(|err| err.to_string())
    }

    /// Play `pos` for the side to move
    fn execute_move(&mut self, pos: Pos) -> Result<(), crate::BoardError> {
        let player = self.current_turn();
        self.board.apply_move(pos)?;

        self.move_history.push(pos);
        self.last_move = Some(pos);
        self.message = None;
        info!(%player, %pos, move_count = self.board.move_count(), "move played");

        if let Some(winner) = self.board.winner() {
            info!(%winner, "game over");
            self.game_over = Some(GameResult::Isolated { winner });
            self.move_timer.stop();
        } else {
            self.move_timer.start();
        }
        Ok(())
    }

    /// Hand the side to move to a worker thread
    pub fn start_agent_thinking(&mut self) {
        if !self.is_agent_turn() || self.is_agent_thinking() || self.game_over.is_some() {
            return;
        }

        let player = self.current_turn();
        let Some(mut agent) = self.agents[player.index()].take() else {
            return;
        };
        let board = self.board;
        let budget = self.config.turn_budget();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let outcome = agent.get_move_within(&board, budget);
            // Receiver is gone if the game was restarted meanwhile
            let _ = tx.send((agent, outcome));
        });

        self.agent_state = AgentState::Thinking {
            receiver: rx,
            player,
            start_time: Instant::now(),
        };
    }

    /// Pick up the agent's answer if it is ready
    pub fn check_agent_result(&mut self) {
        let received = match &self.agent_state {
            AgentState::Thinking {
                receiver,
                player,
                start_time,
            } => match receiver.try_recv() {
                Ok(reply) => Some((reply, *player, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    let player = *player;
                    warn!(%player, "agent thread exited without a reply");
                    self.agents[player.index()] = Some(Self::fresh_agent(&self.config, self.search));
                    self.agent_state = AgentState::Idle;
                    self.message = Some("Agent error".to_string());
                    return;
                }
            },
            AgentState::Idle => None,
        };

        if let Some(((agent, outcome), player, elapsed)) = received {
            self.agent_state = AgentState::Idle;
            self.agents[player.index()] = Some(agent);
            self.move_timer.agent_thinking_time = Some(elapsed);
            self.apply_agent_outcome(player, outcome);
        }
    }

    fn apply_agent_outcome(&mut self, player: Player, outcome: SearchOutcome<Pos>) {
        let best_move = outcome.best_move;
        let termination = outcome.termination;
        self.last_report = Some((player, outcome));

        match best_move {
            Some(pos) => {
                if let Err(err) = self.execute_move(pos) {
                    warn!(%player, %err, "agent returned an illegal move");
                    self.message = Some(err.to_string());
                }
            }
            None if termination == Termination::NoLegalMoves => {
                let winner = player.opponent();
                self.game_over = Some(GameResult::Isolated { winner });
            }
            None => {
                // Cancelled before depth 1 finished on a playable position
                let winner = player.opponent();
                info!(%player, %winner, "agent forfeits on time");
                self.game_over = Some(GameResult::Forfeit { winner });
                self.message = Some(format!("{player} ran out of time"));
            }
        }
    }

    /// Elapsed time of the running search
    pub fn agent_thinking_elapsed(&self) -> Option<Duration> {
        match &self.agent_state {
            AgentState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AgentState::Idle => None,
        }
    }

    /// Take back the last move, or the last two against an agent so the
    /// human is on move again.
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_agent_thinking() {
            return;
        }

        let undo_count = match self.mode {
            GameMode::HumanVsAgent { human } => {
                let last_mover = self.current_turn().opponent();
                if last_mover == human || self.move_history.len() < 2 {
                    1
                } else {
                    2
                }
            }
            GameMode::AgentVsAgent => 1,
        };

        let keep = self.move_history.len().saturating_sub(undo_count);
        let moves: Vec<Pos> = self.move_history.drain(..keep).collect();
        self.move_history.clear();

        // Replay from the start: blocked cells cannot be un-blocked locally
        self.board = self.initial;
        self.game_over = None;
        self.last_move = None;
        self.message = None;
        for pos in moves {
            if self.board.apply_move(pos).is_err() {
                break;
            }
            self.move_history.push(pos);
            self.last_move = Some(pos);
        }

        // Memo state may describe positions that were just taken back
        for agent in self.agents.iter_mut().flatten() {
            agent.evaluator_mut().reset();
        }

        info!(move_count = self.board.move_count(), "undo");
        self.move_timer.start();
    }
}
