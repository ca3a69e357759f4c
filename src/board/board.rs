//! Board structure with player locations and blocked cells

use super::bitboard::Bitboard;
use super::{Player, Pos, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_CELLS};
use crate::error::BoardError;
use crate::rules;

/// Isolation board.
///
/// Every cell a player has ever stood on is blocked. The board is a small
/// `Copy` value, so forecasting a move is a cheap copy plus one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Cells that can no longer be entered
    blocked: Bitboard,
    /// Current location of each player (None until their first move)
    locations: [Option<Pos>; 2],
    /// Side to move
    active: Player,
    /// Number of moves played so far (both sides)
    move_count: u32,
}

impl Board {
    /// Create an empty board with the given dimensions.
    pub fn new(width: u8, height: u8) -> Result<Self, BoardError> {
        let cells = width as usize * height as usize;
        if width == 0 || height == 0 || cells > MAX_CELLS {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            blocked: Bitboard::new(),
            locations: [None, None],
            active: Player::First,
            move_count: 0,
        })
    }

    #[inline]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn cells(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the position lies on this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// Check if a cell can still be entered
    #[inline]
    pub fn is_blank(&self, pos: Pos) -> bool {
        self.contains(pos) && !self.blocked.get(pos.to_index(self.width))
    }

    /// Iterate over all blank cells in row-major order
    pub fn blank_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.cells())
            .filter(|&idx| !self.blocked.get(idx))
            .map(|idx| Pos::from_index(idx, self.width))
    }

    #[inline]
    pub fn blocked(&self) -> &Bitboard {
        &self.blocked
    }

    #[inline]
    pub fn active_player(&self) -> Player {
        self.active
    }

    #[inline]
    pub fn inactive_player(&self) -> Player {
        self.active.opponent()
    }

    #[inline]
    pub fn player_location(&self, player: Player) -> Option<Pos> {
        self.locations[player.index()]
    }

    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Moves available to the side to move, in enumeration order
    pub fn legal_moves(&self) -> Vec<Pos> {
        rules::legal_moves_for(self, self.active)
    }

    /// Moves available to the given player if it were their turn
    pub fn legal_moves_for(&self, player: Player) -> Vec<Pos> {
        rules::legal_moves_for(self, player)
    }

    /// Play a move for the side to move, in place.
    pub fn apply_move(&mut self, pos: Pos) -> Result<(), BoardError> {
        if !rules::is_valid_move(self, pos, self.active) {
            return Err(BoardError::IllegalMove {
                pos,
                player: self.active,
            });
        }
        self.blocked.set(pos.to_index(self.width));
        self.locations[self.active.index()] = Some(pos);
        self.active = self.active.opponent();
        self.move_count += 1;
        Ok(())
    }

    /// Return the board that results from playing `pos`, leaving `self` untouched.
    pub fn forecast_move(&self, pos: Pos) -> Result<Board, BoardError> {
        let mut next = *self;
        next.apply_move(pos)?;
        Ok(next)
    }

    /// True if `player` has won: the opponent is to move and is stuck
    pub fn is_winner(&self, player: Player) -> bool {
        rules::is_winner(self, player)
    }

    /// True if `player` has lost: they are to move and are stuck
    pub fn is_loser(&self, player: Player) -> bool {
        rules::is_loser(self, player)
    }

    /// Winner of a finished game, if any
    pub fn winner(&self) -> Option<Player> {
        rules::winner(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            blocked: Bitboard::new(),
            locations: [None, None],
            active: Player::First,
            move_count: 0,
        }
    }
}
