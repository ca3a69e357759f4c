//! Board rendering for the Isolation GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Player, Pos};

use super::theme::*;

/// What the board view should highlight this frame
pub struct BoardOverlay<'a> {
    pub last_move: Option<Pos>,
    /// Destinations open to the side to move
    pub legal_moves: &'a [Pos],
    pub winner: Option<Player>,
    /// Accept clicks
    pub interactive: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    cell_size: f32,
    board_rect: Rect,
    columns: u8,
    rows: u8,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
            columns: 0,
            rows: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &BoardOverlay<'_>) -> Option<Pos> {
        self.columns = board.width();
        self.rows = board.height();

        let available = ui.available_size() - Vec2::splat(20.0);
        let longest = f32::from(self.columns.max(self.rows));
        self.cell_size = ((available.x.min(available.y) - 2.0 * BOARD_MARGIN) / longest).max(8.0);

        let size = Vec2::new(
            f32::from(self.columns) * self.cell_size + 2.0 * BOARD_MARGIN,
            f32::from(self.rows) * self.cell_size + 2.0 * BOARD_MARGIN,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_cells(&painter, board);

        for pos in overlay.legal_moves {
            painter.rect_filled(self.cell_rect(*pos).shrink(3.0), CornerRadius::same(3), legal_hint());
        }

        for player in [Player::First, Player::Second] {
            if let Some(pos) = board.player_location(player) {
                self.draw_piece(&painter, pos, player, overlay.winner == Some(player));
            }
        }

        if let Some(pos) = overlay.last_move {
            painter.circle_filled(self.cell_center(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }

        if !overlay.interactive {
            return None;
        }

        let pointer = response.hover_pos()?;
        let pos = self.screen_to_board(pointer)?;
        let is_valid = overlay.legal_moves.contains(&pos);
        let color = if is_valid { hover_valid() } else { hover_invalid() };
        painter.rect_filled(self.cell_rect(pos).shrink(2.0), CornerRadius::same(3), color);

        (response.clicked() && is_valid).then_some(pos)
    }

    /// Open and blocked cells with grid lines
    fn draw_cells(&self, painter: &Painter, board: &Board) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        for row in 0..self.rows {
            for col in 0..self.columns {
                let pos = Pos::new(row, col);
                let fill = if board.is_blank(pos) { CELL_OPEN } else { CELL_BLOCKED };
                let rect = self.cell_rect(pos);
                painter.rect_filled(rect, CornerRadius::ZERO, fill);
                painter.rect_stroke(rect, CornerRadius::ZERO, stroke, egui::StrokeKind::Inside);
            }
        }
    }

    /// Draw a player's piece
    fn draw_piece(&self, painter: &Painter, pos: Pos, player: Player, winner: bool) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );
        match player {
            Player::First => {
                painter.circle_filled(center, radius, FIRST_PIECE);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    FIRST_PIECE_HIGHLIGHT,
                );
            }
            Player::Second => {
                painter.circle_filled(center, radius, SECOND_PIECE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, SECOND_PIECE_SHADOW));
            }
        }

        if winner {
            painter.circle_stroke(center, radius + 3.0, Stroke::new(3.0, WIN_HIGHLIGHT));
        }
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + f32::from(pos.col) * self.cell_size,
                BOARD_MARGIN + f32::from(pos.row) * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        if relative.x < 0.0 || relative.y < 0.0 {
            return None;
        }
        let col = (relative.x / self.cell_size).floor() as u32;
        let row = (relative.y / self.cell_size).floor() as u32;
        if col < u32::from(self.columns) && row < u32::from(self.rows) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }
}
