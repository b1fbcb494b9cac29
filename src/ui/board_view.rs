//! Board rendering for the Gomoku GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;
use crate::{Board, Pos, Stone};

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    width: usize,
    height: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            width: 0,
            height: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// `preview` is the color shown under the pointer when a human is in
    /// turn.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        winning_line: Option<[Pos; 5]>,
        preview: Option<Stone>,
    ) -> Option<Pos> {
        self.width = board.width();
        self.height = board.height();

        let available = ui.available_size() - Vec2::splat(20.0);
        let spans = Vec2::new(
            self.width.saturating_sub(1).max(1) as f32,
            self.height.saturating_sub(1).max(1) as f32,
        );
        self.cell_size = ((available.x - 2.0 * BOARD_MARGIN) / spans.x)
            .min((available.y - 2.0 * BOARD_MARGIN) / spans.y)
            .max(MIN_CELL_SIZE);

        let size = Vec2::new(
            2.0 * BOARD_MARGIN + (self.width - 1) as f32 * self.cell_size,
            2.0 * BOARD_MARGIN + (self.height - 1) as f32 * self.cell_size,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        if let Some(pos) = board.last_move() {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        let board_pos = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        if let Some(turn) = preview {
            if board.is_empty(board_pos) {
                self.draw_hover_preview(&painter, board_pos, turn);
            }
        }
        response.clicked().then_some(board_pos)
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let right = BOARD_MARGIN + (self.width - 1) as f32 * self.cell_size;
        let bottom = BOARD_MARGIN + (self.height - 1) as f32 * self.cell_size;

        for col in 0..self.width {
            let x = BOARD_MARGIN + col as f32 * self.cell_size;
            let start = self.board_rect.min + Vec2::new(x, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(x, bottom);
            painter.line_segment([start, end], stroke);
        }
        for row in 0..self.height {
            let y = BOARD_MARGIN + row as f32 * self.cell_size;
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, y);
            let end = self.board_rect.min + Vec2::new(right, y);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Row and column indices along the top and left edges
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..self.width {
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;
            let pos = Pos2::new(x, self.board_rect.min.y + BOARD_MARGIN * 0.4);
            painter.text(pos, egui::Align2::CENTER_CENTER, col, font.clone(), GRID_LINE);
        }
        for row in 0..self.height {
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;
            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.4, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, row, font.clone(), GRID_LINE);
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for pos in board.positions() {
            let stone = board[pos];
            if stone != Stone::Empty {
                self.draw_stone(painter, pos, stone);
            }
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_STONE);
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Stone::White => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 5]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment([self.board_to_screen(pair[0]), self.board_to_screen(pair[1])], stroke);
        }
        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone) {
        let color = match turn {
            Stone::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
            Stone::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
            Stone::Empty => return,
        };
        painter.circle_filled(self.board_to_screen(pos), self.cell_size * STONE_RADIUS_RATIO, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size + 0.5).floor();
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size + 0.5).floor();

        if col < 0.0 || row < 0.0 {
            return None;
        }
        let pos = Pos::new(row as usize, col as usize);
        (pos.row < self.height && pos.col < self.width).then_some(pos)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
