//! ScreenView: maps a [`ScreenSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Card;
use crate::engine::ScreenSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CardId, Phase, DECK_SIZE, GRID_COLUMNS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BACKGROUND: Rgb = Rgb::new(30, 30, 40);
const HIDDEN_TILE: Rgb = Rgb::new(135, 206, 235);
const REVEALED_TILE: Rgb = Rgb::new(255, 255, 255);
const SELECTED_TILE: Rgb = Rgb::new(255, 236, 150);
const RUSH_TILE: Rgb = Rgb::new(255, 160, 122);
const BUTTON: Rgb = Rgb::new(40, 167, 69);
const INK: Rgb = Rgb::new(20, 24, 32);
const MATCHED_INK: Rgb = Rgb::new(30, 120, 50);

const GRID_ROWS: u16 = DECK_SIZE.div_ceil(GRID_COLUMNS) as u16;

/// Positions of the card tiles for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub x: u16,
    pub y: u16,
    pub tile_w: u16,
    pub tile_h: u16,
    pub gap: u16,
}

impl GridLayout {
    pub fn width(&self) -> u16 {
        GRID_COLUMNS as u16 * self.tile_w + (GRID_COLUMNS as u16 - 1) * self.gap
    }

    pub fn height(&self) -> u16 {
        GRID_ROWS * self.tile_h + (GRID_ROWS - 1) * self.gap
    }

    /// Top-left corner of a card's tile.
    pub fn tile_origin(&self, id: CardId) -> (u16, u16) {
        let col = id as u16 % GRID_COLUMNS as u16;
        let row = id as u16 / GRID_COLUMNS as u16;
        (
            self.x + col * (self.tile_w + self.gap),
            self.y + row * (self.tile_h + self.gap),
        )
    }

    /// Card whose tile covers terminal cell `(x, y)`; gaps hit nothing.
    pub fn card_at(&self, x: u16, y: u16) -> Option<CardId> {
        let dx = x.checked_sub(self.x)?;
        let dy = y.checked_sub(self.y)?;
        let (col, in_col) = (dx / (self.tile_w + self.gap), dx % (self.tile_w + self.gap));
        let (row, in_row) = (dy / (self.tile_h + self.gap), dy % (self.tile_h + self.gap));
        if in_col >= self.tile_w || in_row >= self.tile_h {
            return None;
        }
        if col >= GRID_COLUMNS as u16 || row >= GRID_ROWS {
            return None;
        }
        let id = row as usize * GRID_COLUMNS + col as usize;
        (id < DECK_SIZE).then_some(id as CardId)
    }
}

#[derive(Debug, Clone, Copy)]
struct TileState {
    rush: bool,
    /// Part of the pair waiting for its clear.
    selected: bool,
    cursor: bool,
}

/// Renders the four screens of the game.
pub struct ScreenView {
    /// Tile width in terminal columns (fits "contaminant" plus padding).
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    gap: u16,
}

impl Default for ScreenView {
    fn default() -> Self {
        Self {
            tile_w: 13,
            tile_h: 3,
            gap: 1,
        }
    }
}

/// Rows used by the playing screen: title, blank, grid, blank, score, hint.
const PLAYING_CHROME_ROWS: u16 = 5;

impl ScreenView {
    pub fn new(tile_w: u16, tile_h: u16, gap: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            gap,
        }
    }

    /// Where the card grid sits on the playing screen for this viewport.
    pub fn grid_layout(&self, viewport: Viewport) -> GridLayout {
        let mut grid = GridLayout {
            x: 0,
            y: 0,
            tile_w: self.tile_w,
            tile_h: self.tile_h,
            gap: self.gap,
        };
        let block_h = grid.height() + PLAYING_CHROME_ROWS;
        let top = viewport.height.saturating_sub(block_h) / 2;
        grid.x = viewport.width.saturating_sub(grid.width()) / 2;
        grid.y = top + 2;
        grid
    }

    /// Hit-test a terminal cell on the playing screen.
    pub fn card_at(&self, viewport: Viewport, x: u16, y: u16) -> Option<CardId> {
        self.grid_layout(viewport).card_at(x, y)
    }

    /// Render the current screen into an existing framebuffer.
    pub fn render_into(&self, snap: &ScreenSnapshot<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), BACKGROUND).cell(' '));

        match snap.phase {
            Phase::Home => self.draw_home(fb, viewport),
            Phase::Playing => self.draw_playing(fb, snap, viewport),
            Phase::Result => self.draw_result(fb, snap, viewport),
            Phase::Leaderboard => self.draw_leaderboard(fb, snap, viewport),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &ScreenSnapshot<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_home(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let top = viewport.height.saturating_sub(7) / 2;
        fb.put_str_centered(0, viewport.width, top, "Recycling Challenge", title_style());
        draw_button(fb, viewport, top + 2, "[s] Start Recycling");
        draw_button(fb, viewport, top + 4, "[l] View Leaderboard");
        fb.put_str_centered(0, viewport.width, top + 6, "[q] Quit", hint_style());
    }

    fn draw_playing(&self, fb: &mut FrameBuffer, snap: &ScreenSnapshot<'_>, viewport: Viewport) {
        let grid = self.grid_layout(viewport);
        let game = &snap.game;

        let title = format!("Recycling Bin - Time Left: {}s", game.time_left_secs);
        fb.put_str_centered(0, viewport.width, grid.y.saturating_sub(2), &title, title_style());

        for card in game.cards.iter() {
            let tile = TileState {
                rush: game.rush,
                selected: game.is_selected(card.id),
                cursor: snap.cursor == card.id,
            };
            self.draw_tile(fb, &grid, card, tile);
        }

        let below = grid.y + grid.height() + 1;
        let score = format!("Recycling Points: {}", game.score);
        fb.put_str_centered(0, viewport.width, below, &score, title_style());
        fb.put_str_centered(
            0,
            viewport.width,
            below + 1,
            "arrows/hjkl move  space flip  q quit",
            hint_style(),
        );
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, grid: &GridLayout, card: &Card, tile: TileState) {
        let (x, y) = grid.tile_origin(card.id);

        // Rush tints the whole grid, pending pair included.
        let bg = if tile.rush {
            RUSH_TILE
        } else if tile.selected {
            SELECTED_TILE
        } else if card.face_up() {
            REVEALED_TILE
        } else {
            HIDDEN_TILE
        };
        let fg = if card.matched { MATCHED_INK } else { INK };
        let style = CellStyle::new(fg, bg);

        fb.fill_rect(x, y, grid.tile_w, grid.tile_h, ' ', style);

        let label = if card.face_up() { card.kind.as_str() } else { "?" };
        let mid = y + grid.tile_h / 2;
        fb.put_str_centered(x, grid.tile_w, mid, label, style.bold());

        if tile.cursor && grid.tile_w >= 2 {
            let marker = style.bold();
            fb.put_char(x, mid, '▸', marker);
            fb.put_char(x + grid.tile_w - 1, mid, '◂', marker);
        }
    }

    fn draw_result(&self, fb: &mut FrameBuffer, snap: &ScreenSnapshot<'_>, viewport: Viewport) {
        let top = viewport.height.saturating_sub(8) / 2;
        fb.put_str_centered(0, viewport.width, top, "Recycling Complete!", title_style());
        let score = format!("Final Score: {}", snap.game.score);
        fb.put_str_centered(0, viewport.width, top + 2, &score, title_style());
        draw_button(fb, viewport, top + 4, "[r] Recycle More");
        draw_button(fb, viewport, top + 6, "[l] View Leaderboard");
    }

    fn draw_leaderboard(&self, fb: &mut FrameBuffer, snap: &ScreenSnapshot<'_>, viewport: Viewport) {
        // Title, blank, entries..., blank, button.
        let room = viewport.height.saturating_sub(4) as usize;
        let shown = snap.leaderboard.len().min(room);
        let skipped = snap.leaderboard.len() - shown;

        let block_h = shown as u16 + 4;
        let top = viewport.height.saturating_sub(block_h) / 2;
        fb.put_str_centered(0, viewport.width, top, "Leaderboard", title_style());

        let entry_style = CellStyle::new(Rgb::new(220, 220, 220), BACKGROUND);
        let mut y = top + 2;
        for (i, entry) in snap.leaderboard.iter().enumerate().skip(skipped) {
            fb.put_str_centered(0, viewport.width, y, &entry.line(i + 1), entry_style);
            y += 1;
        }

        draw_button(fb, viewport, y + 1, "[b] Back to Home");
    }
}

fn title_style() -> CellStyle {
    CellStyle::new(Rgb::new(255, 255, 255), BACKGROUND).bold()
}

fn hint_style() -> CellStyle {
    CellStyle::new(Rgb::new(140, 140, 150), BACKGROUND).dim()
}

fn draw_button(fb: &mut FrameBuffer, viewport: Viewport, y: u16, label: &str) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), BUTTON).bold();
    let padded = format!("  {}  ", label);
    fb.put_str_centered(0, viewport.width, y, &padded, style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_layout_hit_test_matches_tile_origins() {
        let view = ScreenView::default();
        let grid = view.grid_layout(Viewport::new(80, 24));
        for id in 0..DECK_SIZE as CardId {
            let (x, y) = grid.tile_origin(id);
            assert_eq!(grid.card_at(x, y), Some(id));
            assert_eq!(grid.card_at(x + grid.tile_w - 1, y + grid.tile_h - 1), Some(id));
        }
    }

    #[test]
    fn gaps_and_empty_slots_hit_nothing() {
        let view = ScreenView::default();
        let grid = view.grid_layout(Viewport::new(80, 24));
        let (x, y) = grid.tile_origin(0);
        assert_eq!(grid.card_at(x + grid.tile_w, y), None);
        assert_eq!(grid.card_at(x, y + grid.tile_h), None);
        assert_eq!(grid.card_at(x.wrapping_sub(1), y), None);

        // Row 3 only has two cards; the third slot is empty.
        let (x13, y13) = grid.tile_origin(13);
        assert_eq!(grid.card_at(x13 + grid.tile_w + grid.gap, y13), None);
    }

    #[test]
    fn pending_pair_is_highlighted_until_cleared() {
        use crate::engine::{FixedClock, Session};
        use crate::types::{CardKind, SELECTION_CLEAR_MS};

        let mut s = Session::new(11, FixedClock("1:2:3".into()));
        s.start_game();
        let a = s.game().deck().find_hidden(CardKind::Plastic).unwrap();
        let b = s.game().deck().find_hidden(CardKind::Paper).unwrap();
        s.tap(a);
        s.tap(b);

        let view = ScreenView::default();
        let vp = Viewport::new(80, 24);
        let grid = view.grid_layout(vp);
        let bg_of = |fb: &FrameBuffer, id: CardId| {
            let (x, y) = grid.tile_origin(id);
            fb.get(x + 1, y).unwrap().style.bg
        };

        let fb = view.render(&s.snapshot(), vp);
        assert_eq!(bg_of(&fb, a), SELECTED_TILE);
        assert_eq!(bg_of(&fb, b), SELECTED_TILE);

        s.advance(SELECTION_CLEAR_MS);
        let fb = view.render(&s.snapshot(), vp);
        assert_eq!(bg_of(&fb, a), REVEALED_TILE);
        assert_eq!(bg_of(&fb, b), REVEALED_TILE);
    }

    #[test]
    fn grid_fits_a_standard_terminal() {
        let view = ScreenView::default();
        let grid = view.grid_layout(Viewport::new(80, 24));
        assert!(grid.x + grid.width() <= 80);
        assert!(grid.y + grid.height() + 3 <= 24);
        assert!(grid.y >= 2);
    }
}
