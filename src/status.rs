//! Status banner for a Battleship session: two centred message lines and the
//! player and computer hit counters.

use alloc::format;
use alloc::string::{String, ToString};

use log::debug;

use crate::config::{
    BACKGROUND_COLOR, BOTTOM_LINE_OFFSET_Y, COMP_HITS_OFFSET_X, COMP_HITS_PREFIX, FONT_SIZE,
    GAME_OVER_BOTTOM, GAME_OVER_LOSS_TOP, GAME_OVER_WIN_TOP, HIT_COUNT_COLOR,
    HIT_COUNT_OFFSET_BOTTOM, MESSAGE_COLOR, PLACING_SHIPS_BOTTOM, PLACING_SHIPS_TOP,
    PLAYER_HITS_OFFSET_X, PLAYER_HITS_PREFIX, TOP_LINE_OFFSET_Y,
};
use crate::font::{DisplayFont, FontSource};
use crate::geometry::{Bounds, Position};
use crate::surface::Surface;

/// Text state of the status banner plus the region it occupies.
///
/// The display font is resolved on first use and kept until the display is
/// dropped. A custom font that fails to load is replaced by the built-in one.
#[derive(Debug, Clone)]
pub struct StatusDisplay {
    bounds: Bounds,
    top_line: String,
    bottom_line: String,
    player_hit_text: String,
    comp_hit_text: String,
    font_source: FontSource,
    font: Option<DisplayFont>,
}

impl StatusDisplay {
    /// Display over `bounds` using the default font source, showing the ship
    /// placement messages.
    pub fn new(bounds: Bounds) -> Self {
        Self::with_font_source(bounds, FontSource::default())
    }

    pub fn with_font_source(bounds: Bounds, font_source: FontSource) -> Self {
        let mut display = Self {
            bounds,
            top_line: String::new(),
            bottom_line: String::new(),
            player_hit_text: hit_text(PLAYER_HITS_PREFIX, 0),
            comp_hit_text: hit_text(COMP_HITS_PREFIX, 0),
            font_source,
            font: None,
        };
        display.reset();
        display
    }

    pub fn set_player_hit_count(&mut self, hits: u32) {
        self.player_hit_text = hit_text(PLAYER_HITS_PREFIX, hits);
    }

    pub fn set_comp_hit_count(&mut self, hits: u32) {
        self.comp_hit_text = hit_text(COMP_HITS_PREFIX, hits);
    }

    /// Restore the ship placement messages. Hit counters are left as they are.
    pub fn reset(&mut self) {
        self.top_line = PLACING_SHIPS_TOP.to_string();
        self.bottom_line = PLACING_SHIPS_BOTTOM.to_string();
    }

    /// Show the win or loss message with the restart prompt below it.
    pub fn show_game_over(&mut self, player_won: bool) {
        debug!("status: game over, player won = {}", player_won);
        self.top_line = if player_won {
            GAME_OVER_WIN_TOP
        } else {
            GAME_OVER_LOSS_TOP
        }
        .to_string();
        self.bottom_line = GAME_OVER_BOTTOM.to_string();
    }

    pub fn set_top_line(&mut self, message: impl Into<String>) {
        self.top_line = message.into();
    }

    pub fn set_bottom_line(&mut self, message: impl Into<String>) {
        self.bottom_line = message.into();
    }

    pub fn top_line(&self) -> &str {
        &self.top_line
    }

    pub fn bottom_line(&self) -> &str {
        &self.bottom_line
    }

    pub fn player_hit_text(&self) -> &str {
        &self.player_hit_text
    }

    pub fn comp_hit_text(&self) -> &str {
        &self.comp_hit_text
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn font_source(&self) -> &FontSource {
        &self.font_source
    }

    /// True once the display font has been resolved.
    pub fn is_font_loaded(&self) -> bool {
        self.font.is_some()
    }

    /// The display font, resolving it first if needed.
    pub fn font(&mut self) -> &DisplayFont {
        let source = &self.font_source;
        self.font
            .get_or_insert_with(|| DisplayFont::resolve(source, FONT_SIZE))
    }

    /// Draw the banner into the display's own bounds.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let bounds = self.bounds;
        self.render_in(surface, bounds);
    }

    /// Draw the banner into `bounds`: black background, both message lines
    /// centred in lime green, then the red hit counters near the bottom edge.
    pub fn render_in<S: Surface + ?Sized>(&mut self, surface: &mut S, bounds: Bounds) {
        surface.fill_rect(bounds, BACKGROUND_COLOR);

        let source = &self.font_source;
        let font = self
            .font
            .get_or_insert_with(|| DisplayFont::resolve(source, FONT_SIZE));

        surface.set_color(MESSAGE_COLOR);
        let top = Position::new(
            centered_x(bounds, font.text_width(&self.top_line)),
            bounds.y().saturating_add(TOP_LINE_OFFSET_Y),
        );
        surface.draw_text(&self.top_line, top, font);
        let bottom = Position::new(
            centered_x(bounds, font.text_width(&self.bottom_line)),
            bounds.y().saturating_add(BOTTOM_LINE_OFFSET_Y),
        );
        surface.draw_text(&self.bottom_line, bottom, font);

        surface.set_color(HIT_COUNT_COLOR);
        let counter_y = bounds
            .y()
            .saturating_add(to_i32(bounds.height))
            .saturating_sub(HIT_COUNT_OFFSET_BOTTOM);
        let player = Position::new(bounds.x().saturating_add(PLAYER_HITS_OFFSET_X), counter_y);
        surface.draw_text(&self.player_hit_text, player, font);
        let comp = Position::new(bounds.x().saturating_add(COMP_HITS_OFFSET_X), counter_y);
        surface.draw_text(&self.comp_hit_text, comp, font);
    }
}

fn hit_text(prefix: &str, hits: u32) -> String {
    format!("{}{}", prefix, hits)
}

fn to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Left edge that centres a line of `text_width` pixels in `bounds`.
fn centered_x(bounds: Bounds, text_width: i32) -> i32 {
    bounds
        .x()
        .saturating_add(to_i32(bounds.width) / 2)
        .saturating_sub(text_width / 2)
}
