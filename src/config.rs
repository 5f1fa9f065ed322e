use crate::geometry::Rgb;

/// Top line shown while the player places ships.
pub const PLACING_SHIPS_TOP: &str = "PLACE YOUR SHIPS!";
/// Bottom line shown while the player places ships.
pub const PLACING_SHIPS_BOTTOM: &str = "PRESS R TO ROTATE THE SHIPS.";
pub const GAME_OVER_WIN_TOP: &str = "VICTORY!";
pub const GAME_OVER_LOSS_TOP: &str = "YOU ARE DEFEATED :(";
/// Bottom line shown after the game ends, won or lost.
pub const GAME_OVER_BOTTOM: &str = "PRESS S TO RESTART AGAIN.";

pub const PLAYER_HITS_PREFIX: &str = "PLAYER HITS: ";
pub const COMP_HITS_PREFIX: &str = "COMPUTER HITS: ";

pub const BACKGROUND_COLOR: Rgb = Rgb::BLACK;
pub const MESSAGE_COLOR: Rgb = Rgb::LIME_GREEN;
pub const HIT_COUNT_COLOR: Rgb = Rgb::RED;

/// Baseline of the top line, measured from the top of the display.
pub const TOP_LINE_OFFSET_Y: i32 = 70;
/// Baseline of the bottom line: one line height plus spacing below the top line.
pub const BOTTOM_LINE_OFFSET_Y: i32 = TOP_LINE_OFFSET_Y + 30 + 10;
/// Hit counters sit this far above the bottom edge.
pub const HIT_COUNT_OFFSET_BOTTOM: i32 = 20;
pub const PLAYER_HITS_OFFSET_X: i32 = 750;
pub const COMP_HITS_OFFSET_X: i32 = 115;

/// Custom display font looked up in the working directory.
pub const DEFAULT_FONT_FILE: &str = "Audiowide-Regular.ttf";
/// Environment variable overriding [`DEFAULT_FONT_FILE`].
pub const FONT_ENV: &str = "BATTLESHIP_FONT";
pub const FONT_SIZE: f32 = 25.0;

pub const FALLBACK_FONT_NAME: &str = "Serif";
/// Advance of every fallback glyph, as a fraction of the font size.
pub const FALLBACK_ADVANCE_EM: f32 = 0.6;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "BATTLESHIP_LOG";

/// Ship cells per fleet (5 + 4 + 3 + 3 + 2); a side with this many hits has won.
pub const TOTAL_SHIP_CELLS: u32 = 17;
