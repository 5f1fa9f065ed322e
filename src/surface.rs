use crate::font::DisplayFont;
use crate::geometry::{Bounds, Position, Rgb};

/// Drawing target for the status display.
///
/// Hosts implement this over whatever graphics context they own. Text is
/// drawn with its baseline at `at.y`, starting at `at.x`, in the color set by
/// the last [`Surface::set_color`] call.
pub trait Surface {
    /// Fill a rectangle with a solid color. Does not change the current color.
    fn fill_rect(&mut self, bounds: Bounds, color: Rgb);
    /// Select the color for subsequent text.
    fn set_color(&mut self, color: Rgb);
    fn draw_text(&mut self, text: &str, at: Position, font: &DisplayFont);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn fill_rect(&mut self, bounds: Bounds, color: Rgb) {
        (**self).fill_rect(bounds, color)
    }

    fn set_color(&mut self, color: Rgb) {
        (**self).set_color(color)
    }

    fn draw_text(&mut self, text: &str, at: Position, font: &DisplayFont) {
        (**self).draw_text(text, at, font)
    }
}
