//! Display font: horizontal metrics of a custom TrueType face, or a built-in
//! fixed-advance fallback when the custom face is unavailable.
//!
//! Only what the status display needs is kept: per-glyph advance widths for
//! printable ASCII and a default advance for everything else. The parsed face
//! itself is dropped after loading, so a `DisplayFont` owns no file data.

use alloc::string::{String, ToString};
#[cfg(feature = "std")]
use std::path::{Path, PathBuf};

use log::{debug, warn};
use ttf_parser::{Face, FaceParsingError, GlyphId};

use crate::config::{FALLBACK_ADVANCE_EM, FALLBACK_FONT_NAME};

const FIRST_PRINTABLE: u8 = b' ';
const PRINTABLE_GLYPHS: usize = (b'~' - b' ' + 1) as usize;
const FALLBACK_UNITS_PER_EM: u16 = 1000;

/// Errors returned when loading a custom font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    /// The font file could not be read.
    #[cfg(feature = "std")]
    Io {
        path: PathBuf,
        kind: std::io::ErrorKind,
    },
    /// The data is not a usable TrueType/OpenType face.
    Parse(FaceParsingError),
    /// The face parsed but lacks horizontal metrics.
    MissingMetrics,
}

impl From<FaceParsingError> for FontError {
    fn from(err: FaceParsingError) -> Self {
        FontError::Parse(err)
    }
}

impl core::fmt::Display for FontError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            FontError::Io { path, kind } => {
                write!(f, "cannot read font file {}: {}", path.display(), kind)
            }
            FontError::Parse(e) => write!(f, "cannot parse font: {}", e),
            FontError::MissingMetrics => write!(f, "font has no horizontal metrics"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FontError {}

/// Where a display looks for its font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// TrueType/OpenType file on disk.
    #[cfg(feature = "std")]
    File(PathBuf),
    /// In-memory font data.
    Bytes(alloc::vec::Vec<u8>),
    /// Skip the custom font and use the built-in one.
    Builtin,
}

impl FontSource {
    /// The font file named by `BATTLESHIP_FONT`, or `Audiowide-Regular.ttf`.
    #[cfg(feature = "std")]
    pub fn from_env() -> Self {
        let path = std::env::var_os(crate::config::FONT_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(crate::config::DEFAULT_FONT_FILE));
        FontSource::File(path)
    }
}

impl Default for FontSource {
    fn default() -> Self {
        #[cfg(feature = "std")]
        {
            FontSource::from_env()
        }
        #[cfg(not(feature = "std"))]
        {
            FontSource::Builtin
        }
    }
}

/// Whether a font came from a custom face or is the built-in substitute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontKind {
    Custom,
    Fallback,
}

/// Font used to measure and draw status text.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayFont {
    name: String,
    kind: FontKind,
    size: f32,
    units_per_em: u16,
    advances: [u16; PRINTABLE_GLYPHS],
    default_advance: u16,
}

impl DisplayFont {
    /// Built-in bold serif substitute with a fixed advance per character.
    pub fn fallback(size: f32) -> Self {
        let advance = (FALLBACK_ADVANCE_EM * FALLBACK_UNITS_PER_EM as f32) as u16;
        Self {
            name: FALLBACK_FONT_NAME.to_string(),
            kind: FontKind::Fallback,
            size,
            units_per_em: FALLBACK_UNITS_PER_EM,
            advances: [advance; PRINTABLE_GLYPHS],
            default_advance: advance,
        }
    }

    /// Read metrics from raw TrueType/OpenType data.
    pub fn from_bytes(name: &str, data: &[u8], size: f32) -> Result<Self, FontError> {
        let face = Face::parse(data, 0)?;
        let units_per_em = face.units_per_em();
        if units_per_em == 0 {
            return Err(FontError::MissingMetrics);
        }
        // Glyph 0 is .notdef, used for characters the face does not map.
        let default_advance = face
            .glyph_hor_advance(GlyphId(0))
            .ok_or(FontError::MissingMetrics)?;
        let mut advances = [default_advance; PRINTABLE_GLYPHS];
        for (i, slot) in advances.iter_mut().enumerate() {
            let ch = char::from(FIRST_PRINTABLE + i as u8);
            if let Some(adv) = face.glyph_index(ch).and_then(|id| face.glyph_hor_advance(id)) {
                *slot = adv;
            }
        }
        Ok(Self {
            name: name.to_string(),
            kind: FontKind::Custom,
            size,
            units_per_em,
            advances,
            default_advance,
        })
    }

    /// Read metrics from a font file. The font is named after the file stem.
    #[cfg(feature = "std")]
    pub fn from_file(path: &Path, size: f32) -> Result<Self, FontError> {
        let data = std::fs::read(path).map_err(|e| FontError::Io {
            path: path.to_path_buf(),
            kind: e.kind(),
        })?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "custom".to_string());
        Self::from_bytes(&name, &data, size)
    }

    /// Load the font described by `source`. `Builtin` always succeeds.
    pub fn load(source: &FontSource, size: f32) -> Result<Self, FontError> {
        match source {
            #[cfg(feature = "std")]
            FontSource::File(path) => Self::from_file(path, size),
            FontSource::Bytes(data) => Self::from_bytes("custom", data, size),
            FontSource::Builtin => Ok(Self::fallback(size)),
        }
    }

    /// Like [`DisplayFont::load`], but a failure is logged and replaced by the
    /// fallback font.
    pub fn resolve(source: &FontSource, size: f32) -> Self {
        match Self::load(source, size) {
            Ok(font) => {
                debug!("display font {} ({:?}) at {}px", font.name, font.kind, size);
                font
            }
            Err(err) => {
                warn!("{}; using fallback font {}", err, FALLBACK_FONT_NAME);
                Self::fallback(size)
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FontKind {
        self.kind
    }

    pub fn is_fallback(&self) -> bool {
        self.kind == FontKind::Fallback
    }

    /// Pixel size the metrics are scaled to.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Advance of a single character in font units.
    pub fn advance_units(&self, ch: char) -> u16 {
        let code = ch as u32;
        let first = u32::from(FIRST_PRINTABLE);
        if code >= first && code < first + PRINTABLE_GLYPHS as u32 {
            self.advances[(code - first) as usize]
        } else {
            self.default_advance
        }
    }

    /// Advance of a single character in pixels, unrounded.
    pub fn advance_px(&self, ch: char) -> f32 {
        self.units_to_px(u64::from(self.advance_units(ch))) as f32
    }

    /// Width of `text` in pixels, rounded to the nearest pixel and clamped to
    /// `i32::MAX`.
    pub fn text_width(&self, text: &str) -> i32 {
        let units = text
            .chars()
            .fold(0u64, |acc, c| acc.saturating_add(u64::from(self.advance_units(c))));
        let px = libm::round(self.units_to_px(units));
        if px >= f64::from(i32::MAX) {
            i32::MAX
        } else {
            px as i32
        }
    }

    fn units_to_px(&self, units: u64) -> f64 {
        units as f64 * f64::from(self.size) / f64::from(self.units_per_em)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_width_is_fixed_advance() {
        let font = DisplayFont::fallback(25.0);
        assert!(font.is_fallback());
        assert_eq!(font.name(), "Serif");
        // 0.6 * 25 = 15px per character
        assert_eq!(font.text_width("ABCD"), 60);
        assert_eq!(font.text_width(""), 0);
    }

    #[test]
    fn non_ascii_uses_default_advance() {
        let font = DisplayFont::fallback(10.0);
        assert_eq!(font.advance_units('é'), font.advance_units('A'));
        assert_eq!(font.text_width("é"), 6);
    }

    #[test]
    fn long_lines_measure_without_overflow() {
        let font = DisplayFont::fallback(25.0);
        // 7.2M * 600 units is past u32::MAX
        assert_eq!(font.text_width(&"A".repeat(7_200_000)), 108_000_000);
        assert_eq!(font.text_width(&"A".repeat(100_000)), 1_500_000);
    }

    #[test]
    fn pixel_width_clamps_to_i32() {
        let font = DisplayFont::fallback(1.0e9);
        assert_eq!(font.text_width("ABCD"), i32::MAX);
    }

    #[test]
    fn garbage_bytes_fail_to_parse() {
        let err = DisplayFont::from_bytes("junk", b"not a font", 25.0).unwrap_err();
        assert!(matches!(err, FontError::Parse(_)));
    }

    #[test]
    fn resolve_falls_back_on_bad_bytes() {
        let font = DisplayFont::resolve(&FontSource::Bytes(b"\0\0\0\0".to_vec()), 25.0);
        assert!(font.is_fallback());
        assert_eq!(font.size(), 25.0);
    }

    #[test]
    fn builtin_source_loads_fallback() {
        let font = DisplayFont::load(&FontSource::Builtin, 12.0).unwrap();
        assert_eq!(font.kind(), FontKind::Fallback);
    }

    #[cfg(feature = "std")]
    #[test]
    fn missing_file_reports_io_error() {
        let path = PathBuf::from("definitely/not/here.ttf");
        let err = DisplayFont::from_file(&path, 25.0).unwrap_err();
        match err {
            FontError::Io { path: p, kind } => {
                assert_eq!(p, path);
                assert_eq!(kind, std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
