//! EDM fonts.
//!
//! EDM names fonts with X-style tags such as `helvetica-bold-i-18.0`, and
//! only ships a fixed set of point sizes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};
use crate::logging::targets;

/// Point sizes EDM can display.
pub const FONT_SIZES: [u32; 9] = [8, 10, 12, 14, 18, 24, 32, 48, 72];

/// Default point size.
pub const DEFAULT_FONT_SIZE: u32 = 18;

/// Font families available to EDM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontChoice {
    /// Helvetica.
    #[default]
    Helvetica,
    /// Courier.
    Courier,
    /// Times.
    Times,
    /// Utopia.
    Utopia,
}

impl FontChoice {
    /// Lower-case family name used in font tags.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Helvetica => "helvetica",
            Self::Courier => "courier",
            Self::Times => "times",
            Self::Utopia => "utopia",
        }
    }
}

impl fmt::Display for FontChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontChoice {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "helvetica" => Ok(Self::Helvetica),
            "courier" => Ok(Self::Courier),
            "times" => Ok(Self::Times),
            "utopia" => Ok(Self::Utopia),
            other => Err(LayoutError::InvalidFont(format!("unknown font family '{other}'"))),
        }
    }
}

/// A font as EDM understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct Font {
    /// Family.
    pub font: FontChoice,
    /// Bold weight.
    pub bold: bool,
    /// Italic slant.
    pub italicized: bool,
    size: u32,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            font: FontChoice::default(),
            bold: false,
            italicized: false,
            size: DEFAULT_FONT_SIZE,
        }
    }
}

impl Font {
    /// Create the default font (`helvetica-medium-r-18.0`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Point size.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Set the point size.
    ///
    /// Sizes outside [`FONT_SIZES`] are ignored with a warning. Returns
    /// whether the size was accepted.
    pub fn set_size(&mut self, size: u32) -> bool {
        if FONT_SIZES.contains(&size) {
            self.size = size;
            true
        } else {
            tracing::warn!(target: targets::FONT, size, current = self.size, "unsupported font size ignored");
            false
        }
    }

    /// Builder-style [`set_size`](Self::set_size).
    pub fn with_size(mut self, size: u32) -> Self {
        self.set_size(size);
        self
    }

    /// Builder-style family.
    pub fn with_family(mut self, font: FontChoice) -> Self {
        self.font = font;
        self
    }

    /// Builder-style weight.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Builder-style slant.
    pub fn with_italic(mut self, italicized: bool) -> Self {
        self.italicized = italicized;
        self
    }

    /// The EDM font tag, e.g. `utopia-bold-i-8.0`.
    pub fn tag(&self) -> String {
        let weight = if self.bold { "bold" } else { "medium" };
        let slant = if self.italicized { "i" } else { "r" };
        format!("{}-{}-{}-{}.0", self.font, weight, slant, self.size)
    }

    /// Coerce a loosely-typed value into a font.
    ///
    /// Accepts an object with any of the `font`, `size`, `bold` and
    /// `italicized` keys, or an array `[size, italicized, bold]`. Anything
    /// else is rejected.
    pub fn coerce(value: &serde_json::Value) -> LayoutResult<Self> {
        use serde_json::Value;

        match value {
            Value::Object(map) => {
                let mut font = Font::new();
                for (key, field) in map {
                    match key.as_str() {
                        "font" => {
                            let name = field.as_str().ok_or_else(|| invalid(key, field))?;
                            font.font = name.parse()?;
                        }
                        "size" => {
                            font.set_size(as_size(key, field)?);
                        }
                        "bold" => font.bold = field.as_bool().ok_or_else(|| invalid(key, field))?,
                        "italicized" => {
                            font.italicized = field.as_bool().ok_or_else(|| invalid(key, field))?
                        }
                        other => {
                            return Err(LayoutError::InvalidFont(format!("unknown key '{other}'")));
                        }
                    }
                }
                Ok(font)
            }
            Value::Array(items) => {
                let mut font = Font::new();
                let mut items = items.iter();
                if let Some(size) = items.next() {
                    font.set_size(as_size("size", size)?);
                }
                if let Some(italic) = items.next() {
                    font.italicized = italic.as_bool().ok_or_else(|| invalid("italicized", italic))?;
                }
                if let Some(bold) = items.next() {
                    font.bold = bold.as_bool().ok_or_else(|| invalid("bold", bold))?;
                }
                if items.next().is_some() {
                    return Err(LayoutError::InvalidFont(
                        "expected at most [size, italicized, bold]".into(),
                    ));
                }
                Ok(font)
            }
            other => Err(LayoutError::InvalidFont(format!("cannot build a font from {other}"))),
        }
    }
}

impl From<(u32, bool, bool)> for Font {
    /// `(size, italicized, bold)`.
    fn from((size, italicized, bold): (u32, bool, bool)) -> Self {
        Font::new().with_size(size).with_italic(italicized).with_bold(bold)
    }
}

impl TryFrom<serde_json::Value> for Font {
    type Error = LayoutError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Self::coerce(&value)
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

fn invalid(key: &str, value: &serde_json::Value) -> LayoutError {
    LayoutError::InvalidFont(format!("invalid value {value} for '{key}'"))
}

fn as_size(key: &str, value: &serde_json::Value) -> LayoutResult<u32> {
    value
        .as_u64()
        .and_then(|size| u32::try_from(size).ok())
        .ok_or_else(|| invalid(key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let font = Font::new();
        assert_eq!(font.font, FontChoice::Helvetica);
        assert!(!font.bold);
        assert!(!font.italicized);
        assert_eq!(font.size(), 18);
        assert_eq!(font.tag(), "helvetica-medium-r-18.0");
    }

    #[test]
    fn test_family_parse() {
        assert_eq!("helvetica".parse::<FontChoice>().unwrap(), FontChoice::Helvetica);
        assert_eq!("Utopia".parse::<FontChoice>().unwrap(), FontChoice::Utopia);
        assert!("comic sans".parse::<FontChoice>().is_err());
    }

    #[test]
    fn test_unsupported_size_ignored() {
        let mut font = Font::new();
        assert!(font.set_size(12));
        assert_eq!(font.size(), 12);
        assert!(!font.set_size(19));
        assert_eq!(font.size(), 12);
    }

    #[test]
    fn test_tag() {
        let mut font = Font::new();
        font.set_size(8);
        font.font = "utopia".parse().unwrap();
        font.bold = true;
        font.italicized = true;
        assert_eq!(font.tag(), "utopia-bold-i-8.0");
    }

    #[test]
    fn test_coerce_object() {
        let font = Font::coerce(&json!({"size": 12})).unwrap();
        assert_eq!(font.size(), 12);
        assert_eq!(font.font, FontChoice::Helvetica);

        let font = Font::coerce(&json!({"font": "times", "bold": true})).unwrap();
        assert_eq!(font.tag(), "times-bold-r-18.0");
    }

    #[test]
    fn test_coerce_array() {
        let font = Font::coerce(&json!([12, false, true])).unwrap();
        assert_eq!(font.size(), 12);
        assert!(!font.italicized);
        assert!(font.bold);
    }

    #[test]
    fn test_coerce_scalar_rejected() {
        let err = Font::coerce(&json!(12)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_from_tuple() {
        let font = Font::from((24, true, false));
        assert_eq!(font.tag(), "helvetica-medium-i-24.0");
    }
}
