//! Alignment choices for layouts.
//!
//! Box layouts take a single [`Alignment`] on their cross axis. Stacked
//! layouts take an [`AlignmentSet`] holding at most one value per axis.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};

/// A geometric axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Where children are placed relative to the reference child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Share the top edge.
    Top,
    /// Share the bottom edge.
    Bottom,
    /// Share the left edge.
    Left,
    /// Share the right edge.
    Right,
    /// Share the centre line.
    Center,
}

impl Alignment {
    /// The axis this value constrains, or `None` for [`Alignment::Center`],
    /// which applies to either.
    pub fn axis(self) -> Option<Axis> {
        match self {
            Self::Left | Self::Right => Some(Axis::Horizontal),
            Self::Top | Self::Bottom => Some(Axis::Vertical),
            Self::Center => None,
        }
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" | "centre" => Ok(Self::Center),
            _ => Err(LayoutError::InvalidAlignment(s.to_string())),
        }
    }
}

/// Up to two alignment values, one per axis.
///
/// An axis with no value is centred. The default set is `[Center]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Alignment>", into = "Vec<Alignment>")]
pub struct AlignmentSet(Vec<Alignment>);

impl AlignmentSet {
    /// Build a set from loose values, validating the per-axis rule.
    pub fn new(values: impl IntoIterator<Item = Alignment>) -> LayoutResult<Self> {
        let values: Vec<Alignment> = values.into_iter().collect();
        if values.len() > 2 {
            return Err(LayoutError::TooManyAlignments(values.len()));
        }
        if let [first, second] = values[..] {
            if let (Some(a), Some(b)) = (first.axis(), second.axis()) {
                if a == b {
                    return Err(LayoutError::ConflictingAlignment {
                        first: first.to_string(),
                        second: second.to_string(),
                        axis: a.to_string(),
                    });
                }
            }
        }
        Ok(Self(values))
    }

    /// Whether the set holds `alignment`.
    pub fn contains(&self, alignment: Alignment) -> bool {
        self.0.contains(&alignment)
    }

    /// The stored values in insertion order.
    pub fn values(&self) -> &[Alignment] {
        &self.0
    }
}

impl Default for AlignmentSet {
    fn default() -> Self {
        Self(vec![Alignment::Center])
    }
}

impl From<Alignment> for AlignmentSet {
    fn from(alignment: Alignment) -> Self {
        Self(vec![alignment])
    }
}

impl TryFrom<Vec<Alignment>> for AlignmentSet {
    type Error = LayoutError;

    fn try_from(values: Vec<Alignment>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl TryFrom<&[Alignment]> for AlignmentSet {
    type Error = LayoutError;

    fn try_from(values: &[Alignment]) -> Result<Self, Self::Error> {
        Self::new(values.iter().copied())
    }
}

impl<const N: usize> TryFrom<[Alignment; N]> for AlignmentSet {
    type Error = LayoutError;

    fn try_from(values: [Alignment; N]) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<AlignmentSet> for Vec<Alignment> {
    fn from(set: AlignmentSet) -> Self {
        set.0
    }
}

impl FromStr for AlignmentSet {
    type Err = LayoutError;

    /// Parse `"top"`, `"top, right"` or `"left|center"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split([',', '|'])
            .filter(|part| !part.trim().is_empty())
            .map(Alignment::from_str)
            .collect::<LayoutResult<Vec<_>>>()?;
        Self::new(values)
    }
}

impl fmt::Display for AlignmentSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|a| a.as_str()).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Top".parse::<Alignment>().unwrap(), Alignment::Top);
        assert_eq!(" center ".parse::<Alignment>().unwrap(), Alignment::Center);
        assert_eq!("RIGHT".parse::<Alignment>().unwrap(), Alignment::Right);
    }

    #[test]
    fn test_parse_unknown_is_value_error() {
        let err = "diagonal".parse::<Alignment>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(err, LayoutError::InvalidAlignment("diagonal".into()));
    }

    #[test]
    fn test_axis() {
        assert_eq!(Alignment::Left.axis(), Some(Axis::Horizontal));
        assert_eq!(Alignment::Bottom.axis(), Some(Axis::Vertical));
        assert_eq!(Alignment::Center.axis(), None);
    }

    #[test]
    fn test_set_default_is_center() {
        let set = AlignmentSet::default();
        assert_eq!(set.values(), &[Alignment::Center]);
    }

    #[test]
    fn test_set_wraps_scalar() {
        let set = AlignmentSet::from(Alignment::Left);
        assert!(set.contains(Alignment::Left));
        assert_eq!(set.values().len(), 1);
    }

    #[test]
    fn test_set_from_str() {
        let set: AlignmentSet = "top, right".parse().unwrap();
        assert_eq!(set.values(), &[Alignment::Top, Alignment::Right]);
    }

    #[test]
    fn test_set_center_center_allowed() {
        let set = AlignmentSet::try_from([Alignment::Center, Alignment::Center]).unwrap();
        assert_eq!(set.values().len(), 2);
    }

    #[test]
    fn test_set_rejects_same_axis() {
        let err = AlignmentSet::try_from([Alignment::Left, Alignment::Right]).unwrap_err();
        assert!(matches!(err, LayoutError::ConflictingAlignment { .. }));
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_set_rejects_three_values() {
        let err =
            AlignmentSet::try_from([Alignment::Top, Alignment::Left, Alignment::Center]).unwrap_err();
        assert_eq!(err, LayoutError::TooManyAlignments(3));
    }

    #[test]
    fn test_set_serde_round_trip_validates() {
        let set: AlignmentSet = serde_json::from_str(r#"["bottom", "left"]"#).unwrap();
        assert_eq!(set.values(), &[Alignment::Bottom, Alignment::Left]);
        assert!(serde_json::from_str::<AlignmentSet>(r#"["top", "bottom"]"#).is_err());
    }
}
