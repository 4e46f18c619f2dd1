//! Parameter value kinds and the tagged value cell.
//!
//! Every parameter holds exactly one `ParamValue`. Each variant carries its
//! own constraint metadata (numeric limits, enum labels), so exhaustive
//! matching over the variant is all a consumer ever needs.

/// The five kinds of parameter value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// On/off toggle.
    Bool,
    /// Whole number, optionally range-limited.
    Int,
    /// Floating-point number, optionally range-limited.
    Double,
    /// Selection index into a fixed, ordered set of labels.
    Enum,
    /// Free-form text.
    Text,
}

impl ParamKind {
    /// Returns a human-readable name for the kind.
    pub fn name(&self) -> &'static str {
        match self {
            ParamKind::Bool => "Bool",
            ParamKind::Int => "Int",
            ParamKind::Double => "Double",
            ParamKind::Enum => "Enum",
            ParamKind::Text => "Text",
        }
    }
}

/// A typed parameter value together with its constraint metadata.
///
/// Numeric variants carry optional inclusive `[min, max]` limits; `None`
/// means clamping is disabled. The `Enum` variant carries its ordered label
/// set, and its index is always within `[0, labels.len())` for non-empty
/// label sets.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    /// On/off toggle value.
    Bool(bool),
    /// Integer value with optional inclusive limits.
    Int {
        value: i32,
        limits: Option<(i32, i32)>,
    },
    /// Floating-point value with optional inclusive limits.
    Double {
        value: f64,
        limits: Option<(f64, f64)>,
    },
    /// Selection index into an ordered label set.
    Enum { index: usize, labels: Vec<String> },
    /// Free-form text value.
    Text(String),
}

impl ParamValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Bool(_) => ParamKind::Bool,
            ParamValue::Int { .. } => ParamKind::Int,
            ParamValue::Double { .. } => ParamKind::Double,
            ParamValue::Enum { .. } => ParamKind::Enum,
            ParamValue::Text(_) => ParamKind::Text,
        }
    }
}

/// Clamps a possibly-negative selection index into `[0, count - 1]`.
///
/// An empty label set has no valid index; 0 is returned as the resting value.
pub(crate) fn clamp_index(index: isize, count: usize) -> usize {
    if count == 0 || index < 0 {
        0
    } else {
        (index as usize).min(count - 1)
    }
}
