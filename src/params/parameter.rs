//! The parameter cell: a named, typed, UI-editable value.
//!
//! Parameters are the controllable values on modules (toggles, numeric
//! sliders, label choices, text fields). Out-of-range assignments are
//! silently clamped; nothing in a parameter cell can fail.

use super::value::{clamp_index, ParamKind, ParamValue};

/// A named, typed value cell with optional range/label constraints.
///
/// Fields are private so the clamp invariants hold by construction:
/// a numeric value with active limits is always within them, and an enum
/// selection index is always a valid position in its label set.
///
/// Typed setters on a cell of a different kind are silent no-ops; callers
/// that care can check `kind()` first. This is deliberate — the parameter
/// registry has no failure surface.
///
/// # Example
///
/// ```
/// use modview::params::Parameter;
///
/// let mut gain = Parameter::double("Gain", 1.0);
/// gain.set_limits_double(0.0, 10.0);
/// gain.set_double(15.0);
/// assert_eq!(gain.as_double(), Some(10.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    name: String,
    value: ParamValue,
}

impl Parameter {
    /// Creates an on/off toggle parameter.
    pub fn toggle(name: impl Into<String>, default: bool) -> Self {
        Self {
            name: name.into(),
            value: ParamValue::Bool(default),
        }
    }

    /// Creates an integer parameter with no limits.
    pub fn int(name: impl Into<String>, default: i32) -> Self {
        Self {
            name: name.into(),
            value: ParamValue::Int {
                value: default,
                limits: None,
            },
        }
    }

    /// Creates a floating-point parameter with no limits.
    pub fn double(name: impl Into<String>, default: f64) -> Self {
        Self {
            name: name.into(),
            value: ParamValue::Double {
                value: default,
                limits: None,
            },
        }
    }

    /// Creates a choice parameter over a fixed, ordered label set.
    ///
    /// The default index is clamped into the label range.
    pub fn choice(name: impl Into<String>, labels: &[&str], default_index: usize) -> Self {
        let labels: Vec<String> = labels.iter().map(|label| label.to_string()).collect();
        let index = clamp_index(default_index as isize, labels.len());
        Self {
            name: name.into(),
            value: ParamValue::Enum { index, labels },
        }
    }

    /// Creates a free-form text parameter.
    pub fn text(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: ParamValue::Text(default.into()),
        }
    }

    /// Returns the display name. Names are not required to be unique.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the parameter.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the kind of value this cell holds.
    pub fn kind(&self) -> ParamKind {
        self.value.kind()
    }

    /// Returns the current value and its constraint metadata.
    pub fn value(&self) -> &ParamValue {
        &self.value
    }

    /// Returns the toggle state, or `None` for non-bool cells.
    pub fn as_bool(&self) -> Option<bool> {
        match &self.value {
            ParamValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the integer value, or `None` for non-int cells.
    pub fn as_int(&self) -> Option<i32> {
        match &self.value {
            ParamValue::Int { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Returns the floating-point value, or `None` for non-double cells.
    pub fn as_double(&self) -> Option<f64> {
        match &self.value {
            ParamValue::Double { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Returns the selection index, or `None` for non-enum cells.
    pub fn as_index(&self) -> Option<usize> {
        match &self.value {
            ParamValue::Enum { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Returns the text value, or `None` for non-text cells.
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            ParamValue::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Returns the active integer limits, if any.
    pub fn int_limits(&self) -> Option<(i32, i32)> {
        match &self.value {
            ParamValue::Int { limits, .. } => *limits,
            _ => None,
        }
    }

    /// Returns the active floating-point limits, if any.
    pub fn double_limits(&self) -> Option<(f64, f64)> {
        match &self.value {
            ParamValue::Double { limits, .. } => *limits,
            _ => None,
        }
    }

    /// Returns the label set for enum cells, empty otherwise.
    pub fn labels(&self) -> &[String] {
        match &self.value {
            ParamValue::Enum { labels, .. } => labels,
            _ => &[],
        }
    }

    /// Returns the number of labels for enum cells, 0 otherwise.
    pub fn label_count(&self) -> usize {
        self.labels().len()
    }

    /// Returns the label at position `i`, if it exists.
    pub fn label(&self, i: usize) -> Option<&str> {
        self.labels().get(i).map(String::as_str)
    }

    /// Stores a toggle state. No-op on non-bool cells.
    pub fn set_bool(&mut self, v: bool) {
        if let ParamValue::Bool(value) = &mut self.value {
            *value = v;
        }
    }

    /// Stores an integer, clamped to the active limits. No-op on non-int
    /// cells.
    pub fn set_int(&mut self, v: i32) {
        if let ParamValue::Int { value, limits } = &mut self.value {
            *value = match limits {
                Some((lo, hi)) => v.clamp(*lo, *hi),
                None => v,
            };
        }
    }

    /// Stores a floating-point value, clamped to the active limits. No-op on
    /// non-double cells.
    pub fn set_double(&mut self, v: f64) {
        if let ParamValue::Double { value, limits } = &mut self.value {
            *value = match limits {
                Some((lo, hi)) => v.clamp(*lo, *hi),
                None => v,
            };
        }
    }

    /// Stores a selection index, clamped into `[0, label_count - 1]`.
    /// Negative indices clamp to 0. No-op on non-enum cells.
    pub fn set_index(&mut self, i: isize) {
        if let ParamValue::Enum { index, labels } = &mut self.value {
            *index = clamp_index(i, labels.len());
        }
    }

    /// Stores a text value. No-op on non-text cells.
    pub fn set_text(&mut self, v: impl Into<String>) {
        if let ParamValue::Text(value) = &mut self.value {
            *value = v.into();
        }
    }

    /// Enables integer range clamping. Passing `hi < lo` disables limits
    /// instead. The current value is re-clamped so it stays within the new
    /// range. No-op on non-int cells.
    pub fn set_limits_int(&mut self, lo: i32, hi: i32) {
        if let ParamValue::Int { value, limits } = &mut self.value {
            if hi < lo {
                *limits = None;
            } else {
                *limits = Some((lo, hi));
                *value = (*value).clamp(lo, hi);
            }
        }
    }

    /// Enables floating-point range clamping. Passing `hi < lo` disables
    /// limits instead. The current value is re-clamped so it stays within
    /// the new range. No-op on non-double cells.
    pub fn set_limits_double(&mut self, lo: f64, hi: f64) {
        if let ParamValue::Double { value, limits } = &mut self.value {
            if hi < lo {
                *limits = None;
            } else {
                *limits = Some((lo, hi));
                *value = (*value).clamp(lo, hi);
            }
        }
    }
}
