//! Named parameter snapshots.
//!
//! A preset captures the values of a `ParameterList` in list order, without
//! the constraint metadata (limits and labels stay with the live
//! parameters). Restoring goes back through the typed setters, so clamps
//! are never bypassed.

use serde::{Deserialize, Serialize};

use super::list::ParameterList;
use super::parameter::Parameter;
use super::value::ParamKind;

/// A snapshot of one parameter value, preserving type information for
/// proper restoration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum PresetValue {
    /// Toggle state.
    Bool(bool),
    /// Integer value.
    Int(i32),
    /// Floating-point value.
    Double(f64),
    /// Enum selection index.
    Select(usize),
    /// Text value.
    Text(String),
}

impl PresetValue {
    /// Captures the current value of a parameter.
    pub fn capture(param: &Parameter) -> Self {
        match param.kind() {
            ParamKind::Bool => Self::Bool(param.as_bool().unwrap_or(false)),
            ParamKind::Int => Self::Int(param.as_int().unwrap_or(0)),
            ParamKind::Double => Self::Double(param.as_double().unwrap_or(0.0)),
            ParamKind::Enum => Self::Select(param.as_index().unwrap_or(0)),
            ParamKind::Text => Self::Text(param.as_text().unwrap_or("").to_string()),
        }
    }

    /// Returns the parameter kind this snapshot restores into.
    pub fn kind(&self) -> ParamKind {
        match self {
            Self::Bool(_) => ParamKind::Bool,
            Self::Int(_) => ParamKind::Int,
            Self::Double(_) => ParamKind::Double,
            Self::Select(_) => ParamKind::Enum,
            Self::Text(_) => ParamKind::Text,
        }
    }

    /// Writes this snapshot into a parameter of the matching kind.
    ///
    /// The value goes through the parameter's own setter, so limits and
    /// label-range clamping still apply.
    fn restore_into(&self, param: &mut Parameter) {
        match self {
            Self::Bool(v) => param.set_bool(*v),
            Self::Int(v) => param.set_int(*v),
            Self::Double(v) => param.set_double(*v),
            Self::Select(v) => param.set_index(*v as isize),
            Self::Text(v) => param.set_text(v.clone()),
        }
    }
}

/// Errors from applying a preset to a parameter list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PresetError {
    /// No preset with the given name exists in the bank.
    UnknownPreset(String),
    /// The preset holds a different number of values than the list.
    ShapeMismatch { expected: usize, found: usize },
    /// A snapshot value's kind differs from the parameter at its position.
    KindMismatch {
        position: usize,
        expected: ParamKind,
        found: ParamKind,
    },
}

impl std::fmt::Display for PresetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPreset(name) => write!(f, "Unknown preset: {}", name),
            Self::ShapeMismatch { expected, found } => {
                write!(
                    f,
                    "Preset shape mismatch: list has {} parameters, preset has {} values",
                    expected, found
                )
            }
            Self::KindMismatch {
                position,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Preset kind mismatch at position {}: parameter is {}, preset value is {}",
                    position,
                    expected.name(),
                    found.name()
                )
            }
        }
    }
}

impl std::error::Error for PresetError {}

/// A named snapshot of a parameter list's values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Human-readable preset name.
    pub name: String,
    /// Captured values in list order.
    pub values: Vec<PresetValue>,
}

impl Preset {
    /// Captures the current values of a parameter list under `name`.
    pub fn capture(name: impl Into<String>, list: &ParameterList) -> Self {
        Self {
            name: name.into(),
            values: list.iter().map(PresetValue::capture).collect(),
        }
    }

    /// Restores this preset into `list`.
    ///
    /// The whole preset is validated against the list before any value is
    /// written; a failed apply leaves the list untouched.
    pub fn apply(&self, list: &mut ParameterList) -> Result<(), PresetError> {
        if self.values.len() != list.len() {
            return Err(PresetError::ShapeMismatch {
                expected: list.len(),
                found: self.values.len(),
            });
        }
        for (position, (value, param)) in self.values.iter().zip(list.iter()).enumerate() {
            if value.kind() != param.kind() {
                return Err(PresetError::KindMismatch {
                    position,
                    expected: param.kind(),
                    found: value.kind(),
                });
            }
        }

        for (value, param) in self.values.iter().zip(list.iter_mut()) {
            value.restore_into(param);
        }
        Ok(())
    }
}

/// Ordered collection of named presets belonging to one module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetBank {
    presets: Vec<Preset>,
}

impl PresetBank {
    /// Creates an empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the list's current values under `name`.
    ///
    /// Saving under an existing name replaces that preset in place, keeping
    /// its position in the bank.
    pub fn save(&mut self, name: impl Into<String>, list: &ParameterList) {
        let preset = Preset::capture(name, list);
        match self.presets.iter_mut().find(|p| p.name == preset.name) {
            Some(existing) => *existing = preset,
            None => self.presets.push(preset),
        }
    }

    /// Returns the preset with the given name, if present.
    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Restores the named preset into `list`.
    pub fn apply(&self, name: &str, list: &mut ParameterList) -> Result<(), PresetError> {
        let preset = self
            .get(name)
            .ok_or_else(|| PresetError::UnknownPreset(name.to_string()))?;
        preset.apply(list)
    }

    /// Removes the named preset, returning it if it existed.
    pub fn remove(&mut self, name: &str) -> Option<Preset> {
        let position = self.presets.iter().position(|p| p.name == name)?;
        Some(self.presets.remove(position))
    }

    /// Iterates preset names in bank order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.name.as_str())
    }

    /// Iterates presets in bank order.
    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    /// Returns the number of presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Returns true if the bank holds no presets.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope_list() -> ParameterList {
        let mut list = ParameterList::new();
        let mut gain = Parameter::double("Gain", 1.0);
        gain.set_limits_double(0.0, 10.0);
        list.push(gain);
        list.push(Parameter::choice("Mode", &["Waveform", "Histogram"], 0));
        list.push(Parameter::toggle("Freeze", false));
        list.push(Parameter::text("Title", "Scope"));
        list
    }

    #[test]
    fn test_capture_preserves_order_and_values() {
        let list = scope_list();
        let preset = Preset::capture("Defaults", &list);

        assert_eq!(preset.name, "Defaults");
        assert_eq!(
            preset.values,
            vec![
                PresetValue::Double(1.0),
                PresetValue::Select(0),
                PresetValue::Bool(false),
                PresetValue::Text("Scope".to_string()),
            ]
        );
    }

    #[test]
    fn test_apply_restores_values() {
        let mut list = scope_list();
        let defaults = Preset::capture("Defaults", &list);

        list.iter_mut().for_each(|p| {
            p.set_double(7.5);
            p.set_index(1);
            p.set_bool(true);
            p.set_text("Edited");
        });

        defaults.apply(&mut list).unwrap();
        let restored = Preset::capture("Check", &list);
        assert_eq!(restored.values, defaults.values);
    }

    #[test]
    fn test_apply_goes_through_clamps() {
        // A snapshot taken before limits tightened still lands in range.
        let mut loose = ParameterList::new();
        loose.push(Parameter::double("Gain", 50.0));
        let preset = Preset::capture("Hot", &loose);

        let mut strict = ParameterList::new();
        let mut gain = Parameter::double("Gain", 1.0);
        gain.set_limits_double(0.0, 10.0);
        let id = strict.push(gain);

        preset.apply(&mut strict).unwrap();
        assert_eq!(strict[id].as_double(), Some(10.0));
    }

    #[test]
    fn test_shape_mismatch_leaves_list_untouched() {
        let mut list = scope_list();
        let before = Preset::capture("Before", &list);

        let short = Preset {
            name: "Short".to_string(),
            values: vec![PresetValue::Double(9.0)],
        };
        let err = short.apply(&mut list).unwrap_err();
        assert_eq!(
            err,
            PresetError::ShapeMismatch {
                expected: 4,
                found: 1
            }
        );
        assert_eq!(Preset::capture("After", &list).values, before.values);
    }

    #[test]
    fn test_kind_mismatch_leaves_list_untouched() {
        let mut list = scope_list();
        let before = Preset::capture("Before", &list);

        let mut wrong = before.clone();
        wrong.values[1] = PresetValue::Double(0.5); // Mode is an enum
        let err = wrong.apply(&mut list).unwrap_err();
        assert_eq!(
            err,
            PresetError::KindMismatch {
                position: 1,
                expected: ParamKind::Enum,
                found: ParamKind::Double,
            }
        );
        assert_eq!(Preset::capture("After", &list).values, before.values);
    }

    #[test]
    fn test_bank_save_and_apply() {
        let mut list = scope_list();
        let mut bank = PresetBank::new();
        bank.save("Defaults", &list);

        list.iter_mut().next().unwrap().set_double(3.0);
        bank.save("Boosted", &list);

        assert_eq!(bank.len(), 2);
        assert_eq!(bank.names().collect::<Vec<_>>(), vec!["Defaults", "Boosted"]);

        bank.apply("Defaults", &mut list).unwrap();
        assert_eq!(list.iter().next().unwrap().as_double(), Some(1.0));
    }

    #[test]
    fn test_bank_save_replaces_in_place() {
        let mut list = scope_list();
        let mut bank = PresetBank::new();
        bank.save("A", &list);
        bank.save("B", &list);

        list.iter_mut().next().unwrap().set_double(9.0);
        bank.save("A", &list);

        assert_eq!(bank.len(), 2);
        assert_eq!(bank.names().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(bank.get("A").unwrap().values[0], PresetValue::Double(9.0));
    }

    #[test]
    fn test_bank_unknown_preset() {
        let mut list = scope_list();
        let bank = PresetBank::new();
        let err = bank.apply("Missing", &mut list).unwrap_err();
        assert_eq!(err, PresetError::UnknownPreset("Missing".to_string()));
    }

    #[test]
    fn test_bank_remove() {
        let list = scope_list();
        let mut bank = PresetBank::new();
        bank.save("A", &list);
        bank.save("B", &list);

        assert!(bank.remove("A").is_some());
        assert!(bank.remove("A").is_none());
        assert_eq!(bank.names().collect::<Vec<_>>(), vec!["B"]);
    }

    #[test]
    fn test_error_display() {
        let err = PresetError::UnknownPreset("Hot".to_string());
        assert!(err.to_string().contains("Hot"));

        let err = PresetError::ShapeMismatch {
            expected: 4,
            found: 1,
        };
        assert!(err.to_string().contains('4'));
        assert!(err.to_string().contains('1'));

        let err = PresetError::KindMismatch {
            position: 2,
            expected: ParamKind::Enum,
            found: ParamKind::Double,
        };
        assert!(err.to_string().contains("Enum"));
        assert!(err.to_string().contains("Double"));
    }
}
