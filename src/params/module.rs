//! Modules: named owners of a parameter list and its presets.
//!
//! A module is the unit the property tree and the render loop both talk to.
//! Renderer implementations embed a `Module`, register their parameters into
//! it at construction time, and keep the returned handles for per-frame
//! reads.

use super::list::ParameterList;
use super::preset::{PresetBank, PresetError};

/// Shared construction context for modules.
///
/// Owns the module counter used for auto-generated names. The counter is
/// monotonic for the lifetime of the context: it increments once per module
/// construction and never resets, so destroyed modules are never subtracted.
/// One context per application (or per test) gives deterministic names.
#[derive(Debug, Default)]
pub struct ModuleContext {
    module_count: u32,
}

impl ModuleContext {
    /// Creates a fresh context with the counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many modules this context has constructed.
    pub fn module_count(&self) -> u32 {
        self.module_count
    }

    fn next_count(&mut self) -> u32 {
        self.module_count += 1;
        self.module_count
    }
}

/// A named owner of a parameter list and a bank of named presets.
///
/// Constructing a module always consumes one count from the context; an
/// empty name is replaced with `"Unnamed module #N"` where N is the count
/// just taken.
#[derive(Debug)]
pub struct Module {
    name: String,
    params: ParameterList,
    presets: PresetBank,
}

impl Module {
    /// Creates a module, auto-naming it if `name` is empty.
    pub fn new(ctx: &mut ModuleContext, name: impl Into<String>) -> Self {
        let count = ctx.next_count();
        let mut name = name.into();
        if name.is_empty() {
            name = format!("Unnamed module #{}", count);
        }
        Self {
            name,
            params: ParameterList::new(),
            presets: PresetBank::new(),
        }
    }

    /// Returns the module name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the module.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the currently active parameter set.
    pub fn params(&self) -> &ParameterList {
        &self.params
    }

    /// Returns the parameter set mutably, for registration and editing.
    pub fn params_mut(&mut self) -> &mut ParameterList {
        &mut self.params
    }

    /// Returns the preset bank.
    pub fn presets(&self) -> &PresetBank {
        &self.presets
    }

    /// Returns the preset bank mutably.
    pub fn presets_mut(&mut self) -> &mut PresetBank {
        &mut self.presets
    }

    /// Snapshots the current parameter values under `name`.
    pub fn save_preset(&mut self, name: impl Into<String>) {
        self.presets.save(name, &self.params);
    }

    /// Restores a named preset into the active parameter set.
    ///
    /// Failures are also logged at warn level, since most callers sit in a
    /// GUI event handler with nowhere better to put them.
    pub fn apply_preset(&mut self, name: &str) -> Result<(), PresetError> {
        let result = self.presets.apply(name, &mut self.params);
        if let Err(ref err) = result {
            log::warn!("Module '{}': preset apply failed: {}", self.name, err);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Parameter;

    #[test]
    fn test_auto_generated_names() {
        let mut ctx = ModuleContext::new();
        let first = Module::new(&mut ctx, "");
        let second = Module::new(&mut ctx, "");

        assert_eq!(first.name(), "Unnamed module #1");
        assert_eq!(second.name(), "Unnamed module #2");
        assert_ne!(first.name(), second.name());
    }

    #[test]
    fn test_named_construction_still_counts() {
        let mut ctx = ModuleContext::new();
        let named = Module::new(&mut ctx, "Scope");
        assert_eq!(named.name(), "Scope");
        assert_eq!(ctx.module_count(), 1);

        let unnamed = Module::new(&mut ctx, "");
        assert_eq!(unnamed.name(), "Unnamed module #2");
    }

    #[test]
    fn test_counter_never_resets() {
        let mut ctx = ModuleContext::new();
        {
            let _dropped = Module::new(&mut ctx, "");
        }
        let next = Module::new(&mut ctx, "");
        assert_eq!(next.name(), "Unnamed module #2");
        assert_eq!(ctx.module_count(), 2);
    }

    #[test]
    fn test_rename() {
        let mut ctx = ModuleContext::new();
        let mut module = Module::new(&mut ctx, "");
        module.set_name("Oscilloscope");
        assert_eq!(module.name(), "Oscilloscope");
    }

    #[test]
    fn test_parameter_registration() {
        let mut ctx = ModuleContext::new();
        let mut module = Module::new(&mut ctx, "Scope");

        let gain = module.params_mut().push(Parameter::double("Gain", 1.0));
        module.params_mut().push(Parameter::toggle("Freeze", false));

        assert_eq!(module.params().len(), 2);
        assert_eq!(module.params()[gain].as_double(), Some(1.0));
    }

    #[test]
    fn test_save_and_apply_preset() {
        let mut ctx = ModuleContext::new();
        let mut module = Module::new(&mut ctx, "Scope");
        let gain = module.params_mut().push(Parameter::double("Gain", 1.0));

        module.save_preset("Defaults");
        module.params_mut()[gain].set_double(4.0);
        module.save_preset("Loud");

        module.apply_preset("Defaults").unwrap();
        assert_eq!(module.params()[gain].as_double(), Some(1.0));

        module.apply_preset("Loud").unwrap();
        assert_eq!(module.params()[gain].as_double(), Some(4.0));

        assert!(module.apply_preset("Missing").is_err());
    }
}
