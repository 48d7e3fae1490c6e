// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator configuration.
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `marker` | `"DynamicController"` | Capability a trait must extend |
//! | `unit_suffix` | `"Controller"` | Appended to the generated type name |
//! | `simple_types` | none | Extra type names bound like scalars |
//! | `disabled` | `false` | Skip the whole pass |
//!
//! # Opt-out Switch
//!
//! Setting [`OPT_OUT_VAR`] to anything but an empty string, `0` or `false`
//! disables generation when options come from [`GeneratorOptions::from_env`].
//!
//! ```sh
//! PREVENT_DYNAMIC_API_GENERATION=1 cargo build
//! ```

use std::collections::BTreeSet;

/// Environment variable that disables generation.
pub const OPT_OUT_VAR: &str = "PREVENT_DYNAMIC_API_GENERATION";

/// Default marker capability.
pub const DEFAULT_MARKER: &str = "DynamicController";

/// Default suffix of generated unit names.
pub const DEFAULT_UNIT_SUFFIX: &str = "Controller";

/// Options controlling one generation pass.
///
/// # Example
///
/// ```rust
/// use dynamic_api_codegen::GeneratorOptions;
///
/// let options = GeneratorOptions::default()
///     .simple_type("OrderStatus")
///     .unit_suffix("Api");
/// assert!(options.is_simple_type("OrderStatus"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    marker:       String,
    unit_suffix:  String,
    simple_types: BTreeSet<String>,
    disabled:     bool
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            marker:       DEFAULT_MARKER.to_string(),
            unit_suffix:  DEFAULT_UNIT_SUFFIX.to_string(),
            simple_types: BTreeSet::new(),
            disabled:     false
        }
    }
}

impl GeneratorOptions {
    /// Default options with the opt-out switch read from the environment.
    pub fn from_env() -> Self {
        let disabled = std::env::var(OPT_OUT_VAR)
            .map(|value| is_switch_on(&value))
            .unwrap_or(false);
        Self::default().disabled(disabled)
    }

    /// Use a different marker capability.
    #[must_use]
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Use a different suffix for generated unit names.
    #[must_use]
    pub fn unit_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.unit_suffix = suffix.into();
        self
    }

    /// Bind parameters of the named type like scalars (route or query).
    ///
    /// Useful for enums that deserialize from a plain string.
    #[must_use]
    pub fn simple_type(mut self, name: impl Into<String>) -> Self {
        self.simple_types.insert(name.into());
        self
    }

    /// Enable or disable the pass.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Marker capability name.
    pub fn marker_name(&self) -> &str {
        &self.marker
    }

    /// Suffix of generated unit names.
    pub fn suffix(&self) -> &str {
        &self.unit_suffix
    }

    /// Whether `name` was registered as a simple type.
    pub fn is_simple_type(&self, name: &str) -> bool {
        self.simple_types.contains(name)
    }

    /// Whether the pass is switched off.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// Interpret an opt-out variable value.
fn is_switch_on(value: &str) -> bool {
    let value = value.trim();
    !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = GeneratorOptions::default();
        assert_eq!(options.marker_name(), "DynamicController");
        assert_eq!(options.suffix(), "Controller");
        assert!(!options.is_disabled());
        assert!(!options.is_simple_type("OrderStatus"));
    }

    #[test]
    fn builder_overrides() {
        let options = GeneratorOptions::default()
            .marker("HttpService")
            .unit_suffix("Api")
            .simple_type("OrderStatus")
            .disabled(true);
        assert_eq!(options.marker_name(), "HttpService");
        assert_eq!(options.suffix(), "Api");
        assert!(options.is_simple_type("OrderStatus"));
        assert!(options.is_disabled());
    }

    #[test]
    fn switch_values() {
        assert!(is_switch_on("1"));
        assert!(is_switch_on("true"));
        assert!(is_switch_on("yes"));
        assert!(!is_switch_on(""));
        assert!(!is_switch_on(" 0 "));
        assert!(!is_switch_on("FALSE"));
    }
}
