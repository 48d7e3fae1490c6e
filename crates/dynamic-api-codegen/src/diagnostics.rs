// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation diagnostics.
//!
//! A candidate that cannot be resolved or rendered produces one diagnostic
//! and is skipped; the rest of the batch still generates.
//!
//! | Sink | Destination |
//! |------|-------------|
//! | [`CollectingSink`] | In-memory list, for tests and tooling |
//! | [`CargoSink`] | `cargo:warning=` lines from a build script |
//! | [`TracingSink`] | `tracing::warn!` events |

use std::{
    fmt,
    sync::{Mutex, PoisonError}
};

use crate::{error::Error, model::Location};

/// Code of the "failed to generate controller" diagnostic.
pub const GENERATION_FAILED: &str = "DA001";

/// Diagnostic severity.
///
/// Whole-pass failures are returned as [`Error`] instead, so every reported
/// diagnostic is a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Generation continued without the candidate.
    Warning
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Warning => "warning"
        })
    }
}

/// One reported problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity.
    pub severity:  Severity,
    /// Stable code, e.g. `DA001`.
    pub code:      &'static str,
    /// Human-readable message.
    pub message:   String,
    /// Trait the diagnostic is about.
    pub interface: String,
    /// Declaration site of the trait.
    pub location:  Location
}

impl Diagnostic {
    /// Warning for a candidate whose controller could not be generated.
    pub fn generation_failed(interface: &str, location: &Location, error: &Error) -> Self {
        Self {
            severity:  Severity::Warning,
            code:      GENERATION_FAILED,
            message:   format!("Failed to generate controller for `{interface}`: {error}"),
            interface: interface.to_string(),
            location:  location.clone()
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}[{}]: {}",
            self.location, self.severity, self.code, self.message
        )
    }
}

/// Receiver of diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// Report one diagnostic.
    fn report(&self, diagnostic: Diagnostic);
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>
}

impl CollectingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics reported so far, in report order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Consume the sink into its diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}

/// Prints diagnostics as build-script warnings.
///
/// ```text
/// cargo:warning=src/lib.rs:12:11: warning[DA001]: Failed to generate controller for `IUserService`: ...
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct CargoSink;

impl CargoSink {
    /// Build-script line for a diagnostic.
    pub fn line(diagnostic: &Diagnostic) -> String {
        format!("cargo:warning={diagnostic}")
    }
}

impl DiagnosticSink for CargoSink {
    fn report(&self, diagnostic: Diagnostic) {
        println!("{}", Self::line(&diagnostic));
    }
}

/// Emits diagnostics as `tracing` warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        tracing::warn!(
            code = diagnostic.code,
            interface = %diagnostic.interface,
            location = %diagnostic.location,
            "{}",
            diagnostic.message
        );
    }
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, sync::Arc, thread};

    use super::*;

    fn diagnostic(interface: &str) -> Diagnostic {
        let location = Location {
            file:   PathBuf::from("src/lib.rs"),
            line:   12,
            column: 11
        };
        let error = Error::method("get", "must take `&self`");
        Diagnostic::generation_failed(interface, &location, &error)
    }

    #[test]
    fn generation_failed_message() {
        let diagnostic = diagnostic("IUserService");
        assert_eq!(diagnostic.code, "DA001");
        assert_eq!(diagnostic.severity, Severity::Warning);
        assert_eq!(
            diagnostic.message,
            "Failed to generate controller for `IUserService`: method `get` must take `&self`"
        );
    }

    #[test]
    fn cargo_line() {
        assert_eq!(
            CargoSink::line(&diagnostic("IA")),
            "cargo:warning=src/lib.rs:12:11: warning[DA001]: Failed to generate controller for \
             `IA`: method `get` must take `&self`"
        );
    }

    #[test]
    fn collecting_sink_keeps_order() {
        let sink = CollectingSink::new();
        assert!(sink.is_empty());
        sink.report(diagnostic("IA"));
        sink.report(diagnostic("IB"));
        let names: Vec<_> = sink.diagnostics().into_iter().map(|d| d.interface).collect();
        assert_eq!(names, ["IA", "IB"]);
    }

    #[test]
    fn collecting_sink_tolerates_concurrent_reports() {
        let sink = Arc::new(CollectingSink::new());
        let workers: Vec<_> = (0..8)
            .map(|index| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || {
                    for _ in 0..25 {
                        sink.report(diagnostic(&format!("I{index}")));
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }
        assert_eq!(sink.diagnostics().len(), 200);
    }
}
