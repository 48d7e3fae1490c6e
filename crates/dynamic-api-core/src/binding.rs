// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Request binding sources.

use std::fmt;

/// Part of an incoming request a handler parameter is read from.
///
/// | Source | axum extractor |
/// |--------|----------------|
/// | `Form` | `Multipart` |
/// | `Body` | `Json<T>` |
/// | `Route` | `Path<T>` |
/// | `Query` | `Query<T>` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BindingSource {
    /// Multipart form upload.
    Form,
    /// JSON request body.
    Body,
    /// Route segment.
    Route,
    /// Query string.
    Query
}

impl BindingSource {
    /// Lower-case name, as used in endpoint metadata.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::Body => "body",
            Self::Route => "route",
            Self::Query => "query"
        }
    }

    /// Rust variant name (`Form`, `Body`, ...).
    #[must_use]
    pub const fn variant_name(self) -> &'static str {
        match self {
            Self::Form => "Form",
            Self::Body => "Body",
            Self::Route => "Route",
            Self::Query => "Query"
        }
    }
}

impl fmt::Display for BindingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
