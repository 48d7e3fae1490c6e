// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator error type.
//!
//! Two kinds of failure flow through [`Error`]:
//!
//! | Kind | Variants | Handling |
//! |------|----------|----------|
//! | Whole pass | `Io`, `MissingEnv`, `Parse` | Returned to the build script |
//! | Per candidate | everything else | Turned into one `DA001` diagnostic |

use std::path::PathBuf;

/// Errors raised while reading sources or generating a controller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A source file or output directory could not be accessed.
    #[error("failed to access `{}`: {source}", path.display())]
    Io {
        /// Path of the file or directory.
        path:   PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error
    },

    /// A build-script environment variable is not set.
    #[error("environment variable `{0}` is not set, run from a build script")]
    MissingEnv(&'static str),

    /// A source file is not valid Rust.
    #[error("failed to parse `{}`: {source}", path.display())]
    Parse {
        /// Path of the file.
        path:   PathBuf,
        /// Underlying error.
        #[source]
        source: syn::Error
    },

    /// Malformed attribute or unexpected syntax.
    #[error("{0}")]
    Syntax(#[from] syn::Error),

    /// Malformed attribute arguments.
    #[error("{0}")]
    Attribute(#[from] darling::Error),

    /// The trait itself cannot back a controller.
    #[error("the trait {reason}")]
    UnsupportedTrait {
        /// What is wrong with it.
        reason: String
    },

    /// A trait method cannot be exposed as a handler.
    #[error("method `{method}` {reason}")]
    UnsupportedMethod {
        /// Method name.
        method: String,
        /// What is wrong with it.
        reason: String
    },

    /// A parameter cannot be bound from a request.
    #[error("parameter `{parameter}` of `{method}` {reason}")]
    UnsupportedParameter {
        /// Method name.
        method:    String,
        /// Parameter name.
        parameter: String,
        /// What is wrong with it.
        reason:    String
    },

    /// Two methods resolve to the same route.
    #[error("methods `{first}` and `{second}` both resolve to route `{route}`")]
    DuplicateRoute {
        /// Route template.
        route:  String,
        /// Method declared first.
        first:  String,
        /// Method declared second.
        second: String
    },

    /// Another trait of the same name already produced the controller file.
    #[error("controller file `{file}` is already generated for `{first}`, rename one of the traits")]
    FileConflict {
        /// Output file name.
        file:  String,
        /// Qualified name of the trait that claimed the file.
        first: String
    },

    /// A method reads more than one parameter from the request body.
    #[error("method `{method}` binds {reason}")]
    ConflictingBody {
        /// Method name.
        method: String,
        /// Which bindings collide.
        reason: String
    }
}

/// Result alias for generator operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Build an [`Error::UnsupportedTrait`].
    pub(crate) fn interface(reason: impl Into<String>) -> Self {
        Self::UnsupportedTrait {
            reason: reason.into()
        }
    }

    /// Build an [`Error::UnsupportedMethod`].
    pub(crate) fn method(method: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedMethod {
            method: method.into(),
            reason: reason.into()
        }
    }

    /// Build an [`Error::UnsupportedParameter`].
    pub(crate) fn parameter(
        method: impl Into<String>,
        parameter: impl Into<String>,
        reason: impl Into<String>
    ) -> Self {
        Self::UnsupportedParameter {
            method:    method.into(),
            parameter: parameter.into(),
            reason:    reason.into()
        }
    }

    /// Whether the error aborts the whole pass rather than one candidate.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Io { .. } | Self::MissingEnv(_) | Self::Parse { .. }
        )
    }
}
