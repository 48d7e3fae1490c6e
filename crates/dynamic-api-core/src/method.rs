// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! HTTP verbs supported by generated handlers.

use std::{fmt, str::FromStr};

/// HTTP verb a generated handler is routed under.
///
/// # Parsing
///
/// [`FromStr`] accepts any casing, so `Get`, `GET` and `get` all parse to
/// [`HttpMethod::Get`]. [`Display`](fmt::Display) renders the upper-case
/// wire form.
///
/// ```rust
/// use dynamic_api_core::HttpMethod;
///
/// let method: HttpMethod = "delete".parse().unwrap();
/// assert_eq!(method, HttpMethod::Delete);
/// assert_eq!(method.to_string(), "DELETE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `PATCH`
    Patch,
    /// `HEAD`
    Head,
    /// `OPTIONS`
    Options,
    /// `TRACE`
    Trace
}

impl HttpMethod {
    /// Every verb, in declaration order.
    pub const ALL: [HttpMethod; 8] = [
        Self::Get,
        Self::Post,
        Self::Put,
        Self::Delete,
        Self::Patch,
        Self::Head,
        Self::Options,
        Self::Trace
    ];

    /// Upper-case wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Trace => "TRACE"
        }
    }

    /// Name of the matching `axum::routing` function (`get`, `post`, ...).
    #[must_use]
    pub const fn routing_fn(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
            Self::Patch => "patch",
            Self::Head => "head",
            Self::Options => "options",
            Self::Trace => "trace"
        }
    }

    /// Rust variant name (`Get`, `Post`, ...), as written in attributes.
    #[must_use]
    pub const fn variant_name(self) -> &'static str {
        match self {
            Self::Get => "Get",
            Self::Post => "Post",
            Self::Put => "Put",
            Self::Delete => "Delete",
            Self::Patch => "Patch",
            Self::Head => "Head",
            Self::Options => "Options",
            Self::Trace => "Trace"
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known HTTP verb.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown HTTP method `{0}`, expected one of: Get, Post, Put, Delete, Patch, Head, Options, Trace")]
pub struct ParseHttpMethodError(pub String);

impl FromStr for HttpMethod {
    type Err = ParseHttpMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseHttpMethodError(s.to_string()))
    }
}
