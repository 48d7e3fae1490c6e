// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Static endpoint metadata.
//!
//! Every generated controller carries its resolved routing facts as
//! constants, so documentation tooling can list endpoints without running
//! the inference again:
//!
//! ```rust,ignore
//! for endpoint in SampleServiceController::ENDPOINTS {
//!     println!("{} {}", endpoint.method, endpoint.path);
//! }
//! ```

use crate::{BindingSource, HttpMethod};

/// Documentation visibility of a controller.
///
/// Mirrors `#[api_explorer_settings(ignore_api = .., group_name = "..")]` on
/// the source trait. Without the attribute the controller is visible and
/// ungrouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApiExplorerSettings {
    /// Hide the controller from API documentation.
    pub ignore_api: bool,

    /// Documentation group name.
    pub group_name: Option<&'static str>
}

/// Resolved routing facts of one generated handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointMeta {
    /// Trait method the handler forwards to.
    pub name: &'static str,

    /// HTTP verb.
    pub method: HttpMethod,

    /// Full route template, e.g. `/api/sample/get-item/{id}`.
    pub path: &'static str,

    /// Parameters in declaration order.
    pub parameters: &'static [ParameterMeta]
}

/// Resolved binding of one handler parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterMeta {
    /// Parameter name.
    pub name: &'static str,

    /// Request part the value is read from.
    pub source: BindingSource,

    /// Whether the request may omit the value.
    pub optional: bool,

    /// Rendered default expression for optional parameters.
    pub default_value: Option<&'static str>
}

impl EndpointMeta {
    /// Look up a parameter by name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&ParameterMeta> {
        self.parameters.iter().find(|p| p.name == name)
    }
}
