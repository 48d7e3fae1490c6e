// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dynamic_api_core::prelude::*;
//! ```

#[cfg(feature = "axum")]
pub use crate::{
    async_trait,
    form::{FormFile, FormFileCollection}
};
pub use crate::{
    ApiExplorerSettings, BindingSource, DynamicController, EndpointMeta, HttpMethod, ParameterMeta
};
