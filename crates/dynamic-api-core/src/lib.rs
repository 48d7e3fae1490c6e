// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for dynamic-api.
//!
//! This crate provides the vocabulary shared by the build-time generator and
//! the controllers it emits. Generated code refers to it through the
//! `dynamic-api` facade.
//!
//! # Overview
//!
//! - [`DynamicController`]: Marker trait selecting a service trait for
//!   controller generation
//! - [`HttpMethod`]: The eight HTTP verbs a handler can be routed under
//! - [`BindingSource`]: Where a handler parameter is read from
//! - [`ApiExplorerSettings`], [`EndpointMeta`], [`ParameterMeta`]: Static
//!   metadata emitted next to every generated controller
//! - [`form`]: Multipart file extraction (feature `axum`)
//!
//! # Usage
//!
//! ```rust,ignore
//! use dynamic_api::prelude::*;
//!
//! #[async_trait]
//! #[route_prefix("/api/users")]
//! pub trait IUserService: DynamicController {
//!     async fn get_user(&self, id: i64) -> UserDto;
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod binding;
mod meta;
mod method;

#[cfg(feature = "axum")]
#[cfg_attr(docsrs, doc(cfg(feature = "axum")))]
pub mod form;
pub mod prelude;

pub use binding::BindingSource;
pub use meta::{ApiExplorerSettings, EndpointMeta, ParameterMeta};
pub use method::{HttpMethod, ParseHttpMethodError};

/// Marker trait for service traits that get a generated controller.
///
/// The generator scans the crate sources for traits that extend this trait,
/// directly or through another trait, and emits one axum controller per
/// trait. Implementations are shared across requests behind an `Arc`, hence
/// the `Send + Sync + 'static` bounds.
///
/// # Example
///
/// ```rust
/// use dynamic_api_core::DynamicController;
///
/// pub trait IHealthService: DynamicController {}
///
/// struct Health;
///
/// impl DynamicController for Health {}
/// impl IHealthService for Health {}
/// ```
pub trait DynamicController: Send + Sync + 'static {}

/// Re-exports used by generated controllers. Not public API.
#[cfg(feature = "axum")]
#[doc(hidden)]
pub mod __private {
    pub use async_trait;
    pub use axum;
    pub use serde;
}

#[cfg(feature = "axum")]
pub use async_trait::async_trait;
