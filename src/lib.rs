// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! # dynamic-api
//!
//! Expose a service trait over HTTP without writing routes. A build script
//! finds every trait extending [`DynamicController`], infers each method's
//! route, verb and parameter sources from its signature, and writes an axum
//! controller next to the trait.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! dynamic-api = "0.1"
//!
//! [build-dependencies]
//! dynamic-api-codegen = "0.1"
//! ```
//!
//! ```rust,ignore
//! // build.rs
//! fn main() {
//!     dynamic_api_codegen::build::generate().expect("controller generation failed");
//! }
//! ```
//!
//! ```rust,ignore
//! // src/services.rs
//! use dynamic_api::prelude::*;
//!
//! #[async_trait]
//! #[route_prefix("/api/users")]
//! pub trait IUserService: DynamicController {
//!     async fn get_user(&self, id: i64) -> UserDto;            // GET    /api/users/get-user/{id}
//!     async fn find_users(&self, keyword: String) -> Vec<UserDto>; // GET  /api/users/find-users?keyword=
//!     async fn create_user(&self, user: CreateUser) -> UserDto; // POST   /api/users/create-user
//!     async fn delete_user(&self, id: i64);                    // DELETE /api/users/delete-user/{id}
//! }
//!
//! include!(concat!(env!("OUT_DIR"), "/user_service_controller.rs"));
//!
//! // src/main.rs
//! let app = UserServiceController::router(Arc::new(MyUsers::default()));
//! ```
//!
//! ## Inference
//!
//! | Fact | Explicit | Inferred |
//! |------|----------|----------|
//! | Route prefix | [`macro@route_prefix`] | `/api/<name without leading I, lower case>` |
//! | Verb | [`macro@http_method`] | `Get*`/`Find*`.. → GET, `Create*`/`Add*`.. → POST, `Update*`.. → PUT, `Delete*`/`Remove*`.. → DELETE, `Patch*` → PATCH, else POST |
//! | Parameter source | | [`FormFile`](form::FormFile) → form, DTO → body, `*id*`/`*key*`/`*code*` → route, else query |
//! | Optional query parameter | [`macro@default_value`] | `Option<T>` |
//! | Visibility | [`macro@api_explorer_settings`] | shown, no group |
//!
//! A trait that cannot be exposed, for example one with two body parameters
//! in a method, gets no controller and a `DA001` build warning.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

pub use dynamic_api_core::*;
pub use dynamic_api_macros::{api_explorer_settings, default_value, http_method, route_prefix};

/// Everything a service trait declaration needs.
///
/// ```rust,ignore
/// use dynamic_api::prelude::*;
/// ```
pub mod prelude {
    pub use dynamic_api_core::prelude::*;
    pub use dynamic_api_macros::{api_explorer_settings, default_value, http_method, route_prefix};
}
