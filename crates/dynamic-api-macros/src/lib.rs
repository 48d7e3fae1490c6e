// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Helper attributes for dynamic-api service traits.
//!
//! The attributes carry routing hints for the build-time generator. At
//! compile time they only check their arguments and the item they annotate,
//! then leave it unchanged. Use them through the `dynamic-api` facade.
//!
//! | Attribute | Target |
//! |-----------|--------|
//! | [`macro@route_prefix`] | trait |
//! | [`macro@api_explorer_settings`] | trait |
//! | [`macro@http_method`] | trait method |
//! | [`macro@default_value`] | trait method |

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

mod expand;

use proc_macro::TokenStream;

/// Route prefix shared by every endpoint of the trait.
///
/// Without it the prefix is `/api/` followed by the trait name, marker
/// letter removed, in lower case.
///
/// ```rust,ignore
/// #[route_prefix("/api/v2/users")]
/// pub trait IUserService: DynamicController {
///     async fn get_user(&self, id: i64) -> UserDto; // GET /api/v2/users/get-user/{id}
/// }
/// ```
#[proc_macro_attribute]
pub fn route_prefix(args: TokenStream, item: TokenStream) -> TokenStream {
    expand::route_prefix(args.into(), item.into()).into()
}

/// Documentation visibility of the generated controller.
///
/// | Argument | Type | Default |
/// |----------|------|---------|
/// | `ignore_api` | `bool` | `false` |
/// | `group_name` | string | none |
///
/// ```rust,ignore
/// #[api_explorer_settings(ignore_api = true)]
/// pub trait IInternalService: DynamicController { .. }
/// ```
#[proc_macro_attribute]
pub fn api_explorer_settings(args: TokenStream, item: TokenStream) -> TokenStream {
    expand::api_explorer_settings(args.into(), item.into()).into()
}

/// Explicit HTTP verb, overriding inference from the method name.
///
/// Accepts a verb name in any case, as an identifier or a string. A bare
/// `#[http_method]` selects `POST`.
///
/// ```rust,ignore
/// #[http_method(Delete)]
/// async fn get_rid_of(&self, id: i64);
/// ```
#[proc_macro_attribute]
pub fn http_method(args: TokenStream, item: TokenStream) -> TokenStream {
    expand::http_method(args.into(), item.into()).into()
}

/// Mark query parameters the request may omit.
///
/// `name = literal` supplies the default; a bare `name` falls back to the
/// type's `Default`.
///
/// ```rust,ignore
/// #[default_value(page = 1, size = 20, active = true, keyword)]
/// async fn get_list(&self, page: i32, size: i32, active: bool, keyword: String) -> Vec<Item>;
/// ```
#[proc_macro_attribute]
pub fn default_value(args: TokenStream, item: TokenStream) -> TokenStream {
    expand::default_value(args.into(), item.into()).into()
}
