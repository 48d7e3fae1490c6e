// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Router constructor generation.
//!
//! ```rust,ignore
//! pub fn router<S>(service: Arc<S>) -> axum::Router
//! where
//!     S: ISampleService + Send + Sync + 'static,
//! {
//!     axum::Router::new()
//!         .route("/api/sample/get-item/{id}", axum::routing::get(get_item::<S>))
//!         .with_state(service)
//! }
//! ```

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::axum;
use crate::model::InterfaceDescriptor;

/// Generate the `router` associated function.
pub fn generate(descriptor: &InterfaceDescriptor, routes: &[String]) -> TokenStream {
    let ax = axum();
    let interface = &descriptor.ident;
    let routes = descriptor.methods.iter().zip(routes).map(|(method, route)| {
        let handler = &method.ident;
        let routing = format_ident!("{}", method.verb.routing_fn());
        quote!(.route(#route, #ax::routing::#routing(#handler::<S>)))
    });

    quote! {
        /// Build the axum router serving every endpoint of the trait.
        pub fn router<S>(service: ::std::sync::Arc<S>) -> #ax::Router
        where
            S: #interface + ::core::marker::Send + ::core::marker::Sync + 'static,
        {
            #ax::Router::new()
                #(#routes)*
                .with_state(service)
        }
    }
}
