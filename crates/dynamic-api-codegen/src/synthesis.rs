// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Controller synthesis.
//!
//! Renders a resolved [`InterfaceDescriptor`] into the Rust source of an
//! axum controller. Rendering is a pure function of the descriptor: the same
//! descriptor always yields byte-identical text.
//!
//! # Generated Layout
//!
//! ```rust,ignore
//! // @generated by dynamic-api-codegen. Do not edit.
//! pub mod sample_service_controller {
//!     use super::*;
//!
//!     pub struct GetListQuery { .. }          // one per method with query params
//!     pub async fn get_list<S>(..) -> Response // one per method
//!
//!     pub struct SampleServiceController;
//!     impl SampleServiceController {
//!         pub const ROUTE_PREFIX: &'static str = "/api/sample";
//!         pub const API_EXPLORER_SETTINGS: ApiExplorerSettings = ..;
//!         pub const ENDPOINTS: &'static [EndpointMeta] = &[..];
//!         pub fn router<S>(service: Arc<S>) -> Router { .. }
//!     }
//! }
//! pub use sample_service_controller::SampleServiceController;
//! ```
//!
//! The file is meant to be `include!`d in the module that declares the trait,
//! so `use super::*` brings the trait and every type its signatures mention
//! into scope.
//!
//! # Submodules
//!
//! | Module | Generates |
//! |--------|-----------|
//! | `handlers` | Query structs and handler functions |
//! | `router` | The `router` constructor |
//! | `metadata` | `ROUTE_PREFIX`, `API_EXPLORER_SETTINGS`, `ENDPOINTS` |

mod handlers;
mod metadata;
mod router;

use std::collections::BTreeMap;

use dynamic_api_core::BindingSource;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::{
    error::{Error, Result},
    model::{InterfaceDescriptor, MethodDescriptor},
    naming,
    options::DEFAULT_UNIT_SUFFIX
};

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// @generated by dynamic-api-codegen. Do not edit.";

/// Crate path generated code refers to.
const RUNTIME: &str = "dynamic_api";

/// Path to the runtime facade, `::dynamic_api`.
pub(crate) fn runtime() -> TokenStream {
    let runtime = format_ident!("{}", RUNTIME);
    quote!(::#runtime)
}

/// Path to the re-exported axum crate.
pub(crate) fn axum() -> TokenStream {
    let runtime = runtime();
    quote!(#runtime::__private::axum)
}

/// One generated controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Source trait name.
    pub interface: String,
    /// Namespace of the source trait.
    pub namespace: String,
    /// Generated unit name, e.g. `SampleServiceController`.
    pub unit_name: String,
    /// Output file name, e.g. `sample_service_controller.rs`.
    pub file_name: String,
    /// Formatted source text.
    pub source:    String
}

/// Render a controller with the default unit suffix.
///
/// # Errors
///
/// See [`render_with_suffix`].
pub fn render(descriptor: &InterfaceDescriptor) -> Result<Artifact> {
    render_with_suffix(descriptor, DEFAULT_UNIT_SUFFIX)
}

/// Render a controller named `<trait without marker><suffix>`.
///
/// # Errors
///
/// - [`Error::DuplicateRoute`] when two methods produce one route
/// - [`Error::ConflictingBody`] when a method reads the body twice
/// - [`Error::Syntax`] when a default value is not an expression or the
///   generated tokens do not form a Rust file
pub fn render_with_suffix(descriptor: &InterfaceDescriptor, suffix: &str) -> Result<Artifact> {
    for method in &descriptor.methods {
        check_body(method)?;
    }
    let routes = plan_routes(descriptor)?;

    let name = descriptor.name();
    let unit_name = naming::unit_name(&name, suffix);
    let module_name = naming::module_name(&unit_name);
    let unit = format_ident!("{}", unit_name);
    let module = format_ident!("{}", module_name);

    let handlers = descriptor
        .methods
        .iter()
        .map(|method| handlers::generate(&descriptor.ident, method))
        .collect::<Result<Vec<_>>>()?;
    let metadata = metadata::generate(descriptor, &routes);
    let router = router::generate(descriptor, &routes);

    let module_doc = format!("Controller generated from [`{name}`].");
    let unit_doc = format!(
        "HTTP controller for [`{name}`].\n\n\
         Mount it with `{unit_name}::router(service)`."
    );

    let tokens = quote! {
        #[doc = #module_doc]
        pub mod #module {
            use super::*;

            #(#handlers)*

            #[doc = #unit_doc]
            #[derive(Debug, Clone, Copy, Default)]
            pub struct #unit;

            impl #unit {
                #metadata
                #router
            }
        }

        pub use #module::#unit;
    };

    let file: syn::File = syn::parse2(tokens)?;
    let source = format!(
        "{GENERATED_HEADER}\n// Source: {}::{}\n\n{}",
        descriptor.namespace,
        name,
        prettyplease::unparse(&file)
    );

    Ok(Artifact {
        interface: name,
        namespace: descriptor.namespace.clone(),
        file_name: format!("{module_name}.rs"),
        unit_name,
        source
    })
}

/// Full route of every method, in declaration order.
///
/// Routes that differ only in parameter names collide.
fn plan_routes(descriptor: &InterfaceDescriptor) -> Result<Vec<String>> {
    let mut seen: BTreeMap<String, String> = BTreeMap::new();
    let mut routes = Vec::with_capacity(descriptor.methods.len());

    for method in &descriptor.methods {
        let params: Vec<String> = method.bound_to(BindingSource::Route).map(|p| p.name()).collect();
        let suffix = naming::route_suffix(&method.name());
        let route = naming::route_template(
            &descriptor.route_prefix,
            &suffix,
            params.iter().map(String::as_str)
        );
        let shape = naming::route_template(
            &descriptor.route_prefix,
            &suffix,
            params.iter().map(|_| "")
        );

        if let Some(first) = seen.insert(shape, method.name()) {
            return Err(Error::DuplicateRoute {
                route,
                first,
                second: method.name()
            });
        }
        routes.push(route);
    }

    Ok(routes)
}

/// Reject methods that read the request body more than once.
fn check_body(method: &MethodDescriptor) -> Result<()> {
    let bodies = method.bound_to(BindingSource::Body).count();
    if bodies > 1 {
        return Err(Error::ConflictingBody {
            method: method.name(),
            reason: format!("{bodies} parameters from the request body, at most one is allowed")
        });
    }
    if bodies == 1 && method.bound_to(BindingSource::Form).next().is_some() {
        return Err(Error::ConflictingBody {
            method: method.name(),
            reason: "both a JSON body and multipart form files".to_string()
        });
    }
    Ok(())
}
