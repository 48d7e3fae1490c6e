// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Static endpoint metadata constants.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::runtime;
use crate::model::{DefaultValue, InterfaceDescriptor, MethodDescriptor, ParameterDescriptor};

/// Generate `ROUTE_PREFIX`, `API_EXPLORER_SETTINGS` and `ENDPOINTS`.
pub fn generate(descriptor: &InterfaceDescriptor, routes: &[String]) -> TokenStream {
    let runtime = runtime();
    let prefix = &descriptor.route_prefix;
    let ignore_api = descriptor.visibility.hidden;
    let group_name = match &descriptor.visibility.group_name {
        Some(group) => quote!(::core::option::Option::Some(#group)),
        None => quote!(::core::option::Option::None)
    };
    let endpoints = descriptor
        .methods
        .iter()
        .zip(routes)
        .map(|(method, route)| endpoint(method, route));

    quote! {
        /// Route prefix shared by every handler.
        pub const ROUTE_PREFIX: &'static str = #prefix;

        /// Documentation visibility.
        pub const API_EXPLORER_SETTINGS: #runtime::ApiExplorerSettings = #runtime::ApiExplorerSettings {
            ignore_api: #ignore_api,
            group_name: #group_name,
        };

        /// Resolved endpoints, in declaration order.
        pub const ENDPOINTS: &'static [#runtime::EndpointMeta] = &[#(#endpoints),*];
    }
}

fn endpoint(method: &MethodDescriptor, route: &str) -> TokenStream {
    let runtime = runtime();
    let name = method.name();
    let verb = format_ident!("{}", method.verb.variant_name());
    let parameters = method.parameters.iter().map(parameter);

    quote! {
        #runtime::EndpointMeta {
            name: #name,
            method: #runtime::HttpMethod::#verb,
            path: #route,
            parameters: &[#(#parameters),*],
        }
    }
}

fn parameter(param: &ParameterDescriptor) -> TokenStream {
    let runtime = runtime();
    let name = param.name();
    let source = format_ident!("{}", param.source.variant_name());
    let optional = param.is_optional();
    let default_value = match &param.default {
        Some(DefaultValue::Literal(text)) => quote!(::core::option::Option::Some(#text)),
        Some(DefaultValue::ZeroValue) | None => quote!(::core::option::Option::None)
    };

    quote! {
        #runtime::ParameterMeta {
            name: #name,
            source: #runtime::BindingSource::#source,
            optional: #optional,
            default_value: #default_value,
        }
    }
}
