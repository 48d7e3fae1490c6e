// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute expansion.
//!
//! Every helper validates its arguments and its target, then returns the item
//! unchanged. The controller itself is produced by the build script, which
//! reads the same attributes from source text with the same parsers.

use dynamic_api_codegen::attributes;
use proc_macro2::TokenStream;
use syn::{FnArg, ItemTrait, Pat, TraitItemFn};

/// Expand `#[route_prefix(..)]`.
pub fn route_prefix(args: TokenStream, item: TokenStream) -> TokenStream {
    checked(item, |item| {
        attributes::parse_route_prefix(args)?;
        expect_trait(item, attributes::ROUTE_PREFIX)
    })
}

/// Expand `#[api_explorer_settings(..)]`.
pub fn api_explorer_settings(args: TokenStream, item: TokenStream) -> TokenStream {
    if let Err(err) = attributes::parse_explorer_settings(args) {
        return with_item(err.write_errors(), item);
    }
    checked(item, |item| expect_trait(item, attributes::API_EXPLORER_SETTINGS))
}

/// Expand `#[http_method(..)]`.
pub fn http_method(args: TokenStream, item: TokenStream) -> TokenStream {
    checked(item, |item| {
        attributes::parse_http_method(args)?;
        expect_method(item, attributes::HTTP_METHOD).map(drop)
    })
}

/// Expand `#[default_value(..)]`.
///
/// Every listed name must be a parameter of the annotated method.
pub fn default_value(args: TokenStream, item: TokenStream) -> TokenStream {
    checked(item, |item| {
        let entries = attributes::parse_default_values(args)?;
        let method = expect_method(item, attributes::DEFAULT_VALUE)?;
        for entry in entries.values() {
            if !declares(&method, &entry.name.to_string()) {
                return Err(syn::Error::new(
                    entry.name.span(),
                    format!(
                        "parameter `{}` is listed in #[default_value] but not declared",
                        entry.name
                    )
                ));
            }
        }
        Ok(())
    })
}

/// Run `check` and return the item, preceded by the error if it failed.
fn checked(
    item: TokenStream,
    check: impl FnOnce(&TokenStream) -> syn::Result<()>
) -> TokenStream {
    match check(&item) {
        Ok(()) => item,
        Err(err) => with_item(err.to_compile_error(), item)
    }
}

/// Keep the item next to the error so follow-up diagnostics stay relevant.
fn with_item(mut error: TokenStream, item: TokenStream) -> TokenStream {
    error.extend(item);
    error
}

fn expect_trait(item: &TokenStream, attribute: &str) -> syn::Result<()> {
    syn::parse2::<ItemTrait>(item.clone())
        .map(drop)
        .map_err(|err| syn::Error::new(err.span(), format!("#[{attribute}] applies to traits")))
}

fn expect_method(item: &TokenStream, attribute: &str) -> syn::Result<TraitItemFn> {
    syn::parse2::<TraitItemFn>(item.clone()).map_err(|err| {
        syn::Error::new(err.span(), format!("#[{attribute}] applies to trait methods"))
    })
}

/// Whether `method` has a parameter bound to the plain identifier `name`.
fn declares(method: &TraitItemFn, name: &str) -> bool {
    method.sig.inputs.iter().any(|arg| match arg {
        FnArg::Typed(arg) => matches!(arg.pat.as_ref(), Pat::Ident(pat) if pat.ident == name),
        FnArg::Receiver(_) => false
    })
}
