// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Helper attribute parsing.
//!
//! | Attribute | Target | Arguments |
//! |-----------|--------|-----------|
//! | `#[route_prefix("/api/x")]` | trait | string literal, required |
//! | `#[api_explorer_settings(..)]` | trait | `ignore_api = bool`, `group_name = "..."` |
//! | `#[http_method(Get)]` | method | verb ident or path, defaults to `Post` |
//! | `#[default_value(page = 1, filter)]` | method | parameter names, optional literals |
//!
//! Attributes are matched by the last segment of their path, so
//! `#[dynamic_api::route_prefix(..)]` works as well as the imported form.
//!
//! Every parser comes in two forms. The `parse_*` functions take the raw
//! argument tokens, which is what an attribute macro receives. The others take
//! the attribute list of a parsed declaration and are used by the build-time
//! resolver. Both forms share the same grammar and error messages.

use std::{collections::BTreeMap, str::FromStr};

use darling::{FromMeta, ast::NestedMeta};
use dynamic_api_core::HttpMethod;
use proc_macro2::{Span, TokenStream};
use syn::{
    Attribute, Ident, Lit, LitStr, Meta, Token,
    parse::{Parse, ParseStream},
    punctuated::Punctuated
};

use crate::model::ApiVisibility;

/// Name of the route prefix attribute.
pub const ROUTE_PREFIX: &str = "route_prefix";
/// Name of the documentation settings attribute.
pub const API_EXPLORER_SETTINGS: &str = "api_explorer_settings";
/// Name of the verb override attribute.
pub const HTTP_METHOD: &str = "http_method";
/// Name of the optional parameter attribute.
pub const DEFAULT_VALUE: &str = "default_value";

/// Verb selected by a bare `#[http_method]`.
pub const DEFAULT_HTTP_METHOD: HttpMethod = HttpMethod::Post;

/// Arguments of `#[api_explorer_settings(...)]`.
///
/// Only supplied fields override [`ApiVisibility::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, FromMeta)]
pub struct ExplorerSettingsArgs {
    /// Hide the controller from API documentation.
    pub ignore_api: Option<bool>,
    /// Documentation group.
    pub group_name: Option<String>
}

impl ExplorerSettingsArgs {
    /// Apply the supplied fields over the defaults.
    pub fn into_visibility(self) -> ApiVisibility {
        let defaults = ApiVisibility::default();
        ApiVisibility {
            hidden:     self.ignore_api.unwrap_or(defaults.hidden),
            group_name: self.group_name.or(defaults.group_name)
        }
    }
}

/// One entry of `#[default_value(...)]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultEntry {
    /// Parameter name.
    pub name:    Ident,
    /// Literal source text; `None` requests the zero value.
    pub literal: Option<String>
}

impl Parse for DefaultEntry {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let name: Ident = input.parse()?;
        let literal = if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            Some(parse_literal(input)?)
        } else {
            None
        };
        Ok(Self {
            name,
            literal
        })
    }
}

/// Parse a default literal, allowing a leading minus on numbers.
fn parse_literal(input: ParseStream<'_>) -> syn::Result<String> {
    let negative = input.peek(Token![-]);
    if negative {
        input.parse::<Token![-]>()?;
    }

    let lit: Lit = input.parse()?;
    let text = match &lit {
        Lit::Int(int) => int.to_string(),
        Lit::Float(float) => float.to_string(),
        Lit::Bool(flag) if !negative => flag.value.to_string(),
        Lit::Str(_) | Lit::Char(_) if !negative => quote::ToTokens::to_token_stream(&lit).to_string(),
        _ => {
            return Err(syn::Error::new(
                lit.span(),
                "expected a number, bool, char or string literal"
            ));
        }
    };

    Ok(if negative { format!("-{text}") } else { text })
}

/// Whether an attribute path ends with `name`.
pub fn is_named(attr: &Attribute, name: &str) -> bool {
    attr.path().segments.last().is_some_and(|segment| segment.ident == name)
}

/// Find a helper attribute, rejecting duplicates.
pub fn find<'a>(attrs: &'a [Attribute], name: &str) -> syn::Result<Option<&'a Attribute>> {
    let mut matches = attrs.iter().filter(|attr| is_named(attr, name));
    let first = matches.next();
    if let Some(duplicate) = matches.next() {
        return Err(syn::Error::new_spanned(
            duplicate,
            format!("`#[{name}]` may only appear once")
        ));
    }
    Ok(first)
}

/// Argument tokens of an attribute: empty for the bare path form.
fn arguments(attr: &Attribute) -> syn::Result<TokenStream> {
    match &attr.meta {
        Meta::Path(_) => Ok(TokenStream::new()),
        Meta::List(list) => Ok(list.tokens.clone()),
        Meta::NameValue(_) => Err(syn::Error::new_spanned(
            attr,
            "expected parenthesized arguments"
        ))
    }
}

/// Parse the arguments of `#[route_prefix(...)]`.
pub fn parse_route_prefix(tokens: TokenStream) -> syn::Result<String> {
    if tokens.is_empty() {
        return Err(syn::Error::new(
            Span::call_site(),
            "route_prefix requires a string value: #[route_prefix(\"/api/...\")]"
        ));
    }
    let prefix: LitStr = syn::parse2(tokens)?;
    Ok(prefix.value())
}

/// Explicit route prefix of a trait.
///
/// A present attribute without a value is an error, not a fallback to the
/// derived prefix.
pub fn route_prefix(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let Some(attr) = find(attrs, ROUTE_PREFIX)? else {
        return Ok(None);
    };
    let tokens = arguments(attr)?;
    if tokens.is_empty() {
        return Err(syn::Error::new_spanned(
            attr,
            "route_prefix requires a string value: #[route_prefix(\"/api/...\")]"
        ));
    }
    parse_route_prefix(tokens).map(Some)
}

/// Parse the arguments of `#[api_explorer_settings(...)]`.
pub fn parse_explorer_settings(tokens: TokenStream) -> darling::Result<ExplorerSettingsArgs> {
    let items = NestedMeta::parse_meta_list(tokens)?;
    ExplorerSettingsArgs::from_list(&items)
}

/// Documentation visibility of a trait.
pub fn explorer_settings(attrs: &[Attribute]) -> darling::Result<ApiVisibility> {
    let Some(attr) = find(attrs, API_EXPLORER_SETTINGS)? else {
        return Ok(ApiVisibility::default());
    };
    let args = parse_explorer_settings(arguments(attr)?)?;
    Ok(args.into_visibility())
}

/// Parse the arguments of `#[http_method(...)]`.
///
/// Accepts a verb ident (`Get`), a path ending in one
/// (`HttpMethod::Delete`) or a string (`"PATCH"`), case-insensitively.
pub fn parse_http_method(tokens: TokenStream) -> syn::Result<HttpMethod> {
    if tokens.is_empty() {
        return Ok(DEFAULT_HTTP_METHOD);
    }

    let (name, span) = match syn::parse2::<LitStr>(tokens.clone()) {
        Ok(lit) => (lit.value(), lit.span()),
        Err(_) => {
            let path: syn::Path = syn::parse2(tokens)?;
            let segment = path
                .segments
                .last()
                .ok_or_else(|| syn::Error::new_spanned(&path, "expected an HTTP verb"))?;
            (segment.ident.to_string(), segment.ident.span())
        }
    };

    HttpMethod::from_str(&name).map_err(|err| syn::Error::new(span, err))
}

/// Explicit verb of a method, if annotated.
pub fn http_method(attrs: &[Attribute]) -> syn::Result<Option<HttpMethod>> {
    let Some(attr) = find(attrs, HTTP_METHOD)? else {
        return Ok(None);
    };
    parse_http_method(arguments(attr)?).map(Some)
}

/// Parse the arguments of `#[default_value(...)]`.
///
/// Returns entries in name order. Listing a name twice is an error.
pub fn parse_default_values(tokens: TokenStream) -> syn::Result<BTreeMap<String, DefaultEntry>> {
    let entries =
        syn::parse::Parser::parse2(Punctuated::<DefaultEntry, Token![,]>::parse_terminated, tokens)?;

    let mut by_name = BTreeMap::new();
    for entry in entries {
        let name = entry.name.to_string();
        if by_name.contains_key(&name) {
            return Err(syn::Error::new(
                entry.name.span(),
                format!("parameter `{name}` is listed twice")
            ));
        }
        by_name.insert(name, entry);
    }
    Ok(by_name)
}

/// Optional parameters declared on a method.
pub fn default_values(attrs: &[Attribute]) -> syn::Result<BTreeMap<String, DefaultEntry>> {
    match find(attrs, DEFAULT_VALUE)? {
        Some(attr) => parse_default_values(arguments(attr)?),
        None => Ok(BTreeMap::new())
    }
}
