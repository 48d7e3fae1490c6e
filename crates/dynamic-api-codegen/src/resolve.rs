// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declaration resolution.
//!
//! Turns a raw [`InterfaceDecl`] into an immutable [`InterfaceDescriptor`] by
//! running the attribute resolver, verb inference and binding inference over
//! every method, in declaration order.
//!
//! # Resolution Flow
//!
//! ```text
//! InterfaceDecl
//!   ├── generics, where clause ─────────────────► checks
//!   ├── #[route_prefix] / default prefix ───────► route_prefix
//!   ├── #[api_explorer_settings] ───────────────► visibility
//!   └── for each method
//!         ├── receiver, generics, return type ──► checks, ReturnShape
//!         ├── #[http_method] / name inference ──► verb
//!         ├── #[default_value] ─────────────────► optional parameters
//!         └── for each parameter
//!               └── classify ─► binding cascade ► ParameterDescriptor
//! ```
//!
//! The first method that cannot be exposed fails the whole trait.

use std::collections::BTreeMap;

use dynamic_api_core::{BindingSource, HttpMethod};
use quote::ToTokens;
use syn::{FnArg, Generics, Pat, PatType, ReturnType, Type};

use crate::{
    attributes::{self, DefaultEntry},
    binding,
    error::{Error, Result},
    model::{
        InterfaceDecl, InterfaceDescriptor, MethodDecl, MethodDescriptor, ParameterDescriptor,
        ReturnShape
    },
    naming,
    options::GeneratorOptions,
    verb
};

/// Resolve a candidate trait.
///
/// # Errors
///
/// Any per-candidate failure: a generic trait, malformed helper attributes,
/// unsupported receivers, generics, parameter patterns or parameter types.
pub fn resolve_interface(
    decl: &InterfaceDecl,
    options: &GeneratorOptions
) -> Result<InterfaceDescriptor> {
    let name = decl.name();
    check_generics(&decl.generics)?;
    let route_prefix = attributes::route_prefix(&decl.attrs)?
        .map_or_else(|| naming::default_prefix(&name), |prefix| naming::normalize_prefix(&prefix));
    let visibility = attributes::explorer_settings(&decl.attrs)?;

    let methods = decl
        .methods
        .iter()
        .map(|method| resolve_method(&name, method, options))
        .collect::<Result<Vec<_>>>()?;

    Ok(InterfaceDescriptor {
        ident: decl.ident.clone(),
        namespace: decl.namespace.clone(),
        methods,
        route_prefix,
        visibility,
        capabilities: decl.capabilities.clone(),
        location: decl.location.clone()
    })
}

/// Resolve one trait method.
fn resolve_method(
    interface: &str,
    method: &MethodDecl,
    options: &GeneratorOptions
) -> Result<MethodDescriptor> {
    let sig = &method.item.sig;
    let name = sig.ident.to_string();

    if !sig.generics.params.is_empty() {
        return Err(Error::method(&name, "is generic, handlers must be concrete"));
    }
    if sig.variadic.is_some() {
        return Err(Error::method(&name, "is variadic"));
    }
    check_receiver(&name, sig.inputs.first())?;

    let returns = return_shape(&name, &sig.output)?;
    let verb = verb::resolve(attributes::http_method(&method.item.attrs)?, &name);
    let mut defaults = attributes::default_values(&method.item.attrs)?;

    let parameters = sig
        .inputs
        .iter()
        .skip(1)
        .map(|arg| match arg {
            FnArg::Typed(arg) => resolve_parameter(&name, arg, verb, &mut defaults, options),
            FnArg::Receiver(_) => Err(Error::method(&name, "has a second receiver"))
        })
        .collect::<Result<Vec<_>>>()?;

    if let Some(unknown) = defaults.into_keys().next() {
        return Err(Error::parameter(
            &name,
            unknown,
            "is listed in #[default_value] but not declared"
        ));
    }

    tracing::debug!(
        interface,
        method = %name,
        %verb,
        parameters = parameters.len(),
        "resolved method"
    );

    Ok(MethodDescriptor {
        interface: interface.to_string(),
        ident: sig.ident.clone(),
        is_async: sig.asyncness.is_some(),
        returns,
        verb,
        parameters
    })
}

/// Handlers bound by `S: Trait` need a trait without parameters.
fn check_generics(generics: &Generics) -> Result<()> {
    if !generics.params.is_empty() {
        return Err(Error::interface(format!(
            "is generic over `{}`, controllers need a concrete trait",
            generics.params.to_token_stream()
        )));
    }
    if generics.where_clause.is_some() {
        return Err(Error::interface("has a `where` clause, move the bounds to supertraits"));
    }
    Ok(())
}

fn check_receiver(method: &str, first: Option<&FnArg>) -> Result<()> {
    let ok = match first {
        Some(FnArg::Receiver(receiver)) => {
            receiver.reference.is_some()
                && receiver.mutability.is_none()
                && receiver.colon_token.is_none()
        }
        _ => false
    };
    if ok {
        Ok(())
    } else {
        Err(Error::method(method, "must take `&self`"))
    }
}

fn return_shape(method: &str, output: &ReturnType) -> Result<ReturnShape> {
    let ty = match output {
        ReturnType::Default => return Ok(ReturnShape::Unit),
        ReturnType::Type(_, ty) => ty.as_ref()
    };

    match ty {
        Type::Tuple(tuple) if tuple.elems.is_empty() => Ok(ReturnShape::Unit),
        Type::ImplTrait(_) => Err(Error::method(
            method,
            "returns `impl Trait`, declare it `async fn` with a concrete type"
        )),
        Type::Reference(_) => Err(Error::method(method, "must return an owned type")),
        _ => Ok(result_args(ty).map_or_else(
            || ReturnShape::Value(ty.clone()),
            |(ok, err)| ReturnShape::Fallible { ok, err }
        ))
    }
}

/// Success and error types of a `Result`-like return type.
fn result_args(ty: &Type) -> Option<(Type, Option<Type>)> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Result" {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    let mut types = args.args.iter().filter_map(|arg| match arg {
        syn::GenericArgument::Type(ty) => Some(ty.clone()),
        _ => None
    });
    let ok = types.next()?;
    Some((ok, types.next()))
}

fn resolve_parameter(
    method: &str,
    arg: &PatType,
    verb: HttpMethod,
    defaults: &mut BTreeMap<String, DefaultEntry>,
    options: &GeneratorOptions
) -> Result<ParameterDescriptor> {
    let ident = match arg.pat.as_ref() {
        Pat::Ident(pat) if pat.by_ref.is_none() && pat.subpat.is_none() => pat.ident.clone(),
        pat => {
            return Err(Error::parameter(
                method,
                pat.to_token_stream().to_string(),
                "must be a plain identifier"
            ));
        }
    };
    let name = ident.to_string();

    match arg.ty.as_ref() {
        Type::Reference(_) => {
            return Err(Error::parameter(
                method,
                &name,
                "must be an owned type, references cannot be extracted from a request"
            ));
        }
        Type::ImplTrait(_) => {
            return Err(Error::parameter(method, &name, "cannot be `impl Trait`"));
        }
        _ => {}
    }

    let ty = arg.ty.as_ref().clone();
    let nullable = binding::option_inner(&ty).is_some();
    let shape = binding::classify(&ty, options);
    let source = binding::resolve(shape, &name, verb);
    let default = defaults
        .remove(&name)
        .map(|entry| binding::default_value(entry.literal.as_deref()));

    if default.is_some() && source != BindingSource::Query {
        return Err(Error::parameter(
            method,
            &name,
            format!("is bound from {source} and cannot take a default value, use `Option<_>`")
        ));
    }

    Ok(ParameterDescriptor {
        ident,
        ty,
        shape,
        source,
        nullable,
        default
    })
}
