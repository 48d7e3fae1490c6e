// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Handler generation.
//!
//! One `async fn` per trait method. Extractors appear in a fixed order, with
//! the body-consuming one last as axum requires:
//!
//! | Order | Parameters | Extractor |
//! |-------|------------|-----------|
//! | 1 | service | `State<Arc<S>>` |
//! | 2 | route | `Path<T>` or `Path<(A, B, ..)>` |
//! | 3 | query | `Query<{Method}Query>` |
//! | 4 | body | `Json<T>` |
//! | 4 | form | `Multipart` |
//!
//! # Optional Query Parameters
//!
//! | Declared | Default | Field | Argument |
//! |----------|---------|-------|----------|
//! | `T` | none | `T` | `query.x` |
//! | `Option<T>` | none or zero | `Option<T>` | `query.x` |
//! | `Option<T>` | literal | `Option<T>` | `query.x.or(Some(lit))` |
//! | `T` | zero | `Option<T>` | `query.x.unwrap_or(Default::default())` |
//! | `T` | literal | `Option<T>` | `query.x.unwrap_or(lit)` |
//!
//! String literals are passed through `Into::into`, so `name = "guest"`
//! works for `String` parameters.

use dynamic_api_core::BindingSource;
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{Expr, ExprLit, Ident, Lit, Type};

use super::{RUNTIME, axum, runtime};
use crate::{
    binding,
    error::Result,
    model::{DefaultValue, FileShape, MethodDescriptor, ParameterDescriptor, ReturnShape, TypeShape},
    naming
};

/// Generate the query struct (if any) and handler of one method.
///
/// # Errors
///
/// [`Error::Syntax`](crate::Error::Syntax) when a default value is not a
/// Rust expression.
pub fn generate(interface: &Ident, method: &MethodDescriptor) -> Result<TokenStream> {
    let ax = axum();
    let handler = &method.ident;
    let query_ident = format_ident!("{}", naming::query_struct_name(&method.name()));

    let mut extractors = vec![quote! {
        #ax::extract::State(__service): #ax::extract::State<::std::sync::Arc<S>>
    }];
    if let Some(path) = path_extractor(method) {
        extractors.push(path);
    }

    let query_struct = query_struct(method, &query_ident);
    if query_struct.is_some() {
        extractors.push(quote! {
            #ax::extract::Query(__query): #ax::extract::Query<#query_ident>
        });
    }

    let body: Option<&ParameterDescriptor> = method.bound_to(BindingSource::Body).next();
    if let Some(param) = body {
        let ident = &param.ident;
        let ty = &param.ty;
        extractors.push(quote!(#ax::Json(#ident): #ax::Json<#ty>));
    }

    let form = form_bindings(method);
    if !form.is_empty() {
        extractors.push(quote!(__multipart: #ax::extract::Multipart));
    }

    let args = method
        .parameters
        .iter()
        .map(argument)
        .collect::<syn::Result<Vec<_>>>()?;
    let call_await = method.is_async.then(|| quote!(.await));
    let call = quote! {
        <S as #interface>::#handler(&*__service, #(#args),*) #call_await
    };
    let respond = respond(method, call);

    let doc = format!(
        "Handler forwarding to [`{}::{}`].",
        plain_name(interface),
        method.name()
    );

    Ok(quote! {
        #query_struct

        #[doc = #doc]
        pub async fn #handler<S>(#(#extractors),*) -> #ax::response::Response
        where
            S: #interface + ::core::marker::Send + ::core::marker::Sync + 'static,
        {
            #(#form)*
            #respond
        }
    })
}

fn plain_name(ident: &Ident) -> String {
    syn::ext::IdentExt::unraw(ident).to_string()
}

/// Type a route parameter is extracted as: the declared type without `Option`.
fn route_type(param: &ParameterDescriptor) -> &Type {
    binding::option_inner(&param.ty).unwrap_or(&param.ty)
}

fn path_extractor(method: &MethodDescriptor) -> Option<TokenStream> {
    let ax = axum();
    let params: Vec<&ParameterDescriptor> = method.bound_to(BindingSource::Route).collect();
    match params.as_slice() {
        [] => None,
        [param] => {
            let ident = &param.ident;
            let ty = route_type(param);
            Some(quote!(#ax::extract::Path(#ident): #ax::extract::Path<#ty>))
        }
        many => {
            let idents = many.iter().map(|p| &p.ident);
            let types = many.iter().map(|p| route_type(p));
            Some(quote! {
                #ax::extract::Path((#(#idents),*)): #ax::extract::Path<(#(#types),*)>
            })
        }
    }
}

fn query_struct(method: &MethodDescriptor, query_ident: &Ident) -> Option<TokenStream> {
    let runtime = runtime();
    let serde_path = format!("::{RUNTIME}::__private::serde");
    let fields: Vec<TokenStream> = method
        .bound_to(BindingSource::Query)
        .map(|param| {
            let ident = &param.ident;
            let ty = &param.ty;
            if !param.nullable && param.default.is_some() {
                quote!(pub #ident: ::core::option::Option<#ty>)
            } else {
                quote!(pub #ident: #ty)
            }
        })
        .collect();

    if fields.is_empty() {
        return None;
    }

    let doc = format!("Query string of [`{}`].", method.name());
    Some(quote! {
        #[doc = #doc]
        #[derive(#runtime::__private::serde::Deserialize)]
        #[serde(crate = #serde_path)]
        pub struct #query_ident {
            #(#fields),*
        }
    })
}

/// Default expression, string literals converted into the parameter type.
fn literal_expr(name: &str, text: &str) -> syn::Result<TokenStream> {
    match syn::parse_str::<Expr>(text) {
        Ok(Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        })) => Ok(quote!(::core::convert::Into::into(#lit))),
        Ok(expr) => Ok(quote!(#expr)),
        Err(err) => Err(syn::Error::new(
            Span::call_site(),
            format!("default value `{text}` of parameter `{name}` is not an expression: {err}")
        ))
    }
}

/// Expression passed to the trait method for one parameter.
fn argument(param: &ParameterDescriptor) -> syn::Result<TokenStream> {
    let ident = &param.ident;
    Ok(match param.source {
        BindingSource::Route if param.nullable => quote!(::core::option::Option::Some(#ident)),
        BindingSource::Route | BindingSource::Body | BindingSource::Form => quote!(#ident),
        BindingSource::Query => match (&param.default, param.default_expr()) {
            (Some(DefaultValue::Literal(text)), _) if param.nullable => {
                let lit = literal_expr(&param.name(), text)?;
                quote!(__query.#ident.or(::core::option::Option::Some(#lit)))
            }
            (Some(_), Some(expr)) if !param.nullable => {
                let expr = literal_expr(&param.name(), expr)?;
                quote!(__query.#ident.unwrap_or(#expr))
            }
            _ => quote!(__query.#ident)
        }
    })
}

/// Statements reading the multipart body into form parameters.
///
/// Named files are taken first so that a `FormFileCollection` parameter
/// receives whatever is left, wherever it is declared.
fn form_bindings(method: &MethodDescriptor) -> Vec<TokenStream> {
    let runtime = runtime();
    let ax = axum();
    let params: Vec<&ParameterDescriptor> = method.bound_to(BindingSource::Form).collect();
    if params.is_empty() {
        return Vec::new();
    }

    let mut statements = vec![quote! {
        let mut __files = match #runtime::form::read_multipart(__multipart).await {
            ::core::result::Result::Ok(files) => files,
            ::core::result::Result::Err(err) => {
                return #ax::response::IntoResponse::into_response(err);
            }
        };
    }];

    let shape = |param: &ParameterDescriptor| match param.shape {
        TypeShape::File(shape) => shape,
        TypeShape::Simple | TypeShape::Complex => FileShape::Collection
    };
    let (rest, named): (Vec<_>, Vec<_>) = params
        .into_iter()
        .partition(|param| shape(*param) == FileShape::Collection);

    for param in named.into_iter().chain(rest) {
        let ident = &param.ident;
        let name = param.name();
        let value = match (shape(param), param.nullable) {
            (FileShape::Single, false) => quote! {
                match __files.require(#name) {
                    ::core::result::Result::Ok(file) => file,
                    ::core::result::Result::Err(err) => {
                        return #ax::response::IntoResponse::into_response(err);
                    }
                }
            },
            (FileShape::Single, true) => quote!(__files.take(#name)),
            (FileShape::Sequence, false) => quote!(__files.take_all(#name).into_vec()),
            (FileShape::Sequence, true) => quote! {
                ::core::option::Option::Some(__files.take_all(#name).into_vec())
                    .filter(|files| !files.is_empty())
            },
            (FileShape::Collection, false) => quote!(::core::mem::take(&mut __files)),
            (FileShape::Collection, true) => quote! {
                ::core::option::Option::Some(::core::mem::take(&mut __files))
                    .filter(|files| !files.is_empty())
            }
        };
        statements.push(quote!(let #ident = #value;));
    }

    statements
}

/// Call the trait method and convert its result into a response.
///
/// `()` and `Ok(())` answer `204 No Content`, values are JSON and errors use
/// their own `IntoResponse`.
fn respond(method: &MethodDescriptor, call: TokenStream) -> TokenStream {
    let ax = axum();
    match &method.returns {
        ReturnShape::Unit => quote! {
            #call;
            #ax::response::IntoResponse::into_response(#ax::http::StatusCode::NO_CONTENT)
        },
        ReturnShape::Value(_) => quote! {
            let __result = #call;
            #ax::response::IntoResponse::into_response(#ax::Json(__result))
        },
        ReturnShape::Fallible { ok, err } if is_unit(ok) => {
            let reject = reject(err.as_ref());
            quote! {
                match #call {
                    ::core::result::Result::Ok(()) => {
                        #ax::response::IntoResponse::into_response(#ax::http::StatusCode::NO_CONTENT)
                    }
                    ::core::result::Result::Err(err) => #reject
                }
            }
        }
        ReturnShape::Fallible { err, .. } => {
            let reject = reject(err.as_ref());
            quote! {
                match #call {
                    ::core::result::Result::Ok(value) => {
                        #ax::response::IntoResponse::into_response(#ax::Json(value))
                    }
                    ::core::result::Result::Err(err) => #reject
                }
            }
        }
    }
}

/// Error conversion, naming the declared error type when there is one so a
/// missing `IntoResponse` impl is reported against it.
fn reject(err: Option<&Type>) -> TokenStream {
    let ax = axum();
    match err {
        Some(ty) => quote!(<#ty as #ax::response::IntoResponse>::into_response(err)),
        None => quote!(#ax::response::IntoResponse::into_response(err))
    }
}

fn is_unit(ty: &Type) -> bool {
    matches!(ty, syn::Type::Tuple(tuple) if tuple.elems.is_empty())
}
