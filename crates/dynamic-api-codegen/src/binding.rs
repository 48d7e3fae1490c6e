// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parameter binding inference.
//!
//! Every handler parameter is first classified by its declared type, then
//! assigned a request source by a strict cascade where the first matching
//! rule wins:
//!
//! | Rule | Condition | Source |
//! |------|-----------|--------|
//! | 1 | File shape | `Form` |
//! | 2 | Not simple | `Body` |
//! | 3 | A name word ends with `id`, `key` or `code` | `Route` |
//! | 4 | Verb is `GET` or `DELETE` | `Query` |
//! | 5 | Otherwise | `Query` |
//!
//! Names are split into words at underscores and case changes, so
//! `user_id`, `ApiKey`, `zipcode` and `userid` are route parameters while
//! `keyword` is not.
//!
//! # Classification
//!
//! One `Option<_>` layer is peeled before classifying, so `Option<u32>` is
//! simple and `Option<FormFile>` is a single file.
//!
//! ```text
//! FormFile | FormFileCollection | Vec<FormFile>   → File
//! bool, char, integers, floats, String, scalars   → Simple
//! registered simple types                         → Simple
//! anything else                                   → Complex
//! ```

use convert_case::{Case, Casing};
use dynamic_api_core::{BindingSource, HttpMethod};
use syn::{GenericArgument, PathArguments, Type, TypePath};

use crate::{
    model::{DefaultValue, FileShape, TypeShape},
    options::GeneratorOptions
};

/// Primitive and text types.
const PRIMITIVES: &[&str] = &[
    "bool", "char", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64",
    "u128", "usize", "f32", "f64", "String"
];

/// Scalar library types that deserialize from a single string or number.
const SCALARS: &[&str] = &[
    "Decimal",
    "DateTime",
    "NaiveDate",
    "NaiveDateTime",
    "NaiveTime",
    "Date",
    "Time",
    "OffsetDateTime",
    "PrimitiveDateTime",
    "Uuid",
    "Ulid",
    "Duration",
    "SystemTime",
    "Value"
];

/// Word endings that make a simple parameter part of the route.
const ROUTE_FRAGMENTS: &[&str] = &["id", "key", "code"];

/// Return the inner type if `ty` is `Option<T>`.
pub fn option_inner(ty: &Type) -> Option<&Type> {
    generic_arg(ty, "Option")
}

/// Classify a declared parameter type.
pub fn classify(ty: &Type, options: &GeneratorOptions) -> TypeShape {
    let ty = option_inner(ty).unwrap_or(ty);

    if let Some(shape) = file_shape(ty) {
        return TypeShape::File(shape);
    }

    match last_ident(ty) {
        Some(name) if is_simple_name(&name, options) => TypeShape::Simple,
        _ => TypeShape::Complex
    }
}

/// Resolve the binding source of a parameter.
///
/// ```rust
/// use dynamic_api_codegen::{binding::resolve, model::TypeShape};
/// use dynamic_api_core::{BindingSource, HttpMethod};
///
/// assert_eq!(
///     resolve(TypeShape::Simple, "user_id", HttpMethod::Get),
///     BindingSource::Route
/// );
/// assert_eq!(
///     resolve(TypeShape::Complex, "user_id", HttpMethod::Get),
///     BindingSource::Body
/// );
/// ```
pub fn resolve(shape: TypeShape, name: &str, verb: HttpMethod) -> BindingSource {
    match shape {
        TypeShape::File(_) => BindingSource::Form,
        TypeShape::Complex => BindingSource::Body,
        TypeShape::Simple if is_route_name(name) => BindingSource::Route,
        TypeShape::Simple => match verb {
            HttpMethod::Get | HttpMethod::Delete => BindingSource::Query,
            _ => BindingSource::Query
        }
    }
}

/// Default for a parameter listed in `#[default_value]`.
///
/// A bare entry requests the zero value; a literal is kept as written.
pub fn default_value(literal: Option<&str>) -> DefaultValue {
    literal.map_or(DefaultValue::ZeroValue, |text| {
        DefaultValue::Literal(text.to_string())
    })
}

fn is_route_name(name: &str) -> bool {
    name.to_case(Case::Snake)
        .split('_')
        .any(|word| ROUTE_FRAGMENTS.iter().any(|fragment| word.ends_with(fragment)))
}

fn is_simple_name(name: &str, options: &GeneratorOptions) -> bool {
    PRIMITIVES.contains(&name) || SCALARS.contains(&name) || options.is_simple_type(name)
}

fn file_shape(ty: &Type) -> Option<FileShape> {
    if let Some(inner) = generic_arg(ty, "Vec") {
        return (last_ident(inner).as_deref() == Some("FormFile")).then_some(FileShape::Sequence);
    }
    match last_ident(ty).as_deref() {
        Some("FormFile") => Some(FileShape::Single),
        Some("FormFileCollection") => Some(FileShape::Collection),
        _ => None
    }
}

fn type_path(ty: &Type) -> Option<&TypePath> {
    match ty {
        Type::Path(path) if path.qself.is_none() => Some(path),
        Type::Group(group) => type_path(&group.elem),
        Type::Paren(paren) => type_path(&paren.elem),
        _ => None
    }
}

fn last_ident(ty: &Type) -> Option<String> {
    type_path(ty)
        .and_then(|path| path.path.segments.last())
        .map(|segment| segment.ident.to_string())
}

fn generic_arg<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let segment = type_path(ty)?.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
        _ => None
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn shape(ty: Type) -> TypeShape {
        classify(&ty, &GeneratorOptions::default())
    }

    #[test]
    fn primitives_and_text_are_simple() {
        assert_eq!(shape(parse_quote!(i32)), TypeShape::Simple);
        assert_eq!(shape(parse_quote!(bool)), TypeShape::Simple);
        assert_eq!(shape(parse_quote!(String)), TypeShape::Simple);
        assert_eq!(shape(parse_quote!(std::string::String)), TypeShape::Simple);
        assert_eq!(shape(parse_quote!(Option<u64>)), TypeShape::Simple);
    }

    #[test]
    fn scalars_are_simple() {
        assert_eq!(shape(parse_quote!(uuid::Uuid)), TypeShape::Simple);
        assert_eq!(shape(parse_quote!(DateTime<Utc>)), TypeShape::Simple);
        assert_eq!(shape(parse_quote!(rust_decimal::Decimal)), TypeShape::Simple);
        assert_eq!(shape(parse_quote!(serde_json::Value)), TypeShape::Simple);
    }

    #[test]
    fn dtos_are_complex() {
        assert_eq!(shape(parse_quote!(CreateUser)), TypeShape::Complex);
        assert_eq!(shape(parse_quote!(Vec<i32>)), TypeShape::Complex);
        assert_eq!(shape(parse_quote!(Option<Filter>)), TypeShape::Complex);
        assert_eq!(shape(parse_quote!((i32, i32))), TypeShape::Complex);
    }

    #[test]
    fn registered_types_are_simple() {
        let options = GeneratorOptions::default().simple_type("OrderStatus");
        assert_eq!(
            classify(&parse_quote!(OrderStatus), &options),
            TypeShape::Simple
        );
        assert_eq!(shape(parse_quote!(OrderStatus)), TypeShape::Complex);
    }

    #[test]
    fn file_shapes() {
        assert_eq!(
            shape(parse_quote!(FormFile)),
            TypeShape::File(FileShape::Single)
        );
        assert_eq!(
            shape(parse_quote!(dynamic_api::FormFileCollection)),
            TypeShape::File(FileShape::Collection)
        );
        assert_eq!(
            shape(parse_quote!(Vec<FormFile>)),
            TypeShape::File(FileShape::Sequence)
        );
        assert_eq!(
            shape(parse_quote!(Option<FormFile>)),
            TypeShape::File(FileShape::Single)
        );
    }

    #[test]
    fn option_inner_peels_one_layer() {
        let ty: Type = parse_quote!(Option<Option<i32>>);
        let inner = option_inner(&ty).map(|t| quote::quote!(#t).to_string());
        assert_eq!(inner.as_deref(), Some("Option < i32 >"));
        assert!(option_inner(&parse_quote!(i32)).is_none());
    }

    #[test]
    fn cascade_order() {
        let file = TypeShape::File(FileShape::Single);
        assert_eq!(resolve(file, "id", HttpMethod::Get), BindingSource::Form);
        assert_eq!(
            resolve(TypeShape::Complex, "code", HttpMethod::Get),
            BindingSource::Body
        );
        assert_eq!(
            resolve(TypeShape::Simple, "ApiKey", HttpMethod::Post),
            BindingSource::Route
        );
        assert_eq!(
            resolve(TypeShape::Simple, "zip_code", HttpMethod::Put),
            BindingSource::Route
        );
        assert_eq!(
            resolve(TypeShape::Simple, "name", HttpMethod::Delete),
            BindingSource::Query
        );
        assert_eq!(
            resolve(TypeShape::Simple, "name", HttpMethod::Post),
            BindingSource::Query
        );
    }

    #[test]
    fn route_names_match_word_endings() {
        let route = |name| resolve(TypeShape::Simple, name, HttpMethod::Get);
        for name in ["id", "ID", "userId", "product_id", "userid", "apiKey", "zipcode"] {
            assert_eq!(route(name), BindingSource::Route, "{name}");
        }
        for name in ["keyword", "page_index", "identity", "codename", "name"] {
            assert_eq!(route(name), BindingSource::Query, "{name}");
        }
    }

    #[test]
    fn default_values() {
        assert_eq!(default_value(None), DefaultValue::ZeroValue);
        assert_eq!(
            default_value(Some("-5")),
            DefaultValue::Literal("-5".into())
        );
    }
}
