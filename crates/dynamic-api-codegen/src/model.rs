// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Descriptor model.
//!
//! Passive data shapes flowing through the pipeline:
//!
//! ```text
//! source ──► InterfaceDecl ──► resolve ──► InterfaceDescriptor ──► synthesis
//!            └─ MethodDecl                 └─ MethodDescriptor
//!                                              └─ ParameterDescriptor
//! ```
//!
//! Declarations are what the host parser saw. Descriptors are fully resolved
//! and never change after construction; each owns its children.

use std::{collections::BTreeSet, fmt, path::PathBuf};

use dynamic_api_core::{BindingSource, HttpMethod};
use syn::{Attribute, Generics, Ident, TraitItemFn, Type, ext::IdentExt};

/// Position of a trait declaration in its source file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    /// Source file path.
    pub file:   PathBuf,
    /// 1-based line.
    pub line:   usize,
    /// 1-based column.
    pub column: usize
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

/// A trait declaration as parsed from source.
#[derive(Debug, Clone)]
pub struct InterfaceDecl {
    /// Trait ident.
    pub ident:        Ident,
    /// Module path, e.g. `crate::services`.
    pub namespace:    String,
    /// Outer attributes of the trait.
    pub attrs:        Vec<Attribute>,
    /// Generic parameters and `where` clause.
    pub generics:     Generics,
    /// Names of the directly declared supertraits.
    pub supertraits:  Vec<String>,
    /// Trait methods in declaration order.
    pub methods:      Vec<MethodDecl>,
    /// Where the trait ident appears.
    pub location:     Location,
    /// Transitive closure of supertrait names, filled in by the corpus.
    pub capabilities: BTreeSet<String>
}

impl InterfaceDecl {
    /// Trait name as a string, without any `r#` prefix.
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

/// A trait method as parsed from source.
#[derive(Debug, Clone)]
pub struct MethodDecl {
    /// The method item, attributes included.
    pub item: TraitItemFn
}

impl MethodDecl {
    /// Method ident.
    pub fn ident(&self) -> &Ident {
        &self.item.sig.ident
    }
}

/// Documentation visibility of a controller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiVisibility {
    /// Hide from API documentation.
    pub hidden:     bool,
    /// Documentation group.
    pub group_name: Option<String>
}

/// How a method result becomes a response.
#[derive(Debug, Clone)]
pub enum ReturnShape {
    /// No return value, answered with `204 No Content`.
    Unit,
    /// Plain value, answered as JSON.
    Value(Type),
    /// `Result<T, E>`: `T` as JSON, `E` through its own `IntoResponse`.
    Fallible {
        /// Success type.
        ok:  Type,
        /// Error type, `None` for single-argument result aliases.
        err: Option<Type>
    }
}

/// Upload shape of a file parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileShape {
    /// `FormFile`
    Single,
    /// `FormFileCollection`
    Collection,
    /// `Vec<FormFile>`
    Sequence
}

/// Classification of a parameter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShape {
    /// Primitive, text or recognized scalar.
    Simple,
    /// Anything else, a DTO.
    Complex,
    /// File upload.
    File(FileShape)
}

/// Default of an optional parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    /// No literal supplied: the type's zero value.
    ZeroValue,
    /// Literal source text, e.g. `10`, `false`, `"name"`.
    Literal(String)
}

/// Expression rendered for [`DefaultValue::ZeroValue`].
pub const ZERO_VALUE: &str = "::core::default::Default::default()";

impl DefaultValue {
    /// Rust expression for the default.
    pub fn render(&self) -> &str {
        match self {
            Self::ZeroValue => ZERO_VALUE,
            Self::Literal(text) => text
        }
    }
}

/// A resolved handler parameter.
#[derive(Debug, Clone)]
pub struct ParameterDescriptor {
    /// Parameter ident.
    pub ident:    Ident,
    /// Declared type.
    pub ty:       Type,
    /// Type classification.
    pub shape:    TypeShape,
    /// Resolved binding source.
    pub source:   BindingSource,
    /// Declared as `Option<T>`.
    pub nullable: bool,
    /// Present when the request may omit the value.
    pub default:  Option<DefaultValue>
}

impl ParameterDescriptor {
    /// Parameter name as a string, without any `r#` prefix.
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Whether the request may omit the value.
    pub fn is_optional(&self) -> bool {
        self.nullable || self.default.is_some()
    }

    /// Rendered default expression, for optional parameters.
    pub fn default_expr(&self) -> Option<&str> {
        match (&self.default, self.nullable) {
            (Some(default), _) => Some(default.render()),
            (None, true) => Some(ZERO_VALUE),
            (None, false) => None
        }
    }
}

/// A resolved handler.
#[derive(Debug, Clone)]
pub struct MethodDescriptor {
    /// Owning trait name.
    pub interface:  String,
    /// Method ident.
    pub ident:      Ident,
    /// Declared `async`.
    pub is_async:   bool,
    /// Response conversion.
    pub returns:    ReturnShape,
    /// Resolved verb.
    pub verb:       HttpMethod,
    /// Parameters in declaration order, receiver excluded.
    pub parameters: Vec<ParameterDescriptor>
}

impl MethodDescriptor {
    /// Method name as a string, without any `r#` prefix.
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Parameters bound from `source`, in declaration order.
    pub fn bound_to(&self, source: BindingSource) -> impl Iterator<Item = &ParameterDescriptor> {
        self.parameters.iter().filter(move |p| p.source == source)
    }
}

/// A fully resolved generation candidate.
#[derive(Debug, Clone)]
pub struct InterfaceDescriptor {
    /// Trait ident.
    pub ident:        Ident,
    /// Module path of the trait.
    pub namespace:    String,
    /// Handlers in declaration order.
    pub methods:      Vec<MethodDescriptor>,
    /// Route prefix, explicit or derived.
    pub route_prefix: String,
    /// Documentation visibility.
    pub visibility:   ApiVisibility,
    /// Transitive supertrait names.
    pub capabilities: BTreeSet<String>,
    /// Declaration site.
    pub location:     Location
}

impl InterfaceDescriptor {
    /// Trait name as a string, without any `r#` prefix.
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}
