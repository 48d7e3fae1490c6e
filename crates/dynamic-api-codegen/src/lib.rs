// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Build-time controller generator for dynamic-api.
//!
//! Reads a crate's sources, finds every trait that extends
//! `DynamicController`, infers routes, verbs and parameter bindings from the
//! method signatures, and writes one axum controller per trait.
//!
//! # Pipeline
//!
//! ```text
//! src/**/*.rs ──► source ──► discovery ──► resolve ──► synthesis ──► $OUT_DIR/*.rs
//!                               │            │  ├─ attributes
//!                               │            │  ├─ verb
//!                               │            │  └─ binding
//!                               └────────────┴──── diagnostics (DA001)
//! ```
//!
//! | Module | Role |
//! |--------|------|
//! | [`source`] | Parse files into a [`Corpus`] of trait declarations |
//! | [`discovery`] | Select traits carrying the marker capability |
//! | [`attributes`] | Parse the helper attributes |
//! | [`verb`] | Infer HTTP verbs from method names |
//! | [`binding`] | Classify parameter types and pick request sources |
//! | [`resolve`] | Build immutable descriptors |
//! | [`synthesis`] | Render descriptors into formatted Rust source |
//! | [`diagnostics`] | Report failed candidates |
//! | [`generator`] | Run the whole pass |
//! | [`build`] | `build.rs` entry point |
//!
//! # Usage
//!
//! ```rust,ignore
//! // build.rs
//! fn main() {
//!     dynamic_api_codegen::build::generate().expect("controller generation failed");
//! }
//! ```
//!
//! # Inference Rules
//!
//! | Item | Rule |
//! |------|------|
//! | Route prefix | `#[route_prefix("..")]`, else `/api/<name without leading I, lower case>` |
//! | Route | prefix + `/` + kebab-case method name without `async` + `/{param}` per route parameter |
//! | Verb | `#[http_method(..)]`, else the method name prefix, else `POST` |
//! | Binding | file → form, complex → body, `*id*` / `*key*` / `*code*` → route, else query |

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

pub mod attributes;
pub mod binding;
pub mod build;
pub mod diagnostics;
pub mod discovery;
pub mod error;
pub mod generator;
pub mod model;
pub mod naming;
pub mod options;
pub mod resolve;
pub mod source;
pub mod synthesis;
pub mod verb;

pub use diagnostics::{CargoSink, CollectingSink, Diagnostic, DiagnosticSink, Severity, TracingSink};
pub use error::{Error, Result};
pub use generator::Generator;
pub use options::GeneratorOptions;
pub use source::{Corpus, CorpusBuilder};
pub use synthesis::{Artifact, render};
