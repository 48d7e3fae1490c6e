// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Build-script entry point.
//!
//! ```rust,ignore
//! // build.rs
//! fn main() {
//!     dynamic_api_codegen::build::generate().expect("controller generation failed");
//! }
//! ```
//!
//! ```rust,ignore
//! // src/services.rs
//! #[async_trait]
//! pub trait ISampleService: DynamicController { /* ... */ }
//!
//! include!(concat!(env!("OUT_DIR"), "/sample_service_controller.rs"));
//! ```
//!
//! Scans `$CARGO_MANIFEST_DIR/src`, writes one file per controller into
//! `$OUT_DIR` and reports failed candidates as `cargo:warning` lines. Cargo
//! reruns the script when a source file or the opt-out variable changes.

use std::path::PathBuf;

use crate::{
    diagnostics::CargoSink,
    error::{Error, Result},
    generator::Generator,
    options::{GeneratorOptions, OPT_OUT_VAR},
    source::CorpusBuilder
};

/// Generate controllers with options read from the environment.
///
/// # Errors
///
/// Whole-pass failures only: missing build-script variables, unreadable or
/// unparsable sources, unwritable output.
pub fn generate() -> Result<Vec<PathBuf>> {
    generate_with(GeneratorOptions::from_env())
}

/// Generate controllers with explicit options.
///
/// The opt-out variable is still tracked for reruns.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_with(options: GeneratorOptions) -> Result<Vec<PathBuf>> {
    println!("cargo:rerun-if-env-changed={OPT_OUT_VAR}");

    let manifest_dir = env_path("CARGO_MANIFEST_DIR")?;
    let out_dir = env_path("OUT_DIR")?;
    let src = manifest_dir.join("src");
    println!("cargo:rerun-if-changed={}", src.display());

    let generator = Generator::new(options);
    if generator.options().is_disabled() {
        tracing::info!(variable = OPT_OUT_VAR, "controller generation switched off");
        return Ok(Vec::new());
    }

    let mut builder = CorpusBuilder::new();
    builder.scan_dir(&src)?;
    let corpus = builder.build();

    let artifacts = generator.generate(&corpus, &CargoSink);
    generator.write(&artifacts, &out_dir)
}

fn env_path(name: &'static str) -> Result<PathBuf> {
    std::env::var_os(name)
        .map(PathBuf::from)
        .ok_or(Error::MissingEnv(name))
}
