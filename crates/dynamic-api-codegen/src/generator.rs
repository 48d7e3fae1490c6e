// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation pass.
//!
//! ```text
//! Corpus ──► discover ──► for each candidate ──► resolve ──► render ──► Artifact
//!                                  │                 └─ error ─┐
//!                                  └─────────────────────────► DiagnosticSink
//! ```
//!
//! Candidates are independent. A failure is reported once and the pass moves
//! on to the next candidate, so artifacts keep corpus order. Every artifact
//! owns its file name: a later trait that renders to a taken name fails.

use std::{
    collections::{BTreeMap, btree_map::Entry},
    path::{Path, PathBuf}
};

use crate::{
    diagnostics::{Diagnostic, DiagnosticSink},
    discovery::discover,
    error::{Error, Result},
    model::InterfaceDecl,
    options::GeneratorOptions,
    resolve::resolve_interface,
    source::Corpus,
    synthesis::{Artifact, render_with_suffix}
};

/// Runs discovery, resolution and synthesis over a corpus.
///
/// # Example
///
/// ```rust
/// use dynamic_api_codegen::{CollectingSink, Generator, GeneratorOptions, source::CorpusBuilder};
///
/// let mut builder = CorpusBuilder::new();
/// builder
///     .add_source(
///         "src/lib.rs",
///         "crate",
///         "use dynamic_api::DynamicController;
///          pub trait IPing: DynamicController { async fn get_ping(&self) -> String; }"
///     )
///     .unwrap();
///
/// let sink = CollectingSink::new();
/// let artifacts = Generator::new(GeneratorOptions::default()).generate(&builder.build(), &sink);
/// assert_eq!(artifacts[0].unit_name, "PingController");
/// assert!(sink.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Generator {
    options: GeneratorOptions
}

impl Generator {
    /// Create a generator.
    pub fn new(options: GeneratorOptions) -> Self {
        Self {
            options
        }
    }

    /// Options of this generator.
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generate a controller for every candidate of `corpus`.
    ///
    /// Returns nothing and reports nothing when the pass is disabled.
    pub fn generate(&self, corpus: &Corpus, sink: &dyn DiagnosticSink) -> Vec<Artifact> {
        if self.options.is_disabled() {
            tracing::info!("controller generation disabled");
            return Vec::new();
        }

        let candidates = discover(corpus, self.options.marker_name());
        let mut artifacts = Vec::with_capacity(candidates.len());
        let mut owners: BTreeMap<String, String> = BTreeMap::new();
        let mut failed = 0usize;

        for decl in &candidates {
            tracing::debug!(
                interface = %decl.ident,
                namespace = %decl.namespace,
                methods = decl.methods.len(),
                "generating controller"
            );
            let generated = self
                .generate_one(decl)
                .and_then(|artifact| claim_file(&mut owners, decl, artifact));
            match generated {
                Ok(artifact) => artifacts.push(artifact),
                Err(err) => {
                    failed += 1;
                    sink.report(Diagnostic::generation_failed(
                        &decl.name(),
                        &decl.location,
                        &err
                    ));
                }
            }
        }

        tracing::info!(
            candidates = candidates.len(),
            generated = artifacts.len(),
            failed,
            "controller generation finished"
        );
        artifacts
    }

    fn generate_one(&self, decl: &InterfaceDecl) -> Result<Artifact> {
        let descriptor = resolve_interface(decl, &self.options)?;
        render_with_suffix(&descriptor, self.options.suffix())
    }

    /// Write artifacts into `dir`, one file each.
    ///
    /// Files whose content is unchanged are left untouched.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when the directory or a file cannot be written.
    pub fn write(&self, artifacts: &[Artifact], dir: &Path) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(dir).map_err(|source| Error::Io {
            path: dir.to_path_buf(),
            source
        })?;

        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let path = dir.join(&artifact.file_name);
            let unchanged = std::fs::read_to_string(&path).is_ok_and(|old| old == artifact.source);
            if !unchanged {
                std::fs::write(&path, &artifact.source).map_err(|source| Error::Io {
                    path: path.clone(),
                    source
                })?;
            }
            tracing::debug!(file = %path.display(), unchanged, "wrote controller");
            written.push(path);
        }
        Ok(written)
    }
}

/// Record `decl` as the owner of the artifact's file name.
fn claim_file(
    owners: &mut BTreeMap<String, String>,
    decl: &InterfaceDecl,
    artifact: Artifact
) -> Result<Artifact> {
    match owners.entry(artifact.file_name.clone()) {
        Entry::Occupied(first) => Err(Error::FileConflict {
            file:  artifact.file_name,
            first: first.get().clone()
        }),
        Entry::Vacant(slot) => {
            slot.insert(format!("{}::{}", decl.namespace, decl.name()));
            Ok(artifact)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{diagnostics::CollectingSink, source::CorpusBuilder};

    const SOURCES: &str = r#"
        use dynamic_api::DynamicController;

        pub trait IGood: DynamicController {
            async fn get_item(&self, id: i32) -> String;
        }

        pub trait IBad: DynamicController {
            async fn update(&self, a: Dto, b: Dto);
        }

        pub trait IAlsoGood: IGood {}

        pub trait INotACandidate {}
    "#;

    fn corpus() -> Corpus {
        let mut builder = CorpusBuilder::new();
        builder.add_source("src/lib.rs", "crate", SOURCES).unwrap();
        builder.build()
    }

    #[test]
    fn failures_do_not_stop_the_batch() {
        let sink = CollectingSink::new();
        let artifacts = Generator::default().generate(&corpus(), &sink);

        let units: Vec<_> = artifacts.iter().map(|a| a.unit_name.as_str()).collect();
        assert_eq!(units, ["GoodController", "AlsoGoodController"]);

        let diagnostics = sink.into_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].interface, "IBad");
        assert_eq!(diagnostics[0].code, "DA001");
        assert!(diagnostics[0].message.starts_with("Failed to generate controller for `IBad`: "));
        assert_eq!(diagnostics[0].location.line, 8);
    }

    #[test]
    fn disabled_pass_is_silent() {
        let sink = CollectingSink::new();
        let generator = Generator::new(GeneratorOptions::default().disabled(true));
        assert!(generator.generate(&corpus(), &sink).is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn unit_suffix_option() {
        let sink = CollectingSink::new();
        let generator = Generator::new(GeneratorOptions::default().unit_suffix("Api"));
        let artifacts = generator.generate(&corpus(), &sink);
        assert_eq!(artifacts[0].unit_name, "GoodApi");
        assert_eq!(artifacts[0].file_name, "good_api.rs");
    }

    #[test]
    fn unexpected_shapes_become_diagnostics() {
        let mut builder = CorpusBuilder::new();
        builder
            .add_source(
                "src/lib.rs",
                "crate",
                r#"
                use dynamic_api::DynamicController;
                pub trait IRepo<T>: DynamicController { async fn get_item(&self, id: i32) -> T; }
                pub trait IKeys: DynamicController { async fn r#match(&self, id: i32) -> String; }
                "#
            )
            .unwrap();
        let sink = CollectingSink::new();
        let artifacts = Generator::default().generate(&builder.build(), &sink);

        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].file_name, "keys_controller.rs");
        let diagnostics = sink.into_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].interface, "IRepo");
    }

    #[test]
    fn same_name_in_two_modules_keeps_the_first() {
        let mut builder = CorpusBuilder::new();
        builder
            .add_source(
                "src/lib.rs",
                "crate",
                r#"
                use dynamic_api::DynamicController;
                pub mod a {
                    pub trait IUsers: DynamicController { async fn get_a(&self) -> u32; }
                }
                pub mod b {
                    pub trait IUsers: DynamicController { async fn get_b(&self) -> u32; }
                }
                "#
            )
            .unwrap();
        let sink = CollectingSink::new();
        let artifacts = Generator::default().generate(&builder.build(), &sink);

        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].namespace, "crate::a");
        assert!(artifacts[0].source.contains("get_a"));

        let diagnostics = sink.into_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains(
            "controller file `users_controller.rs` is already generated for `crate::a::IUsers`"
        ));
    }

    #[test]
    fn write_creates_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("generated");
        let generator = Generator::default();
        let artifacts = generator.generate(&corpus(), &CollectingSink::new());

        let written = generator.write(&artifacts, &out).unwrap();
        assert_eq!(written.len(), 2);
        let text = std::fs::read_to_string(out.join("good_controller.rs")).unwrap();
        assert_eq!(text, artifacts[0].source);

        let again = generator.write(&artifacts, &out).unwrap();
        assert_eq!(again, written);
    }
}
