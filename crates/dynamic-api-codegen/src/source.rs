// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Source corpus.
//!
//! Reads crate sources with `syn` and collects every trait declaration into a
//! [`Corpus`]: the symbol view the rest of the pipeline works on.
//!
//! # Namespaces
//!
//! | File (relative to the source root) | Namespace |
//! |------------------------------------|-----------|
//! | `lib.rs`, `main.rs` | `crate` |
//! | `services.rs`, `services/mod.rs` | `crate::services` |
//! | `services/users.rs` | `crate::services::users` |
//!
//! Inline `mod` blocks extend the namespace of the file they sit in.
//!
//! # Known Capabilities
//!
//! A capability name is known when the corpus declares a trait of that name,
//! when a `use` item imports it (the final ident, or the rename), or when a
//! supertrait refers to it through a multi-segment path. A file with a glob
//! import is assumed to import every bare supertrait name it mentions.

use std::{
    collections::{BTreeMap, BTreeSet, VecDeque},
    path::{Component, Path, PathBuf}
};

use syn::{ItemTrait, TraitItem, TypeParamBound, UseTree};
use walkdir::WalkDir;

use crate::{
    error::{Error, Result},
    model::{InterfaceDecl, Location, MethodDecl}
};

/// Namespace of the crate root.
pub const ROOT_NAMESPACE: &str = "crate";

/// Collects trait declarations from source files.
///
/// # Example
///
/// ```rust
/// use dynamic_api_codegen::source::CorpusBuilder;
///
/// let mut builder = CorpusBuilder::new();
/// builder
///     .add_source("src/lib.rs", "crate", "pub trait IPing: DynamicController {}")
///     .unwrap();
/// let corpus = builder.build();
/// assert_eq!(corpus.interfaces().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CorpusBuilder {
    interfaces: Vec<InterfaceDecl>,
    known:      BTreeSet<String>,
    files:      Vec<PathBuf>
}

impl CorpusBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one source text under an explicit namespace.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] when `text` is not a valid Rust file.
    pub fn add_source(
        &mut self,
        path: impl Into<PathBuf>,
        namespace: &str,
        text: &str
    ) -> Result<()> {
        let path = path.into();
        let file = syn::parse_file(text).map_err(|source| Error::Parse {
            path: path.clone(),
            source
        })?;

        let mut scope = Scope::new(&path);
        scope.collect(&file.items, namespace);
        self.known.extend(scope.known);
        if scope.has_glob {
            self.known.extend(scope.referenced);
        }
        self.interfaces.extend(scope.interfaces);
        self.files.push(path);
        Ok(())
    }

    /// Read and parse a file, deriving its namespace from `root`.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when the file cannot be read, [`Error::Parse`] when it
    /// is not valid Rust.
    pub fn add_file(&mut self, root: &Path, path: &Path) -> Result<()> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source
        })?;
        let namespace = namespace_for(root, path);
        tracing::trace!(file = %path.display(), %namespace, "parsing source");
        self.add_source(path, &namespace, &text)
    }

    /// Add every `.rs` file below `root`, in sorted order.
    ///
    /// # Errors
    ///
    /// The first I/O or parse failure.
    pub fn scan_dir(&mut self, root: &Path) -> Result<()> {
        let walker = WalkDir::new(root).sort_by_file_name();
        for entry in walker {
            let entry = entry.map_err(|err| Error::Io {
                path:   err.path().unwrap_or(root).to_path_buf(),
                source: err.into()
            })?;
            let path = entry.path();
            if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "rs") {
                self.add_file(root, path)?;
            }
        }
        Ok(())
    }

    /// Compute capability closures and freeze the corpus.
    pub fn build(self) -> Corpus {
        let mut known = self.known;
        let mut by_name: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (index, decl) in self.interfaces.iter().enumerate() {
            known.insert(decl.name());
            by_name.entry(decl.name()).or_default().push(index);
        }

        let closures: Vec<BTreeSet<String>> = self
            .interfaces
            .iter()
            .map(|decl| closure(decl, &self.interfaces, &by_name))
            .collect();

        let mut interfaces = self.interfaces;
        for (decl, capabilities) in interfaces.iter_mut().zip(closures) {
            decl.capabilities = capabilities;
        }

        Corpus {
            interfaces,
            known,
            files: self.files
        }
    }
}

/// Transitive supertrait names of `decl`, following corpus declarations.
fn closure(
    decl: &InterfaceDecl,
    all: &[InterfaceDecl],
    by_name: &BTreeMap<String, Vec<usize>>
) -> BTreeSet<String> {
    let mut seen = BTreeSet::new();
    let mut queue: VecDeque<&str> = decl.supertraits.iter().map(String::as_str).collect();
    while let Some(name) = queue.pop_front() {
        if !seen.insert(name.to_string()) {
            continue;
        }
        for &index in by_name.get(name).into_iter().flatten() {
            queue.extend(all[index].supertraits.iter().map(String::as_str));
        }
    }
    seen
}

/// Parsed declarations plus known capability names.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    interfaces: Vec<InterfaceDecl>,
    known:      BTreeSet<String>,
    files:      Vec<PathBuf>
}

impl Corpus {
    /// Trait declarations in source order.
    pub fn interfaces(&self) -> &[InterfaceDecl] {
        &self.interfaces
    }

    /// First declaration named `name`.
    pub fn get(&self, name: &str) -> Option<&InterfaceDecl> {
        self.interfaces.iter().find(|decl| decl.ident == name)
    }

    /// Whether `capability` is declared or imported anywhere in the corpus.
    pub fn is_known(&self, capability: &str) -> bool {
        self.known.contains(capability)
    }

    /// Files that contributed to the corpus.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

/// Derive the namespace of `path` relative to the source root.
pub fn namespace_for(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path).with_extension("");
    let components: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None
        })
        .collect();

    let count = components.len();
    let mut namespace = String::from(ROOT_NAMESPACE);
    for (index, part) in components.iter().enumerate() {
        let last = index + 1 == count;
        let crate_root = count == 1 && (part == "lib" || part == "main");
        if last && (part == "mod" || crate_root) {
            continue;
        }
        namespace.push_str("::");
        namespace.push_str(part);
    }
    namespace
}

/// Per-file collection state.
struct Scope<'p> {
    path:       &'p Path,
    interfaces: Vec<InterfaceDecl>,
    known:      BTreeSet<String>,
    referenced: BTreeSet<String>,
    has_glob:   bool
}

impl<'p> Scope<'p> {
    fn new(path: &'p Path) -> Self {
        Self {
            path,
            interfaces: Vec::new(),
            known: BTreeSet::new(),
            referenced: BTreeSet::new(),
            has_glob: false
        }
    }

    fn collect(&mut self, items: &[syn::Item], namespace: &str) {
        for item in items {
            match item {
                syn::Item::Trait(item) => {
                    let decl = self.declaration(item, namespace);
                    self.interfaces.push(decl);
                }
                syn::Item::Mod(item) => {
                    if let Some((_, content)) = &item.content {
                        let nested = format!("{namespace}::{}", item.ident);
                        self.collect(content, &nested);
                    }
                }
                syn::Item::Use(item) => self.imports(&item.tree),
                _ => {}
            }
        }
    }

    fn imports(&mut self, tree: &UseTree) {
        match tree {
            UseTree::Path(path) => self.imports(&path.tree),
            UseTree::Name(name) => {
                self.known.insert(name.ident.to_string());
            }
            UseTree::Rename(rename) => {
                self.known.insert(rename.rename.to_string());
            }
            UseTree::Glob(_) => self.has_glob = true,
            UseTree::Group(group) => group.items.iter().for_each(|tree| self.imports(tree))
        }
    }

    fn declaration(&mut self, item: &ItemTrait, namespace: &str) -> InterfaceDecl {
        let mut supertraits = Vec::new();
        for bound in &item.supertraits {
            let TypeParamBound::Trait(bound) = bound else {
                continue;
            };
            let Some(segment) = bound.path.segments.last() else {
                continue;
            };
            let name = segment.ident.to_string();
            if bound.path.segments.len() > 1 {
                self.known.insert(name.clone());
            }
            self.referenced.insert(name.clone());
            supertraits.push(name);
        }

        let methods = item
            .items
            .iter()
            .filter_map(|item| match item {
                TraitItem::Fn(method) => Some(MethodDecl {
                    item: method.clone()
                }),
                _ => None
            })
            .collect();

        let start = item.ident.span().start();
        InterfaceDecl {
            ident: item.ident.clone(),
            namespace: namespace.to_string(),
            attrs: item.attrs.clone(),
            generics: item.generics.clone(),
            supertraits,
            methods,
            location: Location {
                file:   self.path.to_path_buf(),
                line:   start.line,
                column: start.column + 1
            },
            capabilities: BTreeSet::new()
        }
    }
}
