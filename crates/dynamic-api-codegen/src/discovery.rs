// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Candidate discovery.
//!
//! A trait is a candidate when its capability closure contains the marker,
//! directly or through another trait. The marker trait itself never is.
//! When the corpus does not know the marker at all the crate is not using the
//! generator, and discovery quietly returns nothing.

use crate::{model::InterfaceDecl, source::Corpus};

/// Select the generation candidates of a corpus, in corpus order.
pub fn discover<'c>(corpus: &'c Corpus, marker: &str) -> Vec<&'c InterfaceDecl> {
    if !corpus.is_known(marker) {
        tracing::debug!(marker, "marker not resolvable, skipping discovery");
        return Vec::new();
    }

    corpus
        .interfaces()
        .iter()
        .filter(|decl| decl.ident != marker && decl.capabilities.contains(marker))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::CorpusBuilder;

    fn corpus(text: &str) -> Corpus {
        let mut builder = CorpusBuilder::new();
        builder.add_source("src/lib.rs", "crate", text).unwrap();
        builder.build()
    }

    fn names(found: Vec<&InterfaceDecl>) -> Vec<String> {
        found.into_iter().map(InterfaceDecl::name).collect()
    }

    #[test]
    fn direct_and_inherited_candidates() {
        let corpus = corpus(
            r#"
            use dynamic_api::DynamicController;
            pub trait IBase: DynamicController {}
            pub trait IUsers: IBase {}
            pub trait IPlain {}
            pub trait IEmpty: DynamicController {}
            "#
        );
        assert_eq!(
            names(discover(&corpus, "DynamicController")),
            ["IBase", "IUsers", "IEmpty"]
        );
    }

    #[test]
    fn marker_itself_is_not_a_candidate() {
        let corpus = corpus(
            "pub trait DynamicController: Send {} pub trait IA: DynamicController {}"
        );
        assert_eq!(names(discover(&corpus, "DynamicController")), ["IA"]);
    }

    #[test]
    fn unresolvable_marker_yields_nothing() {
        let corpus = corpus("pub trait IA: DynamicController {}");
        assert!(discover(&corpus, "DynamicController").is_empty());
    }

    #[test]
    fn custom_marker() {
        let corpus = corpus("use web::HttpService; pub trait IA: HttpService {} pub trait IB: Send {}");
        assert_eq!(names(discover(&corpus, "HttpService")), ["IA"]);
    }
}
