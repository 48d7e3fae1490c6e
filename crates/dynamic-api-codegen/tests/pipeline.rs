// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! End-to-end generation over in-memory sources.

use dynamic_api_codegen::{
    Artifact, CollectingSink, Diagnostic, Generator, GeneratorOptions,
    model::DefaultValue,
    render,
    resolve::resolve_interface,
    source::{Corpus, CorpusBuilder}
};
use dynamic_api_core::{BindingSource, HttpMethod};

const SERVICES: &str = r#"
    use dynamic_api::{DynamicController, FormFile, FormFileCollection};

    pub trait IPlainService {
        async fn get_nothing(&self) -> String;
    }

    pub trait ICatalogService: DynamicController {
        async fn get_product(&self, id: i64) -> ProductDto;
        async fn find_products(&self, keyword: String, id: i64) -> Vec<ProductDto>;
        async fn create_product(&self, id: ProductDto) -> ProductDto;
        async fn update_product(&self, product_id: i64, product: ProductDto);
        async fn remove_product(&self, id: i64);
        async fn patch_product(&self, id: i64, name: String);
        async fn upload_image(&self, image: FormFile, others: FormFileCollection);
        async fn rebuild_index(&self);
        #[http_method(Delete)]
        async fn get_rid_of_drafts(&self);
    }

    pub trait IAuditedService: DynamicController {}

    pub trait IInvoiceService: IAuditedService {
        async fn get_invoice(&self, code: String) -> InvoiceDto;
    }

    pub trait IBrokenService: DynamicController {
        async fn update_both(&self, first: ProductDto, second: ProductDto);
    }

    pub trait ISearchService: DynamicController {
        #[default_value(active = true, page)]
        async fn get_search(&self, active: bool, page: i32, term: Option<String>) -> Vec<String>;
    }
"#;

/// Source text without whitespace or trailing commas, so assertions do not
/// depend on where the formatter breaks lines.
fn flat(text: &str) -> String {
    let mut out: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    for close in [")", "]", "}", ">"] {
        out = out.replace(&format!(",{close}"), close);
    }
    out
}

fn corpus() -> Corpus {
    let mut builder = CorpusBuilder::new();
    builder.add_source("src/services.rs", "crate::services", SERVICES).unwrap();
    builder.build()
}

fn run(options: GeneratorOptions) -> (Vec<Artifact>, Vec<Diagnostic>) {
    let sink = CollectingSink::new();
    let artifacts = Generator::new(options).generate(&corpus(), &sink);
    (artifacts, sink.into_diagnostics())
}

fn artifact<'a>(artifacts: &'a [Artifact], interface: &str) -> &'a Artifact {
    artifacts
        .iter()
        .find(|artifact| artifact.interface == interface)
        .unwrap_or_else(|| panic!("no controller generated for {interface}"))
}

fn descriptor(interface: &str) -> dynamic_api_codegen::model::InterfaceDescriptor {
    let corpus = corpus();
    let decl = corpus.get(interface).unwrap();
    resolve_interface(decl, &GeneratorOptions::default()).unwrap()
}

#[test]
fn only_marked_traits_are_generated() {
    let (artifacts, diagnostics) = run(GeneratorOptions::default());
    let interfaces: Vec<_> = artifacts.iter().map(|a| a.interface.as_str()).collect();
    assert_eq!(
        interfaces,
        ["ICatalogService", "IAuditedService", "IInvoiceService", "ISearchService"]
    );
    assert!(diagnostics.iter().all(|d| d.interface != "IPlainService"));
}

#[test]
fn inherited_marker_makes_a_candidate() {
    let (artifacts, _) = run(GeneratorOptions::default());
    let invoice = artifact(&artifacts, "IInvoiceService");
    assert_eq!(invoice.unit_name, "InvoiceServiceController");
    assert!(flat(&invoice.source).contains(&flat("\"/api/invoiceservice/get-invoice/{code}\"")));
}

#[test]
fn verbs_follow_method_names() {
    let catalog = descriptor("ICatalogService");
    let verbs: Vec<_> = catalog.methods.iter().map(|m| (m.name(), m.verb)).collect();
    assert_eq!(
        verbs,
        [
            ("get_product".to_string(), HttpMethod::Get),
            ("find_products".to_string(), HttpMethod::Get),
            ("create_product".to_string(), HttpMethod::Post),
            ("update_product".to_string(), HttpMethod::Put),
            ("remove_product".to_string(), HttpMethod::Delete),
            ("patch_product".to_string(), HttpMethod::Patch),
            ("upload_image".to_string(), HttpMethod::Post),
            ("rebuild_index".to_string(), HttpMethod::Post),
            ("get_rid_of_drafts".to_string(), HttpMethod::Delete)
        ]
    );
}

#[test]
fn explicit_verb_wins_over_the_name() {
    let (artifacts, _) = run(GeneratorOptions::default());
    let source = flat(&artifact(&artifacts, "ICatalogService").source);
    assert!(source.contains(&flat("routing::delete(get_rid_of_drafts::<S>)")));
    assert!(source.contains(&flat("method: ::dynamic_api::HttpMethod::Delete")));
}

#[test]
fn bindings_follow_type_and_name() {
    let catalog = descriptor("ICatalogService");
    let sources = |method: &str| -> Vec<(String, BindingSource)> {
        catalog
            .methods
            .iter()
            .find(|m| m.name() == method)
            .unwrap()
            .parameters
            .iter()
            .map(|p| (p.name(), p.source))
            .collect()
    };

    assert_eq!(
        sources("find_products"),
        [
            ("keyword".to_string(), BindingSource::Query),
            ("id".to_string(), BindingSource::Route)
        ]
    );
    assert_eq!(sources("create_product"), [("id".to_string(), BindingSource::Body)]);
    assert_eq!(
        sources("update_product"),
        [
            ("product_id".to_string(), BindingSource::Route),
            ("product".to_string(), BindingSource::Body)
        ]
    );
    assert_eq!(
        sources("upload_image"),
        [
            ("image".to_string(), BindingSource::Form),
            ("others".to_string(), BindingSource::Form)
        ]
    );
}

#[test]
fn rendering_is_deterministic() {
    let catalog = descriptor("ICatalogService");
    let first = render(&catalog).unwrap();
    let second = render(&descriptor("ICatalogService")).unwrap();
    assert_eq!(first, second);

    let (again, _) = run(GeneratorOptions::default());
    assert_eq!(artifact(&again, "ICatalogService").source, first.source);
}

#[test]
fn one_failure_is_one_diagnostic() {
    let (artifacts, diagnostics) = run(GeneratorOptions::default());
    assert_eq!(diagnostics.len(), 1);

    let diagnostic = &diagnostics[0];
    assert_eq!(diagnostic.code, "DA001");
    assert_eq!(diagnostic.interface, "IBrokenService");
    assert!(
        diagnostic
            .message
            .starts_with("Failed to generate controller for `IBrokenService`: ")
    );
    assert!(diagnostic.message.contains("update_both"));
    assert!(diagnostic.to_string().starts_with("src/services.rs:"));
    assert!(artifacts.iter().all(|a| a.interface != "IBrokenService"));
}

#[test]
fn optional_parameter_defaults() {
    let search = descriptor("ISearchService");
    let params = &search.methods[0].parameters;

    assert_eq!(params[0].default, Some(DefaultValue::Literal("true".to_string())));
    assert_eq!(params[0].default_expr(), Some("true"));
    assert_eq!(params[1].default, Some(DefaultValue::ZeroValue));
    assert_eq!(params[1].default_expr(), Some("::core::default::Default::default()"));
    assert!(params[2].nullable);
    assert!(params.iter().all(|p| p.is_optional()));

    let source = flat(&render(&search).unwrap().source);
    assert!(source.contains(&flat("__query.active.unwrap_or(true)")));
    assert!(source.contains(&flat("__query.page.unwrap_or(::core::default::Default::default())")));
    assert!(source.contains(&flat("default_value: ::core::option::Option::Some(\"true\")")));
}

#[test]
fn files_are_written_per_controller() {
    let dir = tempfile::tempdir().unwrap();
    let generator = Generator::default();
    let artifacts = generator.generate(&corpus(), &CollectingSink::new());
    let written = generator.write(&artifacts, dir.path()).unwrap();

    let mut names: Vec<_> = written
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        [
            "audited_service_controller.rs",
            "catalog_service_controller.rs",
            "invoice_service_controller.rs",
            "search_service_controller.rs"
        ]
    );
    let text = std::fs::read_to_string(dir.path().join("catalog_service_controller.rs")).unwrap();
    assert!(text.starts_with("// @generated by dynamic-api-codegen. Do not edit."));
}

#[test]
fn disabled_generator_does_nothing() {
    let (artifacts, diagnostics) = run(GeneratorOptions::default().disabled(true));
    assert!(artifacts.is_empty());
    assert!(diagnostics.is_empty());
}
