// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Naming conventions.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `ISampleService` | [`strip_marker`] | `SampleService` |
//! | `ISampleService` | [`unit_name`] | `SampleServiceController` |
//! | `SampleServiceController` | [`module_name`] | `sample_service_controller` |
//! | `ISampleService` | [`default_prefix`] | `/api/sampleservice` |
//! | `api/users/` | [`normalize_prefix`] | `/api/users` |
//! | `get_item_async` | [`route_suffix`] | `get-item` |
//!
//! The marker letter is a single leading `I` or `i` followed by an upper-case
//! letter. Names without it (`Item`, `UserService`) are left alone.

use convert_case::{Case, Casing};

/// Remove the interface marker letter, if the name carries one.
pub fn strip_marker(name: &str) -> &str {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some('I' | 'i'), Some(next)) if next.is_uppercase() => &name[1..],
        _ => name
    }
}

/// Name of the generated unit for a trait.
pub fn unit_name(interface: &str, suffix: &str) -> String {
    format!("{}{}", strip_marker(interface), suffix)
}

/// Module wrapping a generated unit; also its file stem.
pub fn module_name(unit: &str) -> String {
    unit.to_case(Case::Snake)
}

/// Route prefix used when the trait has no `#[route_prefix]`.
pub fn default_prefix(interface: &str) -> String {
    format!("/api/{}", strip_marker(interface).to_lowercase())
}

/// Explicit prefix with exactly one leading and no trailing `/`.
///
/// axum rejects routes that do not start with `/`.
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    format!("/{trimmed}")
}

/// Method-specific route segment: kebab case without a trailing `async`.
pub fn route_suffix(method: &str) -> String {
    let kebab = method.to_case(Case::Kebab);
    match kebab.strip_suffix("-async") {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => kebab
    }
}

/// Full route template of a handler.
///
/// ```rust
/// use dynamic_api_codegen::naming::route_template;
///
/// assert_eq!(
///     route_template("/api/sample/", "get-item", ["id"]),
///     "/api/sample/get-item/{id}"
/// );
/// ```
pub fn route_template<'a>(
    prefix: &str,
    suffix: &str,
    route_params: impl IntoIterator<Item = &'a str>
) -> String {
    let prefix = prefix.trim_end_matches('/');
    let mut path = if prefix.starts_with('/') || prefix.is_empty() {
        format!("{prefix}/{suffix}")
    } else {
        format!("/{prefix}/{suffix}")
    };
    for param in route_params {
        path.push_str("/{");
        path.push_str(param);
        path.push('}');
    }
    path
}

/// Name of the query-string struct generated for a handler.
pub fn query_struct_name(method: &str) -> String {
    format!("{}Query", method.to_case(Case::Pascal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_marker_letter() {
        assert_eq!(strip_marker("ISampleService"), "SampleService");
        assert_eq!(strip_marker("iUserService"), "UserService");
        assert_eq!(strip_marker("IIOService"), "IOService");
    }

    #[test]
    fn leaves_names_without_marker() {
        assert_eq!(strip_marker("UserService"), "UserService");
        assert_eq!(strip_marker("Item"), "Item");
        assert_eq!(strip_marker("I"), "I");
        assert_eq!(strip_marker(""), "");
    }

    #[test]
    fn unit_and_module_names() {
        let unit = unit_name("ISampleService", "Controller");
        assert_eq!(unit, "SampleServiceController");
        assert_eq!(module_name(&unit), "sample_service_controller");
    }

    #[test]
    fn default_prefix_lowercases() {
        assert_eq!(default_prefix("IUserService"), "/api/userservice");
        assert_eq!(default_prefix("Catalog"), "/api/catalog");
    }

    #[test]
    fn prefixes_gain_a_leading_slash() {
        assert_eq!(normalize_prefix("api/users"), "/api/users");
        assert_eq!(normalize_prefix("/api/users/"), "/api/users");
        assert_eq!(normalize_prefix("//api"), "/api");
        assert_eq!(normalize_prefix(""), "/");
    }

    #[test]
    fn route_template_roots_relative_prefixes() {
        assert_eq!(route_template("api/users", "get-user", ["id"]), "/api/users/get-user/{id}");
        assert_eq!(route_template("/", "ping", []), "/ping");
    }

    #[test]
    fn route_suffix_variants() {
        assert_eq!(route_suffix("get_item_async"), "get-item");
        assert_eq!(route_suffix("GetItemAsync"), "get-item");
        assert_eq!(route_suffix("delete_item"), "delete-item");
        assert_eq!(route_suffix("async"), "async");
    }

    #[test]
    fn route_template_without_params() {
        assert_eq!(
            route_template("/api/sample", "get-list", []),
            "/api/sample/get-list"
        );
    }

    #[test]
    fn route_template_with_params() {
        assert_eq!(
            route_template("/api/orders", "find-line", ["order_id", "line_code"]),
            "/api/orders/find-line/{order_id}/{line_code}"
        );
    }

    #[test]
    fn query_struct_name_is_pascal() {
        assert_eq!(query_struct_name("get_list"), "GetListQuery");
    }
}
