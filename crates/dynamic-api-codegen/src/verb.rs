// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! HTTP verb inference.
//!
//! An explicit `#[http_method(..)]` always wins. Otherwise the method name is
//! matched against five prefix vocabularies, in order:
//!
//! | Order | Prefixes | Verb |
//! |-------|----------|------|
//! | 1 | `Get` `Find` `Query` `Search` `Fetch` `Retrieve` | `GET` |
//! | 2 | `Create` `Add` `Insert` `Post` `Submit` | `POST` |
//! | 3 | `Update` `Edit` `Modify` `Put` `Replace` | `PUT` |
//! | 4 | `Delete` `Remove` `Destroy` `Drop` | `DELETE` |
//! | 5 | `Patch` `PartialUpdate` | `PATCH` |
//!
//! Matching ignores case and underscores, so `get_item` and `GetItem` both
//! start with `get` and `partial_update_order` starts with `partialupdate`.
//! The first matching vocabulary wins; anything else is `POST`.

use dynamic_api_core::HttpMethod;

/// Ordered prefix vocabularies, lower case.
const VOCABULARIES: [(&[&str], HttpMethod); 5] = [
    (
        &["get", "find", "query", "search", "fetch", "retrieve"],
        HttpMethod::Get
    ),
    (
        &["create", "add", "insert", "post", "submit"],
        HttpMethod::Post
    ),
    (
        &["update", "edit", "modify", "put", "replace"],
        HttpMethod::Put
    ),
    (&["delete", "remove", "destroy", "drop"], HttpMethod::Delete),
    (&["patch", "partialupdate"], HttpMethod::Patch)
];

/// Verb used when no vocabulary matches.
pub const FALLBACK: HttpMethod = HttpMethod::Post;

/// Infer a verb from a method name.
///
/// ```rust
/// use dynamic_api_codegen::verb::infer;
/// use dynamic_api_core::HttpMethod;
///
/// assert_eq!(infer("GetItemAsync"), HttpMethod::Get);
/// assert_eq!(infer("remove_member"), HttpMethod::Delete);
/// assert_eq!(infer(""), HttpMethod::Post);
/// ```
pub fn infer(method_name: &str) -> HttpMethod {
    let normalized: String = method_name
        .chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect();
    if normalized.is_empty() {
        return FALLBACK;
    }

    VOCABULARIES
        .iter()
        .find(|(prefixes, _)| prefixes.iter().any(|p| normalized.starts_with(p)))
        .map_or(FALLBACK, |(_, verb)| *verb)
}

/// Resolve the verb of a method: the explicit override, or inference.
pub fn resolve(explicit: Option<HttpMethod>, method_name: &str) -> HttpMethod {
    explicit.unwrap_or_else(|| infer(method_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_names() {
        assert_eq!(infer("GetItemAsync"), HttpMethod::Get);
        assert_eq!(infer("CreateItemAsync"), HttpMethod::Post);
        assert_eq!(infer("UpdateItemAsync"), HttpMethod::Put);
        assert_eq!(infer("DeleteItemAsync"), HttpMethod::Delete);
        assert_eq!(infer("PatchItemAsync"), HttpMethod::Patch);
    }

    #[test]
    fn snake_case_names() {
        assert_eq!(infer("find_by_email"), HttpMethod::Get);
        assert_eq!(infer("submit_order"), HttpMethod::Post);
        assert_eq!(infer("replace_avatar"), HttpMethod::Put);
        assert_eq!(infer("drop_session"), HttpMethod::Delete);
        assert_eq!(infer("partial_update_profile"), HttpMethod::Patch);
    }

    #[test]
    fn every_vocabulary_word() {
        for (prefixes, verb) in VOCABULARIES {
            for prefix in prefixes {
                let name = format!("{prefix}_thing");
                assert_eq!(infer(&name), verb, "{name}");
            }
        }
    }

    #[test]
    fn empty_and_unknown_fall_back_to_post() {
        assert_eq!(infer(""), HttpMethod::Post);
        assert_eq!(infer("_"), HttpMethod::Post);
        assert_eq!(infer("ping"), HttpMethod::Post);
        assert_eq!(infer("Archive"), HttpMethod::Post);
    }

    #[test]
    fn earlier_vocabulary_wins() {
        // "PartialUpdate" would also be a PUT candidate if matched on "update";
        // only prefixes count, so it stays PATCH.
        assert_eq!(infer("PartialUpdateOrder"), HttpMethod::Patch);
        // "query" (GET) is listed before "put" (PUT).
        assert_eq!(infer("QueryPutRequests"), HttpMethod::Get);
    }

    #[test]
    fn explicit_override_wins() {
        assert_eq!(resolve(Some(HttpMethod::Delete), "GetFoo"), HttpMethod::Delete);
        assert_eq!(resolve(Some(HttpMethod::Head), ""), HttpMethod::Head);
        assert_eq!(resolve(None, "GetFoo"), HttpMethod::Get);
    }
}
