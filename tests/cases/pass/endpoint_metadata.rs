// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dynamic_api::{ApiExplorerSettings, BindingSource, EndpointMeta, HttpMethod, ParameterMeta};

const SETTINGS: ApiExplorerSettings = ApiExplorerSettings {
    ignore_api: false,
    group_name: Some("catalog"),
};

const ENDPOINTS: &[EndpointMeta] = &[EndpointMeta {
    name:       "find_products",
    method:     HttpMethod::Get,
    path:       "/api/catalog/find-products/{id}",
    parameters: &[
        ParameterMeta {
            name:          "keyword",
            source:        BindingSource::Query,
            optional:      true,
            default_value: Some("\"all\""),
        },
        ParameterMeta {
            name:          "id",
            source:        BindingSource::Route,
            optional:      false,
            default_value: None,
        },
    ],
}];

fn main() {
    assert_eq!(SETTINGS.group_name, Some("catalog"));
    assert_eq!(ENDPOINTS[0].method.as_str(), "GET");
    assert_eq!(ENDPOINTS[0].parameters[1].source, BindingSource::Route);
}
