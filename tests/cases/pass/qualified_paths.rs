// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dynamic_api::{DynamicController, HttpMethod};

#[dynamic_api::route_prefix("/api/reports")]
#[dynamic_api::api_explorer_settings]
pub trait IReportService: DynamicController {
    #[dynamic_api::http_method("put")]
    fn rebuild(&self, code: String) -> Result<u64, String>;

    #[dynamic_api::http_method]
    fn archive(&self);

    #[dynamic_api::default_value(limit = -1, title = "all", ratio = 0.5)]
    fn summary(&self, limit: i64, title: String, ratio: f64) -> String;
}

fn main() {
    assert_eq!("put".parse::<HttpMethod>(), Ok(HttpMethod::Put));
}
