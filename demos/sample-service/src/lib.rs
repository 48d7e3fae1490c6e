// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Demo application for dynamic-api.
//!
//! `build.rs` generates one controller per service trait under
//! [`services`]; [`app`] mounts them over in-memory implementations.

pub mod error;
pub mod services;

use std::sync::Arc;

use axum::Router;
use dynamic_api::EndpointMeta;
use services::{
    CategoryServiceController, InMemoryCategoryService, InMemorySampleService,
    InMemoryUserService, SampleServiceController, UserServiceController
};

/// Router serving every demo service.
pub fn app() -> Router {
    Router::new()
        .merge(SampleServiceController::router(Arc::new(InMemorySampleService::default())))
        .merge(UserServiceController::router(Arc::new(InMemoryUserService::default())))
        .merge(CategoryServiceController::router(Arc::new(
            InMemoryCategoryService::default()
        )))
}

/// Every endpoint of [`app`], documented controllers only.
pub fn documented_endpoints() -> Vec<&'static EndpointMeta> {
    let controllers = [
        (
            SampleServiceController::API_EXPLORER_SETTINGS,
            SampleServiceController::ENDPOINTS
        ),
        (
            UserServiceController::API_EXPLORER_SETTINGS,
            UserServiceController::ENDPOINTS
        ),
        (
            CategoryServiceController::API_EXPLORER_SETTINGS,
            CategoryServiceController::ENDPOINTS
        )
    ];
    controllers
        .into_iter()
        .filter(|(settings, _)| !settings.ignore_api)
        .flat_map(|(_, endpoints)| endpoints.iter())
        .collect()
}
