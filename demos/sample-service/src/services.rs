// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Service traits with generated controllers.

pub mod category;
pub mod sample;
pub mod user;

pub use category::{CategoryServiceController, ICategoryService, InMemoryCategoryService};
pub use sample::{ISampleService, InMemorySampleService, SampleServiceController};
pub use user::{IUserService, InMemoryUserService, UserServiceController};
