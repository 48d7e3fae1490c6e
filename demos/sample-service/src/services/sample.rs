// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Sample service covering every binding source.
//!
//! | Method | Route |
//! |--------|-------|
//! | `get_welcome_message` | `GET /api/sample/get-welcome-message` |
//! | `get_item_async` | `GET /api/sample/get-item/{id}?keyword=` |
//! | `create_item_async` | `POST /api/sample/create-item` (JSON) |
//! | `update_item_async` | `PUT /api/sample/update-item/{id}` (JSON) |
//! | `delete_item_async` | `DELETE /api/sample/delete-item/{id}?force=` |
//! | `get_list_async` | `GET /api/sample/get-list?page_index=&page_size=` |
//! | `upload_item_image` | `POST /api/sample/upload-item-image/{item_id}` (multipart) |

use dynamic_api::prelude::*;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Request for `create_item_async`.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleCreateModel {
    pub name:  String,
    pub count: i32
}

/// Request for `update_item_async`.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleUpdateModel {
    pub name:    String,
    pub enabled: bool
}

/// One entry of `get_list_async`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleListItem {
    pub id:   i32,
    pub name: String
}

#[async_trait]
#[route_prefix("/api/sample")]
#[api_explorer_settings(ignore_api = false, group_name = "Sample Service")]
pub trait ISampleService: DynamicController {
    async fn get_welcome_message(&self) -> String;

    #[http_method(Get)]
    async fn get_item_async(&self, id: i32, keyword: String) -> String;

    #[http_method(Post)]
    async fn create_item_async(&self, model: SampleCreateModel) -> bool;

    #[http_method(Put)]
    async fn update_item_async(&self, id: i32, model: SampleUpdateModel) -> bool;

    #[http_method(Delete)]
    #[default_value(force = false)]
    async fn delete_item_async(&self, id: i32, force: bool) -> bool;

    #[http_method(Get)]
    #[default_value(page_index = 1, page_size = 10)]
    async fn get_list_async(&self, page_index: i32, page_size: i32) -> Vec<SampleListItem>;

    /// Returns the size of the accepted image, zero for an unknown item.
    async fn upload_item_image(&self, item_id: i32, image: FormFile) -> usize;
}

include!(concat!(env!("OUT_DIR"), "/sample_service_controller.rs"));

#[derive(Debug, Clone)]
struct StoredItem {
    id:      i32,
    name:    String,
    enabled: bool,
    image:   usize
}

/// [`ISampleService`] backed by memory.
#[derive(Debug, Default)]
pub struct InMemorySampleService {
    items: RwLock<Vec<StoredItem>>
}

impl DynamicController for InMemorySampleService {}

#[async_trait]
impl ISampleService for InMemorySampleService {
    async fn get_welcome_message(&self) -> String {
        "Welcome to the sample service".to_string()
    }

    async fn get_item_async(&self, id: i32, keyword: String) -> String {
        let items = self.items.read().await;
        match items.iter().find(|item| item.id == id) {
            Some(item) if item.image > 0 => format!("{}:{keyword}:image", item.name),
            Some(item) => format!("{}:{keyword}", item.name),
            None => format!("missing:{keyword}")
        }
    }

    async fn create_item_async(&self, model: SampleCreateModel) -> bool {
        if model.name.is_empty() || model.count < 0 {
            return false;
        }
        let mut items = self.items.write().await;
        let id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        items.push(StoredItem {
            id,
            name: model.name,
            enabled: true,
            image: 0
        });
        tracing::debug!(id, "sample item created");
        true
    }

    async fn update_item_async(&self, id: i32, model: SampleUpdateModel) -> bool {
        let mut items = self.items.write().await;
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.name = model.name;
        item.enabled = model.enabled;
        true
    }

    async fn delete_item_async(&self, id: i32, force: bool) -> bool {
        let mut items = self.items.write().await;
        let Some(index) = items.iter().position(|item| item.id == id) else {
            return false;
        };
        if items[index].enabled && !force {
            return false;
        }
        items.remove(index);
        true
    }

    async fn get_list_async(&self, page_index: i32, page_size: i32) -> Vec<SampleListItem> {
        let page = usize::try_from(page_index.max(1) - 1).unwrap_or(0);
        let size = usize::try_from(page_size.max(0)).unwrap_or(0);
        self.items
            .read()
            .await
            .iter()
            .skip(page * size)
            .take(size)
            .map(|item| SampleListItem {
                id:   item.id,
                name: item.name.clone()
            })
            .collect()
    }

    async fn upload_item_image(&self, item_id: i32, image: FormFile) -> usize {
        let mut items = self.items.write().await;
        let Some(item) = items.iter_mut().find(|item| item.id == item_id) else {
            return 0;
        };
        item.image = image.bytes.len();
        item.image
    }
}
