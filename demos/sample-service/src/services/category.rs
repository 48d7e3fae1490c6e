// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Category tree, hidden from API documentation.

use dynamic_api::prelude::*;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id:          i64,
    pub name:        String,
    pub description: Option<String>,
    pub parent_id:   Option<i64>,
    pub sort_order:  i32,
    pub is_active:   bool
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTreeDto {
    pub id:         i64,
    pub name:       String,
    pub sort_order: i32,
    pub children:   Vec<CategoryTreeDto>
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryDto {
    pub name:        String,
    pub description: Option<String>,
    pub parent_id:   Option<i64>,
    #[serde(default)]
    pub sort_order:  i32
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategoryDto {
    pub name:        Option<String>,
    pub description: Option<String>,
    pub sort_order:  Option<i32>,
    pub is_active:   Option<bool>
}

#[async_trait]
#[route_prefix("api/categories")]
#[api_explorer_settings(ignore_api = true, group_name = "Category Service")]
pub trait ICategoryService: DynamicController {
    #[http_method(Get)]
    async fn get_category_tree_async(&self) -> Vec<CategoryTreeDto>;

    #[http_method(Get)]
    async fn get_category_by_id_async(&self, id: i64) -> Option<CategoryDto>;

    #[http_method(Post)]
    async fn create_category_async(&self, dto: CreateCategoryDto) -> i64;

    #[http_method(Put)]
    async fn update_category_async(&self, id: i64, dto: UpdateCategoryDto) -> bool;

    #[http_method(Delete)]
    async fn delete_category_async(&self, id: i64) -> bool;

    #[http_method(Get)]
    async fn get_category_product_count_async(&self, id: i64) -> i32;

    #[http_method(Put)]
    async fn update_category_sort_async(&self, id: i64, sort_order: i32) -> bool;
}

include!(concat!(env!("OUT_DIR"), "/category_service_controller.rs"));

/// [`ICategoryService`] backed by memory.
#[derive(Debug, Default)]
pub struct InMemoryCategoryService {
    categories: RwLock<Vec<CategoryDto>>
}

impl DynamicController for InMemoryCategoryService {}

fn subtree(all: &[CategoryDto], parent: Option<i64>) -> Vec<CategoryTreeDto> {
    let mut nodes: Vec<CategoryTreeDto> = all
        .iter()
        .filter(|category| category.parent_id == parent)
        .map(|category| CategoryTreeDto {
            id:         category.id,
            name:       category.name.clone(),
            sort_order: category.sort_order,
            children:   subtree(all, Some(category.id))
        })
        .collect();
    nodes.sort_by_key(|node| (node.sort_order, node.id));
    nodes
}

#[async_trait]
impl ICategoryService for InMemoryCategoryService {
    async fn get_category_tree_async(&self) -> Vec<CategoryTreeDto> {
        subtree(&self.categories.read().await, None)
    }

    async fn get_category_by_id_async(&self, id: i64) -> Option<CategoryDto> {
        self.categories
            .read()
            .await
            .iter()
            .find(|category| category.id == id)
            .cloned()
    }

    async fn create_category_async(&self, dto: CreateCategoryDto) -> i64 {
        let mut categories = self.categories.write().await;
        let id = categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        categories.push(CategoryDto {
            id,
            name: dto.name,
            description: dto.description,
            parent_id: dto.parent_id,
            sort_order: dto.sort_order,
            is_active: true
        });
        id
    }

    async fn update_category_async(&self, id: i64, dto: UpdateCategoryDto) -> bool {
        let mut categories = self.categories.write().await;
        let Some(category) = categories.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        if let Some(name) = dto.name {
            category.name = name;
        }
        if dto.description.is_some() {
            category.description = dto.description;
        }
        if let Some(sort_order) = dto.sort_order {
            category.sort_order = sort_order;
        }
        if let Some(is_active) = dto.is_active {
            category.is_active = is_active;
        }
        true
    }

    async fn delete_category_async(&self, id: i64) -> bool {
        let mut categories = self.categories.write().await;
        let before = categories.len();
        categories.retain(|c| c.id != id && c.parent_id != Some(id));
        categories.len() != before
    }

    async fn get_category_product_count_async(&self, _id: i64) -> i32 {
        0
    }

    async fn update_category_sort_async(&self, id: i64, sort_order: i32) -> bool {
        self.update_category_async(
            id,
            UpdateCategoryDto {
                sort_order: Some(sort_order),
                ..UpdateCategoryDto::default()
            }
        )
        .await
    }
}
