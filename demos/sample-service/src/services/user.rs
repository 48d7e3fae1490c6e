// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Users, with the route prefix overridden and fallible methods.

use std::collections::BTreeMap;

use dynamic_api::prelude::*;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id:   i64,
    pub name: String
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserDto {
    pub name: String
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserDto {
    pub name: String
}

#[async_trait]
#[route_prefix("/api/user/test")]
pub trait IUserService: DynamicController {
    async fn get_user_async(&self, id: i64) -> Result<UserDto, ServiceError>;

    async fn get_users_async(&self, name: Option<String>) -> Vec<UserDto>;

    async fn create_user_async(&self, dto: CreateUserDto) -> Result<UserDto, ServiceError>;

    async fn update_user_async(&self, id: i64, dto: UpdateUserDto) -> Result<(), ServiceError>;

    async fn delete_user_async(&self, id: i64);
}

include!(concat!(env!("OUT_DIR"), "/user_service_controller.rs"));

/// [`IUserService`] backed by memory.
#[derive(Debug, Default)]
pub struct InMemoryUserService {
    users: RwLock<BTreeMap<i64, String>>
}

impl DynamicController for InMemoryUserService {}

fn not_found(id: i64) -> ServiceError {
    ServiceError::NotFound {
        entity: "user",
        id
    }
}

fn validate(name: &str) -> Result<(), ServiceError> {
    if name.trim().is_empty() {
        return Err(ServiceError::Invalid("user name must not be empty".to_string()));
    }
    Ok(())
}

#[async_trait]
impl IUserService for InMemoryUserService {
    async fn get_user_async(&self, id: i64) -> Result<UserDto, ServiceError> {
        let users = self.users.read().await;
        let name = users.get(&id).ok_or_else(|| not_found(id))?;
        Ok(UserDto {
            id,
            name: name.clone()
        })
    }

    async fn get_users_async(&self, name: Option<String>) -> Vec<UserDto> {
        self.users
            .read()
            .await
            .iter()
            .filter(|(_, user)| name.as_deref().is_none_or(|name| user.contains(name)))
            .map(|(id, user)| UserDto {
                id:   *id,
                name: user.clone()
            })
            .collect()
    }

    async fn create_user_async(&self, dto: CreateUserDto) -> Result<UserDto, ServiceError> {
        validate(&dto.name)?;
        let mut users = self.users.write().await;
        let id = users.keys().next_back().copied().unwrap_or(0) + 1;
        users.insert(id, dto.name.clone());
        tracing::debug!(id, "user created");
        Ok(UserDto {
            id,
            name: dto.name
        })
    }

    async fn update_user_async(&self, id: i64, dto: UpdateUserDto) -> Result<(), ServiceError> {
        validate(&dto.name)?;
        let mut users = self.users.write().await;
        let name = users.get_mut(&id).ok_or_else(|| not_found(id))?;
        *name = dto.name;
        Ok(())
    }

    async fn delete_user_async(&self, id: i64) {
        self.users.write().await.remove(&id);
    }
}
