// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dynamic_api::prelude::*;

pub struct UserDto {
    pub id:   i64,
    pub name: String
}

#[async_trait]
#[route_prefix("/api/v2/users")]
#[api_explorer_settings(ignore_api = false, group_name = "users")]
pub trait IUserService: DynamicController {
    async fn get_user(&self, id: i64) -> UserDto;

    #[default_value(page = 1, size = 20, active = true, keyword)]
    async fn get_users(&self, page: i32, size: i32, active: bool, keyword: String) -> Vec<UserDto>;

    #[http_method(Delete)]
    async fn get_rid_of(&self, id: i64);
}

struct Users;

impl DynamicController for Users {}

#[async_trait]
impl IUserService for Users {
    async fn get_user(&self, id: i64) -> UserDto {
        UserDto {
            id,
            name: "demo".to_string(),
        }
    }

    async fn get_users(&self, _page: i32, _size: i32, _active: bool, _keyword: String) -> Vec<UserDto> {
        Vec::new()
    }

    async fn get_rid_of(&self, _id: i64) {}
}

fn assert_service<S: IUserService>(_service: &S) {}

fn main() {
    assert_service(&Users);
}
