pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ListQuery;
use crate::models::user_groups::requests::{CreateUserGroupRequest, UpdateUserGroupRequest};
use crate::storage::Storage;

pub struct UserGroupService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserGroupService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn list_user_groups(
        &self,
        request: &HttpRequest,
        query: ListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_user_groups(self, request, query).await
    }

    // 列出用户加入的分组
    pub async fn list_groups_of_user(
        &self,
        request: &HttpRequest,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_groups_of_user(self, request, user_id).await
    }

    // 列出分组成员
    pub async fn list_members_of_group(
        &self,
        request: &HttpRequest,
        group_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_members_of_group(self, request, group_id).await
    }

    // 用户加入分组
    pub async fn add_user_to_group(
        &self,
        request: &HttpRequest,
        membership: CreateUserGroupRequest,
    ) -> ActixResult<HttpResponse> {
        create::add_user_to_group(self, request, membership).await
    }

    pub async fn get_user_group(
        &self,
        request: &HttpRequest,
        user_id: i64,
        group_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_user_group(self, request, user_id, group_id).await
    }

    // 修改组内角色
    pub async fn update_user_role(
        &self,
        request: &HttpRequest,
        user_id: i64,
        group_id: i64,
        update_data: UpdateUserGroupRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_user_role(self, request, user_id, group_id, update_data).await
    }

    // 将用户移出分组
    pub async fn remove_user_from_group(
        &self,
        request: &HttpRequest,
        user_id: i64,
        group_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::remove_user_from_group(self, request, user_id, group_id).await
    }
}
