pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ListQuery;
use crate::models::groups::requests::{CreateGroupRequest, UpdateGroupRequest};
use crate::storage::Storage;

pub struct GroupService {
    storage: Option<Arc<dyn Storage>>,
}

impl GroupService {
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

    // 获取分组列表
    pub async fn list_groups(
        &self,
        request: &HttpRequest,
        query: ListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_groups(self, request, query).await
    }

    pub async fn create_group(
        &self,
        request: &HttpRequest,
        group_data: CreateGroupRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_group(self, request, group_data).await
    }

    pub async fn get_group(
        &self,
        request: &HttpRequest,
        group_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_group(self, request, group_id).await
    }

    // 更新分组信息（重命名时检查名称唯一）
    pub async fn update_group(
        &self,
        request: &HttpRequest,
        group_id: i64,
        update_data: UpdateGroupRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_group(self, request, group_id, update_data).await
    }

    pub async fn delete_group(
        &self,
        request: &HttpRequest,
        group_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_group(self, request, group_id).await
    }
}
