use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::ListQuery;
use crate::models::groups::requests::{CreateGroupRequest, UpdateGroupRequest};
use crate::services::GroupService;
use crate::utils::SafeIDI64;

// 懒加载的全局 GROUP_SERVICE 实例
static GROUP_SERVICE: Lazy<GroupService> = Lazy::new(GroupService::new_lazy);

pub async fn list_groups(
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.list_groups(&req, query.into_inner()).await
}

pub async fn create_group(
    req: HttpRequest,
    group_data: web::Json<CreateGroupRequest>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE
        .create_group(&req, group_data.into_inner())
        .await
}

pub async fn get_group(req: HttpRequest, group_id: SafeIDI64) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.get_group(&req, group_id.0).await
}

pub async fn update_group(
    req: HttpRequest,
    group_id: SafeIDI64,
    update_data: web::Json<UpdateGroupRequest>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE
        .update_group(&req, group_id.0, update_data.into_inner())
        .await
}

pub async fn delete_group(req: HttpRequest, group_id: SafeIDI64) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.delete_group(&req, group_id.0).await
}

// 配置路由
pub fn configure_groups_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/groups")
            .service(
                web::resource("")
                    .route(web::get().to(list_groups))
                    .route(web::post().to(create_group)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_group))
                    .route(web::put().to(update_group))
                    .route(web::delete().to(delete_group)),
            ),
    );
}
