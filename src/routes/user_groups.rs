use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::ListQuery;
use crate::models::user_groups::requests::{CreateUserGroupRequest, UpdateUserGroupRequest};
use crate::services::UserGroupService;
use crate::utils::{SafeGroupIdI64, SafeUserIdI64};

// 懒加载的全局 USER_GROUP_SERVICE 实例
static USER_GROUP_SERVICE: Lazy<UserGroupService> = Lazy::new(UserGroupService::new_lazy);

// HTTP处理程序
pub async fn list_user_groups(
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> ActixResult<HttpResponse> {
    USER_GROUP_SERVICE
        .list_user_groups(&req, query.into_inner())
        .await
}

pub async fn add_user_to_group(
    req: HttpRequest,
    membership: web::Json<CreateUserGroupRequest>,
) -> ActixResult<HttpResponse> {
    USER_GROUP_SERVICE
        .add_user_to_group(&req, membership.into_inner())
        .await
}

pub async fn list_groups_of_user(
    req: HttpRequest,
    user_id: SafeUserIdI64,
) -> ActixResult<HttpResponse> {
    USER_GROUP_SERVICE
        .list_groups_of_user(&req, user_id.0)
        .await
}

pub async fn list_members_of_group(
    req: HttpRequest,
    group_id: SafeGroupIdI64,
) -> ActixResult<HttpResponse> {
    USER_GROUP_SERVICE
        .list_members_of_group(&req, group_id.0)
        .await
}

pub async fn get_user_group(
    req: HttpRequest,
    user_id: SafeUserIdI64,
    group_id: SafeGroupIdI64,
) -> ActixResult<HttpResponse> {
    USER_GROUP_SERVICE
        .get_user_group(&req, user_id.0, group_id.0)
        .await
}

// 新角色通过查询参数传入：?user_role=admin
pub async fn update_user_role(
    req: HttpRequest,
    user_id: SafeUserIdI64,
    group_id: SafeGroupIdI64,
    query: web::Query<UpdateUserGroupRequest>,
) -> ActixResult<HttpResponse> {
    USER_GROUP_SERVICE
        .update_user_role(&req, user_id.0, group_id.0, query.into_inner())
        .await
}

pub async fn remove_user_from_group(
    req: HttpRequest,
    user_id: SafeUserIdI64,
    group_id: SafeGroupIdI64,
) -> ActixResult<HttpResponse> {
    USER_GROUP_SERVICE
        .remove_user_from_group(&req, user_id.0, group_id.0)
        .await
}

// 配置路由
pub fn configure_user_groups_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user-groups")
            .service(
                web::resource("")
                    .route(web::get().to(list_user_groups))
                    .route(web::post().to(add_user_to_group)),
            )
            // /user/{id} 与 /group/{id} 必须先于 /{user_id}/{group_id} 注册
            .service(web::resource("/user/{user_id}").route(web::get().to(list_groups_of_user)))
            .service(
                web::resource("/group/{group_id}").route(web::get().to(list_members_of_group)),
            )
            .service(
                web::resource("/{user_id}/{group_id}")
                    .route(web::get().to(get_user_group))
                    .route(web::put().to(update_user_role))
                    .route(web::delete().to(remove_user_from_group)),
            ),
    );
}
