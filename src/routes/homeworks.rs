use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::ListQuery;
use crate::models::homeworks::requests::{CreateHomeworkRequest, UpdateHomeworkRequest};
use crate::services::HomeworkService;
use crate::utils::{SafeGroupIdI64, SafeIDI64};

// 懒加载的全局 HOMEWORK_SERVICE 实例
static HOMEWORK_SERVICE: Lazy<HomeworkService> = Lazy::new(HomeworkService::new_lazy);

pub async fn list_homeworks(
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .list_homeworks(&req, query.into_inner())
        .await
}

pub async fn list_group_homeworks(
    req: HttpRequest,
    group_id: SafeGroupIdI64,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .list_group_homeworks(&req, group_id.0)
        .await
}

pub async fn create_homework(
    req: HttpRequest,
    homework_data: web::Json<CreateHomeworkRequest>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .create_homework(&req, homework_data.into_inner())
        .await
}

pub async fn get_homework(req: HttpRequest, homework_id: SafeIDI64) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE.get_homework(&req, homework_id.0).await
}

pub async fn update_homework(
    req: HttpRequest,
    homework_id: SafeIDI64,
    update_data: web::Json<UpdateHomeworkRequest>,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE
        .update_homework(&req, homework_id.0, update_data.into_inner())
        .await
}

pub async fn delete_homework(
    req: HttpRequest,
    homework_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    HOMEWORK_SERVICE.delete_homework(&req, homework_id.0).await
}

// 配置路由
pub fn configure_homeworks_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/homeworks")
            .service(
                web::resource("")
                    .route(web::get().to(list_homeworks))
                    .route(web::post().to(create_homework)),
            )
            .service(
                web::resource("/group/{group_id}").route(web::get().to(list_group_homeworks)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_homework))
                    .route(web::put().to(update_homework))
                    .route(web::delete().to(delete_homework)),
            ),
    );
}
