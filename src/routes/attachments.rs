use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::ListQuery;
use crate::models::attachments::requests::{CreateAttachmentRequest, UpdateAttachmentRequest};
use crate::services::AttachmentService;
use crate::utils::{SafeHomeworkIdI64, SafeIDI64};

// 懒加载的全局 ATTACHMENT_SERVICE 实例
static ATTACHMENT_SERVICE: Lazy<AttachmentService> = Lazy::new(AttachmentService::new_lazy);

pub async fn list_attachments(
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> ActixResult<HttpResponse> {
    ATTACHMENT_SERVICE
        .list_attachments(&req, query.into_inner())
        .await
}

pub async fn list_homework_attachments(
    req: HttpRequest,
    homework_id: SafeHomeworkIdI64,
) -> ActixResult<HttpResponse> {
    ATTACHMENT_SERVICE
        .list_homework_attachments(&req, homework_id.0)
        .await
}

pub async fn create_attachment(
    req: HttpRequest,
    attachment_data: web::Json<CreateAttachmentRequest>,
) -> ActixResult<HttpResponse> {
    ATTACHMENT_SERVICE
        .create_attachment(&req, attachment_data.into_inner())
        .await
}

pub async fn get_attachment(
    req: HttpRequest,
    attachment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ATTACHMENT_SERVICE
        .get_attachment(&req, attachment_id.0)
        .await
}

pub async fn update_attachment(
    req: HttpRequest,
    attachment_id: SafeIDI64,
    update_data: web::Json<UpdateAttachmentRequest>,
) -> ActixResult<HttpResponse> {
    ATTACHMENT_SERVICE
        .update_attachment(&req, attachment_id.0, update_data.into_inner())
        .await
}

pub async fn delete_attachment(
    req: HttpRequest,
    attachment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ATTACHMENT_SERVICE
        .delete_attachment(&req, attachment_id.0)
        .await
}

// 配置路由
pub fn configure_attachments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/attachments")
            .service(
                web::resource("")
                    .route(web::get().to(list_attachments))
                    .route(web::post().to(create_attachment)),
            )
            .service(
                web::resource("/homework/{homework_id}")
                    .route(web::get().to(list_homework_attachments)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_attachment))
                    .route(web::put().to(update_attachment))
                    .route(web::delete().to(delete_attachment)),
            ),
    );
}
