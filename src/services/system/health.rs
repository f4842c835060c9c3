use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::SystemService;
use crate::models::ApiResponse;

pub async fn health(service: &SystemService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    debug!(
        "Liveness probe from {:?} ({})",
        request.peer_addr(),
        service.get_config().app.system_name
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("School Bot API is running!")))
}
