/*!
 * 请求日志中间件
 *
 * 为每个请求记录方法、路径、状态码与耗时。5xx 响应使用 `warn` 级别。
 *
 * ```rust,ignore
 * App::new()
 *     .wrap(RequestTrace)
 *     .configure(routes::configure_routes)
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, time::Instant};
use tracing::{info, warn};

#[derive(Clone)]
pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let method = req.method().clone();
        let path = req.path().to_string();
        let started = Instant::now();

        Box::pin(async move {
            match srv.call(req).await {
                Ok(res) => {
                    let status = res.status();
                    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

                    if status.is_server_error() {
                        warn!(
                            "{} {} -> {} ({:.2} ms)",
                            method,
                            path,
                            status.as_u16(),
                            elapsed_ms
                        );
                    } else {
                        info!(
                            "{} {} -> {} ({:.2} ms)",
                            method,
                            path,
                            status.as_u16(),
                            elapsed_ms
                        );
                    }
                    Ok(res)
                }
                Err(err) => {
                    warn!("{} {} failed: {}", method, path, err);
                    Err(err)
                }
            }
        })
    }
}
