pub mod system;

pub mod users;

pub mod groups;

pub mod homeworks;

pub mod attachments;

pub mod user_groups;

pub use attachments::configure_attachments_routes;
pub use groups::configure_groups_routes;
pub use homeworks::configure_homeworks_routes;
pub use system::configure_system_routes;
pub use user_groups::configure_user_groups_routes;
pub use users::configure_user_routes;

use actix_web::web;

/// 注册全部路由
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_system_routes)
        .configure(configure_user_routes)
        .configure(configure_groups_routes)
        .configure(configure_homeworks_routes)
        .configure(configure_attachments_routes)
        .configure(configure_user_groups_routes);
}
