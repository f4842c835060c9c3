pub mod error_code;
pub mod pagination;
pub mod patch;
pub mod response;

pub use error_code::ErrorCode;
pub use pagination::{ListQuery, PageWindow};
pub use patch::deserialize_some;
pub use response::ApiResponse;
