pub mod body;
pub mod headers;
pub mod response;
pub mod timeout;

pub use body::LenientJson;
pub use headers::allow_any_origin;
pub use response::{ApiResponse, ApiResult};
pub use timeout::handle_layer_error;
