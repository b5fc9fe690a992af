//! HTTP Layer - RESTful API
//!
//! 取代原先的表单界面：生成、续写、风格列表、TXT 导出

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::{AppState, SessionDefaults};
