pub mod client;
pub mod error;
pub mod models;

pub use client::KubeEpClient;
pub use error::ApiError;
