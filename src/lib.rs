pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod output;
pub mod records;
pub mod request;
pub mod response;
pub mod timestamp;

pub use client::MotusClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use records::{FromRaw, Project, Receiver};
