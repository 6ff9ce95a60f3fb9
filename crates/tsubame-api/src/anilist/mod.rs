pub mod client;
pub mod error;
pub mod query;
pub mod types;

pub use client::AniListClient;
pub use error::AniListError;
pub use query::{Operation, QueryTemplates};
