pub mod api;
pub mod error;
pub mod structs;

pub use api::{ClientConfig, PostSearcher, TwitterClient, API_NAME, DEFAULT_BASE_URL};
pub use error::{RequestFailure, SearchError};
pub use structs::{Post, SearchResponse};
