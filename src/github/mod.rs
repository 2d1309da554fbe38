pub mod error;
pub mod models;
pub mod rest;

pub use error::FetchError;
pub use models::*;
pub use rest::GithubClient;
