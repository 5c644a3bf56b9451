pub mod manager;
pub mod types;
pub mod url;

// Re-exports for convenience
pub use manager::RequestManager;
pub use types::{CredentialsMode, RequestParameters, ResourceType};
pub use url::{format_url, is_mapabc_url, parse_url, UrlObject};
