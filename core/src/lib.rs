pub mod types;
pub mod errors;
pub mod url_ext;

pub use types::*;
pub use errors::*;
pub use url_ext::UrlExt;

// Re-export commonly used types
pub use uuid::Uuid;
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use url::Url;
