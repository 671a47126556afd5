mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AstraConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_UPLOAD_BASE_URL, DEFAULT_UPLOAD_TTL_SECS,
};
