use serde::{Deserialize, Serialize};

/// Default port for the astra server
pub const DEFAULT_PORT: u16 = 4000;
/// Default host for the astra server
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default storage base signed upload URLs point at
pub const DEFAULT_UPLOAD_BASE_URL: &str = "http://localhost:4000/storage";
/// Default signed URL lifetime in seconds
pub const DEFAULT_UPLOAD_TTL_SECS: i64 = 60;

/// Configuration as stored in TOML files (optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawAstraConfig {
    #[serde(default)]
    pub server: RawServerSection,

    #[serde(default)]
    pub upload: RawUploadSection,
}

/// Server section as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawServerSection {
    /// Host to bind to
    pub host: Option<String>,

    /// Port to listen on
    pub port: Option<u16>,
}

/// Upload section as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawUploadSection {
    /// Storage base URL signed upload URLs point at
    pub base_url: Option<String>,

    /// Secret shared with the storage gateway
    pub secret: Option<String>,

    /// Signed URL lifetime in seconds
    pub ttl_secs: Option<i64>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AstraConfig {
    pub server: ServerSection,
    pub upload: UploadSection,
}

impl Default for AstraConfig {
    fn default() -> Self {
        Self {
            server: ServerSection::default(),
            upload: UploadSection::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadSection {
    pub base_url: String,

    /// Secret shared with the storage gateway. Left unset, the server gets a
    /// process-local random secret and signed URLs only verify within that
    /// process.
    pub secret: Option<String>,

    pub ttl_secs: i64,
}

impl Default for UploadSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPLOAD_BASE_URL.to_string(),
            secret: None,
            ttl_secs: DEFAULT_UPLOAD_TTL_SECS,
        }
    }
}
