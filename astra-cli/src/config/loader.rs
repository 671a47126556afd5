use std::path::{Path, PathBuf};

use anyhow::Result;

use super::types::{AstraConfig, RawAstraConfig, ServerSection, UploadSection};
use super::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_UPLOAD_BASE_URL, DEFAULT_UPLOAD_TTL_SECS};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from an explicit path or the default location,
    /// then apply environment overrides.
    ///
    /// A missing file is not an error; it just means defaults.
    pub fn load(path: Option<&Path>) -> Result<AstraConfig> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_path);

        let raw = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            toml::from_str(&contents)?
        } else {
            RawAstraConfig::default()
        };

        let mut config = Self::finalize(raw);
        Self::apply_env_overrides(&mut config);
        Ok(config)
    }

    /// Default config path, overridable with ASTRA_CONFIG
    pub fn default_config_path() -> PathBuf {
        if let Ok(path) = std::env::var("ASTRA_CONFIG") {
            PathBuf::from(path)
        } else {
            PathBuf::from(".astra/config.toml")
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawAstraConfig) -> AstraConfig {
        AstraConfig {
            server: ServerSection {
                host: raw.server.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: raw.server.port.unwrap_or(DEFAULT_PORT),
            },
            upload: UploadSection {
                base_url: raw
                    .upload
                    .base_url
                    .unwrap_or_else(|| DEFAULT_UPLOAD_BASE_URL.to_string()),
                secret: raw.upload.secret,
                ttl_secs: raw.upload.ttl_secs.unwrap_or(DEFAULT_UPLOAD_TTL_SECS),
            },
        }
    }

    /// Environment beats the file: ASTRA_HOST, ASTRA_PORT, ASTRA_UPLOAD_SECRET
    fn apply_env_overrides(config: &mut AstraConfig) {
        if let Ok(host) = std::env::var("ASTRA_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("ASTRA_PORT") {
            if let Ok(port) = port.parse() {
                config.server.port = port;
            }
        }
        if let Ok(secret) = std::env::var("ASTRA_UPLOAD_SECRET") {
            config.upload.secret = Some(secret);
        }
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    fn clear_env() {
        for var in ["ASTRA_CONFIG", "ASTRA_HOST", "ASTRA_PORT", "ASTRA_UPLOAD_SECRET"] {
            // Safety: tests touching the environment are serialized
            unsafe { std::env::remove_var(var) };
        }
    }

    #[test]
    #[serial]
    fn missing_file_yields_defaults() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = ConfigLoader::load(Some(&path)).unwrap();

        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert!(config.upload.secret.is_none());
    }

    #[test]
    #[serial]
    fn file_values_override_defaults() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[server]
port = 9000

[upload]
secret = "from-file"
"#,
        )
        .unwrap();

        let config = ConfigLoader::load(Some(&path)).unwrap();

        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.upload.secret, Some("from-file".to_string()));
        assert_eq!(config.upload.ttl_secs, DEFAULT_UPLOAD_TTL_SECS);
    }

    #[test]
    #[serial]
    fn env_overrides_beat_the_file() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 9000\n").unwrap();

        unsafe {
            std::env::set_var("ASTRA_PORT", "9001");
            std::env::set_var("ASTRA_UPLOAD_SECRET", "from-env");
        }

        let config = ConfigLoader::load(Some(&path)).unwrap();
        clear_env();

        assert_eq!(config.server.port, 9001);
        assert_eq!(config.upload.secret, Some("from-env".to_string()));
    }

    #[test]
    #[serial]
    fn unparseable_port_override_is_ignored() {
        clear_env();
        unsafe { std::env::set_var("ASTRA_PORT", "not-a-port") };

        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::load(Some(&dir.path().join("config.toml"))).unwrap();
        clear_env();

        assert_eq!(config.server.port, DEFAULT_PORT);
    }

    #[test]
    #[serial]
    fn malformed_file_is_an_error() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is not toml [").unwrap();

        assert!(ConfigLoader::load(Some(&path)).is_err());
    }
}
