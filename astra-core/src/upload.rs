//! Time-limited, write-only upload URL signing
//!
//! Deployments put real object storage behind these URLs; the signer and the
//! storage gateway share a secret, and the gateway replays the same MAC over
//! method, key, expiry, and content type before accepting the PUT.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

use crate::error::SignError;

type HmacSha256 = Hmac<Sha256>;

/// Default lifetime of a signed upload URL, in seconds
pub const DEFAULT_UPLOAD_TTL_SECS: i64 = 60;

/// A signed, time-limited PUT target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignedUpload {
    /// Full URL the client PUTs the file to
    pub url: String,
    /// Object key under the storage base
    pub key: String,
    /// When the URL stops being accepted
    pub expires_at: DateTime<Utc>,
}

/// Issues HMAC-SHA256 signed upload URLs against a storage base URL
pub struct UploadSigner {
    base_url: String,
    secret: Vec<u8>,
    ttl: Duration,
}

impl UploadSigner {
    /// Create a signer for the given storage base URL and shared secret,
    /// with the default 60-second TTL
    pub fn new(base_url: impl Into<String>, secret: impl Into<Vec<u8>>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            secret: secret.into(),
            ttl: Duration::seconds(DEFAULT_UPLOAD_TTL_SECS),
        }
    }

    /// Override the URL lifetime
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Sign an upload of `filename` with the given content type
    pub fn sign(&self, filename: &str, content_type: &str) -> Result<SignedUpload, SignError> {
        self.sign_at(filename, content_type, Utc::now())
    }

    fn sign_at(
        &self,
        filename: &str,
        content_type: &str,
        now: DateTime<Utc>,
    ) -> Result<SignedUpload, SignError> {
        let key = object_key(filename, now);
        let expires_at = now + self.ttl;
        let signature = self.mac(&key, content_type, expires_at.timestamp())?;
        let url = format!(
            "{}/{}?expires={}&signature={}",
            self.base_url,
            key,
            expires_at.timestamp(),
            signature
        );
        Ok(SignedUpload {
            url,
            key,
            expires_at,
        })
    }

    /// Check a signature produced by [`UploadSigner::sign`]: the MAC must
    /// match and `now` must be at or before the expiry
    pub fn verify(
        &self,
        key: &str,
        content_type: &str,
        expires: i64,
        signature: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, SignError> {
        if now.timestamp() > expires {
            return Ok(false);
        }
        let expected = self.mac(key, content_type, expires)?;
        Ok(expected == signature)
    }

    fn mac(&self, key: &str, content_type: &str, expires: i64) -> Result<String, SignError> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| SignError::Key(e.to_string()))?;
        mac.update(format!("PUT\n{key}\n{expires}\n{content_type}").as_bytes());
        Ok(URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
    }
}

/// Object key for an upload: `uploads/{unix_millis}-{sanitized_filename}`
pub fn object_key(filename: &str, now: DateTime<Utc>) -> String {
    format!("uploads/{}-{}", now.timestamp_millis(), sanitize(filename))
}

/// Replace every byte outside `[A-Za-z0-9_.-]` with an underscore
fn sanitize(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> UploadSigner {
        UploadSigner::new("https://storage.astra.example", *b"test-secret")
    }

    #[test]
    fn sanitize_replaces_unsafe_characters() {
        assert_eq!(sanitize("solar array v2.jpg"), "solar_array_v2.jpg");
        assert_eq!(sanitize("../../etc/passwd"), "_.._.._etc_passwd");
        assert_eq!(sanitize("chassis-rev_3.pdf"), "chassis-rev_3.pdf");
    }

    #[test]
    fn object_key_embeds_millis_and_sanitized_name() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let key = object_key("pit stop.png", now);
        assert_eq!(key, "uploads/1700000000000-pit_stop.png");
    }

    #[test]
    fn signed_url_points_at_storage_base() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let signed = signer().sign_at("array.jpg", "image/jpeg", now).unwrap();

        assert!(signed.url.starts_with("https://storage.astra.example/uploads/"));
        assert!(signed.url.contains("expires=1700000060"));
        assert_eq!(signed.expires_at.timestamp(), now.timestamp() + 60);
    }

    #[test]
    fn signature_verifies_with_issuing_secret() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let signer = signer();
        let signed = signer.sign_at("array.jpg", "image/jpeg", now).unwrap();

        let signature = signed
            .url
            .split("signature=")
            .nth(1)
            .unwrap()
            .to_string();

        assert!(signer
            .verify(
                &signed.key,
                "image/jpeg",
                signed.expires_at.timestamp(),
                &signature,
                now
            )
            .unwrap());
    }

    #[test]
    fn verification_fails_after_expiry() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let signer = signer();
        let signed = signer.sign_at("array.jpg", "image/jpeg", now).unwrap();
        let signature = signed.url.split("signature=").nth(1).unwrap().to_string();

        let late = now + Duration::seconds(61);
        assert!(!signer
            .verify(
                &signed.key,
                "image/jpeg",
                signed.expires_at.timestamp(),
                &signature,
                late
            )
            .unwrap());
    }

    #[test]
    fn verification_fails_on_tampered_key_or_content_type() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let signer = signer();
        let signed = signer.sign_at("array.jpg", "image/jpeg", now).unwrap();
        let signature = signed.url.split("signature=").nth(1).unwrap().to_string();
        let expires = signed.expires_at.timestamp();

        assert!(!signer
            .verify("uploads/other-key.jpg", "image/jpeg", expires, &signature, now)
            .unwrap());
        assert!(!signer
            .verify(&signed.key, "application/zip", expires, &signature, now)
            .unwrap());
    }

    #[test]
    fn different_secret_does_not_verify() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let signed = signer().sign_at("array.jpg", "image/jpeg", now).unwrap();
        let signature = signed.url.split("signature=").nth(1).unwrap().to_string();

        let other = UploadSigner::new("https://storage.astra.example", *b"other-secret");
        assert!(!other
            .verify(
                &signed.key,
                "image/jpeg",
                signed.expires_at.timestamp(),
                &signature,
                now
            )
            .unwrap());
    }

    #[test]
    fn custom_ttl_moves_expiry() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let signer = signer().with_ttl(Duration::seconds(300));
        let signed = signer.sign_at("array.jpg", "image/jpeg", now).unwrap();

        assert_eq!(signed.expires_at.timestamp(), now.timestamp() + 300);
    }
}
