//! URL builder configuration
//!
//! [`UrlConfig`] is a serde-friendly description of a base URL: endpoint,
//! hex-encoded signing material and source settings. It can be embedded in
//! an application's own configuration or loaded from the environment.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{DEFAULT_SIGNATURE_SIZE, ENV_KEY, ENV_SALT};
use crate::error::{Result, UrlError};
use crate::options::UrlOption;
use crate::url::ImageUrl;

/// Settings shared by every URL built from the same base
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlConfig {
    /// Prefix prepended to the signed path (e.g. `https://img.example.com`)
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Hex-encoded signing key
    #[serde(default)]
    pub key: Option<String>,
    /// Hex-encoded signing salt
    #[serde(default)]
    pub salt: Option<String>,
    /// Signature truncation in bytes (0 = full 32 bytes)
    #[serde(default)]
    pub signature_size: usize,
    /// Encode sources as `plain/...` instead of base64
    #[serde(default)]
    pub plain_source: bool,
    /// Default output format
    #[serde(default)]
    pub format: Option<String>,
}

impl UrlConfig {
    /// Read signing material from `IMGPROXY_KEY` and `IMGPROXY_SALT`
    ///
    /// Empty variables are treated as unset.
    pub fn from_env() -> Self {
        Self {
            key: read_env(ENV_KEY),
            salt: read_env(ENV_SALT),
            ..Default::default()
        }
    }

    /// Key and salt when both are present
    ///
    /// Returns a configuration error when exactly one of them is set.
    pub fn signing_material(&self) -> Result<Option<(&str, &str)>> {
        match (self.key.as_deref(), self.salt.as_deref()) {
            (Some(key), Some(salt)) => Ok(Some((key, salt))),
            (None, None) => Ok(None),
            (Some(_), None) => {
                warn!("Signing key is set without a salt");
                Err(UrlError::config(format!(
                    "{} is set but {} is not",
                    ENV_KEY, ENV_SALT
                )))
            }
            (None, Some(_)) => {
                warn!("Signing salt is set without a key");
                Err(UrlError::config(format!(
                    "{} is set but {} is not",
                    ENV_SALT, ENV_KEY
                )))
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.signing_material()?;

        if self.signature_size > DEFAULT_SIGNATURE_SIZE {
            return Err(UrlError::config(format!(
                "signature_size {} exceeds {} bytes",
                self.signature_size, DEFAULT_SIGNATURE_SIZE
            )));
        }

        Ok(())
    }

    /// Builder options equivalent to this configuration
    pub fn to_options(&self) -> Vec<UrlOption> {
        let mut options = Vec::new();

        if let Some(endpoint) = &self.endpoint {
            options.push(UrlOption::Endpoint(endpoint.clone()));
        }
        if let Some(key) = &self.key {
            options.push(UrlOption::Key(key.clone()));
        }
        if let Some(salt) = &self.salt {
            options.push(UrlOption::Salt(salt.clone()));
        }
        if let Some(format) = &self.format {
            options.push(UrlOption::Format(format.clone()));
        }
        options.push(UrlOption::SignatureSize(self.signature_size));
        options.push(UrlOption::PlainSource(self.plain_source));

        options
    }

    /// Isolated base URL carrying these settings, independent of the
    /// process-wide defaults
    pub fn base_url(&self) -> Result<ImageUrl> {
        self.validate()?;
        ImageUrl::default().with_options(self.to_options())
    }
}

fn read_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
