//! imgproxy URL value object
//!
//! An [`ImageUrl`] accumulates options and renders them into a signed path:
//!
//! ```text
//! <endpoint>/<signature>/<segment>/.../<source>
//! ```
//!
//! The object behaves as an immutable value: [`ImageUrl::with_options`]
//! returns a fresh copy, so a configured base can be shared freely.
//! Constraint violations do not interrupt chaining; the first one is kept and
//! reported by [`ImageUrl::to_url`].

pub mod defaults;
pub mod path;
pub mod signer;

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::UrlConfig;
use crate::constants::{DEFAULT_SIGNATURE_SIZE, INSECURE_SIGNATURE};
use crate::error::{Result, UrlError};
use crate::options::{ProcessingOption, UrlOption};

/// Builder and renderer for a single imgproxy URL
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageUrl {
    key: Option<Vec<u8>>,
    salt: Option<Vec<u8>>,
    /// Option key -> rendered argument string
    options: BTreeMap<String, String>,
    source: String,
    plain_source: bool,
    format: Option<String>,
    endpoint: Option<String>,
    signature_size: usize,
    /// First latched constraint or configuration violation
    error: Option<UrlError>,
}

impl ImageUrl {
    /// Create a URL for `source`, starting from the process-wide defaults
    ///
    /// Returns an error only when hex-encoded signing material cannot be
    /// decoded; constraint violations are latched and surface in
    /// [`ImageUrl::to_url`].
    pub fn new<I>(source: impl Into<String>, options: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<UrlOption>,
    {
        let mut url = defaults::default_url();
        url.apply_options(options)?;
        url.source = source.into();
        Ok(url)
    }

    /// Copy this URL and apply `options` on top, leaving `self` untouched
    pub fn with_options<I>(&self, options: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<UrlOption>,
    {
        let mut url = self.clone();
        url.apply_options(options)?;
        Ok(url)
    }

    /// Render the final URL
    pub fn to_url(&self) -> Result<String> {
        let path = self.path()?;

        let signature = match (self.key.as_deref(), self.salt.as_deref()) {
            (Some(key), Some(salt)) if !key.is_empty() && !salt.is_empty() => {
                signer::sign_path(key, salt, &path, self.signature_size)
            }
            _ => {
                debug!(path = %path, "No signing key/salt configured, emitting insecure URL");
                INSECURE_SIGNATURE.to_string()
            }
        };

        let endpoint = self.endpoint.as_deref().unwrap_or_default();
        let endpoint = endpoint.strip_suffix('/').unwrap_or(endpoint);

        Ok(format!("{}/{}{}", endpoint, signature, path))
    }

    /// Serialized path (everything after the signature)
    pub fn path(&self) -> Result<String> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        if self.source.is_empty() {
            return Err(UrlError::MissingSource);
        }
        Ok(path::serialize_path(
            &self.options,
            &self.source,
            self.plain_source,
            self.format.as_deref(),
        ))
    }

    /// First latched violation, if any
    pub fn error(&self) -> Option<&UrlError> {
        self.error.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Whether rendering will produce a real signature instead of `insecure`
    pub fn is_signed(&self) -> bool {
        matches!(
            (&self.key, &self.salt),
            (Some(key), Some(salt)) if !key.is_empty() && !salt.is_empty()
        )
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn is_plain_source(&self) -> bool {
        self.plain_source
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn signature_size(&self) -> usize {
        self.signature_size
    }

    /// Rendered argument string stored for `key`
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Stored options in key order
    pub fn options(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn apply_options<I>(&mut self, options: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<UrlOption>,
    {
        for option in options {
            self.apply(option.into())?;
        }
        Ok(())
    }

    fn apply(&mut self, option: UrlOption) -> Result<()> {
        match option {
            UrlOption::Processing(option) => self.apply_processing(option),
            UrlOption::Format(format) => {
                self.format = Some(format).filter(|f| !f.is_empty());
            }
            UrlOption::Source(source) => self.source = source,
            UrlOption::PlainSource(plain) => self.plain_source = plain,
            UrlOption::Key(key) => self.key = Some(decode_hex("key", &key)?),
            UrlOption::Salt(salt) => self.salt = Some(decode_hex("salt", &salt)?),
            UrlOption::KeyRaw(key) => self.key = Some(key),
            UrlOption::SaltRaw(salt) => self.salt = Some(salt),
            UrlOption::Endpoint(endpoint) => {
                self.endpoint = Some(endpoint).filter(|e| !e.is_empty());
            }
            UrlOption::SignatureSize(size) => {
                if size > DEFAULT_SIGNATURE_SIZE {
                    self.latch(UrlError::constraint(
                        "signature_size",
                        format!(
                            "{} exceeds the {}-byte HMAC-SHA256 output",
                            size, DEFAULT_SIGNATURE_SIZE
                        ),
                    ));
                } else {
                    self.signature_size = size;
                }
            }
            UrlOption::FromEnv => match UrlConfig::from_env().signing_material() {
                Ok(Some((key, salt))) => {
                    self.key = Some(decode_hex("key", key)?);
                    self.salt = Some(decode_hex("salt", salt)?);
                }
                Ok(None) => {}
                Err(err) => self.latch(err),
            },
        }
        Ok(())
    }

    fn apply_processing(&mut self, option: ProcessingOption) {
        match option.render() {
            Ok(arguments) => {
                self.options.insert(option.key().to_string(), arguments);
            }
            Err(err) => self.latch(err),
        }
    }

    fn latch(&mut self, err: UrlError) {
        if self.error.is_none() {
            debug!(error = %err, "Latching URL option error");
            self.error = Some(err);
        } else {
            debug!(error = %err, "Discarding URL option error, one is already latched");
        }
    }
}

fn decode_hex(field: &'static str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|e| UrlError::decode(field, e))
}
