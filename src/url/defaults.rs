//! Process-wide default URL
//!
//! [`ImageUrl::new`] clones this object before applying its options, so an
//! endpoint and signing material configured here apply to every URL built
//! afterwards. Configure it once at startup; callers that need isolation
//! should build from their own base (`ImageUrl::default()` or
//! [`UrlConfig::base_url`](crate::UrlConfig::base_url)) instead.

use std::sync::OnceLock;

use parking_lot::RwLock;
use tracing::info;

use super::ImageUrl;
use crate::error::Result;
use crate::options::UrlOption;

static DEFAULT_URL: OnceLock<RwLock<ImageUrl>> = OnceLock::new();

fn cell() -> &'static RwLock<ImageUrl> {
    DEFAULT_URL.get_or_init(|| RwLock::new(ImageUrl::default()))
}

/// Snapshot of the current defaults
pub fn default_url() -> ImageUrl {
    cell().read().clone()
}

/// Apply options to a copy of the defaults and swap it in on success
fn update(options: Vec<UrlOption>) -> Result<()> {
    let mut guard = cell().write();
    *guard = guard.with_options(options)?;
    Ok(())
}

/// Set the default hex-encoded key and salt
///
/// On a decoding error the defaults are left unchanged.
pub fn set_default_key_salt(key: &str, salt: &str) -> Result<()> {
    update(vec![
        UrlOption::Key(key.to_string()),
        UrlOption::Salt(salt.to_string()),
    ])?;
    info!("Default signing key and salt configured");
    Ok(())
}

/// Set the default raw key and salt
pub fn set_default_key_salt_raw(key: impl Into<Vec<u8>>, salt: impl Into<Vec<u8>>) {
    let mut guard = cell().write();
    guard.key = Some(key.into());
    guard.salt = Some(salt.into());
}

pub fn set_default_endpoint(endpoint: impl Into<String>) {
    let endpoint = endpoint.into();
    info!(endpoint = %endpoint, "Default endpoint configured");
    cell().write().endpoint = Some(endpoint).filter(|e| !e.is_empty());
}

/// Restore the empty defaults
pub fn reset_defaults() {
    *cell().write() = ImageUrl::default();
}
