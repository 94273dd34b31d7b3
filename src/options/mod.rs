//! Options consumed by the URL builder
//!
//! Two families of options exist:
//!
//! - [`ProcessingOption`]s become `key:arg:arg` path segments
//! - the remaining [`UrlOption`] variants control the source locator,
//!   signing material and endpoint
//!
//! ```text
//! /insecure/c:0.5:0.5:fp:0.250:0.750/h:200/w:200/bG9jYWw6Ly8vaW1nLmpwZw
//! ```

pub mod gravity;
pub mod processing;
pub mod trim;

pub use gravity::{Gravity, GravityOffsets, GravityType};
pub use processing::{
    Argument, Background, Padding, ProcessingOption, RawOption, ResizingAlgorithm, ResizingType,
};
pub use trim::Trim;

/// Anything that can be applied to an [`ImageUrl`](crate::ImageUrl)
#[derive(Debug, Clone, PartialEq)]
pub enum UrlOption {
    /// Path segment option, last value per key wins
    Processing(ProcessingOption),
    /// Output format extension (`png`, `webp`, ...)
    Format(String),
    /// Source image locator
    Source(String),
    /// Emit the source as `plain/<escaped>` instead of base64
    PlainSource(bool),
    /// Hex-encoded signing key
    Key(String),
    /// Hex-encoded signing salt
    Salt(String),
    KeyRaw(Vec<u8>),
    SaltRaw(Vec<u8>),
    /// Prefix prepended to the signed path
    Endpoint(String),
    /// Signature truncation in bytes, 0 keeps the full 32 bytes
    SignatureSize(usize),
    /// Load hex key and salt from `IMGPROXY_KEY` / `IMGPROXY_SALT`
    FromEnv,
}

impl From<ProcessingOption> for UrlOption {
    fn from(option: ProcessingOption) -> Self {
        UrlOption::Processing(option)
    }
}

impl From<Gravity> for UrlOption {
    fn from(gravity: Gravity) -> Self {
        UrlOption::Processing(ProcessingOption::Gravity(gravity))
    }
}

impl From<Trim> for UrlOption {
    fn from(trim: Trim) -> Self {
        UrlOption::Processing(ProcessingOption::Trim(trim))
    }
}

impl From<Padding> for UrlOption {
    fn from(padding: Padding) -> Self {
        UrlOption::Processing(ProcessingOption::Padding(padding))
    }
}

impl From<RawOption> for UrlOption {
    fn from(raw: RawOption) -> Self {
        UrlOption::Processing(ProcessingOption::Raw(raw))
    }
}
