// imgproxy URL builder library
//
// Composes processing options into a canonical imgproxy path, encodes the
// source locator and signs the result with HMAC-SHA256.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod options;
pub mod url;

pub use config::UrlConfig;
pub use error::{Result, UrlError};
pub use options::{
    Argument, Background, Gravity, GravityOffsets, GravityType, Padding, ProcessingOption,
    RawOption, ResizingAlgorithm, ResizingType, Trim, UrlOption,
};
pub use url::defaults::{
    reset_defaults, set_default_endpoint, set_default_key_salt, set_default_key_salt_raw,
};
pub use url::ImageUrl;
