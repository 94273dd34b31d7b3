// Constants module - centralized default values for URL construction
//
// This module defines the literal tokens and defaults used throughout the
// codebase. Keeping them here makes the output grammar easy to audit.

// =============================================================================
// Signing defaults
// =============================================================================

/// Full HMAC-SHA256 output length in bytes, used when no truncation is set
pub const DEFAULT_SIGNATURE_SIZE: usize = 32;

/// Signature placeholder for URLs built without signing material
pub const INSECURE_SIGNATURE: &str = "insecure";

// =============================================================================
// Source encoding
// =============================================================================

/// Prefix marking a query-escaped (non-base64) source locator
pub const PLAIN_SOURCE_PREFIX: &str = "plain/";

/// Separator between a plain source locator and the output format
pub const PLAIN_FORMAT_SEPARATOR: char = '@';

/// Separator between a base64 source locator and the output format
pub const ENCODED_FORMAT_SEPARATOR: char = '.';

// =============================================================================
// Option rendering
// =============================================================================

/// Separator between an option key and its arguments, and between arguments
pub const ARGUMENT_SEPARATOR: &str = ":";

/// Decimal places for focus-point offsets and background alpha
pub const FIXED_FLOAT_PRECISION: usize = 3;

// =============================================================================
// Environment
// =============================================================================

/// Hex-encoded signing key
pub const ENV_KEY: &str = "IMGPROXY_KEY";

/// Hex-encoded signing salt
pub const ENV_SALT: &str = "IMGPROXY_SALT";
