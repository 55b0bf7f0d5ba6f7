//! Application-wide constants.

/// The display name of the application (human-readable).
pub const APP_NAME: &str = "tokenlens";

/// The binary name of the application (used in command examples and
/// config paths).
pub const APP_BINARY_NAME: &str = "tokenlens";
