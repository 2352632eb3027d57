//! Error types for helper registration.

use thiserror::Error;

/// Errors that can occur while exposing helpers to Lua.
#[derive(Debug, Error)]
pub enum HelperError {
    /// Lua execution error.
    #[error("lua error: {0}")]
    Lua(#[from] mlua::Error),

    /// The helpers global already holds something that is not a table.
    #[error("global '{0}' is already defined and is not a table")]
    GlobalConflict(String),

    /// The configured table name cannot be used as a Lua global.
    #[error("invalid helpers table name: {0:?}")]
    InvalidTableName(String),
}

/// Result type for helper operations.
pub type Result<T> = std::result::Result<T, HelperError>;
