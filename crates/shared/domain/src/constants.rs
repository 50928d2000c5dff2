//! Domain-level constants.
//!
//! These constants describe how the `User` record is laid out in the
//! relational store.

// =============================================================================
// Table Mapping
// =============================================================================

/// Table holding one row per user (upper case to match the existing schema)
pub const USER_TABLE: &str = "APP_USER";

pub const COLUMN_ID: &str = "id";
pub const COLUMN_USERNAME: &str = "username";
pub const COLUMN_BIRTH_DATE: &str = "birth_date";

/// The password hash lives in a column literally named `PASSWORD`
pub const COLUMN_PASSWORD_HASH: &str = "PASSWORD";

pub const COLUMN_CREATED_AT: &str = "created_at";

/// All mapped columns, in declaration order
pub const USER_COLUMNS: &[&str] = &[
    COLUMN_ID,
    COLUMN_USERNAME,
    COLUMN_BIRTH_DATE,
    COLUMN_PASSWORD_HASH,
    COLUMN_CREATED_AT,
];

// =============================================================================
// Column Limits
// =============================================================================

/// Maximum username length (VARCHAR(100))
pub const USERNAME_MAX_LENGTH: u32 = 100;

/// Maximum stored password hash length (VARCHAR(255))
pub const PASSWORD_HASH_MAX_LENGTH: u32 = 255;
