//! Application-wide constants

pub const DEFAULT_PORT: u16 = 5002;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECONDS: u64 = 3;
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 3600;
pub const TOKEN_TYPE_ACCESS: &str = "access";
pub const MAX_PRODUCT_NUMBER_LENGTH: u64 = 50;
pub const MAX_DESIGNATION_LENGTH: u64 = 255;
pub const MAX_EMAIL_LENGTH: u64 = 254;
pub const MAX_PASSWORD_LENGTH: u64 = 128;
