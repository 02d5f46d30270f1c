//! API constants

/// Root of the admin API. Every event route and the login gate live under it.
pub const API_PREFIX: &str = "/api/admin";

/// Header checked by the admin gate on mutating routes.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Path the local storage backend is served under.
pub const MEDIA_PATH: &str = "/media";
