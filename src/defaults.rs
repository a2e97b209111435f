//! Default values shared across the crate.

/// HTTP defaults.
pub mod http {
    use std::time::Duration;

    /// Default request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Default connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default user agent.
    pub const USER_AGENT: &str = concat!("fineract-client/", env!("CARGO_PKG_VERSION"));
}

/// Fineract platform defaults.
pub mod platform {
    /// Tenant used when the caller does not specify one. Matches the
    /// out-of-the-box Fineract deployment.
    pub const DEFAULT_TENANT: &str = "default";

    /// Header carrying the tenant identifier.
    pub const TENANT_HEADER: &str = "Fineract-Platform-TenantId";

    /// Locale sent with date-carrying command bodies.
    pub const LOCALE: &str = "en";

    /// Date format sent with date-carrying command bodies.
    pub const DATE_FORMAT: &str = "dd MMMM yyyy";
}
