pub(crate) const DEFAULT_USER_AGENT: &str = concat!("volley/", env!("CARGO_PKG_VERSION"));

/// Content type attached to non-GET requests that do not set their own.
pub(crate) const DEFAULT_FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;param=value";
