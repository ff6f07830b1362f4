pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const ORIGIN: &str = "Origin";
    pub const VARY: &str = "Vary";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";

    /// Methods advertised when no `allow_methods` is configured, in emission order.
    pub const DEFAULTS: [&str; 6] = [GET, POST, PUT, DELETE, PATCH, OPTIONS];
}

pub mod env {
    pub const ALLOW_ORIGINS: &str = "CORS_ALLOW_ORIGINS";
    pub const ALLOW_METHODS: &str = "CORS_ALLOW_METHODS";
    pub const ALLOW_HEADERS: &str = "CORS_ALLOW_HEADERS";
    pub const EXPOSE_HEADERS: &str = "CORS_EXPOSE_HEADERS";
    pub const MAX_AGE: &str = "CORS_MAX_AGE";
    pub const ALLOW_CREDENTIALS: &str = "CORS_ALLOW_CREDENTIALS";
}

pub const WILDCARD: &str = "*";

/// Separator placed between entries of a multi-valued header.
pub const LIST_SEPARATOR: &str = ", ";
