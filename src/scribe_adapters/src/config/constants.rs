pub mod env {
    /// Selects `config/<name>` on top of `config/base`.
    pub const ENVIRONMENT_ENV_VAR: &str = "SCRIBE_ENVIRONMENT";
    pub const ENV_PREFIX: &str = "SCRIBE";
    pub const ENV_SEPARATOR: &str = "__";
    pub const DEFAULT_ENVIRONMENT: &str = "local";
}

pub const CONFIG_DIRECTORY: &str = "config";

pub mod collections {
    pub const USERS: &str = "users";
    pub const BLOGS: &str = "blogs";
    pub const COMMENTS: &str = "comments";
    pub const RESET_TOKENS: &str = "tokens";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:8080";
    pub const JWT_ISSUER: &str = "scribe";
    pub const ACCESS_TTL_IN_SECONDS: i64 = 10;
    pub const REFRESH_TTL_IN_SECONDS: i64 = 60;
    pub const REDIS_HOST_NAME: &str = "127.0.0.1";

    pub mod email_client {
        pub const BASE_URL: &str = "https://api.postmarkapp.com/";
        pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub mod email_client {
        use std::time::Duration;

        pub const SENDER: &str = "test@email.com";
        pub const TIMEOUT: Duration = std::time::Duration::from_millis(200);
    }
}
