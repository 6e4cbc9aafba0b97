use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub cors_extra_origins: Vec<String>,

    pub jwt_secret: String,
    pub jwt_access_ttl_secs: i64,
    pub jwt_refresh_ttl_secs: i64,

    pub chat_api_key: String,
    pub chat_api_url: String,
    pub chat_model: String,
    pub chat_temperature: f64,
    pub chat_max_tokens: u32,
    pub chat_timeout_secs: u64,
    pub chat_rate_limit_per_min: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .expect("PORT must be a number"),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            // e.g. LAN addresses when testing from another device
            cors_extra_origins: env::var("CORS_EXTRA_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_default(),

            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_access_ttl_secs: env::var("JWT_ACCESS_TTL_SECS")
                .unwrap_or_else(|_| "900".into())
                .parse()
                .expect("JWT_ACCESS_TTL_SECS must be a number"),
            jwt_refresh_ttl_secs: env::var("JWT_REFRESH_TTL_SECS")
                .unwrap_or_else(|_| "604800".into())
                .parse()
                .expect("JWT_REFRESH_TTL_SECS must be a number"),

            chat_api_key: env::var("CHAT_API_KEY").unwrap_or_default(),
            chat_api_url: env::var("CHAT_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".into()),
            chat_model: env::var("CHAT_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into()),
            chat_temperature: env::var("CHAT_TEMPERATURE")
                .unwrap_or_else(|_| "0.7".into())
                .parse()
                .expect("CHAT_TEMPERATURE must be a number"),
            chat_max_tokens: env::var("CHAT_MAX_TOKENS")
                .unwrap_or_else(|_| "500".into())
                .parse()
                .expect("CHAT_MAX_TOKENS must be a number"),
            chat_timeout_secs: env::var("CHAT_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".into())
                .parse()
                .expect("CHAT_TIMEOUT_SECS must be a number"),
            chat_rate_limit_per_min: env::var("CHAT_RATE_LIMIT_PER_MIN")
                .unwrap_or_else(|_| "20".into())
                .parse()
                .expect("CHAT_RATE_LIMIT_PER_MIN must be a number"),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Fixed values for tests; never touches the environment.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            database_url: "postgres://localhost/moodtrail_test".into(),
            host: "127.0.0.1".into(),
            port: 0,
            frontend_url: "http://localhost:3000".into(),
            cors_extra_origins: Vec::new(),
            jwt_secret: "test-secret".into(),
            jwt_access_ttl_secs: 900,
            jwt_refresh_ttl_secs: 604800,
            chat_api_key: String::new(),
            chat_api_url: "http://127.0.0.1:9/v1/chat/completions".into(),
            chat_model: "gpt-4o-mini".into(),
            chat_temperature: 0.7,
            chat_max_tokens: 500,
            chat_timeout_secs: 1,
            chat_rate_limit_per_min: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only test that touches the process environment.
    #[test]
    #[should_panic(expected = "CHAT_MAX_TOKENS must be a number")]
    fn test_malformed_number_aborts_startup() {
        for (key, value) in [
            ("DATABASE_URL", "postgres://localhost/moodtrail_test"),
            ("JWT_SECRET", "test-secret"),
        ] {
            if env::var(key).is_err() {
                env::set_var(key, value);
            }
        }
        env::set_var("CHAT_MAX_TOKENS", "lots");
        Config::from_env();
    }
}
