use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub jwt_secret: String,
    /// Token validity in seconds
    pub token_expiry: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding `users.json` and `tasks.json`
    pub data_dir: PathBuf,
}

impl Config {
    /// Loads configuration from the environment (and `.env` if present).
    ///
    /// `JWT_SECRET` is required: its absence makes startup fail rather than
    /// ever running with unsigned tokens.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()?,
            },
            auth: AuthConfig {
                jwt_secret: env::var("JWT_SECRET")?,
                token_expiry: env::var("TOKEN_EXPIRY")
                    .unwrap_or_else(|_| "3600".to_string())
                    .parse()?,
            },
            storage: StorageConfig {
                data_dir: env::var("DATA_DIR")
                    .unwrap_or_else(|_| "data".to_string())
                    .into(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations cannot race a parallel test.
    #[test]
    fn test_jwt_secret_is_required() {
        env::remove_var("JWT_SECRET");
        assert!(
            Config::from_env().is_err(),
            "startup must fail without a signing secret"
        );

        env::set_var("JWT_SECRET", "a-secret-of-sufficient-length-32ch");
        let config = Config::from_env().expect("should load with secret set");
        assert_eq!(config.auth.token_expiry, 3600, "default expiry is one hour");
        assert_eq!(config.storage.data_dir, PathBuf::from("data"));
        env::remove_var("JWT_SECRET");
    }
}
