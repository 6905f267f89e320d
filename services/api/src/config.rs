use serde::Deserialize;

use skyview_core::config::Config;

/// API service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    /// TCP port for the HTTP server (default 5000). Env var: `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
    /// HMAC secret for signing and verifying bearer tokens. Env var: `ACCESS_TOKEN_SECRET`.
    pub access_token_secret: String,
    /// Full MongoDB connection string. Takes precedence over the `DB_*` parts.
    #[serde(default)]
    pub mongodb_uri: Option<String>,
    /// Atlas user. Env var: `DB_USER`.
    #[serde(default)]
    pub db_user: Option<String>,
    /// Atlas password. Env var: `DB_PASS`.
    #[serde(default)]
    pub db_pass: Option<String>,
    /// Atlas cluster host. Env var: `DB_HOST`.
    #[serde(default = "default_db_host")]
    pub db_host: String,
    /// Database holding the `users`, `apartments` and `reservation` collections.
    #[serde(default = "default_db_name")]
    pub db_name: String,
    /// Comma-separated allowed origins; `*` allows any. Env var: `CORS_ORIGINS`.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

impl Config for ApiConfig {}

fn default_port() -> u16 {
    5000
}

fn default_db_host() -> String {
    "cluster0.zedvr4o.mongodb.net".to_owned()
}

fn default_db_name() -> String {
    "skyviewDb".to_owned()
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_owned()]
}

impl ApiConfig {
    /// Connection string: `MONGODB_URI` verbatim, else an Atlas SRV URI from `DB_USER`/`DB_PASS`.
    pub fn connection_uri(&self) -> anyhow::Result<String> {
        if let Some(uri) = &self.mongodb_uri {
            return Ok(uri.clone());
        }
        let (Some(user), Some(pass)) = (&self.db_user, &self.db_pass) else {
            anyhow::bail!("set MONGODB_URI, or both DB_USER and DB_PASS");
        };
        Ok(format!(
            "mongodb+srv://{user}:{pass}@{host}/?retryWrites=true&w=majority&appName=Cluster0",
            host = self.db_host,
        ))
    }
}
