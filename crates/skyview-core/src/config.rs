/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize`; field names map to upper-case env vars
/// (`access_token_secret` reads `ACCESS_TOKEN_SECRET`). A `.env` file in the working
/// directory is loaded first when present; variables already set in the process win.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn from_env() -> Result<Self, envy::Error> {
        // Missing .env is the normal case in containers.
        let _ = dotenvy::dotenv();
        envy::from_env()
    }

    /// Load from an explicit iterator of `(KEY, value)` pairs instead of the process env.
    fn from_iter<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }
}
