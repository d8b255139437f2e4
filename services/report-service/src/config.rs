use fontstats_common::{env_nonempty, env_or};
use std::fmt;

use crate::error::ConfigError;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const SERVICE_KEY_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";

#[derive(Clone)]
pub struct ServiceConfig {
    pub port: u16,
    pub supabase_url: String,
    pub service_role_key: String,
}

impl ServiceConfig {
    /// Loaded once at startup; both secrets must be set before any traffic is served.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            env_nonempty(URL_VAR),
            env_nonempty(SERVICE_KEY_VAR),
            env_or("PORT", 8080u16),
        )
    }

    fn from_parts(
        supabase_url: Option<String>,
        service_role_key: Option<String>,
        port: u16,
    ) -> Result<Self, ConfigError> {
        let supabase_url = supabase_url.ok_or(ConfigError::Missing(URL_VAR))?;
        let service_role_key = service_role_key.ok_or(ConfigError::Missing(SERVICE_KEY_VAR))?;
        if !(supabase_url.starts_with("http://") || supabase_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl {
                var: URL_VAR,
                value: supabase_url,
            });
        }

        Ok(Self {
            port,
            supabase_url: supabase_url.trim_end_matches('/').to_string(),
            service_role_key,
        })
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("port", &self.port)
            .field("supabase_url", &self.supabase_url)
            .field("service_role_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_url_then_key() {
        let err = ServiceConfig::from_parts(None, None, 8080).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(URL_VAR)));
        let err = ServiceConfig::from_parts(Some("https://x.supabase.co".into()), None, 8080)
            .unwrap_err();
        assert_eq!(err.to_string(), "SUPABASE_SERVICE_ROLE_KEY is required");
    }

    #[test]
    fn rejects_non_http_url() {
        let err = ServiceConfig::from_parts(Some("x.supabase.co".into()), Some("k".into()), 8080)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn trims_trailing_slash_and_hides_key() {
        let config = ServiceConfig::from_parts(
            Some("https://x.supabase.co/".into()),
            Some("secret".into()),
            9000,
        )
        .unwrap();
        assert_eq!(config.supabase_url, "https://x.supabase.co");
        assert!(!format!("{config:?}").contains("secret"));
    }
}
