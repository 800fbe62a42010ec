use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// The analytics API deployment the dashboard talks to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local development backend.
    Local,
    /// Hosted production backend.
    #[default]
    Production,
    /// Explicit base URL, set via `GRAMDASH_API_URL`.
    Custom { api_base_url: String },
}

impl Environment {
    /// Resolve the environment from process environment variables.
    /// `GRAMDASH_API_URL` wins over `GRAMDASH_ENVIRONMENT`.
    pub fn from_env() -> Self {
        if let Ok(url) = std::env::var("GRAMDASH_API_URL") {
            if !url.trim().is_empty() {
                return Environment::Custom {
                    api_base_url: url.trim().to_string(),
                };
            }
        }
        std::env::var("GRAMDASH_ENVIRONMENT")
            .unwrap_or_default()
            .parse()
            .unwrap_or_default()
    }

    /// Returns the API base URL associated with the environment.
    pub fn api_base_url(&self) -> String {
        match self {
            Environment::Local => "http://127.0.0.1:5001".to_string(),
            Environment::Production => "https://analytics.gramdash.app".to_string(),
            Environment::Custom { api_base_url } => api_base_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Production => write!(f, "Production"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names_case_insensitively() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!(
            "Production".parse::<Environment>(),
            Ok(Environment::Production)
        );
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn custom_environment_uses_given_url() {
        let env = Environment::Custom {
            api_base_url: "http://10.0.0.2:8000".to_string(),
        };
        assert_eq!(env.api_base_url(), "http://10.0.0.2:8000");
    }
}
