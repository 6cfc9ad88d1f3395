use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub enforce_capacity: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: try_load(&lookup, "PORT", 8000),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
            enforce_capacity: try_load(&lookup, "ENFORCE_CAPACITY", false),
        }
    }

    pub fn address(&self, port: u16) -> String {
        format!("{}:{}", self.host, port)
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };

    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]);
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 8000);
        assert_eq!(cfg.static_dir, PathBuf::from("static"));
        assert!(!cfg.enforce_capacity);
    }

    #[test]
    fn reads_values() {
        let cfg = config(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("STATIC_DIR", "/srv/www"),
            ("ENFORCE_CAPACITY", "true"),
        ]);
        assert_eq!(cfg.address(cfg.port), "0.0.0.0:9000");
        assert_eq!(cfg.static_dir, PathBuf::from("/srv/www"));
        assert!(cfg.enforce_capacity);
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = config(&[("PORT", "eighty"), ("ENFORCE_CAPACITY", "yes please")]);
        assert_eq!(cfg.port, 8000);
        assert!(!cfg.enforce_capacity);
    }
}
