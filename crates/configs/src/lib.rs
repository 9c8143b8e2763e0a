use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub paging: PagingConfig,
}

/// Pagination engine configuration.
///
/// Read-only after startup; the engine takes it by value so tests can use
/// ad-hoc instances without any global reset.
#[derive(Debug, Clone, Deserialize)]
pub struct PagingConfig {
    /// Upper bound on page size; zero or oversized requests fall back here.
    #[serde(default = "default_max_limit")]
    pub max_limit: i64,
    /// Sort field applied when the caller supplies none.
    #[serde(default = "default_sort_field")]
    pub default_sort: String,
}

fn default_max_limit() -> i64 {
    10
}

fn default_sort_field() -> String {
    "created_at".to_string()
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            max_limit: default_max_limit(),
            default_sort: default_sort_field(),
        }
    }
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.paging.normalize_from_env();
        self.paging.validate()?;
        Ok(())
    }
}

impl PagingConfig {
    /// Fill from environment when set; `PAGE_MAX_LIMIT` overrides the file.
    pub fn normalize_from_env(&mut self) {
        if let Ok(raw) = std::env::var("PAGE_MAX_LIMIT") {
            if let Ok(v) = raw.trim().parse::<i64>() {
                self.max_limit = v;
            }
        }
        if self.default_sort.trim().is_empty() {
            self.default_sort = default_sort_field();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_limit <= 0 {
            return Err(anyhow!("paging.max_limit must be >= 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = PagingConfig::default();
        assert_eq!(cfg.max_limit, 10);
        assert_eq!(cfg.default_sort, "created_at");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn toml_overrides_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [paging]
            max_limit = 25
            default_sort = "updated_at"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.paging.max_limit, 25);
        assert_eq!(cfg.paging.default_sort, "updated_at");
    }

    #[test]
    fn missing_section_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.paging.max_limit, 10);
    }

    #[test]
    fn non_positive_max_limit_is_rejected() {
        let cfg = PagingConfig {
            max_limit: 0,
            default_sort: "created_at".into(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn blank_sort_field_normalizes() {
        let mut cfg = PagingConfig {
            max_limit: 10,
            default_sort: "  ".into(),
        };
        cfg.normalize_from_env();
        assert_eq!(cfg.default_sort, "created_at");
    }
}
