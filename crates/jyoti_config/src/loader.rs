//! Layered loading: built-in defaults, then one TOML file, then environment
//! overrides.
//!
//! File lookup order:
//! 1. the explicit path passed by the caller
//! 2. `$JYOTI_CONFIG`
//! 3. `./jyoti.toml`, if it exists
//!
//! A file named by 1 or 2 must exist. Without any file the defaults stand.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, info};

use crate::error::ConfigError;
use crate::schema::JyotiConfig;

pub const ENV_CONFIG_PATH: &str = "JYOTI_CONFIG";
pub const ENV_AYANAMSHA: &str = "JYOTI_AYANAMSHA";
pub const ENV_NODE_MODE: &str = "JYOTI_NODE_MODE";
pub const ENV_HOUSE_SYSTEM: &str = "JYOTI_HOUSE_SYSTEM";
pub const ENV_DASHA_DEPTH: &str = "JYOTI_DASHA_DEPTH";
pub const DEFAULT_FILE_NAME: &str = "jyoti.toml";

impl JyotiConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text, Path::new("<inline>"))
    }

    /// Read and parse one file, without env overrides or validation.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::parse(&text, path)
    }

    /// Load from the process environment and filesystem.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(explicit, |key| std::env::var(key).ok())
    }

    /// [`load`](Self::load) with an injectable environment lookup.
    pub fn load_with_env<F>(explicit: Option<&Path>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match resolve_path(explicit, &env) {
            Some(path) => {
                info!(path = %path.display(), "loading config");
                Self::from_file(&path)?
            }
            None => {
                debug!("no config file, using defaults");
                Self::default()
            }
        };
        config.apply_env(&env)?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay `JYOTI_*` variables onto this config.
    pub fn apply_env<F>(&mut self, env: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = env_value(&env, ENV_AYANAMSHA)? {
            self.chart.ayanamsha = v;
        }
        if let Some(v) = env_value(&env, ENV_NODE_MODE)? {
            self.chart.node_mode = v;
        }
        if let Some(v) = env_value(&env, ENV_HOUSE_SYSTEM)? {
            self.chart.house_system = v;
        }
        if let Some(v) = env_value(&env, ENV_DASHA_DEPTH)? {
            self.dasha.depth = v;
        }
        Ok(())
    }

    fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }
}

fn resolve_path<F>(explicit: Option<&Path>, env: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    if let Some(p) = env(ENV_CONFIG_PATH).filter(|s| !s.trim().is_empty()) {
        return Some(PathBuf::from(p));
    }
    let local = PathBuf::from(DEFAULT_FILE_NAME);
    local.is_file().then_some(local)
}

fn env_value<T, F>(env: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match env(var) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Env { var, message: e.to_string() }),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use jyoti_vedic_base::{AyanamshaSystem, HouseSystem, MangalReference, NodeMode};

    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    fn temp_file(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("jyoti_config_{}_{name}", std::process::id()));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(JyotiConfig::from_toml_str("").unwrap(), JyotiConfig::default());
    }

    #[test]
    fn partial_sections_merge_with_defaults() {
        let cfg = JyotiConfig::from_toml_str(
            r#"
            [chart]
            ayanamsha = "raman"
            house_system = "equal"

            [dosha]
            mangal_reference = "lagna_or_moon"

            [riseset]
            refraction_arcmin = 0.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.chart.ayanamsha, AyanamshaSystem::Raman);
        assert_eq!(cfg.chart.house_system, HouseSystem::Equal);
        assert_eq!(cfg.chart.node_mode, NodeMode::default());
        assert_eq!(cfg.dosha.mangal_reference, MangalReference::LagnaOrMoon);
        assert_eq!(cfg.riseset.refraction_arcmin, 0.0);
        assert_eq!(cfg.riseset.semidiameter_arcmin, 16.0);
        assert_eq!(cfg.location, Default::default());
    }

    #[test]
    fn unknown_key_rejected() {
        let err = JyotiConfig::from_toml_str("[chart]\nayanamsa = \"lahiri\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn env_overrides_file() {
        let path = temp_file("env_overrides.toml", "[chart]\nayanamsha = \"raman\"\n[dasha]\ndepth = 1\n");
        let env = env_of(&[(ENV_AYANAMSHA, "kp"), (ENV_NODE_MODE, "true")]);
        let cfg = JyotiConfig::load_with_env(Some(path.as_path()), env).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(cfg.chart.ayanamsha, AyanamshaSystem::KP);
        assert_eq!(cfg.chart.node_mode, NodeMode::True);
        assert_eq!(cfg.dasha.depth, 1);
    }

    #[test]
    fn config_path_from_env() {
        let path = temp_file("from_env.toml", "[location]\nlatitude_deg = 19.076\nlongitude_deg = 72.8777\n");
        let p = path.to_string_lossy().into_owned();
        let cfg = JyotiConfig::load_with_env(None, env_of(&[(ENV_CONFIG_PATH, p.as_str())])).unwrap();
        std::fs::remove_file(&path).ok();
        assert!((cfg.location.latitude_deg - 19.076).abs() < 1e-12);
    }

    #[test]
    fn missing_explicit_file_is_io_error() {
        let path = std::env::temp_dir().join("jyoti_config_definitely_missing.toml");
        let err = JyotiConfig::load_with_env(Some(path.as_path()), env_of(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn bad_env_value_names_variable() {
        let err = JyotiConfig::load_with_env(None, env_of(&[(ENV_DASHA_DEPTH, "two")])).unwrap_err();
        assert!(matches!(err, ConfigError::Env { var: ENV_DASHA_DEPTH, .. }));
        let err = JyotiConfig::load_with_env(None, env_of(&[(ENV_AYANAMSHA, "tropical")])).unwrap_err();
        assert!(err.to_string().contains(ENV_AYANAMSHA));
    }

    #[test]
    fn env_depth_is_validated() {
        let err = JyotiConfig::load_with_env(None, env_of(&[(ENV_DASHA_DEPTH, "5")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn blank_env_ignored() {
        let cfg = JyotiConfig::load_with_env(None, env_of(&[(ENV_AYANAMSHA, "  ")])).unwrap();
        assert_eq!(cfg.chart.ayanamsha, AyanamshaSystem::Lahiri);
    }
}
