mod schema;
pub mod sheet;

pub use schema::{Config, ScoreSheet};
pub use sheet::{blank_sheet, load_sheet, write_template};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/athletics-points/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("athletics-points"))
}

/// Get the default config file path (~/.config/athletics-points/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path and
///   falls back to defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p
        }
        None => match get_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use std::env;

    #[test]
    fn test_explicit_missing_config_fails() {
        let temp_path = env::temp_dir().join("athletics_points_test_missing_config.yaml");
        let _ = fs::remove_file(&temp_path);
        let err = load_config(Some(temp_path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_explicit_config() {
        let temp_path = env::temp_dir().join("athletics_points_test_config.yaml");
        fs::write(&temp_path, "default_category: men-competition\n").unwrap();

        let config = load_config(Some(temp_path.clone())).unwrap();
        assert_eq!(config.default_category, Some(Category::MenCompetition));

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_invalid_yaml_reports_path() {
        let temp_path = env::temp_dir().join("athletics_points_test_bad_config.yaml");
        fs::write(&temp_path, "colors: [not, a, bool]\n").unwrap();

        let err = load_config(Some(temp_path.clone())).unwrap_err();
        assert!(format!("{:#}", err).contains("athletics_points_test_bad_config.yaml"));

        let _ = fs::remove_file(&temp_path);
    }
}
