use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::Url;

/// Calculation method identifier sent to the timings endpoints (ISNA)
pub const DEFAULT_CALCULATION_METHOD: u8 = 2;

/// Translation edition paired with the Arabic text of a surah
pub const DEFAULT_TRANSLATION_EDITION: &str = "en.asad";

/// Hadith collection the random hadith is drawn from
pub const DEFAULT_HADITH_COLLECTION: &str = "bukhari";

/// Application configuration structure
///
/// Every field carries a default, so an empty `{}` file (or no file at all)
/// yields a working dashboard pointed at the public services.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Name of the site displayed in the page title
    pub site_name: String,
    /// Method identifier passed as `method=` to both timings endpoints
    pub calculation_method: u8,
    /// Edition fetched alongside the Arabic text when a surah is selected
    pub translation_edition: String,
    /// Collection path segment of the random hadith endpoint
    pub hadith_collection: String,
    /// Base URLs of the remote services
    pub endpoints: Endpoints,
    /// Which page regions exist
    pub sections: Sections,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_name: "Deen Dashboard".to_string(),
            calculation_method: DEFAULT_CALCULATION_METHOD,
            translation_edition: DEFAULT_TRANSLATION_EDITION.to_string(),
            hadith_collection: DEFAULT_HADITH_COLLECTION.to_string(),
            endpoints: Endpoints::default(),
            sections: Sections::default(),
        }
    }
}

/// Base URLs of the third-party JSON services
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Endpoints {
    /// Prayer timings and Hijri conversion
    pub aladhan: String,
    /// Surah list, Arabic text and translations
    pub alquran: String,
    /// Random hadith generator
    pub hadith: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            aladhan: "https://api.aladhan.com/v1/".to_string(),
            alquran: "https://api.alquran.cloud/v1/".to_string(),
            hadith: "https://random-hadith-generator.vercel.app/".to_string(),
        }
    }
}

/// Optional page regions. The date/prayer region is always present.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Sections {
    pub quran: bool,
    pub hadith: bool,
    pub dua: bool,
}

impl Default for Sections {
    fn default() -> Self {
        Self {
            quran: true,
            hadith: true,
            dua: true,
        }
    }
}

impl Config {
    /// Load the application configuration from a JSON5 file.
    ///
    /// # Returns
    ///
    /// Returns the loaded and validated Config if successful, or a `DeenError` if an error occurs
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed, or if
    /// the parsed configuration fails validation
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        tracing::debug!("Loading application configuration from {}", path.display());
        let config_str = fs::read_to_string(path)?;

        let value: serde_json::Value = json5::from_str(&config_str)?;
        if !value.is_object() {
            return Err(crate::error::DeenError::Generic(
                "Config is not an object".to_string(),
            ));
        }

        let config: Config = serde_json::from_value(value).map_err(|e| {
            crate::error::DeenError::Generic(format!("Config has an invalid field: {e}"))
        })?;
        config.validate()?;

        tracing::info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load from `path` when one is given, otherwise fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Config::load`]
    pub fn load_or_default(path: Option<&Path>) -> crate::error::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::info!("No configuration file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validates the configuration
    ///
    /// # Returns
    ///
    /// `Ok(())` if the configuration is valid, or an error if validation fails
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid field
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.site_name.trim().is_empty() {
            return Err(crate::error::DeenError::from("Site name cannot be empty"));
        }
        if self.translation_edition.trim().is_empty() {
            return Err(crate::error::DeenError::from(
                "Translation edition cannot be empty",
            ));
        }
        if self.hadith_collection.trim().is_empty() {
            return Err(crate::error::DeenError::from(
                "Hadith collection cannot be empty",
            ));
        }

        for endpoint in [
            &self.endpoints.aladhan,
            &self.endpoints.alquran,
            &self.endpoints.hadith,
        ] {
            if Url::parse(endpoint).is_err() {
                return Err(crate::error::DeenError::from(format!(
                    "Invalid URL format: {endpoint}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.calculation_method, 2);
        assert_eq!(config.translation_edition, "en.asad");
        assert_eq!(config.hadith_collection, "bukhari");
    }

    #[test]
    fn test_partial_json5_fills_defaults() {
        let config: Config =
            json5::from_str("{ site_name: 'Masjid Board', sections: { dua: false } }").unwrap();
        assert_eq!(config.site_name, "Masjid Board");
        assert!(config.sections.quran);
        assert!(config.sections.hadith);
        assert!(!config.sections.dua);
        assert_eq!(config.endpoints, Endpoints::default());
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let mut config = Config::default();
        config.endpoints.hadith = "not a url".to_string();
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "Error: Invalid URL format: not a url");
    }

    #[test]
    fn test_validate_rejects_blank_edition() {
        let config = Config {
            translation_edition: "  ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = Config::load_or_default(None).unwrap();
        assert_eq!(config, Config::default());
    }
}
