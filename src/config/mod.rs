use crate::error::AppError;
use serde::Deserialize;

/// Runtime settings, read once at startup.
///
/// The environment is the only source; there is no configuration file.
/// `APP_PORT` selects the listening port, defaulting to 8080 when unset.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Settings {
    pub fn load() -> Result<Self, AppError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;

    // Both cases in one test: the environment is process-global and tests
    // within a binary run concurrently.
    #[test]
    fn port_defaults_to_8080_and_env_overrides_it() {
        std::env::remove_var("APP_PORT");
        let settings = Settings::load().expect("Failed to load settings");
        assert_eq!(settings.port, 8080);

        std::env::set_var("APP_PORT", "9095");
        let settings = Settings::load().expect("Failed to load settings");
        assert_eq!(settings.port, 9095);

        std::env::remove_var("APP_PORT");
    }
}
