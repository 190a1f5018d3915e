use serde::Deserialize;

/// Server configuration loaded from environment variables
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the Steam Web API; override with `STEAM_API_BASE`.
    #[serde(default = "default_steam_api_base")]
    pub steam_api_base: String,
}

fn default_steam_api_base() -> String {
    "https://api.steampowered.com".to_string()
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_public_steam_api() {
        let config = ServerConfig::load().unwrap();

        assert_eq!(config.steam_api_base, "https://api.steampowered.com");
    }
}
