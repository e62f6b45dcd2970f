//! Startup configuration.
//!
//! Layers, later wins:
//! 1. [`ClientConfig::default`]
//! 2. `opd-nexus.toml` in the working directory, else in the user config dir
//!    (native only)
//! 3. `OPD_API_URL` / `OPD_GOOGLE_CLIENT_ID` from the environment or `.env`
//!    (baked in at compile time on wasm)

use store::ClientConfig;

pub const API_URL_VAR: &str = "OPD_API_URL";
pub const GOOGLE_CLIENT_ID_VAR: &str = "OPD_GOOGLE_CLIENT_ID";

/// Resolve the configuration for this launch. Never fails: unreadable or
/// invalid files are logged and skipped.
pub fn load_config() -> ClientConfig {
    let config = read_config_file().unwrap_or_default();
    apply_env_overrides(config, env_lookup)
}

/// Overlay environment values. Blank values are ignored.
pub fn apply_env_overrides(
    mut config: ClientConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> ClientConfig {
    let value = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
    if let Some(url) = value(API_URL_VAR) {
        config.api.base_url = url.trim().to_string();
    }
    if let Some(client_id) = value(GOOGLE_CLIENT_ID_VAR) {
        config.auth.google_client_id = Some(client_id.trim().to_string());
    }
    config
}

#[cfg(not(target_arch = "wasm32"))]
fn env_lookup(name: &str) -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var(name).ok()
}

#[cfg(target_arch = "wasm32")]
fn env_lookup(name: &str) -> Option<String> {
    match name {
        API_URL_VAR => option_env!("OPD_API_URL").map(str::to_string),
        GOOGLE_CLIENT_ID_VAR => option_env!("OPD_GOOGLE_CLIENT_ID").map(str::to_string),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config_file() -> Option<ClientConfig> {
    let candidates = [
        std::env::current_dir().ok(),
        dirs::config_dir().map(|d| d.join("opd-nexus")),
    ];
    let path = candidates
        .into_iter()
        .flatten()
        .map(|dir| dir.join(ClientConfig::filename()))
        .find(|path| path.is_file())?;

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            return None;
        }
    };
    match ClientConfig::from_toml(&text) {
        Ok(config) => {
            tracing::info!("Loaded configuration from {}", path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_config_file() -> Option<ClientConfig> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides_file_values() {
        let config = ClientConfig::from_toml("[api]\nbase_url = \"http://file.test\"").unwrap();
        let config = apply_env_overrides(config, |name| match name {
            API_URL_VAR => Some("https://env.test".to_string()),
            GOOGLE_CLIENT_ID_VAR => Some(" abc.apps.googleusercontent.com ".to_string()),
            _ => None,
        });
        assert_eq!(config.api.base_url, "https://env.test");
        assert_eq!(
            config.auth.google_client_id.as_deref(),
            Some("abc.apps.googleusercontent.com")
        );
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let config = apply_env_overrides(ClientConfig::default(), |_| Some("  ".to_string()));
        assert_eq!(config, ClientConfig::default());
    }
}
