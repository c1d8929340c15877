//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;
use tracing::debug;

const APP_DIR: &str = "hwhelper";
const PROJECT_FILES: [&str; 2] = ["hwhelper.toml", ".hwhelper.toml"];
const ENV_PREFIX: &str = "HWHELPER_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. The variable named by `upstream.credential_env` (credential only)
    /// 2. `PORT` (server port only)
    /// 3. `HWHELPER_*` environment variables, `__` separating sections
    /// 4. Explicit config path (if provided)
    /// 5. Project root: `./hwhelper.toml` or `./.hwhelper.toml`
    /// 6. XDG config: `$XDG_CONFIG_HOME/hwhelper/config.toml`
    /// 7. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::extract(Self::figment(config_path))
    }

    /// Load only default configuration (for --no-config)
    ///
    /// Environment overrides still apply; a deployment without files must
    /// be able to set its port and credential.
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        Self::extract(Self::with_env(Self::defaults()))
    }

    fn defaults() -> Figment {
        Figment::new().merge(Serialized::defaults(FileConfig::default()))
    }

    fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Self::defaults();

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            debug!("Loading project config {}", path.display());
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            debug!("Loading config {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        Self::with_env(figment)
    }

    fn with_env(figment: Figment) -> Figment {
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(Env::raw().only(&["PORT"]).map(|_| "server.port".into()))
    }

    fn extract(figment: Figment) -> Result<FileConfig, Box<figment::Error>> {
        let mut config: FileConfig = figment.extract().map_err(Box::new)?;
        if config
            .upstream
            .apply_credential_env(|name| std::env::var(name).ok())
        {
            debug!(
                "Default credential taken from ${}",
                config.upstream.credential_env
            );
        }
        Ok(config)
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/hwhelper/config.toml if set,
    /// otherwise falls back to ~/.config/hwhelper/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project:  {}", path.display());
        } else {
            println!("  [     ] Project:  ./hwhelper.toml or ./.hwhelper.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:   {}", path.display());
            } else {
                println!("  [     ] Global:   {}", path.display());
            }
        }

        println!("  [     ] Env:      {}*, PORT", ENV_PREFIX);
        println!("  [     ] Default:  built-in defaults");
    }
}
