use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Dashboard bundle built by trunk (index.html, wasm, `views/*.html`)
#[derive(Debug, Deserialize, Clone)]
pub struct StaticFilesConfig {
    pub dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[static_files]
dir = "dist"
"#;

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid server address {}:{}: {}", self.host, self.port, e))?;
        Ok(addr)
    }
}

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Embedded default
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Directory served as the dashboard root
///
/// Relative paths are tried next to the executable first, then against
/// the working directory.
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.static_files.dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dir);
            if resolved.is_dir() {
                return resolved;
            }
        }
    }

    dir.to_path_buf()
}
