use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;

/// Server settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub assets_dir: PathBuf,
    pub dist_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: DEFAULT_PORT,
            assets_dir: PathBuf::from("assets"),
            dist_dir: PathBuf::from("dist"),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset or unparsable values fall back to the defaults.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ServerConfig::default();
        ServerConfig {
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            assets_dir: lookup("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
            dist_dir: lookup("DIST_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.dist_dir),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    /// Hashed bundles emitted by the frontend build.
    pub fn dist_assets_dir(&self) -> PathBuf {
        self.dist_dir.join("assets")
    }
}
