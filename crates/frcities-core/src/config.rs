use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Base endpoint for data.gouv.fr resource files; the resource id is appended.
pub const DEFAULT_BASE_URL: &str = "https://www.data.gouv.fr/fr/datasets/r/";

/// Where the generated dictionary lands, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "src/main/resources/fr_cities.txt";

/// Columns tried in order for the city name.
pub const DEFAULT_NAME_COLUMNS: [&str; 2] = ["Nom_commune", "Nom_de_la_commune"];

/// HTTP settings (optional `[http]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connect timeout in seconds (None = libcurl default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Whole-transfer timeout in seconds (None = wait indefinitely).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Follow 3xx redirects. data.gouv.fr `/datasets/r/` links redirect to the stored file.
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
}

fn default_follow_redirects() -> bool {
    true
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: None,
            timeout_secs: None,
            follow_redirects: true,
        }
    }
}

impl HttpConfig {
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Generator configuration loaded from `~/.config/frcities/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Endpoint the resource id is appended to.
    pub base_url: String,
    /// Output dictionary path (overwritten on every run).
    pub output_path: PathBuf,
    /// Field separator of the remote dataset.
    pub delimiter: char,
    /// Candidate name columns, first non-empty wins.
    pub name_columns: Vec<String>,
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            delimiter: ';',
            name_columns: DEFAULT_NAME_COLUMNS.iter().map(|c| c.to_string()).collect(),
            http: HttpConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// `base_url + resource_id`, no further normalization.
    pub fn source_url(&self, resource_id: &str) -> String {
        format!("{}{}", self.base_url, resource_id)
    }

    /// Delimiter as the byte the CSV reader expects. Only ASCII maps to a byte.
    pub fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "delimiter must be a single ASCII character, got {:?}",
                    self.delimiter
                )
            })
    }

    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.base_url)
            .with_context(|| format!("base_url is not an absolute URL: {}", self.base_url))?;
        if parsed.cannot_be_a_base() {
            anyhow::bail!("base_url cannot be used as a base: {}", self.base_url);
        }
        self.delimiter_byte()?;
        if self.name_columns.is_empty() {
            anyhow::bail!("name_columns must list at least one column");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("frcities")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GeneratorConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GeneratorConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: GeneratorConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
