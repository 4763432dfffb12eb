use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub documents: DocumentsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub data_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DocumentsConfig {
    pub output_dir: String,
    pub font_regular: Option<String>,
    pub font_bold: Option<String>,
    pub logo: Option<String>,
    #[serde(default = "default_company_mark")]
    pub company_mark: String,
}

fn default_company_mark() -> String {
    "LARDER".to_string()
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Layer the environment-specific file on top; optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Finally environment variables, e.g. LARDER_SERVER__PORT=8080
            .add_source(config::Environment::with_prefix("LARDER").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
