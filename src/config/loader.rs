//! Metadata Loader
//!
//! Layered loading of [`MetadataSource`] with the `config` crate:
//!
//! 1. built-in defaults ([`MetadataSource::default`])
//! 2. a TOML file, `config/project.toml` unless another path is given
//! 3. `PROJECT_*` environment variables
//!
//! Later layers override earlier ones key by key. The merged source is
//! validated and turned into a [`ProjectMetadata`] record.

use super::error::{ConfigResult, ConfigurationError};
use super::{MetadataSource, ProjectMetadata};
use ::config::{Config, Environment, File, FileFormat};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default location of the metadata file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config/project.toml";

/// Default prefix of overriding environment variables
pub const DEFAULT_ENV_PREFIX: &str = "PROJECT";

const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Keys that accept a comma-separated list from the environment
const LIST_KEYS: &[&str] = &["keywords", "data_files"];

#[derive(Debug, Clone)]
pub struct MetadataLoader {
    config_path: Option<PathBuf>,
    env_prefix: Option<String>,
    env_vars: Option<Vec<(String, String)>>,
}

impl Default for MetadataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataLoader {
    /// Loader reading `config/project.toml` if present and `PROJECT_*` variables
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: Some(DEFAULT_ENV_PREFIX.to_string()),
            env_vars: None,
        }
    }

    /// Read this file instead of the default one. The file must exist.
    pub fn with_config_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Ignore the environment entirely
    pub fn without_environment(mut self) -> Self {
        self.env_prefix = None;
        self
    }

    /// Read overrides from `vars` instead of the process environment
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env_vars = Some(
            vars.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    /// Merge all layers into the literal inputs, without validating them
    pub fn load_source(&self) -> ConfigResult<MetadataSource> {
        let mut builder = Config::builder();

        if let Some(contents) = self.read_config_file()? {
            builder = builder.add_source(File::from_str(&contents, FileFormat::Toml));
        }

        if let Some(prefix) = &self.env_prefix {
            debug!(prefix = %prefix, "Applying environment overrides");
            let vars: Vec<(String, String)> = match &self.env_vars {
                Some(vars) => vars.clone(),
                None => std::env::vars().collect(),
            };

            // Values stay strings so names and ids are never reparsed as numbers
            let environment = Environment::with_prefix(prefix)
                .prefix_separator("_")
                .separator("__")
                .source(Some(vars.iter().cloned().collect()));
            builder = builder.add_source(environment);

            let list_prefix = format!("{prefix}_").to_lowercase();
            for (key, value) in &vars {
                let key = key.to_lowercase();
                let Some(name) = key.strip_prefix(&list_prefix) else {
                    continue;
                };
                if LIST_KEYS.contains(&name) {
                    let items: Vec<String> = value.split(',').map(str::to_string).collect();
                    builder = builder.set_override(name, items)?;
                }
            }
        }

        let source: MetadataSource = builder.build()?.try_deserialize()?;
        Ok(source)
    }

    /// Load, validate and build the record
    pub fn load(&self) -> ConfigResult<ProjectMetadata> {
        let metadata = ProjectMetadata::build(self.load_source()?)?;
        self.log_loaded(&metadata);
        Ok(metadata)
    }

    /// Same as [`load`](Self::load) with an explicit current year
    pub fn load_at(&self, current_year: i32) -> ConfigResult<ProjectMetadata> {
        let metadata = ProjectMetadata::build_at(self.load_source()?, current_year)?;
        self.log_loaded(&metadata);
        Ok(metadata)
    }

    fn log_loaded(&self, metadata: &ProjectMetadata) {
        info!(
            project = %metadata.name(),
            copyright_years = %metadata.copyright_years(),
            config_file = ?self.config_path,
            "Project metadata loaded successfully"
        );
    }

    /// Contents of the config file, `None` when the default file is absent
    fn read_config_file(&self) -> ConfigResult<Option<String>> {
        match &self.config_path {
            Some(path) => read_config_file_safely(path).map(Some),
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    read_config_file_safely(path).map(Some)
                } else {
                    debug!(
                        "No metadata file at {}, using built-in defaults",
                        path.display()
                    );
                    Ok(None)
                }
            }
        }
    }
}

/// Read a configuration file after checking its type and size
fn read_config_file_safely(path: &Path) -> ConfigResult<String> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| ConfigurationError::file_read_error(path.display().to_string(), e))?;

    if !metadata.is_file() {
        return Err(ConfigurationError::invalid_value(
            "file_type",
            path.display().to_string(),
            "Configuration path must point to a regular file",
        ));
    }

    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigurationError::invalid_value(
            "file_size",
            metadata.len().to_string(),
            format!("Configuration file larger than {MAX_CONFIG_FILE_SIZE} bytes"),
        ));
    }

    debug!("Reading metadata file: {}", path.display());
    std::fs::read_to_string(path)
        .map_err(|e| ConfigurationError::file_read_error(path.display().to_string(), e))
}
