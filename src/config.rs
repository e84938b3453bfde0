use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::view::SortPolicy;

const DEFAULT_CONFIG: &str = include_str!("../.config/config.yaml");

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub api: Url,
    pub api_token: Option<String>,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
    #[serde(default)]
    pub views: IndexMap<String, ViewConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ViewConfig {
    /// path below `api`, defaults to the view name
    pub path: Option<String>,
    pub single_column: bool,
    /// wire tokens applied on mount, e.g. `deadline,asc`
    pub default_sort: Vec<String>,
}

fn default_page_size() -> u32 {
    20
}

impl ViewConfig {
    pub fn policy(&self) -> SortPolicy {
        if self.single_column { SortPolicy::Single } else { SortPolicy::Multi }
    }
}

impl Config {
    /// Load from `path`, or the default location. A missing file is created with the defaults.
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        let config_path = path.unwrap_or_else(get_config_path);
        if !config_path.is_file() {
            write_default(&config_path)?;
            return Self::parse(DEFAULT_CONFIG).context("Fail to parse default config");
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Fail to read file `{}`", config_path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Fail to deserialize file `{}`", config_path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(content)?)
    }

    /// Settings of `name`, the defaults when the view is not configured
    pub fn view(&self, name: &str) -> ViewConfig {
        self.views.get(name).cloned().unwrap_or_default()
    }
}

fn write_default(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty() && !d.is_dir()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Fail to create directory `{}`", dir.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Fail to write file `{}`", path.display()))
}

pub fn get_project_dir() -> Option<ProjectDirs> {
    ProjectDirs::from("io.github", "", env!("CARGO_PKG_NAME"))
}

pub fn get_config_path() -> PathBuf {
    get_project_dir()
        .map(|d| d.config_dir().join("config.yaml"))
        .unwrap_or_else(|| PathBuf::from("config.yaml"))
}
