use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use reactgen::choice::{CssFramework, Package};
use reactgen::materialize::Materializer;

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    pub(crate) package_manager: String,
    pub(crate) generator: String,
    pub(crate) defaults: Defaults,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Defaults {
    pub(crate) css_framework: CssFramework,
    pub(crate) packages: Vec<Package>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            css_framework: CssFramework::Tailwind,
            packages: Vec::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let materializer = Materializer::default();
        Self {
            package_manager: materializer.package_manager,
            generator: materializer.generator,
            defaults: Defaults::default(),
        }
    }
}

impl Config {
    pub(crate) fn init() -> Result<Self> {
        let path = home::home_dir()
            .context("failed to locate user home directory")?
            .join(".reactgen.config.toml");
        Self::load_or_create(&path)
    }

    fn load_or_create(path: &Path) -> Result<Self> {
        let config = if !path.exists() {
            let config = Self::default();
            let contents = toml::to_string_pretty(&config)?;
            fs::write(path, contents)
                .context(format!("failed to write config: {}", path.display()))?;
            config
        } else {
            let contents = fs::read_to_string(path)
                .context(format!("failed to read config: {}", path.display()))?;
            toml::from_str(&contents)
                .context(format!("failed to parse config: {}", path.display()))?
        };
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub(crate) fn materializer(&self) -> Materializer {
        Materializer {
            package_manager: self.package_manager.clone(),
            generator: self.generator.clone(),
        }
    }
}
