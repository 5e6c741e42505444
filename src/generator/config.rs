//! Generator configuration and its builder.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::{templates, DEFAULT_BASE_URL, MODULE_MANIFEST};
use crate::error::{Error, Result};
use crate::generator::registry::{DayLister, FsDayLister};
use crate::generator::Generator;
use crate::template::TemplateSource;

/// Settings of one generator, fixed once built.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub base_path: PathBuf,
    pub force: bool,
    /// Never empty.
    pub module_name: String,
    pub part_template: TemplateSource,
    pub main_template: TemplateSource,
    /// Present only when non-empty.
    pub session: Option<String>,
    pub base_url: String,
}

#[derive(Deserialize)]
struct Manifest {
    package: Option<ManifestPackage>,
}

#[derive(Deserialize)]
struct ManifestPackage {
    name: Option<String>,
}

/// Reads the package name from the manifest in `base_path`.
///
/// # Returns
/// * `Err(Error::NoModuleFound)` - If the manifest is missing, unparseable, or has no name
pub fn discover_module_name<P: AsRef<Path>>(base_path: P) -> Result<String> {
    let manifest_path = base_path.as_ref().join(MODULE_MANIFEST);
    let not_found = || Error::NoModuleFound { manifest: manifest_path.display().to_string() };

    let content = std::fs::read_to_string(&manifest_path).map_err(|_| not_found())?;
    let manifest: Manifest = toml::from_str(&content).map_err(|e| {
        log::debug!("Cannot parse {}: {e}", manifest_path.display());
        not_found()
    })?;

    manifest
        .package
        .and_then(|p| p.name)
        .filter(|name| !name.is_empty())
        .ok_or_else(not_found)
}

/// Collects generator options; defaults are applied in [`GeneratorBuilder::build`].
#[derive(Default)]
pub struct GeneratorBuilder {
    base_path: Option<PathBuf>,
    force: bool,
    module_name: Option<String>,
    part_template: Option<PathBuf>,
    main_template: Option<PathBuf>,
    session: Option<String>,
    base_url: Option<String>,
    day_lister: Option<Box<dyn DayLister>>,
}

impl GeneratorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root of the solutions tree. Defaults to the current directory.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Module name; read from the manifest when not given or empty.
    pub fn module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = Some(name.into());
        self
    }

    pub fn part_template_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.part_template = Some(path.into());
        self
    }

    pub fn main_template_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.main_template = Some(path.into());
        self
    }

    /// Session token used to download inputs. An empty token disables downloads.
    pub fn session(mut self, session: impl Into<String>) -> Self {
        self.session = Some(session.into());
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Replaces the filesystem scan used to list day directories.
    pub fn day_lister(mut self, lister: impl DayLister + 'static) -> Self {
        self.day_lister = Some(Box::new(lister));
        self
    }

    /// Validates the options and creates the generator.
    pub fn build(self) -> Result<Generator> {
        let base_path = self.base_path.unwrap_or_else(|| PathBuf::from("."));

        let module_name = match self.module_name.filter(|name| !name.is_empty()) {
            Some(name) => name,
            None => discover_module_name(&base_path)?,
        };

        let part_template = match self.part_template {
            Some(path) => TemplateSource::file(path, templates::PART),
            None => TemplateSource::default_part(),
        };
        let main_template = match self.main_template {
            Some(path) => TemplateSource::file(path, templates::MAIN),
            None => TemplateSource::default_main(),
        };

        let config = GeneratorConfig {
            base_path,
            force: self.force,
            module_name,
            part_template,
            main_template,
            session: self.session.filter(|s| !s.is_empty()),
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        };
        log::debug!(
            "Generator for '{}' at {} (force: {}, download: {})",
            config.module_name,
            config.base_path.display(),
            config.force,
            config.session.is_some()
        );

        let day_lister = self.day_lister.unwrap_or_else(|| Box::new(FsDayLister));
        Ok(Generator::new(config, day_lister))
    }
}
