//! Scaffolding of one puzzle day.
//!
//! For a day and year the generator provisions the input files, renders one
//! source file per puzzle part, and regenerates the year's entry point from
//! the day directories present on disk. Steps run in order and stop at the
//! first failure; files written before the failure are left in place.

pub mod config;
pub mod registry;

pub use config::{discover_module_name, GeneratorBuilder, GeneratorConfig};
pub use registry::{DayLister, FsDayLister, StaticDayLister};

use serde_json::json;
use std::io::Write;
use std::path::PathBuf;

use crate::constants::{
    day_dir_name, INPUT_DIR, INPUT_FILE, MAIN_FILE, PARTS, SAMPLE_FILE, SOURCE_EXTENSION,
};
use crate::error::{Error, Result};
use crate::fetch::InputFetcher;
use crate::ioutils::{create_dir_all, create_file, overwrite_file, write_file};
use crate::renderer::{get_template_engine, TemplateRenderer};
use crate::template::TemplateSource;

/// Format of the generation timestamp written into the entry point.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// The day being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRequest {
    pub day: u32,
    pub year: i32,
}

impl DayRequest {
    pub fn new(day: u32, year: i32) -> Self {
        Self { day, year }
    }

    /// Name of the day's directories, e.g. `day01`.
    pub fn dir_name(&self) -> String {
        day_dir_name(self.day)
    }
}

/// File name of a part source, e.g. `partone.rs` for `One`.
pub fn part_file_name(part: &str) -> String {
    format!("part{}.{SOURCE_EXTENSION}", part.to_lowercase())
}

pub struct Generator {
    config: GeneratorConfig,
    day_lister: Box<dyn DayLister>,
}

impl Generator {
    pub(crate) fn new(config: GeneratorConfig, day_lister: Box<dyn DayLister>) -> Self {
        Self { config, day_lister }
    }

    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Creates the inputs, the day package, and the year's entry point.
    pub fn generate(&self, day: u32, year: i32) -> Result<()> {
        let request = DayRequest::new(day, year);
        log::info!("Generating files for day {:02}, year {}", request.day, request.year);

        self.create_inputs(&request)?;
        self.generate_daily_package(&request)?;
        self.generate_main(year)?;

        log::info!("Generated files for day {:02}, year {}", request.day, request.year);
        Ok(())
    }

    /// `{base}/input/{year}/day{DD}`
    pub fn input_dir(&self, request: &DayRequest) -> PathBuf {
        self.config
            .base_path
            .join(INPUT_DIR)
            .join(request.year.to_string())
            .join(request.dir_name())
    }

    /// `{base}/{year}`
    pub fn year_dir(&self, year: i32) -> PathBuf {
        self.config.base_path.join(year.to_string())
    }

    /// `{base}/{year}/day{DD}`
    pub fn day_dir(&self, request: &DayRequest) -> PathBuf {
        self.year_dir(request.year).join(request.dir_name())
    }

    /// `{base}/{year}/main.rs`
    pub fn main_path(&self, year: i32) -> PathBuf {
        self.year_dir(year).join(MAIN_FILE)
    }

    /// Renders the part template for one puzzle part.
    pub fn render_part(&self, request: &DayRequest, part: &str) -> Result<String> {
        let context = json!({
            "Day": request.day,
            "Year": request.year,
            "Part": part,
        });
        self.render(&self.config.part_template, &context)
    }

    /// Renders the main template for `days`, in the order given.
    pub fn render_main(&self, year: i32, days: &[String], timestamp: &str) -> Result<String> {
        let context = json!({
            "Timestamp": timestamp,
            "Days": days,
            "ModuleName": self.config.module_name,
            "Year": year,
        });
        self.render(&self.config.main_template, &context)
    }

    fn render(&self, source: &TemplateSource, context: &serde_json::Value) -> Result<String> {
        let mut engine = get_template_engine();
        source.resolve(&mut engine)?;
        engine.render(source.name(), context)
    }

    fn create_inputs(&self, request: &DayRequest) -> Result<()> {
        let input_dir = self.input_dir(request);
        create_dir_all(&input_dir)?;

        let input_path = input_dir.join(INPUT_FILE);
        let mut input = create_file(&input_path, self.config.force)?;
        if let Some(session) = &self.config.session {
            let body = InputFetcher::new(&self.config.base_url)?.fetch(
                session,
                request.day,
                request.year,
            )?;
            input.write_all(&body).map_err(|e| {
                Error::io(format!("write file '{}'", input_path.display()), e)
            })?;
        } else {
            log::debug!("No session configured, leaving {} empty", input_path.display());
        }

        write_file(input_dir.join(SAMPLE_FILE), b"", self.config.force)
    }

    fn generate_daily_package(&self, request: &DayRequest) -> Result<()> {
        let day_dir = self.day_dir(request);
        create_dir_all(&day_dir)?;

        for part in PARTS {
            let content = self.render_part(request, part)?;
            write_file(day_dir.join(part_file_name(part)), content.as_bytes(), self.config.force)?;
        }
        Ok(())
    }

    fn generate_main(&self, year: i32) -> Result<()> {
        let days = self.day_lister.list_days(&self.year_dir(year))?;
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        let content = self.render_main(year, &days, &timestamp)?;
        overwrite_file(self.main_path(year), &content)
    }
}
