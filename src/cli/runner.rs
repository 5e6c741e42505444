use crate::{
    cli::{GenArgs, RunArgs},
    constants::BIN_PREFIX,
    error::{Error, Result},
    generator::Generator,
};
use std::process::Command;

/// Builds a generator from the arguments and generates one day.
pub fn generate(args: GenArgs) -> Result<()> {
    let mut builder = Generator::builder().path(&args.path).force(args.force);
    if let Some(name) = args.module_name {
        builder = builder.module_name(name);
    }
    if let Some(path) = args.part_template {
        builder = builder.part_template_file(path);
    }
    if let Some(path) = args.main_template {
        builder = builder.main_template_file(path);
    }
    if let Some(session) = args.session {
        builder = builder.session(session);
    }
    if let Some(base_url) = args.base_url {
        builder = builder.base_url(base_url);
    }
    let generator = builder.build()?;

    if args.force {
        log::warn!("Force applied - may overwrite existing files");
    }
    println!("generating files for day {:02}, year {}", args.day, args.year);
    generator.generate(args.day, args.year)?;
    println!("generated files");
    Ok(())
}

/// Name of the binary target that runs a year's entry point.
pub fn binary_name(year: i32) -> String {
    format!("{BIN_PREFIX}{year}")
}

/// The cargo invocation that runs one day of a year.
pub fn run_command(args: &RunArgs) -> Command {
    let mut command = Command::new("cargo");
    command
        .current_dir(&args.path)
        .args(["run", "--quiet", "--bin"])
        .arg(binary_name(args.year))
        .args(["--", "--day"])
        .arg(args.day.to_string());
    if args.sample {
        command.arg("--sample");
    }
    command
}

/// Runs a day's solutions through the year's generated entry point.
pub fn run(args: RunArgs) -> Result<()> {
    let mut command = run_command(&args);
    log::info!("running: {command:?}");
    let status = command.status().map_err(|e| Error::io("run cargo", e))?;
    if !status.success() {
        return Err(Error::CommandFailed { command: format!("{command:?}"), status });
    }
    Ok(())
}
