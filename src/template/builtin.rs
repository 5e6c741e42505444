//! Default templates, embedded at build time.

/// Stub for one puzzle part. Fields: `day`, `year`, `part`.
pub const PART_TEMPLATE: &str = include_str!("../../templates/part.rs.j2");

/// Entry point wiring every day package into the runner.
/// Fields: `timestamp`, `days`, `module_name`, `year`.
pub const MAIN_TEMPLATE: &str = include_str!("../../templates/main.rs.j2");
