use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::constants::day_dir_name;

/// Solution of one puzzle part; the argument selects the sample input.
pub type Part = fn(bool) -> i64;

/// The two part solutions of a day.
#[derive(Debug, Clone, Copy)]
pub struct Day {
    pub part_one: Part,
    pub part_two: Part,
}

impl Day {
    pub fn new(part_one: Part, part_two: Part) -> Self {
        Self { part_one, part_two }
    }
}

/// Day packages of one year, keyed by directory name in registration order.
#[derive(Debug, Clone)]
pub struct Registry {
    module_name: String,
    year: i32,
    days: IndexMap<String, Day>,
}

impl Registry {
    pub fn new(module_name: impl Into<String>, year: i32) -> Self {
        Self { module_name: module_name.into(), year, days: IndexMap::new() }
    }

    pub fn register(&mut self, name: impl Into<String>, day: Day) {
        self.days.insert(name.into(), day);
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Registered day names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.days.keys().map(String::as_str)
    }

    pub fn get(&self, day: u32) -> Option<&Day> {
        self.days.get(&day_dir_name(day))
    }

    /// Runs both parts of `day`.
    pub fn solve(&self, day: u32, use_sample: bool) -> Result<(i64, i64)> {
        let entry = self.get(day).ok_or(Error::UnregisteredDay { day })?;
        Ok(((entry.part_one)(use_sample), (entry.part_two)(use_sample)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one(use_sample: bool) -> i64 {
        if use_sample { 11 } else { 1 }
    }

    fn two(_use_sample: bool) -> i64 {
        2
    }

    #[test]
    fn solves_registered_day() {
        let mut registry = Registry::new("solutions", 2024);
        registry.register("day03", Day::new(one, two));

        assert_eq!(registry.solve(3, false).unwrap(), (1, 2));
        assert_eq!(registry.solve(3, true).unwrap(), (11, 2));
    }

    #[test]
    fn unknown_day_is_an_error() {
        let registry = Registry::new("solutions", 2024);
        let err = registry.solve(4, false).unwrap_err();
        assert!(matches!(err, Error::UnregisteredDay { day: 4 }));
    }

    #[test]
    fn keeps_registration_order() {
        let mut registry = Registry::new("solutions", 2024);
        registry.register("day10", Day::new(one, two));
        registry.register("day02", Day::new(one, two));

        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["day10", "day02"]);
        assert_eq!(registry.module_name(), "solutions");
        assert_eq!(registry.year(), 2024);
    }
}
