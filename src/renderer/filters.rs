pub use cruet::case::snake::to_snake_case;

/// Left-pads an integer with zeros, two digits unless a width is given.
///
/// `{{ 1 | zero_pad }}` renders `01`, `{{ 7 | zero_pad(3) }}` renders `007`.
pub fn zero_pad(value: i64, width: Option<usize>) -> String {
    let width = width.unwrap_or(2);
    format!("{value:0width$}")
}
