use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Invalid input \"{0}\" – aborting.")]
    Invalid(String),
}

/// Strips the line terminator left by `read_line`.
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Parses `input` as an index into a list of `count` matches.
pub fn parse_selection(input: &str, count: usize) -> Result<usize, SelectionError> {
    let invalid = || SelectionError::Invalid(input.to_string());

    let value: i64 = input.trim().parse().map_err(|_| invalid())?;
    usize::try_from(value)
        .ok()
        .filter(|&index| index < count)
        .ok_or_else(invalid)
}
