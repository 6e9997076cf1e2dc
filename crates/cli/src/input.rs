use std::fmt;

/// Why the command-line values could not be used as input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InputError {
    Empty,
    NotANumber(String),
    Negative(String),
    Overflow(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "no values provided"),
            InputError::NotANumber(arg) => write!(f, "'{arg}' is not a non-negative integer"),
            InputError::Negative(arg) => write!(f, "'{arg}' is negative"),
            InputError::Overflow(arg) => {
                write!(f, "'{arg}' does not fit in an unsigned 32-bit integer")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parses every argument as a non-negative `u32`, failing on the first bad one.
pub(crate) fn parse_values<S: AsRef<str>>(args: &[S]) -> Result<Vec<u32>, InputError> {
    if args.is_empty() {
        return Err(InputError::Empty);
    }
    args.iter().map(|arg| parse_value(arg.as_ref())).collect()
}

/// Only plain decimal digits are accepted: no sign, whitespace or suffix.
fn parse_value(arg: &str) -> Result<u32, InputError> {
    if let Some(digits) = arg.strip_prefix('-')
        && is_digits(digits)
    {
        return Err(InputError::Negative(arg.to_string()));
    }
    if !is_digits(arg) {
        return Err(InputError::NotANumber(arg.to_string()));
    }
    // All digits, so the only way to fail is being out of range.
    arg.parse()
        .map_err(|_| InputError::Overflow(arg.to_string()))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
