//! Typed template arguments
//!
//! Variadic values are pre-resolved into an ordered slice of `FormatArg`
//! before rendering; the template engine consumes them positionally.

/// A single pre-resolved template argument
#[derive(Debug, Clone, PartialEq)]
pub enum FormatArg {
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    Char(char),
    Bool(bool),
}

impl FormatArg {
    /// Variant name used in mismatch diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            FormatArg::Int(_) => "int",
            FormatArg::Uint(_) => "uint",
            FormatArg::Float(_) => "float",
            FormatArg::Str(_) => "string",
            FormatArg::Char(_) => "char",
            FormatArg::Bool(_) => "bool",
        }
    }
}

impl From<i32> for FormatArg {
    fn from(value: i32) -> Self {
        FormatArg::Int(value.into())
    }
}

impl From<i64> for FormatArg {
    fn from(value: i64) -> Self {
        FormatArg::Int(value)
    }
}

impl From<u32> for FormatArg {
    fn from(value: u32) -> Self {
        FormatArg::Uint(value.into())
    }
}

impl From<u64> for FormatArg {
    fn from(value: u64) -> Self {
        FormatArg::Uint(value)
    }
}

impl From<usize> for FormatArg {
    fn from(value: usize) -> Self {
        FormatArg::Uint(value as u64)
    }
}

impl From<f32> for FormatArg {
    fn from(value: f32) -> Self {
        FormatArg::Float(value.into())
    }
}

impl From<f64> for FormatArg {
    fn from(value: f64) -> Self {
        FormatArg::Float(value)
    }
}

impl From<&str> for FormatArg {
    fn from(value: &str) -> Self {
        FormatArg::Str(value.to_string())
    }
}

impl From<String> for FormatArg {
    fn from(value: String) -> Self {
        FormatArg::Str(value)
    }
}

impl From<char> for FormatArg {
    fn from(value: char) -> Self {
        FormatArg::Char(value)
    }
}

impl From<bool> for FormatArg {
    fn from(value: bool) -> Self {
        FormatArg::Bool(value)
    }
}

/// Build a `[FormatArg; N]` from mixed primitive values
///
/// # Example
///
/// ```
/// use fanlog_core::{args, FormatArg};
///
/// let a = args![7, "worker", 0.5];
/// assert_eq!(a[0], FormatArg::Int(7));
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        [$($crate::FormatArg::from($arg)),*]
    };
}
