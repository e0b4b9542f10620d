//! Message rendering
//!
//! Builds the exact byte sequence written to every destination: an optional
//! local-time stamp, an optional level label, a literal `": "` separator,
//! then the user text formatted from its template. The output length is
//! computed before allocation and the assembled string must match it
//! exactly.

use std::fmt::Write as _;

use chrono::{DateTime, Local};

use crate::error::{Error, Result};
use crate::level::LogLevel;

use super::args::FormatArg;

/// Which optional segments a rendered message carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderFlags {
    /// Prepend `[YYYY-MM-DD HH:MM:SS.ffffff] `
    pub timestamp: bool,
    /// Include the level's label before the separator
    pub level_label: bool,
}

impl Default for RenderFlags {
    fn default() -> Self {
        Self {
            timestamp: true,
            level_label: true,
        }
    }
}

const SEPARATOR: &str = ": ";
const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Render a message once for fan-out across destinations.
///
/// The stamp is caller-supplied so every destination of one emit call sees
/// an identical one. Segments whose flag is off are omitted entirely; the
/// `": "` separator is always present.
pub fn render(
    level: LogLevel,
    flags: RenderFlags,
    timestamp: Option<DateTime<Local>>,
    template: &str,
    args: &[FormatArg],
) -> Result<String> {
    let user_text = format_template(template, args)?;

    let stamp = match timestamp {
        Some(ts) if flags.timestamp => Some(format!("[{}] ", ts.format(STAMP_FORMAT))),
        _ => None,
    };
    let label = if flags.level_label { level.label() } else { "" };

    let total = stamp.as_deref().map_or(0, str::len)
        + label.len()
        + SEPARATOR.len()
        + user_text.len();

    let mut out = String::with_capacity(total);
    if let Some(stamp) = &stamp {
        out.push_str(stamp);
    }
    out.push_str(label);
    out.push_str(SEPARATOR);
    out.push_str(&user_text);

    // Sizing pass and assembly must agree; a mismatch is a bug.
    debug_assert_eq!(out.len(), total);
    Ok(out)
}

/// Substitute printf-style specifiers with positionally matched arguments.
///
/// Supported: `%d`/`%i` (int), `%u` (uint), `%f` with optional `%.Nf`
/// precision (float, default 6 digits), `%s` (string or bool), `%c` (char),
/// `%%` (literal percent). Arity or type mismatches are `Format` errors.
pub fn format_template(template: &str, args: &[FormatArg]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut next_arg = 0usize;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }

        let mut precision = None;
        if chars.peek() == Some(&'.') {
            chars.next();
            let mut digits = String::new();
            while let Some(d) = chars.peek() {
                if d.is_ascii_digit() {
                    digits.push(*d);
                    chars.next();
                } else {
                    break;
                }
            }
            if digits.is_empty() {
                return Err(Error::format("precision marker '.' with no digits"));
            }
            precision = Some(
                digits
                    .parse::<usize>()
                    .map_err(|e| Error::format(format!("bad precision: {e}")))?,
            );
        }

        let spec = chars
            .next()
            .ok_or_else(|| Error::format("template ends inside a format specifier"))?;

        let arg = args.get(next_arg).ok_or_else(|| {
            Error::format(format!(
                "specifier %{spec} has no argument at position {next_arg}"
            ))
        })?;
        next_arg += 1;

        substitute(&mut out, spec, precision, arg)?;
    }

    if next_arg < args.len() {
        return Err(Error::format(format!(
            "{} argument(s) left over after substitution",
            args.len() - next_arg
        )));
    }

    Ok(out)
}

fn substitute(
    out: &mut String,
    spec: char,
    precision: Option<usize>,
    arg: &FormatArg,
) -> Result<()> {
    if precision.is_some() && spec != 'f' {
        return Err(Error::format(format!(
            "precision is only valid for %f, found %{spec}"
        )));
    }

    match (spec, arg) {
        ('d' | 'i', FormatArg::Int(v)) => {
            let _ = write!(out, "{v}");
        }
        ('d' | 'i', FormatArg::Uint(v)) => {
            let _ = write!(out, "{v}");
        }
        ('u', FormatArg::Uint(v)) => {
            let _ = write!(out, "{v}");
        }
        ('f', FormatArg::Float(v)) => {
            let _ = write!(out, "{:.*}", precision.unwrap_or(6), v);
        }
        ('s', FormatArg::Str(v)) => {
            out.push_str(v);
        }
        ('s', FormatArg::Bool(v)) => {
            let _ = write!(out, "{v}");
        }
        ('c', FormatArg::Char(v)) => {
            out.push(*v);
        }
        ('d' | 'i' | 'u' | 'f' | 's' | 'c', arg) => {
            return Err(Error::format(format!(
                "specifier %{spec} does not accept a {} argument",
                arg.type_name()
            )));
        }
        (other, _) => {
            return Err(Error::format(format!("unsupported specifier %{other}")));
        }
    }

    Ok(())
}
