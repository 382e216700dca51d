//! Positional templates.
//!
//! A template is literal text with `{N}` placeholders referring to the Nth
//! argument, 0-indexed. The same placeholder may appear any number of times.
//! `{{` and `}}` produce literal braces, and `{N,W}` pads the argument to
//! width `|W|`, right-aligned for positive `W` and left-aligned for negative.

pub mod ast;
pub mod error;
mod parse;

use std::fmt::{Display, Result as FmtResult, Write};

pub use ast::{Placeholder, Segment, Template};
pub use error::TemplateError;
pub use parse::parse_template;

/// Renders a parsed template with `args`.
///
/// Fails if a placeholder references an argument past the end of `args`.
/// Unused arguments are ignored.
pub fn render<T: Display>(template: &Template, args: &[T]) -> Result<String, TemplateError> {
    let mut out = String::new();
    for segment in &template.segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(p) => {
                let arg = args.get(p.index).ok_or(TemplateError::MissingArgument {
                    index: p.index,
                    available: args.len(),
                })?;
                push_aligned(&mut out, arg, p.alignment)
                    .map_err(|_| TemplateError::Display { index: p.index })?;
            }
        }
    }
    Ok(out)
}

/// Parses and renders `source` with `args` in one step.
///
/// # Example
///
/// ```
/// use phrasebook::template::interpolate;
///
/// let text = interpolate("{0}, your name is {0}!", &["Ada"]).unwrap();
/// assert_eq!(text, "Ada, your name is Ada!");
///
/// assert!(interpolate("{0} {1}", &["only one"]).is_err());
/// ```
pub fn interpolate<T: Display>(source: &str, args: &[T]) -> Result<String, TemplateError> {
    let template = parse_template(source)?;
    render(&template, args)
}

fn push_aligned<T: Display>(out: &mut String, arg: &T, alignment: Option<i32>) -> FmtResult {
    match alignment {
        None | Some(0) => write!(out, "{arg}"),
        Some(width) if width > 0 => {
            let width = width.unsigned_abs() as usize;
            write!(out, "{arg:>width$}")
        }
        Some(width) => {
            let width = width.unsigned_abs() as usize;
            write!(out, "{arg:<width$}")
        }
    }
}
