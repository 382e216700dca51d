//! Template string parser using winnow.
//!
//! Parses positional templates into an AST. Handles:
//! - Literal text segments
//! - Placeholders `{0}`, `{1}`, with optional alignment `{0,-8}` up to 65535
//! - Escape sequences: `{{` and `}}`
//!
//! Anything else inside braces, or an unmatched brace, is a syntax error.

use winnow::ascii::{dec_int, dec_uint, space0};
use winnow::combinator::{alt, delimited, opt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::take_while;

use super::ast::{MAX_WIDTH, Placeholder, Segment, Template};
use super::error::TemplateError;

/// Parse a template string into an AST.
pub fn parse_template(input: &str) -> Result<Template, TemplateError> {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(t) => {
            if remaining.is_empty() {
                Ok(t)
            } else {
                let (line, column) = calculate_position(input, remaining);
                Err(TemplateError::Syntax {
                    line,
                    column,
                    message: unexpected_message(remaining),
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            Err(TemplateError::Syntax {
                line,
                column,
                message: format!("parse error: {e}"),
            })
        }
    }
}

fn unexpected_message(remaining: &str) -> String {
    match remaining.chars().next() {
        Some('{') => "unterminated or invalid placeholder".to_string(),
        Some('}') => "unmatched '}'".to_string(),
        Some(c) => format!("unexpected character: '{c}'"),
        None => "unexpected end of input".to_string(),
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed_str[pos..].chars().count(),
        None => consumed_str.chars().count() + 1,
    };
    (line, column)
}

/// Parse a complete template into segments.
fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment (escape, placeholder, or literal run).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((escape_sequence, placeholder, literal)).parse_next(input)
}

/// Parse escape sequences: {{ -> {, }} -> }
fn escape_sequence(input: &mut &str) -> ModalResult<Segment> {
    alt((
        "{{".value(Segment::Literal("{".to_string())),
        "}}".value(Segment::Literal("}".to_string())),
    ))
    .parse_next(input)
}

/// Parse a run of literal text (no braces).
fn literal(input: &mut &str) -> ModalResult<Segment> {
    take_while(1.., |c: char| c != '{' && c != '}')
        .map(|s: &str| Segment::Literal(s.to_string()))
        .parse_next(input)
}

/// Parse a placeholder: { index (, alignment)? }
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited(('{', space0), placeholder_content, (space0, '}')).parse_next(input)
}

fn placeholder_content(input: &mut &str) -> ModalResult<Segment> {
    (dec_uint, opt(preceded((space0, ',', space0), alignment)))
        .map(|(index, alignment)| Segment::Placeholder(Placeholder { index, alignment }))
        .parse_next(input)
}

/// Parse a field width. Widths past `u16::MAX` are rejected; the formatter
/// cannot pad that far.
fn alignment(input: &mut &str) -> ModalResult<i32> {
    dec_int
        .verify(|width: &i32| width.unsigned_abs() <= u32::from(MAX_WIDTH))
        .parse_next(input)
}
