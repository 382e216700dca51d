//! AST types for positional templates.
//!
//! These types are public so tooling can inspect which arguments a template
//! references without rendering it.

/// A parsed template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, with `{{` and `}}` already unescaped.
    Literal(String),
    /// A positional placeholder: `{index}` or `{index,alignment}`.
    Placeholder(Placeholder),
}

/// Largest accepted alignment magnitude.
pub const MAX_WIDTH: u16 = u16::MAX;

/// A reference to the argument at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub index: usize,
    /// Minimum field width. Positive right-aligns, negative left-aligns.
    /// Never exceeds [`MAX_WIDTH`] in magnitude.
    pub alignment: Option<i32>,
}

impl Template {
    /// Highest argument index referenced, if any placeholder exists.
    pub fn max_index(&self) -> Option<usize> {
        self.placeholders().map(|p| p.index).max()
    }

    /// Number of arguments needed to render this template.
    pub fn arity(&self) -> usize {
        self.max_index().map_or(0, |i| i + 1)
    }

    /// Iterates the placeholders in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(p) => Some(p),
            Segment::Literal(_) => None,
        })
    }
}
