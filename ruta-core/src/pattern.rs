//! Path patterns for route entries.

use crate::error::PatternError;

/// One segment of a parsed path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matches exactly this piece of the path.
    Static(String),
    /// Matches any single non-empty piece, binding it under this name.
    Param(String),
}

/// A parsed path pattern such as `/collections/:name`.
///
/// Patterns begin with `/`; a segment starting with `:` is a named
/// parameter placeholder bound to the matching substring at navigation
/// time. The root pattern `/` has no segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern string.
    ///
    /// Returns an error when the pattern lacks a leading `/`, when a
    /// parameter segment is unnamed or carries characters outside
    /// `[A-Za-z0-9_]`, or when the same parameter name appears twice.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        if !pattern.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(pattern.to_string()));
        }

        let mut segments = Vec::new();
        for piece in pattern.split('/').filter(|piece| !piece.is_empty()) {
            match piece.strip_prefix(':') {
                Some(name) => {
                    if name.is_empty() {
                        return Err(PatternError::EmptyParameter(pattern.to_string()));
                    }
                    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                        return Err(PatternError::InvalidParameter {
                            pattern: pattern.to_string(),
                            name: name.to_string(),
                        });
                    }
                    let duplicate = segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(existing) if existing == name));
                    if duplicate {
                        return Err(PatternError::DuplicateParameter {
                            pattern: pattern.to_string(),
                            name: name.to_string(),
                        });
                    }
                    segments.push(Segment::Param(name.to_string()));
                }
                None => segments.push(Segment::Static(piece.to_string())),
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// The pattern as originally written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed segments, in path order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the parameter segments, in path order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }
}
