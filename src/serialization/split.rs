use crate::core::{GeomResult, GeometryError};

/// Split a string on the commas found outside of any parenthesis group.
///
/// Commas nested inside parentheses stay attached to their segment. Segments are
/// returned untrimmed, in order; a string without top-level commas yields a
/// single segment with the whole string.
///
/// Examples
/// ```rust
/// use wktgeom::serialization::split_top_level;
///
/// let parts = split_top_level("(1 2, 3 4), LINESTRING EMPTY").unwrap();
/// assert_eq!(parts, vec!["(1 2, 3 4)", " LINESTRING EMPTY"]);
/// ```
pub fn split_top_level(text: &str) -> GeomResult<Vec<&str>> {
    let mut segments = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    GeometryError::FormatError(format!("Unmatched ')' at position {idx}"))
                })?;
            }
            ',' if depth == 0 => {
                segments.push(&text[start..idx]);
                start = idx + 1;
            }
            _ => (),
        }
    }
    if depth != 0 {
        return Err(GeometryError::FormatError(format!(
            "{depth} unclosed '(' in \"{text}\""
        )));
    }
    segments.push(&text[start..]);
    Ok(segments)
}

/// Remove exactly one pair of parentheses enclosing the whole (trimmed) text.
///
/// Fails if the text does not start with `(`, does not end with `)`, or if the
/// opening parenthesis is closed before the end of the text.
pub fn strip_parens(text: &str) -> GeomResult<&str> {
    let trimmed = text.trim();
    let inner = match trimmed.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        Some(s) => s,
        None => {
            return Err(GeometryError::FormatError(format!(
                "Expected \"{trimmed}\" to be enclosed in parentheses"
            )));
        }
    };

    let mut depth: usize = 0;
    for ch in inner.chars() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    GeometryError::FormatError(format!("Unmatched ')' in \"{trimmed}\""))
                })?;
            }
            _ => (),
        }
    }
    if depth != 0 {
        return Err(GeometryError::FormatError(format!(
            "Unclosed '(' in \"{trimmed}\""
        )));
    }
    Ok(inner)
}
