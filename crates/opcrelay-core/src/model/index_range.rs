// ── Index range ──
//
// Grammar: `index | index:index`, comma-repeated for multi-dimensional
// values. Indices are non-negative integers; a span's lower bound must
// not exceed its upper bound.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

/// One dimension of an index range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexSpan {
    Single(u32),
    Range { lo: u32, hi: u32 },
}

/// Sub-selection of an array or string valued attribute.
///
/// [`IndexRange::Full`] selects the whole value. The parsed form keeps
/// the configured expression so diagnostics and the protocol request can
/// echo it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IndexRange {
    #[default]
    Full,
    Spans { raw: String, spans: Vec<IndexSpan> },
}

impl IndexRange {
    /// Resolve a configured range expression. Missing or empty means the
    /// whole value.
    pub fn resolve(raw: Option<&str>) -> Result<Self, ResolveError> {
        let Some(text) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(Self::Full);
        };

        let spans = text
            .split(',')
            .map(|part| parse_span(part.trim()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|reason| ResolveError::InvalidIndexRange {
                raw: text.to_owned(),
                reason,
            })?;

        Ok(Self::Spans {
            raw: text.to_owned(),
            spans,
        })
    }

    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full)
    }

    /// The configured expression, empty for the whole value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Full => "",
            Self::Spans { raw, .. } => raw,
        }
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn parse_span(part: &str) -> Result<IndexSpan, String> {
    match part.split_once(':') {
        None => Ok(IndexSpan::Single(parse_index(part)?)),
        Some((lo, hi)) => {
            let lo = parse_index(lo)?;
            let hi = parse_index(hi)?;
            if lo > hi {
                return Err(format!("lower bound {lo} exceeds upper bound {hi}"));
            }
            Ok(IndexSpan::Range { lo, hi })
        }
    }
}

fn parse_index(part: &str) -> Result<u32, String> {
    let part = part.trim();
    if part.is_empty() {
        return Err("empty index".to_owned());
    }
    part.parse()
        .map_err(|_| format!("'{part}' is not a non-negative integer"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_empty_mean_whole_value() {
        assert!(IndexRange::resolve(None).unwrap().is_full());
        assert!(IndexRange::resolve(Some("")).unwrap().is_full());
        assert!(IndexRange::resolve(Some("  ")).unwrap().is_full());
    }

    #[test]
    fn single_index() {
        let range = IndexRange::resolve(Some("7")).unwrap();
        assert_eq!(
            range,
            IndexRange::Spans {
                raw: "7".into(),
                spans: vec![IndexSpan::Single(7)],
            }
        );
    }

    #[test]
    fn bounded_span() {
        let range = IndexRange::resolve(Some("2:4")).unwrap();
        assert_eq!(
            range,
            IndexRange::Spans {
                raw: "2:4".into(),
                spans: vec![IndexSpan::Range { lo: 2, hi: 4 }],
            }
        );
        assert_eq!(range.as_str(), "2:4");
    }

    #[test]
    fn multiple_dimensions() {
        let range = IndexRange::resolve(Some("1,3:5,9")).unwrap();
        assert_eq!(
            range,
            IndexRange::Spans {
                raw: "1,3:5,9".into(),
                spans: vec![
                    IndexSpan::Single(1),
                    IndexSpan::Range { lo: 3, hi: 5 },
                    IndexSpan::Single(9),
                ],
            }
        );
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = IndexRange::resolve(Some("4:2")).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidIndexRange { .. }));
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        assert!(IndexRange::resolve(Some("abc")).is_err());
        assert!(IndexRange::resolve(Some("-1")).is_err());
        assert!(IndexRange::resolve(Some("1:2:3")).is_err());
        assert!(IndexRange::resolve(Some("1,")).is_err());
    }

    #[test]
    fn equal_bounds_are_allowed() {
        assert!(IndexRange::resolve(Some("3:3")).is_ok());
    }
}
