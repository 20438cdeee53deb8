//! Byte range evaluation
//!
//! Parses a request's `Range` header against the actual file size and decides
//! how to answer: full body, a single partial slice, or 416. Only single
//! ranges in the `bytes` unit are honored; multi-range and malformed headers
//! fall back to the full body, matching the behavior clients rely on from
//! common file servers.

/// A resolved, inclusive byte range within a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    /// Number of bytes the range covers
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }
}

/// How a request's `Range` header should be answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOutcome {
    /// No usable range; serve the whole file with 200
    Full,
    /// Serve the slice with 206
    Partial(ByteRange),
    /// Range cannot be satisfied; respond 416
    Unsatisfiable,
}

/// Evaluate a `Range` header against a file of `total` bytes.
///
/// Accepted forms: `bytes=a-b`, `bytes=a-`, `bytes=-n`. Bounds are clamped to
/// the file size; a start at or past the end of the file, an inverted range,
/// or any range against an empty file is unsatisfiable.
pub fn evaluate(header: Option<&str>, total: usize) -> RangeOutcome {
    let Some(rest) = header.and_then(|h| h.strip_prefix("bytes=")) else {
        return RangeOutcome::Full;
    };

    // Single range only
    if rest.contains(',') {
        return RangeOutcome::Full;
    }

    let Some((first, last)) = rest.split_once('-') else {
        return RangeOutcome::Full;
    };
    let (first, last) = (first.trim(), last.trim());

    if total == 0 {
        return RangeOutcome::Unsatisfiable;
    }

    // Suffix form: "-n" requests the final n bytes
    if first.is_empty() {
        let Ok(suffix) = last.parse::<usize>() else {
            return RangeOutcome::Full;
        };
        if suffix == 0 {
            return RangeOutcome::Unsatisfiable;
        }
        return RangeOutcome::Partial(ByteRange {
            start: total.saturating_sub(suffix),
            end: total - 1,
        });
    }

    let Ok(start) = first.parse::<usize>() else {
        return RangeOutcome::Full;
    };
    if start >= total {
        return RangeOutcome::Unsatisfiable;
    }

    let end = if last.is_empty() {
        total - 1
    } else {
        let Ok(end) = last.parse::<usize>() else {
            return RangeOutcome::Full;
        };
        end.min(total - 1)
    };

    if start > end {
        return RangeOutcome::Unsatisfiable;
    }

    RangeOutcome::Partial(ByteRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_header() {
        assert_eq!(evaluate(None, 100), RangeOutcome::Full);
    }

    #[test]
    fn test_bounded_range() {
        let outcome = evaluate(Some("bytes=0-4"), 10);
        assert_eq!(
            outcome,
            RangeOutcome::Partial(ByteRange { start: 0, end: 4 })
        );
        if let RangeOutcome::Partial(r) = outcome {
            assert_eq!(r.len(), 5);
        }
    }

    #[test]
    fn test_open_ended_range() {
        assert_eq!(
            evaluate(Some("bytes=50-"), 100),
            RangeOutcome::Partial(ByteRange { start: 50, end: 99 })
        );
    }

    #[test]
    fn test_suffix_range() {
        assert_eq!(
            evaluate(Some("bytes=-20"), 100),
            RangeOutcome::Partial(ByteRange { start: 80, end: 99 })
        );
        // Suffix longer than the file covers the whole file
        assert_eq!(
            evaluate(Some("bytes=-500"), 100),
            RangeOutcome::Partial(ByteRange { start: 0, end: 99 })
        );
    }

    #[test]
    fn test_end_clamped_to_file() {
        assert_eq!(
            evaluate(Some("bytes=90-200"), 100),
            RangeOutcome::Partial(ByteRange { start: 90, end: 99 })
        );
    }

    #[test]
    fn test_unsatisfiable() {
        assert_eq!(evaluate(Some("bytes=100-"), 100), RangeOutcome::Unsatisfiable);
        assert_eq!(evaluate(Some("bytes=5-2"), 100), RangeOutcome::Unsatisfiable);
        assert_eq!(evaluate(Some("bytes=-0"), 100), RangeOutcome::Unsatisfiable);
        assert_eq!(evaluate(Some("bytes=0-"), 0), RangeOutcome::Unsatisfiable);
    }

    #[test]
    fn test_ignored_forms() {
        assert_eq!(evaluate(Some("bytes=a-b"), 100), RangeOutcome::Full);
        assert_eq!(evaluate(Some("bytes=0-4,10-14"), 100), RangeOutcome::Full);
        assert_eq!(evaluate(Some("items=0-4"), 100), RangeOutcome::Full);
        assert_eq!(evaluate(Some("bytes=04"), 100), RangeOutcome::Full);
    }
}
