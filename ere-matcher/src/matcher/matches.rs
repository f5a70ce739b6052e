use std::ops::Range;

use itertools::Itertools;

use crate::matcher::pikevm::Slot;

/// A half-open range of code-unit offsets into a haystack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Range<usize> {
        span.range()
    }
}

/// One successful match: the overall span plus one span per capture group
/// that participated.
///
/// A `MatchResult` stores offsets only; it does not retain or copy the
/// searched sequence. [`substr`](MatchResult::substr) takes the original
/// sequence back as a parameter, and the caller is responsible for passing
/// the sequence the match was produced from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResult {
    groups: Vec<Option<Span>>,
}

impl MatchResult {
    pub(crate) fn from_slots(slots: &[Slot]) -> MatchResult {
        let groups = slots
            .iter()
            .tuples()
            .map(|(&start, &end)| match (start, end) {
                (Some(start), Some(end)) => Some(Span { start, end }),
                _ => None,
            })
            .collect();
        MatchResult { groups }
    }

    /// The overall match span.
    pub fn span(&self) -> Span {
        self.groups[0].unwrap()
    }

    pub fn start(&self) -> usize {
        self.span().start
    }

    pub fn end(&self) -> usize {
        self.span().end
    }

    pub fn len(&self) -> usize {
        self.span().len()
    }

    pub fn is_empty(&self) -> bool {
        self.span().is_empty()
    }

    pub fn range(&self) -> Range<usize> {
        self.span().range()
    }

    /// The span of capture group `i`; index 0 is the whole match. `None`
    /// when the group exists but took no part in the match.
    pub fn group(&self, i: usize) -> Option<Span> {
        self.groups.get(i).copied().flatten()
    }

    /// Number of group slots, counting the whole match as slot 0.
    pub fn group_len(&self) -> usize {
        self.groups.len()
    }

    /// The text of group `i`, sliced out of `haystack`.
    ///
    /// # Example
    ///
    /// ```
    /// use ere_matcher::Regex;
    ///
    /// let re = Regex::new("l[a-z]*")?;
    /// let hay = "Hark! Hark! The lark";
    /// let m = re.search(hay).unwrap();
    /// assert_eq!(m.substr(hay.as_bytes(), 0), Some(&b"lark"[..]));
    /// # Ok::<(), ere_matcher::CompileError>(())
    /// ```
    pub fn substr<'h, C>(&self, haystack: &'h [C], i: usize) -> Option<&'h [C]> {
        self.group(i).map(|span| &haystack[span.range()])
    }
}
