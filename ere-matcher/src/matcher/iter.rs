use std::sync::Arc;

use ere_chars::RegexChar;

use crate::matcher::{Input, MatchResult, Regex};

/// An iterator over the matches of one pattern in one haystack.
///
/// Non-overlapping by default: each scan resumes where the previous match
/// ended (one unit later for an empty match, so iteration always
/// terminates). In overlapping mode the scan instead resumes one unit past
/// the previous match's *start*.
///
/// The iterator borrows both the regex and the haystack; neither is copied.
/// It is cheap to construct (the pattern is never recompiled) but owns its
/// own cursor, so concurrent iteration wants one iterator per thread.
///
/// Two iterators compare equal when they walk the same pattern over the same
/// haystack and sit at the same position, or when both are exhausted;
/// exhausted iterators are interchangeable end markers.
#[derive(Clone, Debug)]
pub struct Matches<'r, 'h, C: RegexChar> {
    re: &'r Regex<C>,
    haystack: &'h [C],
    /// Offset the next scan resumes from.
    at: usize,
    /// Offset iteration stops at (exclusive).
    end: usize,
    overlap: bool,
    /// End of the previous match, to drop the empty match that would sit
    /// right after it.
    last_end: Option<usize>,
    done: bool,
}

impl<'r, 'h, C: RegexChar> Matches<'r, 'h, C> {
    pub(crate) fn new(
        re: &'r Regex<C>,
        haystack: &'h [C],
        start: usize,
        end: Option<usize>,
        overlap: bool,
    ) -> Matches<'r, 'h, C> {
        let end = end.unwrap_or(haystack.len());
        assert!(
            start <= end && end <= haystack.len(),
            "iteration span {start}..{end} out of bounds of haystack length {}",
            haystack.len(),
        );
        Matches { re, haystack, at: start, end, overlap, last_end: None, done: false }
    }
}

impl<C: RegexChar> Iterator for Matches<'_, '_, C> {
    type Item = MatchResult;

    fn next(&mut self) -> Option<MatchResult> {
        if self.done {
            return None;
        }
        loop {
            if self.at > self.end {
                self.done = true;
                return None;
            }
            let input = Input {
                haystack: self.haystack,
                start: self.at,
                end: Some(self.end),
                no_start: false,
            };
            let Some(m) = self.re.search(input) else {
                self.done = true;
                return None;
            };
            if self.overlap {
                self.at = m.start() + 1;
                return Some(m);
            }
            if m.is_empty() {
                self.at = m.end() + 1;
                // An empty match flush against the previous match is an
                // artifact of resuming there; skip it.
                if Some(m.end()) == self.last_end {
                    continue;
                }
            } else {
                self.at = m.end();
            }
            self.last_end = Some(m.end());
            return Some(m);
        }
    }
}

impl<C: RegexChar> PartialEq for Matches<'_, '_, C> {
    fn eq(&self, other: &Matches<'_, '_, C>) -> bool {
        if self.done && other.done {
            return true;
        }
        !self.done
            && !other.done
            && Arc::ptr_eq(&self.re.imp, &other.re.imp)
            && std::ptr::eq(self.haystack, other.haystack)
            && self.at == other.at
    }
}

#[cfg(test)]
mod tests {
    use crate::Regex;

    #[test]
    fn non_overlapping() {
        let re = Regex::new("[a-z]+").unwrap();
        let hay = "ab cd ef";
        let spans: Vec<_> = re.find_iter(hay.as_bytes()).map(|m| m.range()).collect();
        assert_eq!(spans, vec![0..2, 3..5, 6..8]);
    }

    #[test]
    fn gaps_and_matches_reconstruct_the_haystack() {
        let re = Regex::new("[0-9]+").unwrap();
        let hay = b"a1bb22ccc333!";
        let mut rebuilt = Vec::new();
        let mut tail = 0;
        for m in re.find_iter(hay) {
            rebuilt.extend_from_slice(&hay[tail..m.start()]);
            rebuilt.extend_from_slice(m.substr(hay, 0).unwrap());
            tail = m.end();
        }
        rebuilt.extend_from_slice(&hay[tail..]);
        assert_eq!(rebuilt, hay);
    }

    #[test]
    fn empty_matches_advance() {
        let re = Regex::new("a*").unwrap();
        let spans: Vec<_> = re.find_iter(b"bb").map(|m| m.range()).collect();
        assert_eq!(spans, vec![0..0, 1..1, 2..2]);

        let spans: Vec<_> = re.find_iter(b"aab").map(|m| m.range()).collect();
        assert_eq!(spans, vec![0..2, 3..3]);
    }

    #[test]
    fn overlapping() {
        let re = Regex::new("aa").unwrap();
        let spans: Vec<_> = re
            .iter()
            .overlap(true)
            .call(b"aaaa")
            .map(|m| m.range())
            .collect();
        assert_eq!(spans, vec![0..2, 1..3, 2..4]);
    }

    #[test]
    fn start_offset() {
        let re = Regex::new("ha").unwrap();
        let spans: Vec<_> = re.iter().start(1).call(b"haha").map(|m| m.range()).collect();
        assert_eq!(spans, vec![2..4]);
    }

    #[test]
    fn end_bounds_the_scan() {
        let re = Regex::new("ha").unwrap();
        let spans: Vec<_> = re.iter().end(3).call(b"haha").map(|m| m.range()).collect();
        assert_eq!(spans, vec![0..2]);
    }

    #[test]
    fn equality() {
        let re = Regex::new("a").unwrap();
        let hay = b"aaa";
        let mut a = re.find_iter(hay);
        let mut b = re.find_iter(hay);
        assert!(a == b);
        a.next();
        assert!(a != b);
        b.next();
        assert!(a == b);
        // Both exhausted: canonical end values.
        for _ in a.by_ref() {}
        for _ in b.by_ref() {}
        let other = Regex::new("b").unwrap();
        let mut c = other.find_iter(b"zzz");
        assert!(c.next().is_none());
        assert!(a == b);
        assert!(a == c);
    }
}
