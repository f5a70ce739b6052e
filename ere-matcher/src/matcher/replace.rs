//! In-place replacement, built on repeated searches.

use ere_chars::RegexChar;

use crate::matcher::{Input, Regex};

/// The replacement loop behind [`Regex::replace`].
///
/// Matches are rewritten left to right. After each splice the scan resumes
/// just past the end of the match, shifted by the length difference between
/// the replaced span and the replacement text; an empty overall match
/// advances one extra unit so the scan always makes progress.
pub(crate) fn replace<C: RegexChar>(
    re: &Regex<C>,
    haystack: &mut Vec<C>,
    replacement: &[C],
    count: usize,
    group: usize,
    start: usize,
    end: Option<usize>,
    replace_empty: bool,
) -> usize {
    let mut at = start;
    // The scan bound shifts along with every splice.
    let mut end = end.unwrap_or(haystack.len());
    let mut replaced = 0;
    while at <= end && (count == 0 || replaced < count) {
        let input = Input {
            haystack: &haystack[..],
            start: at,
            end: Some(end),
            no_start: false,
        };
        let Some(m) = re.search(input) else { break };
        let empty_match = m.is_empty();
        let after_empty = usize::from(empty_match);
        let Some(span) = m.group(group) else {
            // The selected group took no part in this match.
            at = m.end() + after_empty;
            continue;
        };
        if span.is_empty() && !replace_empty {
            at = m.end() + after_empty;
            continue;
        }
        haystack.splice(span.range(), replacement.iter().copied());
        replaced += 1;
        end = end - span.len() + replacement.len();
        at = m.end() - span.len() + replacement.len() + after_empty;
    }
    replaced
}

#[cfg(test)]
mod tests {
    use crate::Regex;

    #[test]
    fn first_match_only_by_default() {
        let re = Regex::new("ab").unwrap();
        let mut hay = b"zabzab".to_vec();
        let n = re.replace().replacement(b"X").call(&mut hay);
        assert_eq!(n, 1);
        assert_eq!(hay, b"zXzab");
    }

    #[test]
    fn unlimited_with_count_zero() {
        let re = Regex::new("ab").unwrap();
        let mut hay = b"zabzab".to_vec();
        let n = re.replace().replacement(b"X").count(0).call(&mut hay);
        assert_eq!(n, 2);
        assert_eq!(hay, b"zXzX");
    }

    #[test]
    fn growing_replacement_shifts_the_scan() {
        let re = Regex::new("a+").unwrap();
        let mut hay = b"a-aa-aaa".to_vec();
        let n = re.replace().replacement(b"<aaaa>").count(0).call(&mut hay);
        assert_eq!(n, 3);
        assert_eq!(hay, b"<aaaa>-<aaaa>-<aaaa>");
    }

    #[test]
    fn replaces_a_specific_group() {
        let re = Regex::new("(w)(o)").unwrap();
        let mut hay = b"wow wow".to_vec();
        let n = re.replace().replacement(b"0").count(0).group(2).call(&mut hay);
        assert_eq!(n, 2);
        assert_eq!(hay, b"w0w w0w");
    }

    #[test]
    fn start_offset_skips_earlier_matches() {
        let re = Regex::new("ab").unwrap();
        let mut hay = b"abab".to_vec();
        let n = re.replace().replacement(b"-").count(0).start(1).call(&mut hay);
        assert_eq!(n, 1);
        assert_eq!(hay, b"ab-");
    }

    #[test]
    fn end_bounds_the_scan() {
        let re = Regex::new("ab").unwrap();
        let mut hay = b"abab".to_vec();
        let n = re.replace().replacement(b"xyz").count(0).end(2).call(&mut hay);
        assert_eq!(n, 1);
        assert_eq!(hay, b"xyzab");
    }

    #[test]
    fn empty_matches_are_policed() {
        // Skipped entirely, but the scan still advances.
        let re = Regex::new("x*").unwrap();
        let mut hay = b"abc".to_vec();
        let n = re
            .replace()
            .replacement(b"!")
            .count(0)
            .replace_empty(false)
            .call(&mut hay);
        assert_eq!(n, 0);
        assert_eq!(hay, b"abc");

        // Replaced when the policy allows it.
        let mut hay = b"ab".to_vec();
        let n = re.replace().replacement(b"!").count(0).call(&mut hay);
        assert_eq!(n, 3);
        assert_eq!(hay, b"!a!b!");
    }

    #[test]
    fn remove_everything() {
        let re = Regex::new(".*").unwrap();
        let mut hay = b"hello".to_vec();
        let n = re
            .replace()
            .replacement(b"")
            .count(0)
            .replace_empty(false)
            .call(&mut hay);
        assert_eq!(n, 1);
        assert_eq!(hay, b"");
    }
}
