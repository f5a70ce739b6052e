/*!
A POSIX.2 extended-regular-expression (ERE) engine with leftmost-longest
matching, generic over narrow and wide code units.

## Features
- POSIX leftmost-longest match selection. Of all matches the earliest-starting
  wins, and of those the longest: `a|ab` on `"ab"` matches `"ab"`.
- Thompson-style compiled programs run by a lock-step NFA simulation, so
  matching takes time bounded by pattern size × input length for *every*
  pattern, with no catastrophic backtracking to trigger.
- Capture groups, numbered by opening parenthesis.
- Match iteration, optionally overlapping, and in-place replacement.
- Narrow (`u8`) haystacks out of the box; `u16`/`u32` wide haystacks behind
  the `encoding` feature via [`widestring`](https://docs.rs/widestring).

Out of scope: BRE syntax, backreferences, and locale-dependent bracket
expressions (collating symbols, equivalence classes, named classes).
*/
//! ## Usage
//! ```
//! use ere_matcher::Regex;
//!
//! let re = Regex::new("l[a-z]*")?;
//! let hay = "Hark! Hark! The lark";
//! let m = re.search(hay).unwrap();
//! assert_eq!(m.range(), 16..20);
//! assert_eq!(m.substr(hay.as_bytes(), 0), Some(&b"lark"[..]));
//!
//! // Compilation failures carry a diagnosis.
//! use ere_matcher::CompileError;
//! assert_eq!(Regex::new("a**").unwrap_err(), CompileError::ConsecutiveCardinalities);
//! assert_eq!(Regex::new("(abc").unwrap_err(), CompileError::MissingClosingParen);
//! # Ok::<(), ere_matcher::CompileError>(())
//! ```
/*!
## Iteration and replacement
```
use ere_matcher::Regex;

let re = Regex::new("[0-9]+").unwrap();
let hay = b"cell 12, row 7";
let found: Vec<&[u8]> = re.find_iter(hay).map(|m| m.substr(hay, 0).unwrap()).collect();
assert_eq!(found, vec![&b"12"[..], &b"7"[..]]);

let mut hay = b"cell 12, row 7".to_vec();
re.replace().replacement(b"#").count(0).call(&mut hay);
assert_eq!(hay, b"cell #, row #");
```

## Crate features
*/
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]

pub mod matcher;
mod program;
pub mod syntax;

pub use matcher::{Input, MatchResult, Matches, Regex, Span};
pub use syntax::CompileError;

#[cfg(test)]
mod tests {
    use crate::{CompileError, Regex};

    #[test]
    fn end_to_end() {
        let re = Regex::new("(a|ab)(c|bcd)(d*)").unwrap();
        // The POSIX answer, not the leftmost-first one: the whole of
        // "abcd" is covered by taking the short first branch.
        let m = re.search("abcd").unwrap();
        assert_eq!(m.range(), 0..4);
        assert_eq!(m.group(1).unwrap().range(), 0..1);
        assert_eq!(m.group(2).unwrap().range(), 1..4);
        assert_eq!(m.group(3).unwrap().range(), 4..4);

        assert_eq!(Regex::new("a{1,").unwrap_err(), CompileError::MissingClosingCurlyBrace);
    }
}
