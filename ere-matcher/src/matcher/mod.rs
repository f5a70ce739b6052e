/*!
The match engine: [`Regex`] and everything you get back from it.

A [`Regex`] is parsed and compiled once, up front; afterwards it is immutable
and every search only reads it. Searches hand back [`MatchResult`]s full of
offsets into the haystack, never copies of it.

## Example
```
use ere_matcher::Regex;

let re = Regex::new("(ha)+")?;
let m = re.search("hahaha!").unwrap();
assert_eq!(m.range(), 0..6);
assert_eq!(m.group(1).unwrap().range(), 4..6);
# Ok::<(), ere_matcher::CompileError>(())
```
*/
use std::sync::Arc;

use bon::{bon, Builder};
use ere_chars::RegexChar;

use crate::{
    program::{compile, Program},
    syntax::{self, CompileError},
};

mod iter;
mod matches;
mod pikevm;
mod replace;

pub use iter::Matches;
pub use matches::{MatchResult, Span};

/// A compiled POSIX extended regular expression.
///
/// Matching is leftmost-longest: among all matches the one starting earliest
/// wins, and among those the longest. The engine simulates all alternatives
/// of the compiled pattern in lock step, so matching time is bounded by
/// pattern size times input length, with no backtracking blowup, for
/// any pattern.
///
/// `Regex` is generic over the code unit: `u8` out of the box, `u16`/`u32`
/// (and `char`) for wide haystacks. Offsets always count units of that type.
///
/// # Example
///
/// ```
/// use ere_matcher::Regex;
///
/// let re = Regex::new("l[a-z]*")?;
/// let hay = "Hark! Hark! The lark";
/// let m = re.search(hay).unwrap();
/// assert_eq!((m.start(), m.len()), (16, 4));
/// assert_eq!(m.substr(hay.as_bytes(), 0), Some(&b"lark"[..]));
/// # Ok::<(), ere_matcher::CompileError>(())
/// ```
///
/// # Cheap clones, shared searches
///
/// The compiled program sits behind an [`Arc`]: cloning a `Regex` never
/// recompiles, and one instance can run searches from many threads at once,
/// because all mutable search state lives on the caller's side of each call.
#[derive(Clone, Debug)]
pub struct Regex<C: RegexChar = u8> {
    pub(crate) imp: Arc<RegexI<C>>,
}

#[derive(Debug)]
pub(crate) struct RegexI<C> {
    source: Vec<C>,
    compiled: Result<Program<C>, CompileError>,
}

impl<C: RegexChar> Regex<C> {
    /// Compiles a pattern given as a slice of code units.
    pub fn from_seq(pattern: &[C]) -> Result<Regex<C>, CompileError> {
        let regex = Regex::compile(pattern);
        regex.status().map(|()| regex)
    }

    /// Compiles a pattern, recording failure instead of returning it.
    ///
    /// This is the soft-failure construction mode: the outcome is retrievable
    /// via [`status`](Regex::status), and until that reports `Ok` the value
    /// must not be used for matching: every matching operation on a failed
    /// pattern panics.
    ///
    /// ```
    /// use ere_matcher::{CompileError, Regex};
    ///
    /// let re = Regex::compile(b"a{3,1}");
    /// assert_eq!(re.status(), Err(CompileError::InvalidCardinalityRange));
    /// ```
    pub fn compile(pattern: &[C]) -> Regex<C> {
        let compiled =
            syntax::parse(pattern).map(|(ast, groups)| compile(&ast, groups));
        Regex {
            imp: Arc::new(RegexI { source: pattern.to_vec(), compiled }),
        }
    }

    /// The compile status: `Ok` or the reason construction failed.
    pub fn status(&self) -> Result<(), CompileError> {
        match &self.imp.compiled {
            Ok(_) => Ok(()),
            Err(e) => Err(*e),
        }
    }

    /// The pattern text this regex was compiled from.
    pub fn source(&self) -> &[C] {
        &self.imp.source
    }

    /// Number of parenthesized groups in the pattern.
    ///
    /// ```
    /// use ere_matcher::Regex;
    ///
    /// assert_eq!(Regex::new("((a)b)(c)")?.group_count(), 3);
    /// # Ok::<(), ere_matcher::CompileError>(())
    /// ```
    pub fn group_count(&self) -> usize {
        self.program().group_count as usize
    }

    fn program(&self) -> &Program<C> {
        match &self.imp.compiled {
            Ok(program) => program,
            Err(e) => panic!("use of invalid pattern: {e}"),
        }
    }

    /// Searches for the leftmost-longest match.
    ///
    /// Scanning starts at `input.start` (0 for a plain haystack). "No match"
    /// is a normal outcome, reported as `None`.
    ///
    /// # Panics
    ///
    /// If this pattern failed to compile, or if the input span is out of
    /// bounds of the haystack.
    pub fn search<'h, I: Into<Input<'h, C>>>(&self, input: I) -> Option<MatchResult> {
        self.run(&input.into(), false)
    }

    /// Like [`search`](Regex::search), but the match must begin exactly at
    /// `input.start`; the scan never moves forward.
    ///
    /// ```
    /// use ere_matcher::{Input, Regex};
    ///
    /// let re = Regex::new("ark")?;
    /// assert!(re.match_at("Hark").is_none());
    /// let m = re.match_at(Input::builder(b"Hark").start(1).build()).unwrap();
    /// assert_eq!(m.range(), 1..4);
    /// # Ok::<(), ere_matcher::CompileError>(())
    /// ```
    ///
    /// # Panics
    ///
    /// Same conditions as [`search`](Regex::search).
    pub fn match_at<'h, I: Into<Input<'h, C>>>(&self, input: I) -> Option<MatchResult> {
        self.run(&input.into(), true)
    }

    /// Whether the pattern matches anywhere in the input.
    pub fn is_match<'h, I: Into<Input<'h, C>>>(&self, input: I) -> bool {
        self.search(input).is_some()
    }

    /// Start offset and length of the leftmost-longest match.
    ///
    /// ```
    /// use ere_matcher::Regex;
    ///
    /// let re = Regex::new("l[a-z]*")?;
    /// assert_eq!(re.index("Hark! Hark! The lark"), Some((16, 4)));
    /// assert_eq!(re.index("quiet"), None);
    /// # Ok::<(), ere_matcher::CompileError>(())
    /// ```
    pub fn index<'h, I: Into<Input<'h, C>>>(&self, input: I) -> Option<(usize, usize)> {
        self.search(input).map(|m| (m.start(), m.len()))
    }

    /// Iterator over non-overlapping matches from offset zero. See
    /// [`iter`](Regex::iter) for the configurable form.
    pub fn find_iter<'r, 'h>(&'r self, haystack: &'h [C]) -> Matches<'r, 'h, C> {
        self.iter().call(haystack)
    }

    fn run(&self, input: &Input<'_, C>, anchored: bool) -> Option<MatchResult> {
        let program = self.program();
        let end = input.end.unwrap_or(input.haystack.len());
        assert!(
            input.start <= end && end <= input.haystack.len(),
            "input span {}..{end} out of bounds of haystack length {}",
            input.start,
            input.haystack.len(),
        );
        pikevm::run(program, input.haystack, input.start, end, anchored, input.no_start)
            .map(|slots| MatchResult::from_slots(&slots))
    }
}

#[bon]
impl<C: RegexChar> Regex<C> {
    /// Iterator over matches, with a start offset and overlapping mode.
    ///
    /// ```
    /// use ere_matcher::Regex;
    ///
    /// let re = Regex::new("aa")?;
    /// let starts: Vec<usize> = re.iter().overlap(true).call(b"aaaa").map(|m| m.start()).collect();
    /// assert_eq!(starts, vec![0, 1, 2]);
    /// # Ok::<(), ere_matcher::CompileError>(())
    /// ```
    ///
    /// # Panics
    ///
    /// If this pattern failed to compile, or `start` is out of bounds.
    #[builder]
    pub fn iter<'r, 'h>(
        &'r self,
        #[builder(finish_fn)] haystack: &'h [C],
        /// Offset iteration begins at.
        #[builder(default = 0)]
        start: usize,
        /// Offset iteration stops at (exclusive); defaults to the haystack
        /// length.
        end: Option<usize>,
        /// Yield overlapping matches: resume one unit past the previous
        /// match's start instead of at its end.
        #[builder(default = false)]
        overlap: bool,
    ) -> Matches<'r, 'h, C> {
        // An invalid pattern must fail here, not on the first `next()`.
        let _ = self.program();
        Matches::new(self, haystack, start, end, overlap)
    }

    /// Replaces matched spans in place and returns how many were replaced.
    ///
    /// Each match's `group` span (0 = the whole match) is spliced out and
    /// `replacement` spliced in, left to right, up to `count` replacements
    /// (`0` = unlimited). Zero-length spans are skipped when
    /// `replace_empty` is false; the scan still advances past them.
    ///
    /// ```
    /// use ere_matcher::Regex;
    ///
    /// let re = Regex::new("[0-9]+")?;
    /// let mut hay = b"5 plus 12 is 17".to_vec();
    /// let n = re.replace().replacement(b"N").count(0).call(&mut hay);
    /// assert_eq!(n, 3);
    /// assert_eq!(hay, b"N plus N is N");
    /// # Ok::<(), ere_matcher::CompileError>(())
    /// ```
    ///
    /// # Panics
    ///
    /// If this pattern failed to compile, or `start` is out of bounds.
    #[builder]
    pub fn replace(
        &self,
        #[builder(finish_fn)] haystack: &mut Vec<C>,
        /// The text substituted for each matched span.
        replacement: &[C],
        /// Maximum number of replacements; `0` means unlimited.
        #[builder(default = 1)]
        count: usize,
        /// The submatch to replace; `0` is the whole match.
        #[builder(default = 0)]
        group: usize,
        /// Offset scanning begins at.
        #[builder(default = 0)]
        start: usize,
        /// Offset scanning stops at (exclusive); defaults to the haystack
        /// length, and shifts along with the replacements.
        end: Option<usize>,
        /// Whether zero-length spans are replaced too.
        #[builder(default = true)]
        replace_empty: bool,
    ) -> usize {
        replace::replace(self, haystack, replacement, count, group, start, end, replace_empty)
    }
}

impl Regex<u8> {
    /// Compiles a pattern from a string, treated as a byte sequence.
    ///
    /// ```
    /// use ere_matcher::Regex;
    ///
    /// let re = Regex::new("^[0-9]{4}-[0-9]{2}-[0-9]{2}$")?;
    /// assert!(re.is_match("2010-03-14"));
    /// # Ok::<(), ere_matcher::CompileError>(())
    /// ```
    pub fn new(pattern: &str) -> Result<Regex<u8>, CompileError> {
        Regex::from_seq(pattern.as_bytes())
    }
}

#[cfg(feature = "encoding")]
impl Regex<u16> {
    /// Compiles a UTF-16 pattern.
    pub fn new_utf16(pattern: &widestring::U16Str) -> Result<Regex<u16>, CompileError> {
        Regex::from_seq(pattern.as_slice())
    }
}

#[cfg(feature = "encoding")]
impl Regex<u32> {
    /// Compiles a UTF-32 pattern.
    pub fn new_utf32(pattern: &widestring::U32Str) -> Result<Regex<u32>, CompileError> {
        Regex::from_seq(pattern.as_slice())
    }
}

/// The parameters of one search: the haystack plus an optional span and
/// anchoring details.
///
/// Everything that can be a haystack converts into an `Input`, so the search
/// APIs take either a plain sequence or a configured `Input`:
///
/// ```
/// use ere_matcher::{Input, Regex};
///
/// let re = Regex::new("h.")?;
/// assert_eq!(re.search("ha he").unwrap().range(), 0..2);
/// let input = Input::builder(b"ha he").start(2).build();
/// assert_eq!(re.search(input).unwrap().range(), 3..5);
/// # Ok::<(), ere_matcher::CompileError>(())
/// ```
#[derive(Builder, Clone)]
pub struct Input<'h, C: RegexChar = u8> {
    #[builder(start_fn)]
    pub(crate) haystack: &'h [C],
    /// Offset the search starts at.
    #[builder(default = 0)]
    pub(crate) start: usize,
    /// Offset the search stops at (exclusive); defaults to the haystack
    /// length. `$` holds at this offset.
    pub(crate) end: Option<usize>,
    /// The haystack view does not begin at the real start of the data, so
    /// `^` must not match at offset zero. Akin to POSIX `REG_NOTBOL`.
    #[builder(default = false)]
    pub(crate) no_start: bool,
}

impl<'h, C: RegexChar> From<&'h [C]> for Input<'h, C> {
    #[inline]
    fn from(haystack: &'h [C]) -> Input<'h, C> {
        Input { haystack, start: 0, end: None, no_start: false }
    }
}

impl<'h, C: RegexChar, const N: usize> From<&'h [C; N]> for Input<'h, C> {
    #[inline]
    fn from(haystack: &'h [C; N]) -> Input<'h, C> {
        Input::from(&haystack[..])
    }
}

impl<'h, C: RegexChar> From<&'h Vec<C>> for Input<'h, C> {
    #[inline]
    fn from(haystack: &'h Vec<C>) -> Input<'h, C> {
        Input::from(haystack.as_slice())
    }
}

impl<'h> From<&'h str> for Input<'h, u8> {
    #[inline]
    fn from(haystack: &'h str) -> Input<'h, u8> {
        Input::from(haystack.as_bytes())
    }
}

#[cfg(feature = "encoding")]
impl<'h> From<&'h widestring::U16Str> for Input<'h, u16> {
    #[inline]
    fn from(haystack: &'h widestring::U16Str) -> Input<'h, u16> {
        Input::from(haystack.as_slice())
    }
}

#[cfg(feature = "encoding")]
impl<'h> From<&'h widestring::U32Str> for Input<'h, u32> {
    #[inline]
    fn from(haystack: &'h widestring::U32Str) -> Input<'h, u32> {
        Input::from(haystack.as_slice())
    }
}
