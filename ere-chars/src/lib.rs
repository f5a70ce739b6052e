//! Code-unit utils for the [ere-matcher](https://docs.rs/ere-matcher) regex engine.
/*!
## Features
- [`RegexChar`]: the adapter trait that makes the engine generic over narrow
  (`u8`) and wide (`u16`, `u32`, `char`) code units
- Fast [`find_byte()`](ascii::find_byte) first-occurrence search
- [`nul_terminated()`] implicit-length helper

## Crate features
*/
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]
pub mod ascii;
pub mod unit;

pub use unit::{nul_terminated, RegexChar};
