/*! Punctuation/symbol POS override

Tokens that are punctuation markers get the `RD_PUNC` tag, other punctuation characters get `RD_SYM`, whatever their original tag was.
!*/
use std::collections::HashSet;

use lazy_static::lazy_static;

use super::Transform;
use crate::conll::Line;

pub const RD_PUNC: &str = "RD_PUNC";
pub const RD_SYM: &str = "RD_SYM";

/// ASCII punctuation characters.
const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

lazy_static! {
    /// Punctuation markers.
    pub static ref PUNC_MARKERS: HashSet<&'static str> =
        [";", ",", "\"", "'", "ред"].iter().copied().collect();

    /// Punctuation characters that are not punctuation markers.
    pub static ref SYMBOLS: HashSet<String> = PUNCTUATION
        .chars()
        .map(String::from)
        .filter(|c| !PUNC_MARKERS.contains(c.as_str()))
        .collect();
}

/// Forces `RD_PUNC`/`RD_SYM` on punctuation tokens.
#[derive(Debug, Default)]
pub struct PunctuationNormalizer;

impl PunctuationNormalizer {
    /// Tag that `token` has to carry, if any.
    pub fn forced_tag(token: &str) -> Option<&'static str> {
        if PUNC_MARKERS.contains(token) {
            Some(RD_PUNC)
        } else if SYMBOLS.contains(token) {
            Some(RD_SYM)
        } else {
            None
        }
    }
}

impl Transform for PunctuationNormalizer {
    fn transform_own(&self, lines: Vec<Line>) -> Vec<Line> {
        lines
            .into_iter()
            .map(|line| match line {
                Line::Record(mut r) => {
                    if let Some(tag) = Self::forced_tag(&r.token) {
                        r.pos = tag.to_string();
                    }
                    Line::Record(r)
                }
                Line::Blank => Line::Blank,
            })
            .collect()
    }
}
