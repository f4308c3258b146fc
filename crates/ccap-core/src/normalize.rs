//! neologd-style text normalization.
//!
//! Canonicalizes full-width alphanumerics and half-width katakana, unifies
//! hyphen/dash/tilde look-alikes, and strips the spacing that word
//! segmenters put between Japanese words. The result is what readings and
//! frequency lists are keyed on.

use unicode_normalization::UnicodeNormalization;

use crate::unicode::{is_wide, LONG_VOWEL_MARK};

/// Upper bound on normalization passes. One pass is enough for almost every
/// input; a second is needed when a deletion makes two runs adjacent.
pub const MAX_PASSES: usize = 4;

/// Fewest passes that still reach a fixpoint when a deletion exposes a run.
pub const MIN_PASSES: usize = 2;

const HYPHENS: &[char] = &[
    '\u{02D7}', '\u{058A}', '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2043}',
    '\u{207B}', '\u{208B}', '\u{2212}',
];

const CHOONPUS: &[char] = &[
    '\u{FE63}', '\u{FF0D}', '\u{FF70}', '\u{2014}', '\u{2015}', '\u{2500}', '\u{2501}',
    LONG_VOWEL_MARK,
];

const TILDES: &[char] = &['~', '\u{223C}', '\u{223E}', '\u{301C}', '\u{3030}', '\u{FF5E}'];

// Index-aligned: WIDEN_FROM[i] widens to WIDEN_TO[i].
const WIDEN_FROM: &str = "!\"#$%&'()*+,-./:;<=>?@[¥]^_`{|}~｡､･｢｣";
const WIDEN_TO: &str = "！”＃＄％＆’（）＊＋，－．／：；＜＝＞？＠［￥］＾＿｀｛｜｝〜。、・「」";

/// Full-width punctuation narrowed back at the end. ＝ ・ 「 」 are absent on
/// purpose: they stay wide.
const NARROW_CLASS: &str = "！”＃＄％＆’（）＊＋，－．／：；＜＞？＠［￥］＾＿｀｛｜｝〜";

const CAPPED_REPEATS: &[char] = &['。', '、', '・', 'へ'];

/// Normalize `s` until it is stable (at most [`MAX_PASSES`] passes).
///
/// `normalize(&normalize(s)) == normalize(s)` for every input.
pub fn normalize(s: &str) -> String {
    normalize_with_passes(s, MAX_PASSES)
}

/// Same as [`normalize`] with an explicit pass budget (minimum one pass).
pub fn normalize_with_passes(s: &str, max_passes: usize) -> String {
    let mut current = normalize_once(s);
    for _ in 1..max_passes.max(1) {
        let next = normalize_once(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// A single normalization pass.
pub fn normalize_once(s: &str) -> String {
    let s = s.trim();
    let s = nfkc_runs(s, is_compat_alnum_or_halfwidth_kana);
    let s = s.replace('\u{FF0D}', "-");
    let s = collapse_runs(&s, HYPHENS, Some('-'));
    let s = collapse_runs(&s, CHOONPUS, Some(LONG_VOWEL_MARK));
    let s = collapse_runs(&s, TILDES, None);
    let s: String = s.chars().map(widen).collect();
    let s = remove_extra_spaces(&s);
    let s = nfkc_runs(&s, |c| NARROW_CLASS.contains(c));
    let s = s.replace('\u{FF0D}', "-");
    let s = s.replace('’', "'").replace('”', "\"");
    cap_repeats(&s, CAPPED_REPEATS, 3)
}

fn is_compat_alnum_or_halfwidth_kana(c: char) -> bool {
    ('０'..='９').contains(&c)
        || ('Ａ'..='Ｚ').contains(&c)
        || ('ａ'..='ｚ').contains(&c)
        || ('｡'..='ﾟ').contains(&c)
}

/// Apply NFKC to each maximal run of characters satisfying `in_class`,
/// leaving everything else untouched. Runs are normalized as a unit so that
/// half-width voiced marks compose with the preceding kana (ｶﾞ → ガ).
fn nfkc_runs(s: &str, in_class: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(s.len());
    let mut run = String::new();
    for c in s.chars() {
        if in_class(c) {
            run.push(c);
            continue;
        }
        if !run.is_empty() {
            out.extend(run.nfkc());
            run.clear();
        }
        out.push(c);
    }
    if !run.is_empty() {
        out.extend(run.nfkc());
    }
    out
}

/// Replace every run of characters from `set` with `replacement`, or drop the
/// run when `replacement` is `None`.
fn collapse_runs(s: &str, set: &[char], replacement: Option<char>) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if set.contains(&c) {
            if !in_run {
                if let Some(r) = replacement {
                    out.push(r);
                }
                in_run = true;
            }
        } else {
            in_run = false;
            out.push(c);
        }
    }
    out
}

fn widen(c: char) -> char {
    WIDEN_FROM
        .chars()
        .position(|f| f == c)
        .and_then(|i| WIDEN_TO.chars().nth(i))
        .unwrap_or(c)
}

/// Collapse space runs (ASCII and U+3000) to a single space, then drop any
/// space that sits between two wide characters or between a wide character
/// and a basic-Latin one.
fn remove_extra_spaces(s: &str) -> String {
    let mut chars: Vec<char> = Vec::with_capacity(s.len());
    for c in s.chars() {
        let is_space = c == ' ' || c == '\u{3000}';
        if is_space {
            if chars.last() != Some(&' ') {
                chars.push(' ');
            }
        } else {
            chars.push(c);
        }
    }

    let mut out = String::with_capacity(s.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' && i > 0 && i + 1 < chars.len() {
            let (prev, next) = (chars[i - 1], chars[i + 1]);
            let joinable = (is_wide(prev) && (is_wide(next) || next.is_ascii()))
                || (prev.is_ascii() && is_wide(next));
            if joinable {
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Cap runs of each character in `set` at `max` repeats.
fn cap_repeats(s: &str, set: &[char], max: usize) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev: Option<char> = None;
    let mut run = 0usize;
    for c in s.chars() {
        if Some(c) == prev {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        if run > max && set.contains(&c) {
            continue;
        }
        out.push(c);
    }
    out
}
