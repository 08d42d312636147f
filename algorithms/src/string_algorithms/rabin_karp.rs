//! Rabin-Karp with a rolling polynomial hash.
//!
//! Variables:
//!   B = 256, Q = 101
//!   h = B^(m-1) mod Q
//!
//! Equations:
//!   hash(s) = (s[0] B^(m-1) + ... + s[m-1]) mod Q
//!   roll:   t' = ((t - text[i] h) B + text[i + m]) mod Q
//!   equal hashes are verified character by character.

use super::{MatchAction, MatchOutcome, Matcher};
use crate::error::StepResult;

pub const BASE: u64 = 256;
pub const MODULUS: u64 = 101;

fn code(c: char) -> u64 {
    u64::from(c) % MODULUS
}

pub fn rabin_karp(text: &str, pattern: &str) -> StepResult<MatchOutcome> {
    let mut m = Matcher::new("rabin-karp", text, pattern)?;
    if !m.fits() {
        return Ok(m.finish(None));
    }

    let (n, len) = (m.text.len(), m.pattern.len());
    let mut pattern_hash = 0;
    let mut text_hash = 0;
    let mut high = 1;
    for i in 0..len {
        pattern_hash = (pattern_hash * BASE + code(m.pattern[i])) % MODULUS;
        text_hash = (text_hash * BASE + code(m.text[i])) % MODULUS;
        if i + 1 < len {
            high = (high * BASE) % MODULUS;
        }
    }

    for s in 0..=n - len {
        m.record(
            MatchAction::Hash { window: s, text_hash, pattern_hash },
            s,
            format!("Window {s}: hash {text_hash}, pattern hash {pattern_hash}"),
        );
        if text_hash == pattern_hash {
            m.record(MatchAction::HashMatch { window: s }, s, format!("Hashes agree at {s}, verify characters"));
            let mut j = 0;
            while j < len && m.compare(s + j, j, s) {
                j += 1;
            }
            if j == len {
                m.matched(s);
            } else {
                tracing::trace!(window = s, "spurious hash hit");
                m.record(MatchAction::SpuriousHit { window: s }, s, format!("Spurious hit at {s}"));
            }
        }
        if s + len < n {
            let drop = (code(m.text[s]) * high) % MODULUS;
            text_hash = ((text_hash + MODULUS - drop) * BASE + code(m.text[s + len])) % MODULUS;
        }
    }
    Ok(m.finish(None))
}
