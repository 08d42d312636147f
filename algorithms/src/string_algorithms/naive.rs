use super::{MatchOutcome, Matcher};
use crate::error::StepResult;

/// Tries every alignment, comparing left to right until the first mismatch.
pub fn naive(text: &str, pattern: &str) -> StepResult<MatchOutcome> {
    let mut m = Matcher::new("naive", text, pattern)?;
    if m.fits() {
        let (n, len) = (m.text.len(), m.pattern.len());
        for s in 0..=n - len {
            let mut j = 0;
            while j < len && m.compare(s + j, j, s) {
                j += 1;
            }
            if j == len {
                m.matched(s);
            }
        }
    }
    Ok(m.finish(None))
}
