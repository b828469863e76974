//! Stable seed derivation for persona identities.

use jiff::Timestamp;
use rand::RngExt;

/// Stable inputs combined into a 32-bit seed for name selection.
///
/// Seeds are recomputed per render and never persisted; identical inputs
/// always yield the identical seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameSeed<'a> {
    /// Board the persona belongs to.
    pub board_id: &'a str,
    /// Persona identifier within the board.
    pub persona_id: &'a str,
    /// Position of the persona in the rendered grid.
    pub slot_index: usize,
    /// Session salt, stable within one rendering session.
    pub session_salt: &'a str,
}

impl NameSeed<'_> {
    /// Returns the 32-bit seed for this tuple.
    pub fn value(&self) -> u32 {
        let combined = format!(
            "{}-{}-{}-{}",
            self.board_id, self.persona_id, self.slot_index, self.session_salt
        );
        string_hash(&combined)
    }
}

/// Polynomial rolling hash over character codes.
///
/// The running value is multiplied by 31 via `(h << 5) - h`, wrapped in the
/// 32-bit signed range, with the absolute value taken at the end.
pub fn string_hash(input: &str) -> u32 {
    let mut hash: i32 = 0;
    for ch in input.chars() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(ch as i32);
    }
    hash.unsigned_abs()
}

/// Generates a fresh session salt.
///
/// Combines wall-clock milliseconds with a random fragment, so generated
/// identities stay stable within one session and differ across sessions.
/// Pass an explicit salt to [`NameEngine::with_salt`] to reproduce a
/// session.
///
/// [`NameEngine::with_salt`]: super::NameEngine::with_salt
pub fn session_salt() -> String {
    let millis = Timestamp::now().as_millisecond();
    let fragment: u32 = rand::rng().random();
    format!("{millis}-{fragment:08x}")
}
