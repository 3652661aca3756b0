//! The key alphabet: lowercase ASCII letters only.

pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Child-slot index for a letter, or `None` when the character is
/// outside 'a'..='z'.
pub fn index_of(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some(c as usize - 'a' as usize)
    } else {
        None
    }
}

pub fn letter_at(idx: usize) -> char {
    ALPHABET[idx] as char
}
