//! Byte ↔ character offset conversion.
//!
//! The regex engine reports byte offsets; mentions expose character offsets.
//! For ASCII text the two coincide and no table is built.

pub struct CharOffsets {
    // byte index -> char index, one slot per byte plus the end position
    byte_to_char: Option<Vec<usize>>,
}

impl CharOffsets {
    pub fn new(text: &str) -> Self {
        if text.is_ascii() {
            return Self { byte_to_char: None };
        }
        let mut map = vec![0usize; text.len() + 1];
        let mut char_idx = 0;
        for (byte_idx, ch) in text.char_indices() {
            for slot in &mut map[byte_idx..byte_idx + ch.len_utf8()] {
                *slot = char_idx;
            }
            char_idx += 1;
        }
        map[text.len()] = char_idx;
        Self { byte_to_char: Some(map) }
    }

    pub fn to_char(&self, byte_idx: usize) -> usize {
        match &self.byte_to_char {
            None => byte_idx,
            Some(map) => map.get(byte_idx).copied().unwrap_or_else(|| map.last().copied().unwrap_or(0)),
        }
    }

    pub fn span(&self, byte_start: usize, byte_end: usize) -> (usize, usize) {
        (self.to_char(byte_start), self.to_char(byte_end))
    }
}
