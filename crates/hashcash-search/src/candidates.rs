//! Suffix enumeration order.
//!
//! Candidates are enumerated shortest first. Within one length they run in
//! odometer order over [`FIELD_ALPHABET`], rightmost position fastest:
//!
//! ```text
//! a, b, ..., ?, aa, ab, ..., a?, ba, ..., ??, aaa, ...
//! ```
//!
//! Two searches over the same stamp with the same digest therefore always
//! find the same suffix after the same number of probes.

use hashcash_core::charset::{FIELD_ALPHABET, FIELD_ALPHABET_LEN};

const ALPHABET: &[u8] = FIELD_ALPHABET.as_bytes();

/// Odometer over suffixes of length `1..=max_len`.
#[derive(Debug, Clone)]
pub struct SuffixCandidates {
    indices: Vec<usize>,
    max_len: usize,
    started: bool,
    done: bool,
}

impl SuffixCandidates {
    pub fn new(max_len: usize) -> Self {
        Self {
            indices: Vec::with_capacity(max_len.min(16)),
            max_len,
            started: false,
            done: false,
        }
    }

    /// Move to the next candidate. Returns `false` once every suffix up to
    /// `max_len` has been produced.
    pub fn advance(&mut self) -> bool {
        if self.done {
            return false;
        }
        if !self.started {
            self.started = true;
            if self.max_len == 0 {
                self.done = true;
                return false;
            }
            self.indices.push(0);
            return true;
        }

        for slot in self.indices.iter_mut().rev() {
            if *slot + 1 < FIELD_ALPHABET_LEN {
                *slot += 1;
                return true;
            }
            *slot = 0;
        }

        // Every position wrapped: move on to the next length.
        if self.indices.len() >= self.max_len {
            self.done = true;
            return false;
        }
        self.indices.push(0);
        true
    }

    /// Length of the current candidate.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Append the current candidate to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend(self.indices.iter().map(|&i| ALPHABET[i]));
    }

    /// The current candidate as a string.
    pub fn current(&self) -> String {
        self.indices.iter().map(|&i| char::from(ALPHABET[i])).collect()
    }
}

impl Iterator for SuffixCandidates {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.advance() {
            Some(self.current())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_limit_yields_nothing() {
        assert_eq!(SuffixCandidates::new(0).count(), 0);
    }

    #[test]
    fn test_single_length_covers_alphabet_in_order() {
        let all: Vec<String> = SuffixCandidates::new(1).collect();
        assert_eq!(all.len(), FIELD_ALPHABET_LEN);
        assert_eq!(all.concat(), FIELD_ALPHABET);
    }

    #[test]
    fn test_length_two_order() {
        let all: Vec<String> = SuffixCandidates::new(2).collect();
        assert_eq!(all.len(), FIELD_ALPHABET_LEN + FIELD_ALPHABET_LEN * FIELD_ALPHABET_LEN);
        assert_eq!(all[0], "a");
        assert_eq!(all[FIELD_ALPHABET_LEN - 1], "?");
        assert_eq!(all[FIELD_ALPHABET_LEN], "aa");
        assert_eq!(all[FIELD_ALPHABET_LEN + 1], "ab");
        assert_eq!(all[2 * FIELD_ALPHABET_LEN], "ba");
        assert_eq!(all.last().unwrap(), "??");
    }

    #[test]
    fn test_exhausted_stays_exhausted() {
        let mut c = SuffixCandidates::new(1);
        while c.advance() {}
        assert!(!c.advance());
        assert!(!c.advance());
    }

    #[test]
    fn test_write_to_appends() {
        let mut c = SuffixCandidates::new(3);
        for _ in 0..(FIELD_ALPHABET_LEN + 2) {
            c.advance();
        }
        let mut buf = b"prefix:".to_vec();
        c.write_to(&mut buf);
        assert_eq!(buf, b"prefix:ab");
        assert_eq!(c.len(), 2);
    }

    proptest! {
        #[test]
        fn test_position_decodes_as_odometer(n in 0usize..(FIELD_ALPHABET_LEN * (FIELD_ALPHABET_LEN + 1))) {
            let suffix = SuffixCandidates::new(2).nth(n).unwrap();
            let digits: Vec<usize> = suffix
                .bytes()
                .map(|b| ALPHABET.iter().position(|&a| a == b).unwrap())
                .collect();
            let position = match digits.as_slice() {
                [d] => *d,
                [hi, lo] => FIELD_ALPHABET_LEN + hi * FIELD_ALPHABET_LEN + lo,
                _ => unreachable!(),
            };
            prop_assert_eq!(position, n);
        }
    }
}
