/// Park-Miller "minimal standard" modulus (2^31 - 1).
pub const MODULUS: u64 = 2_147_483_647;

/// Park-Miller multiplier (7^5).
pub const MULTIPLIER: u64 = 16_807;

/// Polynomial rolling hash (`h * 31 + c`) over UTF-16 code units with 32-bit
/// signed wraparound, returned as an absolute value.
pub fn string_hash(key: &str) -> u32 {
    let mut h: i32 = 0;
    for unit in key.encode_utf16() {
        h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit));
    }
    h.unsigned_abs()
}

/// Deterministic Lehmer generator keyed by a string.
///
/// Not cryptographically secure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn from_key(key: &str) -> Self {
        let state = u64::from(string_hash(key)) % MODULUS;
        let state = if state == 0 { MODULUS - 1 } else { state };
        SeededRng { state }
    }

    pub fn state(&self) -> u64 {
        self.state
    }

    /// Returns `state / MODULUS`, in (0, 1), then advances the state.
    pub fn next_f64(&mut self) -> f64 {
        let value = self.state as f64 / MODULUS as f64;
        self.state = self.state * MULTIPLIER % MODULUS;
        value
    }

    /// Pick an index into a list of `len` items.
    pub fn next_index(&mut self, len: usize) -> usize {
        let idx = (self.next_f64() * len as f64) as usize;
        idx.min(len.saturating_sub(1))
    }
}

impl Iterator for SeededRng {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_hash() {
        assert_eq!(string_hash(""), 0);
        assert_eq!(string_hash("a"), 97);
        assert_eq!(string_hash("ab"), 97 * 31 + 98);
        assert_eq!(string_hash("chennai"), 742_644_360);
    }

    #[test]
    fn test_hash_wraps_and_takes_absolute_value() {
        // Long enough to overflow 32 bits several times over.
        let key = "thiruvananthapuram-coastal-buffer";
        let mut h: i64 = 0;
        for c in key.bytes() {
            h = (h * 31 + i64::from(c)) as i32 as i64;
        }
        assert_eq!(u64::from(string_hash(key)), h.unsigned_abs());
    }

    #[test]
    fn test_zero_seed_is_replaced() {
        let rng = SeededRng::from_key("");
        assert_eq!(rng.state(), MODULUS - 1);
    }

    #[test]
    fn test_lehmer_step() {
        let mut rng = SeededRng::from_key("a");
        assert_eq!(rng.next_f64(), 97.0 / MODULUS as f64);
        assert_eq!(rng.state(), 97 * MULTIPLIER);
    }

    #[test]
    fn test_same_key_same_sequence() {
        for key in ["chennai", "kochi", "mumbai", "x", "coastal node with spaces"] {
            let a: Vec<f64> = SeededRng::from_key(key).take(64).collect();
            let b: Vec<f64> = SeededRng::from_key(key).take(64).collect();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_draws_in_open_unit_interval() {
        for draw in SeededRng::from_key("digha").take(10_000) {
            assert!(draw > 0.0 && draw < 1.0);
        }
    }

    #[test]
    fn test_different_keys_diverge() {
        let a: Vec<f64> = SeededRng::from_key("puri").take(8).collect();
        let b: Vec<f64> = SeededRng::from_key("paradip").take(8).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_next_index_in_range() {
        let mut rng = SeededRng::from_key("kozhikode");
        for _ in 0..1000 {
            assert!(rng.next_index(5) < 5);
        }
    }
}
