#![forbid(unsafe_code)]

//! Password generator.
//!
//! Draws characters independently and uniformly from a pool formed as the
//! union of the lowercase base set and any enabled character classes.
//!
//! Randomness comes from a small xorshift64* generator seeded from the
//! system clock. It is NOT cryptographically secure; that is documented
//! behavior of this widget, not an oversight to fix.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Lowercase base set, always included.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Uppercase class.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Digit class.
pub const NUMBERS: &str = "0123456789";
/// Symbol class.
pub const SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// Password generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordConfig {
    /// Number of characters to draw. Zero yields an empty password.
    pub length: usize,
    /// Include the uppercase class.
    pub uppercase: bool,
    /// Include the digit class.
    pub numbers: bool,
    /// Include the symbol class.
    pub symbols: bool,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: 12,
            uppercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

impl PasswordConfig {
    /// The derived character pool: lowercase base plus enabled classes.
    #[must_use]
    pub fn pool(&self) -> String {
        let mut pool = String::from(LOWERCASE);
        if self.uppercase {
            pool.push_str(UPPERCASE);
        }
        if self.numbers {
            pool.push_str(NUMBERS);
        }
        if self.symbols {
            pool.push_str(SYMBOLS);
        }
        pool
    }
}

/// Error for an empty character pool.
///
/// With the lowercase base always present this cannot currently happen,
/// but the guard stays: the pool derivation, not the caller, decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPoolError;

impl fmt::Display for EmptyPoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Erro: Selecione opções.")
    }
}

impl std::error::Error for EmptyPoolError {}

/// Deterministic xorshift64* PRNG behind the generator.
///
/// State must never be zero; seeding guards against it.
#[derive(Debug, Clone)]
pub struct PasswordGenerator {
    state: u64,
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordGenerator {
    /// Seed from the system clock.
    #[must_use]
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() as u64 ^ d.as_secs())
            .unwrap_or(0x9e37_79b9_7f4a_7c15);
        Self::with_seed(nanos)
    }

    /// Seed explicitly (tests).
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: seed | 1,
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    /// Generate a password for `config`.
    ///
    /// Each character is drawn independently from the pool. A zero length
    /// yields an empty string (the draw loop runs zero times).
    pub fn generate(&mut self, config: &PasswordConfig) -> Result<String, EmptyPoolError> {
        let pool: Vec<char> = config.pool().chars().collect();
        if pool.is_empty() {
            return Err(EmptyPoolError);
        }
        let mut password = String::with_capacity(config.length);
        for _ in 0..config.length {
            let idx = (self.next_u64() % pool.len() as u64) as usize;
            password.push(pool[idx]);
        }
        Ok(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_length() {
        let mut generator = PasswordGenerator::with_seed(42);
        let config = PasswordConfig::default();
        let password = generator.generate(&config).expect("pool is never empty");
        assert_eq!(password.chars().count(), 12);
    }

    #[test]
    fn zero_length_yields_empty_string() {
        let mut generator = PasswordGenerator::with_seed(42);
        let config = PasswordConfig {
            length: 0,
            ..PasswordConfig::default()
        };
        assert_eq!(generator.generate(&config).as_deref(), Ok(""));
    }

    #[test]
    fn lowercase_only_pool() {
        let config = PasswordConfig {
            length: 64,
            uppercase: false,
            numbers: false,
            symbols: false,
        };
        assert_eq!(config.pool(), LOWERCASE);
        let mut generator = PasswordGenerator::with_seed(7);
        let password = generator.generate(&config).expect("pool");
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn pool_is_union_of_enabled_classes() {
        let config = PasswordConfig {
            length: 8,
            uppercase: true,
            numbers: false,
            symbols: true,
        };
        let pool = config.pool();
        assert!(pool.contains('a') && pool.contains('Z') && pool.contains('@'));
        assert!(!pool.contains('5'));
    }

    #[test]
    fn xorshift_state_never_zero() {
        let mut generator = PasswordGenerator::with_seed(0);
        for _ in 0..10_000 {
            generator.next_u64();
            assert_ne!(generator.state, 0);
        }
    }

    #[test]
    fn same_seed_same_password() {
        let config = PasswordConfig::default();
        let a = PasswordGenerator::with_seed(123).generate(&config);
        let b = PasswordGenerator::with_seed(123).generate(&config);
        assert_eq!(a, b);
    }
}
