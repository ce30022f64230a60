//! Property tests for the password generator.

use proptest::prelude::*;

use miniapps_widgets::password::{PasswordConfig, PasswordGenerator};

proptest! {
    /// For any valid config the password has exactly the requested length.
    #[test]
    fn generated_length_matches_config(
        seed in any::<u64>(),
        length in 0usize..256,
        uppercase in any::<bool>(),
        numbers in any::<bool>(),
        symbols in any::<bool>(),
    ) {
        let config = PasswordConfig { length, uppercase, numbers, symbols };
        let mut generator = PasswordGenerator::with_seed(seed);
        let password = generator.generate(&config).expect("lowercase base keeps the pool non-empty");
        prop_assert_eq!(password.chars().count(), length);
    }

    /// Every drawn character belongs to the configured pool's alphabet.
    #[test]
    fn characters_come_from_the_pool(
        seed in any::<u64>(),
        length in 1usize..128,
        uppercase in any::<bool>(),
        numbers in any::<bool>(),
        symbols in any::<bool>(),
    ) {
        let config = PasswordConfig { length, uppercase, numbers, symbols };
        let pool = config.pool();
        let mut generator = PasswordGenerator::with_seed(seed);
        let password = generator.generate(&config).expect("pool");
        prop_assert!(password.chars().all(|c| pool.contains(c)));
    }

    /// Disabled classes never leak into the output.
    #[test]
    fn disabled_classes_are_excluded(seed in any::<u64>(), length in 1usize..128) {
        let config = PasswordConfig { length, uppercase: false, numbers: false, symbols: false };
        let mut generator = PasswordGenerator::with_seed(seed);
        let password = generator.generate(&config).expect("pool");
        prop_assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }
}
