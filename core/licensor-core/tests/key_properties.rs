//! Property-based tests for key generation and the admin secret.

use licensor_core::{generate_license_key, is_generated_key, AdminSecret};
use proptest::prelude::*;

fn secret_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9!@#$%^&*()]{1,64}").unwrap()
}

proptest! {
    #[test]
    fn generated_keys_always_well_formed(_round in 0u32..256) {
        let key = generate_license_key();
        prop_assert!(is_generated_key(&key));
    }

    #[test]
    fn secret_accepts_itself(secret in secret_strategy()) {
        let admin = AdminSecret::new(secret.clone());
        prop_assert!(admin.verify(&secret));
    }

    #[test]
    fn secret_rejects_strict_prefixes(secret in secret_strategy()) {
        let admin = AdminSecret::new(secret.clone());
        for end in 0..secret.len() {
            prop_assert!(!admin.verify(&secret[..end]));
        }
    }

    #[test]
    fn secret_rejects_extensions(secret in secret_strategy(), suffix in "[a-z]{1,8}") {
        let admin = AdminSecret::new(secret.clone());
        let extended = format!("{secret}{suffix}");
        prop_assert!(!admin.verify(&extended));
    }
}
