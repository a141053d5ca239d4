//! Property tests for artifact hashing.

use proptest::prelude::*;

use airlift::sha256_hex;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Hashing is deterministic and always 64 lowercase hex digits.
    #[test]
    fn property_hash_is_stable_hex(bytes in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let first = sha256_hex(&bytes);
        prop_assert_eq!(&first, &sha256_hex(&bytes));
        prop_assert_eq!(first.len(), 64);
        prop_assert!(first.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    /// PROPERTY: Appending a byte changes the digest.
    #[test]
    fn property_hash_detects_extension(
        bytes in proptest::collection::vec(any::<u8>(), 0..1024),
        extra in any::<u8>()
    ) {
        let mut extended = bytes.clone();
        extended.push(extra);
        prop_assert_ne!(sha256_hex(&bytes), sha256_hex(&extended));
    }
}
