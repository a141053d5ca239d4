//! Property tests for release lookup by version.

use proptest::prelude::*;

use airlift::domain::entities::Release;

fn version() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}(\\+[0-9]{1,3})?").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Lookup only ever returns a release whose version is identical.
    #[test]
    fn property_match_is_exact(
        versions in proptest::collection::vec(version(), 0..8),
        wanted in version()
    ) {
        let releases: Vec<Release> = versions
            .iter()
            .enumerate()
            .map(|(i, v)| Release::new(format!("r_{i}"), "abc123", v.clone()))
            .collect();

        match Release::find_by_version(&releases, &wanted) {
            Some(found) => prop_assert_eq!(&found.version, &wanted),
            None => prop_assert!(!versions.contains(&wanted)),
        }
    }

    /// PROPERTY: Surrounding whitespace never matches a stored version.
    #[test]
    fn property_padded_version_does_not_match(v in version()) {
        let releases = vec![Release::new("r_0", "abc123", v.clone())];
        let padded = format!(" {v}");
        prop_assert!(Release::find_by_version(&releases, &padded).is_none());
    }
}
