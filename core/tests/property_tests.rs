// Property: the naked form of a URL does not depend on the scheme, on a
// leading `www.` label or on a trailing slash, and is stable under repeated
// parsing.

use address_bar_core::*;
use proptest::prelude::*;

// Strategy for generating host names without a www label
fn arb_host() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,10}\\.(com|org|net|io)"
        .prop_filter("host must not start with a www label", |h| !h.starts_with("www."))
}

// Strategy for generating URL paths
fn arb_path() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("/".to_string()),
        "(/[a-z0-9]{1,8}){1,3}",
        "(/[a-z0-9]{1,8}){1,3}/",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_naked_ignores_scheme_and_www(
        host in arb_host(),
        path in arb_path(),
        secure in any::<bool>(),
        www in any::<bool>(),
    ) {
        let scheme = if secure { "https" } else { "http" };
        let prefix = if www { "www." } else { "" };
        let decorated = Url::parse(&format!("{}://{}{}{}", scheme, prefix, host, path)).unwrap();
        let plain = Url::parse(&format!("http://{}{}", host, path)).unwrap();

        prop_assert_eq!(decorated.naked(), plain.naked());
    }

    #[test]
    fn test_naked_never_ends_with_slash(host in arb_host(), path in arb_path()) {
        let url = Url::parse(&format!("https://{}{}", host, path)).unwrap();
        prop_assert!(!url.naked().ends_with('/'));
    }

    #[test]
    fn test_root_detection_matches_path(host in arb_host(), path in arb_path()) {
        let url = Url::parse(&format!("https://{}{}", host, path)).unwrap();
        let trimmed = path.trim_end_matches('/');
        prop_assert_eq!(url.is_root(), trimmed.is_empty());
    }
}
