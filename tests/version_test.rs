// tests/version_test.rs
use proptest::prelude::*;
use release_hygiene::domain::{compare, is_greater, BumpKind, SemanticVersion};
use release_hygiene::HygieneError;
use std::cmp::Ordering;

fn kind() -> impl Strategy<Value = BumpKind> {
    prop_oneof![
        Just(BumpKind::Major),
        Just(BumpKind::Minor),
        Just(BumpKind::Patch)
    ]
}

fn version() -> impl Strategy<Value = SemanticVersion> {
    (0u32..1000, 0u32..1000, 0u32..1000).prop_map(|(a, b, c)| SemanticVersion::new(a, b, c))
}

proptest! {
    #[test]
    fn bump_is_strictly_greater(v in version(), k in kind()) {
        let next = v.bump(k).unwrap();
        prop_assert!(next > v);
        prop_assert!(is_greater(&next.to_string(), &v.to_string()).unwrap());
    }

    #[test]
    fn bump_resets_lower_components(v in version(), k in kind()) {
        let next = v.bump(k).unwrap();
        match k {
            BumpKind::Major => prop_assert_eq!(next.as_tuple(), (v.major + 1, 0, 0)),
            BumpKind::Minor => prop_assert_eq!(next.as_tuple(), (v.major, v.minor + 1, 0)),
            BumpKind::Patch => prop_assert_eq!(next.as_tuple(), (v.major, v.minor, v.patch + 1)),
        }
    }

    #[test]
    fn display_parses_back(v in version()) {
        prop_assert_eq!(SemanticVersion::parse(&v.to_string()).unwrap(), v);
    }

    #[test]
    fn compare_is_antisymmetric(a in version(), b in version()) {
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
        prop_assert_eq!(compare(&a, &b) == Ordering::Equal, a == b);
    }

    #[test]
    fn is_greater_is_irreflexive(v in version()) {
        prop_assert!(!is_greater(&v.to_string(), &v.to_string()).unwrap());
    }

    #[test]
    fn arbitrary_text_never_panics(s in "\\PC*") {
        let _ = SemanticVersion::parse(&s);
    }
}

#[test]
fn test_components_compare_numerically() {
    assert!(is_greater("1.10.0", "1.9.0").unwrap());
    assert!(is_greater("2.0.0", "1.99.99").unwrap());
    assert!(!is_greater("0.9.9", "1.0.0").unwrap());
}

#[test]
fn test_malformed_inputs() {
    for text in ["1.2", "1.2.3.4", "v1.2.3", "1.2.x", "", "1..3", "1.2.-3", "1.2.3-rc.1"] {
        assert!(
            matches!(SemanticVersion::parse(text), Err(HygieneError::InvalidFormat(_))),
            "{text} should be rejected"
        );
    }
    assert!(is_greater("1.2", "1.0.0").is_err());
}
