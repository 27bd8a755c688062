use std::cmp::Ordering;

use rstest::rstest;
use vercmp::version::Version;

#[rstest]
#[case("v1.2.3")]
#[case("1.2")]
#[case("3")]
#[case("v1.2.3+alpha.02")]
#[case("v1.2.3abc")]
#[case("0000.00.00.00.000")]
fn canonical_form_is_stable_under_reparse(#[case] input: &str) {
    let canonical = Version::parse(input).canonical_form();

    let reparsed = Version::parse(&canonical);
    assert!(reparsed.is_valid());
    assert_eq!(reparsed.canonical_form(), canonical);
}

#[test]
fn equality_is_reflexive() {
    let version = Version::parse("1.2.3-alpha");
    assert_eq!(version.compare(&version), Ordering::Equal);
    assert!(version == version.clone());
}

#[test]
fn ordering_is_transitive_and_antisymmetric() {
    let a = Version::parse("1.2.3");
    let b = Version::parse("1.2.4");
    let c = Version::parse("2.0.0");

    assert!(a < b && b < c && a < c);
    assert_eq!(a.compare(&b), Ordering::Less);
    assert_eq!(b.compare(&a), Ordering::Greater);
}

#[test]
fn relational_predicates_follow_the_three_way_comparison() {
    let v123 = Version::parse("1.2.3");
    let v123b = Version::parse("1.2.3");
    let v124 = Version::parse("1.2.4");
    let v103 = Version::parse("1.0.3");
    let v1103 = Version::parse("11.0.3");

    assert!(v123 == v123b);
    assert!(v123 <= v123b);
    assert!(v123 <= v124);
    assert!(v123 < v1103);
    assert!(v123 > v103);
    assert!(v123 >= v103);
    assert!(v123 >= v123b);
    assert!(v123 != v1103);
}

#[test]
fn versions_sort_numerically_not_lexicographically() {
    let mut versions: Vec<Version> = ["2.0.0", "1.2.3", "11.0.3", "1.2.3-alpha"]
        .iter()
        .map(|s| Version::parse(s))
        .collect();
    versions.sort();

    let canonical: Vec<String> = versions.iter().map(Version::canonical_form).collect();
    assert_eq!(canonical, ["1.2.3", "1.2.3-alpha", "2.0.0", "11.0.3"]);
}

#[test]
fn invalid_versions_have_no_canonical_form() {
    for input in ["", "1a.2.3", "v1.2-abc", "121.263.45-beta.1"] {
        let version = Version::parse(input);
        assert!(!version.is_valid(), "expected {input:?} to be invalid");
        assert_eq!(version.canonical_form(), "");
    }
}
