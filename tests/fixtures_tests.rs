use govuk_components::fixtures::Outcome;
use govuk_components::{ComponentName, FixtureSuite, HtmlContext};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn get_fixture_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(filename);
    path
}

#[test]
fn test_all_fixture_files_pass() {
    let suites = FixtureSuite::load_dir(get_fixture_path("")).unwrap();
    assert!(!suites.is_empty(), "no fixture files found");

    let ctx = HtmlContext::default();
    for suite in &suites {
        for result in suite.verify(&ctx) {
            match result.outcome {
                Outcome::Passed => {}
                Outcome::Mismatch { expected, actual } => {
                    assert_eq!(
                        actual,
                        expected,
                        "{} / {}",
                        suite.component,
                        result.name
                    );
                }
                Outcome::Failed(e) => {
                    panic!("{} / {} failed to render: {}", suite.component, result.name, e)
                }
            }
        }
    }
}

#[test]
fn test_fixture_files_name_known_components() {
    let suites = FixtureSuite::load_dir(get_fixture_path("")).unwrap();
    for suite in suites {
        assert!(
            suite.component.parse::<ComponentName>().is_ok(),
            "{} names unknown component '{}'",
            suite.path.display(),
            suite.component
        );
        assert!(!suite.fixtures.is_empty(), "{} has no fixtures", suite.path.display());
    }
}

#[test]
fn test_every_component_has_a_fixture_suite() {
    let suites = FixtureSuite::load_dir(get_fixture_path("")).unwrap();
    let covered: Vec<&str> = suites.iter().map(|suite| suite.component.as_str()).collect();
    let missing: Vec<&str> = ComponentName::ALL
        .iter()
        .map(|name| name.as_str())
        .filter(|name| !covered.contains(name))
        .collect();
    assert!(missing.is_empty(), "components without fixtures: {:?}", missing);
}

#[test]
fn test_tag_fixture_file() {
    let suite = FixtureSuite::load_file(get_fixture_path("tag.json")).unwrap();
    assert_eq!(suite.component, "tag");
    let results = suite.verify(&HtmlContext::default());
    assert!(results.iter().all(|r| r.passed()));
}

#[test]
fn test_missing_fixture_file() {
    let result = FixtureSuite::load_file(get_fixture_path("does-not-exist.json"));
    assert!(result.is_err());
}
