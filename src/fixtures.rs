//! Fixture files: reference markup for rendered components.
//!
//! A fixture file is JSON of the form
//! `{ "component": "tag", "fixtures": [ { "name", "options", "html" } ] }`.
//! Every scenario is rendered through the registry and compared with its
//! expected HTML after whitespace between tags has been normalized.

use crate::error::{ComponentError, ComponentResult};
use crate::html::RenderContext;
use crate::registry;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// One scenario: options in, expected markup out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub name: String,
    #[serde(default)]
    pub options: Value,
    pub html: String,
}

/// All scenarios for one component, as loaded from a single file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureSuite {
    pub component: String,
    pub fixtures: Vec<Fixture>,
    #[serde(skip)]
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Passed,
    Mismatch { expected: String, actual: String },
    Failed(ComponentError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FixtureResult {
    pub name: String,
    pub outcome: Outcome,
}

impl FixtureResult {
    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Passed
    }
}

impl FixtureSuite {
    pub fn from_json(json: &str, path: impl Into<PathBuf>) -> ComponentResult<Self> {
        let path = path.into();
        let mut suite: FixtureSuite =
            serde_json::from_str(json).map_err(|e| ComponentError::Fixture {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        suite.path = path;
        Ok(suite)
    }

    pub fn load_file(path: impl AsRef<Path>) -> ComponentResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| ComponentError::Fixture {
            path: path.display().to_string(),
            reason: format!("Failed to read file: {}", e),
        })?;
        let suite = Self::from_json(&json, path)?;
        tracing::debug!(
            path = %path.display(),
            component = %suite.component,
            fixtures = suite.fixtures.len(),
            "loaded fixture file"
        );
        Ok(suite)
    }

    /// Every `*.json` file in `dir`, sorted by file name.
    pub fn load_dir(dir: impl AsRef<Path>) -> ComponentResult<Vec<Self>> {
        let dir = dir.as_ref();
        let unreadable = |e: std::io::Error| ComponentError::Fixture {
            path: dir.display().to_string(),
            reason: format!("Failed to read directory: {}", e),
        };
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(unreadable)? {
            let path = entry.map_err(unreadable)?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();
        paths.iter().map(Self::load_file).collect()
    }

    /// Render every scenario and compare it with its expected markup.
    pub fn verify(&self, ctx: &dyn RenderContext) -> Vec<FixtureResult> {
        self.fixtures
            .iter()
            .map(|fixture| {
                let outcome = match registry::render(ctx, &self.component, fixture.options.clone()) {
                    Ok(html) => {
                        let expected = normalize_html(&fixture.html);
                        let actual = normalize_html(html.as_str());
                        if expected == actual {
                            Outcome::Passed
                        } else {
                            tracing::warn!(
                                component = %self.component,
                                fixture = %fixture.name,
                                "rendered markup differs from fixture"
                            );
                            Outcome::Mismatch { expected, actual }
                        }
                    }
                    Err(err) => {
                        tracing::warn!(
                            component = %self.component,
                            fixture = %fixture.name,
                            error = %err,
                            "fixture failed to render"
                        );
                        Outcome::Failed(err)
                    }
                };
                FixtureResult {
                    name: fixture.name.clone(),
                    outcome,
                }
            })
            .collect()
    }
}

/// Drop whitespace between tags and collapse the remaining runs.
pub fn normalize_html(html: &str) -> String {
    static BETWEEN_TAGS: OnceLock<Regex> = OnceLock::new();
    static RUNS: OnceLock<Regex> = OnceLock::new();
    let between_tags = BETWEEN_TAGS.get_or_init(|| Regex::new(r">\s+<").expect("valid regex"));
    let runs = RUNS.get_or_init(|| Regex::new(r"\s+").expect("valid regex"));

    let html = between_tags.replace_all(html, "><");
    runs.replace_all(&html, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::HtmlContext;

    #[test]
    fn test_normalize_html() {
        let html = "<div class=\"a\">\n  <p>Some   text\n here</p>\n</div>\n";
        assert_eq!(normalize_html(html), r#"<div class="a"><p>Some text here</p></div>"#);
    }

    #[test]
    fn test_verify_reports_each_fixture() {
        let json = r#"{
            "component": "tag",
            "fixtures": [
                { "name": "default", "options": { "text": "Alpha" }, "html": "<strong class=\"govuk-tag\">Alpha</strong>" },
                { "name": "wrong", "options": { "text": "Beta" }, "html": "<strong>Beta</strong>" },
                { "name": "missing text", "options": {}, "html": "" }
            ]
        }"#;
        let suite = FixtureSuite::from_json(json, "tag.json").unwrap();
        let ctx = HtmlContext::default();
        let results = suite.verify(&ctx);

        assert_eq!(results.len(), 3);
        assert!(results[0].passed());
        assert!(matches!(results[1].outcome, Outcome::Mismatch { .. }));
        assert_eq!(
            results[2].outcome,
            Outcome::Failed(ComponentError::MissingField {
                component: "tag".to_string(),
                field: "text".to_string(),
            })
        );
    }

    #[test]
    fn test_missing_directory_is_reported() {
        let err = FixtureSuite::load_dir("no/such/fixture/dir").unwrap_err();
        assert!(
            matches!(err, ComponentError::Fixture { ref path, .. } if path == "no/such/fixture/dir"),
            "unexpected error: {:?}",
            err
        );
    }

    #[test]
    fn test_malformed_file() {
        let err = FixtureSuite::from_json("{ \"fixtures\": [] }", "broken.json").unwrap_err();
        assert!(matches!(err, ComponentError::Fixture { path, .. } if path == "broken.json"));
    }
}
