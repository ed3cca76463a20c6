use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single attribute value.
///
/// Nested maps are used for namespaced attributes, so
/// `data: { module: "govuk-button" }` renders as `data-module="govuk-button"`.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    /// `true` renders a bare attribute, `false` omits it
    Bool(bool),
    Map(Attributes),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Str(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<Attributes> for AttrValue {
    fn from(value: Attributes) -> Self {
        AttrValue::Map(value)
    }
}

/// Insertion-ordered attribute map. Rendering follows this order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(Vec<(String, AttrValue)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Attributes::insert`]
    pub fn with(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Like [`Attributes::with`], skipping `None`
    pub fn with_opt<V: Into<AttrValue>>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Sets `key`, replacing an existing value in place so its position is kept.
    pub fn insert(&mut self, key: &str, value: impl Into<AttrValue>) {
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut AttrValue> {
        self.0.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttrValue::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        let pos = self.0.iter().position(|(k, _)| k == key)?;
        Some(self.0.remove(pos).1)
    }

    pub fn class(&self) -> Option<&str> {
        self.get_str("class")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k.as_ref(), v);
        }
        attrs
    }
}

impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttrValue::Str(s) => serializer.serialize_str(s),
            AttrValue::Bool(b) => serializer.serialize_bool(*b),
            AttrValue::Map(m) => m.serialize(serializer),
        }
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct AttrValueVisitor;

impl<'de> Visitor<'de> for AttrValueVisitor {
    type Value = AttrValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, number, boolean or map of attributes")
    }

    fn visit_bool<E>(self, v: bool) -> Result<AttrValue, E> {
        Ok(AttrValue::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<AttrValue, E> {
        Ok(AttrValue::Str(v.to_string()))
    }

    fn visit_u64<E>(self, v: u64) -> Result<AttrValue, E> {
        Ok(AttrValue::Str(v.to_string()))
    }

    fn visit_f64<E>(self, v: f64) -> Result<AttrValue, E> {
        Ok(AttrValue::Str(v.to_string()))
    }

    fn visit_str<E>(self, v: &str) -> Result<AttrValue, E> {
        Ok(AttrValue::Str(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<AttrValue, E> {
        Ok(AttrValue::Str(v))
    }

    fn visit_unit<E>(self) -> Result<AttrValue, E> {
        Ok(AttrValue::Bool(false))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<AttrValue, A::Error> {
        AttributesVisitor.visit_map(map).map(AttrValue::Map)
    }
}

impl<'de> Deserialize<'de> for AttrValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AttrValueVisitor)
    }
}

struct AttributesVisitor;

impl<'de> Visitor<'de> for AttributesVisitor {
    type Value = Attributes;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of attributes")
    }

    fn visit_unit<E>(self) -> Result<Attributes, E> {
        Ok(Attributes::new())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Attributes, A::Error> {
        let mut attrs = Attributes::new();
        while let Some((key, value)) = map.next_entry::<String, Option<AttrValue>>()? {
            if let Some(value) = value {
                attrs.insert(&key, value);
            }
        }
        Ok(attrs)
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AttributesVisitor)
    }
}

/// Caller-supplied `classes` and `attributes`, accepted by every component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classes(mut self, classes: &str) -> Self {
        self.classes = Some(classes.to_string());
        self
    }

    pub fn attribute(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(key, value);
        self
    }
}

/// Join two class strings: `trim(left + " " + right)`.
pub fn join_classes(left: &str, right: &str) -> String {
    format!("{} {}", left, right).trim().to_string()
}

/// Merge caller options onto a component's default attributes.
///
/// Neither input is modified. Defaults keep their declared order; caller-only
/// attributes follow them. `class` becomes the default class followed by the
/// caller's `classes` (and any `attributes.class`), and a default
/// `data.module` marker survives caller `data` entries.
pub fn normalize(options: &Options, defaults: &Attributes) -> Attributes {
    let mut merged = defaults.clone();
    let mut caller = nest_prefixed(options.attributes.clone());

    let mut class = join_classes(
        defaults.class().unwrap_or(""),
        options.classes.as_deref().unwrap_or(""),
    );
    if let Some(AttrValue::Str(extra)) = caller.remove("class") {
        class = join_classes(&class, &extra);
    }
    if class.is_empty() {
        merged.remove("class");
    } else if merged.get("class").is_some() {
        merged.insert("class", class);
    } else {
        merged.0.insert(0, ("class".to_string(), AttrValue::Str(class)));
    }

    for (key, value) in caller.0 {
        match (merged.get_mut(&key), value) {
            (Some(AttrValue::Map(existing)), AttrValue::Map(incoming)) => {
                merge_nested(existing, incoming, key == "data");
            }
            (_, value) => merged.insert(&key, value),
        }
    }

    merged
}

/// Rendered form of a nested key: `prevent_double_click` and
/// `prevent-double-click` name the same attribute.
fn attr_name(key: &str) -> String {
    key.replace('_', "-")
}

fn merge_nested(existing: &mut Attributes, incoming: Attributes, keep_module: bool) {
    for (key, value) in incoming.0 {
        let name = attr_name(&key);
        if keep_module && name == "module" && existing.get("module").is_some() {
            continue;
        }
        match existing.0.iter_mut().find(|(k, _)| attr_name(k) == name) {
            Some(slot) => slot.1 = value,
            None => existing.0.push((key, value)),
        }
    }
}

/// Fold flat `data-*` and `aria-*` keys into the nested `data` and `aria`
/// maps, so `data-module` and `data: { module }` merge as one attribute.
fn nest_prefixed(attributes: Attributes) -> Attributes {
    let mut nested = Attributes::new();
    for (key, value) in attributes.0 {
        let prefixed = key
            .split_once('-')
            .filter(|(prefix, rest)| matches!(*prefix, "data" | "aria") && !rest.is_empty());
        let (key, value) = match (prefixed, value) {
            (Some((prefix, rest)), value @ (AttrValue::Str(_) | AttrValue::Bool(_))) => {
                (prefix.to_string(), AttrValue::Map(Attributes::new().with(rest, value)))
            }
            (_, value) => (key.clone(), value),
        };
        match (nested.get_mut(&key), value) {
            (Some(AttrValue::Map(existing)), AttrValue::Map(incoming)) => {
                merge_nested(existing, incoming, false);
            }
            (_, value) => nested.insert(&key, value),
        }
    }
    nested
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Attributes {
        Attributes::new().with("class", "govuk-button")
    }

    #[test]
    fn test_class_concatenation_law() {
        let cases = [None, Some(""), Some("extra"), Some("one two"), Some("  padded ")];
        for classes in cases {
            let options = Options {
                classes: classes.map(str::to_string),
                ..Options::default()
            };
            let result = normalize(&options, &defaults());
            let expected = format!("govuk-button {}", classes.unwrap_or(""));
            assert_eq!(result.class(), Some(expected.trim()));
        }
    }

    #[test]
    fn test_blank_classes_leave_no_trailing_space() {
        let result = normalize(&Options::new().classes(""), &defaults());
        assert_eq!(result.class(), Some("govuk-button"));
    }

    #[test]
    fn test_caller_classes_without_default_class() {
        let result = normalize(&Options::new().classes("app-thing"), &Attributes::new());
        assert_eq!(result.class(), Some("app-thing"));
        assert!(normalize(&Options::new(), &Attributes::new()).is_empty());
    }

    #[test]
    fn test_data_module_survives_caller_data() {
        let defaults = Attributes::new()
            .with("class", "govuk-button")
            .with("data", Attributes::new().with("module", "govuk-button"));
        let options = Options::new().attribute(
            "data",
            Attributes::new()
                .with("module", "something-else")
                .with("tracking", "yes"),
        );

        let result = normalize(&options, &defaults);
        let Some(AttrValue::Map(data)) = result.get("data") else {
            panic!("expected nested data attributes");
        };
        assert_eq!(data.get_str("module"), Some("govuk-button"));
        assert_eq!(data.get_str("tracking"), Some("yes"));
    }

    #[test]
    fn test_normalize_does_not_mutate_inputs() {
        let options = Options::new()
            .classes("extra")
            .attribute("id", "first");
        let defaults = defaults();
        let before = (options.clone(), defaults.clone());

        let first = normalize(&options, &defaults);
        let second = normalize(&options, &defaults);

        assert_eq!(first, second);
        assert_eq!(before, (options, defaults));
    }

    #[test]
    fn test_caller_attribute_order() {
        let defaults = Attributes::new().with("class", "a").with("href", "/x");
        let options = Options::new().attribute("lang", "en").attribute("href", "/y");
        let result = normalize(&options, &defaults);
        let keys: Vec<&str> = result.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["class", "href", "lang"]);
        assert_eq!(result.get_str("href"), Some("/y"));
    }

    #[test]
    fn test_deserialize_preserves_order_and_nesting() {
        let attrs: Attributes =
            serde_json::from_str(r#"{"lang":"en","data":{"a":"1"},"hidden":true,"n":3,"x":null}"#)
                .unwrap();
        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["lang", "data", "hidden", "n"]);
        assert_eq!(attrs.get_str("n"), Some("3"));
        assert_eq!(attrs.get("hidden"), Some(&AttrValue::Bool(true)));
    }

    #[test]
    fn test_flat_aria_key_overrides_nested_default() {
        let defaults = Attributes::new()
            .with("class", "govuk-breadcrumbs")
            .with("aria", Attributes::new().with("label", "Breadcrumb"));
        let options = Options::new().attribute("aria-label", "Custom trail");

        let result = normalize(&options, &defaults);
        let keys: Vec<&str> = result.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["class", "aria"]);
        let Some(AttrValue::Map(aria)) = result.get("aria") else {
            panic!("expected nested aria attributes");
        };
        assert_eq!(aria.len(), 1);
        assert_eq!(aria.get_str("label"), Some("Custom trail"));
    }

    #[test]
    fn test_flat_data_module_cannot_replace_marker() {
        let defaults = Attributes::new()
            .with("class", "govuk-button")
            .with("data", Attributes::new().with("module", "govuk-button"));
        let options = Options::new()
            .attribute("data-module", "app-button")
            .attribute("data-tracking", "start");

        let result = normalize(&options, &defaults);
        let Some(AttrValue::Map(data)) = result.get("data") else {
            panic!("expected nested data attributes");
        };
        assert_eq!(data.get_str("module"), Some("govuk-button"));
        assert_eq!(data.get_str("tracking"), Some("start"));
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_dashed_and_underscored_data_keys_match() {
        let defaults = Attributes::new().with(
            "data",
            Attributes::new().with("prevent_double_click", "false"),
        );
        for options in [
            Options::new().attribute("data-prevent-double-click", "true"),
            Options::new().attribute(
                "data",
                Attributes::new().with("prevent-double-click", "true"),
            ),
        ] {
            let result = normalize(&options, &defaults);
            let Some(AttrValue::Map(data)) = result.get("data") else {
                panic!("expected nested data attributes");
            };
            assert_eq!(data.len(), 1);
            assert_eq!(data.get_str("prevent_double_click"), Some("true"));
        }
    }

    #[test]
    fn test_flat_prefixed_keys_without_defaults_are_grouped() {
        let options = Options::new()
            .attribute("data-a", "1")
            .attribute("lang", "en")
            .attribute("data-b", "2");
        let result = normalize(&options, &Attributes::new());
        let keys: Vec<&str> = result.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["data", "lang"]);
    }
}
