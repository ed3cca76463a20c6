//! Safe HTML fragments and the rendering context components draw on.

use crate::config::Config;
use crate::options::{AttrValue, Attributes};
use std::fmt;

/// An HTML fragment that is safe to emit as-is.
///
/// Text only becomes `Html` through [`RenderContext::escape`]; [`Html::raw`]
/// is for markup the caller already trusts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Html(String);

impl Html {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap trusted markup without escaping
    pub fn raw(markup: impl Into<String>) -> Self {
        Html(markup.into())
    }

    pub fn push(&mut self, other: Html) {
        self.0.push_str(&other.0);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Html> for Html {
    fn from_iter<I: IntoIterator<Item = Html>>(iter: I) -> Self {
        let mut out = Html::new();
        for part in iter {
            out.push(part);
        }
        out
    }
}

/// Capabilities a host must provide for components to render.
///
/// Every method has a default, so a host usually only supplies
/// [`RenderContext::config`]. Hosts with their own escaping or link helpers
/// override the relevant methods.
pub trait RenderContext {
    fn config(&self) -> &Config;

    fn escape(&self, text: &str) -> Html {
        Html(htmlize::escape_text(text).into_owned())
    }

    fn tag(&self, name: &str, attributes: &Attributes, content: Html) -> Html {
        let mut out = String::with_capacity(name.len() * 2 + content.0.len() + 16);
        out.push('<');
        out.push_str(name);
        write_attributes(&mut out, "", attributes);
        out.push('>');
        out.push_str(&content.0);
        out.push_str("</");
        out.push_str(name);
        out.push('>');
        Html(out)
    }

    /// An element without content or closing tag (`input`, `br`, ...)
    fn void_tag(&self, name: &str, attributes: &Attributes) -> Html {
        let mut out = String::new();
        out.push('<');
        out.push_str(name);
        write_attributes(&mut out, "", attributes);
        out.push('>');
        Html(out)
    }

    fn concat(&self, parts: Vec<Html>) -> Html {
        parts.into_iter().collect()
    }

    /// An anchor; `href` follows the given attributes
    fn link(&self, text: Html, href: &str, attributes: &Attributes) -> Html {
        let attrs = attributes.clone().with("href", href);
        self.tag("a", &attrs, text)
    }
}

/// Standalone rendering context backed by a [`Config`].
#[derive(Debug, Clone, Default)]
pub struct HtmlContext {
    config: Config,
}

impl HtmlContext {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl RenderContext for HtmlContext {
    fn config(&self) -> &Config {
        &self.config
    }
}

fn write_attributes(out: &mut String, prefix: &str, attributes: &Attributes) {
    for (key, value) in attributes.iter() {
        let name = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}-{}", prefix, key.replace('_', "-"))
        };
        if !is_attribute_name(&name) {
            tracing::warn!(attribute = %name, "skipping invalid attribute name");
            continue;
        }
        match value {
            AttrValue::Str(s) => {
                out.push(' ');
                out.push_str(&name);
                out.push_str("=\"");
                out.push_str(&htmlize::escape_attribute(s.as_str()));
                out.push('"');
            }
            AttrValue::Bool(true) => {
                out.push(' ');
                out.push_str(&name);
            }
            AttrValue::Bool(false) => {}
            AttrValue::Map(nested) => write_attributes(out, &name, nested),
        }
    }
}

/// Names that cannot close the tag or start another attribute.
fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_renders_attributes_in_order() {
        let ctx = HtmlContext::default();
        let attrs = Attributes::new()
            .with("class", "a b")
            .with("data", Attributes::new().with("module", "m").with("prevent_double_click", "true"))
            .with("disabled", true)
            .with("hidden", false);
        let html = ctx.tag("div", &attrs, ctx.escape("x"));
        assert_eq!(
            html.as_str(),
            r#"<div class="a b" data-module="m" data-prevent-double-click="true" disabled>x</div>"#
        );
    }

    #[test]
    fn test_escaping() {
        let ctx = HtmlContext::default();
        assert_eq!(ctx.escape("<b>&</b>").as_str(), "&lt;b&gt;&amp;&lt;/b&gt;");
        let attrs = Attributes::new().with("title", "say \"hi\"");
        assert_eq!(
            ctx.void_tag("input", &attrs).as_str(),
            r#"<input title="say &quot;hi&quot;">"#
        );
    }

    #[test]
    fn test_link_places_href_after_attributes() {
        let ctx = HtmlContext::default();
        let attrs = Attributes::new().with("class", "govuk-link");
        assert_eq!(
            ctx.link(ctx.escape("Home"), "/", &attrs).as_str(),
            r#"<a class="govuk-link" href="/">Home</a>"#
        );
    }

    #[test]
    fn test_concat_keeps_order() {
        let ctx = HtmlContext::default();
        let html = ctx.concat(vec![Html::raw("<i>1</i>"), Html::raw("<i>2</i>")]);
        assert_eq!(html.as_str(), "<i>1</i><i>2</i>");
    }

    #[test]
    fn test_invalid_attribute_names_are_skipped() {
        let ctx = HtmlContext::default();
        let attrs = Attributes::new()
            .with("class", "a")
            .with("onclick\"><script>x</script", "1")
            .with("data", Attributes::new().with("bad key", "2").with("ok", "3"))
            .with("", "4");
        assert_eq!(
            ctx.tag("div", &attrs, Html::new()).as_str(),
            r#"<div class="a" data-ok="3"></div>"#
        );
    }
}
