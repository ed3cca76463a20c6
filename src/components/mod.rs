//! Component nodes.
//!
//! Every component is built from a rendering context plus its options,
//! validates required fields in `new`, and renders through [`Render`].
//! Composite components own the child nodes they build and render them in
//! input order.

pub mod accordion;
pub mod back_link;
pub mod breadcrumbs;
pub mod button;
pub mod character_count;
pub mod date_input;
pub mod details;
pub mod error_summary;
pub mod field;
pub mod fieldset;
pub mod inset_text;
pub mod notification_banner;
pub mod pagination;
pub mod panel;
pub mod phase_banner;
pub mod skip_link;
pub mod summary_list;
pub mod table;
pub mod tabs;
pub mod tag;
pub mod task_list;
pub mod warning_text;

use crate::html::{Html, RenderContext};
use crate::options::Attributes;
use serde::{Deserialize, Deserializer};

/// A constructed component that can produce its markup.
///
/// Rendering reads only stored state, so calling it repeatedly returns the
/// same fragment.
pub trait Render {
    fn render(&self) -> Html;
}

/// `html` is trusted markup and wins over `text`, which is escaped.
pub(crate) fn text_or_html(
    ctx: &dyn RenderContext,
    text: Option<&str>,
    html: Option<&str>,
) -> Option<Html> {
    match (html, text) {
        (Some(html), _) => Some(Html::raw(html)),
        (None, Some(text)) => Some(ctx.escape(text)),
        (None, None) => None,
    }
}

/// Raw `content` if given, otherwise `text` as a body paragraph.
pub(crate) fn content_or_paragraph(
    ctx: &dyn RenderContext,
    text: Option<&str>,
    content: Option<&str>,
) -> Option<Html> {
    match (content, text) {
        (Some(content), _) => Some(Html::raw(content)),
        (None, Some(text)) => Some(ctx.tag(
            "p",
            &class_attr(ctx.config().class("body")),
            ctx.escape(text),
        )),
        (None, None) => None,
    }
}

pub(crate) fn class_attr(class: impl Into<String>) -> Attributes {
    Attributes::new().with("class", class.into())
}

/// The id an element renders with once caller attributes are merged.
pub(crate) fn rendered_id(attributes: &Attributes, default: String) -> String {
    attributes
        .get_str("id")
        .map(str::to_string)
        .unwrap_or(default)
}

pub(crate) fn visually_hidden(ctx: &dyn RenderContext, content: Html) -> Html {
    ctx.tag(
        "span",
        &class_attr(ctx.config().class("visually-hidden")),
        content,
    )
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Int(i64),
    Float(f64),
}

/// Accepts `"3"` or `3` for fields that end up as text.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|value| match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Int(i) => i.to_string(),
            StringOrNumber::Float(f) => f.to_string(),
        }),
    )
}
