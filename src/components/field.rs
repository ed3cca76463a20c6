//! Form parts shared by the input components: label, hint, error message
//! and fieldset legend.

use super::{class_attr, rendered_id, text_or_html, visually_hidden, Render};
use crate::error::{ComponentError, ComponentResult};
use crate::heading::HeadingLevel;
use crate::html::{Html, RenderContext};
use crate::options::{join_classes, normalize, Attributes, Options};
use serde::{Deserialize, Serialize};

const SIZES: &[&str] = &["s", "m", "l", "xl"];

/// `block` plus its size modifier, when the size is one we know
fn sized_class(block: String, size: Option<&str>) -> String {
    match size {
        Some(size) if SIZES.contains(&size) => join_classes(&block, &format!("{}--{}", block, size)),
        _ => block,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub is_page_heading: bool,
    #[serde(flatten)]
    pub options: Options,
}

pub struct Label<'a> {
    ctx: &'a dyn RenderContext,
    content: Html,
    is_page_heading: bool,
    attributes: Attributes,
}

impl<'a> Label<'a> {
    pub fn new(
        ctx: &'a dyn RenderContext,
        component: &str,
        for_id: Option<&str>,
        label: LabelOptions,
    ) -> ComponentResult<Self> {
        let content = text_or_html(ctx, label.text.as_deref(), label.html.as_deref())
            .ok_or_else(|| ComponentError::missing(component, "label.text"))?;
        let class = sized_class(ctx.config().class("label"), label.size.as_deref());
        let defaults = class_attr(class).with_opt("for", for_id);

        Ok(Self {
            ctx,
            content,
            is_page_heading: label.is_page_heading,
            attributes: normalize(&label.options, &defaults),
        })
    }
}

impl Render for Label<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        let label = ctx.tag("label", &self.attributes, self.content.clone());
        if self.is_page_heading {
            ctx.tag("h1", &class_attr(ctx.config().class("label-wrapper")), label)
        } else {
            label
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HintOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(flatten)]
    pub options: Options,
}

pub struct Hint<'a> {
    ctx: &'a dyn RenderContext,
    id: String,
    content: Html,
    attributes: Attributes,
}

impl<'a> Hint<'a> {
    /// `field_id` is the id of the input; the hint takes `<field_id>-hint`
    pub fn new(
        ctx: &'a dyn RenderContext,
        component: &str,
        field_id: &str,
        hint: HintOptions,
    ) -> ComponentResult<Self> {
        let content = text_or_html(ctx, hint.text.as_deref(), hint.html.as_deref())
            .ok_or_else(|| ComponentError::missing(component, "hint.text"))?;
        let id = format!("{}-hint", field_id);
        let defaults = class_attr(ctx.config().class("hint")).with("id", id.as_str());
        let attributes = normalize(&hint.options, &defaults);

        Ok(Self {
            ctx,
            id: rendered_id(&attributes, id),
            content,
            attributes,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Render for Hint<'_> {
    fn render(&self) -> Html {
        self.ctx.tag("div", &self.attributes, self.content.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMessageOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Prefix read out before the message, "Error" by default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visually_hidden_text: Option<String>,
    #[serde(flatten)]
    pub options: Options,
}

pub struct ErrorMessage<'a> {
    ctx: &'a dyn RenderContext,
    id: String,
    prefix: Html,
    content: Html,
    attributes: Attributes,
}

impl<'a> ErrorMessage<'a> {
    pub fn new(
        ctx: &'a dyn RenderContext,
        component: &str,
        field_id: &str,
        error: ErrorMessageOptions,
    ) -> ComponentResult<Self> {
        let content = text_or_html(ctx, error.text.as_deref(), error.html.as_deref())
            .ok_or_else(|| ComponentError::missing(component, "error_message.text"))?;
        let id = format!("{}-error", field_id);
        let prefix = ctx.escape(&format!(
            "{}:",
            error.visually_hidden_text.as_deref().unwrap_or("Error")
        ));
        let defaults = class_attr(ctx.config().class("error-message")).with("id", id.as_str());
        let attributes = normalize(&error.options, &defaults);

        Ok(Self {
            ctx,
            id: rendered_id(&attributes, id),
            prefix,
            content,
            attributes,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Render for ErrorMessage<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        ctx.tag(
            "p",
            &self.attributes,
            ctx.concat(vec![
                visually_hidden(ctx, self.prefix.clone()),
                Html::raw(" "),
                self.content.clone(),
            ]),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub is_page_heading: bool,
    /// Only used with `is_page_heading`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_level: Option<i64>,
    #[serde(flatten)]
    pub options: Options,
}

pub struct Legend<'a> {
    ctx: &'a dyn RenderContext,
    content: Html,
    heading: Option<HeadingLevel>,
    attributes: Attributes,
}

impl<'a> Legend<'a> {
    pub fn new(
        ctx: &'a dyn RenderContext,
        component: &str,
        legend: LegendOptions,
    ) -> ComponentResult<Self> {
        let content = text_or_html(ctx, legend.text.as_deref(), legend.html.as_deref())
            .ok_or_else(|| ComponentError::missing(component, "legend.text"))?;
        let heading = if legend.is_page_heading {
            Some(HeadingLevel::or_default(legend.heading_level, 1)?)
        } else {
            None
        };
        let class = sized_class(ctx.config().class("fieldset__legend"), legend.size.as_deref());

        Ok(Self {
            ctx,
            content,
            heading,
            attributes: normalize(&legend.options, &class_attr(class)),
        })
    }
}

impl Render for Legend<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        let content = match self.heading {
            Some(level) => ctx.tag(
                level.tag(),
                &class_attr(ctx.config().class("fieldset__heading")),
                self.content.clone(),
            ),
            None => self.content.clone(),
        };
        ctx.tag("legend", &self.attributes, content)
    }
}

/// Space-joined `aria-describedby` value, `None` when nothing applies.
pub(crate) fn described_by<'s>(ids: impl IntoIterator<Item = Option<&'s str>>) -> Option<String> {
    let ids: Vec<&str> = ids.into_iter().flatten().filter(|id| !id.is_empty()).collect();
    if ids.is_empty() {
        None
    } else {
        Some(ids.join(" "))
    }
}
