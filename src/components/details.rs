use super::{class_attr, text_or_html, Render};
use crate::error::{ComponentError, ComponentResult};
use crate::html::{Html, RenderContext};
use crate::options::{normalize, Attributes, Options};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub open: bool,
    #[serde(flatten)]
    pub options: Options,
}

pub struct Details<'a> {
    ctx: &'a dyn RenderContext,
    summary: Html,
    content: Html,
    attributes: Attributes,
}

impl<'a> Details<'a> {
    pub fn new(ctx: &'a dyn RenderContext, options: DetailsOptions) -> ComponentResult<Self> {
        let summary = text_or_html(
            ctx,
            options.summary_text.as_deref(),
            options.summary_html.as_deref(),
        )
        .ok_or_else(|| ComponentError::missing("details", "summary_text"))?;
        let content = text_or_html(ctx, options.text.as_deref(), options.html.as_deref())
            .ok_or_else(|| ComponentError::missing("details", "text"))?;

        let defaults = Attributes::new()
            .with("class", ctx.config().class("details"))
            .with_opt("id", options.id.as_deref())
            .with("open", options.open);

        Ok(Self {
            ctx,
            summary,
            content,
            attributes: normalize(&options.options, &defaults),
        })
    }
}

impl Render for Details<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        let config = ctx.config();
        let summary = ctx.tag(
            "summary",
            &class_attr(config.class("details__summary")),
            ctx.tag(
                "span",
                &class_attr(config.class("details__summary-text")),
                self.summary.clone(),
            ),
        );
        let text = ctx.tag(
            "div",
            &class_attr(config.class("details__text")),
            self.content.clone(),
        );
        ctx.tag("details", &self.attributes, ctx.concat(vec![summary, text]))
    }
}
