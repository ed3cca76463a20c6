use super::{class_attr, text_or_html, visually_hidden, Render};
use crate::error::{ComponentError, ComponentResult};
use crate::html::{Html, RenderContext};
use crate::options::{normalize, Attributes, Options};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarningTextOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_fallback_text: Option<String>,
    #[serde(flatten)]
    pub options: Options,
}

pub struct WarningText<'a> {
    ctx: &'a dyn RenderContext,
    content: Html,
    icon_fallback_text: String,
    attributes: Attributes,
}

impl<'a> WarningText<'a> {
    pub fn new(ctx: &'a dyn RenderContext, options: WarningTextOptions) -> ComponentResult<Self> {
        let config = ctx.config();
        let content = text_or_html(ctx, options.text.as_deref(), options.html.as_deref())
            .ok_or_else(|| ComponentError::missing("warning-text", "text"))?;
        let icon_fallback_text = options
            .icon_fallback_text
            .unwrap_or_else(|| config.default_warning_text_icon_fallback_text.clone());
        let defaults = Attributes::new().with("class", config.class("warning-text"));

        Ok(Self {
            ctx,
            content,
            icon_fallback_text,
            attributes: normalize(&options.options, &defaults),
        })
    }
}

impl Render for WarningText<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        let config = ctx.config();
        let icon = ctx.tag(
            "span",
            &class_attr(config.class("warning-text__icon")).with("aria-hidden", "true"),
            Html::raw("!"),
        );
        let text = ctx.tag(
            "strong",
            &class_attr(config.class("warning-text__text")),
            ctx.concat(vec![
                visually_hidden(ctx, ctx.escape(&self.icon_fallback_text)),
                self.content.clone(),
            ]),
        );
        ctx.tag("div", &self.attributes, ctx.concat(vec![icon, text]))
    }
}
