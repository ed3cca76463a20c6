use super::{text_or_html, Render};
use crate::error::{ComponentError, ComponentResult};
use crate::html::{Html, RenderContext};
use crate::options::{normalize, Attributes, Options};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsetTextOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub options: Options,
}

pub struct InsetText<'a> {
    ctx: &'a dyn RenderContext,
    content: Html,
    attributes: Attributes,
}

impl<'a> InsetText<'a> {
    pub fn new(ctx: &'a dyn RenderContext, options: InsetTextOptions) -> ComponentResult<Self> {
        let content = text_or_html(ctx, options.text.as_deref(), options.html.as_deref())
            .ok_or_else(|| ComponentError::missing("inset-text", "text"))?;
        let defaults = Attributes::new()
            .with("class", ctx.config().class("inset-text"))
            .with_opt("id", options.id.as_deref());

        Ok(Self {
            ctx,
            content,
            attributes: normalize(&options.options, &defaults),
        })
    }
}

impl Render for InsetText<'_> {
    fn render(&self) -> Html {
        self.ctx.tag("div", &self.attributes, self.content.clone())
    }
}
