use super::{text_or_html, Render};
use crate::error::ComponentResult;
use crate::html::{Html, RenderContext};
use crate::options::{normalize, Attributes, Options};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackLinkOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(flatten)]
    pub options: Options,
}

pub struct BackLink<'a> {
    ctx: &'a dyn RenderContext,
    content: Html,
    href: String,
    attributes: Attributes,
}

impl<'a> BackLink<'a> {
    pub fn new(ctx: &'a dyn RenderContext, options: BackLinkOptions) -> ComponentResult<Self> {
        let config = ctx.config();
        let content = text_or_html(ctx, options.text.as_deref(), options.html.as_deref())
            .unwrap_or_else(|| ctx.escape(&config.default_back_link_text));
        let href = options
            .href
            .unwrap_or_else(|| config.default_back_link_href.clone());
        let defaults = Attributes::new().with("class", config.class("back-link"));

        Ok(Self {
            ctx,
            content,
            href,
            attributes: normalize(&options.options, &defaults),
        })
    }
}

impl Render for BackLink<'_> {
    fn render(&self) -> Html {
        self.ctx
            .link(self.content.clone(), &self.href, &self.attributes)
    }
}
