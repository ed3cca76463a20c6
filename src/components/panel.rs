use super::{class_attr, text_or_html, Render};
use crate::error::{ComponentError, ComponentResult};
use crate::heading::HeadingLevel;
use crate::html::{Html, RenderContext};
use crate::options::{join_classes, normalize, Attributes, Options};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub options: Options,
}

pub struct Panel<'a> {
    ctx: &'a dyn RenderContext,
    title: Html,
    heading_level: HeadingLevel,
    body: Option<Html>,
    attributes: Attributes,
}

impl<'a> Panel<'a> {
    pub fn new(ctx: &'a dyn RenderContext, options: PanelOptions) -> ComponentResult<Self> {
        let config = ctx.config();
        let title = text_or_html(
            ctx,
            options.title_text.as_deref(),
            options.title_html.as_deref(),
        )
        .ok_or_else(|| ComponentError::missing("panel", "title_text"))?;
        let heading_level =
            HeadingLevel::or_default(options.heading_level, config.default_panel_heading_level)?;
        let body = text_or_html(ctx, options.text.as_deref(), options.html.as_deref());

        let base = config.class("panel");
        let defaults = Attributes::new()
            .with(
                "class",
                join_classes(&base, &format!("{}--confirmation", base)),
            )
            .with_opt("id", options.id.as_deref());

        Ok(Self {
            ctx,
            title,
            heading_level,
            body,
            attributes: normalize(&options.options, &defaults),
        })
    }
}

impl Render for Panel<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        let config = ctx.config();
        let mut parts = vec![ctx.tag(
            self.heading_level.tag(),
            &class_attr(config.class("panel__title")),
            self.title.clone(),
        )];
        if let Some(body) = &self.body {
            parts.push(ctx.tag(
                "div",
                &class_attr(config.class("panel__body")),
                body.clone(),
            ));
        }
        ctx.tag("div", &self.attributes, ctx.concat(parts))
    }
}
