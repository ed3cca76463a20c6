use super::tag::{Tag, TagOptions};
use super::{class_attr, text_or_html, Render};
use crate::error::{ComponentError, ComponentResult};
use crate::html::{Html, RenderContext};
use crate::options::{join_classes, normalize, Attributes, Options};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseBannerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<TagOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(flatten)]
    pub options: Options,
}

pub struct PhaseBanner<'a> {
    ctx: &'a dyn RenderContext,
    tag: Tag<'a>,
    content: Html,
    attributes: Attributes,
}

impl<'a> PhaseBanner<'a> {
    pub fn new(ctx: &'a dyn RenderContext, options: PhaseBannerOptions) -> ComponentResult<Self> {
        let config = ctx.config();
        let mut tag_options = options
            .tag
            .ok_or_else(|| ComponentError::missing("phase-banner", "tag"))?;
        tag_options.options.classes = Some(join_classes(
            &config.class("phase-banner__content__tag"),
            tag_options.options.classes.as_deref().unwrap_or(""),
        ));
        let tag = Tag::new(ctx, tag_options)?;
        let content = text_or_html(ctx, options.text.as_deref(), options.html.as_deref())
            .ok_or_else(|| ComponentError::missing("phase-banner", "text"))?;
        let defaults = Attributes::new().with("class", config.class("phase-banner"));

        Ok(Self {
            ctx,
            tag,
            content,
            attributes: normalize(&options.options, &defaults),
        })
    }
}

impl Render for PhaseBanner<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        let config = ctx.config();
        let text = ctx.tag(
            "span",
            &class_attr(config.class("phase-banner__text")),
            self.content.clone(),
        );
        let paragraph = ctx.tag(
            "p",
            &class_attr(config.class("phase-banner__content")),
            ctx.concat(vec![self.tag.render(), text]),
        );
        ctx.tag("div", &self.attributes, paragraph)
    }
}
