use super::{text_or_html, Render};
use crate::error::{ComponentError, ComponentResult};
use crate::html::{Html, RenderContext};
use crate::options::{join_classes, normalize, Attributes, Options};
use serde::{Deserialize, Serialize};

/// Colours with a modifier class; anything else renders the plain tag.
const TAG_COLOURS: &[&str] = &[
    "grey",
    "green",
    "turquoise",
    "blue",
    "light-blue",
    "purple",
    "pink",
    "red",
    "orange",
    "yellow",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
    #[serde(flatten)]
    pub options: Options,
}

pub struct Tag<'a> {
    ctx: &'a dyn RenderContext,
    content: Html,
    attributes: Attributes,
}

impl<'a> Tag<'a> {
    pub fn new(ctx: &'a dyn RenderContext, options: TagOptions) -> ComponentResult<Self> {
        let config = ctx.config();
        let content = text_or_html(ctx, options.text.as_deref(), options.html.as_deref())
            .ok_or_else(|| ComponentError::missing("tag", "text"))?;

        let base = config.class("tag");
        let class = match options
            .colour
            .as_deref()
            .or(config.default_tag_colour.as_deref())
        {
            Some(colour) if TAG_COLOURS.contains(&colour) => {
                join_classes(&base, &format!("{}--{}", base, colour))
            }
            _ => base,
        };

        let defaults = Attributes::new().with("class", class);
        Ok(Self {
            ctx,
            content,
            attributes: normalize(&options.options, &defaults),
        })
    }
}

impl Render for Tag<'_> {
    fn render(&self) -> Html {
        self.ctx.tag("strong", &self.attributes, self.content.clone())
    }
}
