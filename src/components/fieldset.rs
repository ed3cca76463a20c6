use super::field::{Legend, LegendOptions};
use super::Render;
use crate::error::ComponentResult;
use crate::html::{Html, RenderContext};
use crate::options::{normalize, Attributes, Options};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldsetOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub described_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Raw markup placed after the legend
    #[serde(skip_serializing_if = "Option::is_none", alias = "html")]
    pub content: Option<String>,
    #[serde(flatten)]
    pub options: Options,
}

pub struct Fieldset<'a> {
    ctx: &'a dyn RenderContext,
    legend: Option<Legend<'a>>,
    content: Html,
    attributes: Attributes,
}

impl<'a> Fieldset<'a> {
    pub fn new(ctx: &'a dyn RenderContext, options: FieldsetOptions) -> ComponentResult<Self> {
        let content = options.content.as_deref().map(Html::raw).unwrap_or_default();
        Self::with_content(ctx, options, content)
    }

    /// Wrap markup built by another component, e.g. date inputs.
    pub fn with_content(
        ctx: &'a dyn RenderContext,
        options: FieldsetOptions,
        content: Html,
    ) -> ComponentResult<Self> {
        let legend = options
            .legend
            .map(|legend| Legend::new(ctx, "fieldset", legend))
            .transpose()?;

        let mut defaults = Attributes::new()
            .with("class", ctx.config().class("fieldset"))
            .with_opt("role", options.role.as_deref());
        if let Some(described_by) = options.described_by.as_deref() {
            defaults.insert("aria", Attributes::new().with("describedby", described_by));
        }

        Ok(Self {
            ctx,
            legend,
            content,
            attributes: normalize(&options.options, &defaults),
        })
    }
}

impl Render for Fieldset<'_> {
    fn render(&self) -> Html {
        let mut parts = Vec::new();
        if let Some(legend) = &self.legend {
            parts.push(legend.render());
        }
        parts.push(self.content.clone());
        self.ctx.tag("fieldset", &self.attributes, self.ctx.concat(parts))
    }
}
