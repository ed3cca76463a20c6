use super::{class_attr, content_or_paragraph, rendered_id, text_or_html, Render};
use crate::error::{ComponentError, ComponentResult};
use crate::html::{Html, RenderContext};
use crate::options::{join_classes, normalize, Attributes, Options};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", alias = "html")]
    pub content: Option<String>,
    /// Panel attributes
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub items: Vec<TabOptions>,
    #[serde(flatten)]
    pub options: Options,
}

/// A tab contributes both a list entry and a panel.
pub struct Tab<'a> {
    ctx: &'a dyn RenderContext,
    index: usize,
    id: String,
    label: Html,
    panel: Html,
    panel_attributes: Attributes,
}

impl<'a> Tab<'a> {
    pub fn new(
        ctx: &'a dyn RenderContext,
        id_prefix: &str,
        index: usize,
        tab: TabOptions,
    ) -> ComponentResult<Self> {
        let label = text_or_html(ctx, tab.label.as_deref(), None)
            .ok_or_else(|| ComponentError::missing("tabs", "items.label"))?;
        let id = tab
            .id
            .unwrap_or_else(|| format!("{}-{}", id_prefix, index));
        let panel = content_or_paragraph(ctx, tab.text.as_deref(), tab.content.as_deref())
            .unwrap_or_default();

        let base = ctx.config().class("tabs__panel");
        let class = if index == 1 {
            base
        } else {
            join_classes(&base, &format!("{}--hidden", base))
        };
        let defaults = class_attr(class).with("id", id.as_str());
        let panel_attributes = normalize(&tab.options, &defaults);

        Ok(Self {
            ctx,
            index,
            id: rendered_id(&panel_attributes, id),
            label,
            panel,
            panel_attributes,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn render_list_item(&self) -> Html {
        let ctx = self.ctx;
        let config = ctx.config();
        let base = config.class("tabs__list-item");
        let class = if self.index == 1 {
            join_classes(&base, &format!("{}--selected", base))
        } else {
            base
        };
        let link = ctx.link(
            self.label.clone(),
            &format!("#{}", self.id),
            &class_attr(config.class("tabs__tab")),
        );
        ctx.tag("li", &class_attr(class), link)
    }
}

impl Render for Tab<'_> {
    /// Renders the panel
    fn render(&self) -> Html {
        self.ctx
            .tag("div", &self.panel_attributes, self.panel.clone())
    }
}

pub struct Tabs<'a> {
    ctx: &'a dyn RenderContext,
    title: Html,
    tabs: Vec<Tab<'a>>,
    attributes: Attributes,
}

impl<'a> Tabs<'a> {
    pub fn new(ctx: &'a dyn RenderContext, options: TabsOptions) -> ComponentResult<Self> {
        let config = ctx.config();
        let id_prefix = options.id_prefix.as_deref().unwrap_or("tab");
        let tabs = options
            .items
            .into_iter()
            .enumerate()
            .map(|(i, tab)| Tab::new(ctx, id_prefix, i + 1, tab))
            .collect::<ComponentResult<Vec<_>>>()?;
        let title = ctx.escape(options.title.as_deref().unwrap_or(&config.default_tabs_title));

        let base = config.class("tabs");
        let defaults = Attributes::new()
            .with("class", base.as_str())
            .with("data", Attributes::new().with("module", base))
            .with_opt("id", options.id.as_deref());

        Ok(Self {
            ctx,
            title,
            tabs,
            attributes: normalize(&options.options, &defaults),
        })
    }

    pub fn tabs(&self) -> &[Tab<'a>] {
        &self.tabs
    }
}

impl Render for Tabs<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        let config = ctx.config();
        let title = ctx.tag(
            "h2",
            &class_attr(config.class("tabs__title")),
            self.title.clone(),
        );
        let list = ctx.tag(
            "ul",
            &class_attr(config.class("tabs__list")),
            ctx.concat(self.tabs.iter().map(Tab::render_list_item).collect()),
        );

        let mut parts = vec![title, list];
        parts.extend(self.tabs.iter().map(Render::render));
        ctx.tag("div", &self.attributes, ctx.concat(parts))
    }
}
