use super::{class_attr, text_or_html, Render};
use crate::error::{ComponentError, ComponentResult};
use crate::html::{Html, RenderContext};
use crate::options::{join_classes, normalize, Attributes, Options};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbItemOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Extra attributes for the link
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbsOptions {
    pub items: Vec<BreadcrumbItemOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapse_on_mobile: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_text: Option<String>,
    #[serde(flatten)]
    pub options: Options,
}

/// One crumb: a link when it has an href, otherwise the current page.
pub struct BreadcrumbItem<'a> {
    ctx: &'a dyn RenderContext,
    content: Html,
    href: Option<String>,
    link_attributes: Attributes,
}

impl<'a> BreadcrumbItem<'a> {
    pub fn new(ctx: &'a dyn RenderContext, item: BreadcrumbItemOptions) -> ComponentResult<Self> {
        let content = text_or_html(ctx, item.text.as_deref(), item.html.as_deref())
            .ok_or_else(|| ComponentError::missing("breadcrumbs", "items.text"))?;
        let link_options = Options {
            classes: None,
            attributes: item.attributes,
        };
        let defaults = class_attr(ctx.config().class("breadcrumbs__link"));

        Ok(Self {
            ctx,
            content,
            href: item.href,
            link_attributes: normalize(&link_options, &defaults),
        })
    }
}

impl Render for BreadcrumbItem<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        let item_attrs = class_attr(ctx.config().class("breadcrumbs__list-item"));
        match &self.href {
            Some(href) => ctx.tag(
                "li",
                &item_attrs,
                ctx.link(self.content.clone(), href, &self.link_attributes),
            ),
            None => ctx.tag(
                "li",
                &item_attrs.with("aria-current", "page"),
                self.content.clone(),
            ),
        }
    }
}

pub struct Breadcrumbs<'a> {
    ctx: &'a dyn RenderContext,
    items: Vec<BreadcrumbItem<'a>>,
    attributes: Attributes,
}

impl<'a> Breadcrumbs<'a> {
    pub fn new(ctx: &'a dyn RenderContext, options: BreadcrumbsOptions) -> ComponentResult<Self> {
        let config = ctx.config();
        let items = options
            .items
            .into_iter()
            .map(|item| BreadcrumbItem::new(ctx, item))
            .collect::<ComponentResult<Vec<_>>>()?;

        let base = config.class("breadcrumbs");
        let collapse = options
            .collapse_on_mobile
            .unwrap_or(config.default_breadcrumbs_collapse_on_mobile);
        let class = if collapse {
            join_classes(&base, &format!("{}--collapse-on-mobile", base))
        } else {
            base
        };
        let label = options
            .label_text
            .unwrap_or_else(|| config.default_breadcrumbs_label_text.clone());
        let defaults = Attributes::new()
            .with("class", class)
            .with("aria", Attributes::new().with("label", label));

        Ok(Self {
            ctx,
            items,
            attributes: normalize(&options.options, &defaults),
        })
    }

    pub fn items(&self) -> &[BreadcrumbItem<'a>] {
        &self.items
    }
}

impl Render for Breadcrumbs<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        let list = ctx.tag(
            "ol",
            &class_attr(ctx.config().class("breadcrumbs__list")),
            ctx.concat(self.items.iter().map(Render::render).collect()),
        );
        ctx.tag("nav", &self.attributes, list)
    }
}
