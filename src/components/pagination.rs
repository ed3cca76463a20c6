use super::{class_attr, string_or_number, text_or_html, visually_hidden, Render};
use crate::error::{ComponentError, ComponentResult};
use crate::html::{Html, RenderContext};
use crate::options::{join_classes, normalize, Attributes, Options};
use serde::{Deserialize, Serialize};

const PREV_ARROW: &str = "m6.5938-0.0078125-6.7266 6.7266 6.7441 6.4062 1.377-1.449-4.1856-3.9768h12.896v-2h-12.984l4.2931-4.293-1.414-1.414z";
const NEXT_ARROW: &str = "m8.107-0.0078125-1.4136 1.414 4.2926 4.293h-12.986v2h12.896l-4.1855 3.9766 1.377 1.4492 6.7441-6.4062-6.7246-6.7266z";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationLinkOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Secondary label shown under the title in block mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_text: Option<String>,
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationItemOptions {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "string_or_number"
    )]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub current: bool,
    pub ellipsis: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visually_hidden_text: Option<String>,
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationOptions {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<PaginationItemOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<PaginationLinkOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PaginationLinkOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmark_label: Option<String>,
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    fn short(self) -> &'static str {
        match self {
            Direction::Previous => "prev",
            Direction::Next => "next",
        }
    }
}

/// A numbered page link or an ellipsis gap.
pub enum PaginationItem<'a> {
    Page {
        ctx: &'a dyn RenderContext,
        number: String,
        href: String,
        current: bool,
        attributes: Attributes,
    },
    Ellipsis {
        ctx: &'a dyn RenderContext,
    },
}

impl<'a> PaginationItem<'a> {
    pub fn new(ctx: &'a dyn RenderContext, item: PaginationItemOptions) -> ComponentResult<Self> {
        if item.ellipsis {
            return Ok(PaginationItem::Ellipsis { ctx });
        }
        let number = item
            .number
            .ok_or_else(|| ComponentError::missing("pagination", "items.number"))?;
        let href = item
            .href
            .ok_or_else(|| ComponentError::missing("pagination", "items.href"))?;
        let label = item
            .visually_hidden_text
            .unwrap_or_else(|| format!("Page {}", number));
        let aria = Attributes::new()
            .with("label", label)
            .with_opt("current", item.current.then_some("page"));
        let defaults = class_attr(join_classes(
            &ctx.config().class("link"),
            &ctx.config().class("pagination__link"),
        ))
        .with("aria", aria);

        Ok(PaginationItem::Page {
            ctx,
            number,
            href,
            current: item.current,
            attributes: normalize(&item.options, &defaults),
        })
    }
}

impl Render for PaginationItem<'_> {
    fn render(&self) -> Html {
        match self {
            PaginationItem::Ellipsis { ctx } => {
                let base = ctx.config().class("pagination__item");
                let class = join_classes(&base, &format!("{}--ellipses", base));
                ctx.tag("li", &class_attr(class), Html::raw("&ctdot;"))
            }
            PaginationItem::Page {
                ctx,
                number,
                href,
                current,
                attributes,
            } => {
                let base = ctx.config().class("pagination__item");
                let class = if *current {
                    join_classes(&base, &format!("{}--current", base))
                } else {
                    base
                };
                let link = ctx.link(ctx.escape(number), href, attributes);
                ctx.tag("li", &class_attr(class), link)
            }
        }
    }
}

/// The previous or next link, outside the numbered list.
pub struct PaginationLink<'a> {
    ctx: &'a dyn RenderContext,
    direction: Direction,
    href: String,
    title: Html,
    label: Option<Html>,
    block: bool,
    attributes: Attributes,
}

impl<'a> PaginationLink<'a> {
    pub fn new(
        ctx: &'a dyn RenderContext,
        direction: Direction,
        block: bool,
        link: PaginationLinkOptions,
    ) -> ComponentResult<Self> {
        let config = ctx.config();
        let field = match direction {
            Direction::Previous => "previous.href",
            Direction::Next => "next.href",
        };
        let href = link
            .href
            .ok_or_else(|| ComponentError::missing("pagination", field))?;

        let title = match text_or_html(ctx, link.text.as_deref(), link.html.as_deref()) {
            Some(title) => title,
            None => {
                let default = match direction {
                    Direction::Previous => &config.default_pagination_previous_text,
                    Direction::Next => &config.default_pagination_next_text,
                };
                let mut title = ctx.escape(default);
                title.push(visually_hidden(ctx, ctx.escape(" page")));
                title
            }
        };
        let label = if block {
            link.label_text.as_deref().map(|text| ctx.escape(text))
        } else {
            None
        };

        let defaults = class_attr(join_classes(
            &config.class("link"),
            &config.class("pagination__link"),
        ))
        .with("rel", direction.short());

        Ok(Self {
            ctx,
            direction,
            href,
            title,
            label,
            block,
            attributes: normalize(&link.options, &defaults),
        })
    }

    fn arrow(&self) -> Html {
        let ctx = self.ctx;
        let icon = ctx.config().class("pagination__icon");
        let (modifier, path) = match self.direction {
            Direction::Previous => ("prev", PREV_ARROW),
            Direction::Next => ("next", NEXT_ARROW),
        };
        let attrs = class_attr(join_classes(&icon, &format!("{}--{}", icon, modifier)))
            .with("xmlns", "http://www.w3.org/2000/svg")
            .with("height", "13")
            .with("width", "15")
            .with("aria-hidden", "true")
            .with("focusable", "false")
            .with("viewBox", "0 0 15 13");
        ctx.tag(
            "svg",
            &attrs,
            ctx.tag("path", &Attributes::new().with("d", path), Html::new()),
        )
    }
}

impl Render for PaginationLink<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        let config = ctx.config();

        let title_base = config.class("pagination__link-title");
        let title_class = if self.label.is_some() {
            join_classes(&title_base, &format!("{}--decorated", title_base))
        } else {
            title_base
        };
        let title = ctx.tag("span", &class_attr(title_class), self.title.clone());

        let mut parts = Vec::new();
        // block links and the previous link lead with the arrow
        if self.block || self.direction == Direction::Previous {
            parts.push(self.arrow());
            parts.push(title);
        } else {
            parts.push(title);
            parts.push(self.arrow());
        }
        if let Some(label) = &self.label {
            parts.push(visually_hidden(ctx, Html::raw(":")));
            parts.push(ctx.tag(
                "span",
                &class_attr(config.class("pagination__link-label")),
                label.clone(),
            ));
        }

        let link = ctx.link(ctx.concat(parts), &self.href, &self.attributes);
        ctx.tag(
            "div",
            &class_attr(config.class(&format!("pagination__{}", self.direction.short()))),
            link,
        )
    }
}

pub struct Pagination<'a> {
    ctx: &'a dyn RenderContext,
    items: Vec<PaginationItem<'a>>,
    previous: Option<PaginationLink<'a>>,
    next: Option<PaginationLink<'a>>,
    attributes: Attributes,
}

impl<'a> Pagination<'a> {
    pub fn new(ctx: &'a dyn RenderContext, options: PaginationOptions) -> ComponentResult<Self> {
        let config = ctx.config();
        let block = options.items.is_empty();

        let items = options
            .items
            .into_iter()
            .map(|item| PaginationItem::new(ctx, item))
            .collect::<ComponentResult<Vec<_>>>()?;
        let previous = options
            .previous
            .map(|link| PaginationLink::new(ctx, Direction::Previous, block, link))
            .transpose()?;
        let next = options
            .next
            .map(|link| PaginationLink::new(ctx, Direction::Next, block, link))
            .transpose()?;

        let base = config.class("pagination");
        let class = if block {
            join_classes(&base, &format!("{}--block", base))
        } else {
            base
        };
        let label = options
            .landmark_label
            .unwrap_or_else(|| config.default_pagination_landmark_label.clone());
        let defaults = class_attr(class).with("aria", Attributes::new().with("label", label));

        Ok(Self {
            ctx,
            items,
            previous,
            next,
            attributes: normalize(&options.options, &defaults),
        })
    }

    pub fn items(&self) -> &[PaginationItem<'a>] {
        &self.items
    }
}

impl Render for Pagination<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        let mut parts = Vec::new();
        if let Some(previous) = &self.previous {
            parts.push(previous.render());
        }
        if !self.items.is_empty() {
            parts.push(ctx.tag(
                "ul",
                &class_attr(ctx.config().class("pagination__list")),
                ctx.concat(self.items.iter().map(Render::render).collect()),
            ));
        }
        if let Some(next) = &self.next {
            parts.push(next.render());
        }
        ctx.tag("nav", &self.attributes, ctx.concat(parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::HtmlContext;

    fn page(number: &str, current: bool) -> PaginationItemOptions {
        PaginationItemOptions {
            number: Some(number.to_string()),
            href: Some(format!("/page/{}", number)),
            current,
            ..PaginationItemOptions::default()
        }
    }

    #[test]
    fn test_numbered_items() {
        let ctx = HtmlContext::default();
        let pagination = Pagination::new(
            &ctx,
            PaginationOptions {
                items: vec![
                    page("1", true),
                    PaginationItemOptions {
                        ellipsis: true,
                        ..PaginationItemOptions::default()
                    },
                    page("9", false),
                ],
                ..PaginationOptions::default()
            },
        )
        .unwrap();
        assert_eq!(pagination.items().len(), 3);
        assert_eq!(
            pagination.render().as_str(),
            concat!(
                r#"<nav class="govuk-pagination" aria-label="Pagination"><ul class="govuk-pagination__list">"#,
                r#"<li class="govuk-pagination__item govuk-pagination__item--current">"#,
                r#"<a class="govuk-link govuk-pagination__link" aria-label="Page 1" aria-current="page" href="/page/1">1</a></li>"#,
                r#"<li class="govuk-pagination__item govuk-pagination__item--ellipses">&ctdot;</li>"#,
                r#"<li class="govuk-pagination__item">"#,
                r#"<a class="govuk-link govuk-pagination__link" aria-label="Page 9" href="/page/9">9</a></li>"#,
                r#"</ul></nav>"#,
            )
        );
    }

    #[test]
    fn test_default_text_gets_hidden_page_suffix() {
        let ctx = HtmlContext::default();
        let link = PaginationLink::new(
            &ctx,
            Direction::Next,
            false,
            PaginationLinkOptions {
                href: Some("/next".to_string()),
                ..PaginationLinkOptions::default()
            },
        )
        .unwrap();
        let html = link.render().into_string();
        assert!(html.contains(
            r#"<span class="govuk-pagination__link-title">Next<span class="govuk-visually-hidden"> page</span></span><svg"#
        ));
        assert!(html.contains(r#"rel="next" href="/next""#));
    }

    #[test]
    fn test_custom_text_has_no_suffix() {
        let ctx = HtmlContext::default();
        let link = PaginationLink::new(
            &ctx,
            Direction::Previous,
            false,
            PaginationLinkOptions {
                href: Some("/prev".to_string()),
                text: Some("Earlier results".to_string()),
                ..PaginationLinkOptions::default()
            },
        )
        .unwrap();
        let html = link.render().into_string();
        assert!(html.contains(r#"<span class="govuk-pagination__link-title">Earlier results</span>"#));
        assert!(!html.contains(" page</span>"));
    }

    #[test]
    fn test_block_mode_without_items() {
        let ctx = HtmlContext::default();
        let pagination = Pagination::new(
            &ctx,
            PaginationOptions {
                next: Some(PaginationLinkOptions {
                    href: Some("/guide/2".to_string()),
                    text: Some("Next page".to_string()),
                    label_text: Some("Applying for a licence".to_string()),
                    ..PaginationLinkOptions::default()
                }),
                ..PaginationOptions::default()
            },
        )
        .unwrap();
        let html = pagination.render().into_string();
        assert!(html.starts_with(r#"<nav class="govuk-pagination govuk-pagination--block""#));
        assert!(html.contains(concat!(
            r#"</svg><span class="govuk-pagination__link-title govuk-pagination__link-title--decorated">Next page</span>"#,
            r#"<span class="govuk-visually-hidden">:</span>"#,
            r#"<span class="govuk-pagination__link-label">Applying for a licence</span>"#,
        )));
        assert!(!html.contains("<ul"));
    }

    #[test]
    fn test_page_without_href() {
        let ctx = HtmlContext::default();
        let mut item = page("2", false);
        item.href = None;
        let err = PaginationItem::new(&ctx, item).err().unwrap();
        assert_eq!(err, ComponentError::missing("pagination", "items.href"));
    }
}
