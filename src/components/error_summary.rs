use super::{class_attr, text_or_html, Render};
use crate::error::{ComponentError, ComponentResult};
use crate::html::{Html, RenderContext};
use crate::options::{join_classes, normalize, Attributes, Options};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorSummaryItemOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Usually `#field-id`; without it the message is plain text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorSummaryOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
    pub error_list: Vec<ErrorSummaryItemOptions>,
    pub disable_auto_focus: bool,
    #[serde(flatten)]
    pub options: Options,
}

pub struct ErrorSummaryItem<'a> {
    ctx: &'a dyn RenderContext,
    content: Html,
    href: Option<String>,
    attributes: Attributes,
}

impl<'a> ErrorSummaryItem<'a> {
    pub fn new(ctx: &'a dyn RenderContext, item: ErrorSummaryItemOptions) -> ComponentResult<Self> {
        let content = text_or_html(ctx, item.text.as_deref(), item.html.as_deref())
            .ok_or_else(|| ComponentError::missing("error-summary", "error_list.text"))?;
        Ok(Self {
            ctx,
            content,
            href: item.href,
            attributes: normalize(&item.options, &Attributes::new()),
        })
    }
}

impl Render for ErrorSummaryItem<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        let inner = match &self.href {
            Some(href) => ctx.link(self.content.clone(), href, &self.attributes),
            None => self.content.clone(),
        };
        ctx.tag("li", &Attributes::new(), inner)
    }
}

pub struct ErrorSummary<'a> {
    ctx: &'a dyn RenderContext,
    title: Html,
    description: Option<Html>,
    items: Vec<ErrorSummaryItem<'a>>,
    attributes: Attributes,
}

impl<'a> ErrorSummary<'a> {
    pub fn new(ctx: &'a dyn RenderContext, options: ErrorSummaryOptions) -> ComponentResult<Self> {
        let config = ctx.config();
        let title = text_or_html(
            ctx,
            options.title_text.as_deref(),
            options.title_html.as_deref(),
        )
        .unwrap_or_else(|| ctx.escape(&config.default_error_summary_title));
        let description = text_or_html(
            ctx,
            options.description_text.as_deref(),
            options.description_html.as_deref(),
        );
        let items = options
            .error_list
            .into_iter()
            .map(|item| ErrorSummaryItem::new(ctx, item))
            .collect::<ComponentResult<Vec<_>>>()?;

        let base = config.class("error-summary");
        let data = Attributes::new()
            .with("module", base.as_str())
            .with_opt(
                "disable_auto_focus",
                options.disable_auto_focus.then_some("true"),
            );
        let defaults = class_attr(base).with("data", data);

        Ok(Self {
            ctx,
            title,
            description,
            items,
            attributes: normalize(&options.options, &defaults),
        })
    }

    pub fn items(&self) -> &[ErrorSummaryItem<'a>] {
        &self.items
    }
}

impl Render for ErrorSummary<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        let config = ctx.config();

        let mut body = Vec::new();
        if let Some(description) = &self.description {
            body.push(ctx.tag("p", &Attributes::new(), description.clone()));
        }
        let list_class = join_classes(&config.class("list"), &config.class("error-summary__list"));
        body.push(ctx.tag(
            "ul",
            &class_attr(list_class),
            ctx.concat(self.items.iter().map(Render::render).collect()),
        ));

        let alert = ctx.concat(vec![
            ctx.tag(
                "h2",
                &class_attr(config.class("error-summary__title")),
                self.title.clone(),
            ),
            ctx.tag(
                "div",
                &class_attr(config.class("error-summary__body")),
                ctx.concat(body),
            ),
        ]);
        ctx.tag(
            "div",
            &self.attributes,
            ctx.tag("div", &Attributes::new().with("role", "alert"), alert),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::HtmlContext;

    #[test]
    fn test_default_title_and_items() {
        let ctx = HtmlContext::default();
        let summary = ErrorSummary::new(
            &ctx,
            ErrorSummaryOptions {
                error_list: vec![
                    ErrorSummaryItemOptions {
                        text: Some("Enter your full name".to_string()),
                        href: Some("#full-name".to_string()),
                        ..ErrorSummaryItemOptions::default()
                    },
                    ErrorSummaryItemOptions {
                        text: Some("Something went wrong".to_string()),
                        ..ErrorSummaryItemOptions::default()
                    },
                ],
                ..ErrorSummaryOptions::default()
            },
        )
        .unwrap();

        assert_eq!(
            summary.render().as_str(),
            concat!(
                r#"<div class="govuk-error-summary" data-module="govuk-error-summary"><div role="alert">"#,
                r#"<h2 class="govuk-error-summary__title">There is a problem</h2>"#,
                r#"<div class="govuk-error-summary__body"><ul class="govuk-list govuk-error-summary__list">"#,
                r##"<li><a href="#full-name">Enter your full name</a></li>"##,
                r#"<li>Something went wrong</li>"#,
                r#"</ul></div></div></div>"#,
            )
        );
    }

    #[test]
    fn test_description_and_auto_focus() {
        let ctx = HtmlContext::default();
        let html = ErrorSummary::new(
            &ctx,
            ErrorSummaryOptions {
                title_text: Some("Check your answers".to_string()),
                description_text: Some("Fix the following".to_string()),
                disable_auto_focus: true,
                ..ErrorSummaryOptions::default()
            },
        )
        .unwrap()
        .render()
        .into_string();

        assert!(html.starts_with(
            r#"<div class="govuk-error-summary" data-module="govuk-error-summary" data-disable-auto-focus="true">"#
        ));
        assert!(html.contains(r#"<div class="govuk-error-summary__body"><p>Fix the following</p><ul"#));
        assert!(html.contains(">Check your answers</h2>"));
    }
}
