use super::{class_attr, content_or_paragraph, text_or_html, Render};
use crate::error::{ComponentError, ComponentResult};
use crate::heading::HeadingLevel;
use crate::html::{Html, RenderContext};
use crate::options::{join_classes, normalize, Attributes, Options};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccordionSectionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_html: Option<String>,
    /// Wrapped in a body paragraph when `content` is absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Pre-rendered markup, used as is
    #[serde(skip_serializing_if = "Option::is_none", alias = "html")]
    pub content: Option<String>,
    pub expanded: bool,
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccordionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remember_expanded: Option<bool>,
    pub items: Vec<AccordionSectionOptions>,
    #[serde(flatten)]
    pub options: Options,
}

pub struct AccordionSection<'a> {
    ctx: &'a dyn RenderContext,
    accordion_id: String,
    index: usize,
    heading_level: HeadingLevel,
    heading: Html,
    summary: Option<Html>,
    content: Html,
    attributes: Attributes,
}

impl<'a> AccordionSection<'a> {
    /// `index` is 1-based and feeds the generated ids
    pub fn new(
        ctx: &'a dyn RenderContext,
        accordion_id: &str,
        index: usize,
        heading_level: HeadingLevel,
        section: AccordionSectionOptions,
    ) -> ComponentResult<Self> {
        let heading = text_or_html(
            ctx,
            section.heading_text.as_deref(),
            section.heading_html.as_deref(),
        )
        .ok_or_else(|| ComponentError::missing("accordion", "items.heading_text"))?;
        let summary = text_or_html(
            ctx,
            section.summary_text.as_deref(),
            section.summary_html.as_deref(),
        );
        let content =
            content_or_paragraph(ctx, section.text.as_deref(), section.content.as_deref())
                .ok_or_else(|| ComponentError::missing("accordion", "items.text"))?;

        let base = ctx.config().class("accordion__section");
        let class = if section.expanded {
            join_classes(&base, &format!("{}--expanded", base))
        } else {
            base
        };

        Ok(Self {
            ctx,
            accordion_id: accordion_id.to_string(),
            index,
            heading_level,
            heading,
            summary,
            content,
            attributes: normalize(&section.options, &class_attr(class)),
        })
    }

    fn id(&self, field: &str) -> String {
        format!("{}-{}-{}", self.accordion_id, field, self.index)
    }
}

impl Render for AccordionSection<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        let config = ctx.config();

        let button = ctx.tag(
            "span",
            &class_attr(config.class("accordion__section-button")).with("id", self.id("heading")),
            self.heading.clone(),
        );
        let mut header = vec![ctx.tag(
            self.heading_level.tag(),
            &class_attr(config.class("accordion__section-heading")),
            button,
        )];
        if let Some(summary) = &self.summary {
            let class = join_classes(&config.class("accordion__section-summary"), &config.class("body"));
            header.push(ctx.tag(
                "div",
                &class_attr(class).with("id", self.id("summary")),
                summary.clone(),
            ));
        }

        let header = ctx.tag(
            "div",
            &class_attr(config.class("accordion__section-header")),
            ctx.concat(header),
        );
        let content = ctx.tag(
            "div",
            &class_attr(config.class("accordion__section-content")).with("id", self.id("content")),
            self.content.clone(),
        );
        ctx.tag("div", &self.attributes, ctx.concat(vec![header, content]))
    }
}

pub struct Accordion<'a> {
    ctx: &'a dyn RenderContext,
    sections: Vec<AccordionSection<'a>>,
    attributes: Attributes,
}

impl<'a> Accordion<'a> {
    pub fn new(ctx: &'a dyn RenderContext, options: AccordionOptions) -> ComponentResult<Self> {
        let config = ctx.config();
        let id = options
            .id
            .ok_or_else(|| ComponentError::missing("accordion", "id"))?;
        let heading_level =
            HeadingLevel::or_default(options.heading_level, config.default_accordion_heading_level)?;

        let sections = options
            .items
            .into_iter()
            .enumerate()
            .map(|(i, section)| AccordionSection::new(ctx, &id, i + 1, heading_level, section))
            .collect::<ComponentResult<Vec<_>>>()?;

        let base = config.class("accordion");
        let data = Attributes::new().with("module", base.as_str()).with_opt(
            "remember_expanded",
            options.remember_expanded.map(|r| r.to_string()),
        );
        let defaults = Attributes::new()
            .with("class", base)
            .with("data", data)
            .with("id", id);

        Ok(Self {
            ctx,
            sections,
            attributes: normalize(&options.options, &defaults),
        })
    }

    pub fn sections(&self) -> &[AccordionSection<'a>] {
        &self.sections
    }
}

impl Render for Accordion<'_> {
    fn render(&self) -> Html {
        self.ctx.tag(
            "div",
            &self.attributes,
            self.ctx
                .concat(self.sections.iter().map(Render::render).collect()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::HtmlContext;

    fn section(heading: &str, text: &str) -> AccordionSectionOptions {
        AccordionSectionOptions {
            heading_text: Some(heading.to_string()),
            text: Some(text.to_string()),
            ..AccordionSectionOptions::default()
        }
    }

    #[test]
    fn test_section_ids_follow_index() {
        let ctx = HtmlContext::default();
        let html = AccordionSection::new(
            &ctx,
            "ouroboros",
            1,
            HeadingLevel::H2,
            section("Heading 1", "Content 1"),
        )
        .unwrap()
        .render();

        assert_eq!(
            html.as_str(),
            concat!(
                r#"<div class="govuk-accordion__section">"#,
                r#"<div class="govuk-accordion__section-header">"#,
                r#"<h2 class="govuk-accordion__section-heading">"#,
                r#"<span class="govuk-accordion__section-button" id="ouroboros-heading-1">Heading 1</span>"#,
                r#"</h2></div>"#,
                r#"<div class="govuk-accordion__section-content" id="ouroboros-content-1">"#,
                r#"<p class="govuk-body">Content 1</p></div></div>"#,
            )
        );
    }

    #[test]
    fn test_content_wins_over_text() {
        let ctx = HtmlContext::default();
        let mut options = section("Heading", "ignored");
        options.content = Some("<ul><li>raw</li></ul>".to_string());
        let html = AccordionSection::new(&ctx, "acc", 2, HeadingLevel::H3, options)
            .unwrap()
            .render();
        assert!(html.as_str().contains("<ul><li>raw</li></ul>"));
        assert!(!html.as_str().contains("ignored"));
        assert!(html.as_str().contains(r#"<h3 class="govuk-accordion__section-heading">"#));
        assert!(html.as_str().contains(r#"id="acc-content-2""#));
    }

    #[test]
    fn test_invalid_heading_level() {
        let ctx = HtmlContext::default();
        let options = AccordionOptions {
            id: Some("acc".to_string()),
            heading_level: Some(9),
            items: vec![section("H", "T")],
            ..AccordionOptions::default()
        };
        let err = Accordion::new(&ctx, options).err().unwrap();
        assert_eq!(err, ComponentError::InvalidHeadingLevel { level: 9 });
    }

    #[test]
    fn test_missing_id() {
        let ctx = HtmlContext::default();
        let err = Accordion::new(&ctx, AccordionOptions::default()).err().unwrap();
        assert_eq!(err, ComponentError::missing("accordion", "id"));
    }
}
