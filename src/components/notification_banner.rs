use super::{class_attr, text_or_html, Render};
use crate::error::ComponentResult;
use crate::heading::HeadingLevel;
use crate::html::{Html, RenderContext};
use crate::options::{join_classes, normalize, Attributes, Options};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationBannerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_heading_level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_auto_focus: Option<bool>,
    #[serde(flatten)]
    pub options: Options,
}

/// Text content becomes the banner heading paragraph; html is used as given.
enum BannerContent {
    Heading(Html),
    Raw(Html),
    Empty,
}

pub struct NotificationBanner<'a> {
    ctx: &'a dyn RenderContext,
    title: Html,
    title_id: String,
    heading_level: HeadingLevel,
    content: BannerContent,
    attributes: Attributes,
}

impl<'a> NotificationBanner<'a> {
    pub fn new(
        ctx: &'a dyn RenderContext,
        options: NotificationBannerOptions,
    ) -> ComponentResult<Self> {
        let config = ctx.config();
        let title = text_or_html(
            ctx,
            options.title_text.as_deref(),
            options.title_html.as_deref(),
        )
        .unwrap_or_else(|| {
            ctx.escape(if options.success {
                config.default_notification_banner_success_title.as_str()
            } else {
                config.default_notification_banner_title.as_str()
            })
        });
        let title_id = options
            .title_id
            .unwrap_or_else(|| config.class("notification-banner-title"));
        let heading_level = HeadingLevel::or_default(options.title_heading_level, 2)?;
        let content = match (options.html, options.text) {
            (Some(html), _) => BannerContent::Raw(Html::raw(html)),
            (None, Some(text)) => BannerContent::Heading(ctx.escape(&text)),
            (None, None) => BannerContent::Empty,
        };

        let base = config.class("notification-banner");
        let class = if options.success {
            join_classes(&base, &format!("{}--success", base))
        } else {
            base.clone()
        };
        let role = options
            .role
            .unwrap_or_else(|| if options.success { "alert" } else { "region" }.to_string());
        let data = Attributes::new().with("module", base).with_opt(
            "disable_auto_focus",
            options.disable_auto_focus.map(|d| d.to_string()),
        );
        let defaults = Attributes::new()
            .with("class", class)
            .with("role", role)
            .with("aria", Attributes::new().with("labelledby", title_id.as_str()))
            .with("data", data);

        Ok(Self {
            ctx,
            title,
            title_id,
            heading_level,
            content,
            attributes: normalize(&options.options, &defaults),
        })
    }
}

impl Render for NotificationBanner<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        let config = ctx.config();
        let heading = ctx.tag(
            self.heading_level.tag(),
            &class_attr(config.class("notification-banner__title"))
                .with("id", self.title_id.as_str()),
            self.title.clone(),
        );
        let header = ctx.tag(
            "div",
            &class_attr(config.class("notification-banner__header")),
            heading,
        );
        let inner = match &self.content {
            BannerContent::Heading(text) => ctx.tag(
                "p",
                &class_attr(config.class("notification-banner__heading")),
                text.clone(),
            ),
            BannerContent::Raw(html) => html.clone(),
            BannerContent::Empty => Html::new(),
        };
        let content = ctx.tag(
            "div",
            &class_attr(config.class("notification-banner__content")),
            inner,
        );
        ctx.tag("div", &self.attributes, ctx.concat(vec![header, content]))
    }
}
