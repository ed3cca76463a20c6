use super::{class_attr, text_or_html, visually_hidden, Render};
use crate::error::{ComponentError, ComponentResult};
use crate::heading::HeadingLevel;
use crate::html::{Html, RenderContext};
use crate::options::{join_classes, normalize, Attributes, Options};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryListTextOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryListActionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visually_hidden_text: Option<String>,
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryListRowOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<SummaryListTextOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<SummaryListTextOptions>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<SummaryListActionOptions>,
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryCardOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_level: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<SummaryListActionOptions>,
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryListOptions {
    pub rows: Vec<SummaryListRowOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borders: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<SummaryCardOptions>,
    #[serde(flatten)]
    pub options: Options,
}

/// A "Change"-style link used in rows and card headers.
pub struct SummaryListAction<'a> {
    ctx: &'a dyn RenderContext,
    href: String,
    content: Html,
    attributes: Attributes,
}

impl<'a> SummaryListAction<'a> {
    pub fn new(
        ctx: &'a dyn RenderContext,
        action: SummaryListActionOptions,
    ) -> ComponentResult<Self> {
        let href = action
            .href
            .ok_or_else(|| ComponentError::missing("summary-list", "actions.href"))?;
        let mut content = text_or_html(ctx, action.text.as_deref(), action.html.as_deref())
            .ok_or_else(|| ComponentError::missing("summary-list", "actions.text"))?;
        if let Some(hidden) = action.visually_hidden_text.as_deref() {
            content.push(visually_hidden(ctx, ctx.escape(&format!(" {}", hidden))));
        }
        let defaults = class_attr(ctx.config().class("link"));

        Ok(Self {
            ctx,
            href,
            content,
            attributes: normalize(&action.options, &defaults),
        })
    }
}

impl Render for SummaryListAction<'_> {
    fn render(&self) -> Html {
        self.ctx
            .link(self.content.clone(), &self.href, &self.attributes)
    }
}

fn build_actions<'a>(
    ctx: &'a dyn RenderContext,
    actions: Vec<SummaryListActionOptions>,
) -> ComponentResult<Vec<SummaryListAction<'a>>> {
    actions
        .into_iter()
        .map(|action| SummaryListAction::new(ctx, action))
        .collect()
}

/// One action renders inside `single` (or bare); several become `ul` > `li`s.
fn render_actions(
    ctx: &dyn RenderContext,
    actions: &[SummaryListAction<'_>],
    single: Option<&Attributes>,
    list: &Attributes,
    item: Attributes,
) -> Html {
    match (actions, single) {
        ([], _) => Html::new(),
        ([action], Some(wrapper)) => ctx.tag("div", wrapper, action.render()),
        ([action], None) => action.render(),
        _ => ctx.tag(
            "ul",
            list,
            ctx.concat(
                actions
                    .iter()
                    .map(|action| ctx.tag("li", &item, action.render()))
                    .collect(),
            ),
        ),
    }
}

pub struct SummaryListRow<'a> {
    ctx: &'a dyn RenderContext,
    key: Html,
    key_attributes: Attributes,
    value: Html,
    value_attributes: Attributes,
    actions: Vec<SummaryListAction<'a>>,
    attributes: Attributes,
}

impl<'a> SummaryListRow<'a> {
    /// `list_has_actions` adds the no-actions modifier to rows without any
    pub fn new(
        ctx: &'a dyn RenderContext,
        row: SummaryListRowOptions,
        list_has_actions: bool,
    ) -> ComponentResult<Self> {
        let config = ctx.config();
        let key_options = row
            .key
            .ok_or_else(|| ComponentError::missing("summary-list", "rows.key"))?;
        let key = text_or_html(ctx, key_options.text.as_deref(), key_options.html.as_deref())
            .ok_or_else(|| ComponentError::missing("summary-list", "rows.key.text"))?;
        let key_attributes = class_attr(join_classes(
            &config.class("summary-list__key"),
            key_options.classes.as_deref().unwrap_or(""),
        ));

        let value_options = row.value.unwrap_or_default();
        let value = text_or_html(
            ctx,
            value_options.text.as_deref(),
            value_options.html.as_deref(),
        )
        .unwrap_or_default();
        let value_attributes = class_attr(join_classes(
            &config.class("summary-list__value"),
            value_options.classes.as_deref().unwrap_or(""),
        ));

        let actions = build_actions(ctx, row.actions)?;

        let base = config.class("summary-list__row");
        let class = if actions.is_empty() && list_has_actions {
            join_classes(&base, &format!("{}--no-actions", base))
        } else {
            base
        };

        Ok(Self {
            ctx,
            key,
            key_attributes,
            value,
            value_attributes,
            actions,
            attributes: normalize(&row.options, &class_attr(class)),
        })
    }
}

impl Render for SummaryListRow<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        let config = ctx.config();
        let mut cells = vec![
            ctx.tag("dt", &self.key_attributes, self.key.clone()),
            ctx.tag("dd", &self.value_attributes, self.value.clone()),
        ];
        if !self.actions.is_empty() {
            let cell = class_attr(config.class("summary-list__actions"));
            let inner = render_actions(
                ctx,
                &self.actions,
                None,
                &class_attr(config.class("summary-list__actions-list")),
                class_attr(config.class("summary-list__actions-list-item")),
            );
            cells.push(ctx.tag("dd", &cell, inner));
        }
        ctx.tag("div", &self.attributes, ctx.concat(cells))
    }
}

/// Card wrapper around a summary list, with a title and its own actions.
pub struct SummaryCard<'a> {
    ctx: &'a dyn RenderContext,
    title: Option<Html>,
    heading_level: HeadingLevel,
    actions: Vec<SummaryListAction<'a>>,
    attributes: Attributes,
}

impl<'a> SummaryCard<'a> {
    pub fn new(ctx: &'a dyn RenderContext, card: SummaryCardOptions) -> ComponentResult<Self> {
        let config = ctx.config();
        let title = text_or_html(ctx, card.title_text.as_deref(), card.title_html.as_deref());
        let heading_level =
            HeadingLevel::or_default(card.heading_level, config.default_summary_card_heading_level)?;
        let actions = build_actions(ctx, card.actions)?;
        let defaults = class_attr(config.class("summary-card"));

        Ok(Self {
            ctx,
            title,
            heading_level,
            actions,
            attributes: normalize(&card.options, &defaults),
        })
    }

    pub fn wrap(&self, list: Html) -> Html {
        let ctx = self.ctx;
        let config = ctx.config();
        let actions_attrs = class_attr(config.class("summary-card__actions"));

        let mut title_parts = Vec::new();
        if let Some(title) = &self.title {
            title_parts.push(ctx.tag(
                self.heading_level.tag(),
                &class_attr(config.class("summary-card__title")),
                title.clone(),
            ));
        }
        title_parts.push(render_actions(
            ctx,
            &self.actions,
            Some(&actions_attrs),
            &actions_attrs,
            class_attr(config.class("summary-card__action")),
        ));

        let title_wrapper = ctx.tag(
            "div",
            &class_attr(config.class("summary-card__title-wrapper")),
            ctx.concat(title_parts),
        );
        let content = ctx.tag(
            "div",
            &class_attr(config.class("summary-card__content")),
            list,
        );
        ctx.tag("div", &self.attributes, ctx.concat(vec![title_wrapper, content]))
    }
}

pub struct SummaryList<'a> {
    ctx: &'a dyn RenderContext,
    rows: Vec<SummaryListRow<'a>>,
    card: Option<SummaryCard<'a>>,
    attributes: Attributes,
}

impl<'a> SummaryList<'a> {
    pub fn new(ctx: &'a dyn RenderContext, options: SummaryListOptions) -> ComponentResult<Self> {
        let config = ctx.config();
        let list_has_actions = options.rows.iter().any(|row| !row.actions.is_empty());
        let rows = options
            .rows
            .into_iter()
            .map(|row| SummaryListRow::new(ctx, row, list_has_actions))
            .collect::<ComponentResult<Vec<_>>>()?;
        let card = options
            .card
            .map(|card| SummaryCard::new(ctx, card))
            .transpose()?;

        let base = config.class("summary-list");
        let class = if options.borders.unwrap_or(config.default_summary_list_borders) {
            base
        } else {
            join_classes(&base, &format!("{}--no-border", base))
        };

        Ok(Self {
            ctx,
            rows,
            card,
            attributes: normalize(&options.options, &class_attr(class)),
        })
    }

    pub fn rows(&self) -> &[SummaryListRow<'a>] {
        &self.rows
    }
}

impl Render for SummaryList<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        let list = ctx.tag(
            "dl",
            &self.attributes,
            ctx.concat(self.rows.iter().map(Render::render).collect()),
        );
        match &self.card {
            Some(card) => card.wrap(list),
            None => list,
        }
    }
}
