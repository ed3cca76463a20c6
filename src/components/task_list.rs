use super::tag::{Tag, TagOptions};
use super::{class_attr, text_or_html, Render};
use crate::error::{ComponentError, ComponentResult};
use crate::html::{Html, RenderContext};
use crate::options::{join_classes, normalize, Attributes, Options};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskStatusOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Rendered as a tag instead of plain text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<TagOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskListItemOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatusOptions>,
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_prefix: Option<String>,
    pub items: Vec<TaskListItemOptions>,
    #[serde(flatten)]
    pub options: Options,
}

pub struct TaskListItem<'a> {
    ctx: &'a dyn RenderContext,
    id_base: String,
    title: Html,
    href: Option<String>,
    hint: Option<Html>,
    status: Html,
    status_classes: Option<String>,
    attributes: Attributes,
}

impl<'a> TaskListItem<'a> {
    /// Ids are `<id_prefix>-<index>-hint` and `<id_prefix>-<index>-status`
    pub fn new(
        ctx: &'a dyn RenderContext,
        id_prefix: &str,
        index: usize,
        item: TaskListItemOptions,
    ) -> ComponentResult<Self> {
        let title = text_or_html(ctx, item.title_text.as_deref(), item.title_html.as_deref())
            .ok_or_else(|| ComponentError::missing("task-list", "items.title_text"))?;
        let hint = text_or_html(ctx, item.hint_text.as_deref(), item.hint_html.as_deref());

        let status_options = item
            .status
            .ok_or_else(|| ComponentError::missing("task-list", "items.status"))?;
        let status = match status_options.tag {
            Some(tag) => Tag::new(ctx, tag)?.render(),
            None => text_or_html(
                ctx,
                status_options.text.as_deref(),
                status_options.html.as_deref(),
            )
            .ok_or_else(|| ComponentError::missing("task-list", "items.status.text"))?,
        };

        let base = ctx.config().class("task-list__item");
        let class = if item.href.is_some() {
            join_classes(&base, &format!("{}--with-link", base))
        } else {
            base
        };

        Ok(Self {
            ctx,
            id_base: format!("{}-{}", id_prefix, index),
            title,
            href: item.href,
            hint,
            status,
            status_classes: status_options.classes,
            attributes: normalize(&item.options, &class_attr(class)),
        })
    }

    pub fn hint_id(&self) -> Option<String> {
        self.hint.as_ref().map(|_| format!("{}-hint", self.id_base))
    }

    pub fn status_id(&self) -> String {
        format!("{}-status", self.id_base)
    }
}

impl Render for TaskListItem<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        let config = ctx.config();
        let hint_id = self.hint_id();
        let status_id = self.status_id();

        let title = match &self.href {
            Some(href) => {
                let describedby = match &hint_id {
                    Some(hint_id) => format!("{} {}", hint_id, status_id),
                    None => status_id.clone(),
                };
                let attrs = class_attr(join_classes(
                    &config.class("link"),
                    &config.class("task-list__link"),
                ))
                .with("aria", Attributes::new().with("describedby", describedby));
                ctx.link(self.title.clone(), href, &attrs)
            }
            None => ctx.tag("div", &Attributes::new(), self.title.clone()),
        };

        let mut name_and_hint = vec![title];
        if let (Some(hint), Some(hint_id)) = (&self.hint, hint_id) {
            name_and_hint.push(ctx.tag(
                "div",
                &class_attr(config.class("task-list__hint")).with("id", hint_id),
                hint.clone(),
            ));
        }

        let status_class = join_classes(
            &config.class("task-list__status"),
            self.status_classes.as_deref().unwrap_or(""),
        );
        let parts = vec![
            ctx.tag(
                "div",
                &class_attr(config.class("task-list__name-and-hint")),
                ctx.concat(name_and_hint),
            ),
            ctx.tag(
                "div",
                &class_attr(status_class).with("id", status_id),
                self.status.clone(),
            ),
        ];
        ctx.tag("li", &self.attributes, ctx.concat(parts))
    }
}

pub struct TaskList<'a> {
    ctx: &'a dyn RenderContext,
    items: Vec<TaskListItem<'a>>,
    attributes: Attributes,
}

impl<'a> TaskList<'a> {
    pub fn new(ctx: &'a dyn RenderContext, options: TaskListOptions) -> ComponentResult<Self> {
        let config = ctx.config();
        let id_prefix = options
            .id_prefix
            .as_deref()
            .unwrap_or(&config.default_task_list_id_prefix);
        let items = options
            .items
            .into_iter()
            .enumerate()
            .map(|(i, item)| TaskListItem::new(ctx, id_prefix, i + 1, item))
            .collect::<ComponentResult<Vec<_>>>()?;

        Ok(Self {
            ctx,
            items,
            attributes: normalize(&options.options, &class_attr(config.class("task-list"))),
        })
    }

    pub fn items(&self) -> &[TaskListItem<'a>] {
        &self.items
    }
}

impl Render for TaskList<'_> {
    fn render(&self) -> Html {
        self.ctx.tag(
            "ul",
            &self.attributes,
            self.ctx.concat(self.items.iter().map(Render::render).collect()),
        )
    }
}
