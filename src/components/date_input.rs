use super::field::{described_by, ErrorMessage, ErrorMessageOptions, Hint, HintOptions};
use super::fieldset::{Fieldset, FieldsetOptions};
use super::{class_attr, rendered_id, string_or_number, Render};
use crate::config::Config;
use crate::error::{ComponentError, ComponentResult};
use crate::html::{Html, RenderContext};
use crate::options::{join_classes, normalize, Attributes, Options};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateInputItemOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Defaults to the capitalised name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "string_or_number"
    )]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<String>,
    #[serde(flatten)]
    pub options: Options,
}

impl DateInputItemOptions {
    fn part(config: &Config, name: &str, width: u8) -> Self {
        Self {
            name: Some(name.to_string()),
            options: Options::new().classes(&format!("{}--width-{}", config.class("input"), width)),
            ..Self::default()
        }
    }

    /// Day, month and year
    pub fn defaults(config: &Config) -> Vec<Self> {
        vec![
            Self::part(config, "day", 2),
            Self::part(config, "month", 2),
            Self::part(config, "year", 4),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateInputOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_prefix: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<DateInputItemOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fieldset: Option<FieldsetOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<HintOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<ErrorMessageOptions>,
    #[serde(flatten)]
    pub options: Options,
}

pub struct DateInputItem<'a> {
    ctx: &'a dyn RenderContext,
    id: String,
    label: Html,
    attributes: Attributes,
}

impl<'a> DateInputItem<'a> {
    pub fn new(
        ctx: &'a dyn RenderContext,
        date_id: &str,
        name_prefix: Option<&str>,
        has_error: bool,
        item: DateInputItemOptions,
    ) -> ComponentResult<Self> {
        let config = ctx.config();
        let name = item
            .name
            .ok_or_else(|| ComponentError::missing("date-input", "items.name"))?;
        let id = item
            .id
            .unwrap_or_else(|| format!("{}-{}", date_id, name));
        let label = ctx.escape(&item.label.unwrap_or_else(|| capitalise(&name)));
        let full_name = match name_prefix {
            Some(prefix) => format!("{}-{}", prefix, name),
            None => name,
        };

        let mut class = join_classes(&config.class("input"), &config.class("date-input__input"));
        if has_error {
            let input = config.class("input");
            class = join_classes(&class, &format!("{}--error", input));
        }
        let defaults = class_attr(class)
            .with("id", id.as_str())
            .with("name", full_name)
            .with("type", "text")
            .with("inputmode", "numeric")
            .with_opt("value", item.value)
            .with_opt("autocomplete", item.autocomplete);
        let attributes = normalize(&item.options, &defaults);

        Ok(Self {
            ctx,
            id: rendered_id(&attributes, id),
            label,
            attributes,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Render for DateInputItem<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        let config = ctx.config();
        let label_class = join_classes(&config.class("label"), &config.class("date-input__label"));
        let label = ctx.tag(
            "label",
            &class_attr(label_class).with("for", self.id.as_str()),
            self.label.clone(),
        );
        let group = ctx.tag(
            "div",
            &class_attr(config.class("form-group")),
            ctx.concat(vec![label, ctx.void_tag("input", &self.attributes)]),
        );
        ctx.tag("div", &class_attr(config.class("date-input__item")), group)
    }
}

fn capitalise(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub struct DateInput<'a> {
    ctx: &'a dyn RenderContext,
    fieldset: Fieldset<'a>,
    items: usize,
    has_error: bool,
}

impl<'a> DateInput<'a> {
    pub fn new(ctx: &'a dyn RenderContext, options: DateInputOptions) -> ComponentResult<Self> {
        let config = ctx.config();
        let id = options
            .id
            .ok_or_else(|| ComponentError::missing("date-input", "id"))?;

        let hint = options
            .hint
            .map(|hint| Hint::new(ctx, "date-input", &id, hint))
            .transpose()?;
        let error = options
            .error_message
            .map(|error| ErrorMessage::new(ctx, "date-input", &id, error))
            .transpose()?;
        let has_error = error.is_some();

        let items = if options.items.is_empty() {
            DateInputItemOptions::defaults(config)
        } else {
            options.items
        };
        let items = items
            .into_iter()
            .map(|item| {
                DateInputItem::new(ctx, &id, options.name_prefix.as_deref(), has_error, item)
            })
            .collect::<ComponentResult<Vec<_>>>()?;

        let inputs = ctx.tag(
            "div",
            &normalize(
                &options.options,
                &class_attr(config.class("date-input")).with("id", id.as_str()),
            ),
            ctx.concat(items.iter().map(Render::render).collect()),
        );

        let mut content = Vec::new();
        content.extend(hint.as_ref().map(Render::render));
        content.extend(error.as_ref().map(Render::render));
        content.push(inputs);

        let mut fieldset = options.fieldset.unwrap_or_default();
        fieldset.role = Some("group".to_string());
        fieldset.described_by = described_by([
            fieldset.described_by.as_deref(),
            hint.as_ref().map(Hint::id),
            error.as_ref().map(ErrorMessage::id),
        ]);
        let fieldset = Fieldset::with_content(ctx, fieldset, ctx.concat(content))?;

        Ok(Self {
            ctx,
            fieldset,
            items: items.len(),
            has_error,
        })
    }

    pub fn item_count(&self) -> usize {
        self.items
    }
}

impl Render for DateInput<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        let base = ctx.config().class("form-group");
        let class = if self.has_error {
            join_classes(&base, &format!("{}--error", base))
        } else {
            base
        };
        ctx.tag("div", &class_attr(class), self.fieldset.render())
    }
}
