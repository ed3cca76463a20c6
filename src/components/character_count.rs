use super::field::{
    described_by, ErrorMessage, ErrorMessageOptions, Hint, HintOptions, Label, LabelOptions,
};
use super::{class_attr, Render};
use crate::error::{ComponentError, ComponentResult};
use crate::html::{Html, RenderContext};
use crate::options::{join_classes, normalize, Attributes, Options};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterCountOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    /// Counts words instead of characters; wins over `max_length`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_words: Option<u32>,
    /// Percentage of the limit before the count message appears
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<HintOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<ErrorMessageOptions>,
    /// Textarea classes and attributes
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountLimit {
    Characters(u32),
    Words(u32),
}

impl CountLimit {
    fn data_key(self) -> &'static str {
        match self {
            CountLimit::Characters(_) => "maxlength",
            CountLimit::Words(_) => "maxwords",
        }
    }

    fn value(self) -> u32 {
        match self {
            CountLimit::Characters(n) | CountLimit::Words(n) => n,
        }
    }

    /// The message shown before any script updates it
    pub fn message(self) -> String {
        match self {
            CountLimit::Characters(n) => format!("You can enter up to {} characters", n),
            CountLimit::Words(n) => format!("You can enter up to {} words", n),
        }
    }
}

pub struct CharacterCount<'a> {
    ctx: &'a dyn RenderContext,
    id: String,
    limit: CountLimit,
    label: Label<'a>,
    hint: Option<Hint<'a>>,
    error: Option<ErrorMessage<'a>>,
    value: Html,
    wrapper_attributes: Attributes,
    attributes: Attributes,
}

impl<'a> CharacterCount<'a> {
    pub fn new(ctx: &'a dyn RenderContext, options: CharacterCountOptions) -> ComponentResult<Self> {
        let config = ctx.config();
        let id = options
            .id
            .ok_or_else(|| ComponentError::missing("character-count", "id"))?;
        let name = options
            .name
            .ok_or_else(|| ComponentError::missing("character-count", "name"))?;
        let limit = match (options.max_words, options.max_length) {
            (Some(words), _) => CountLimit::Words(words),
            (None, Some(length)) => CountLimit::Characters(length),
            (None, None) => return Err(ComponentError::missing("character-count", "max_length")),
        };

        let label = Label::new(
            ctx,
            "character-count",
            Some(id.as_str()),
            options
                .label
                .ok_or_else(|| ComponentError::missing("character-count", "label"))?,
        )?;
        let hint = options
            .hint
            .map(|hint| Hint::new(ctx, "character-count", &id, hint))
            .transpose()?;
        let error = options
            .error_message
            .map(|error| ErrorMessage::new(ctx, "character-count", &id, error))
            .transpose()?;

        let group = config.class("form-group");
        let mut wrapper_class = group.clone();
        if error.is_some() {
            wrapper_class = join_classes(&wrapper_class, &format!("{}--error", group));
        }
        let wrapper_class = join_classes(&wrapper_class, &config.class("character-count"));
        let data = Attributes::new()
            .with("module", config.class("character-count"))
            .with(limit.data_key(), limit.value())
            .with_opt("threshold", options.threshold);
        let wrapper_attributes = class_attr(wrapper_class).with("data", data);

        let textarea = config.class("textarea");
        let mut class = join_classes(&textarea, &config.class("js-character-count"));
        if error.is_some() {
            class = join_classes(&class, &format!("{}--error", textarea));
        }
        let info_id = format!("{}-info", id);
        let describedby = described_by([
            Some(info_id.as_str()),
            hint.as_ref().map(Hint::id),
            error.as_ref().map(ErrorMessage::id),
        ]);
        let mut defaults = class_attr(class)
            .with("id", id.as_str())
            .with("name", name)
            .with("rows", options.rows.unwrap_or(config.default_character_count_rows));
        if let Some(describedby) = describedby {
            defaults.insert("aria", Attributes::new().with("describedby", describedby));
        }

        Ok(Self {
            ctx,
            id,
            limit,
            label,
            hint,
            error,
            value: ctx.escape(options.value.as_deref().unwrap_or("")),
            wrapper_attributes,
            attributes: normalize(&options.options, &defaults),
        })
    }

    pub fn limit(&self) -> CountLimit {
        self.limit
    }
}

impl Render for CharacterCount<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        let config = ctx.config();

        let mut parts = vec![self.label.render()];
        parts.extend(self.hint.as_ref().map(Render::render));
        parts.extend(self.error.as_ref().map(Render::render));
        parts.push(ctx.tag("textarea", &self.attributes, self.value.clone()));

        let message_class = join_classes(&config.class("hint"), &config.class("character-count__message"));
        parts.push(ctx.tag(
            "div",
            &class_attr(message_class).with("id", format!("{}-info", self.id)),
            ctx.escape(&self.limit.message()),
        ));

        ctx.tag("div", &self.wrapper_attributes, ctx.concat(parts))
    }
}
