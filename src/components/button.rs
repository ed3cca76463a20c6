use super::{class_attr, text_or_html, Render};
use crate::error::{ComponentError, ComponentResult};
use crate::html::{Html, RenderContext};
use crate::options::{join_classes, normalize, Attributes, Options};
use serde::{Deserialize, Serialize};

const START_ICON_PATH: &str = "M0 0h13l20 20-20 20H0l20-20z";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// `button`, `a` or `input`; `a` is implied by `href`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "type")]
    pub button_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub secondary: bool,
    pub warning: bool,
    pub inverse: bool,
    pub start: bool,
    pub disabled: bool,
    pub prevent_double_click: bool,
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonElement {
    Button,
    Link,
    Input,
}

pub struct Button<'a> {
    ctx: &'a dyn RenderContext,
    element: ButtonElement,
    content: Html,
    start: bool,
    attributes: Attributes,
}

impl<'a> Button<'a> {
    pub fn new(ctx: &'a dyn RenderContext, options: ButtonOptions) -> ComponentResult<Self> {
        let config = ctx.config();
        // an href only picks the link element when none is named
        let element = match options.element.as_deref() {
            None if options.href.is_some() => ButtonElement::Link,
            None | Some("button") => ButtonElement::Button,
            Some("a") => ButtonElement::Link,
            Some("input") => ButtonElement::Input,
            Some(other) => {
                return Err(ComponentError::InvalidOptions {
                    component: "button".to_string(),
                    reason: format!("unsupported element `{}`", other),
                })
            }
        };
        let content = match element {
            // an input carries its text in `value`
            ButtonElement::Input => options.text.as_deref().map(|text| ctx.escape(text)),
            _ => text_or_html(ctx, options.text.as_deref(), options.html.as_deref()),
        }
        .ok_or_else(|| ComponentError::missing("button", "text"))?;

        let base = config.class("button");
        let mut class = base.clone();
        for (enabled, modifier) in [
            (options.secondary, "secondary"),
            (options.warning, "warning"),
            (options.inverse, "inverse"),
            (options.start, "start"),
        ] {
            if enabled {
                class = join_classes(&class, &format!("{}--{}", base, modifier));
            }
        }

        let data = Attributes::new().with("module", base.as_str()).with_opt(
            "prevent_double_click",
            options.prevent_double_click.then_some("true"),
        );
        let defaults = match element {
            ButtonElement::Link => class_attr(class)
                .with("href", options.href.as_deref().unwrap_or("#"))
                .with("role", "button")
                .with("draggable", "false")
                .with("data", data)
                .with_opt("id", options.id.as_deref()),
            ButtonElement::Button | ButtonElement::Input => {
                let mut attrs = class_attr(class)
                    .with("type", options.button_type.as_deref().unwrap_or("submit"))
                    .with_opt("name", options.name.as_deref());
                attrs = match element {
                    ButtonElement::Input => attrs.with_opt("value", options.text.as_deref()),
                    _ => attrs.with_opt("value", options.value.as_deref()),
                };
                if options.disabled {
                    attrs = attrs
                        .with("disabled", true)
                        .with("aria", Attributes::new().with("disabled", "true"));
                }
                attrs.with("data", data).with_opt("id", options.id.as_deref())
            }
        };

        Ok(Self {
            ctx,
            element,
            content,
            start: options.start,
            attributes: normalize(&options.options, &defaults),
        })
    }

    pub fn element(&self) -> ButtonElement {
        self.element
    }

    fn start_icon(&self) -> Html {
        let ctx = self.ctx;
        let attrs = class_attr(ctx.config().class("button__start-icon"))
            .with("xmlns", "http://www.w3.org/2000/svg")
            .with("width", "17.5")
            .with("height", "19")
            .with("viewBox", "0 0 33 40")
            .with("aria-hidden", "true")
            .with("focusable", "false");
        let path = Attributes::new()
            .with("fill", "currentColor")
            .with("d", START_ICON_PATH);
        ctx.tag("svg", &attrs, ctx.tag("path", &path, Html::new()))
    }
}

impl Render for Button<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        let mut content = self.content.clone();
        if self.start {
            content.push(self.start_icon());
        }
        match self.element {
            ButtonElement::Button => ctx.tag("button", &self.attributes, content),
            ButtonElement::Link => ctx.tag("a", &self.attributes, content),
            ButtonElement::Input => ctx.void_tag("input", &self.attributes),
        }
    }
}
