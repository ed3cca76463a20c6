//! The closed set of components, addressable by their kebab-case name.
//!
//! Data-driven callers (fixtures, the CLI) pick a component by name and hand
//! over JSON options; [`build`] deserializes them into that component's
//! options type and constructs the node.

use crate::components::accordion::{Accordion, AccordionOptions};
use crate::components::back_link::{BackLink, BackLinkOptions};
use crate::components::breadcrumbs::{Breadcrumbs, BreadcrumbsOptions};
use crate::components::button::{Button, ButtonOptions};
use crate::components::character_count::{CharacterCount, CharacterCountOptions};
use crate::components::date_input::{DateInput, DateInputOptions};
use crate::components::details::{Details, DetailsOptions};
use crate::components::error_summary::{ErrorSummary, ErrorSummaryOptions};
use crate::components::fieldset::{Fieldset, FieldsetOptions};
use crate::components::inset_text::{InsetText, InsetTextOptions};
use crate::components::notification_banner::{NotificationBanner, NotificationBannerOptions};
use crate::components::pagination::{Pagination, PaginationOptions};
use crate::components::panel::{Panel, PanelOptions};
use crate::components::phase_banner::{PhaseBanner, PhaseBannerOptions};
use crate::components::skip_link::{SkipLink, SkipLinkOptions};
use crate::components::summary_list::{SummaryList, SummaryListOptions};
use crate::components::table::{Table, TableOptions};
use crate::components::tabs::{Tabs, TabsOptions};
use crate::components::tag::{Tag, TagOptions};
use crate::components::task_list::{TaskList, TaskListOptions};
use crate::components::warning_text::{WarningText, WarningTextOptions};
use crate::components::Render;
use crate::error::{ComponentError, ComponentResult};
use crate::html::{Html, RenderContext};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

macro_rules! registry {
    ($($variant:ident($node:ident, $options:ty) => $name:literal,)+) => {
        /// Every component the crate can render.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ComponentName {
            $($variant,)+
        }

        impl ComponentName {
            pub const ALL: &'static [ComponentName] = &[$(ComponentName::$variant,)+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(ComponentName::$variant => $name,)+
                }
            }
        }

        impl FromStr for ComponentName {
            type Err = ComponentError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(ComponentName::$variant),)+
                    _ => Err(ComponentError::UnknownComponent {
                        name: s.to_string(),
                    }),
                }
            }
        }

        /// A constructed component of any kind.
        pub enum Node<'a> {
            $($variant($node<'a>),)+
        }

        impl Node<'_> {
            pub fn name(&self) -> ComponentName {
                match self {
                    $(Node::$variant(_) => ComponentName::$variant,)+
                }
            }
        }

        impl Render for Node<'_> {
            fn render(&self) -> Html {
                match self {
                    $(Node::$variant(node) => node.render(),)+
                }
            }
        }

        /// Build a component from JSON options.
        pub fn build<'a>(
            ctx: &'a dyn RenderContext,
            name: ComponentName,
            options: Value,
        ) -> ComponentResult<Node<'a>> {
            tracing::debug!(component = name.as_str(), "building component");
            match name {
                $(ComponentName::$variant => {
                    let options: $options = parse_options(name, options)?;
                    $node::new(ctx, options).map(Node::$variant)
                })+
            }
        }
    };
}

registry! {
    Accordion(Accordion, AccordionOptions) => "accordion",
    BackLink(BackLink, BackLinkOptions) => "back-link",
    Breadcrumbs(Breadcrumbs, BreadcrumbsOptions) => "breadcrumbs",
    Button(Button, ButtonOptions) => "button",
    CharacterCount(CharacterCount, CharacterCountOptions) => "character-count",
    DateInput(DateInput, DateInputOptions) => "date-input",
    Details(Details, DetailsOptions) => "details",
    ErrorSummary(ErrorSummary, ErrorSummaryOptions) => "error-summary",
    Fieldset(Fieldset, FieldsetOptions) => "fieldset",
    InsetText(InsetText, InsetTextOptions) => "inset-text",
    NotificationBanner(NotificationBanner, NotificationBannerOptions) => "notification-banner",
    Pagination(Pagination, PaginationOptions) => "pagination",
    Panel(Panel, PanelOptions) => "panel",
    PhaseBanner(PhaseBanner, PhaseBannerOptions) => "phase-banner",
    SkipLink(SkipLink, SkipLinkOptions) => "skip-link",
    SummaryList(SummaryList, SummaryListOptions) => "summary-list",
    Table(Table, TableOptions) => "table",
    Tabs(Tabs, TabsOptions) => "tabs",
    Tag(Tag, TagOptions) => "tag",
    TaskList(TaskList, TaskListOptions) => "task-list",
    WarningText(WarningText, WarningTextOptions) => "warning-text",
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn parse_options<T: DeserializeOwned>(name: ComponentName, options: Value) -> ComponentResult<T> {
    // `null` means "no options"
    let options = match options {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(options).map_err(|e| ComponentError::InvalidOptions {
        component: name.to_string(),
        reason: e.to_string(),
    })
}

/// Build and render in one step, resolving the component by name.
pub fn render(ctx: &dyn RenderContext, name: &str, options: Value) -> ComponentResult<Html> {
    let name: ComponentName = name.parse()?;
    Ok(build(ctx, name, options)?.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::HtmlContext;
    use serde_json::json;

    #[test]
    fn test_names_round_trip() {
        for name in ComponentName::ALL {
            assert_eq!(name.as_str().parse::<ComponentName>().unwrap(), *name);
        }
        assert_eq!(ComponentName::ALL.len(), 21);
    }

    #[test]
    fn test_unknown_component() {
        let ctx = HtmlContext::default();
        let err = render(&ctx, "carousel", Value::Null).unwrap_err();
        assert_eq!(
            err,
            ComponentError::UnknownComponent {
                name: "carousel".to_string()
            }
        );
    }

    #[test]
    fn test_render_from_json() {
        let ctx = HtmlContext::default();
        let html = render(
            &ctx,
            "tag",
            json!({ "text": "Beta", "classes": "app-tag", "attributes": { "id": "phase" } }),
        )
        .unwrap();
        assert_eq!(
            html.as_str(),
            r#"<strong class="govuk-tag app-tag" id="phase">Beta</strong>"#
        );
    }

    #[test]
    fn test_null_options_use_defaults() {
        let ctx = HtmlContext::default();
        let node = build(&ctx, ComponentName::BackLink, Value::Null).unwrap();
        assert_eq!(node.name(), ComponentName::BackLink);
        assert_eq!(
            node.render().as_str(),
            r##"<a class="govuk-back-link" href="#">Back</a>"##
        );
    }

    #[test]
    fn test_malformed_options() {
        let ctx = HtmlContext::default();
        let err = render(&ctx, "tag", json!({ "text": ["not", "a", "string"] })).unwrap_err();
        assert!(matches!(err, ComponentError::InvalidOptions { component, .. } if component == "tag"));
    }
}
