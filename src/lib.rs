//! # GOV.UK Design System components
//!
//! HTML fragment builders for the GOV.UK Design System and frontends that
//! share its markup under a different class prefix.
//!
//! ## Features
//! - One node type per component, validated at construction
//! - Caller `classes` and `attributes` merged onto fixed defaults
//! - Brand prefix and default texts configurable from YAML
//! - JSON-driven rendering through the component registry
//! - Fixture files for checking markup against reference HTML
//!
//! ## Example
//! ```ignore
//! use govuk_components::{govuk_tag, HtmlContext, TagOptions};
//!
//! let ctx = HtmlContext::default();
//! let html = govuk_tag(&ctx, "Beta", TagOptions::default()).expect("tag renders");
//! assert_eq!(html.as_str(), r#"<strong class="govuk-tag">Beta</strong>"#);
//! ```
//!
//! ## Example: data-driven
//! ```ignore
//! use govuk_components::{registry, HtmlContext};
//! use serde_json::json;
//!
//! let ctx = HtmlContext::default();
//! let html = registry::render(&ctx, "back-link", json!({ "href": "/start" }))?;
//! ```

pub mod components;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod heading;
pub mod helpers;
pub mod html;
pub mod options;
pub mod registry;

// --- Core types ---
pub use components::Render;
pub use config::Config;
pub use error::{ComponentError, ComponentResult};
pub use heading::HeadingLevel;
pub use html::{Html, HtmlContext, RenderContext};
pub use options::{normalize, AttrValue, Attributes, Options};

// --- Options ---
pub use components::accordion::{AccordionOptions, AccordionSectionOptions};
pub use components::back_link::BackLinkOptions;
pub use components::breadcrumbs::{BreadcrumbItemOptions, BreadcrumbsOptions};
pub use components::button::ButtonOptions;
pub use components::character_count::CharacterCountOptions;
pub use components::date_input::{DateInputItemOptions, DateInputOptions};
pub use components::details::DetailsOptions;
pub use components::error_summary::{ErrorSummaryItemOptions, ErrorSummaryOptions};
pub use components::field::{ErrorMessageOptions, HintOptions, LabelOptions, LegendOptions};
pub use components::fieldset::FieldsetOptions;
pub use components::inset_text::InsetTextOptions;
pub use components::notification_banner::NotificationBannerOptions;
pub use components::pagination::{PaginationItemOptions, PaginationLinkOptions, PaginationOptions};
pub use components::panel::PanelOptions;
pub use components::phase_banner::PhaseBannerOptions;
pub use components::skip_link::SkipLinkOptions;
pub use components::summary_list::{
    SummaryCardOptions, SummaryListActionOptions, SummaryListOptions, SummaryListRowOptions,
    SummaryListTextOptions,
};
pub use components::table::{TableCellOptions, TableOptions};
pub use components::tabs::{TabOptions, TabsOptions};
pub use components::tag::TagOptions;
pub use components::task_list::{TaskListItemOptions, TaskListOptions, TaskStatusOptions};
pub use components::warning_text::WarningTextOptions;

// --- Helpers ---
pub use helpers::*;

// --- Registry & fixtures ---
pub use fixtures::{normalize_html, FixtureSuite};
pub use registry::{ComponentName, Node};
