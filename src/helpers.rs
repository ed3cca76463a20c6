//! Template-facing helpers, one per component family.
//!
//! Each helper takes the component's primary text or value positionally,
//! then its options, builds the component and returns the rendered fragment.
//! Positional arguments win over the same field in the options.

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
use crate::error::ComponentResult;
use crate::html::{Html, RenderContext};
use crate::options::{join_classes, normalize, Attributes, Options};
use serde::{Deserialize, Serialize};

fn set(field: &mut Option<String>, value: Option<&str>) {
    if let Some(value) = value {
        *field = Some(value.to_string());
    }
}

pub fn govuk_accordion(ctx: &dyn RenderContext, options: AccordionOptions) -> ComponentResult<Html> {
    Ok(Accordion::new(ctx, options)?.render())
}

/// `text` and `href` fall back to the configured defaults.
pub fn govuk_back_link(
    ctx: &dyn RenderContext,
    text: Option<&str>,
    href: Option<&str>,
    mut options: BackLinkOptions,
) -> ComponentResult<Html> {
    set(&mut options.text, text);
    set(&mut options.href, href);
    Ok(BackLink::new(ctx, options)?.render())
}

pub fn govuk_breadcrumbs(
    ctx: &dyn RenderContext,
    options: BreadcrumbsOptions,
) -> ComponentResult<Html> {
    Ok(Breadcrumbs::new(ctx, options)?.render())
}

pub fn govuk_button(
    ctx: &dyn RenderContext,
    text: &str,
    mut options: ButtonOptions,
) -> ComponentResult<Html> {
    options.text = Some(text.to_string());
    Ok(Button::new(ctx, options)?.render())
}

/// A start button linking to `href`
pub fn govuk_start_button(
    ctx: &dyn RenderContext,
    text: &str,
    href: &str,
    mut options: ButtonOptions,
) -> ComponentResult<Html> {
    options.href = Some(href.to_string());
    options.start = true;
    govuk_button(ctx, text, options)
}

pub fn govuk_character_count(
    ctx: &dyn RenderContext,
    options: CharacterCountOptions,
) -> ComponentResult<Html> {
    Ok(CharacterCount::new(ctx, options)?.render())
}

pub fn govuk_date_input(
    ctx: &dyn RenderContext,
    options: DateInputOptions,
) -> ComponentResult<Html> {
    Ok(DateInput::new(ctx, options)?.render())
}

pub fn govuk_details(
    ctx: &dyn RenderContext,
    summary_text: &str,
    text: Option<&str>,
    mut options: DetailsOptions,
) -> ComponentResult<Html> {
    options.summary_text = Some(summary_text.to_string());
    set(&mut options.text, text);
    Ok(Details::new(ctx, options)?.render())
}

pub fn govuk_error_summary(
    ctx: &dyn RenderContext,
    title_text: Option<&str>,
    mut options: ErrorSummaryOptions,
) -> ComponentResult<Html> {
    set(&mut options.title_text, title_text);
    Ok(ErrorSummary::new(ctx, options)?.render())
}

pub fn govuk_fieldset(ctx: &dyn RenderContext, options: FieldsetOptions) -> ComponentResult<Html> {
    Ok(Fieldset::new(ctx, options)?.render())
}

pub fn govuk_inset_text(
    ctx: &dyn RenderContext,
    text: &str,
    mut options: InsetTextOptions,
) -> ComponentResult<Html> {
    options.text = Some(text.to_string());
    Ok(InsetText::new(ctx, options)?.render())
}

pub fn govuk_notification_banner(
    ctx: &dyn RenderContext,
    title_text: Option<&str>,
    mut options: NotificationBannerOptions,
) -> ComponentResult<Html> {
    set(&mut options.title_text, title_text);
    Ok(NotificationBanner::new(ctx, options)?.render())
}

pub fn govuk_pagination(
    ctx: &dyn RenderContext,
    options: PaginationOptions,
) -> ComponentResult<Html> {
    Ok(Pagination::new(ctx, options)?.render())
}

pub fn govuk_panel(
    ctx: &dyn RenderContext,
    title_text: &str,
    text: Option<&str>,
    mut options: PanelOptions,
) -> ComponentResult<Html> {
    options.title_text = Some(title_text.to_string());
    set(&mut options.text, text);
    Ok(Panel::new(ctx, options)?.render())
}

pub fn govuk_phase_banner(
    ctx: &dyn RenderContext,
    options: PhaseBannerOptions,
) -> ComponentResult<Html> {
    Ok(PhaseBanner::new(ctx, options)?.render())
}

pub fn govuk_skip_link(
    ctx: &dyn RenderContext,
    text: Option<&str>,
    href: Option<&str>,
    mut options: SkipLinkOptions,
) -> ComponentResult<Html> {
    set(&mut options.text, text);
    set(&mut options.href, href);
    Ok(SkipLink::new(ctx, options)?.render())
}

pub fn govuk_summary_list(
    ctx: &dyn RenderContext,
    options: SummaryListOptions,
) -> ComponentResult<Html> {
    Ok(SummaryList::new(ctx, options)?.render())
}

pub fn govuk_table(ctx: &dyn RenderContext, options: TableOptions) -> ComponentResult<Html> {
    Ok(Table::new(ctx, options)?.render())
}

pub fn govuk_tabs(ctx: &dyn RenderContext, options: TabsOptions) -> ComponentResult<Html> {
    Ok(Tabs::new(ctx, options)?.render())
}

pub fn govuk_tag(
    ctx: &dyn RenderContext,
    text: &str,
    mut options: TagOptions,
) -> ComponentResult<Html> {
    options.text = Some(text.to_string());
    Ok(Tag::new(ctx, options)?.render())
}

pub fn govuk_task_list(ctx: &dyn RenderContext, options: TaskListOptions) -> ComponentResult<Html> {
    Ok(TaskList::new(ctx, options)?.render())
}

pub fn govuk_warning_text(
    ctx: &dyn RenderContext,
    text: &str,
    mut options: WarningTextOptions,
) -> ComponentResult<Html> {
    options.text = Some(text.to_string());
    Ok(WarningText::new(ctx, options)?.render())
}

/// Styling flags for [`govuk_link_to`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkOptions {
    /// Opens in a new tab and says so in the link text
    pub new_tab: bool,
    pub no_visited_state: bool,
    pub inverse: bool,
    pub muted: bool,
    pub text_colour: bool,
    pub no_underline: bool,
    #[serde(flatten)]
    pub options: Options,
}

/// A `govuk-link` anchor.
pub fn govuk_link_to(
    ctx: &dyn RenderContext,
    text: &str,
    href: &str,
    options: LinkOptions,
) -> Html {
    let base = ctx.config().class("link");
    let mut class = base.clone();
    for (enabled, modifier) in [
        (options.no_visited_state, "no-visited-state"),
        (options.inverse, "inverse"),
        (options.muted, "muted"),
        (options.text_colour, "text-colour"),
        (options.no_underline, "no-underline"),
    ] {
        if enabled {
            class = join_classes(&class, &format!("{}--{}", base, modifier));
        }
    }

    let mut defaults = Attributes::new().with("class", class);
    let text = if options.new_tab {
        defaults.insert("rel", "noreferrer noopener");
        defaults.insert("target", "_blank");
        format!("{} (opens in new tab)", text)
    } else {
        text.to_string()
    };

    ctx.link(ctx.escape(&text), href, &normalize(&options.options, &defaults))
}
