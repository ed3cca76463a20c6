use govuk_components::components::breadcrumbs::Breadcrumbs;
use govuk_components::components::summary_list::SummaryList;
use govuk_components::components::table::Table;
use govuk_components::components::tabs::Tabs;
use govuk_components::components::tag::Tag;
use govuk_components::components::task_list::TaskList;
use govuk_components::registry::{self, ComponentName};
use govuk_components::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

/// The least each component needs to render.
fn required_options(name: ComponentName) -> Value {
    match name {
        ComponentName::Accordion => json!({ "id": "acc", "items": [] }),
        ComponentName::Button => json!({ "text": "Continue" }),
        ComponentName::CharacterCount => json!({
            "id": "detail",
            "name": "detail",
            "max_length": 100,
            "label": { "text": "Detail" }
        }),
        ComponentName::DateInput => json!({ "id": "dob" }),
        ComponentName::Details => json!({ "summary_text": "Help", "text": "Body" }),
        ComponentName::InsetText => json!({ "text": "Note" }),
        ComponentName::Panel => json!({ "title_text": "Done" }),
        ComponentName::PhaseBanner => json!({ "tag": { "text": "Alpha" }, "text": "New service" }),
        ComponentName::Tag => json!({ "text": "Beta" }),
        ComponentName::WarningText => json!({ "text": "Careful" }),
        _ => json!({}),
    }
}

fn with_empty_options(mut options: Value) -> Value {
    if let Value::Object(map) = &mut options {
        map.insert("classes".to_string(), Value::Null);
        map.insert("attributes".to_string(), json!({}));
    }
    options
}

#[test]
fn test_explicit_empty_options_are_equivalent() {
    let ctx = HtmlContext::default();
    for name in ComponentName::ALL.iter().copied() {
        let implicit = registry::build(&ctx, name, required_options(name))
            .unwrap_or_else(|e| panic!("{} failed to build: {}", name, e))
            .render();
        let explicit = registry::build(&ctx, name, with_empty_options(required_options(name)))
            .unwrap_or_else(|e| panic!("{} failed to build: {}", name, e))
            .render();
        assert_eq!(implicit, explicit, "{} differs with explicit empty options", name);
    }
}

#[test]
fn test_render_is_idempotent() {
    let ctx = HtmlContext::default();
    for name in ComponentName::ALL.iter().copied() {
        let node = registry::build(&ctx, name, required_options(name)).unwrap();
        assert_eq!(node.render(), node.render(), "{} renders differently twice", name);
    }
}

fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            html.find(needle)
                .unwrap_or_else(|| panic!("'{}' not rendered", needle))
        })
        .collect()
}

fn assert_in_order(html: &str, needles: &[&str]) {
    let found = positions(html, needles);
    let mut sorted = found.clone();
    sorted.sort();
    assert_eq!(found, sorted, "children out of order in {}", html);
}

#[test]
fn test_breadcrumb_children_keep_input_order() {
    let ctx = HtmlContext::default();
    let labels = ["Home", "Benefits", "Housing", "Council Tax"];
    let options = BreadcrumbsOptions {
        items: labels
            .iter()
            .map(|text| BreadcrumbItemOptions {
                text: Some(text.to_string()),
                href: Some(format!("/{}", text.to_lowercase())),
                ..BreadcrumbItemOptions::default()
            })
            .collect(),
        ..BreadcrumbsOptions::default()
    };
    let breadcrumbs = Breadcrumbs::new(&ctx, options).unwrap();
    assert_eq!(breadcrumbs.items().len(), labels.len());

    let html = breadcrumbs.render().into_string();
    assert_eq!(html.matches("<li ").count(), labels.len());
    assert_in_order(&html, &labels);
}

#[test]
fn test_tabs_and_task_list_children_keep_input_order() {
    let ctx = HtmlContext::default();
    let tabs = Tabs::new(
        &ctx,
        TabsOptions {
            items: ["Day", "Week", "Month"]
                .iter()
                .map(|label| TabOptions {
                    label: Some(label.to_string()),
                    text: Some(format!("Past {}", label.to_lowercase())),
                    ..TabOptions::default()
                })
                .collect(),
            ..TabsOptions::default()
        },
    )
    .unwrap();
    assert_eq!(tabs.tabs().len(), 3);
    let html = tabs.render().into_string();
    assert_in_order(&html, &["#tab-1", "#tab-2", "#tab-3"]);
    assert_in_order(&html, &["Past day", "Past week", "Past month"]);

    let task_list = TaskList::new(
        &ctx,
        TaskListOptions {
            id_prefix: Some("apply".to_string()),
            items: ["Details", "Documents"]
                .iter()
                .map(|title| TaskListItemOptions {
                    title_text: Some(title.to_string()),
                    status: Some(TaskStatusOptions {
                        text: Some("Not started".to_string()),
                        ..TaskStatusOptions::default()
                    }),
                    ..TaskListItemOptions::default()
                })
                .collect(),
            ..TaskListOptions::default()
        },
    )
    .unwrap();
    assert_eq!(task_list.items().len(), 2);
    let html = task_list.render().into_string();
    assert_in_order(&html, &["Details", "apply-1-status", "Documents", "apply-2-status"]);
}

#[test]
fn test_table_rows_keep_input_order() {
    let ctx = HtmlContext::default();
    let months = ["January", "February", "March"];
    let table = Table::new(
        &ctx,
        TableOptions {
            rows: months
                .iter()
                .map(|month| {
                    vec![TableCellOptions {
                        text: Some(month.to_string()),
                        ..TableCellOptions::default()
                    }]
                })
                .collect(),
            ..TableOptions::default()
        },
    )
    .unwrap();
    assert_eq!(table.rows().len(), months.len());
    assert_in_order(&table.render().into_string(), &months);
}

#[test]
fn test_child_failure_fails_the_composite() {
    let ctx = HtmlContext::default();
    let err = registry::render(
        &ctx,
        "tabs",
        json!({ "items": [{ "label": "One", "text": "1" }, { "text": "no label" }] }),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ComponentError::MissingField {
            component: "tabs".to_string(),
            field: "items.label".to_string(),
        }
    );
}

#[test]
fn test_options_reused_across_components() {
    let ctx = HtmlContext::default();
    let options = TagOptions {
        text: Some("Shared".to_string()),
        options: Options::new()
            .classes("app-tag")
            .attribute("data", Attributes::new().with("module", "app-tag")),
        ..TagOptions::default()
    };
    let before = options.clone();

    let first = Tag::new(&ctx, options.clone()).unwrap().render();
    let second = Tag::new(&ctx, options.clone()).unwrap().render();

    assert_eq!(first, second);
    assert_eq!(options, before);
    assert_eq!(
        first.as_str(),
        r#"<strong class="govuk-tag app-tag" data-module="app-tag">Shared</strong>"#
    );
}

#[test]
fn test_data_module_marker_survives_caller_data() {
    let ctx = HtmlContext::default();
    let html = registry::render(
        &ctx,
        "skip-link",
        json!({ "attributes": { "data": { "module": "app-skip", "tracking": "skip" } } }),
    )
    .unwrap();
    assert_eq!(
        html.as_str(),
        r##"<a class="govuk-skip-link" data-module="govuk-skip-link" data-tracking="skip" href="#main-content">Skip to main content</a>"##
    );
}

fn summary_card(actions: &[(&str, &str)]) -> String {
    let ctx = HtmlContext::default();
    let options = SummaryListOptions {
        card: Some(SummaryCardOptions {
            title_text: Some("University of Gloucestershire".to_string()),
            actions: actions
                .iter()
                .map(|(text, href)| SummaryListActionOptions {
                    text: Some(text.to_string()),
                    href: Some(href.to_string()),
                    ..SummaryListActionOptions::default()
                })
                .collect(),
            ..SummaryCardOptions::default()
        }),
        ..SummaryListOptions::default()
    };
    SummaryList::new(&ctx, options).unwrap().render().into_string()
}

#[test]
fn test_summary_card_single_action() {
    let html = summary_card(&[("Withdraw", "/withdraw")]);
    assert!(html.contains(
        r#"<div class="govuk-summary-card__actions"><a class="govuk-link" href="/withdraw">Withdraw</a></div>"#
    ));
    assert_eq!(html.matches("govuk-summary-card__action\"").count(), 0);
}

#[test]
fn test_summary_card_two_actions() {
    let html = summary_card(&[("Delete choice", "/delete"), ("Withdraw", "/withdraw")]);
    assert!(html.contains(r#"<ul class="govuk-summary-card__actions">"#));
    assert_eq!(
        html.matches(r#"<li class="govuk-summary-card__action">"#).count(),
        2
    );
    assert_in_order(&html, &["Delete choice", "Withdraw"]);
}

#[test]
fn test_heading_level_out_of_range_is_rejected() {
    let ctx = HtmlContext::default();
    for level in [0, 7, -1] {
        let err = registry::render(
            &ctx,
            "panel",
            json!({ "title_text": "Done", "heading_level": level }),
        )
        .unwrap_err();
        assert_eq!(err, ComponentError::InvalidHeadingLevel { level });
    }
}

#[test]
fn test_brand_prefix_from_config() {
    let config = Config::from_yaml("brand: nhsuk\ndefault_back_link_text: Go back\n").unwrap();
    let ctx = HtmlContext::new(config);
    assert_eq!(
        govuk_tag(&ctx, "New", TagOptions::default()).unwrap().as_str(),
        r#"<strong class="nhsuk-tag">New</strong>"#
    );
    assert_eq!(
        govuk_back_link(&ctx, None, None, BackLinkOptions::default())
            .unwrap()
            .as_str(),
        r##"<a class="nhsuk-back-link" href="#">Go back</a>"##
    );
}

#[test]
fn test_pagination_default_labels() {
    let ctx = HtmlContext::default();
    let html = govuk_pagination(
        &ctx,
        PaginationOptions {
            previous: Some(PaginationLinkOptions {
                href: Some("/results?page=1".to_string()),
                ..PaginationLinkOptions::default()
            }),
            next: Some(PaginationLinkOptions {
                href: Some("/results?page=3".to_string()),
                text: Some("More results".to_string()),
                ..PaginationLinkOptions::default()
            }),
            items: vec![PaginationItemOptions {
                number: Some("2".to_string()),
                href: Some("/results?page=2".to_string()),
                current: true,
                ..PaginationItemOptions::default()
            }],
            ..PaginationOptions::default()
        },
    )
    .unwrap()
    .into_string();

    assert!(html.contains(
        r#"<span class="govuk-pagination__link-title">Previous<span class="govuk-visually-hidden"> page</span></span>"#
    ));
    assert!(html.contains(r#"<span class="govuk-pagination__link-title">More results</span>"#));
    assert_eq!(html.matches(" page</span>").count(), 1);
    assert_in_order(&html, &["govuk-pagination__prev", "govuk-pagination__list", "govuk-pagination__next"]);
}

#[test]
fn test_text_is_escaped_and_html_is_trusted() {
    let ctx = HtmlContext::default();
    let escaped = govuk_inset_text(&ctx, "Fish & <chips>", InsetTextOptions::default()).unwrap();
    assert_eq!(
        escaped.as_str(),
        r#"<div class="govuk-inset-text">Fish &amp; &lt;chips&gt;</div>"#
    );

    let trusted = registry::render(&ctx, "inset-text", json!({ "html": "<p>Fish &amp; chips</p>" }))
        .unwrap();
    assert_eq!(
        trusted.as_str(),
        r#"<div class="govuk-inset-text"><p>Fish &amp; chips</p></div>"#
    );
}

#[test]
fn test_flat_aria_label_replaces_the_default() {
    let ctx = HtmlContext::default();
    let html = registry::render(
        &ctx,
        "breadcrumbs",
        json!({
            "items": [{ "text": "Home", "href": "/" }],
            "attributes": { "aria-label": "Custom trail" }
        }),
    )
    .unwrap()
    .into_string();
    assert_eq!(html.matches("aria-label=").count(), 1);
    assert!(html.contains(r#"aria-label="Custom trail""#));
}

#[test]
fn test_flat_data_module_is_not_duplicated() {
    let ctx = HtmlContext::default();
    let html = registry::render(
        &ctx,
        "button",
        json!({ "text": "Go", "attributes": { "data-module": "app-button" } }),
    )
    .unwrap()
    .into_string();
    assert_eq!(html.matches("data-module=").count(), 1);
    assert!(html.contains(r#"data-module="govuk-button""#));
}

#[test]
fn test_caller_hint_id_is_referenced() {
    let ctx = HtmlContext::default();
    let html = registry::render(
        &ctx,
        "character-count",
        json!({
            "id": "detail",
            "name": "detail",
            "max_length": 100,
            "label": { "text": "Detail" },
            "hint": { "text": "Be brief", "attributes": { "id": "custom-hint" } }
        }),
    )
    .unwrap()
    .into_string();
    assert!(html.contains(r#"<div class="govuk-hint" id="custom-hint">Be brief</div>"#));
    assert!(html.contains(r#"aria-describedby="detail-info custom-hint""#));
    assert!(!html.contains("detail-hint"));
}
