use super::{class_attr, text_or_html, Render};
use crate::error::ComponentResult;
use crate::html::{Html, RenderContext};
use crate::options::{join_classes, normalize, Attributes, Options};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableCellOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Only `numeric` has an effect
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colspan: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rowspan: Option<u32>,
    /// Render a body cell as a row header
    pub header: bool,
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_classes: Option<String>,
    pub first_cell_is_header: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub head: Vec<TableCellOptions>,
    pub rows: Vec<Vec<TableCellOptions>>,
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// `th` in the table head
    ColumnHeader,
    /// `th` leading a body row
    RowHeader,
    Data,
}

pub struct TableCell<'a> {
    ctx: &'a dyn RenderContext,
    kind: CellKind,
    content: Html,
    attributes: Attributes,
}

impl<'a> TableCell<'a> {
    pub fn new(
        ctx: &'a dyn RenderContext,
        kind: CellKind,
        cell: TableCellOptions,
    ) -> ComponentResult<Self> {
        let config = ctx.config();
        let content = text_or_html(ctx, cell.text.as_deref(), cell.html.as_deref())
            .unwrap_or_default();

        let base = match kind {
            CellKind::ColumnHeader | CellKind::RowHeader => config.class("table__header"),
            CellKind::Data => config.class("table__cell"),
        };
        let class = match cell.format.as_deref() {
            Some("numeric") => join_classes(&base, &format!("{}--numeric", base)),
            _ => base,
        };
        let scope = match kind {
            CellKind::ColumnHeader => Some("col"),
            CellKind::RowHeader => Some("row"),
            CellKind::Data => None,
        };
        let defaults = class_attr(class)
            .with_opt("scope", scope)
            .with_opt("colspan", cell.colspan)
            .with_opt("rowspan", cell.rowspan);

        Ok(Self {
            ctx,
            kind,
            content,
            attributes: normalize(&cell.options, &defaults),
        })
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }
}

impl Render for TableCell<'_> {
    fn render(&self) -> Html {
        let name = match self.kind {
            CellKind::Data => "td",
            _ => "th",
        };
        self.ctx.tag(name, &self.attributes, self.content.clone())
    }
}

pub struct TableRow<'a> {
    ctx: &'a dyn RenderContext,
    cells: Vec<TableCell<'a>>,
}

impl<'a> TableRow<'a> {
    fn head(ctx: &'a dyn RenderContext, cells: Vec<TableCellOptions>) -> ComponentResult<Self> {
        let cells = cells
            .into_iter()
            .map(|cell| TableCell::new(ctx, CellKind::ColumnHeader, cell))
            .collect::<ComponentResult<Vec<_>>>()?;
        Ok(Self { ctx, cells })
    }

    fn body(
        ctx: &'a dyn RenderContext,
        cells: Vec<TableCellOptions>,
        first_cell_is_header: bool,
    ) -> ComponentResult<Self> {
        let cells = cells
            .into_iter()
            .enumerate()
            .map(|(i, cell)| {
                let kind = if cell.header || (first_cell_is_header && i == 0) {
                    CellKind::RowHeader
                } else {
                    CellKind::Data
                };
                TableCell::new(ctx, kind, cell)
            })
            .collect::<ComponentResult<Vec<_>>>()?;
        Ok(Self { ctx, cells })
    }

    pub fn cells(&self) -> &[TableCell<'a>] {
        &self.cells
    }
}

impl Render for TableRow<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        ctx.tag(
            "tr",
            &class_attr(ctx.config().class("table__row")),
            ctx.concat(self.cells.iter().map(Render::render).collect()),
        )
    }
}

pub struct Table<'a> {
    ctx: &'a dyn RenderContext,
    caption: Option<(Html, Attributes)>,
    head: Option<TableRow<'a>>,
    rows: Vec<TableRow<'a>>,
    attributes: Attributes,
}

impl<'a> Table<'a> {
    pub fn new(ctx: &'a dyn RenderContext, options: TableOptions) -> ComponentResult<Self> {
        let config = ctx.config();

        let caption = options.caption.as_deref().map(|caption| {
            let base = config.class("table__caption");
            let mut class = match options.caption_size.as_deref() {
                Some(size @ ("s" | "m" | "l" | "xl")) => {
                    join_classes(&base, &format!("{}--{}", base, size))
                }
                _ => base,
            };
            if let Some(extra) = options.caption_classes.as_deref() {
                class = join_classes(&class, extra);
            }
            (ctx.escape(caption), class_attr(class))
        });

        let head = if options.head.is_empty() {
            None
        } else {
            Some(TableRow::head(ctx, options.head)?)
        };
        let first_cell_is_header = options.first_cell_is_header;
        let rows = options
            .rows
            .into_iter()
            .map(|row| TableRow::body(ctx, row, first_cell_is_header))
            .collect::<ComponentResult<Vec<_>>>()?;

        let defaults = class_attr(config.class("table"));
        Ok(Self {
            ctx,
            caption,
            head,
            rows,
            attributes: normalize(&options.options, &defaults),
        })
    }

    pub fn rows(&self) -> &[TableRow<'a>] {
        &self.rows
    }
}

impl Render for Table<'_> {
    fn render(&self) -> Html {
        let ctx = self.ctx;
        let config = ctx.config();
        let mut parts = Vec::new();

        if let Some((caption, attrs)) = &self.caption {
            parts.push(ctx.tag("caption", attrs, caption.clone()));
        }
        if let Some(head) = &self.head {
            parts.push(ctx.tag(
                "thead",
                &class_attr(config.class("table__head")),
                head.render(),
            ));
        }
        parts.push(ctx.tag(
            "tbody",
            &class_attr(config.class("table__body")),
            ctx.concat(self.rows.iter().map(Render::render).collect()),
        ));

        ctx.tag("table", &self.attributes, ctx.concat(parts))
    }
}
