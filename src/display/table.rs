use super::NO_RESULTS;
use super::style::OutputStyle;
use crate::api::models::Product;
use crate::utils::text::{fit_to_width, head_with_ellipsis};
use unicode_width::UnicodeWidthStr;

/// Upper bound for any column, in terminal columns
pub const MAX_COLUMN_WIDTH: usize = 50;
const COLUMN_SEPARATOR: &str = "  ";
const RULE_CHAR: &str = "─";
const URL_DISPLAY_CHARS: usize = 40;

/// One table column: a header label and a cell formatter
pub struct Column {
    pub label: &'static str,
    format: fn(&Product) -> String,
}

impl Column {
    pub fn new(label: &'static str, format: fn(&Product) -> String) -> Self {
        Self { label, format }
    }

    pub fn format_cell(&self, product: &Product) -> String {
        (self.format)(product)
    }
}

fn product_name(product: &Product) -> String {
    product.name.clone().unwrap_or_default()
}

fn product_price(product: &Product) -> String {
    product.price.clone().unwrap_or_default()
}

/// Every present URL gets the "..." suffix, cut or not
fn product_url(product: &Product) -> String {
    product
        .url
        .as_deref()
        .map(|url| head_with_ellipsis(url, URL_DISPLAY_CHARS))
        .unwrap_or_default()
}

/// Column-aligned product table
pub struct TableDisplay {
    columns: Vec<Column>,
    style: OutputStyle,
}

impl TableDisplay {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            style: OutputStyle::plain(),
        }
    }

    /// Product Name / Price / URL, as used by `products search`
    pub fn products() -> Self {
        Self::new(vec![
            Column::new("Product Name", product_name),
            Column::new("Price", product_price),
            Column::new("URL", product_url),
        ])
    }

    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    /// Widest of label and cells per column, capped at `MAX_COLUMN_WIDTH`
    pub fn column_widths(&self, products: &[Product]) -> Vec<usize> {
        self.columns
            .iter()
            .map(|column| {
                products
                    .iter()
                    .map(|product| column.format_cell(product).width())
                    .fold(column.label.width(), usize::max)
                    .min(MAX_COLUMN_WIDTH)
            })
            .collect()
    }

    fn render_line(&self, cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
        cells
            .zip(widths)
            .map(|(cell, width)| fit_to_width(&cell, *width))
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR)
    }

    pub fn render(&self, products: &[Product]) -> String {
        if products.is_empty() {
            return self.style.warning(NO_RESULTS);
        }

        let widths = self.column_widths(products);
        let header = self.render_line(
            self.columns.iter().map(|column| column.label.to_string()),
            &widths,
        );

        let mut lines = Vec::with_capacity(products.len() + 4);
        lines.push(self.style.header(&header));
        lines.push(self.style.dim(&RULE_CHAR.repeat(header.width())));

        for product in products {
            lines.push(self.render_line(
                self.columns.iter().map(|column| column.format_cell(product)),
                &widths,
            ));
        }

        lines.push(String::new());
        lines.push(self.style.dim(&format!("{} result(s)", products.len())));
        lines.join("\n")
    }
}
