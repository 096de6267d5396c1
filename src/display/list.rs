use super::NO_RESULTS;
use super::style::OutputStyle;
use crate::api::models::Product;

const INDENT: &str = "   ";

/// Which lines a numbered product list shows
#[derive(Debug, Clone, PartialEq)]
pub struct ListStyle {
    /// Shown when a record has no name
    pub fallback_name: &'static str,
    /// Prefix of the price line; `None` prints the bare price
    pub price_label: Option<&'static str>,
    pub show_url: bool,
    /// First N attributes, comma-joined; 0 hides the line
    pub attribute_limit: usize,
    /// Trailing `<n> results` line
    pub show_count: bool,
}

impl ListStyle {
    /// Layout of `shopping find`
    pub fn shopping() -> Self {
        Self {
            fallback_name: "Unnamed",
            price_label: Some("Price: "),
            show_url: true,
            attribute_limit: 0,
            show_count: true,
        }
    }

    /// Layout of `recommendations get`
    pub fn recommendations() -> Self {
        Self {
            fallback_name: "Product",
            price_label: None,
            show_url: false,
            attribute_limit: 3,
            show_count: false,
        }
    }
}

/// Numbered, multi-line product list
pub struct ListDisplay {
    list_style: ListStyle,
    style: OutputStyle,
}

impl ListDisplay {
    pub fn new(list_style: ListStyle) -> Self {
        Self {
            list_style,
            style: OutputStyle::plain(),
        }
    }

    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    fn render_entry(&self, index: usize, product: &Product, lines: &mut Vec<String>) {
        let name = product
            .name
            .as_deref()
            .unwrap_or(self.list_style.fallback_name);
        let title = format!("{}. {}", index + 1, name);
        lines.push(match self.list_style.price_label {
            Some(_) => self.style.accent(&title),
            None => self.style.highlight(&title),
        });

        if let Some(price) = &product.price {
            let line = match self.list_style.price_label {
                Some(label) => format!("{}{}{}", INDENT, label, self.style.price(price)),
                None => format!("{}{}", INDENT, price),
            };
            lines.push(line);
        }

        if self.list_style.show_url
            && let Some(url) = &product.url
        {
            lines.push(format!("{}URL: {}", INDENT, self.style.dim(url)));
        }

        if self.list_style.attribute_limit > 0 && !product.attributes.is_empty() {
            let attributes = product
                .attributes
                .iter()
                .take(self.list_style.attribute_limit)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("{}{}", INDENT, self.style.dim(&attributes)));
        }

        lines.push(String::new());
    }

    pub fn render(&self, products: &[Product]) -> String {
        if products.is_empty() {
            return self.style.warning(NO_RESULTS);
        }

        let mut lines = Vec::new();
        for (index, product) in products.iter().enumerate() {
            self.render_entry(index, product, &mut lines);
        }

        if self.list_style.show_count {
            lines.push(self.style.dim(&format!("{} results", products.len())));
        }
        lines.join("\n")
    }
}
