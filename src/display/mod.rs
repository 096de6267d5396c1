pub mod json;
pub mod list;
pub mod progress;
pub mod style;
pub mod table;

pub use json::render_json;
pub use list::{ListDisplay, ListStyle};
pub use progress::ProgressSpinner;
pub use style::{OutputStyle, print_error, print_success};
pub use table::{Column, TableDisplay};

/// Notice printed by the table and list renderers for an empty product list
pub const NO_RESULTS: &str = "No results found.";
