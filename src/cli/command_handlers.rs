use crate::api::models::SearchResults;
use crate::cli::main_types::{ConfigCommands, SearchArgs};
use crate::core::services::config_service::{ApiKeyStatus, ConfigService};
use crate::core::services::search_service::SearchService;
use crate::core::services::traits::ProductApi;
use crate::core::services::types::SearchQuery;
use crate::display::{
    ListDisplay, ListStyle, OutputStyle, ProgressSpinner, TableDisplay, print_success,
    render_json,
};
use crate::error::{AppError, CliError};
use crate::storage::credentials::{ApiKeySource, get_env_api_key};
use crate::utils::logging::print_verbose;

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: ConfigCommands,
        config_service: &mut ConfigService,
        verbose: bool,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Set { api_key } => {
                print_verbose(verbose, "Attempting config set command using ConfigService");

                let Some(api_key) = api_key.filter(|key| !key.is_empty()) else {
                    return Err(AppError::Cli(CliError::InvalidArguments(
                        "No options provided. Use --api-key".to_string(),
                    )));
                };

                config_service.set_api_key(api_key);
                config_service.save_config()?;
                print_success("API Key set");
                Ok(())
            }
            ConfigCommands::Show => {
                print_verbose(verbose, "Attempting config show command using ConfigService");

                let status = config_service.api_key_status(get_env_api_key());
                println!("{}", render_config_status(&status, OutputStyle::detect()));
                Ok(())
            }
        }
    }
}

/// `config show` output; the key itself is never part of it
pub fn render_config_status(status: &ApiKeyStatus, style: OutputStyle) -> String {
    let key_line = match status {
        ApiKeyStatus::Set { masked, source } => {
            let origin = match source {
                ApiKeySource::ConfigFile => String::new(),
                ApiKeySource::Environment => format!(" (from {})", source.label()),
            };
            format!("{}{}", style.price(masked), origin)
        }
        ApiKeyStatus::NotSet => style.warning("not set (optional for public endpoint)"),
    };

    format!(
        "\n{}\n\nAPI Key:  {}\n",
        style.heading("Klarna AI CLI Configuration"),
        key_line
    )
}

/// How a search command renders its results
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Renderer {
    Table,
    ShoppingList,
    Recommendations,
}

/// Per-command settings for the shared search handler
#[derive(Debug, Clone, PartialEq)]
pub struct SearchProfile {
    /// Applied when the size flag is omitted
    pub default_size: u32,
    pub renderer: Renderer,
    pub progress_message: &'static str,
}

impl SearchProfile {
    /// `products search`
    pub fn products() -> Self {
        Self {
            default_size: 10,
            renderer: Renderer::Table,
            progress_message: "Searching products...",
        }
    }

    /// `shopping find`
    pub fn shopping() -> Self {
        Self {
            default_size: 10,
            renderer: Renderer::ShoppingList,
            progress_message: "Finding products...",
        }
    }

    /// `recommendations get`
    pub fn recommendations() -> Self {
        Self {
            default_size: 5,
            renderer: Renderer::Recommendations,
            progress_message: "Fetching recommendations...",
        }
    }

    pub fn build_query(&self, args: &SearchArgs) -> SearchQuery {
        SearchQuery::new(args.query.clone())
            .with_size(Some(args.size.unwrap_or(self.default_size)))
            .with_budget(args.budget)
    }
}

/// Everything a search command writes to stdout
pub fn render_search_output(
    profile: &SearchProfile,
    term: &str,
    results: &SearchResults,
    json: bool,
    style: OutputStyle,
) -> Result<String, AppError> {
    if json {
        return Ok(render_json(results.raw())?);
    }

    let products = results.products();
    let output = match profile.renderer {
        Renderer::Table => {
            if products.is_empty() {
                format!(
                    "\n{}{}",
                    style.warning("No products found for: "),
                    style.heading(term)
                )
            } else {
                format!(
                    "\n{}{}\n\n{}",
                    style.heading(&format!("Found {} products for: ", products.len())),
                    style.accent(term),
                    TableDisplay::products().with_style(style).render(&products)
                )
            }
        }
        Renderer::ShoppingList => format!(
            "\n{}\n\n{}",
            style.heading("Search Results"),
            ListDisplay::new(ListStyle::shopping())
                .with_style(style)
                .render(&products)
        ),
        Renderer::Recommendations => format!(
            "\n{}{}\n\n{}",
            style.heading("Top recommendations for: "),
            style.accent(term),
            ListDisplay::new(ListStyle::recommendations())
                .with_style(style)
                .render(&products)
        ),
    };
    Ok(output)
}

#[derive(Default)]
pub struct SearchHandler;

impl SearchHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle<A: ProductApi>(
        &self,
        profile: &SearchProfile,
        args: SearchArgs,
        service: &SearchService<A>,
        verbose: bool,
    ) -> Result<(), AppError> {
        let query = profile.build_query(&args);
        print_verbose(
            verbose,
            &format!(
                "Searching - Query: {:?}, Size: {:?}, Budget: {:?}, JSON: {}",
                query.query, query.size, query.budget, args.json
            ),
        );

        let mut spinner = ProgressSpinner::new(profile.progress_message.to_string());
        spinner.start();
        let result = service.search_products(&query).await;
        spinner.stop();
        let results = result?;

        print_verbose(
            verbose,
            &format!("Received {} product(s)", results.products().len()),
        );

        let output =
            render_search_output(profile, &args.query, &results, args.json, OutputStyle::detect())?;
        println!("{}", output);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::config::Config;
    use serde_json::json;
    use tempfile::tempdir;

    fn laptop_results() -> SearchResults {
        SearchResults::new(json!({
            "products": [
                {
                    "name": "Laptop A",
                    "price": "$500.00",
                    "url": "https://example.test/a",
                    "attributes": ["Silver"]
                },
                {"name": "Laptop B", "price": "$700.00", "url": "https://example.test/b"}
            ]
        }))
    }

    fn search_args(query: &str) -> SearchArgs {
        SearchArgs {
            query: query.to_string(),
            size: None,
            budget: None,
            json: false,
        }
    }

    #[test]
    fn test_profile_defaults() {
        assert_eq!(SearchProfile::products().default_size, 10);
        assert_eq!(SearchProfile::shopping().default_size, 10);
        assert_eq!(SearchProfile::recommendations().default_size, 5);
    }

    #[test]
    fn test_build_query_applies_default_size_only() {
        let query = SearchProfile::recommendations().build_query(&search_args("headphones"));
        assert_eq!(query.size, Some(5));
        assert_eq!(query.budget, None);

        let mut args = search_args("headphones");
        args.size = Some(2);
        args.budget = Some(150);
        let query = SearchProfile::recommendations().build_query(&args);
        assert_eq!(query.size, Some(2));
        assert_eq!(query.budget, Some(150));
    }

    #[test]
    fn test_products_output_table() {
        let output = render_search_output(
            &SearchProfile::products(),
            "laptop",
            &laptop_results(),
            false,
            OutputStyle::plain(),
        )
        .expect("render");

        assert!(output.starts_with("\nFound 2 products for: laptop\n\nProduct Name"));
        assert!(output.ends_with("2 result(s)"));
        let data_rows = output
            .lines()
            .filter(|line| line.starts_with("Laptop "))
            .count();
        assert_eq!(data_rows, 2);
    }

    #[test]
    fn test_products_output_empty() {
        let output = render_search_output(
            &SearchProfile::products(),
            "unobtainium",
            &SearchResults::new(json!({"products": []})),
            false,
            OutputStyle::plain(),
        )
        .expect("render");
        assert_eq!(output, "\nNo products found for: unobtainium");
    }

    #[test]
    fn test_shopping_output_list() {
        let output = render_search_output(
            &SearchProfile::shopping(),
            "laptop",
            &laptop_results(),
            false,
            OutputStyle::plain(),
        )
        .expect("render");
        assert!(output.starts_with("\nSearch Results\n\n1. Laptop A\n   Price: $500.00"));
        assert!(output.ends_with("2 results"));
    }

    #[test]
    fn test_recommendations_output() {
        let output = render_search_output(
            &SearchProfile::recommendations(),
            "laptop",
            &laptop_results(),
            false,
            OutputStyle::plain(),
        )
        .expect("render");
        assert!(output.starts_with(
            "\nTop recommendations for: laptop\n\n1. Laptop A\n   $500.00\n   Silver\n"
        ));
        assert!(!output.contains("https://"));
    }

    #[test]
    fn test_json_short_circuits_formatting() {
        for profile in [
            SearchProfile::products(),
            SearchProfile::shopping(),
            SearchProfile::recommendations(),
        ] {
            let output = render_search_output(
                &profile,
                "laptop",
                &laptop_results(),
                true,
                OutputStyle::new(true),
            )
            .expect("render");
            let reparsed: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
            assert_eq!(&reparsed, laptop_results().raw());
        }
    }

    #[test]
    fn test_config_status_masks_key() {
        let status = ApiKeyStatus::Set {
            masked: "********".to_string(),
            source: ApiKeySource::ConfigFile,
        };
        let output = render_config_status(&status, OutputStyle::plain());
        assert!(output.contains("API Key:  ********"));
        assert!(output.contains("Klarna AI CLI Configuration"));

        let output = render_config_status(&ApiKeyStatus::NotSet, OutputStyle::plain());
        assert!(output.contains("not set (optional for public endpoint)"));
    }

    #[test]
    fn test_config_set_then_show_never_prints_key() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        let handler = ConfigHandler::new();

        let mut service = ConfigService::new(Config::default(), Some(config_path.clone()));
        handler
            .handle(
                ConfigCommands::Set {
                    api_key: Some("abc123".to_string()),
                },
                &mut service,
                false,
            )
            .expect("config set should succeed");

        let loaded = Config::load(Some(config_path)).expect("Failed to load config");
        assert_eq!(loaded.api_key.as_deref(), Some("abc123"));

        let status = ConfigService::new(loaded, None).api_key_status(None);
        let output = render_config_status(&status, OutputStyle::plain());
        assert!(!output.contains("abc123"));
    }

    #[test]
    fn test_config_set_without_key_fails() {
        let handler = ConfigHandler::new();
        let mut service = ConfigService::new(Config::default(), None);

        for api_key in [None, Some(String::new())] {
            let result = handler.handle(ConfigCommands::Set { api_key }, &mut service, false);
            match result {
                Err(AppError::Cli(CliError::InvalidArguments(message))) => {
                    assert_eq!(message, "No options provided. Use --api-key");
                }
                other => panic!("expected InvalidArguments, got {:?}", other),
            }
        }
    }
}
