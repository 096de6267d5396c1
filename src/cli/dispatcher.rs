use crate::api::client::{DEFAULT_BASE_URL, KlarnaClient};
use crate::cli::command_handlers::{ConfigHandler, SearchHandler, SearchProfile};
use crate::cli::main_types::{
    Commands, ProductsCommands, RecommendationsCommands, SearchArgs, ShoppingCommands,
};
use crate::core::services::config_service::ConfigService;
use crate::core::services::search_service::SearchService;
use crate::error::{ApiError, AppError};
use crate::storage::config::Config;
use crate::utils::logging::VerboseLogger;
use crate::utils::validation::validate_url;
use std::path::PathBuf;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    base_url: Option<String>,
    logger: VerboseLogger,
}

impl Dispatcher {
    fn log_verbose(&self, msg: &str) {
        self.logger.log(msg);
    }

    /// `config_path` of `None` means the default config location
    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        base_url: Option<String>,
        verbose: bool,
    ) -> Self {
        Self {
            config,
            config_path,
            base_url,
            logger: VerboseLogger::new(verbose),
        }
    }

    // Base URL: --base-url / KLARNAAI_BASE_URL, else the public endpoint
    fn get_base_url(&self) -> String {
        self.base_url
            .clone()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    // The stored API key is not sent with requests
    fn create_client(&self) -> Result<KlarnaClient, AppError> {
        let base_url = self.get_base_url();
        validate_url(&base_url)?;
        self.log_verbose(&format!("Creating client for {}", base_url));
        Ok(KlarnaClient::new(base_url)?)
    }

    fn create_config_service(&self) -> ConfigService {
        ConfigService::new(self.config.clone(), self.config_path.clone())
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Config { command } => {
                let mut config_service = self.create_config_service();
                let verbose = self.logger.is_enabled();
                ConfigHandler::new().handle(command, &mut config_service, verbose)
            }
            Commands::Products {
                command: ProductsCommands::Search(args),
            } => self.run_search(SearchProfile::products(), args.into()).await,
            Commands::Shopping {
                command: ShoppingCommands::Find(args),
            } => self.run_search(SearchProfile::shopping(), args.into()).await,
            Commands::Recommendations {
                command: RecommendationsCommands::Get(args),
            } => {
                self.run_search(SearchProfile::recommendations(), args.into())
                    .await
            }
        }
    }

    async fn run_search(&self, profile: SearchProfile, args: SearchArgs) -> Result<(), AppError> {
        let service = SearchService::new(self.create_client()?);
        let result = SearchHandler::new()
            .handle(&profile, args, &service, self.logger.is_enabled())
            .await;

        if let Err(AppError::Api(err)) = &result {
            self.log_verbose(&failed_request_trace(err));
        }
        result
    }
}

/// Verbose trace for a failed request: endpoint, then status when one came back
fn failed_request_trace(err: &ApiError) -> String {
    let endpoint = err.endpoint().unwrap_or("<unbuilt request>");
    match err.status() {
        Some(status) => format!("Request to {} failed with status {}", endpoint, status),
        None => format!("Request to {} failed: {}", endpoint, err),
    }
}
