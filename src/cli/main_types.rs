use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "klarnaai")]
#[command(about = "Klarna AI CLI - Search Klarna products from your terminal")]
#[command(version)]
#[command(after_help = "Examples:
  klarnaai products search laptop                 # Table of matching products
  klarnaai products search laptop --budget 800    # With a price limit
  klarnaai shopping find \"running shoes\" --size 5 # Numbered list
  klarnaai recommendations get headphones         # Top 5 picks
  klarnaai products search tv --json              # Raw JSON for scripting
  klarnaai config set --api-key <key>             # Store an API key
  klarnaai config show                            # Show configuration

Environment Variables:
  KLARNAAI_BASE_URL   Override the product search base URL
  KLARNAAI_API_KEY    API key fallback when none is stored")]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Custom configuration directory path
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// Base URL of the product search service
    #[arg(long, global = true, env = "KLARNAAI_BASE_URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Search and discover products
    Products {
        #[command(subcommand)]
        command: ProductsCommands,
    },
    /// Shopping and product discovery (alias for products)
    Shopping {
        #[command(subcommand)]
        command: ShoppingCommands,
    },
    /// Get product recommendations
    Recommendations {
        #[command(subcommand)]
        command: RecommendationsCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Set configuration values
    Set {
        /// API key (optional for the public endpoint)
        #[arg(long)]
        api_key: Option<String>,
    },
    /// Show current configuration
    Show,
}

#[derive(Subcommand, Debug)]
pub enum ProductsCommands {
    /// Search for products on Klarna
    Search(ProductsSearchArgs),
}

#[derive(Subcommand, Debug)]
pub enum ShoppingCommands {
    /// Find products by search query
    Find(ShoppingFindArgs),
}

#[derive(Subcommand, Debug)]
pub enum RecommendationsCommands {
    /// Get product recommendations for a category
    Get(RecommendationsGetArgs),
}

#[derive(Args, Debug)]
pub struct ProductsSearchArgs {
    /// Search query
    pub query: String,

    /// Number of products to return [default: 10]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: Option<u32>,

    /// Maximum price filter
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub budget: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ShoppingFindArgs {
    /// Search query
    pub query: String,

    /// Number of results [default: 10]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: Option<u32>,

    /// Maximum price
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_price: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct RecommendationsGetArgs {
    /// Product category
    pub category: String,

    /// Budget constraint
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub budget: Option<u32>,

    /// Number of recommendations [default: 5]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Common shape of the three search commands once flag names are resolved
#[derive(Debug, Clone, PartialEq)]
pub struct SearchArgs {
    pub query: String,
    pub size: Option<u32>,
    pub budget: Option<u32>,
    pub json: bool,
}

impl From<ProductsSearchArgs> for SearchArgs {
    fn from(args: ProductsSearchArgs) -> Self {
        Self {
            query: args.query,
            size: args.size,
            budget: args.budget,
            json: args.json,
        }
    }
}

impl From<ShoppingFindArgs> for SearchArgs {
    fn from(args: ShoppingFindArgs) -> Self {
        Self {
            query: args.query,
            size: args.size,
            budget: args.max_price,
            json: args.json,
        }
    }
}

impl From<RecommendationsGetArgs> for SearchArgs {
    fn from(args: RecommendationsGetArgs) -> Self {
        Self {
            query: args.category,
            size: args.count,
            budget: args.budget,
            json: args.json,
        }
    }
}
