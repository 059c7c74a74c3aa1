//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Map global flags onto loader settings.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use platformsh_config::constants::DEFAULT_ENV_PREFIX;
use platformsh_config::{ConfigLoader, DecodePolicy, PROPERTY_NAMES, RoutePolicy};

#[derive(Parser)]
#[command(name = "platformsh-cli")]
#[command(about = "Inspect the Platform.sh deployment environment", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  platformsh-cli status\n  platformsh-cli routes --primary\n  platformsh-cli credentials database\n  platformsh-cli credentials solr --format solr-node\n  platformsh-cli variable DEBUG --default 0\n  platformsh-cli --allow-local-routes routes --upstream app\n"
)]
pub struct Cli {
    /// Prefix of the platform variables (e.g., PLATFORM_)
    #[arg(long, global = true, env = "PLATFORMSH_CLI_PREFIX", default_value = DEFAULT_ENV_PREFIX)]
    pub prefix: String,

    /// Serve routes and relationships outside the platform when they are present
    #[arg(long, global = true)]
    pub allow_local_routes: bool,

    /// Treat malformed structural variables as empty instead of failing
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Do not merge a `.env` file from the working directory
    #[arg(long, global = true)]
    pub no_dotenv: bool,

    /// Print single-line JSON instead of pretty-printed JSON
    #[arg(long, global = true)]
    pub compact: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the deployment state and environment flags
    Status,

    /// List routes, or select one by id, upstream, or primary flag
    Routes {
        /// Only routes leading to an application, optionally a specific one
        #[arg(long, value_name = "APP", conflicts_with = "id")]
        upstream: Option<Option<String>>,

        /// Only the primary route
        #[arg(long, conflicts_with_all = ["upstream", "id"])]
        primary: bool,

        /// The route with this id
        #[arg(long, value_name = "ID")]
        id: Option<String>,
    },

    /// Print the credentials of a relationship
    Credentials {
        /// Relationship name (e.g., database)
        name: String,

        /// Index of the service instance within the relationship
        #[arg(long, default_value_t = 0)]
        index: usize,

        /// Adapt the credentials with a registered formatter (e.g., solr-node)
        #[arg(long, value_name = "FORMATTER", conflicts_with = "index")]
        format: Option<String>,
    },

    /// Print one project variable
    Variable {
        /// Variable name (e.g., env:DEBUG)
        name: String,

        /// Value to print when the variable is not defined
        #[arg(long)]
        default: Option<String>,
    },

    /// Print all project variables
    Variables,

    /// Print the application definition
    Application,

    /// Print one scalar property of the environment
    Property {
        /// Property name
        #[arg(value_parser = PossibleValuesParser::new(PROPERTY_NAMES.iter().copied()))]
        name: String,
    },
}

impl Cli {
    /// Translate the global flags into a loader reading the process environment.
    pub fn loader(&self) -> ConfigLoader {
        let mut loader = ConfigLoader::new().with_prefix(self.prefix.clone());
        if self.lenient {
            loader = loader.with_decode_policy(DecodePolicy::Lenient);
        }
        if self.allow_local_routes {
            loader = loader.with_route_policy(RoutePolicy::AllowLocal);
        }
        loader
    }
}
