use crate::commands::{
    open_route, run_supplier_detail, run_supplier_insights, run_supplier_list, submit_compliance,
    SubmitArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use supplier_compliance::config::{ApiConfig, AppConfig};
use supplier_compliance::error::AppError;
use supplier_compliance::{telemetry, ComplianceApiClient, SupplierId};

#[derive(Parser, Debug)]
#[command(
    name = "Supplier Compliance Dashboard",
    about = "Browse supplier compliance records and AI insights from the compliance API",
    version
)]
struct Cli {
    /// Override the configured compliance API base URL
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the dashboard HTTP server (default command)
    Serve(ServeArgs),
    #[command(flatten)]
    View(ViewCommand),
}

/// Commands that talk to the compliance API and exit.
#[derive(Subcommand, Debug)]
enum ViewCommand {
    /// Render the supplier views as text
    Suppliers {
        #[command(subcommand)]
        command: SuppliersCommand,
    },
    /// Render any dashboard route (e.g. /suppliers/1) as text
    Open {
        /// Route path to open
        path: String,
    },
    /// Send compliance data to the API for evaluation
    Compliance {
        #[command(subcommand)]
        command: ComplianceCommand,
    },
}

#[derive(Subcommand, Debug)]
enum SuppliersCommand {
    /// List every supplier
    List,
    /// Show one supplier with its compliance history and insights
    Show {
        /// Supplier id
        id: SupplierId,
    },
    /// Show the AI-generated insights for one supplier
    Insights {
        /// Supplier id
        id: SupplierId,
    },
}

#[derive(Subcommand, Debug)]
enum ComplianceCommand {
    /// Submit one compliance metric and print the API response
    Submit(SubmitArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    if let Some(api_url) = cli.api_url {
        config.api = ApiConfig::new(api_url)?;
    }

    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(config, args).await,
        Command::View(view) => {
            let client = ComplianceApiClient::new(&config.api)?;
            run_view_command(&client, view).await
        }
    }
}

async fn run_view_command(
    client: &ComplianceApiClient,
    command: ViewCommand,
) -> Result<(), AppError> {
    match command {
        ViewCommand::Suppliers {
            command: SuppliersCommand::List,
        } => run_supplier_list(client).await,
        ViewCommand::Suppliers {
            command: SuppliersCommand::Show { id },
        } => run_supplier_detail(client, id).await,
        ViewCommand::Suppliers {
            command: SuppliersCommand::Insights { id },
        } => run_supplier_insights(client, id).await,
        ViewCommand::Open { path } => open_route(client, &path).await,
        ViewCommand::Compliance {
            command: ComplianceCommand::Submit(args),
        } => submit_compliance(client, args).await,
    }
}
