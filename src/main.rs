use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use economy_cli::app::App;
use economy_cli::cli::{
    handle_config_command, handle_expense_command, handle_limit_command, handle_login,
    handle_logout, handle_signup, handle_status_command, handle_whoami, ConfigCommands,
    ExpenseCommands, LimitCommands, LoginArgs, SignupArgs,
};
use economy_cli::config::{EconomyPaths, Settings};
use economy_cli::models::MonthKey;
use economy_cli::EconomyError;

#[derive(Parser)]
#[command(
    name = "economy",
    version,
    about = "Track monthly expenses against a spending limit",
    long_about = "economy is a terminal client for the economy backend. Log your \
                  expenses per month, set a monthly limit and check how close \
                  you are to it."
)]
struct Cli {
    /// Backend URL for this run (e.g. http://10.0.2.2:8080)
    #[arg(long, global = true, env = "ECONOMY_API_URL")]
    api_url: Option<String>,

    /// Log level filter (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account
    Signup(SignupArgs),

    /// Log in and remember the session
    Login(LoginArgs),

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Expense management commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Monthly limit commands
    #[command(subcommand)]
    Limit(LimitCommands),

    /// Spending status for a month
    Status {
        /// Reference month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<MonthKey>,
    },

    /// Show or change local configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let paths = EconomyPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let command = match cli.command {
        Some(Commands::Config(cmd)) => {
            return report(handle_config_command(&paths, &mut settings, cmd));
        }
        Some(command) => command,
        None => {
            println!("economy - monthly expense tracking");
            println!();
            println!("Run 'economy --help' for usage information.");
            println!("Run 'economy login --email <EMAIL>' to get started.");
            return Ok(());
        }
    };

    let app = App::build(paths, settings, cli.api_url.as_deref())?;

    let result = match command {
        Commands::Signup(args) => handle_signup(&app, args).await,
        Commands::Login(args) => handle_login(&app, args).await,
        Commands::Logout => handle_logout(&app).await,
        Commands::Whoami => handle_whoami(&app).await,
        Commands::Expense(cmd) => handle_expense_command(&app, cmd).await,
        Commands::Limit(cmd) => handle_limit_command(&app, cmd).await,
        Commands::Status { month } => handle_status_command(&app, month).await,
        Commands::Config(_) => Ok(()),
    };

    report(result)
}

/// Print the user-facing message and exit non-zero on failure
fn report(result: Result<(), EconomyError>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::debug!(error = ?e, status = ?e.status(), "Command failed");
            eprintln!("Error: {}", e.user_message());
            std::process::exit(1);
        }
    }
}
