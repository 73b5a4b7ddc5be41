use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use marketplace_admin::api::auth;
use marketplace_admin::api::catalog::{
    categories, coupons, customers, dashboard, notifications, orders, products, reviews, vendors,
};
use marketplace_admin::api::types::{DashboardPeriod, LoginRequest, OrderStatus, ReportQuery};
use marketplace_admin::{ApiClient, ApiConfig, ApiResponse, Role, Session};

/// Command-line front end for the marketplace admin and vendor API.
#[derive(Parser, Debug)]
#[command(name = "marketplace-admin", version)]
struct Cli {
    /// Which panel's session to use
    #[arg(long, global = true, default_value = "admin", value_parser = parse_role)]
    role: Role,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store the session credentials
    Login {
        #[arg(long)]
        email: String,
        /// Falls back to MARKETPLACE_PASSWORD
        #[arg(long, env = "MARKETPLACE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Exchange the stored refresh token for a new access token
    Refresh,
    /// Forget the stored credentials for the role
    Logout,
    Categories,
    Products,
    Orders,
    /// Update the status of an order
    OrderStatus {
        id: String,
        #[arg(value_parser = parse_order_status)]
        status: OrderStatus,
    },
    Coupons,
    Vendors,
    Customers,
    Notifications,
    Reviews,
    /// Dashboard totals for a period
    Dashboard {
        #[arg(long, default_value = "monthly", value_parser = parse_period)]
        period: DashboardPeriod,
    },
    /// Monthly sales report
    Report {
        /// Month as YYYY-MM
        #[arg(long)]
        month: String,
        #[arg(long)]
        vendor_id: Option<String>,
    },
}

fn parse_role(s: &str) -> Result<Role, String> {
    s.parse()
}

fn parse_order_status(s: &str) -> Result<OrderStatus, String> {
    s.parse()
}

fn parse_period(s: &str) -> Result<DashboardPeriod, String> {
    s.parse()
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to render response: {}", e),
    }
}

fn report(resp: ApiResponse) -> ExitCode {
    print_json(&resp);
    if resp.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Best-effort: a missing .env is fine
    let _ = dotenvy::dotenv();

    env_logger::init();

    let cli = Cli::parse();

    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let store = match config.open_store() {
        Ok(store) => store,
        Err(e) => {
            log::error!("Cannot open token store: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let client = ApiClient::new(&config, Session::new(store, cli.role));
    log::debug!("Using API at {} as {}", client.base_url(), cli.role);

    match cli.command {
        Command::Login { email, password } => {
            report(auth::login(&client, &LoginRequest { email, password }).await)
        }
        Command::Refresh => {
            let outcome = auth::refresh_access_token(&client).await;
            print_json(&outcome);
            if outcome.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Command::Logout => match auth::logout(&client) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                log::error!("Logout failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Command::Categories => report(categories::list_categories(&client).await),
        Command::Products => report(products::list_products(&client).await),
        Command::Orders => report(orders::list_orders(&client).await),
        Command::OrderStatus { id, status } => {
            report(orders::update_order_status(&client, &id, status).await)
        }
        Command::Coupons => report(coupons::list_coupons(&client).await),
        Command::Vendors => report(vendors::list_vendors(&client).await),
        Command::Customers => report(customers::list_customers(&client).await),
        Command::Notifications => report(notifications::list_notifications(&client).await),
        Command::Reviews => report(reviews::list_reviews(&client).await),
        Command::Dashboard { period } => {
            report(dashboard::dashboard_summary(&client, period).await)
        }
        Command::Report { month, vendor_id } => {
            report(dashboard::monthly_report(&client, &ReportQuery { month, vendor_id }).await)
        }
    }
}
