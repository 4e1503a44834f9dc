use clap::Parser;
use dnsverify_api::{AppState, Credentials};
use dnsverify_domain::CliOverrides;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "dnsverify")]
#[command(version)]
#[command(about = "HTTP service that resolves hostnames and verifies CNAME/alias targets")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long, env = "PORT")]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Basic-Auth user
    #[arg(long, env = "AUTH_USER")]
    auth_user: Option<String>,

    /// Basic-Auth password
    #[arg(long, env = "AUTH_PASSWORD", hide_env_values = true)]
    auth_password: Option<String>,

    /// Path to resolv.conf
    #[arg(long, value_name = "FILE")]
    resolv_conf: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind,
        auth_user: cli.auth_user,
        auth_password: cli.auth_password,
        resolv_conf: cli.resolv_conf,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting dnsverify v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config)?;
    let use_cases = di::UseCases::new(&dns_services, &config);

    let app_state = AppState {
        lookup: use_cases.lookup,
        verify: use_cases.verify,
        credentials: Arc::new(Credentials::new(
            config.auth.user.clone(),
            config.auth.password.clone(),
        )),
    };

    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .map_err(|e| {
            anyhow::anyhow!(
                "invalid bind address {}:{}: {}",
                config.server.bind_address,
                config.server.port,
                e
            )
        })?;

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
