use clap::arg;
use clap::command;
use clap::Parser;
use epo_ops_mcp::config::credentials::Credentials;
use epo_ops_mcp::server::McpServer;
use epo_ops_mcp::sources::fetch::OpsClient;
use epo_ops_mcp::tools::PatentTools;
use epo_ops_mcp::utils::config_loader;
use epo_ops_mcp::utils::logging;
use anyhow::Result;
use epo_ops_mcp::utils::logging::LogLevel;
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// optional YAML settings file
    #[arg(short, long, env = "EPO_MCP_CONFIG")]
    config: Option<String>,
    #[arg(long, env = "LOG_LEVEL" , value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load settings, start logging
    // -------------------------------

    let args = Args::parse();
    let service_config = config_loader::run(args.config.as_deref()).await?;
    logging::run(&service_config.logging, args.log_level);

    // -------------------------------
    // 2. Resolve credentials once
    // -------------------------------

    let credentials = Credentials::from_env();
    if !credentials.is_complete() {
        warn!("OPS credentials incomplete, the first tool call will fail authentication");
    }

    // -------------------------------
    // 3. Build OPS client and tools
    // -------------------------------

    let client = OpsClient::new(&service_config.ops, credentials)?;
    let tools = PatentTools::new(client);

    // -------------------------------
    // 4. Serve MCP over stdio
    // -------------------------------

    info!(base_url = %service_config.ops.base_url, "EPO-MCP starting on stdio");
    McpServer::new(tools).run_stdio().await?;
    info!("EPO-MCP stopped");

    Ok(())
}
