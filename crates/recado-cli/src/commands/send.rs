//! `recado send` command.
//!
//! One-shot gateway invocation, useful for checking the gateway
//! configuration without standing up a transport.

use clap::Args;

use recado_gateway::{HttpGateway, MessageGateway};

use crate::shared;

/// Send one message directly through the configured gateway.
#[derive(Debug, Args)]
pub struct SendArgs {
    /// Recipient phone number (country code, no '+' or spaces).
    #[arg(long)]
    pub recipient: String,
    /// Text content of the message.
    #[arg(long)]
    pub body: String,
    /// Messaging gateway base URL (overrides config).
    #[arg(long)]
    pub gateway_url: Option<String>,
}

/// Executes the send command.
pub async fn execute(args: &SendArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = shared::load_config(config_path)?;
    let url = args.gateway_url.as_deref().unwrap_or(&config.gateway.url);

    let gateway = HttpGateway::new(url);
    let outcome = gateway.send_message(&args.recipient, &args.body).await;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    anyhow::ensure!(outcome.success, "{}", outcome.message);
    Ok(())
}
