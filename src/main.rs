//! audit-webhook - send audit event notifications to a chat webhook
//!
//! `test` sends the connectivity check, `notify` runs the event path once and
//! `preview` prints the body that would be posted.

use anyhow::{Context, bail};
use audit_webhook::config::{Config, PayloadStyle, SharedSettings};
use audit_webhook::core::webhooks::{CallContext, NotifyOutcome, WebhookNotifier};
use audit_webhook::{AuditEvent, utils::logging};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "audit-webhook", version, about)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "AUDIT_WEBHOOK_CONFIG")]
    config: Option<PathBuf>,

    /// Destination URL, overrides the configuration
    #[arg(long)]
    url: Option<String>,

    /// Comma-separated event allow-list, overrides the configuration
    #[arg(long)]
    events: Option<String>,

    /// Payload style: auto, embeds or attachments
    #[arg(long)]
    style: Option<PayloadStyle>,

    /// Abort the request after this many seconds
    #[arg(long)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Send the test notification
    Test,
    /// Send a notification for one audit event
    Notify(EventArgs),
    /// Print the JSON body that would be sent for an audit event
    Preview(EventArgs),
}

#[derive(Debug, Args)]
struct EventArgs {
    /// Event kind, e.g. SIGN_IN
    #[arg(long)]
    event: String,
    #[arg(long)]
    username: Option<String>,
    #[arg(long)]
    ip: Option<String>,
    #[arg(long)]
    country: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    user_agent: Option<String>,
    /// Extra attribute as KEY=VALUE, repeatable
    #[arg(long = "data", value_parser = parse_key_value)]
    data: Vec<(String, String)>,
}

impl EventArgs {
    fn into_event(self) -> AuditEvent {
        let mut event = AuditEvent::new(self.event);
        event.username = self.username;
        event.ip_address = self.ip;
        event.country = self.country;
        event.city = self.city;
        event.user_agent = self.user_agent;
        event.data.extend(self.data);
        event
    }
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.to_string()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("expected KEY=VALUE, got {:?}", raw))
}

async fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let from_file = Config::from_file(path).await?;
            from_file.merge(Config::from_env()?)
        }
        None => Config::from_env()?,
    };

    if let Some(url) = &cli.url {
        config.webhook.url = url.clone();
    }
    if let Some(events) = &cli.events {
        config.webhook.events = events.clone();
    }
    if let Some(style) = cli.style {
        config.webhook.style = style;
    }

    config.validate()?;
    Ok(config)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Loading logs go to a scoped stderr subscriber until the configured one is installed
    let config = {
        let _bootstrap = tracing::subscriber::set_default(logging::bootstrap_subscriber());
        load_config(&cli).await.context("loading configuration")?
    };
    logging::init_logging(&config.logging)?;

    let settings = SharedSettings::new(config.webhook.clone());
    let notifier = WebhookNotifier::from_config(&config, settings)?;

    let mut ctx = CallContext::background();
    if let Some(seconds) = cli.timeout {
        ctx = ctx.with_timeout(Duration::from_secs(seconds));
    }

    match cli.command {
        Command::Test => {
            notifier.send_test_notification(&ctx).await?;
            info!("Test webhook delivered");
        }
        Command::Notify(args) => {
            let event = args.into_event();
            match notifier.notify_event(&event, &ctx).await {
                NotifyOutcome::Delivered => info!(event = %event.kind, "Webhook delivered"),
                NotifyOutcome::Disabled => info!("Webhook URL is not configured, nothing sent"),
                NotifyOutcome::Filtered => {
                    info!(event = %event.kind, "Event excluded by filter, nothing sent")
                }
                NotifyOutcome::Failed => bail!("webhook delivery failed, see log"),
            }
        }
        Command::Preview(args) => {
            let body = notifier.preview_event(&args.into_event())?;
            println!("{}", String::from_utf8_lossy(&body));
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = Config::load_env_file(None) {
        eprintln!("Warning: {}", e);
    }

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
