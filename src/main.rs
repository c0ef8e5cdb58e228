use chrono::Local;
use clap::{Parser, Subcommand};
use log::info;
use mmcoms::{ApiClient, ClientConfig, DEFAULT_ENDPOINT};
use std::path::PathBuf;

// Small command line front end for the client.
//
// Usage:
//   MMCOMS_AUTH_TOKEN=... cargo run -- sms --to +27820000000 --text "Power restored"
//   cargo run -- -t TOKEN email --to ops@example.com --subject Outage --html "<p>Grid down</p>"
//   cargo run -- -t TOKEN whatsapp --to +27820000000 --building-id B-42 --power-status OFF

#[derive(Parser)]
#[command(name = "mmcoms")]
#[command(about = "Send messages through the MetMetric Communications API")]
struct Cli {
    /// Authorization token, sent verbatim.
    #[arg(short, long, env = "MMCOMS_AUTH_TOKEN", hide_env_values = true)]
    token: String,

    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grid change notification over WhatsApp.
    Whatsapp {
        #[arg(long = "to", required = true)]
        recipients: Vec<String>,
        #[arg(long)]
        building_id: String,
        #[arg(long)]
        power_status: String,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    Email {
        #[arg(long = "to", required = true)]
        recipients: Vec<String>,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        html: String,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    Sms {
        #[arg(long = "to", required = true)]
        recipients: Vec<String>,
        #[arg(long)]
        text: String,
    },
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "{} [{:<5}] [{}] - {}",
                Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let cli = Cli::parse();
    let client = ApiClient::with_config(ClientConfig::new(cli.token).with_endpoint(cli.endpoint));

    let response = match cli.command {
        Commands::Whatsapp {
            recipients,
            building_id,
            power_status,
            file,
        } => client.send_whatsapp_grid_change_notification(
            recipients,
            &building_id,
            &power_status,
            file.as_deref(),
        )?,
        Commands::Email {
            recipients,
            subject,
            html,
            file: Some(file),
        } => client.send_email_with_files(recipients, &subject, &html, &file)?,
        Commands::Email {
            recipients,
            subject,
            html,
            file: None,
        } => client.send_email(recipients, &subject, &html)?,
        Commands::Sms { recipients, text } => client.send_sms(recipients, &text)?,
    };

    info!("Message accepted");
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
