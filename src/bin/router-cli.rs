use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "router-cli")]
#[command(about = "Inspect a running space-router", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version and table size
    Status,
    /// List declared routes
    Routes,
    /// Follow a path to its view
    Resolve { path: String },
    /// Follow a route name to its view
    Name { name: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let request = match &cli.command {
        Commands::Status => client.get(format!("{}/_router/status", cli.url)),
        Commands::Routes => client.get(format!("{}/_router/routes", cli.url)),
        Commands::Resolve { path } => client
            .get(format!("{}/_router/resolve", cli.url))
            .query(&[("path", path)]),
        Commands::Name { name } => client
            .get(format!("{}/_router/resolve", cli.url))
            .query(&[("name", name)]),
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let json: Value = res.json().await?;

    if !status.is_success() {
        eprintln!("Error: router returned status {}", status);
        eprintln!("{}", serde_json::to_string_pretty(&json)?);
        std::process::exit(1);
    }

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
