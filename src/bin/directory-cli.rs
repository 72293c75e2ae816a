use clap::{Parser, Subcommand};
use reqwest::Response;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "directory-cli")]
#[command(about = "Management CLI for the contact directory service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a contact
    Add { name: String, phone: String },
    /// List all contacts
    List,
    /// Look up a contact by name
    Get { name: String },
    /// Delete a contact by exact name
    Remove { name: String },
    /// Show directory statistics
    Stats,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Add { name, phone } => {
            let res = client
                .post(format!("{}/contactos/", cli.url))
                .json(&serde_json::json!({ "name": name, "phone": phone }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::List => {
            let res = client
                .get(format!("{}/contactos/", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Get { name } => {
            let res = client
                .get(format!("{}/contactos/{}", cli.url, name))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Remove { name } => {
            let res = client
                .delete(format!("{}/contactos/{}", cli.url, name))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Stats => {
            let res = client
                .get(format!("{}/estadisticas/", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let body: Value = res.json().await?;
    println!("{}", status);
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
