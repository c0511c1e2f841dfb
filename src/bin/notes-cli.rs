use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "notes-cli")]
#[command(about = "Command-line client for notes-server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every note with its content
    List,
    /// Print one note
    Get { name: String },
    /// Create a new note
    Create { name: String, text: String },
    /// Replace the content of an existing note
    Update { name: String, text: String },
    /// Delete a note
    Delete { name: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::List => {
            let res = client.get(format!("{base}/notes")).send().await?;
            return print_json(res).await;
        }
        Commands::Get { name } => client.get(format!("{base}/notes/{name}")).send().await?,
        Commands::Create { name, text } => {
            client
                .post(format!("{base}/write"))
                .form(&[("note_name", name.as_str()), ("note", text.as_str())])
                .send()
                .await?
        }
        Commands::Update { name, text } => {
            client
                .put(format!("{base}/notes/{name}"))
                .form(&[("noteContent", text.as_str())])
                .send()
                .await?
        }
        Commands::Delete { name } => client.delete(format!("{base}/notes/{name}")).send().await?,
    };

    print_text(res).await
}

async fn print_text(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let body = res.text().await?;
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        eprintln!("Response: {}", body);
        return Ok(());
    }
    if !body.is_empty() {
        println!("{}", body);
    }
    Ok(())
}

async fn print_json(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
