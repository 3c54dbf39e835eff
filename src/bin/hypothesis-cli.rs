use clap::{Parser, Subcommand};
use serde_json::Value;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "hypothesis-cli")]
#[command(about = "Client for the mock hypothesis enrichment server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:9001")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a variant for enrichment
    Enrich {
        #[arg(short, long, default_value = "project_abc123")]
        project_id: String,
        #[arg(short, long)]
        variant: Option<String>,
    },
    /// Poll the status of a hypothesis request
    Status { id: String },
    /// Fetch enrichment results
    Enrichment { id: String },
    /// Generate the final hypothesis from an enrichment id
    Finalize { id: String },
    /// List projects, or show one by id
    Projects {
        #[arg(short, long)]
        id: Option<String>,
    },
    /// Run the full four-step flow: submit, poll until completed,
    /// fetch enrichment, finalize
    Flow {
        #[arg(short, long, default_value = "project_abc123")]
        project_id: String,
        #[arg(short, long)]
        variant: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Enrich { project_id, variant } => {
            let res = client
                .post(format!("{}/api/mock/hypothesis/enrich", cli.url))
                .json(&serde_json::json!({ "project_id": project_id, "variant": variant }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Status { id } => {
            let res = client
                .get(format!("{}/api/mock/hypothesis/hypothesis", cli.url))
                .query(&[("id", &id)])
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Enrichment { id } => {
            let res = client
                .get(format!("{}/api/mock/hypothesis/enrich", cli.url))
                .query(&[("id", &id)])
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Finalize { id } => {
            let res = client
                .post(format!("{}/api/mock/hypothesis/hypothesis", cli.url))
                .json(&serde_json::json!({ "id": id }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Projects { id } => {
            let mut req = client.get(format!("{}/api/mock/hypothesis/projects", cli.url));
            if let Some(id) = id {
                req = req.query(&[("id", id)]);
            }
            print_response(req.send().await?).await?;
        }
        Commands::Flow { project_id, variant } => {
            run_flow(&client, &cli.url, &project_id, variant).await?;
        }
    }

    Ok(())
}

/// Drive the whole submit → poll → enrichment → finalize sequence.
async fn run_flow(
    client: &reqwest::Client,
    url: &str,
    project_id: &str,
    variant: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let submitted: Value = client
        .post(format!("{url}/api/mock/hypothesis/enrich"))
        .json(&serde_json::json!({ "project_id": project_id, "variant": variant }))
        .send()
        .await?
        .json()
        .await?;
    let hypothesis_id = submitted["hypothesis_id"]
        .as_str()
        .ok_or("missing hypothesis_id in response")?
        .to_string();
    println!("submitted: {hypothesis_id}");

    let status: Value = loop {
        let status: Value = client
            .get(format!("{url}/api/mock/hypothesis/hypothesis"))
            .query(&[("id", &hypothesis_id)])
            .send()
            .await?
            .json()
            .await?;
        println!("status: {}", status["status"]);
        if status["status"] == "completed" {
            break status;
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    };

    let enrichment: Value = client
        .get(format!("{url}/api/mock/hypothesis/enrich"))
        .query(&[("id", &hypothesis_id)])
        .send()
        .await?
        .json()
        .await?;
    println!("causal gene: {}", enrichment["causal_gene"]);

    let enrich_id = status["enrich_id"]
        .as_str()
        .ok_or("missing enrich_id in status")?;
    let hypothesis: Value = client
        .post(format!("{url}/api/mock/hypothesis/hypothesis"))
        .json(&serde_json::json!({ "id": enrich_id }))
        .send()
        .await?
        .json()
        .await?;
    println!("{}", serde_json::to_string_pretty(&hypothesis)?);

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
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
