use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    termle::cli::run_cli().await
}
