#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    buch_client::cli::run().await
}
