#[tokio::main]
async fn main() -> anyhow::Result<()> {
    sheet_cards_backend::run().await
}
