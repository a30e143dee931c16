#[tokio::main]
async fn main() -> anyhow::Result<()> {
    namecraft_server::run_server().await
}
