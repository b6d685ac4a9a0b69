#[tokio::main]
async fn main() -> anyhow::Result<()> {
    hoop_watcher_lib::server::run().await
}
