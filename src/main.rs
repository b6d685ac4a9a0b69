#[tokio::main]
async fn main() {
    if let Err(e) = hoop_watcher_lib::cli::run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
