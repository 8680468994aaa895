#[tokio::main]
async fn main() {
    if let Err(e) = storerate::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
