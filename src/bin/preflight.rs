use collection_api::{DatabaseService, DocumentSource, Settings};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Requires env vars:\n\
           MONGO_URI\n\
         Optional:\n\
           MONGO_DATABASE, DATA_COLLECTION, BIND_ADDR\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let settings = Settings::from_env()?;

    println!("> Preflight:");
    println!("  BIND_ADDR={}", settings.bind_addr);

    let db_service = DatabaseService::connect(&settings).await?;
    println!("  Database: {}", db_service.database_name());
    println!("  Collection: {}", db_service.collection_name());

    db_service
        .ping()
        .await
        .map_err(|e| anyhow::anyhow!("Store did not answer ping: {}", e))?;
    println!("  Store answered ping.");

    let count = db_service.count().await?;
    println!("  Estimated documents: {}", count);
    if count == 0 {
        eprintln!("  Warning: collection is empty; GET /api/data will return [].");
    }

    println!("> Preflight OK.");
    Ok(())
}
