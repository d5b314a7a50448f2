use hextech_persistence_sea_orm::{DatabaseSettings, connect};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Connecting creates the champions table if it is missing.
    let result = match DatabaseSettings::from_env() {
        Ok(settings) => connect(&settings).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => println!("Created database tables successfully"),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
