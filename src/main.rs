use std::net::SocketAddr;

use sqlx::SqlitePool;
use tokio::net::TcpListener;

use memestash::config::Config;
use memestash::{cli, db, seed};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    let pool = db::init_pool(&config.database_url).await;

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("create-user") => {
            let Some(name) = args.get(2) else {
                eprintln!("Usage: memestash create-user <name> [email]");
                std::process::exit(2);
            };
            let email = args.get(3).map(String::as_str);

            if let Err(e) = cli::create_user(&pool, name, email).await {
                eprintln!("Failed to create user: {e}");
                std::process::exit(1);
            }
        }
        Some("seed") => {
            let inserted = seed::run(&pool).await;
            println!("Seeded {inserted} memes");
        }
        _ => serve(pool, config).await,
    }
}

async fn serve(pool: SqlitePool, config: Config) {
    let port = config.port;
    let app = memestash::build_app(pool, config).await;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await.unwrap();

    tracing::info!("listening on {}", addr);
    axum::serve(listener, app).await.unwrap();
}
