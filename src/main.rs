use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing::info;

use reflinker::api;
use reflinker::config::{get_config, init_config};
use reflinker::services::ReferralService;
use reflinker::storage::{StorageFactory, seed_demo_referrals};
use reflinker::system::init_logging;
use reflinker::users::StaticUserDirectory;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    init_config();
    let config = get_config();

    // Guard must stay alive so buffered log writes are flushed
    let _log_guard = init_logging(config);

    let store = StorageFactory::create()
        .await
        .expect("Failed to create referral store");
    info!("Using storage backend: {}", store.get_backend_name().await);

    if config.storage.seed_demo_data {
        let inserted = seed_demo_referrals(store.as_ref())
            .await
            .expect("Failed to seed demo referrals");
        info!("Seeded {} demo referrals", inserted);
    }

    let directory = Arc::new(StaticUserDirectory::with_seed_users());
    let service = Arc::new(ReferralService::new(store, directory));

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting server at http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(service.clone()))
            .service(api::referral_routes())
    })
    .bind(bind_address)?
    .run()
    .await
}
