use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use sqlx::PgPool;
use std::sync::Arc;

use taskvault::auth::{AuthMiddleware, BcryptHasher, PasswordHasher, UserRepository};
use taskvault::config::Config;
use taskvault::routes;
use taskvault::tasks::TaskRepository;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    let hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptHasher::default());
    let users = web::Data::new(UserRepository::new(pool.clone(), hasher));
    let tasks = web::Data::new(TaskRepository::new(pool.clone()));

    log::info!("Starting taskvault server at {}", config.server_url());

    HttpServer::new(move || {
        App::new()
            .app_data(users.clone())
            .app_data(tasks.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::health)
            .service(
                web::scope("/api")
                    .wrap(AuthMiddleware)
                    .configure(routes::config),
            )
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
