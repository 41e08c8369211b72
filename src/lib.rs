pub mod application;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::order_service::OrderService;
use infrastructure::customer_repo::DieselCustomerRepository;
use infrastructure::order_repo::DieselOrderRepository;

pub use db::{create_pool, DbPool};

/// The order service wired to its Postgres-backed repositories.
pub type AppService = OrderService<DieselOrderRepository, DieselCustomerRepository>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::orders::list_orders,
        handlers::orders::create_order,
        handlers::orders::get_order,
        handlers::orders::update_order,
        handlers::orders::delete_order,
    ),
    components(schemas(
        handlers::orders::OrderPayload,
        handlers::orders::OrderResponse,
        handlers::orders::ListOrdersResponse,
    )),
    tags(
        (name = "pedidos", description = "Order CRUD endpoints")
    )
)]
pub struct ApiDoc;

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        let service = OrderService::new(
            DieselOrderRepository::new(pool.clone()),
            DieselCustomerRepository::new(pool.clone()),
        );
        App::new()
            .app_data(web::Data::new(service))
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .route("/pedidos", web::get().to(handlers::orders::list_orders))
            .route("/pedidos/{id}", web::get().to(handlers::orders::get_order))
            .route(
                "/incluirPedido",
                web::post().to(handlers::orders::create_order),
            )
            .route(
                "/atualizarPedido/{id}",
                web::put().to(handlers::orders::update_order),
            )
            .route(
                "/excluirPedido/{id}",
                web::delete().to(handlers::orders::delete_order),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
