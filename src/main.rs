use std::io::Error;
use std::sync::Arc;

use poem::{Route, Server, listener::TcpListener};
use poem_openapi::OpenApiService;
use sqlx::postgres::PgPoolOptions;
use tokio::main;

use crate::{
    application::{
        services::{jwt::JwtServiceConfig, message_store::MessageListStore},
        usecases::{
            delete_messages::DeleteMessagesUseCase, list_messages::ListMessagesUseCase,
            push_status::PushStatusUseCase,
        },
    },
    config::Config,
    domain::repositories::MessageRepository,
    infrastructure::{
        repositories::{in_memory::InMemoryMessageRepository, postgres::PostgresMessageRepository},
        webhook::http::HttpWebhookDispatcher,
    },
    presentation::http::endpoints::{
        auth::AuthEndpoints, health::HealthEndpoints, messages::MessagesEndpoints, root::ApiState,
    },
};

mod application;
mod config;
mod domain;
mod infrastructure;
mod presentation;

#[main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().init();

    let config = Config::try_parse().map_err(Error::other)?;

    let repo: Arc<dyn MessageRepository> = match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .connect(url)
                .await
                .map_err(Error::other)?;
            PostgresMessageRepository::new(pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory message repository");
            Arc::new(InMemoryMessageRepository::new())
        }
    };

    let dispatcher = HttpWebhookDispatcher::new(config.webhook_url.clone());
    let store = Arc::new(MessageListStore::new(repo.clone(), config.page_size));

    let state = Arc::new(ApiState {
        push_status_usecase: Arc::new(PushStatusUseCase::new(store.clone(), dispatcher)),
        list_messages_usecase: Arc::new(ListMessagesUseCase::new(store.clone())),
        delete_messages_usecase: Arc::new(DeleteMessagesUseCase::new(repo, store)),
        jwt_config: JwtServiceConfig {
            secret: config.jwt_secret.clone(),
            expiration: config.jwt_expiration,
        },
        admin: config.admin.clone(),
    });

    let server_url = format!("{}://{}:{}", config.scheme, config.host, config.port);
    tracing::info!(%server_url, "starting server");

    let api_service = OpenApiService::new(
        (
            HealthEndpoints,
            AuthEndpoints::new(state.clone()),
            MessagesEndpoints::new(state),
        ),
        "WBA Console API",
        "0.1.0",
    )
    .server(format!("{}/api", server_url));
    let ui = api_service.swagger_ui();
    let app = Route::new().nest("/api", api_service).nest("/", ui);

    Server::new(TcpListener::bind(format!("localhost:{}", config.port)))
        .run(app)
        .await
}
