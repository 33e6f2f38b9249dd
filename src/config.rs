use std::env::var;
use std::time::Duration;

use dotenvy::dotenv;

#[derive(Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    pub webhook_url: String,
    pub page_size: u32,
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub jwt_expiration: Duration,
    pub admin: AdminCredentials,
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();

        Ok(Config {
            port: var("PORT")
                .map_err(|_| "An error occured while getting PORT env param")?
                .parse::<u16>()
                .map_err(|_| "An error occured while parsing PORT env param")?,
            scheme: var("SCHEME").map_err(|_| "An error occured while getting SCHEME env param")?,
            host: var("HOST").map_err(|_| "An error occured while getting HOST env param")?,
            webhook_url: var("WEBHOOK_URL")
                .map_err(|_| "An error occured while getting WEBHOOK_URL env param")?,
            page_size: match var("PAGE_SIZE") {
                Ok(value) => value
                    .parse::<u32>()
                    .map_err(|_| "An error occured while parsing PAGE_SIZE env param")?,
                Err(_) => 10,
            },
            database_url: var("DATABASE_URL").ok(),
            jwt_secret: var("JWT_SECRET")
                .map_err(|_| "An error occured while getting JWT_SECRET env param")?,
            jwt_expiration: match var("JWT_EXPIRATION_SECONDS") {
                Ok(value) => Duration::from_secs(value.parse::<u64>().map_err(|_| {
                    "An error occured while parsing JWT_EXPIRATION_SECONDS env param"
                })?),
                Err(_) => Duration::from_secs(3600),
            },
            admin: AdminCredentials {
                email: var("ADMIN_EMAIL")
                    .map_err(|_| "An error occured while getting ADMIN_EMAIL env param")?,
                password: var("ADMIN_PASSWORD")
                    .map_err(|_| "An error occured while getting ADMIN_PASSWORD env param")?,
            },
        })
    }
}
