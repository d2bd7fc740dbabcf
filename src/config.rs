use std::env::var;

use dotenvy::dotenv;

pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();
        Self::from_lookup(|key| var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, &'static str> {
        Ok(Config {
            port: match lookup("PORT") {
                Some(port) => port
                    .parse::<u16>()
                    .map_err(|_| "An error occured while parsing PORT env param")?,
                None => 9000,
            },
            scheme: lookup("SCHEME").unwrap_or_else(|| "http".to_string()),
            host: lookup("HOST").unwrap_or_else(|| "localhost".to_string()),
            database_url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            database_max_connections: match lookup("DATABASE_MAX_CONNECTIONS") {
                Some(max) => max
                    .parse::<u32>()
                    .map_err(|_| "An error occured while parsing DATABASE_MAX_CONNECTIONS env param")?,
                None => 5,
            },
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}
