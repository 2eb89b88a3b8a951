use std::net::SocketAddr;

use anyhow::Result;

/// Resolved runtime settings.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind: SocketAddr,
    /// Pool size limit, `None` lets sqlx decide.
    pub max_connections: Option<u32>,
}

impl Config {
    pub fn new(database_url: Option<String>, bind: SocketAddr) -> Result<Config> {
        let database_url = match database_url {
            Some(url) => url,
            None => default_database_url()?,
        };
        Ok(Config {
            database_url,
            bind,
            max_connections: None,
        })
    }

    /// Private SQLite store that lives as long as the pool.
    /// Every in-memory connection is its own database, so the pool is pinned to one.
    pub fn in_memory() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            bind: SocketAddr::from(([127, 0, 0, 1], 0)),
            max_connections: Some(1),
        }
    }
}

#[cfg(debug_assertions)]
fn default_database_url() -> Result<String> {
    Ok("sqlite:./fyyur.sqlite?mode=rwc".to_string())
}

#[cfg(not(debug_assertions))]
fn default_database_url() -> Result<String> {
    let Some(dir) = directories::ProjectDirs::from("", "Earthgame_s", "fyyur") else {
        anyhow::bail!("Can't get directories");
    };
    let data_dir = dir.data_dir();
    std::fs::create_dir_all(data_dir)?;
    Ok(format!("sqlite:{}/fyyur.sqlite?mode=rwc", data_dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_url_wins() {
        let config = Config::new(
            Some("sqlite:/tmp/other.sqlite".into()),
            "0.0.0.0:8080".parse().unwrap(),
        )
        .unwrap();
        assert_eq!(config.database_url, "sqlite:/tmp/other.sqlite");
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.max_connections, None);
    }

    #[test]
    fn default_url_is_sqlite() {
        let config = Config::new(None, "127.0.0.1:5000".parse().unwrap()).unwrap();
        assert!(config.database_url.starts_with("sqlite:"));
        assert!(config.database_url.ends_with("fyyur.sqlite?mode=rwc"));
    }
}
