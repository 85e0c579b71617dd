use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatabaseDriver {
    Postgres,
    Mysql,
}

/// Connection parameters for the selected relational backend. Both backends
/// expose the same `query(sql, params)` surface through sqlx's Any driver;
/// only the URL scheme and placeholder style differ.
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub driver: DatabaseDriver,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        let scheme = match self.driver {
            DatabaseDriver::Postgres => "postgres",
            DatabaseDriver::Mysql => "mysql",
        };
        format!(
            "{scheme}://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub service_name: String,
    pub app_version: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub secret_key: String,
    pub access_token_ttl_secs: i64,
    pub refresh_token_ttl_secs: i64,
    pub database: DatabaseConfig,
}

impl Config {
    /// Reads the whole configuration surface once at process start. Values
    /// are immutable afterwards.
    pub fn from_env() -> anyhow::Result<Self> {
        let service_name = env::var("APPLICATION_NAME").unwrap_or_else(|_| "boilerplate".into());
        let app_version = env::var("APP_VERSION").unwrap_or_else(|_| "1.0.0".into());
        let host = env::var("HOST").unwrap_or_else(|_| "localhost".into());
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5000);
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "debug".into());
        let secret_key = env::var("SECRET_KEY").unwrap_or_else(|_| "secret".into());
        let access_token_ttl_secs = env::var("TOKEN_EXPIRES_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(60 * 60 * 24);
        let refresh_token_ttl_secs = env::var("REFRESH_TOKEN_EXPIRES_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(60 * 60 * 24 * 7);

        let driver = match env::var("DB_DRIVER").ok().as_deref() {
            None | Some("postgres") => DatabaseDriver::Postgres,
            Some("mysql") => DatabaseDriver::Mysql,
            Some(other) => {
                anyhow::bail!("unsupported DB_DRIVER `{other}` (expected postgres or mysql)")
            }
        };
        let database = match driver {
            DatabaseDriver::Postgres => DatabaseConfig {
                driver,
                host: env::var("PG_DB_HOST").unwrap_or_else(|_| "localhost".into()),
                port: env::var("PG_DB_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5432),
                user: env::var("PG_DB_USER").unwrap_or_else(|_| "postgres".into()),
                password: env::var("PG_DB_PASSWORD").unwrap_or_else(|_| "postgres".into()),
                name: env::var("PG_DB_NAME").unwrap_or_else(|_| "postgres".into()),
            },
            DatabaseDriver::Mysql => DatabaseConfig {
                driver,
                host: env::var("MYSQL_DB_HOST").unwrap_or_else(|_| "localhost".into()),
                port: env::var("MYSQL_DB_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(3306),
                user: env::var("MYSQL_DB_USER").unwrap_or_else(|_| "mysql".into()),
                password: env::var("MYSQL_DB_PASSWORD").unwrap_or_else(|_| "mysql".into()),
                name: env::var("MYSQL_DB_NAME").unwrap_or_else(|_| "mysql".into()),
            },
        };

        Ok(Self {
            service_name,
            app_version,
            host,
            port,
            log_level,
            secret_key,
            access_token_ttl_secs,
            refresh_token_ttl_secs,
            database,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_url_follows_driver_scheme() {
        let pg = DatabaseConfig {
            driver: DatabaseDriver::Postgres,
            host: "db".into(),
            port: 5432,
            user: "postgres".into(),
            password: "postgres".into(),
            name: "app".into(),
        };
        assert_eq!(pg.url(), "postgres://postgres:postgres@db:5432/app");

        let mysql = DatabaseConfig {
            driver: DatabaseDriver::Mysql,
            port: 3306,
            ..pg
        };
        assert_eq!(mysql.url(), "mysql://postgres:postgres@db:3306/app");
    }
}
