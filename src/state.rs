use std::env;

use anyhow::Context;

use crate::{prelude::*, sv};

#[derive(Debug, Clone)]
pub struct Config {
  pub database_url: String,
  /// Default share of a match needed for it to count as a win or loss
  pub win_time_share: f32,
  pub query_timeout: Duration,
  /// Bring the schema up to date on connect
  pub migrate: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      database_url: String::from("sqlite:stats.db?mode=rwc"),

      win_time_share: 0.3,
      query_timeout: Duration::from_secs(30),
      migrate: true,
    }
  }
}

impl Config {
  pub fn from_env() -> anyhow::Result<Self> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  fn from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
  ) -> anyhow::Result<Self> {
    let mut config = Self::default();

    if let Some(url) = lookup("DATABASE_URL") {
      config.database_url = url;
    }

    if let Some(share) = lookup("STATS_WIN_TIME_SHARE") {
      config.win_time_share = share
        .trim()
        .parse()
        .with_context(|| format!("Invalid STATS_WIN_TIME_SHARE `{share}`"))?;
    }

    if let Some(timeout) = lookup("STATS_QUERY_TIMEOUT") {
      config.query_timeout = humantime::parse_duration(timeout.trim())
        .with_context(|| format!("Invalid STATS_QUERY_TIMEOUT `{timeout}`"))?;
    }

    if let Some(migrate) = lookup("STATS_MIGRATE") {
      config.migrate = match migrate.trim() {
        "1" | "true" | "yes" => true,
        "0" | "false" | "no" => false,
        other => anyhow::bail!("Invalid STATS_MIGRATE `{other}`"),
      };
    }

    Ok(config)
  }
}

pub struct Services<'a> {
  pub stats: sv::Stats<'a>,
}

pub struct AppState {
  pub db: DatabaseConnection,
  pub config: Config,
}

impl AppState {
  pub async fn new(config: Config) -> anyhow::Result<Self> {
    info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
      .await
      .context("Failed to connect to database")?;

    if config.migrate {
      info!("Running migrations...");
      Migrator::up(&db, None).await.context("Failed to run migrations")?;
    }

    Ok(Self::with_connection(db, config))
  }

  pub fn with_connection(db: DatabaseConnection, config: Config) -> Self {
    Self { db, config }
  }

  pub fn sv(&self) -> Services<'_> {
    Services {
      stats: sv::Stats::new(&self.db).with_timeout(self.config.query_timeout),
    }
  }
}
