//! Per-faction season report for one player

use clap::Parser;
use tracing_subscriber::{
  EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};
use warfare_stats::{
  model::StatsQuery,
  prelude::*,
  state::{AppState, Config},
  utils,
};

#[derive(Parser, Debug)]
#[command(name = "warfare-stats")]
#[command(version)]
#[command(about = "Per-faction season statistics for a player", long_about = None)]
struct Cli {
  /// Steam64 id of the player
  player: u64,

  /// Season to report on
  season: i32,

  /// Share of a match spent on a faction before it counts as a win or loss
  /// (defaults to STATS_WIN_TIME_SHARE)
  #[arg(long, value_name = "SHARE")]
  threshold: Option<f32>,

  /// Query deadline, e.g. `10s` (defaults to STATS_QUERY_TIMEOUT)
  #[arg(long, value_name = "DURATION")]
  timeout: Option<humantime::Duration>,

  /// Print rows as JSON instead of a table
  #[arg(long)]
  json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
      "warfare_stats=info,sea_orm=warn,sqlx=warn".into()
    }))
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  let cli = Cli::parse();
  let config = Config::from_env()?;

  let query = StatsQuery::new(
    cli.player,
    cli.season,
    cli.threshold.unwrap_or(config.win_time_share),
  );
  let timeout = cli.timeout.map(Duration::from).unwrap_or(config.query_timeout);

  info!("Starting warfare-stats v{}", env!("CARGO_PKG_VERSION"));

  let app = AppState::new(config).await?;
  let rows = match app.sv().stats.aggregate_within(query, timeout).await {
    Ok(rows) => rows,
    Err(err) if err.is_retryable() => {
      error!("Stats query failed, try again later: {err}");
      return Err(err.into());
    }
    Err(err) => return Err(err.into()),
  };

  if cli.json {
    println!("{}", json::to_string_pretty(&rows)?);
  } else if rows.is_empty() {
    println!("No sessions for {} in season {}", cli.player, cli.season);
  } else {
    print!("{}", utils::render_table(&rows));
  }

  Ok(())
}
