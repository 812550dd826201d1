//! Per-faction season statistics
//!
//! Each counter is a grouped query keyed by session id. The groups are folded
//! into factions in memory through the player's own sessions, and every read
//! of one aggregation happens inside a single transaction.

use std::time::Instant;

use sea_orm::{
  DatabaseTransaction, Select,
  sea_query::{Expr, SelectStatement},
};

use crate::{
  entity::*,
  model::{PerFactionSummary, StatsQuery},
  prelude::*,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Faction key. `None` equals `None`, unlike a SQL `NULL`.
type Faction = Option<i32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
  Win,
  Loss,
}

/// Whether `playtime` seconds on `faction` make `game` count for that
/// faction, and which way.
///
/// Matches without an end, a winner or a positive length never count.
fn outcome(
  game: &game::Model,
  faction: i32,
  playtime: f64,
  win_time_share: f32,
) -> Option<Outcome> {
  let winner = game.winner?;
  let duration = game.duration_secs()?;

  if duration <= 0.0 || playtime / duration <= f64::from(win_time_share) {
    return None;
  }

  Some(if winner == faction { Outcome::Win } else { Outcome::Loss })
}

/// Sessions of `steam64` in `season`, as a subquery.
fn owned_sessions(steam64: i64, season: i32) -> SelectStatement {
  session::Entity::find()
    .select_only()
    .column(session::Column::SessionId)
    .filter(session::Column::Steam64.eq(steam64))
    .filter(session::Column::Season.eq(season))
    .into_query()
}

/// Games `steam64` played in `season`, as a subquery.
fn owned_games(steam64: i64, season: i32) -> SelectStatement {
  session::Entity::find()
    .select_only()
    .column(session::Column::Game)
    .filter(session::Column::Steam64.eq(steam64))
    .filter(session::Column::Season.eq(season))
    .into_query()
}

/// Number of `select` rows per value of `column`, for owned sessions only.
async fn count_per_session<E: EntityTrait>(
  txn: &DatabaseTransaction,
  select: Select<E>,
  column: E::Column,
  owned: SelectStatement,
) -> Result<Vec<(i64, i64)>> {
  let counts: Vec<(i64, i64)> = select
    .select_only()
    .column(column)
    .column_as(Expr::col(column).count(), "count")
    .filter(column.in_subquery(owned))
    .group_by(column)
    .into_tuple()
    .all(txn)
    .await?;

  Ok(counts)
}

/// Accumulator owned by a single aggregation.
struct Ledger {
  factions: HashMap<i64, Faction>,
  rows: BTreeMap<Faction, PerFactionSummary>,
  /// Seconds per (game, faction), unassigned sessions excluded
  playtime: HashMap<(i64, i32), f64>,
}

impl Ledger {
  fn new(sessions: &[session::Model]) -> Self {
    let mut ledger = Self {
      factions: HashMap::with_capacity(sessions.len()),
      rows: BTreeMap::new(),
      playtime: HashMap::new(),
    };

    for session in sessions {
      ledger.factions.insert(session.session_id, session.faction);

      ledger
        .rows
        .entry(session.faction)
        .or_insert_with(|| PerFactionSummary::new(session.faction))
        .playtime_seconds += session.length_seconds;

      if let Some(faction) = session.faction {
        *ledger.playtime.entry((session.game, faction)).or_default() +=
          session.length_seconds;
      }
    }

    ledger
  }

  /// Row of the faction `session` was played under.
  fn row(&mut self, session: i64) -> Option<&mut PerFactionSummary> {
    let faction = self.factions.get(&session)?;
    self.rows.get_mut(faction)
  }

  /// Same as [`Ledger::row`] but unassigned sessions have no row.
  fn faction_row(&mut self, session: i64) -> Option<&mut PerFactionSummary> {
    let faction = self.factions.get(&session).filter(|f| f.is_some())?;
    self.rows.get_mut(faction)
  }

  /// Switching sides mid-match can credit one game as both a win and a loss.
  fn settle(&mut self, games: &[game::Model], win_time_share: f32) {
    let games: HashMap<i64, &game::Model> =
      games.iter().map(|game| (game.game_id, game)).collect();

    for (&(game_id, faction), &playtime) in &self.playtime {
      let Some(game) = games.get(&game_id) else { continue };
      let Some(row) = self.rows.get_mut(&Some(faction)) else { continue };

      match outcome(game, faction, playtime, win_time_share) {
        Some(Outcome::Win) => row.wins += 1,
        Some(Outcome::Loss) => row.losses += 1,
        None => {}
      }
    }
  }

  fn credit_points(&mut self, points: &[points::Model]) {
    for points in points {
      if let Some(row) = self.rows.get_mut(&Some(points.faction)) {
        row.xp = points.xp;
        row.credits = points.credits;
      }
    }
  }

  /// Reputation is tracked per player, only the unassigned row carries it.
  fn credit_reputation(&mut self, reputation: f64) {
    if let Some(row) = self.rows.get_mut(&None) {
      row.reputation = reputation;
    }
  }

  fn into_rows(self) -> Vec<PerFactionSummary> {
    self.rows.into_values().collect()
  }
}

pub struct Stats<'a> {
  db: &'a DatabaseConnection,
  timeout: Duration,
}

impl<'a> Stats<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db, timeout: DEFAULT_TIMEOUT }
  }

  pub fn with_timeout(self, timeout: Duration) -> Self {
    Self { timeout, ..self }
  }

  /// Season totals of `query.player`, one row per faction played, the
  /// unassigned row first. A player without sessions gets no rows.
  pub async fn aggregate(
    &self,
    query: StatsQuery,
  ) -> Result<Vec<PerFactionSummary>> {
    self.aggregate_within(query, self.timeout).await
  }

  /// [`Stats::aggregate`] with a caller-supplied deadline.
  pub async fn aggregate_within(
    &self,
    query: StatsQuery,
    timeout: Duration,
  ) -> Result<Vec<PerFactionSummary>> {
    let steam64 = query.validate()?;
    let started = Instant::now();

    let rows = time::timeout(timeout, self.collect(steam64, &query))
      .await
      .map_err(|_| {
        warn!(
          "Stats for {} in season {} timed out after {:?}",
          query.player, query.season, timeout
        );
        Error::Timeout(timeout)
      })??;

    debug!(
      "Aggregated {} faction rows for {} in season {} ({:?})",
      rows.len(),
      query.player,
      query.season,
      started.elapsed()
    );

    Ok(rows)
  }

  async fn collect(
    &self,
    steam64: i64,
    query: &StatsQuery,
  ) -> Result<Vec<PerFactionSummary>> {
    let txn = self.db.begin().await?;
    let rows = Self::tally(&txn, steam64, query).await?;
    txn.commit().await?;
    Ok(rows)
  }

  async fn tally(
    txn: &DatabaseTransaction,
    steam64: i64,
    query: &StatsQuery,
  ) -> Result<Vec<PerFactionSummary>> {
    let season = query.season;

    let sessions = session::Entity::find()
      .filter(session::Column::Steam64.eq(steam64))
      .filter(session::Column::Season.eq(season))
      .all(txn)
      .await?;

    if sessions.is_empty() {
      return Ok(Vec::new());
    }

    let mut ledger = Ledger::new(&sessions);
    let owned = || owned_sessions(steam64, season);

    let instigated: Vec<(i64, bool, bool, i64)> = death::Entity::find()
      .select_only()
      .column(death::Column::InstigatorSession)
      .column(death::Column::IsTeamkill)
      .column(death::Column::IsSuicide)
      .column_as(Expr::col(death::Column::DeathId).count(), "count")
      .filter(death::Column::InstigatorSession.in_subquery(owned()))
      .group_by(death::Column::InstigatorSession)
      .group_by(death::Column::IsTeamkill)
      .group_by(death::Column::IsSuicide)
      .into_tuple()
      .all(txn)
      .await?;

    for (session, teamkill, suicide, count) in instigated {
      let Some(row) = ledger.row(session) else { continue };
      let count = count as u64;

      if suicide {
        row.suicides += count;
      } else if teamkill {
        row.teamkills += count;
      } else {
        row.kills += count;
      }
    }

    let deaths = count_per_session(
      txn,
      death::Entity::find(),
      death::Column::Session,
      owned(),
    )
    .await?;

    for (session, count) in deaths {
      if let Some(row) = ledger.row(session) {
        row.deaths += count as u64;
      }
    }

    let damage: Vec<(i64, bool, i64, f64)> = damage::Entity::find()
      .select_only()
      .column(damage::Column::InstigatorSession)
      .column(damage::Column::IsInjure)
      .column_as(Expr::col(damage::Column::DamageId).count(), "count")
      .column_as(Expr::col(damage::Column::Amount).sum(), "amount")
      .filter(damage::Column::InstigatorSession.in_subquery(owned()))
      .filter(damage::Column::IsTeamkill.eq(false))
      .filter(damage::Column::IsSuicide.eq(false))
      .group_by(damage::Column::InstigatorSession)
      .group_by(damage::Column::IsInjure)
      .into_tuple()
      .all(txn)
      .await?;

    for (session, injure, count, amount) in damage {
      let Some(row) = ledger.row(session) else { continue };

      row.damage += amount;
      if injure {
        row.injures += count as u64;
      }
    }

    let revives = count_per_session(
      txn,
      aid::Entity::find().filter(aid::Column::IsRevive.eq(true)),
      aid::Column::Session,
      owned(),
    )
    .await?;

    for (session, count) in revives {
      if let Some(row) = ledger.row(session) {
        row.revives += count as u64;
      }
    }

    let built =
      count_per_session(txn, fob::Entity::find(), fob::Column::Session, owned())
        .await?;

    for (session, count) in built {
      if let Some(row) = ledger.faction_row(session) {
        row.built_fobs += count as u64;
      }
    }

    let destroyed = count_per_session(
      txn,
      fob::Entity::find(),
      fob::Column::InstigatorSession,
      owned(),
    )
    .await?;

    for (session, count) in destroyed {
      if let Some(row) = ledger.faction_row(session) {
        row.destroyed_fobs += count as u64;
      }
    }

    let games = game::Entity::find()
      .filter(game::Column::GameId.in_subquery(owned_games(steam64, season)))
      .all(txn)
      .await?;
    ledger.settle(&games, query.win_time_share);

    let points = points::Entity::find()
      .filter(points::Column::Steam64.eq(steam64))
      .filter(points::Column::Season.eq(season))
      .all(txn)
      .await?;
    ledger.credit_points(&points);

    if let Some(reputation) =
      reputation::Entity::find_by_id(steam64).one(txn).await?
    {
      ledger.credit_reputation(reputation.reputation);
    }

    Ok(ledger.into_rows())
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use sea_orm::{ConnectOptions, PaginatorTrait};

  use super::*;

  const PLAYER: u64 = 76561198000000001;
  const ALLY: u64 = 76561198000000002;
  const ENEMY: u64 = 76561198000000003;

  const USA: i32 = 1;
  const RUSSIA: i32 = 2;

  async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
  }

  fn kickoff() -> DateTime {
    NaiveDate::from_ymd_opt(2026, 9, 1)
      .and_then(|d| d.and_hms_opt(18, 0, 0))
      .unwrap()
  }

  async fn insert_game(
    db: &DatabaseConnection,
    winner: Option<i32>,
    length: Option<i64>,
  ) -> i64 {
    game::ActiveModel {
      season: Set(1),
      winner: Set(winner),
      start_timestamp: Set(kickoff()),
      end_timestamp: Set(
        length.map(|secs| kickoff() + TimeDelta::seconds(secs)),
      ),
      ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .game_id
  }

  async fn game(db: &DatabaseConnection, winner: i32, length: i64) -> i64 {
    insert_game(db, Some(winner), Some(length)).await
  }

  async fn session_in(
    db: &DatabaseConnection,
    player: u64,
    season: i32,
    game: i64,
    faction: Option<i32>,
    length: f64,
  ) -> i64 {
    session::ActiveModel {
      steam64: Set(player as i64),
      season: Set(season),
      game: Set(game),
      faction: Set(faction),
      started_at: Set(kickoff()),
      length_seconds: Set(length),
      ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .session_id
  }

  async fn session(
    db: &DatabaseConnection,
    player: u64,
    game: i64,
    faction: Option<i32>,
    length: f64,
  ) -> i64 {
    session_in(db, player, 1, game, faction, length).await
  }

  async fn death(
    db: &DatabaseConnection,
    victim: i64,
    instigator: Option<i64>,
    teamkill: bool,
    suicide: bool,
  ) {
    death::ActiveModel {
      session: Set(victim),
      instigator_session: Set(instigator),
      is_teamkill: Set(teamkill),
      is_suicide: Set(suicide),
      timestamp: Set(kickoff()),
      ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
  }

  async fn damage(
    db: &DatabaseConnection,
    victim: i64,
    instigator: i64,
    (injure, teamkill, suicide): (bool, bool, bool),
    amount: f64,
  ) {
    damage::ActiveModel {
      session: Set(victim),
      instigator_session: Set(Some(instigator)),
      is_injure: Set(injure),
      is_teamkill: Set(teamkill),
      is_suicide: Set(suicide),
      amount: Set(amount),
      timestamp: Set(kickoff()),
      ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
  }

  async fn aid(db: &DatabaseConnection, medic: i64, revive: bool) {
    aid::ActiveModel {
      session: Set(medic),
      is_revive: Set(revive),
      timestamp: Set(kickoff()),
      ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
  }

  async fn fob(db: &DatabaseConnection, builder: i64, destroyer: Option<i64>) {
    fob::ActiveModel {
      session: Set(builder),
      instigator_session: Set(destroyer),
      built_at: Set(kickoff()),
      ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
  }

  async fn points(
    db: &DatabaseConnection,
    season: i32,
    faction: i32,
    xp: i64,
    credits: i64,
  ) {
    points::ActiveModel {
      steam64: Set(PLAYER as i64),
      season: Set(season),
      faction: Set(faction),
      xp: Set(xp),
      credits: Set(credits),
    }
    .insert(db)
    .await
    .unwrap();
  }

  async fn reputation(db: &DatabaseConnection, value: f64) {
    reputation::ActiveModel {
      steam64: Set(PLAYER as i64),
      reputation: Set(value),
    }
    .insert(db)
    .await
    .unwrap();
  }

  async fn aggregate(
    db: &DatabaseConnection,
    win_time_share: f32,
  ) -> Vec<PerFactionSummary> {
    Stats::new(db)
      .aggregate(StatsQuery::new(PLAYER, 1, win_time_share))
      .await
      .unwrap()
  }

  fn ended(winner: Option<i32>, length: i64) -> game::Model {
    game::Model {
      game_id: 1,
      season: 1,
      winner,
      start_timestamp: kickoff(),
      end_timestamp: Some(kickoff() + TimeDelta::seconds(length)),
    }
  }

  #[test]
  fn test_outcome() {
    let game = ended(Some(USA), 1000);

    assert_eq!(outcome(&game, USA, 600.0, 0.5), Some(Outcome::Win));
    assert_eq!(outcome(&game, RUSSIA, 600.0, 0.5), Some(Outcome::Loss));
    assert_eq!(outcome(&game, USA, 500.0, 0.5), None);
    assert_eq!(outcome(&game, USA, 0.0, -1.0), Some(Outcome::Win));
    assert_eq!(outcome(&game, USA, 1000.0, 1.0), None);

    assert_eq!(outcome(&ended(Some(USA), 0), USA, 600.0, 0.0), None);
    assert_eq!(outcome(&ended(None, 1000), USA, 600.0, 0.5), None);

    let running = game::Model { end_timestamp: None, ..game };
    assert_eq!(outcome(&running, USA, 600.0, 0.5), None);
  }

  #[tokio::test]
  async fn test_no_sessions_no_rows() {
    let db = setup_test_db().await;

    let g = game(&db, USA, 1000).await;
    session_in(&db, PLAYER, 2, g, Some(USA), 600.0).await;
    session(&db, ENEMY, g, Some(RUSSIA), 600.0).await;

    assert!(aggregate(&db, 0.5).await.is_empty());

    let stranger = StatsQuery::new(ALLY, 2, 0.5);
    assert!(Stats::new(&db).aggregate(stranger).await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_single_faction_win() {
    let db = setup_test_db().await;

    let g = game(&db, USA, 1000).await;
    session(&db, PLAYER, g, Some(USA), 600.0).await;

    let rows = aggregate(&db, 0.5).await;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].faction, Some(USA));
    assert_eq!(rows[0].wins, 1);
    assert_eq!(rows[0].losses, 0);
    assert_eq!(rows[0].playtime_seconds, 600.0);
  }

  #[tokio::test]
  async fn test_rejoins_add_up() {
    let db = setup_test_db().await;

    let g = game(&db, RUSSIA, 1000).await;
    session(&db, PLAYER, g, Some(USA), 300.0).await;
    session(&db, PLAYER, g, Some(USA), 300.0).await;

    let rows = aggregate(&db, 0.5).await;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].playtime_seconds, 600.0);
    assert_eq!(rows[0].wins, 0);
    assert_eq!(rows[0].losses, 1);
  }

  #[tokio::test]
  async fn test_death_partition() {
    let db = setup_test_db().await;

    let g = game(&db, USA, 1800).await;
    let me = session(&db, PLAYER, g, Some(USA), 1200.0).await;
    let ally = session(&db, ALLY, g, Some(USA), 1200.0).await;
    let enemy = session(&db, ENEMY, g, Some(RUSSIA), 1200.0).await;

    death(&db, enemy, Some(me), false, false).await;
    death(&db, enemy, Some(me), false, false).await;
    death(&db, ally, Some(me), true, false).await;
    death(&db, me, Some(me), false, true).await;
    death(&db, me, Some(me), true, true).await;
    death(&db, me, Some(enemy), false, false).await;
    death(&db, me, None, false, false).await;
    death(&db, ally, Some(enemy), false, false).await;

    let rows = aggregate(&db, 0.5).await;
    let row = &rows[0];

    assert_eq!(rows.len(), 1);
    assert_eq!(row.kills, 2);
    assert_eq!(row.teamkills, 1);
    assert_eq!(row.suicides, 2);
    assert_eq!(row.deaths, 4);

    let instigated = death::Entity::find()
      .filter(death::Column::InstigatorSession.eq(me))
      .count(&db)
      .await
      .unwrap();
    assert_eq!(row.kills + row.teamkills + row.suicides, instigated);
  }

  #[tokio::test]
  async fn test_damage_and_injures() {
    let db = setup_test_db().await;

    let g = game(&db, USA, 1800).await;
    let me = session(&db, PLAYER, g, Some(USA), 1200.0).await;
    let ally = session(&db, ALLY, g, Some(USA), 1200.0).await;
    let enemy = session(&db, ENEMY, g, Some(RUSSIA), 1200.0).await;

    damage(&db, enemy, me, (true, false, false), 30.0).await;
    damage(&db, enemy, me, (false, false, false), 20.5).await;
    damage(&db, ally, me, (true, true, false), 50.0).await;
    damage(&db, me, me, (false, false, true), 10.0).await;
    damage(&db, me, enemy, (true, false, false), 99.0).await;

    let rows = aggregate(&db, 0.5).await;

    assert_eq!(rows[0].injures, 1);
    assert_eq!(rows[0].damage, 50.5);
  }

  #[tokio::test]
  async fn test_revives_and_fobs() {
    let db = setup_test_db().await;

    let g = game(&db, USA, 1800).await;
    let me = session(&db, PLAYER, g, Some(USA), 1200.0).await;
    let ally = session(&db, ALLY, g, Some(USA), 1200.0).await;
    let enemy = session(&db, ENEMY, g, Some(RUSSIA), 1200.0).await;

    aid(&db, me, true).await;
    aid(&db, me, true).await;
    aid(&db, me, false).await;
    aid(&db, ally, true).await;

    fob(&db, me, None).await;
    fob(&db, me, Some(enemy)).await;
    fob(&db, enemy, Some(me)).await;
    fob(&db, ally, Some(enemy)).await;

    let rows = aggregate(&db, 0.5).await;

    assert_eq!(rows[0].revives, 2);
    assert_eq!(rows[0].built_fobs, 2);
    assert_eq!(rows[0].destroyed_fobs, 1);
  }

  #[tokio::test]
  async fn test_unassigned_row() {
    let db = setup_test_db().await;

    let g = game(&db, USA, 1000).await;
    let lobby = session(&db, PLAYER, g, None, 900.0).await;
    session(&db, PLAYER, g, Some(USA), 800.0).await;
    let enemy = session(&db, ENEMY, g, Some(RUSSIA), 1000.0).await;

    death(&db, enemy, Some(lobby), false, false).await;
    aid(&db, lobby, true).await;
    fob(&db, lobby, None).await;
    fob(&db, enemy, Some(lobby)).await;
    points(&db, 1, USA, 1500, 200).await;
    reputation(&db, 42.5).await;

    let rows = aggregate(&db, 0.5).await;
    assert_eq!(rows.len(), 2);

    let unassigned = &rows[0];
    assert_eq!(unassigned.faction, None);
    assert_eq!(unassigned.kills, 1);
    assert_eq!(unassigned.revives, 1);
    assert_eq!(unassigned.built_fobs, 0);
    assert_eq!(unassigned.destroyed_fobs, 0);
    assert_eq!(unassigned.games(), 0);
    assert_eq!((unassigned.xp, unassigned.credits), (0, 0));
    assert_eq!(unassigned.reputation, 42.5);
    assert_eq!(unassigned.playtime_seconds, 900.0);

    let usa = &rows[1];
    assert_eq!(usa.faction, Some(USA));
    assert_eq!(usa.wins, 1);
    assert_eq!((usa.xp, usa.credits), (1500, 200));
    assert_eq!(usa.reputation, 0.0);
  }

  #[tokio::test]
  async fn test_reputation_needs_unassigned_session() {
    let db = setup_test_db().await;

    let g = game(&db, USA, 1000).await;
    session(&db, PLAYER, g, Some(USA), 600.0).await;
    reputation(&db, 17.0).await;

    let rows = aggregate(&db, 0.5).await;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].reputation, 0.0);
  }

  #[tokio::test]
  async fn test_points_per_faction() {
    let db = setup_test_db().await;

    let first = game(&db, USA, 1000).await;
    let second = game(&db, USA, 1000).await;
    session(&db, PLAYER, first, Some(USA), 600.0).await;
    session(&db, PLAYER, second, Some(RUSSIA), 600.0).await;

    points(&db, 1, USA, 1200, 300).await;
    points(&db, 2, USA, 5000, 5000).await;
    points(&db, 2, RUSSIA, 700, 70).await;

    let rows = aggregate(&db, 0.5).await;

    assert_eq!(rows.len(), 2);
    assert_eq!((rows[0].xp, rows[0].credits), (1200, 300));
    assert_eq!((rows[1].xp, rows[1].credits), (0, 0));
    assert_eq!((rows[1].wins, rows[1].losses), (0, 1));
  }

  #[tokio::test]
  async fn test_degenerate_matches_do_not_count() {
    let db = setup_test_db().await;

    let instant = game(&db, USA, 0).await;
    let running = insert_game(&db, Some(USA), None).await;
    let drawn = insert_game(&db, None, Some(1000)).await;

    for g in [instant, running, drawn] {
      session(&db, PLAYER, g, Some(USA), 600.0).await;
    }

    let rows = aggregate(&db, 0.0).await;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].games(), 0);
    assert_eq!(rows[0].playtime_seconds, 1800.0);
  }

  #[tokio::test]
  async fn test_side_switch_counts_both() {
    let db = setup_test_db().await;

    let g = game(&db, USA, 1000).await;
    session(&db, PLAYER, g, Some(USA), 600.0).await;
    session(&db, PLAYER, g, Some(RUSSIA), 500.0).await;

    let rows = aggregate(&db, 0.3).await;

    assert_eq!(rows.len(), 2);
    assert_eq!(
      (rows[0].faction, rows[0].wins, rows[0].losses),
      (Some(USA), 1, 0)
    );
    assert_eq!(
      (rows[1].faction, rows[1].wins, rows[1].losses),
      (Some(RUSSIA), 0, 1)
    );
  }

  #[tokio::test]
  async fn test_lower_share_counts_more_games() {
    let db = setup_test_db().await;

    for length in [200.0, 500.0, 900.0] {
      let g = game(&db, USA, 1000).await;
      session(&db, PLAYER, g, Some(USA), length).await;
    }

    let mut counted = Vec::new();
    for share in [1.0, 0.75, 0.4, 0.1, 0.0] {
      counted.push(aggregate(&db, share).await[0].games());
    }

    assert_eq!(counted, vec![0, 1, 2, 3, 3]);
    assert!(counted.windows(2).all(|w| w[0] <= w[1]));
  }

  #[tokio::test]
  async fn test_invalid_args() {
    let db = setup_test_db().await;
    let stats = Stats::new(&db);

    let err = stats.aggregate(StatsQuery::new(PLAYER, -1, 0.5)).await;
    assert!(matches!(err, Err(Error::InvalidArgs(_))));

    let err = stats.aggregate(StatsQuery::new(PLAYER, 1, f32::NAN)).await;
    assert!(matches!(err, Err(Error::InvalidArgs(_))));
  }

  #[tokio::test]
  async fn test_deadline_when_pool_is_busy() {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let g = game(&db, USA, 1000).await;
    session(&db, PLAYER, g, Some(USA), 600.0).await;

    let held = db.begin().await.unwrap();

    let deadline = Duration::from_millis(50);
    let result = Stats::new(&db)
      .aggregate_within(StatsQuery::new(PLAYER, 1, 0.5), deadline)
      .await;

    let err = result.unwrap_err();
    assert!(matches!(err, Error::Timeout(d) if d == deadline), "{err:?}");
    assert!(err.is_retryable());

    held.rollback().await.unwrap();

    let rows = aggregate(&db, 0.5).await;
    assert_eq!(rows[0].wins, 1);
  }

  #[tokio::test]
  async fn test_concurrent_aggregations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats.db");
    let url = format!("sqlite://{}?mode=rwc", path.display());
    let db = Database::connect(&url).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let g = game(&db, USA, 1000).await;
    let me = session(&db, PLAYER, g, Some(USA), 700.0).await;
    let enemy = session(&db, ENEMY, g, Some(RUSSIA), 900.0).await;
    death(&db, enemy, Some(me), false, false).await;

    let stats = Stats::new(&db);
    let (mine, theirs) = tokio::join!(
      stats.aggregate(StatsQuery::new(PLAYER, 1, 0.5)),
      stats.aggregate(StatsQuery::new(ENEMY, 1, 0.5)),
    );
    let (mine, theirs) = (mine.unwrap(), theirs.unwrap());

    assert_eq!((mine[0].kills, mine[0].wins), (1, 1));
    assert_eq!((theirs[0].deaths, theirs[0].losses), (1, 1));
  }
}
