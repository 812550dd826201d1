use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Parameters of one season aggregation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsQuery {
  /// Steam64 id of the player
  pub player: u64,
  pub season: i32,
  /// Share of a match a player must spend on a faction before the match
  /// counts towards that faction's wins or losses.
  pub win_time_share: f32,
}

impl StatsQuery {
  pub fn new(player: u64, season: i32, win_time_share: f32) -> Self {
    Self { player, season, win_time_share }
  }

  /// Rejects parameters the schema would silently answer with empty rows and
  /// returns the player id as stored.
  ///
  /// Shares outside `[0, 1]` are accepted, they just never (or always) pass.
  pub fn validate(&self) -> Result<i64> {
    if self.season < 0 {
      return Err(Error::InvalidArgs(format!(
        "season must not be negative, got {}",
        self.season
      )));
    }

    if !self.win_time_share.is_finite() {
      return Err(Error::InvalidArgs(format!(
        "win time share must be finite, got {}",
        self.win_time_share
      )));
    }

    i64::try_from(self.player).map_err(|_| {
      Error::InvalidArgs(format!("player id {} is out of range", self.player))
    })
  }
}

/// One player's season totals under a single faction.
///
/// `faction` is `None` for sessions played before picking a side. That row is
/// the only one carrying reputation, and never carries wins, losses, FOBs or
/// points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerFactionSummary {
  pub faction: Option<i32>,
  pub kills: u64,
  pub deaths: u64,
  pub teamkills: u64,
  pub suicides: u64,
  pub revives: u64,
  pub injures: u64,
  pub damage: f64,
  pub wins: u32,
  pub losses: u32,
  pub built_fobs: u64,
  pub destroyed_fobs: u64,
  pub xp: i64,
  pub credits: i64,
  pub reputation: f64,
  pub playtime_seconds: f64,
}

impl PerFactionSummary {
  pub fn new(faction: Option<i32>) -> Self {
    Self { faction, ..Default::default() }
  }

  /// Kills per death, raw kills when the player never died.
  pub fn kd_ratio(&self) -> f64 {
    if self.deaths == 0 {
      self.kills as f64
    } else {
      self.kills as f64 / self.deaths as f64
    }
  }

  /// Matches that counted towards this faction's record.
  pub fn games(&self) -> u32 {
    self.wins + self.losses
  }

  /// Adds every counter of `other` into `self`, keeping `self.faction`.
  pub fn merge(&mut self, other: &PerFactionSummary) {
    self.kills += other.kills;
    self.deaths += other.deaths;
    self.teamkills += other.teamkills;
    self.suicides += other.suicides;
    self.revives += other.revives;
    self.injures += other.injures;
    self.damage += other.damage;
    self.wins += other.wins;
    self.losses += other.losses;
    self.built_fobs += other.built_fobs;
    self.destroyed_fobs += other.destroyed_fobs;
    self.xp += other.xp;
    self.credits += other.credits;
    self.reputation += other.reputation;
    self.playtime_seconds += other.playtime_seconds;
  }

  /// Totals across all factions. The result's `faction` carries no meaning.
  pub fn overall(rows: &[PerFactionSummary]) -> PerFactionSummary {
    rows.iter().fold(Self::default(), |mut total, row| {
      total.merge(row);
      total
    })
  }
}
