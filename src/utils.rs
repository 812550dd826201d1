use crate::{model::PerFactionSummary, prelude::*};

pub fn format_duration(duration: TimeDelta) -> String {
  format!(
    "{}d {}h {}m",
    duration.num_days(),
    duration.num_hours() % 24,
    duration.num_minutes() % 60
  )
}

/// Lengths `TimeDelta` cannot hold render as zero.
pub fn format_playtime(seconds: f64) -> String {
  let millis = (seconds * 1000.0) as i64;
  format_duration(TimeDelta::try_milliseconds(millis).unwrap_or_default())
}

fn faction_label(faction: Option<i32>) -> String {
  faction.map_or_else(|| String::from("-"), |id| id.to_string())
}

/// Fixed-width table of `rows` followed by an `all` line totalling them.
pub fn render_table(rows: &[PerFactionSummary]) -> String {
  let mut out = format!(
    "{:<7} {:>6} {:>6} {:>5} {:>3} {:>3} {:>4} {:>4} {:>9} {:>4} {:>4} \
     {:>4} {:>4} {:>8} {:>8} {:>6} {:>12}",
    "faction",
    "kills",
    "deaths",
    "k/d",
    "tk",
    "sui",
    "rev",
    "inj",
    "damage",
    "won",
    "lost",
    "fobs",
    "dfob",
    "xp",
    "credits",
    "rep",
    "playtime"
  );
  out.push('\n');

  let overall = PerFactionSummary::overall(rows);
  let labelled = rows
    .iter()
    .map(|row| (faction_label(row.faction), row))
    .chain(std::iter::once((String::from("all"), &overall)));

  for (label, row) in labelled {
    let line = format!(
      "{:<7} {:>6} {:>6} {:>5.2} {:>3} {:>3} {:>4} {:>4} {:>9.1} {:>4} {:>4} \
       {:>4} {:>4} {:>8} {:>8} {:>6.1} {:>12}",
      label,
      row.kills,
      row.deaths,
      row.kd_ratio(),
      row.teamkills,
      row.suicides,
      row.revives,
      row.injures,
      row.damage,
      row.wins,
      row.losses,
      row.built_fobs,
      row.destroyed_fobs,
      row.xp,
      row.credits,
      row.reputation,
      format_playtime(row.playtime_seconds)
    );
    out.push_str(&line);
    out.push('\n');
  }

  out
}
