pub use std::{
  collections::{BTreeMap, HashMap},
  time::Duration,
};

pub use chrono::{NaiveDateTime as DateTime, TimeDelta};
pub use migration::{Migrator, MigratorTrait};
pub use sea_orm::{
  ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait,
  QueryFilter, QuerySelect, QueryTrait, Set, TransactionTrait,
};
pub use tokio::time;
pub use tracing::{debug, error, info, warn};

pub use crate::error::{Error, Result};
