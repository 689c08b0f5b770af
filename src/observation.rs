use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::Region;

/// One (region, month) revenue data point. Immutable after generation;
/// rows carry no identity beyond their field values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub region: Region,
    pub revenue: f64,
}
