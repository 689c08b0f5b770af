use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    NorthAmerica,
    Europe,
    AsiaPacific,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::NorthAmerica, Region::Europe, Region::AsiaPacific];

    /// Baseline monthly revenue for the region, USD thousands.
    pub fn base_revenue(self) -> f64 {
        match self {
            Region::NorthAmerica => 500.0,
            Region::Europe => 350.0,
            Region::AsiaPacific => 300.0,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Region::NorthAmerica => 0,
            Region::Europe => 1,
            Region::AsiaPacific => 2,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::AsiaPacific => "Asia Pacific",
        };
        f.write_str(label)
    }
}
