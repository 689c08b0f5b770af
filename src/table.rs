use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::Region;
use crate::observation::Observation;

/// The assembled observation table. Row order is whatever the generator
/// produced (region-major, then date-minor); nothing here mutates rows.
#[derive(Debug, Clone)]
pub struct RevenueTable {
    observations: Vec<Observation>,
}

impl RevenueTable {
    pub fn from_observations(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Distinct regions in first-seen order.
    pub fn regions(&self) -> Vec<Region> {
        let mut regions = Vec::new();
        for observation in &self.observations {
            if !regions.contains(&observation.region) {
                regions.push(observation.region);
            }
        }
        regions
    }

    /// The (date, revenue) series for one region, in row order.
    pub fn series_for(&self, region: Region) -> Vec<(NaiveDate, f64)> {
        self.observations
            .iter()
            .filter(|observation| observation.region == region)
            .map(|observation| (observation.date, observation.revenue))
            .collect()
    }

    /// Smallest and largest revenue across all rows.
    pub fn revenue_bounds(&self) -> Option<(f64, f64)> {
        if self.observations.is_empty() {
            return None;
        }
        let min = self
            .observations
            .iter()
            .map(|observation| observation.revenue)
            .fold(f64::INFINITY, f64::min);
        let max = self
            .observations
            .iter()
            .map(|observation| observation.revenue)
            .fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }

    /// Mean revenue across regions for each month, in chronological order.
    pub fn monthly_averages(&self) -> Vec<(NaiveDate, f64)> {
        let mut buckets: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
        for observation in &self.observations {
            let bucket = buckets.entry(observation.date).or_insert((0.0, 0));
            bucket.0 += observation.revenue;
            bucket.1 += 1;
        }
        buckets
            .into_iter()
            .map(|(date, (sum, count))| (date, sum / count as f64))
            .collect()
    }

    /// The month with the highest cross-region average revenue, and that
    /// average. Ties go to the earliest month: the scan is chronological
    /// and only a strictly greater average displaces the current peak.
    pub fn peak_month(&self) -> Option<(NaiveDate, f64)> {
        let mut peak: Option<(NaiveDate, f64)> = None;
        for (date, average) in self.monthly_averages() {
            match peak {
                Some((_, best)) if average <= best => {}
                _ => peak = Some((date, average)),
            }
        }
        peak
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 1).expect("valid date")
    }

    fn table_from(rows: &[(i32, u32, Region, f64)]) -> RevenueTable {
        RevenueTable::from_observations(
            rows.iter()
                .map(|&(year, month, region, revenue)| Observation {
                    date: date(year, month),
                    region,
                    revenue,
                })
                .collect(),
        )
    }

    #[test]
    fn monthly_averages_mean_across_regions() {
        let table = table_from(&[
            (2022, 1, Region::NorthAmerica, 10.0),
            (2022, 1, Region::Europe, 20.0),
            (2022, 1, Region::AsiaPacific, 30.0),
            (2022, 2, Region::NorthAmerica, 5.0),
            (2022, 2, Region::Europe, 5.0),
            (2022, 2, Region::AsiaPacific, 5.0),
        ]);

        let averages = table.monthly_averages();
        assert_eq!(averages, vec![(date(2022, 1), 20.0), (date(2022, 2), 5.0)]);
    }

    #[test]
    fn spiked_month_wins_the_peak() {
        let mut rows = Vec::new();
        for month in 1..=6u32 {
            for region in Region::ALL {
                let revenue = if month == 4 { 1_000_000.0 } else { 0.0 };
                rows.push((2022, month, region, revenue));
            }
        }
        let table = table_from(&rows);

        let (peak, average) = table.peak_month().expect("peak");
        assert_eq!(peak, date(2022, 4));
        assert_eq!(average, 1_000_000.0);
    }

    #[test]
    fn tied_months_resolve_to_the_earliest() {
        let table = table_from(&[
            (2022, 3, Region::NorthAmerica, 7.0),
            (2022, 1, Region::NorthAmerica, 7.0),
            (2022, 2, Region::NorthAmerica, 7.0),
        ]);

        let (peak, _) = table.peak_month().expect("peak");
        assert_eq!(peak, date(2022, 1));
    }

    #[test]
    fn empty_table_has_no_peak() {
        let table = RevenueTable::from_observations(Vec::new());
        assert!(table.peak_month().is_none());
        assert!(table.revenue_bounds().is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn regions_preserve_first_seen_order() {
        let table = table_from(&[
            (2022, 1, Region::Europe, 1.0),
            (2022, 1, Region::NorthAmerica, 1.0),
            (2022, 2, Region::Europe, 1.0),
        ]);

        assert_eq!(table.regions(), vec![Region::Europe, Region::NorthAmerica]);
    }
}
