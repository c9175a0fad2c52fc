use std::collections::HashMap;

use shared::{
    domain::{Outcome, Selection, SiteFilter, SiteName},
    protocol::{CorrelationPoint, CorrelationView, OutcomeSlice, RatioView, SiteSuccessSlice},
};

use crate::filter::FilteredSubset;

/// Success proportions for the surviving launches.
///
/// For all sites: successful launches summed per site, each slice's share
/// taken against the successes of every listed site. Sites with launches but
/// no successes stay listed with share 0. For one site: launches counted per
/// outcome.
pub fn aggregate_ratio(subset: &FilteredSubset<'_>, selection: &Selection) -> RatioView {
    match &selection.site_filter {
        SiteFilter::All => successes_by_site(subset),
        SiteFilter::Site(site) => outcomes_for_site(subset, site),
    }
}

fn successes_by_site(subset: &FilteredSubset<'_>) -> RatioView {
    // every site present in the subset gets an entry, even with no successes
    let mut successes: HashMap<&SiteName, u64> = HashMap::new();
    for record in subset.iter() {
        *successes.entry(&record.site).or_default() += u64::from(record.outcome.as_class());
    }

    let total_successes: u64 = successes.values().sum();

    let slices = subset
        .dataset()
        .site_enumeration()
        .iter()
        .filter_map(|site| {
            let success_count = *successes.get(site)?;
            let share = if total_successes == 0 {
                0.0
            } else {
                success_count as f64 / total_successes as f64
            };
            Some(SiteSuccessSlice {
                site: site.clone(),
                success_count,
                share,
            })
        })
        .collect();

    RatioView::SuccessesBySite { slices }
}

fn outcomes_for_site(subset: &FilteredSubset<'_>, site: &SiteName) -> RatioView {
    let successes = subset
        .iter()
        .filter(|record| record.outcome.is_success())
        .count() as u64;
    let failures = subset.len() as u64 - successes;

    let slices = [(Outcome::Failure, failures), (Outcome::Success, successes)]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(outcome, launch_count)| OutcomeSlice {
            outcome,
            launch_count,
        })
        .collect();

    RatioView::OutcomesForSite {
        site: site.clone(),
        slices,
    }
}

/// Raw payload/outcome points, one per surviving launch, for the scatter.
pub fn aggregate_correlation(subset: &FilteredSubset<'_>) -> CorrelationView {
    CorrelationView {
        points: subset
            .iter()
            .map(|record| CorrelationPoint {
                payload_mass_kg: record.payload_mass_kg,
                outcome: record.outcome,
                booster_category: record.booster_category.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "tests/aggregate_tests.rs"]
mod tests;
