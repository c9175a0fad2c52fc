use serde::{Deserialize, Serialize};

use crate::{
    domain::{BoosterCategory, Outcome, PayloadRange, Selection, SiteFilter, SiteName},
    error::ApiError,
};

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const SITE_DROPDOWN_PLACEHOLDER: &str = "Select a Launch Site";
pub const ALL_SITES_LABEL: &str = "All Sites";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSuccessSlice {
    pub site: SiteName,
    pub success_count: u64,
    /// Fraction of all successes in the view; zero when no site has any.
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeSlice {
    pub outcome: Outcome,
    pub launch_count: u64,
}

/// Proportion view over the filtered launches.
///
/// With every site selected this is the number of successful launches per
/// site; with one site selected it is the number of launches per outcome at
/// that site. Both forms are empty when no launch survived the filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RatioView {
    SuccessesBySite { slices: Vec<SiteSuccessSlice> },
    OutcomesForSite {
        site: SiteName,
        slices: Vec<OutcomeSlice>,
    },
}

impl RatioView {
    pub fn is_empty(&self) -> bool {
        match self {
            RatioView::SuccessesBySite { slices } => slices.is_empty(),
            RatioView::OutcomesForSite { slices, .. } => slices.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RatioView::SuccessesBySite { slices } => slices.len(),
            RatioView::OutcomesForSite { slices, .. } => slices.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_category: BoosterCategory,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CorrelationView {
    pub points: Vec<CorrelationPoint>,
}

impl CorrelationView {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Distinct booster categories in order of first appearance.
    pub fn booster_categories(&self) -> Vec<&BoosterCategory> {
        let mut seen: Vec<&BoosterCategory> = Vec::new();
        for point in &self.points {
            if !seen.contains(&&point.booster_category) {
                seen.push(&point.booster_category);
            }
        }
        seen
    }

    pub fn points_for<'a>(
        &'a self,
        category: &'a BoosterCategory,
    ) -> impl Iterator<Item = &'a CorrelationPoint> + 'a {
        self.points
            .iter()
            .filter(move |point| &point.booster_category == category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartTitles {
    pub ratio: String,
    pub correlation: String,
}

impl ChartTitles {
    pub fn for_filter(site_filter: &SiteFilter) -> Self {
        match site_filter {
            SiteFilter::All => Self {
                ratio: "Percentage of Successful Launches for all Sites".to_string(),
                correlation: "Correlation between Payload and Success for All Sites".to_string(),
            },
            SiteFilter::Site(site) => Self {
                ratio: format!("Total Success Launches for {site}"),
                correlation: format!("Correlation between Payload and Success for {site}"),
            },
        }
    }
}

/// Both derived views for one selection, handed to subscribers as a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub revision: u64,
    pub selection: Selection,
    pub titles: ChartTitles,
    pub ratio: RatioView,
    pub correlation: CorrelationView,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum DashboardEvent {
    Published(Publication),
    SelectionRejected {
        selection: Selection,
        error: ApiError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOption {
    pub label: String,
    pub value: SiteFilter,
}

impl SiteOption {
    pub fn all_sites() -> Self {
        Self {
            label: ALL_SITES_LABEL.to_string(),
            value: SiteFilter::All,
        }
    }

    pub fn for_site(site: &SiteName) -> Self {
        Self {
            label: site.to_string(),
            value: SiteFilter::Site(site.clone()),
        }
    }
}

pub const MAX_SLIDER_MARKS: usize = 100;

/// Nominal domain of the payload range control. Independent of the
/// dataset's own payload bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadSlider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for PayloadSlider {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10_000.0,
            step: 1_000.0,
        }
    }
}

impl PayloadSlider {
    pub fn admits(&self, range: &PayloadRange) -> bool {
        range.is_well_formed() && PayloadRange::new(self.min, self.max).encloses(range)
    }

    pub fn full_range(&self) -> PayloadRange {
        PayloadRange::new(self.min, self.max)
    }

    /// Finite bounds in order and a step that yields at most
    /// [`MAX_SLIDER_MARKS`] marks.
    pub fn is_usable(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min <= self.max
            && self.step.is_finite()
            && self.step > 0.0
            && (self.max - self.min) / self.step < MAX_SLIDER_MARKS as f64
    }

    /// Evenly spaced marks from `min`. An unusable slider has the single
    /// mark `min`.
    pub fn marks(&self) -> Vec<f64> {
        if !self.is_usable() {
            return vec![self.min];
        }
        let count = ((self.max - self.min) / self.step).floor() as usize;
        (0..=count)
            .map(|index| self.min + self.step * index as f64)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub title: String,
    pub site_placeholder: String,
    pub site_options: Vec<SiteOption>,
    pub payload_slider: PayloadSlider,
    pub payload_bounds: PayloadRange,
    pub initial_selection: Selection,
}

impl DashboardLayout {
    pub fn option_for(&self, value: &str) -> Option<&SiteOption> {
        let wanted = SiteFilter::parse(value);
        self.site_options.iter().find(|option| option.value == wanted)
    }
}
