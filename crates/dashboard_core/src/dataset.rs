use shared::{
    domain::{LaunchRecord, PayloadRange, Selection, SiteFilter, SiteName},
    protocol::{
        DashboardLayout, PayloadSlider, SiteOption, DASHBOARD_TITLE, SITE_DROPDOWN_PLACEHOLDER,
    },
};

use crate::error::{DatasetError, SelectionError};

/// Launch table loaded once at startup. Never mutated afterwards; share it
/// behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    site_enumeration: Vec<SiteName>,
    payload_bounds: PayloadRange,
}

impl Dataset {
    pub fn load(rows: impl IntoIterator<Item = LaunchRecord>) -> Result<Self, DatasetError> {
        let records: Vec<LaunchRecord> = rows.into_iter().collect();
        let Some(first) = records.first() else {
            return Err(DatasetError::Empty);
        };

        let mut site_enumeration: Vec<SiteName> = Vec::new();
        let mut payload_bounds = PayloadRange::new(first.payload_mass_kg, first.payload_mass_kg);

        for (index, record) in records.iter().enumerate() {
            if !record.payload_mass_kg.is_finite() || record.payload_mass_kg < 0.0 {
                return Err(DatasetError::InvalidRecord {
                    index,
                    payload_mass_kg: record.payload_mass_kg,
                });
            }
            if !site_enumeration.contains(&record.site) {
                site_enumeration.push(record.site.clone());
            }
            payload_bounds.lo = payload_bounds.lo.min(record.payload_mass_kg);
            payload_bounds.hi = payload_bounds.hi.max(record.payload_mass_kg);
        }

        tracing::info!(
            rows = records.len(),
            sites = site_enumeration.len(),
            min_payload_kg = payload_bounds.lo,
            max_payload_kg = payload_bounds.hi,
            "launch dataset ready"
        );

        Ok(Self {
            records,
            site_enumeration,
            payload_bounds,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct sites in order of first appearance.
    pub fn site_enumeration(&self) -> &[SiteName] {
        &self.site_enumeration
    }

    pub fn has_site(&self, site: &SiteName) -> bool {
        self.site_enumeration.contains(site)
    }

    pub fn payload_bounds(&self) -> PayloadRange {
        self.payload_bounds
    }

    pub fn initial_selection(&self) -> Selection {
        Selection::new(SiteFilter::All, self.payload_bounds)
    }

    pub fn site_options(&self) -> Vec<SiteOption> {
        std::iter::once(SiteOption::all_sites())
            .chain(self.site_enumeration.iter().map(SiteOption::for_site))
            .collect()
    }

    pub fn layout(&self, payload_slider: PayloadSlider) -> DashboardLayout {
        DashboardLayout {
            title: DASHBOARD_TITLE.to_string(),
            site_placeholder: SITE_DROPDOWN_PLACEHOLDER.to_string(),
            site_options: self.site_options(),
            payload_slider,
            payload_bounds: self.payload_bounds,
            initial_selection: self.initial_selection(),
        }
    }

    pub fn validate(&self, selection: &Selection) -> Result<(), SelectionError> {
        if let SiteFilter::Site(site) = &selection.site_filter {
            if !self.has_site(site) {
                return Err(SelectionError::UnknownSite(site.clone()));
            }
        }
        if !selection.payload_range.is_well_formed() {
            return Err(SelectionError::InvalidRange(selection.payload_range));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/dataset_tests.rs"]
mod tests;
