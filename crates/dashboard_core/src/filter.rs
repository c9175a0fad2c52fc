use shared::domain::{LaunchRecord, Selection};

use crate::dataset::Dataset;

/// Rows of a dataset that survive one selection, in dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredSubset<'a> {
    dataset: &'a Dataset,
    rows: Vec<&'a LaunchRecord>,
}

impl<'a> FilteredSubset<'a> {
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn rows(&self) -> &[&'a LaunchRecord] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a LaunchRecord> + '_ {
        self.rows.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn filter_launches<'a>(dataset: &'a Dataset, selection: &Selection) -> FilteredSubset<'a> {
    let rows = dataset
        .records()
        .iter()
        .filter(|record| selection.site_filter.admits(&record.site))
        .filter(|record| selection.payload_range.contains(record.payload_mass_kg))
        .collect();

    FilteredSubset { dataset, rows }
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
