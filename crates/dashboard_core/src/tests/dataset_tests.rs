use super::*;

use shared::domain::{PayloadRange, Selection, SiteFilter};
use shared::protocol::PayloadSlider;

use crate::test_support::{launch, sample_rows};

#[test]
fn empty_rows_fail_to_load() {
    assert_eq!(Dataset::load(Vec::new()), Err(DatasetError::Empty));
}

#[test]
fn enumerates_sites_in_first_seen_order() {
    let dataset = Dataset::load(sample_rows()).expect("dataset");

    let sites: Vec<&str> = dataset
        .site_enumeration()
        .iter()
        .map(|site| site.as_str())
        .collect();
    assert_eq!(
        sites,
        vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
    );
}

#[test]
fn computes_payload_bounds_over_all_rows() {
    let dataset = Dataset::load(sample_rows()).expect("dataset");

    assert_eq!(dataset.payload_bounds(), PayloadRange::new(0.0, 9600.0));
    assert_eq!(dataset.len(), 12);
}

#[test]
fn single_row_dataset_has_degenerate_bounds() {
    let dataset = Dataset::load(vec![launch("KSC LC-39A", 2490.0, 1, "FT")]).expect("dataset");

    assert_eq!(dataset.payload_bounds(), PayloadRange::new(2490.0, 2490.0));
    assert_eq!(dataset.site_enumeration().len(), 1);
}

#[test]
fn rejects_negative_or_non_finite_payloads() {
    let err = Dataset::load(vec![
        launch("KSC LC-39A", 2490.0, 1, "FT"),
        launch("KSC LC-39A", -1.0, 1, "FT"),
    ])
    .expect_err("negative payload");
    assert!(matches!(err, DatasetError::InvalidRecord { index: 1, .. }));

    let err = Dataset::load(vec![launch("KSC LC-39A", f64::NAN, 1, "FT")])
        .expect_err("nan payload");
    assert!(matches!(err, DatasetError::InvalidRecord { index: 0, .. }));
}

#[test]
fn initial_selection_spans_dataset_bounds_for_all_sites() {
    let dataset = Dataset::load(sample_rows()).expect("dataset");

    assert_eq!(
        dataset.initial_selection(),
        Selection::new(SiteFilter::All, PayloadRange::new(0.0, 9600.0))
    );
}

#[test]
fn layout_keeps_slider_domain_separate_from_dataset_bounds() {
    let dataset = Dataset::load(vec![
        launch("CCAFS LC-40", 1200.0, 0, "v1.1"),
        launch("KSC LC-39A", 4700.0, 1, "FT"),
    ])
    .expect("dataset");

    let layout = dataset.layout(PayloadSlider::default());

    assert_eq!(layout.title, "SpaceX Launch Records Dashboard");
    assert_eq!(layout.site_placeholder, "Select a Launch Site");
    assert_eq!(layout.payload_slider.min, 0.0);
    assert_eq!(layout.payload_slider.max, 10_000.0);
    assert_eq!(layout.payload_bounds, PayloadRange::new(1200.0, 4700.0));
    assert_eq!(
        layout.initial_selection.payload_range,
        PayloadRange::new(1200.0, 4700.0)
    );

    let labels: Vec<&str> = layout
        .site_options
        .iter()
        .map(|option| option.label.as_str())
        .collect();
    assert_eq!(labels, vec!["All Sites", "CCAFS LC-40", "KSC LC-39A"]);
    assert_eq!(layout.site_options[0].value, SiteFilter::All);
}

#[test]
fn site_options_grow_with_the_number_of_sites() {
    let rows = (0..7)
        .map(|index| launch(&format!("SITE-{index}"), 100.0 * index as f64, 1, "FT"))
        .collect::<Vec<_>>();
    let dataset = Dataset::load(rows).expect("dataset");

    assert_eq!(dataset.site_options().len(), 8);
}

#[test]
fn validate_rejects_unknown_site_and_inverted_range() {
    let dataset = Dataset::load(sample_rows()).expect("dataset");

    let unknown = Selection::new(SiteFilter::parse("Boca Chica"), PayloadRange::new(0.0, 1.0));
    assert!(matches!(
        dataset.validate(&unknown),
        Err(SelectionError::UnknownSite(_))
    ));

    let inverted = Selection::new(SiteFilter::All, PayloadRange::new(5000.0, 1000.0));
    assert!(matches!(
        dataset.validate(&inverted),
        Err(SelectionError::InvalidRange(_))
    ));

    let wide = Selection::new(
        SiteFilter::parse("KSC LC-39A"),
        PayloadRange::new(0.0, 10_000.0),
    );
    assert!(dataset.validate(&wide).is_ok());
}
