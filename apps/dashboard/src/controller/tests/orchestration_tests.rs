use super::*;

use crossbeam_channel::bounded;
use shared::domain::{PayloadRange, SiteFilter};

use crate::controller::events::UiErrorCategory;

fn selection(lo: f64, hi: f64) -> Selection {
    Selection::new(SiteFilter::All, PayloadRange::new(lo, hi))
}

#[test]
fn queues_selection_for_worker() {
    let (tx, rx) = bounded(4);

    dispatch_selection_change(&tx, selection(0.0, 1000.0)).expect("queued");

    assert_eq!(rx.try_recv().expect("received"), selection(0.0, 1000.0));
}

#[test]
fn full_queue_waits_instead_of_dropping_newest() {
    let (tx, rx) = bounded(1);
    tx.send(selection(0.0, 1000.0)).expect("fill queue");

    let consumer = std::thread::spawn(move || {
        let first = rx.recv().expect("first");
        let second = rx.recv().expect("second");
        (first, second)
    });

    dispatch_selection_change(&tx, selection(0.0, 2000.0)).expect("queued after wait");
    let (first, second) = consumer.join().expect("consumer");

    assert_eq!(first, selection(0.0, 1000.0));
    assert_eq!(second, selection(0.0, 2000.0));
}

#[test]
fn disconnected_worker_is_reported_as_transport_error() {
    let (tx, rx) = bounded::<Selection>(1);
    drop(rx);

    let err = dispatch_selection_change(&tx, selection(0.0, 1000.0)).expect_err("disconnected");

    assert_eq!(err.category(), UiErrorCategory::Transport);
    assert_eq!(err.context(), UiErrorContext::Selection);
}
