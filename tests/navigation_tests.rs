// Host-side tests for deciding when history navigation needs a rebuild.

mod navigation {
    include!("../src/navigation.rs");
}

use navigation::PathTracker;

#[test]
fn fresh_tracker_reports_any_path_as_changed() {
    let tracker = PathTracker::default();
    assert!(tracker.changed("/"));
    assert_eq!(tracker.current(), None);
}

#[test]
fn same_path_is_not_a_change() {
    let mut tracker = PathTracker::default();
    tracker.mounted("/about");
    assert!(!tracker.changed("/about"));
    assert!(tracker.changed("/projects"));
    assert!(tracker.changed("/about/"));
    assert_eq!(tracker.current(), Some("/about"));
}

#[test]
fn remount_moves_the_baseline() {
    let mut tracker = PathTracker::default();
    tracker.mounted("/about");
    tracker.mounted("/projects");
    assert!(tracker.changed("/about"));
    assert!(!tracker.changed("/projects"));
}
