//! The behavioral laws the demo exists to show, measured headlessly: which
//! display-element bodies execute (and which sequences get recomputed) when
//! one counter's button is clicked.

use rerender_lab::harness::Harness;
use rerender_lab::{HandlerStyle, Policy};

#[test]
fn mount_runs_every_display_once() {
    for policy in Policy::ALL {
        let harness = Harness::new(policy, HandlerStyle::Inline);
        // the initial build creates children last to first
        assert_eq!(
            harness.probe().renders(),
            ["third", "second", "first"],
            "policy: {policy}"
        );
        assert_eq!(harness.probe().computes().len(), 3, "policy: {policy}");
    }
}

#[test]
fn plain_board_reruns_every_display_on_each_click() {
    for style in HandlerStyle::ALL {
        let mut harness = Harness::new(Policy::Plain, style);
        harness.probe().reset();

        harness.click(1);
        assert_eq!(harness.probe().renders().len(), 3, "style: {style}");
        // no caching anywhere: every body run recomputes its sequence
        assert_eq!(harness.probe().computes().len(), 3, "style: {style}");

        harness.click(1);
        assert_eq!(harness.probe().renders().len(), 6, "style: {style}");
    }
}

#[test]
fn cached_compute_board_still_reruns_every_display() {
    for style in HandlerStyle::ALL {
        let mut harness = Harness::new(Policy::CachedCompute, style);
        harness.probe().reset();

        harness.click(2);
        assert_eq!(harness.probe().renders().len(), 3, "style: {style}");
        // but only the clicked element's sequence is actually recomputed
        assert_eq!(harness.probe().computes(), ["third"], "style: {style}");

        // and exactly once per count change
        harness.click(2);
        assert_eq!(
            harness.probe().computes(),
            ["third", "third"],
            "style: {style}"
        );
    }
}

#[test]
fn memoized_board_reruns_only_the_clicked_display() {
    for style in HandlerStyle::ALL {
        let mut harness = Harness::new(Policy::Memoized, style);
        harness.probe().reset();

        harness.click(0);
        assert_eq!(harness.probe().renders(), ["first"], "style: {style}");
        assert_eq!(harness.probe().computes(), ["first"], "style: {style}");

        harness.click(2);
        assert_eq!(
            harness.probe().renders(),
            ["first", "third"],
            "style: {style}"
        );
    }
}

#[test]
fn handler_style_never_changes_rerender_counts() {
    for policy in Policy::ALL {
        let expected = match policy {
            Policy::Memoized => 3,
            _ => 9,
        };
        for style in HandlerStyle::ALL {
            let mut harness = Harness::new(policy, style);
            harness.probe().reset();
            for index in 0..3 {
                harness.click(index);
            }
            assert_eq!(
                harness.probe().renders().len(),
                expected,
                "policy: {policy}, style: {style}"
            );
        }
    }
}

#[test]
fn each_click_increments_only_its_own_counter() {
    for policy in Policy::ALL {
        let mut harness = Harness::new(policy, HandlerStyle::Inline);
        harness.click(0);
        harness.click(0);
        harness.click(2);

        let html = harness.html();
        assert!(html.contains("first: 2"), "policy {policy}: {html}");
        assert!(html.contains("second: 0"), "policy {policy}: {html}");
        assert!(html.contains("third: 1"), "policy {policy}: {html}");
    }
}
