//! Properties of the rendered reports, checked through the public API.

use test_log_digest::{
    blocks, render, stats::SOFT_FAIL_TAG, Delimiter, Failures, Metrics,
    Percentage, Status, Summary, Table, TestCounts,
};

const TWO_APPS: &str = "\
==== Summary app: App A | code version: 1.0 | os: macOS ====
  10 passing (2m)
  2 failing
============
==== Summary app: App B | code version: 1.0 | os: macOS ====
  5 passing (1m)
  1 pending
  1) [SOFT FAIL] splash screen
============
";

#[test]
fn table_has_a_row_per_app() {
    let table = render(TWO_APPS, Table::new());
    let rows = table
        .lines()
        .filter(|l| l.starts_with("| App A") || l.starts_with("| App B"))
        .collect::<Vec<_>>();

    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("| 10 | 2 | 0 | 🟠 83.33% |"));
    assert!(rows[1].contains("| 5 | 0 | 1 | 🟢 100.00% |"));
}

#[test]
fn no_headers_means_no_summaries() {
    let log = "  10 passing\n  2 failing\n";

    assert_eq!(
        render(log, Table::new()),
        "No test summaries found in the log.",
    );
    assert_eq!(
        render(log, Summary::default()),
        "No test summaries found in the log.",
    );
    assert_eq!(render(log, Failures::new()), "");
}

#[test]
fn soft_fail_count_matches_tagged_lines() {
    for delimiter in [Delimiter::Separator, Delimiter::SummaryMarker] {
        for block in blocks(TWO_APPS, delimiter) {
            let tagged = block
                .lines()
                .filter(|l| l.contains(SOFT_FAIL_TAG))
                .count();

            assert_eq!(TestCounts::scan(block.text()).soft_fails, tagged);
        }
    }
}

#[test]
fn critical_rate_is_zero_without_outcomes() {
    for (passing, failing) in [(0, 0), (0, 3), (3, 0), (7, 9)] {
        let counts = TestCounts {
            passing,
            failing,
            ..TestCounts::default()
        };
        let rate = Metrics::from_counts(&counts).critical;

        assert!((0.0..=100.0).contains(&rate.value()));
        if passing + failing == 0 {
            assert_eq!(rate, Percentage::ZERO);
        }
    }
}

#[test]
fn every_percentage_has_exactly_one_status() {
    for tenths in 0..=1000 {
        let pct = f64::from(tenths) / 10.0;
        let status = Status::of(Percentage::new(pct));

        let expected = if pct == 100.0 {
            Status::Green
        } else if pct > 90.0 {
            Status::Yellow
        } else if pct > 80.0 {
            Status::Orange
        } else {
            Status::Red
        };
        assert_eq!(status, expected, "{pct}");
    }
}

#[test]
fn status_follows_printed_value_at_boundaries() {
    for (passing, whole) in [
        (18001, 20000),
        (19999, 20000),
        (16001, 20000),
        (199_999, 200_000),
        (1, 3),
        (2, 3),
    ] {
        let rate = Percentage::ratio(passing, whole);

        assert_eq!(
            Some(Status::of(rate)),
            Status::parse(&rate.to_string()),
            "{passing}/{whole} printed as {rate}",
        );
    }
}

#[test]
fn table_icon_agrees_with_printed_rate() {
    let log = "\
==== Summary app: A | code version: 1 | os: mac ====
  18001 passing
  1999 failing
";
    let table = render(log, Table::new());

    assert!(
        table.contains("| A | 1 | mac | 18001 | 1999 | 0 | 🟠 90.00% | 🟠 90.00% |"),
        "{table}",
    );
}

#[test]
fn rendering_is_idempotent() {
    assert_eq!(
        render(TWO_APPS, Table::new()),
        render(TWO_APPS, Table::new()),
    );
    assert_eq!(
        render(TWO_APPS, Summary::default()),
        render(TWO_APPS, Summary::default()),
    );
    assert_eq!(
        render(TWO_APPS, Failures::new()),
        render(TWO_APPS, Failures::new()),
    );
}
