//! Integration tests for the digital clock

use termclock::render::digital::{digital_width, format_time};

use crate::helpers::{at, config, framed_rows, test_runtime};

#[test]
fn afternoon_12_hour_without_seconds_scenario() {
    let cfg = config(true, true, true);
    let text = format_time(&at(13, 5, 0), &cfg);

    assert_eq!(text, "01:05 PM");
    assert!(!text.contains(":00 "));
    assert_eq!(digital_width(&cfg), 32);
    assert_eq!(cfg.width(), 32);
    assert_eq!(cfg.height(), 3);
}

#[test]
fn widths_for_seconds_configs() {
    assert_eq!(digital_width(&config(true, false, false)), 32);
    assert_eq!(digital_width(&config(true, true, false)), 44);
}

#[test]
fn snapshot_digital_24h_with_seconds() {
    let time = at(12, 34, 56);
    let mut rt = test_runtime(config(true, false, false), 32, 3, time).unwrap();
    rt.compose_frame(&time);

    insta::assert_snapshot!("digital_24h_with_seconds", framed_rows(rt.canvas()));
}

#[test]
fn snapshot_digital_12h_hours_minutes() {
    let time = at(13, 5, 0);
    let mut rt = test_runtime(config(true, true, true), 32, 3, time).unwrap();
    rt.compose_frame(&time);

    insta::assert_snapshot!("digital_12h_hours_minutes", framed_rows(rt.canvas()));
}

#[test]
fn digital_clock_is_centered() {
    let time = at(1, 2, 3);
    let mut rt = test_runtime(config(true, false, false), 80, 25, time).unwrap();
    rt.compose_frame(&time);

    // 32 columns wide, 3 rows high, centred on (40, 12)
    let rows: Vec<String> = (0..25).map(|y| rt.canvas().row_text(y)).collect();
    assert!(rows[10].is_empty());
    assert!(!rows[11].is_empty());
    assert!(!rows[13].is_empty());
    assert!(rows[14].is_empty());
    assert!(rows[11].starts_with(&" ".repeat(24)));
}

#[test]
fn next_digital_frame_replaces_previous_digits() {
    let mut rt = test_runtime(config(true, false, false), 32, 3, at(0, 0, 0)).unwrap();
    rt.compose_frame(&at(8, 8, 8));
    let eights = framed_rows(rt.canvas());
    rt.compose_frame(&at(1, 1, 1));
    let ones = framed_rows(rt.canvas());

    assert_ne!(eights, ones);
    assert!(!ones.contains('├'));
}
