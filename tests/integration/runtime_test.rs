//! Integration tests for startup sizing and the frame loop

use std::sync::atomic::Ordering;

use termclock::{CancelToken, ClockError, ClockRuntime, FixedClock};

use crate::helpers::{at, config, test_runtime, RecordingBackend};

#[test]
fn too_small_terminal_rejects_startup_without_drawing() {
    let (backend, writes) = RecordingBackend::new(83, 41);
    let result = ClockRuntime::new(
        config(false, false, false),
        backend,
        FixedClock(at(0, 0, 0)),
    );
    let err = result.err().expect("startup should fail");

    assert!(matches!(err, ClockError::TerminalTooSmall { .. }));
    assert!(err.to_string().contains("84 columns and 41 lines"));
    assert_eq!(writes.load(Ordering::SeqCst), 0, "nothing may be drawn");
}

#[test]
fn fitting_terminal_is_drawn_on_first_tick() {
    let (backend, writes) = RecordingBackend::new(84, 41);
    let mut rt =
        ClockRuntime::new(config(false, false, false), backend, FixedClock(at(0, 0, 0))).unwrap();
    assert_eq!(writes.load(Ordering::SeqCst), 0);

    rt.tick().unwrap();
    assert!(writes.load(Ordering::SeqCst) > 0);
}

#[test]
fn too_short_terminal_rejects_digital_clock() {
    let result = test_runtime(config(true, false, false), 80, 2, at(0, 0, 0));
    assert!(matches!(
        result.err(),
        Some(ClockError::TerminalTooSmall {
            required_cols: 32,
            required_rows: 3,
            ..
        })
    ));
}

#[test]
fn tick_shows_frame_on_backend() {
    let mut rt = test_runtime(config(true, true, false), 44, 3, at(23, 59, 59)).unwrap();
    let shown_time = rt.tick().unwrap();
    assert_eq!(shown_time, at(23, 59, 59));
    assert_eq!(rt.backend().buffer(), rt.canvas().buffer());
}

#[test]
fn cancelled_run_exits_cleanly() {
    let mut rt = test_runtime(config(false, false, true), 84, 41, at(0, 0, 0)).unwrap();
    let cancel = CancelToken::new();
    cancel.cancel();
    rt.run(&cancel).unwrap();
}
