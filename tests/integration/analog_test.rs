//! Integration tests for the analog clock

use termclock::render::analog::{tick_marks, Hand, ANALOG_HEIGHT, ANALOG_WIDTH, FACE_RADIUS};
use termclock::render::Point;

use crate::helpers::{at, config, test_runtime};

#[test]
fn ten_past_ten_scenario_hand_angles() {
    let time = at(10, 9, 8);
    assert_eq!(Hand::Second.angle(&time), 318.0);
    assert_eq!(Hand::Minute.angle(&time), 324.0);

    let hour = Hand::Hour.angle(&time);
    assert!((hour - 1651.5).abs() < 1e-9);
    assert!((hour % 360.0 - 211.5).abs() < 1e-9);
}

#[test]
fn ten_past_ten_frame_draws_every_hand() {
    let time = at(10, 9, 8);
    let mut rt = test_runtime(config(false, false, false), 120, 45, time).unwrap();
    rt.compose_frame(&time);

    let text = rt.canvas().to_text();
    assert!(text.contains('s'), "second hand missing");
    assert!(text.contains('m'), "minute hand missing");
    assert!(text.contains('h'), "hour hand missing");
}

#[test]
fn face_survives_every_frame() {
    let mut rt = test_runtime(config(false, false, false), 84, 41, at(0, 0, 0)).unwrap();
    let center = rt.anchor();
    let ticks = tick_marks(center, FACE_RADIUS);

    for second in [0, 13, 37, 59] {
        rt.compose_frame(&at(6, 30, second));
        let nine = ticks.iter().find(|t| t.hour == Some(9)).unwrap();
        assert_eq!(rt.canvas().cell(nine.pos).unwrap().symbol(), "9");
    }
}

#[test]
fn hour_hand_angle_is_continuous_over_a_day() {
    let mut previous = Hand::Hour.angle(&at(0, 0, 0));
    for hour in 0..24 {
        for minute in 0..60 {
            let angle = Hand::Hour.angle(&at(hour, minute, 0));
            assert!(angle - previous <= 0.5 + 1e-9, "jump at {hour}:{minute}");
            previous = angle;
        }
    }
}

#[test]
fn face_fits_inside_its_footprint() {
    let center = Point::new(i32::from(ANALOG_WIDTH / 2), i32::from(ANALOG_HEIGHT / 2));
    for tick in tick_marks(center, FACE_RADIUS) {
        let label_len = tick.hour.map_or(1, |h| h.to_string().len() as i32);
        assert!(tick.pos.x >= 0 && tick.pos.x + label_len <= i32::from(ANALOG_WIDTH));
        assert!(tick.pos.y >= 0 && tick.pos.y < i32::from(ANALOG_HEIGHT));
    }
}
