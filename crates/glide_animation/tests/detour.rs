use glide_animation::{Animation, Clock, ManualClock, Segment};

const DT: f64 = 1e-4;

fn eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}

fn single(val0: f32, val1: f32, duration: f64, repeating: bool, t0: f64) -> Animation {
    Animation::new([Segment::new(val0, val1, duration).unwrap()], repeating, t0).unwrap()
}

/// The change just before the detour instant on the original matches the change just after
/// it on the detour
fn assert_detour_transition(original: &Animation, detour: &Animation, t: f64) {
    let change = original.evaluate(t).unwrap() - original.evaluate(t - DT).unwrap();
    let detour_change = detour.evaluate(t + DT).unwrap() - detour.evaluate(t).unwrap();
    assert!(
        eq(change, detour_change, 1e-4),
        "change {change} vs detour change {detour_change}"
    );
}

fn assert_detour_values(original: &Animation, detour: &Animation, end: f32, t: f64) {
    let val = original.evaluate(t).unwrap();
    let val_detour = detour.evaluate(t).unwrap();
    assert!(eq(val, val_detour, 1e-4), "{val} vs {val_detour}");

    let val1_detour = detour.evaluate(detour.end_time()).unwrap();
    assert!(eq(val1_detour, end, 1e-4), "{val1_detour} vs {end}");
}

#[test]
fn test_detour_identical_shape() {
    let anim = single(9.0, 8.0, 7.0, false, 6.0);
    let t = 6.0 + 7.0 / 3.0;
    let detour = anim.detour(t, 8.0, 7.0).expect("detour");

    assert_detour_values(&anim, &detour, 8.0, t);
    assert_detour_transition(&anim, &detour, t);

    for i in 0..=20 {
        let s = t + 7.0 * i as f64 / 20.0;
        assert!(eq(anim.evaluate(s).unwrap(), detour.evaluate(s).unwrap(), 1e-4));
    }
}

#[test]
fn test_detour_to_new_target() {
    let anim = single(5.0, 6.0, 7.0, false, 8.0);
    let t = 8.0 + 7.0 / 3.0;
    let detour = anim.detour(t, 9.0, 3.5).expect("detour");

    assert_detour_values(&anim, &detour, 9.0, t);
    assert_detour_transition(&anim, &detour, t);
}

#[test]
fn test_detour_mid_second_segment() {
    let anim = Animation::builder()
        .segment(0.0, 4.0, 2.0)
        .segment(4.0, 1.0, 3.0)
        .once()
        .start_at(1.0)
        .build(&ManualClock::default())
        .unwrap();
    let t = 1.0 + 2.0 + 1.0;
    let val = anim.evaluate(t).unwrap();

    // Heading down, so a magnitude above the current value flips sign
    let detour = anim.detour(t, 6.0, 3.0).expect("detour");
    assert_detour_values(&anim, &detour, -6.0, t);
    assert!(detour.evaluate(t + 1.0).unwrap() < val);
}

#[test]
fn test_detour_too_early() {
    let anim = single(123.0, 456.0, 789.0, false, 10.0);
    assert!(anim.detour(9.0, 2.0, 3.0).is_none());
    assert!(anim.detour_now(&ManualClock::new(0.0), 2.0, 3.0).is_none());
}

#[test]
fn test_detour_too_slow() {
    let anim = single(123.0, 456.0, 789.0, true, 10.0);
    let t = 10.0 + 789.0 / 2.0;
    let end = 123.0 + (456.0 - 123.0) / 2.0;
    let detour = anim.detour(t, end, 789.0).expect("detour");

    assert_detour_values(&anim, &detour, end, t);
}

#[test]
fn test_detour_just_before_end_continues_original() {
    let anim = single(9.0, 8.0, 7.0, false, 0.0);
    let t = 7.0 - 1e-3;
    let detour = anim.detour(t, 8.0, 7.0).expect("detour");

    assert_detour_values(&anim, &detour, 8.0, t);
    for i in 0..=20 {
        let s = t + 7.0 * i as f64 / 20.0;
        assert!(eq(anim.evaluate(s).unwrap(), detour.evaluate(s).unwrap(), 1e-3));
    }
}

#[test]
fn test_detour_of_detour() {
    let anim = single(0.0, 10.0, 4.0, true, 0.0);
    let first = anim.detour(1.0, 20.0, 4.0).expect("first detour");
    let second = first.detour(2.0, 5.0, 2.0).expect("second detour");

    assert!(eq(
        first.evaluate(2.0).unwrap(),
        second.evaluate(2.0).unwrap(),
        1e-4
    ));
    assert_eq!(second.evaluate(second.end_time() + 1.0), Some(5.0));
    assert!(second.finished(second.end_time() + 1.0));
}

#[test]
fn test_finished_boundary() {
    let anim = single(0.0, 1.0, 2.0, false, 3.0);
    for i in 0..=50 {
        assert!(!anim.finished(5.0 * i as f64 / 50.0));
    }
    assert!(!anim.finished(5.0));
    assert!(anim.finished(5.0 + 1e-9));
    assert!(anim.finished(1e6));
}

#[test]
fn test_terminal_hold() {
    let anim = Animation::builder()
        .segment(-5.0, 5.0, 12.3)
        .segment(5.0, 25.0, 45.6)
        .once()
        .start_at(7.8)
        .build(&ManualClock::default())
        .unwrap();

    for dt in [0.0, 1e-6, 0.5, 10.0, 1e4] {
        assert_eq!(anim.evaluate(anim.end_time() + dt), Some(25.0));
    }
}

#[test]
fn test_concrete_midpoint_scenario() {
    let anim = single(0.0, 9.0, 10.0, false, 0.0);
    assert!(eq(anim.evaluate(5.0).unwrap(), 4.5, 1e-5));
    assert_eq!(anim.evaluate(-1.0), None);
    assert_eq!(anim.evaluate(11.0), Some(9.0));

    let segment = anim.segments()[0];
    assert_eq!(segment.value(-1.0), 0.0);
    assert_eq!(segment.value(11.0), 9.0);
}

#[test]
fn test_ease_in_ease_out_shape() {
    let anim = single(0.0, 9.0, 10.0, false, 0.0);
    let n = 20;
    let mut vals = Vec::new();
    for i in 0..=n {
        anim.evaluate_with(10.0 * i as f64 / n as f64, |v| vals.push(v));
    }
    assert_eq!(vals.len(), n + 1);

    let intervals: Vec<f32> = vals.windows(2).map(|w| w[1] - w[0]).collect();
    let (first, second) = intervals.split_at(intervals.len() / 2);
    for w in first.windows(2) {
        assert!(w[1] > w[0], "ease-in not accelerating: {first:?}");
    }
    for w in second.windows(2) {
        assert!(w[1] < w[0], "ease-out not decelerating: {second:?}");
    }
}

#[test]
fn test_monotonic_and_bounded() {
    let anim = Animation::builder()
        .segment(2.0, -3.0, 1.7)
        .segment(-3.0, 8.0, 0.9)
        .once()
        .start_at(0.0)
        .build(&ManualClock::default())
        .unwrap();

    let mut prev = anim.evaluate(0.0).unwrap();
    for i in 1..170 {
        let v = anim.evaluate(1.7 * i as f64 / 170.0).unwrap();
        assert!(v <= prev);
        assert!((-3.0..=2.0).contains(&v));
        prev = v;
    }
    let mut prev = anim.evaluate(1.7).unwrap();
    for i in 1..=90 {
        let v = anim.evaluate(1.7 + 0.9 * i as f64 / 90.0).unwrap();
        assert!(v >= prev);
        assert!((-3.0..=8.0).contains(&v));
        prev = v;
    }
}

#[test]
fn test_repetition_is_periodic() {
    let anim = Animation::builder()
        .segment(100.0, 200.0, 10.9)
        .segment(200.0, 100.0, 8.7)
        .start_at(6.5)
        .build(&ManualClock::default())
        .unwrap();
    let period = anim.duration();

    for t in [7.0, 12.25, 20.0, 25.5] {
        let base = anim.evaluate(t).unwrap();
        for k in -3..=3 {
            let v = anim.evaluate(t + k as f64 * period).unwrap();
            assert!(eq(base, v, 1e-3), "t={t} k={k}: {base} vs {v}");
        }
    }
}

#[test]
fn test_one_shot_before_start_skips_handler() {
    let anim = single(0.0, 1.0, 1.0, false, 10.0);
    let mut calls = 0;
    for t in [-100.0, 0.0, 9.999] {
        anim.evaluate_with(t, |_| calls += 1);
    }
    assert_eq!(calls, 0);
    assert!(anim.evaluate_with(10.0, |_| calls += 1));
    assert_eq!(calls, 1);
}

#[test]
fn test_driving_with_manual_clock() {
    let clock = ManualClock::new(0.0);
    let mut anim = Animation::builder()
        .segment(0.0, 100.0, 2.0)
        .once()
        .build(&clock)
        .unwrap();

    let mut samples = Vec::new();
    let mut redirected = false;
    while !anim.finished_now(&clock) {
        if let Some(v) = anim.evaluate_now(&clock) {
            samples.push(v);
        }
        if !redirected && clock.now() >= 1.0 {
            if let Some(detour) = anim.detour_now(&clock, 50.0, 1.0) {
                anim = detour;
            }
            redirected = true;
        }
        clock.advance(0.1);
    }

    assert_eq!(anim.evaluate_now(&clock), Some(50.0));
    let jumps = samples.windows(2).map(|w| (w[1] - w[0]).abs());
    assert!(jumps.fold(0.0f32, f32::max) < 20.0);
}
