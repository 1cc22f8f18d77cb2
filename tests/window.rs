use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use timeplot::{Sample, SeriesWindow};

fn t0() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn at(secs: i64) -> NaiveDateTime {
    t0() + TimeDelta::seconds(secs)
}

fn tick(secs: i64, y: f64) -> Sample {
    Sample::new(at(secs), vec![y])
}

#[test]
fn evict_is_noop_with_fewer_than_two_samples() {
    let mut w = SeriesWindow::new();
    assert_eq!(w.evict(at(1_000), TimeDelta::seconds(10)), 0);
    w.append(tick(0, 1.0));
    assert_eq!(w.evict(at(1_000), TimeDelta::seconds(10)), 0);
    assert_eq!(w.len(), 1);
}

#[test]
fn evict_keeps_one_boundary_sample() {
    let mut w = SeriesWindow::new();
    for s in 0..=20 {
        w.append(tick(s, s as f64));
    }
    let removed = w.evict(at(20), TimeDelta::seconds(10));
    // cutoff is t=10: t=9 stays as the boundary sample
    assert_eq!(removed, 9);
    assert_eq!(w.oldest().unwrap().t, at(9));
    assert_eq!(w.len(), 12);
    assert_eq!(w.latest().unwrap().t, at(20));
}

#[test]
fn boundary_sample_lies_outside_window_with_sparse_ticks() {
    let mut w = SeriesWindow::new();
    for s in [0, 5, 12, 18, 25] {
        w.append(tick(s, 0.0));
    }
    w.evict(at(25), TimeDelta::seconds(10));
    let ts: Vec<_> = w.iter().map(|s| s.t).collect();
    // cutoff 15: 12 is the boundary, 18 and 25 are inside
    assert_eq!(ts, vec![at(12), at(18), at(25)]);
}

#[test]
fn at_most_one_sample_older_than_cutoff_for_any_prefix() {
    let period = TimeDelta::seconds(7);
    let mut w = SeriesWindow::new();
    let mut now = 0;
    for step in [1, 3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9] {
        now += step;
        w.append(tick(now, 0.0));
        w.evict(at(now), period);
        let cutoff = at(now) - period;
        let older = w.iter().filter(|s| s.t < cutoff).count();
        assert!(older <= 1, "{older} samples older than cutoff at t={now}");
        // only the head may be older than the cutoff
        assert!(w.iter().skip(1).all(|s| s.t >= cutoff));
        // the newest sample is never evicted
        assert_eq!(w.latest().unwrap().t, at(now));
    }
}

#[test]
fn line_points_use_epoch_seconds() {
    let mut w = SeriesWindow::new();
    w.append(Sample::new(at(0), vec![1.0, 2.0]));
    w.append(Sample::new(at(1), vec![3.0, 4.0]));
    let x0 = at(0).and_utc().timestamp() as f64;
    assert_eq!(w.line_points(1), vec![[x0, 2.0], [x0 + 1.0, 4.0]]);
    assert!(w.line_points(2).is_empty());
}

#[test]
fn value_bounds_skip_nan_and_apply_margin() {
    let mut w = SeriesWindow::new();
    assert_eq!(w.value_bounds(0.8), None);
    w.append(Sample::new(at(0), vec![1.0, f64::NAN]));
    w.append(Sample::new(at(1), vec![3.0, 2.0]));
    assert_eq!(w.value_bounds(0.5), Some((0.0, 4.0)));
}

#[test]
fn value_bounds_flat_series() {
    let mut w = SeriesWindow::new();
    w.append(tick(0, 2.0));
    w.append(tick(1, 2.0));
    assert_eq!(w.value_bounds(0.5), Some((1.5, 2.5)));
}

#[test]
fn evict_near_calendar_start_keeps_everything() {
    let start = NaiveDateTime::MIN;
    let mut w = SeriesWindow::new();
    for s in 0..3 {
        w.append(Sample::new(start + TimeDelta::seconds(s), vec![1.0]));
    }
    assert_eq!(w.evict(start + TimeDelta::seconds(2), TimeDelta::seconds(300)), 0);
    assert_eq!(w.len(), 3);
}
