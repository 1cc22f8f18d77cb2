use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use timeplot::{Color32, LineOptions, PlotSession, Sample, TimePlotConfig, TimePlotError, UpdateStyle};

fn at(secs: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
        + TimeDelta::seconds(secs)
}

fn tick(secs: i64) -> Sample {
    Sample::new(at(secs), vec![secs as f64])
}

#[test]
fn continuous_scenario() {
    let cfg = TimePlotConfig::default()
        .with_period(300.0)
        .with_update_style(UpdateStyle::Continuous);
    let mut session = PlotSession::new(tick(0), &cfg).unwrap();
    let mut advancing = false;
    for s in 1..=320 {
        let update = session.on_tick(tick(s)).unwrap();
        let cutoff = at(s) - TimeDelta::seconds(300);
        let older = session.window().iter().filter(|x| x.t < cutoff).count();
        assert!(older <= 1);
        if s > 300 {
            // one boundary sample is kept once there is history beyond the window
            assert_eq!(older, 1);
            assert_eq!(session.window().len(), 302);
        }
        advancing |= update.view_advanced;
        let view = session.view_range();
        if advancing {
            assert_eq!(view.xmax, at(s) + TimeDelta::seconds(15));
            assert_eq!(view.xmin, at(s) - TimeDelta::seconds(300));
        }
    }
    assert!(advancing);
}

#[test]
fn continuous_starts_advancing_once_padding_is_reached() {
    let cfg = TimePlotConfig::default()
        .with_period(300.0)
        .with_update_style(UpdateStyle::Continuous);
    let mut session = PlotSession::new(tick(0), &cfg).unwrap();
    for s in 1..=300 {
        assert!(!session.on_tick(tick(s)).unwrap().view_advanced, "t={s}");
    }
    assert!(session.on_tick(tick(301)).unwrap().view_advanced);
}

#[test]
fn jump_scenario() {
    let cfg = TimePlotConfig::default().with_period(60.0);
    let mut session = PlotSession::new(tick(0), &cfg).unwrap();
    assert_eq!(session.view_range().xmax, at(75));

    let mut jumps = Vec::new();
    for s in 1..130 {
        if session.on_tick(tick(s)).unwrap().view_advanced {
            jumps.push((s, session.view_range()));
        }
    }
    assert_eq!(jumps.len(), 2);
    assert_eq!(jumps[0].0, 61);
    assert_eq!(jumps[0].1.xmin, at(60));
    assert_eq!(jumps[0].1.xmax, at(135));
    assert_eq!(jumps[1].0, 121);
    assert_eq!(jumps[1].1.xmin, at(120));
    assert_eq!(jumps[1].1.xmax, at(195));
}

#[test]
fn first_sample_is_buffered() {
    let session = PlotSession::new(tick(0), &TimePlotConfig::default()).unwrap();
    assert_eq!(session.window().len(), 1);
    assert_eq!(session.latest().unwrap().t, at(0));
    assert_eq!(session.schema().num_lines(), 1);
}

#[test]
fn mismatched_config_fails_before_any_tick() {
    let cfg = TimePlotConfig::default()
        .with_lines(LineOptions::default().with_colors([Color32::RED, Color32::BLUE]));
    let first = Sample::new(at(0), vec![3.1, 4.1, 5.9]);
    assert!(matches!(
        PlotSession::new(first, &cfg),
        Err(TimePlotError::LineCountMismatch { expected: 3, found: 2, .. })
    ));
}

#[test]
fn invalid_period_is_rejected() {
    let cfg = TimePlotConfig::default().with_period(0.0);
    assert!(matches!(
        PlotSession::new(tick(0), &cfg),
        Err(TimePlotError::InvalidPeriod(_))
    ));
}

#[test]
fn huge_period_is_rejected_not_panicking() {
    for secs in [1e13, f64::MAX] {
        let cfg = TimePlotConfig::default().with_period(secs);
        assert!(matches!(
            PlotSession::new(tick(0), &cfg),
            Err(TimePlotError::InvalidPeriod(_))
        ));
    }
    let mut cfg = TimePlotConfig::default();
    cfg.padding = 1e13;
    assert!(matches!(
        PlotSession::new(tick(0), &cfg),
        Err(TimePlotError::InvalidPeriod(_))
    ));
}

#[test]
fn tick_with_other_arity_fails() {
    let mut session = PlotSession::new(tick(0), &TimePlotConfig::default()).unwrap();
    let err = session
        .on_tick(Sample::new(at(1), vec![1.0, 2.0]))
        .unwrap_err();
    assert!(matches!(err, TimePlotError::ArityChanged { expected: 1, found: 2 }));
    assert_eq!(session.window().len(), 1);
}

#[test]
fn y_bounds_follow_buffered_values() {
    let mut session = PlotSession::new(tick(0), &TimePlotConfig::default()).unwrap();
    session.on_tick(tick(10)).unwrap();
    // span 10, default margin 0.8
    assert_eq!(session.y_bounds(), Some((-8.0, 18.0)));
}
