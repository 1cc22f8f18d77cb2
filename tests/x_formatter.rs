use chrono::NaiveDate;
use egui_plot::GridInput;
use timeplot::data::x_formatter::*;
use timeplot::source::to_plot_x;

fn x(h: u32, m: u32, s: u32) -> f64 {
    to_plot_x(
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap(),
    )
}

#[test]
fn only_whole_minutes_are_labeled() {
    let f = TimeAxisFormatter::default();
    assert_eq!(f.format_tick(x(13, 45, 0)), "13:45");
    assert_eq!(f.format_tick(x(13, 45, 15)), "");
}

#[test]
fn date_uses_date_format() {
    let f = TimeAxisFormatter::default();
    assert_eq!(f.format_date(x(23, 59, 59)), "15.01.2024");
    let us = TimeAxisFormatter::new("%H:%M", "%m/%d/%Y");
    assert_eq!(us.format_date(x(0, 0, 0)), "01/15/2024");
}

#[test]
fn grid_has_minor_marks_every_quarter_minute() {
    let lo = x(10, 0, 5);
    let hi = x(10, 2, 0);
    let marks = minute_grid(GridInput {
        bounds: (lo, hi),
        base_step_size: 1.0,
    });
    let values: Vec<f64> = marks.iter().map(|m| m.value).collect();
    let expected: Vec<f64> = (1..=8).map(|i| x(10, 0, 0) + 15.0 * i as f64).collect();
    assert_eq!(values, expected);
    let majors = marks.iter().filter(|m| m.step_size == MAJOR_STEP_SECS).count();
    assert_eq!(majors, 2);
}

#[test]
fn grid_empty_for_degenerate_bounds() {
    assert!(minute_grid(GridInput {
        bounds: (5.0, 5.0),
        base_step_size: 1.0,
    })
    .is_empty());
}

#[test]
fn value_labels_are_fixed_point() {
    assert_eq!(format_value(1.5, 5), "1.50000");
    assert_eq!(format_value(-0.123456789, 3), "-0.123");
}
