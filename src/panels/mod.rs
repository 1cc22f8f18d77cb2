pub mod timeplot_ui;

pub use timeplot_ui::TimePlotPanel;
