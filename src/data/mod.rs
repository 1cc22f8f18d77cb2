pub mod axis;
pub mod lines;
pub mod session;
pub mod window;
pub mod x_formatter;
