pub mod detail;
pub mod theme;
pub mod widgets;
