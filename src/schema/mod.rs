pub mod style;
pub mod word;
