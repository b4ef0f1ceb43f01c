mod color;
mod style;

pub use color::{Color, ColorOp, Rgb};
pub use style::Style;
