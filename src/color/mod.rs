mod compositor;

pub use compositor::{LinearRgb, composite};
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// All channels dark
pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };
