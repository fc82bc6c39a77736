mod rainbow;

pub use rainbow::{RainbowPoint, augment, base_curve, rainbow_bands, rainbow_value, rainbow_value_at};
