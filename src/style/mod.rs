mod feature_style;
mod genus;
mod palette;

pub use feature_style::{style_for, FeatureStyle, PULSE_CLASS};
pub use genus::{color_of, darker_shade_of, genus_of};
pub use palette::{DEFAULT_COLOR, DEFAULT_SHADE};
