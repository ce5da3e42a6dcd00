pub mod detector;
pub mod types;

pub use detector::AspectDetector;
pub use types::{Aspect, AspectKind, OrbPolicy, ALL_ASPECT_KINDS, DEFAULT_ORB};
