mod twist;

pub use twist::{deform, rotation_around_x};
