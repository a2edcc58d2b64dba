pub mod media;

pub use media::{CoverImage, FuzzyDate, MediaRecord, MediaTitle};
