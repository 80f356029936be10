pub mod clip;
pub mod cyrus_beck;
pub mod decompose;

pub use clip::{classify_and_clip, ClipRegion};
pub use cyrus_beck::{cyrus_beck, ClipMode};
pub use decompose::{decompose, Decomposition};
