pub mod circle;
pub mod favicon;
pub mod launcher;
pub mod png;
