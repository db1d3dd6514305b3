pub mod matcher;
pub mod progress;
pub mod render;
