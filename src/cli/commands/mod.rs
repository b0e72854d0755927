pub mod list;
pub mod trust;
