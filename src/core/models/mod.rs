pub mod app_identifier;
pub mod discovery;
pub mod key_location;
pub mod key_ring;
pub mod key_source;
pub mod trust_options;
pub mod trust_scope;
