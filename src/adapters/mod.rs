pub mod discovery;
pub mod fetchers;
pub mod http;
pub mod parsers;
pub mod trust_stores;
