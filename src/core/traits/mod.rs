pub mod discovery;
pub mod key_fetcher;
pub mod key_parser;
pub mod trust_store;
