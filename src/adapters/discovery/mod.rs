pub mod meta_discovery;
