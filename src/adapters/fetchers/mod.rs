pub mod remote_fetcher;
