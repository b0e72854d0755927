pub mod armored_key_parser;
