pub mod locator;
pub mod operator;
pub mod registrar;
pub mod reviewer;
pub mod trust_service;
