//! Core module - configuration and request handling

pub mod config;
pub mod request;

pub use config::{Config, EngineOptions, PaymentTerms};
pub use request::{QuoteRequest, QuoteResponse, handle_request};
