// src/config/mod.rs
pub mod settings;
pub mod tickers;

// Re-export commonly used types
pub use settings::Settings;
pub use tickers::{find_ticker, TickerConfig, TICKERS};
