// src/config/tickers.rs
use eframe::egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickerTheme {
    pub primary: Color32,
    pub accent: Color32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickerConfig {
    pub symbol: &'static str,
    pub name: &'static str,
    pub crypto: &'static str,
    pub crypto_name: &'static str,
    pub description: &'static str,
    pub theme: TickerTheme,
}

// Tickers the analysis service knows how to process
pub static TICKERS: &[TickerConfig] = &[
    TickerConfig {
        symbol: "SBET",
        name: "Sharplink Gaming",
        crypto: "ETH",
        crypto_name: "Ethereum",
        description: "Gaming & Entertainment",
        theme: TickerTheme {
            primary: Color32::from_rgb(34, 197, 94),
            accent: Color32::from_rgb(37, 99, 235),
        },
    },
    TickerConfig {
        symbol: "MSTR",
        name: "MicroStrategy",
        crypto: "BTC",
        crypto_name: "Bitcoin",
        description: "Business Intelligence",
        theme: TickerTheme {
            primary: Color32::from_rgb(249, 115, 22),
            accent: Color32::from_rgb(202, 138, 4),
        },
    },
    TickerConfig {
        symbol: "UPXI",
        name: "Upexi Inc",
        crypto: "SOL",
        crypto_name: "Solana",
        description: "Consumer Products",
        theme: TickerTheme {
            primary: Color32::from_rgb(168, 85, 247),
            accent: Color32::from_rgb(79, 70, 229),
        },
    },
];

pub fn find_ticker(symbol: &str) -> Option<&'static TickerConfig> {
    TICKERS.iter().find(|t| t.symbol == symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_unique() {
        for (i, ticker) in TICKERS.iter().enumerate() {
            assert!(
                TICKERS[i + 1..].iter().all(|other| other.symbol != ticker.symbol),
                "duplicate ticker {}",
                ticker.symbol
            );
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(find_ticker("SBET").map(|t| t.crypto), Some("ETH"));
        assert!(find_ticker("sbet").is_none());
        assert!(find_ticker("").is_none());
    }
}
