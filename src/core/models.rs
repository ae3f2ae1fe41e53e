use serde::Serialize;

/// The class of security an identifier names.
///
/// The asset class decides which source site a retrieval goes to and how the
/// identifier is interpreted: stocks use their ticker, cryptocurrencies and
/// commodities use the full name the source puts in its URLs (e.g.
/// `bitcoin`, `gold`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AssetClass {
    /// An exchange-listed stock, looked up on MarketWatch by ticker.
    Stock,
    /// A cryptocurrency, looked up on CoinMarketCap by full name.
    Crypto,
    /// A commodity future, looked up on MarketWatch by name.
    Commodity,
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stock => write!(f, "stock"),
            Self::Crypto => write!(f, "crypto"),
            Self::Commodity => write!(f, "commodity"),
        }
    }
}
