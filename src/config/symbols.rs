//! Known tickers: display names and the starting prices for synthetic data.

pub struct SymbolInfo {
    pub symbol: &'static str,
    pub company: &'static str,
    /// Seed price for the random-walk fallback feed
    pub base_price: f64,
}

pub const SYMBOLS: &[SymbolInfo] = &[
    SymbolInfo { symbol: "AMD", company: "Advanced Micro Devices, Inc.", base_price: 162.34 },
    SymbolInfo { symbol: "GOOGL", company: "Alphabet Inc. Class A", base_price: 2789.12 },
    SymbolInfo { symbol: "GOOG", company: "Alphabet Inc. Class C", base_price: 2795.67 },
    SymbolInfo { symbol: "AMZN", company: "Amazon.com, Inc.", base_price: 3450.23 },
    SymbolInfo { symbol: "AMGN", company: "Amgen Inc.", base_price: 245.89 },
    SymbolInfo { symbol: "AAPL", company: "Apple Inc.", base_price: 150.25 },
    SymbolInfo { symbol: "BRKB", company: "Berkshire Hathaway Inc.", base_price: 420.50 },
    SymbolInfo { symbol: "BKNG", company: "Booking Holdings Inc.", base_price: 2300.75 },
    SymbolInfo { symbol: "AVGO", company: "Broadcom Inc.", base_price: 900.10 },
    SymbolInfo { symbol: "CSX", company: "CSX Corporation", base_price: 32.45 },
    SymbolInfo { symbol: "LLY", company: "Eli Lilly and Company", base_price: 410.00 },
    SymbolInfo { symbol: "MAR", company: "Marriott International, Inc.", base_price: 180.20 },
    SymbolInfo { symbol: "MRVL", company: "Marvell Technology, Inc.", base_price: 65.30 },
    SymbolInfo { symbol: "META", company: "Meta Platforms, Inc.", base_price: 320.45 },
    SymbolInfo { symbol: "MSFT", company: "Microsoft Corporation", base_price: 285.50 },
    SymbolInfo { symbol: "NVDA", company: "Nvidia Corporation", base_price: 700.00 },
    SymbolInfo { symbol: "PYPL", company: "PayPal Holdings, Inc.", base_price: 75.60 },
    SymbolInfo { symbol: "2330TW", company: "TSMC", base_price: 120.00 },
    SymbolInfo { symbol: "TSLA", company: "Tesla, Inc.", base_price: 900.00 },
    SymbolInfo { symbol: "V", company: "Visa Inc.", base_price: 220.00 },
];

pub fn lookup(symbol: &str) -> Option<&'static SymbolInfo> {
    SYMBOLS.iter().find(|info| info.symbol == symbol)
}

/// Company name, or `None` for tickers we have no metadata for.
pub fn company_name(symbol: &str) -> Option<&'static str> {
    lookup(symbol).map(|info| info.company)
}
