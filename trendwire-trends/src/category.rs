//! News categories and their fixed search queries

use std::fmt;

/// A named grouping of related search queries used to scope a trend scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Markets,
    Tech,
    Crypto,
    Economy,
    Options,
}

impl Category {
    /// All categories, in full-report scan order
    pub const ALL: [Category; 5] = [
        Category::Markets,
        Category::Tech,
        Category::Crypto,
        Category::Economy,
        Category::Options,
    ];

    /// Stable lowercase name used in reports
    pub fn name(self) -> &'static str {
        match self {
            Category::Markets => "markets",
            Category::Tech => "tech",
            Category::Crypto => "crypto",
            Category::Economy => "economy",
            Category::Options => "options",
        }
    }

    /// The fixed search queries scanned for this category
    pub fn queries(self) -> &'static [&'static str] {
        match self {
            Category::Markets => &[
                "stock market",
                "S&P 500",
                "nasdaq",
                "federal reserve",
                "interest rates",
                "earnings",
            ],
            Category::Tech => &[
                "artificial intelligence",
                "AI stocks",
                "tech earnings",
                "semiconductor",
                "cloud computing",
            ],
            Category::Crypto => &["bitcoin", "ethereum", "crypto regulation", "blockchain"],
            Category::Economy => &[
                "inflation",
                "jobs report",
                "GDP",
                "recession",
                "consumer spending",
            ],
            Category::Options => &[
                "options flow",
                "unusual options",
                "put call ratio",
                "VIX",
                "implied volatility",
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
