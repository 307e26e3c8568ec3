//! Analysis and view defaults

use crate::analysis::PairAlignment;
use crate::domain::TimeFrame;

pub struct AnalysisConfig {
    /// Window selected at startup
    pub default_time_frame: TimeFrame,
    /// Symbol focused at startup when it exists in the feed
    pub default_symbol: &'static str,
    /// Start in the all-symbols chart instead of a single symbol
    pub default_show_all: bool,
    /// How heatmap pairs are aligned unless overridden on the command line
    pub default_alignment: PairAlignment,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    default_time_frame: TimeFrame::FiveMinutes,
    default_symbol: "AAPL",
    default_show_all: true,
    default_alignment: PairAlignment::Truncate,
};
