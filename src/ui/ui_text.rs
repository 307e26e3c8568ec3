/// Every user-facing string in one place.
pub struct UiText {
    pub app_title: &'static str,
    pub watchlist_heading: &'static str,
    pub search_hint: &'static str,
    pub no_matches: &'static str,
    pub controls_heading: &'static str,
    pub time_frame_label: &'static str,
    pub show_all_label: &'static str,
    pub show_single_label: &'static str,
    pub alignment_label: &'static str,
    pub alignment_truncate: &'static str,
    pub alignment_join: &'static str,
    pub chart_heading_all: &'static str,
    pub chart_heading_single: &'static str,
    pub price_series: &'static str,
    pub change_series: &'static str,
    pub heatmap_heading: &'static str,
    pub heatmap_legend: &'static str,
    pub no_data_for_window: &'static str,
    pub waiting_for_data: &'static str,
    pub building_model: &'static str,
    pub status_source: &'static str,
    pub status_age: &'static str,
    pub status_polls: &'static str,
    pub help_title: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Quote Pulse",
    watchlist_heading: "Watchlist",
    search_hint: "Search symbol or company",
    no_matches: "No symbols match the search",
    controls_heading: "View",
    time_frame_label: "Time frame",
    show_all_label: "All symbols",
    show_single_label: "Selected symbol",
    alignment_label: "Heatmap pairing",
    alignment_truncate: "Truncate to shorter",
    alignment_join: "Join on timestamps",
    chart_heading_all: "All symbols",
    chart_heading_single: "Price & change",
    price_series: "Price",
    change_series: "Change",
    heatmap_heading: "Correlation heatmap",
    heatmap_legend: "Green: moves together. Red: moves opposite. Stronger colour, stronger link.",
    no_data_for_window: "No data available for the selected time frame.",
    waiting_for_data: "Waiting for the first quotes...",
    building_model: "Updating...",
    status_source: "Source",
    status_age: "Age",
    status_polls: "Polls",
    help_title: "⌨️ Keyboard Shortcuts",
};
