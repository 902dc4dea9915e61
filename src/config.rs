/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Seed for the synthetic dataset, fixed so every page load shows the same numbers
    pub const SEED: u64 = 42;

    /// First year covered by the live-births series
    pub const FIRST_YEAR: i32 = 2010;

    /// Number of consecutive years in each live-births series (2010-2023)
    pub const YEAR_COUNT: usize = 14;

    /// Lower bound for the generated continuation of the city series
    pub const BIRTHS_FLOOR: i64 = 25_000;

    /// Delay before re-rendering charts after the window stops resizing
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// Height of every chart container in pixels
    pub const CHART_HEIGHT_PX: u32 = 400;
}
