pub const COLOR_BLACK: &str = "\u{001B}[090m";
pub const COLOR_RED: &str = "\u{001B}[091m";
pub const COLOR_GREEN: &str = "\u{001B}[092m";
pub const COLOR_PURPLE: &str = "\u{001B}[095m";
pub const NO_COLOR: &str = "\u{001B}[0m";

pub const DEFAULT_STATUS_URL: &str = "https://streamer.kuci.org/status-json.xsl";
pub const DEFAULT_SOURCE_INDEX: usize = 0;
pub const DEFAULT_WATCH_INTERVAL_MS: u64 = 10000;
