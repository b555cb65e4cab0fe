use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Hook transitions are logged at debug when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const MEMBERSHIP_URL: &str = "https://ingluglobal.in/inglu-membership/";
pub const SIGN_IN_URL: &str = "https://ingluglobal.in/my-account/";
pub const SITE_URL: &str = "https://ingluglobal.in";
pub const CONTACT_EMAIL: &str = "info@ingluglobal.in";

pub fn mailto(subject: &str) -> String {
    format!("mailto:{}?subject={}", CONTACT_EMAIL, subject.replace(' ', "%20"))
}

/// Scroll samples are coalesced to at most one per this many milliseconds.
pub const SCROLL_SAMPLE_INTERVAL_MS: u32 = 50;
/// Header turns opaque once the page has scrolled past this many pixels.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;
/// Height of the fixed header; anchor scrolling stops this far above a section.
pub const HEADER_OFFSET: f64 = 80.0;

pub const COUNTER_DURATION_MS: u32 = 2000;
/// Extra start delay per stat card so a row counts up in sequence.
pub const STAT_STAGGER_MS: u32 = 150;
/// Extra transition delay per card when a grid fades in.
pub const REVEAL_STAGGER_MS: u32 = 100;

pub const TABLET_MIN_WIDTH: f64 = 768.0;
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_encodes_spaces() {
        assert_eq!(
            mailto("Brand Partnership Inquiry"),
            "mailto:info@ingluglobal.in?subject=Brand%20Partnership%20Inquiry"
        );
    }
}
