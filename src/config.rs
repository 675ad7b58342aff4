use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

const CDN_BASE: &str = "https://pub-82e4016d6e17421ebc1eaa174644bee3.r2.dev";

/// Full URL of a background video hosted on the media CDN.
pub fn cdn_video(file: &str) -> String {
    format!("{}/{}", CDN_BASE, file)
}

/// Address used by the booking / contact sections.
pub const CONTACT_EMAIL: &str = "wake@makeawakemarketing.com";

/// Address linked from the footer social row.
pub const HELLO_EMAIL: &str = "hello@makeawake.com";

pub fn mailto(address: &str) -> String {
    format!("mailto:{}", address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdn_video_joins_base_and_file() {
        assert_eq!(
            cdn_video("000yuh.mp4"),
            "https://pub-82e4016d6e17421ebc1eaa174644bee3.r2.dev/000yuh.mp4"
        );
    }

    #[test]
    fn mailto_prefixes_scheme() {
        assert_eq!(mailto(CONTACT_EMAIL), "mailto:wake@makeawakemarketing.com");
    }
}
