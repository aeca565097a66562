/// Inline link, `[text](url)`. The url is captured verbatim and never validated.
pub struct Link;

impl Link {
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';

    pub fn wrap(text: &str, url: &str) -> String {
        format!("[{text}]({url})")
    }
}
