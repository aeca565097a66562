/// Strong emphasis, `**text**`.
pub struct Bold;

impl Bold {
    pub const DELIM: &'static [u8; 2] = b"**";

    pub fn wrap(text: &str) -> String {
        format!("**{text}**")
    }
}

/// Emphasis, `*text*`.
pub struct Italic;

impl Italic {
    pub const DELIM: u8 = b'*';

    pub fn wrap(text: &str) -> String {
        format!("*{text}*")
    }
}
