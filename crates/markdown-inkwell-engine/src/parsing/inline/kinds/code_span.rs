/// Code span inline type with owned delimiter constant.
///
/// Code spans are verbatim: no other inline parsing occurs inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    pub fn wrap(code: &str) -> String {
        let tick = Self::TICK as char;
        format!("{tick}{code}{tick}")
    }
}
