/// Splits text into lines on any of `\r\n`, `\r` or `\n`.
///
/// Line terminators are not included. Mixed terminators in one input are all
/// recognized. Like a plain split, a trailing terminator yields a final empty
/// line and the empty string yields a single empty line, so joining the result
/// with `\n` reproduces the input up to line-ending normalization.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                out.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            b'\n' => {
                out.push(&text[start..i]);
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }

    out.push(&text[start..]);
    out
}
