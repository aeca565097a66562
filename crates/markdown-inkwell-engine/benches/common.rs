// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section with **bold**\n\nParagraph with *emphasis*, `code` and a [link](https://example.com).\n\n- Bullet point\n\t- Nested item\n    * Space nested\n1. Numbered\n![diagram](img/diagram.png)|320px\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_long_line(spans: usize) -> String {
    let mut line = String::new();
    for i in 0..spans {
        line.push_str(&format!("word{i} **bold{i}** *it{i}* `c{i}` [l{i}](u{i}) "));
    }
    line
}
