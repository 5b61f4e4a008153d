// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use vimhelp_engine::TagIndex;

const SEPARATOR: &str =
    "==============================================================================";

/// Body lines of a user manual page with `sections` numbered sections.
#[allow(dead_code)]
pub fn generate_manual_lines(sections: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for section in 1..=sections {
        lines.push(SEPARATOR.to_string());
        lines.push(format!("*02.{section}*\tSection number {section}"));
        lines.push(String::new());
        lines.push("To start Vim, enter this command: >".to_string());
        lines.push(String::new());
        lines.push("\tgvim file.txt".to_string());
        lines.push(String::new());
        lines.push("See |notation| and set 'path' first.  Press CTRL-W k or <Esc> to".to_string());
        lines.push("go back, then use |:saveas| to write a copy of the file.".to_string());
        lines.push(String::new());
        lines.push("1. Use |usr_01.txt| to read about the manuals.".to_string());
        lines.push("2. Type `:help` and press <Enter>.".to_string());
        lines.push(String::new());
        lines.push("MORE ABOUT THIS SECTION\t\t\t\t*more-about*".to_string());
        lines.push(String::new());
        lines.push("\tCTRL-W k\tmove to the window above".to_string());
        lines.push("\tCTRL-W j\tmove to the window below".to_string());
        lines.push(String::new());
    }

    lines
}

#[allow(dead_code)]
pub fn sample_tags() -> TagIndex {
    [
        ("notation", "intro"),
        ("'path'", "options"),
        (":saveas", "editing"),
        ("usr_01.txt", "usr_01"),
    ]
    .into_iter()
    .collect()
}
