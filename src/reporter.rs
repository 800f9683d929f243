use std::io::{self, Write};

pub const NOT_FOUND_MESSAGE: &str = "Unfortunately no anagramms were found in provided list";

#[must_use]
pub fn render(result: Option<&str>) -> String {
    match result {
        Some(word) => format!("Longest anagram is \"{word}\""),
        None => NOT_FOUND_MESSAGE.to_string(),
    }
}

pub fn report<W: Write>(result: Option<&str>, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", render(result))
}
