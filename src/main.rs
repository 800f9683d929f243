use compound_finder::cli::parse_cli;
use compound_finder::{find_longest_decomposition, logging, reporter, source, split_words};
use log::info;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(cli.verbose);

    let config = match cli.search_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid options: {e}");
            return ExitCode::FAILURE;
        }
    };

    let raw = match source::load(&cli.word_source()) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Fetch Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let words = split_words(&raw, cli.line_separator());
    info!("Loaded {} words", words.len());

    let found = find_longest_decomposition(&words, &config);
    if let Some(found) = &found {
        info!("{} = {}", found.word, found.parts.join(" + "));
    }

    let word = found.as_ref().map(|found| found.word.as_str());
    if let Err(e) = reporter::report(word, &mut io::stdout().lock()) {
        eprintln!("Failed to write result: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
