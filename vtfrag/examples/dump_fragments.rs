//! Print every fragment read from stdin, or from a built-in sample.
//!
//! `printf 'a\033[1mb' | cargo run --example dump_fragments -- --stdin`
use std::io::{self, IsTerminal};

use anyhow::Context;
use env_logger::Env;
use vtfrag::{Fragment, ParserFactory, ParserOptions};

const SAMPLE: &[u8] = b"Hello \x1b[1;33mvtfrag\x1b[0m!\r\n\
                        \x1b]8;id=docs;https://otty.sh\x1b\\click me\x1b[5;R";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let options = match std::env::var("VTFRAG_OPTIONS") {
        Ok(json) => ParserOptions::from_json(&json)
            .context("VTFRAG_OPTIONS is not valid parser options")?,
        Err(_) => ParserOptions::default(),
    };
    let factory = ParserFactory::new(options)?;

    let stdin = io::stdin();
    let use_stdin =
        std::env::args().any(|arg| arg == "--stdin") && !stdin.is_terminal();

    if use_stdin {
        dump(factory.stream_parser(stdin.lock()))
    } else {
        dump(factory.stream_parser(SAMPLE))
    }
}

fn dump(
    fragments: impl Iterator<Item = vtfrag::Result<Fragment>>,
) -> anyhow::Result<()> {
    for (seq, fragment) in fragments.enumerate() {
        match fragment {
            Ok(Fragment::Text(text)) => {
                println!(
                    "{:02}: text {:?} [{}..{})",
                    seq + 1,
                    text.text,
                    text.start,
                    text.end
                );
            },
            Ok(Fragment::Function(function)) => {
                let arguments: Vec<String> = function
                    .arguments
                    .iter()
                    .map(|argument| {
                        let marker = if argument.is_default { "*" } else { "" };
                        serde_json::to_string(&argument.value)
                            .map(|value| format!("{value}{marker}"))
                    })
                    .collect::<Result<_, serde_json::Error>>()?;
                println!(
                    "{:02}: {} {} [{}..{})",
                    seq + 1,
                    function.function,
                    arguments.join(","),
                    function.start,
                    function.end
                );
            },
            Err(err) => eprintln!("{:02}: {err}", seq + 1),
        }
    }
    Ok(())
}
