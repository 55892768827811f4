use crate::case::{determine_case, Target};
use crate::cli::output::{write_conversion, write_detection, OutputFormat};
use crate::error::ProcessError;
use std::io::{self, BufRead, Cursor, Write};

/// Pick the word source: command-line words when stdin is a terminal, stdin otherwise
pub fn select_input(stdin_is_terminal: bool, words: &[String]) -> Box<dyn BufRead> {
    if stdin_is_terminal {
        Box::new(Cursor::new(words.join("\n")))
    } else {
        Box::new(io::stdin().lock())
    }
}

/// Convert every whitespace-separated word of `input`, writing one result per line.
///
/// Returns the number of words converted. The first read or write failure aborts the run.
pub fn process<R, W>(
    input: R,
    out: &mut W,
    target: Target,
    format: OutputFormat,
) -> Result<usize, ProcessError>
where
    R: BufRead,
    W: Write,
{
    let count = for_each_word(input, |word| {
        let converted = target.apply(word);
        tracing::trace!(word, %converted, "converted");
        write_conversion(out, word, &converted, format)
    })?;

    tracing::debug!(count, %target, "finished converting");
    Ok(count)
}

/// Write the detected convention of every word instead of converting it
pub fn detect<R, W>(input: R, out: &mut W, colored: bool) -> Result<usize, ProcessError>
where
    R: BufRead,
    W: Write,
{
    let count = for_each_word(input, |word| {
        write_detection(out, word, determine_case(word), colored)
    })?;

    tracing::debug!(count, "finished detecting");
    Ok(count)
}

fn for_each_word<R, F>(input: R, mut handle: F) -> Result<usize, ProcessError>
where
    R: BufRead,
    F: FnMut(&str) -> Result<(), ProcessError>,
{
    let mut count = 0;

    for line in input.split(b'\n') {
        let line = line.map_err(ProcessError::Read)?;
        // Undecodable bytes become U+FFFD instead of ending the run
        let line = String::from_utf8_lossy(&line);
        for word in line.split_whitespace() {
            handle(word)?;
            count += 1;
        }
    }

    Ok(count)
}
