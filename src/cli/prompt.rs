use std::io::{BufRead, Write};

use crate::shared::errors::{AppError, AppResult};

/// Print `message` and `> `, then read one trimmed line
pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> AppResult<String> {
    write!(output, "{}\n> ", message)?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Err(AppError::InvalidInput("No input given".to_string()));
    }
    Ok(line.trim().to_string())
}

/// Turn a 1-based menu choice into an index into a list of `len` items
pub fn parse_choice(raw: &str, len: usize) -> AppResult<usize> {
    let choice = raw.trim().parse::<usize>().map_err(|_| {
        AppError::InvalidInput(format!("'{}' is not a number", raw.trim()))
    })?;

    if choice == 0 || choice > len {
        return Err(AppError::InvalidInput(format!(
            "Choose a number between 1 and {}",
            len
        )));
    }
    Ok(choice - 1)
}
