//! Reading prompt answers.
//!
//! On a terminal this uses dialoguer line input. When stdin is piped, the
//! label is printed and a single line is read, so the commands can be
//! scripted.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Result;
use chrono::NaiveDate;
use datebook_core::input::{parse_date, parse_uid};
use dialoguer::Input;
use uuid::Uuid;

fn ask(label: &str) -> Result<String> {
    if io::stdin().is_terminal() {
        let answer: String = Input::new().with_prompt(label).interact_text()?;
        return Ok(answer);
    }

    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

pub fn ask_uid(label: &str) -> Result<Uuid> {
    Ok(parse_uid(&ask(label)?)?)
}

pub fn ask_date(label: &str) -> Result<NaiveDate> {
    Ok(parse_date(&ask(label)?)?)
}
