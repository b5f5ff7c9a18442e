// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User actions read from the terminal, one per line.

use crate::error::{AppError, Result};
use crate::models::draft::snap_accessibility;

/// A form input the user can change.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Activity(String),
    /// NaN when the input was not a number
    Price(f64),
    Type(String),
    BookingRequired(bool),
    /// Already clamped and snapped to the slider step
    Accessibility(f64),
}

/// One user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set(FieldInput),
    Submit,
    /// 1-based row number as shown in the table
    Edit(usize),
    /// Cancel the open dialog, or the edit in progress
    Cancel,
    /// 1-based row number as shown in the table
    Delete(usize),
    Confirm,
    Show,
    Export,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  set activity <text>        set price <number>
  set type <type>            set booking <yes|no>
  set accessibility <0..1>   submit
  edit <row>                 delete <row>
  confirm                    cancel
  show                       export
  help                       quit";

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = split_word(line);

        match verb {
            "set" => parse_set(rest).map(Command::Set),
            "submit" | "add" | "update" => Ok(Command::Submit),
            "edit" => parse_row(rest).map(Command::Edit),
            "delete" => parse_row(rest).map(Command::Delete),
            "confirm" | "continue" => Ok(Command::Confirm),
            "cancel" => Ok(Command::Cancel),
            "show" | "" => Ok(Command::Show),
            "export" => Ok(Command::Export),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(AppError::BadCommand(format!("unknown command '{other}'"))),
        }
    }
}

fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (s, ""),
    }
}

fn parse_set(rest: &str) -> Result<FieldInput> {
    let (field, value) = split_word(rest);

    match field {
        "activity" | "name" => Ok(FieldInput::Activity(value.to_string())),
        "price" => Ok(FieldInput::Price(parse_price(value))),
        "type" => Ok(FieldInput::Type(value.to_string())),
        "booking" | "booking_required" => parse_bool(value).map(FieldInput::BookingRequired),
        "accessibility" => value
            .parse::<f64>()
            .ok()
            .filter(|v| !v.is_nan())
            .map(|v| FieldInput::Accessibility(snap_accessibility(v)))
            .ok_or_else(|| {
                AppError::BadCommand(format!("accessibility must be a number, got '{value}'"))
            }),
        "" => Err(AppError::BadCommand("set needs a field name".to_string())),
        other => Err(AppError::BadCommand(format!("unknown field '{other}'"))),
    }
}

/// Price input behaves like an integer number box: the leading integer is
/// taken and anything unparseable becomes NaN.
fn parse_price(value: &str) -> f64 {
    let end = value
        .char_indices()
        .take_while(|(i, c)| c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+')))
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);

    value[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "on" => Ok(true),
        "no" | "n" | "false" | "off" => Ok(false),
        _ => Err(AppError::BadCommand(format!(
            "booking must be yes or no, got '{value}'"
        ))),
    }
}

fn parse_row(rest: &str) -> Result<usize> {
    rest.parse::<usize>()
        .ok()
        .filter(|row| *row >= 1)
        .ok_or_else(|| AppError::BadCommand(format!("expected a row number, got '{rest}'")))
}
