use crate::commands::{CmdMessage, CmdResult, MessageLevel};
use crate::error::{Result, ShelfError};
use colored::Colorize;
use std::io::Write;

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// Entity details first, then the command's messages.
pub(super) fn print_result<W: Write>(out: &mut W, result: &CmdResult) -> Result<()> {
    for (i, item) in result.items.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", item)?;
    }
    for (i, client) in result.clients.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", client)?;
    }
    print_messages(out, &result.messages)
}

pub(super) fn print_error<W: Write>(out: &mut W, err: &ShelfError) -> Result<()> {
    writeln!(out, "{}", format!("========== {} ==========", err).red())?;
    Ok(())
}
