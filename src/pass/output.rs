//! Password output: banner, charset summary and the passwords themselves.

use std::io::Write;

use super::{Charset, Password, generate};
use crate::entropy::{self, RandomSource};
use crate::error::Result;
use crate::settings::Settings;
use crate::terminal::{box_bottom, box_line, box_line_center, box_top, frame};

pub const TITLE: &str = "Password Generator";

pub fn write_banner<W: Write>(out: &mut W) -> Result<()> {
    box_top(out, TITLE)?;
    box_line_center(out, "Highly customizable random password generator")?;
    box_line(out, "")?;
    box_line(out, &format!("Random source: {}", entropy::source_name()))?;
    box_bottom(out)?;
    writeln!(out)?;
    Ok(())
}

/// The charset between arrows, so a space member stays visible.
pub fn write_charset<W: Write>(out: &mut W, charset: &Charset) -> Result<()> {
    writeln!(out, "→{charset}←")?;
    Ok(())
}

pub fn duplicate_policy(max_duplicate: usize) -> String {
    if max_duplicate > 0 {
        format!(
            "There may be at most {max_duplicate} occurrences of the same character per password."
        )
    } else {
        "There are no duplicate character limits.".to_string()
    }
}

/// Summary printed before batch output unless quiet.
pub fn write_header<W: Write>(out: &mut W, settings: &Settings, charset: &Charset) -> Result<()> {
    write_banner(out)?;
    writeln!(out, "Using this character set (excluding the arrows):")?;
    write_charset(out, charset)?;
    writeln!(out, "{}", duplicate_policy(settings.max_duplicate))?;
    writeln!(out)?;
    writeln!(
        out,
        "Generating {} password{} of length {}:",
        settings.amount,
        if settings.amount == 1 { "" } else { "s" },
        settings.length
    )?;
    writeln!(out)?;
    Ok(())
}

/// Password framed for interactive mode.
pub fn write_boxed<W: Write>(out: &mut W, password: &Password) -> Result<()> {
    writeln!(out, "And your new password is:")?;
    frame(out, password)?;
    Ok(())
}

/// Generate `settings.amount` passwords, one per line.
pub fn generate_batch<W: Write, R: RandomSource>(
    out: &mut W,
    settings: &Settings,
    charset: &Charset,
    rng: &mut R,
) -> Result<()> {
    for _ in 0..settings.amount {
        let password = generate(charset, settings.length, settings.max_duplicate, rng)?;
        writeln!(out, "{}", password.as_str())?;
    }
    out.flush()?;
    Ok(())
}
