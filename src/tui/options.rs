//! The interactive dialogue: charset, length, duplicate limit, then generate.

use std::io::{BufRead, Write};

use log::debug;

use super::{Prompter, text};
use crate::entropy::RandomSource;
use crate::error::Result;
use crate::pass::charset::{DIGITS, LOWERCASE, PUNCTUATION, SPACE, UPPERCASE};
use crate::pass::{Charset, generate, minimum_duplicate_limit, output};
use crate::settings::Settings;

/// Offer the current charset and optionally rebuild it class by class.
/// Never returns an empty charset.
pub fn ask_charset<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    settings: &mut Settings,
) -> Result<Charset> {
    let charset = settings.charset();
    p.say(text::charset_intro(true))?;
    output::write_charset(p.out(), &charset)?;
    if !charset.is_empty() && !p.ask_yn(text::CHANGE_CHARSET, false)? {
        return Ok(charset);
    }

    loop {
        let classes = &mut settings.classes;
        classes.uppercase = p.ask_yn(
            &text::allow_class("uppercase letters", UPPERCASE),
            classes.uppercase,
        )?;
        classes.lowercase = p.ask_yn(
            &text::allow_class("lowercase letters", LOWERCASE),
            classes.lowercase,
        )?;
        classes.digits = p.ask_yn(&text::allow_class("digits", DIGITS), classes.digits)?;
        classes.punctuation = p.ask_yn(
            &text::allow_class("punctuation", PUNCTUATION),
            classes.punctuation,
        )?;
        classes.space = p.ask_yn(&text::allow_class("space", SPACE), classes.space)?;
        settings.additional = p.get_input(text::ADDITIONAL_PROMPT)?;
        settings.blacklist = p.get_input(text::BLACKLIST_PROMPT)?;

        let charset = settings.charset();
        if charset.is_empty() {
            p.complain(text::EMPTY_CHARSET_RETRY)?;
            continue;
        }
        p.say(text::charset_intro(false))?;
        output::write_charset(p.out(), &charset)?;
        return Ok(charset);
    }
}

pub fn ask_length<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    settings: &mut Settings,
) -> Result<()> {
    p.say(&text::default_length(settings.length))?;
    settings.length = p.get_numeric_input(text::LENGTH_PROMPT, settings.length, |_| Ok(()))?;
    Ok(())
}

/// 0 always means no limit; anything else must make the length reachable.
pub fn ask_max_duplicate<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    settings: &mut Settings,
    charset: &Charset,
) -> Result<()> {
    let minimum = minimum_duplicate_limit(settings.length, charset.len());
    let accept = |limit: usize| {
        if limit == 0 || limit >= minimum {
            Ok(())
        } else {
            Err(text::limit_too_low(minimum))
        }
    };

    p.say(&text::default_limit(settings.max_duplicate))?;
    p.say(text::LIMIT_HINT)?;
    let default = if accept(settings.max_duplicate).is_ok() {
        settings.max_duplicate
    } else {
        0
    };
    settings.max_duplicate = p.get_numeric_input(text::LIMIT_PROMPT, default, accept)?;
    Ok(())
}

/// The whole interactive session, until the user declines another password.
pub fn session<R: BufRead, W: Write, G: RandomSource>(
    p: &mut Prompter<R, W>,
    rng: &mut G,
) -> Result<()> {
    output::write_banner(p.out())?;

    let mut settings = Settings::default();
    let charset = ask_charset(p, &mut settings)?;
    ask_length(p, &mut settings)?;
    ask_max_duplicate(p, &mut settings, &charset)?;
    settings.validate(&charset)?;
    debug!(
        "interactive settings: length {}, charset {} chars, max duplicate {}",
        settings.length,
        charset.len(),
        settings.max_duplicate
    );

    loop {
        let password = generate(&charset, settings.length, settings.max_duplicate, rng)?;
        output::write_boxed(p.out(), &password)?;
        drop(password);

        if !p.ask_yn(text::AGAIN, true)? {
            break;
        }
    }

    p.say(text::FAREWELL)?;
    p.out().flush()?;
    Ok(())
}
