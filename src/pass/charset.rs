//! Character set building for password generation.

use std::collections::BTreeSet;
use std::fmt;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
pub const SPACE: &str = " ";

/// Which of the fixed character classes go into a charset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClasses {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub punctuation: bool,
    pub space: bool,
}

impl CharClasses {
    pub fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            punctuation: true,
            space: true,
        }
    }

    pub fn any(&self) -> bool {
        self.uppercase || self.lowercase || self.digits || self.punctuation || self.space
    }

    fn enabled(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.uppercase, UPPERCASE),
            (self.lowercase, LOWERCASE),
            (self.digits, DIGITS),
            (self.punctuation, PUNCTUATION),
            (self.space, SPACE),
        ]
        .into_iter()
        .filter_map(|(on, chars)| on.then_some(chars))
    }
}

/// Immutable set of characters a password may be drawn from.
///
/// Kept sorted so the display form and the draw order are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Charset(BTreeSet<char>);

impl Charset {
    /// Union the enabled classes with `additional`, then drop everything in `blacklist`.
    pub fn build(classes: &CharClasses, additional: &str, blacklist: &str) -> Self {
        let banned: BTreeSet<char> = blacklist.chars().collect();
        let chars = classes
            .enabled()
            .flat_map(str::chars)
            .chain(additional.chars())
            .filter(|c| !banned.contains(c))
            .collect();
        Self(chars)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<char> for Charset {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
