//! Interactive mode wording.

pub const YES_NO_RETRY: &str =
    "Sorry, please do only enter [y] or [n] or leave it blank to accept the default. Try again!";
pub const NUMBER_RETRY: &str =
    "Sorry, please do only enter a number or leave it blank to accept the default. Try again!";
pub const EMPTY_CHARSET_RETRY: &str =
    "Sorry, this leaves no characters to build a password from. Try again!";

pub const CHANGE_CHARSET: &str = "Do you want to change the character set?";
pub const ADDITIONAL_PROMPT: &str = "Please enter additional characters you want to allow (if any): ";
pub const BLACKLIST_PROMPT: &str = "Please enter characters you want to blacklist (if any): ";
pub const LENGTH_PROMPT: &str = "Enter your desired length or leave it blank to use the default: ";
pub const LIMIT_HINT: &str =
    "Enter your desired maximum duplicate character limit or leave it blank to use the default.";
pub const LIMIT_PROMPT: &str = "A value of 0 means no limit: ";
pub const AGAIN: &str = "Generate another password with the same settings?";
pub const FAREWELL: &str = "Thank you for using this password generator. Have a nice day!";

pub fn charset_intro(default: bool) -> &'static str {
    if default {
        "The default character set to generate passwords is this (not including the arrows):"
    } else {
        "Your character set is now this (not including the arrows):"
    }
}

pub fn allow_class(name: &str, chars: &str) -> String {
    format!("Do you want to allow {name} '{chars}'?")
}

pub fn default_length(length: usize) -> String {
    format!("The default password length is {length} characters.")
}

pub fn default_limit(limit: usize) -> String {
    if limit > 0 {
        format!("The default maximum occurrences of a character is {limit} times.")
    } else {
        "By default, there is no limit how often a character may appear in the password.".to_string()
    }
}

pub fn limit_too_low(minimum: usize) -> String {
    format!(
        "Sorry, this limit is too low for the given character set and password length.\n\
         You need to allow at least {minimum} duplicate characters. Try again!"
    )
}
