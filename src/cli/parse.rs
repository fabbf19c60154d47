use clap::Parser;

use super::CliFlags;
use crate::pass::CharClasses;
use crate::settings::Settings;

pub fn parse(args: &[String]) -> Result<CliFlags, clap::Error> {
    CliFlags::try_parse_from(args)
}

impl From<CliFlags> for Settings {
    fn from(flags: CliFlags) -> Self {
        let charset = flags.charset;
        Settings {
            length: flags.length,
            max_duplicate: flags.max_duplicate,
            amount: flags.amount,
            classes: CharClasses {
                uppercase: charset.uppercase,
                lowercase: charset.lowercase,
                digits: charset.digits,
                punctuation: charset.punctuation,
                space: charset.space,
            },
            additional: charset.additional,
            blacklist: charset.blacklist,
            quiet: flags.quiet,
        }
    }
}
