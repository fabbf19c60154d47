use clap::{Args, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "pwgen",
    version,
    about = "Highly customizable random password generator",
    after_help = "Run it without any arguments for interactive mode."
)]
pub struct CliFlags {
    /// Length of the password to generate
    pub length: usize,

    /// How many passwords to create
    #[arg(short = 'n', long, default_value_t = 1)]
    pub amount: usize,

    /// Limits how often the same character may occur in a password at most (0 = no limit)
    #[arg(
        short = 'm',
        long = "max-duplicate-chars",
        value_name = "LIMIT",
        default_value_t = 0
    )]
    pub max_duplicate: usize,

    /// Print only one password per line, nothing else
    #[arg(short, long)]
    pub quiet: bool,

    #[command(flatten)]
    pub charset: CharsetFlags,
}

#[derive(Args, Debug, Default)]
#[command(next_help_heading = "Character set specification")]
pub struct CharsetFlags {
    /// Include uppercase letters A-Z into the available character set
    #[arg(short, long)]
    pub uppercase: bool,

    /// Include lowercase letters a-z into the available character set
    #[arg(short, long)]
    pub lowercase: bool,

    /// Include digits 0-9 into the available character set
    #[arg(short, long)]
    pub digits: bool,

    /// Include punctuation into the available character set
    #[arg(short, long)]
    pub punctuation: bool,

    /// Include the standard space into the available character set
    #[arg(short, long)]
    pub space: bool,

    /// Additional characters to include into the available character set
    #[arg(short, long, value_name = "CHARS", default_value = "")]
    pub additional: String,

    /// Characters to exclude from the available character set
    #[arg(short, long, value_name = "CHARS", default_value = "")]
    pub blacklist: String,
}
