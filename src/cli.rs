use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use numkit::{
    DEFAULT_MAX_FRACTION, DEFAULT_MIN_FRACTION, DEFAULT_PERCENT_DECIMALS, MAX_FRACTION_DIGITS,
};
use textkit::transform::{
    DEFAULT_MAX_INITIALS, DEFAULT_MIDDLE_KEEP, DEFAULT_SUFFIX, DEFAULT_VISIBLE_CHARS,
};

#[derive(Parser)]
#[command(name = "helpers")]
#[command(author = "Helpers Team")]
#[command(version)]
#[command(about = "Text, number, date and validation helpers from the command line", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Transform strings
    #[command(subcommand)]
    Text(TextCommand),

    /// Format and compute numbers
    #[command(subcommand)]
    Number(NumberCommand),

    /// Format, shift and compare dates
    #[command(subcommand)]
    Date(DateCommand),

    /// Check a value; exits non-zero when it is invalid
    Validate(ValidateArgs),

    /// Print the constant tables
    Constants {
        /// Table to print (all tables when omitted)
        #[arg(value_enum)]
        table: Option<ConstantTable>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

// ============================================================================
// Text Commands
// ============================================================================

#[derive(Subcommand)]
pub enum TextCommand {
    /// Uppercase the first character
    Capitalize {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Cut text to a maximum length and append a suffix
    Truncate {
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Characters to keep
        max: usize,

        /// Appended when the text is cut
        #[arg(long, default_value = DEFAULT_SUFFIX)]
        suffix: String,
    },

    /// Keep the head and tail, eliding the middle
    TruncateMiddle {
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Characters kept at the start
        #[arg(long, default_value_t = DEFAULT_MIDDLE_KEEP)]
        head: usize,

        /// Characters kept at the end
        #[arg(long, default_value_t = DEFAULT_MIDDLE_KEEP)]
        tail: usize,

        #[arg(long, default_value = DEFAULT_SUFFIX)]
        ellipsis: String,
    },

    /// Convert between identifier cases
    Case {
        #[arg(value_enum)]
        style: CaseStyle,

        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Make a URL-friendly slug
    Slugify {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Drop every whitespace character
    RemoveWhitespace {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Initials of a name
    Initials {
        name: String,

        /// Maximum number of initials
        #[arg(long, default_value_t = DEFAULT_MAX_INITIALS)]
        max: usize,
    },

    /// Mask all but the last characters
    Mask {
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Trailing characters left visible
        #[arg(long, default_value_t = DEFAULT_VISIBLE_CHARS)]
        visible: usize,

        /// Mask character
        #[arg(long, default_value_t = '*')]
        mask: char,
    },

    /// Reverse the characters
    Reverse {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Count whitespace-separated words
    WordCount {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Remove HTML tags
    StripHtml { text: String },

    /// Escape HTML special characters
    EscapeHtml { text: String },

    /// Turn an error object (JSON) into a single message
    NormalizeError {
        /// Error object; read from stdin when omitted
        json: Option<String>,

        /// Map wallet transaction errors to friendly messages
        #[arg(long)]
        txn: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CaseStyle {
    Camel,
    Pascal,
    Kebab,
    Snake,
}

// ============================================================================
// Number Commands
// ============================================================================

/// Fraction digit counts the number formatters accept.
fn fraction_digits() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(0..=MAX_FRACTION_DIGITS as u64)
}

#[derive(Subcommand)]
pub enum NumberCommand {
    /// Group digits the way a locale does
    Format {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        #[arg(long, default_value_t = DEFAULT_MIN_FRACTION, value_parser = fraction_digits())]
        min_fraction: usize,

        #[arg(long, default_value_t = DEFAULT_MAX_FRACTION, value_parser = fraction_digits())]
        max_fraction: usize,

        /// Locale tag, e.g. de-DE (defaults to the configured locale)
        #[arg(long)]
        locale: Option<String>,
    },

    /// Format money
    Currency {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// ISO-4217 code (defaults to the configured currency)
        #[arg(long)]
        currency: Option<String>,

        #[arg(long)]
        locale: Option<String>,
    },

    /// Compact notation (1.5K, 2M)
    Compact {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// Format a ratio as a percentage
    Percent {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        #[arg(long, default_value_t = DEFAULT_PERCENT_DECIMALS, value_parser = fraction_digits())]
        decimals: usize,

        #[arg(long)]
        locale: Option<String>,
    },

    /// Fixed number of fraction digits
    Fixed {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        #[arg(value_parser = fraction_digits())]
        digits: usize,
    },

    /// Round to a number of decimals
    Round {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        decimals: i32,
    },

    /// Restrict a value to [min, max]
    Clamp {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        #[arg(allow_negative_numbers = true)]
        min: f64,

        #[arg(allow_negative_numbers = true)]
        max: f64,
    },

    /// Random integer in [min, max]
    Random {
        #[arg(allow_negative_numbers = true)]
        min: i64,

        #[arg(allow_negative_numbers = true)]
        max: i64,
    },

    /// Human-readable byte size
    Bytes {
        bytes: f64,

        #[arg(long, default_value_t = 2, value_parser = fraction_digits())]
        decimals: usize,
    },

    /// File size with one decimal
    FileSize { bytes: f64 },

    /// Report whether an integer is even or odd
    Parity {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },

    /// Sum of the values
    Sum {
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Arithmetic mean of the values
    Average {
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// English ordinal (1st, 22nd)
    Ordinal {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },

    /// Check that text is a finite number
    Check {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
}

// ============================================================================
// Date Commands
// ============================================================================

#[derive(Subcommand)]
pub enum DateCommand {
    /// Current date and time
    Now,

    /// Start of today
    Today,

    /// Start of tomorrow
    Tomorrow,

    /// Start of yesterday
    Yesterday,

    /// Format a date with a pattern
    Format {
        date: String,

        /// What to render when no pattern is given
        #[arg(long, value_enum, default_value_t = FormatStyle::Date)]
        style: FormatStyle,

        /// Pattern such as "MMM dd, yyyy" (overrides --style)
        #[arg(short, long)]
        pattern: Option<String>,
    },

    /// Distance from now in words
    Relative { date: String },

    /// Add days, months or years
    Add {
        date: String,

        #[arg(allow_negative_numbers = true)]
        amount: i64,

        #[arg(long, value_enum, default_value_t = CalendarUnit::Days)]
        unit: CalendarUnit,
    },

    /// Go back a number of days
    Subtract {
        date: String,

        #[arg(allow_negative_numbers = true)]
        days: i64,
    },

    /// Start of the day, week, month or year
    Start {
        #[arg(value_enum)]
        period: Period,

        date: String,
    },

    /// End of the day, week, month or year
    End {
        #[arg(value_enum)]
        period: Period,

        date: String,
    },

    /// Compare two dates
    Compare { first: String, second: String },

    /// Age in full years
    Age { birth: String },

    /// Normalize to an ISO-8601 UTC string
    Iso { date: String },

    /// Check that text is a date and place it relative to now
    Check { date: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatStyle {
    Date,
    Time,
    DateTime,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CalendarUnit {
    Days,
    Months,
    Years,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
}

// ============================================================================
// Validate
// ============================================================================

#[derive(Args)]
pub struct ValidateArgs {
    /// What to check
    #[arg(value_enum)]
    pub kind: ValidationKind,

    /// Value to check (omit to check an absent value)
    #[arg(allow_hyphen_values = true)]
    pub value: Option<String>,

    /// Country for postal codes (defaults to the configured country)
    #[arg(long)]
    pub country: Option<String>,

    /// Lower bound for min-length and range
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<f64>,

    /// Upper bound for max-length and range
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ValidationKind {
    Email,
    Url,
    Empty,
    Password,
    Phone,
    CreditCard,
    Ipv4,
    HexColor,
    Uuid,
    Alpha,
    Alphanumeric,
    Numeric,
    Json,
    PostalCode,
    MinLength,
    MaxLength,
    Range,
    Slug,
}

// ============================================================================
// Constants
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConstantTable {
    Http,
    Patterns,
    FileSizes,
    Time,
    DateFormats,
    Breakpoints,
    Colors,
    Api,
    StorageKeys,
    Environments,
    Defaults,
    Currencies,
    Countries,
}

// ============================================================================
// Config Commands
// ============================================================================

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a config file with the default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the config file path
    Path,
}
