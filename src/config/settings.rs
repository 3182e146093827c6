//! Configuration settings for UniHash
//!
//! Defines the CLI arguments, the hash family and output format choices,
//! and the validated runtime configuration derived from them.

use crate::error::{Result, UnihashError};
use clap::{ArgGroup, Parser, ValueEnum};

/// UniHash - sample and verify universal hash functions
#[derive(Parser, Debug, Clone)]
#[command(name = "unihash")]
#[command(author = "UniHash Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate, evaluate and verify universal hash samples")]
#[command(long_about = r#"
UniHash produces and checks (parameters, input, output) samples of two
universal hash families with 20-bit output:

  - mod-prime: ((a*x + b) mod (2^89 - 1)) mod 2^20
  - shift:     (a*x mod 2^64) >> 44

Records are comma-separated, one per line. Integers are 0x-prefixed hex or
decimal on input, and fixed-width 0x-prefixed lowercase hex on output.

Examples:
  unihash -g 1000 > samples.csv       # Generate 1000 random samples
  cut -d, -f1-3 samples.csv | unihash -r
                                      # Evaluate a,b,x records
  unihash -c < samples.csv            # Verify a,b,x,y records
"#)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["generate", "read_csv", "check"])
))]
pub struct CliArgs {
    /// Generate random samples, count given as argument
    #[arg(short = 'g', long)]
    pub generate: bool,

    /// Read comma-separated parameters and x from stdin, print y
    #[arg(short = 'r', long = "read-csv")]
    pub read_csv: bool,

    /// Read comma-separated parameters, x and y from stdin and check y
    #[arg(short = 'c', long)]
    pub check: bool,

    /// Positional arguments (depend on mode)
    #[arg(value_name = "ARGS", allow_negative_numbers = true)]
    pub args: Vec<String>,

    /// Hash family to generate or check
    #[arg(long, value_enum, default_value = "mod-prime", value_name = "FAMILY")]
    pub family: HashFamily,

    /// Format of the verification summary [default: text] (check mode only)
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Show a progress bar on stderr (generate and read-csv modes only)
    #[arg(short = 'p', long)]
    pub progress: bool,

    /// Verbose logging on stderr (can be repeated: -v, -vv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Universal hash family
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashFamily {
    /// Carter-Wegman multiply-mod-prime over p = 2^89 - 1
    #[default]
    #[value(name = "mod-prime")]
    ModPrime,
    /// Multiply-shift over 64-bit words
    #[value(name = "shift")]
    Shift,
}

impl HashFamily {
    /// Number of parameter fields in a record
    pub fn num_params(&self) -> usize {
        match self {
            Self::ModPrime => 2,
            Self::Shift => 1,
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::ModPrime => "mod-prime",
            Self::Shift => "shift",
        }
    }
}

/// Output format for the verification summary
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON object
    Json,
}

/// Operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Produce `count` random samples
    Generate {
        /// Number of samples, always positive
        count: u64,
    },
    /// Compute y for each input record
    Evaluate,
    /// Check y for each input record
    Verify,
}

impl Mode {
    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Generate { .. } => "generate",
            Self::Evaluate => "evaluate",
            Self::Verify => "verify",
        }
    }
}

/// Runtime configuration derived from CLI args
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Selected mode
    pub mode: Mode,
    /// Hash family
    pub family: HashFamily,
    /// Summary format
    pub format: OutputFormat,
    /// Draw a progress bar on stderr
    pub progress: bool,
}

impl RunConfig {
    /// Create a configuration for the given mode with default options
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            family: HashFamily::default(),
            format: OutputFormat::default(),
            progress: false,
        }
    }

    /// Set the hash family
    pub fn with_family(mut self, family: HashFamily) -> Self {
        self.family = family;
        self
    }

    /// Set the summary format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Create configuration from CLI arguments.
    ///
    /// Checks positional arity and option combinations for the selected
    /// mode; all failures are usage errors.
    pub fn from_cli(args: &CliArgs) -> Result<Self> {
        let mode = if args.generate {
            match args.args.as_slice() {
                [] => return Err(UnihashError::usage("missing required argument: count")),
                [count] => Mode::Generate {
                    count: parse_count(count)?,
                },
                _ => return Err(UnihashError::usage("unexpected extra arguments")),
            }
        } else {
            if !args.args.is_empty() {
                return Err(UnihashError::usage("unexpected extra arguments"));
            }
            if args.read_csv {
                Mode::Evaluate
            } else if args.check {
                Mode::Verify
            } else {
                return Err(UnihashError::usage(
                    "one of --generate, --read-csv or --check is required",
                ));
            }
        };

        if args.format.is_some() && mode != Mode::Verify {
            return Err(UnihashError::usage("--format only applies to --check"));
        }
        if args.progress && mode == Mode::Verify {
            return Err(UnihashError::usage("--progress does not apply to --check"));
        }

        Ok(Self {
            mode,
            family: args.family,
            format: args.format.unwrap_or_default(),
            progress: args.progress,
        })
    }
}

/// Parse a sample count, which must be a positive integer
pub fn parse_count(s: &str) -> Result<u64> {
    let count: i128 = s
        .trim()
        .parse()
        .map_err(|_| UnihashError::usage("count argument should be an integer"))?;

    if count <= 0 {
        return Err(UnihashError::usage("count argument should be positive"));
    }

    u64::try_from(count).map_err(|_| UnihashError::usage("count argument is too large"))
}
