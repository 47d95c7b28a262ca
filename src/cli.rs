pub(crate) const DEFAULT_PROMPT: &str = ">>";

#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Specifies what is printed for each expression
    #[arg(short, long, global = true)]
    #[clap(value_enum, default_value_t = OutputFormat::Value)]
    pub format: OutputFormat,

    /// Significant digits of printed values
    #[arg(
        short,
        long,
        global = true,
        default_value_t = 10,
        value_parser = clap::value_parser!(u8).range(1..=17)
    )]
    pub precision: u8,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// The evaluated number
    Value,
    /// The operator-ordered token sequence
    Postfix,
    /// The fully parenthesised expression tree
    Tree,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Read expressions line by line until `exit`
    Repl {
        #[arg(long, default_value = DEFAULT_PROMPT)]
        prompt: String,
    },

    /// Evaluate a single expression
    Eval {
        #[arg(allow_hyphen_values = true)]
        expr: String,
    },

    /// Evaluate every line of a file
    File { file: std::path::PathBuf },
}
