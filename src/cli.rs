#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Evaluate an expression against the standard environment
    Eval {
        expr: String,

        /// Bind a variable before evaluating, e.g. `-D x=3/4`
        #[arg(short = 'D', long = "define", value_name = "NAME=EXPR")]
        defines: Vec<String>,
    },

    /// Print the parsed expression tree
    Parse { expr: String },

    /// Evaluate every line of a file, printing one result per line
    Run {
        file: std::path::PathBuf,

        /// Bind a variable before evaluating, e.g. `-D x=3/4`
        #[arg(short = 'D', long = "define", value_name = "NAME=EXPR")]
        defines: Vec<String>,
    },
}
