use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use ifm_lexer::registry::{self, LexerInfo, LookupError};
use ifm_lexer::{ChunkedLexer, ChunkedLexerConfig, LexerConfig, LexerError, OwnedToken};
use log::{debug, info};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "ifmlex",
    version,
    about = "Tokenize IFM map sources for syntax highlighting",
    long_about = "ifmlex runs the IFM (Interactive Fiction Mapper) highlighting lexer over a\n\
        map source and prints the resulting tokens.\n\n\
        EXAMPLES:\n\
        \n  ifmlex tokens zork1.ifm                   One token per line\n\
        \n  ifmlex tokens --format json zork1.ifm     Tokens as a JSON array\n\
        \n  cat zork1.ifm | ifmlex tokens --chunked   Stream tokens from stdin\n\
        \n  ifmlex lexers                             Show registered lexers"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the tokens of an IFM source
    Tokens(TokensArgs),

    /// List registered lexers and how they are selected
    Lexers(LexersArgs),
}

#[derive(Debug, Args, Clone)]
struct TokensArgs {
    /// Input source file (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Lexer alias; defaults to matching the file name
    #[arg(short = 'l', long = "lexer", value_name = "NAME")]
    lexer: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Drop whitespace tokens
    #[arg(long)]
    no_whitespace: bool,

    /// Drop comment tokens
    #[arg(long)]
    no_comments: bool,

    /// Read the input incrementally instead of all at once
    #[arg(long)]
    chunked: bool,
}

#[derive(Debug, Args, Clone)]
struct LexersArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Lex(#[from] LexerError),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Lookup(_) => 2,
            CliError::Lex(_) | CliError::Output(_) => 1,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Command::Tokens(args) => run_tokens(args),
        Command::Lexers(args) => run_lexers(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn select_lexer(args: &TokensArgs) -> Result<&'static LexerInfo, LookupError> {
    match (&args.lexer, &args.input) {
        (Some(alias), _) => registry::find_lexer_by_alias(alias),
        (None, Some(path)) => registry::find_lexer_for_filename(path),
        (None, None) => Ok(&registry::IFM),
    }
}

fn run_tokens(args: &TokensArgs) -> Result<(), CliError> {
    let info = select_lexer(args)?;
    info!("using lexer {:?}", info.name);

    let lexer_config = LexerConfig {
        include_whitespace: !args.no_whitespace,
        include_comments: !args.no_comments,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.chunked {
        let config = ChunkedLexerConfig {
            lexer: lexer_config,
            ..Default::default()
        };
        match &args.input {
            Some(path) => {
                let file = File::open(path).map_err(LexerError::from)?;
                let tokens = ChunkedLexer::from_reader(BufReader::new(file), config);
                write_tokens(tokens, args.format, &mut out)?;
            }
            None => {
                let tokens = ChunkedLexer::from_reader(io::stdin().lock(), config);
                write_tokens(tokens, args.format, &mut out)?;
            }
        }
    } else {
        let source = read_source(args.input.as_deref())?;
        debug!("read {} bytes", source.len());
        let tokens = info
            .lexer_with_config(&source, lexer_config)
            .map(|token| Ok(token.to_owned_token()));
        write_tokens(tokens, args.format, &mut out)?;
    }

    out.flush().map_err(CliError::Output)
}

fn read_source(path: Option<&Path>) -> Result<String, LexerError> {
    let bytes = match path {
        Some(path) => fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    String::from_utf8(bytes).map_err(|err| LexerError::InvalidUtf8 {
        offset: err.utf8_error().valid_up_to(),
    })
}

fn write_tokens<I, W>(tokens: I, format: OutputFormat, out: &mut W) -> Result<(), CliError>
where
    I: Iterator<Item = Result<OwnedToken, LexerError>>,
    W: Write,
{
    match format {
        OutputFormat::Text => {
            for token in tokens {
                let token = token?;
                writeln!(
                    out,
                    "{}\t{}\t{:?}",
                    token.location,
                    token.category.standard_name(),
                    token.lexeme.as_str()
                )
                .map_err(CliError::Output)?;
            }
        }
        OutputFormat::Json => {
            let tokens = tokens.collect::<Result<Vec<_>, _>>()?;
            serde_json::to_writer_pretty(&mut *out, &tokens)
                .map_err(|err| CliError::Output(err.into()))?;
            writeln!(out).map_err(CliError::Output)?;
        }
    }
    Ok(())
}

fn run_lexers(args: &LexersArgs) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let lexers = registry::all_lexers();

    match args.format {
        OutputFormat::Text => {
            for info in lexers {
                writeln!(
                    out,
                    "{}\n  aliases:   {}\n  filenames: {}\n  mimetypes: {}",
                    info.name,
                    info.aliases.join(", "),
                    info.filenames.join(", "),
                    info.mimetypes.join(", ")
                )
                .map_err(CliError::Output)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, lexers)
                .map_err(|err| CliError::Output(err.into()))?;
            writeln!(out).map_err(CliError::Output)?;
        }
    }
    Ok(())
}
