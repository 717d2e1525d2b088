//! Command-line argument handling and batch execution.

use std::fs;
use std::io::{BufRead, Read, Write};
use std::path::PathBuf;

use namae_foundation::{Error, Result};
use namae_parser::{LexiconSource, NameParser, ParserConfig};

use crate::batch::{ParsedInput, parse_json_str};
use crate::format::{OutputFormat, format_batch};
use crate::logging::Verbosity;

/// CLI configuration parsed from arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Names given directly on the command line
    pub names: Vec<String>,
    /// Files with one name string per line
    pub files: Vec<PathBuf>,
    /// Read name strings from stdin, one per line
    pub stdin: bool,
    /// Read a JSON string or array from stdin
    pub json_input: bool,
    /// Output format
    pub format: OutputFormat,
    /// Particle lexicon override
    pub lexicon: Option<LexiconSource>,
    /// Treat `&` as a separator
    pub ampersand: bool,
    /// Start the REPL even if other input was given
    pub interactive: bool,
    /// Diagnostic verbosity
    pub verbosity: Verbosity,
    /// Print help and exit
    pub show_help: bool,
    /// Print version and exit
    pub show_version: bool,
}

impl CliConfig {
    /// Parses arguments, excluding the program name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for unknown options or missing values.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => config.show_help = true,
                "-V" | "--version" => config.show_version = true,
                "-i" | "--interactive" => config.interactive = true,
                "-v" | "--verbose" => config.verbosity = config.verbosity.increase(),
                "-q" | "--quiet" => config.verbosity = Verbosity::Quiet,
                "--json" => config.format = OutputFormat::Json,
                "--json-input" => config.json_input = true,
                "--stdin" => config.stdin = true,
                "--ampersand" => config.ampersand = true,
                "--builtin-lexicon" => config.lexicon = Some(LexiconSource::Builtin),
                "-f" | "--file" => {
                    let path = args
                        .next()
                        .ok_or_else(|| Error::invalid_argument(format!("{arg} requires a path")))?;
                    config.files.push(PathBuf::from(path));
                }
                "--lexicon" => {
                    let path = args
                        .next()
                        .ok_or_else(|| Error::invalid_argument("--lexicon requires a path"))?;
                    config.lexicon = Some(LexiconSource::Path(PathBuf::from(path)));
                }
                "--format" => {
                    let name = args
                        .next()
                        .ok_or_else(|| Error::invalid_argument("--format requires a value"))?;
                    config.format = name.parse()?;
                }
                "--" => config.names.extend(args.by_ref()),
                other if other.starts_with('-') && other.len() > 1 => {
                    return Err(Error::invalid_argument(format!("unknown option: {other}")));
                }
                _ => config.names.push(arg),
            }
        }

        if config.stdin && config.json_input {
            return Err(Error::invalid_argument(
                "--stdin and --json-input are mutually exclusive",
            ));
        }
        if config.json_input && (!config.names.is_empty() || !config.files.is_empty()) {
            return Err(Error::invalid_argument(
                "--json-input cannot be combined with names or --file",
            ));
        }

        Ok(config)
    }

    /// Returns true if there is non-interactive input to process.
    #[must_use]
    pub fn has_batch_input(&self) -> bool {
        !self.names.is_empty() || !self.files.is_empty() || self.stdin || self.json_input
    }

    /// Returns true if the REPL should start.
    #[must_use]
    pub fn wants_repl(&self) -> bool {
        self.interactive || !self.has_batch_input()
    }

    /// Builds the parser configuration.
    #[must_use]
    pub fn parser_config(&self) -> ParserConfig {
        let mut config = ParserConfig::default().with_ampersand_separator(self.ampersand);
        if let Some(lexicon) = &self.lexicon {
            config = config.with_lexicon(lexicon.clone());
        }
        config
    }

    /// Builds the parser. An explicit `--lexicon` file must be readable.
    ///
    /// # Errors
    ///
    /// Returns `LexiconRead` if the lexicon file cannot be read.
    pub fn build_parser(&self) -> Result<NameParser> {
        NameParser::try_with_config(&self.parser_config())
    }
}

/// Processes all batch input and writes the results.
///
/// Direct names come first, then files in order, then stdin. JSON input is
/// read alone and written as one document.
///
/// # Errors
///
/// Returns an error if an input cannot be read, JSON input has the wrong
/// shape, or output cannot be written.
pub fn run_batch<R: Read, W: Write>(
    config: &CliConfig,
    parser: &NameParser,
    mut input: R,
    output: &mut W,
) -> Result<()> {
    if config.json_input {
        let mut source = String::new();
        input.read_to_string(&mut source)?;
        let parsed = parse_json_str(parser, &source)?;
        tracing::debug!(records = parsed.record_count(), "parsed json input");
        match config.format {
            OutputFormat::Json => {
                let json =
                    serde_json::to_string(&parsed).map_err(|e| Error::serialization(e.to_string()))?;
                writeln!(output, "{json}")?;
            }
            OutputFormat::Text => {
                let batches = match parsed {
                    ParsedInput::Single(records) => vec![records],
                    ParsedInput::Batch(batches) => batches,
                };
                writeln!(output, "{}", format_batch(&batches, OutputFormat::Text)?)?;
            }
        }
        return Ok(());
    }

    let mut texts = config.names.clone();
    for file in &config.files {
        let source = fs::read_to_string(file)?;
        texts.extend(non_blank_lines(source.as_bytes())?);
        tracing::debug!(file = %file.display(), "read input file");
    }

    if config.stdin {
        texts.extend(non_blank_lines(std::io::BufReader::new(input))?);
    }

    let batches = parser.parse_list(texts.as_slice());
    writeln!(output, "{}", format_batch(&batches, config.format)?)?;
    Ok(())
}

fn non_blank_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Help text for the `namae` binary.
#[must_use]
pub fn help_text() -> String {
    format!(
        "\x1b[1mnamae\x1b[0m {} - parse human names into their parts

\x1b[1mUSAGE:\x1b[0m
    namae [OPTIONS] [NAMES...]

\x1b[1mARGUMENTS:\x1b[0m
    [NAMES...]           Name strings to parse (each may hold several names)

\x1b[1mINPUT:\x1b[0m
    -f, --file PATH      Parse each non-blank line of PATH
        --stdin          Parse each non-blank line of standard input
        --json-input     Read a JSON string or array of strings from stdin
                         (no other input may be given)
    -i, --interactive    Start the REPL after processing other input

\x1b[1mPARSING:\x1b[0m
        --lexicon PATH   Read particles from PATH (one per line)
        --builtin-lexicon
                         Use the built-in particle set
        --ampersand      Also split names on '&'

\x1b[1mOUTPUT:\x1b[0m
        --json           Print records as JSON
        --format FORMAT  text or json
    -v, --verbose        More diagnostics on stderr (repeatable)
    -q, --quiet          Errors only
    -h, --help           Print help information
    -V, --version        Print version information

\x1b[1mEXAMPLES:\x1b[0m
    namae \"Dr. John Michael Doe Jr.\"
    namae --json \"Doe, John; Ludwig van Beethoven\"
    namae -f authors.txt
    echo '[\"John Doe\", \"Jane Smith PhD\"]' | namae --json-input --json
    namae                Start interactive REPL",
        env!("CARGO_PKG_VERSION")
    )
}
