//! The interactive REPL.
//!
//! Each line is parsed as a name string and the records are printed.
//! Lines starting with `:` are commands.

use namae_foundation::{Error, Result};
use namae_parser::NameParser;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::format::{OutputFormat, format_records};

/// What a REPL line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplCommand {
    /// Parse the text as names
    Parse(String),
    /// Show the name units without classifying them
    Split(String),
    /// Switch the output format
    Format(OutputFormat),
    /// Print help
    Help,
    /// Leave the REPL
    Quit,
}

impl ReplCommand {
    /// Interprets one input line.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an unknown `:` command.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let Some(command) = line.strip_prefix(':') else {
            return Ok(Self::Parse(line.to_string()));
        };

        let (name, rest) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(n, r)| (n, r.trim()));

        match name {
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            "json" => Ok(Self::Format(OutputFormat::Json)),
            "text" => Ok(Self::Format(OutputFormat::Text)),
            "split" => Ok(Self::Split(rest.to_string())),
            other => Err(Error::invalid_argument(format!(
                "unknown command :{other} (try :help)"
            ))),
        }
    }
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Parser shared by every line.
    parser: NameParser,

    /// Current output format.
    format: OutputFormat,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(parser: NameParser) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, parser))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, parser: NameParser) -> Self {
        Self {
            editor,
            parser,
            format: OutputFormat::Text,
            show_banner: true,
            prompt: "name> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// The current output format.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Runs the REPL loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };

            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.eval(&line) {
                Ok(Some(output)) => println!("{output}"),
                Ok(None) => break,
                Err(e) => eprintln!("\x1b[31mError: {e}\x1b[0m"),
            }
        }

        Ok(())
    }

    /// Evaluates one line.
    ///
    /// Returns the text to print, or `None` when the REPL should exit.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands or failed JSON encoding.
    pub fn eval(&mut self, line: &str) -> Result<Option<String>> {
        match ReplCommand::parse(line)? {
            ReplCommand::Parse(text) => {
                let records = self.parser.parse(&text);
                if records.is_empty() && self.format == OutputFormat::Text {
                    return Ok(Some("(no names)".to_string()));
                }
                format_records(&records, self.format).map(Some)
            }
            ReplCommand::Split(text) => {
                let units = self.parser.split(&text);
                Ok(Some(
                    units
                        .iter()
                        .enumerate()
                        .map(|(i, unit)| format!("{}: {unit}", i + 1))
                        .collect::<Vec<_>>()
                        .join("\n"),
                ))
            }
            ReplCommand::Format(format) => {
                self.format = format;
                Ok(Some(format!("output format: {format:?}").to_lowercase()))
            }
            ReplCommand::Help => Ok(Some(help_text())),
            ReplCommand::Quit => Ok(None),
        }
    }
}

fn print_banner() {
    println!(
        "\x1b[1mnamae\x1b[0m {} - type a name, :help for commands, Ctrl+D to exit",
        env!("CARGO_PKG_VERSION")
    );
}

fn help_text() -> String {
    [
        "Enter one or more names separated by ';' or 'and'.",
        "",
        "  :json          print records as JSON",
        "  :text          print records as text",
        "  :split TEXT    show name units without classifying",
        "  :help          show this help",
        "  :quit          exit",
    ]
    .join("\n")
}
