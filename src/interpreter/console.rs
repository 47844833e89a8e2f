use std::{
    collections::VecDeque,
    io::{self, BufRead},
};

/// The line-oriented I/O capability a running program talks to.
///
/// The evaluator never touches stdin or stdout directly; `print` and the
/// `inputi` prompt go through [`Console::output`], and `inputi` reads through
/// [`Console::get_input`].
pub trait Console {
    /// Emits one line of program output.
    fn output(&mut self, line: &str);

    /// Reads one line of input without its line terminator.
    ///
    /// Returns `None` once the input stream is exhausted.
    fn get_input(&mut self) -> Option<String>;
}

/// A console bound to the process's standard input and output.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn output(&mut self, line: &str) {
        println!("{line}");
    }

    fn get_input(&mut self) -> Option<String> {
        let mut buf = String::new();
        match io::stdin().lock().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(strip_line_ending(buf)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read from stdin");
                None
            },
        }
    }
}

/// A console fed from a fixed list of input lines that records every line
/// of output.
///
/// Used by tests and by the command line `--input` option.
///
/// # Example
/// ```
/// use brewin::interpreter::console::{Console, ScriptedConsole};
///
/// let mut console = ScriptedConsole::new(["7"]);
/// console.output("x?");
///
/// assert_eq!(console.get_input(), Some("7".to_string()));
/// assert_eq!(console.get_input(), None);
/// assert_eq!(console.lines(), ["x?"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    input:  VecDeque<String>,
    output: Vec<String>,
    echo:   bool,
}

impl ScriptedConsole {
    /// Creates a console that will hand out `input` one line at a time.
    pub fn new<I, S>(input: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { input:  input.into_iter().map(Into::into).collect(),
               output: Vec::new(),
               echo:   false, }
    }

    /// Also prints every output line to stdout as it is recorded.
    #[must_use]
    pub const fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// The output lines recorded so far.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.output
    }

    /// The number of input lines not yet consumed.
    #[must_use]
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn output(&mut self, line: &str) {
        if self.echo {
            println!("{line}");
        }
        self.output.push(line.to_string());
    }

    fn get_input(&mut self) -> Option<String> {
        self.input.pop_front()
    }
}

fn strip_line_ending(mut line: String) -> String {
    while line.ends_with(['\n', '\r']) {
        line.pop();
    }
    line
}
