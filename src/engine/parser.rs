//! Turning raw input lines into [`Command`]s.
//!
//! The first whitespace-separated word picks the verb, the second becomes the
//! argument, anything after that is ignored. Verbs are matched without regard
//! to case; arguments are passed through as typed.

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Go,
    Quit,
    Help,
    Look,
    Take,
    Drop,
    Items,
    Eat,
    Back,
}

impl Verb {
    pub const ALL: [Verb; 9] = [
        Verb::Go,
        Verb::Quit,
        Verb::Help,
        Verb::Look,
        Verb::Take,
        Verb::Drop,
        Verb::Items,
        Verb::Eat,
        Verb::Back,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Go => "go",
            Verb::Quit => "quit",
            Verb::Help => "help",
            Verb::Look => "look",
            Verb::Take => "take",
            Verb::Drop => "drop",
            Verb::Items => "items",
            Verb::Eat => "eat",
            Verb::Back => "back",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVerb;

impl FromStr for Verb {
    type Err = UnknownVerb;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verb::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or(UnknownVerb)
    }
}

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    verb: Option<Verb>,
    argument: Option<String>,
}

impl Command {
    pub fn new(verb: Verb, argument: Option<&str>) -> Self {
        Command {
            verb: Some(verb),
            argument: argument.map(str::to_string),
        }
    }

    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let verb = words.next().and_then(|w| w.parse::<Verb>().ok());
        let argument = words.next().map(str::to_string);
        Command { verb, argument }
    }

    pub fn verb(&self) -> Option<Verb> {
        self.verb
    }

    pub fn is_unknown(&self) -> bool {
        self.verb.is_none()
    }

    pub fn has_argument(&self) -> bool {
        self.argument.is_some()
    }

    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }
}

/// Where the game loop gets its next command from. `Ok(None)` means input is exhausted.
pub trait CommandSource {
    fn next_command(&mut self) -> io::Result<Option<Command>>;
}

/// Reads commands line by line, prompting before each read.
pub struct LineReader<R, W> {
    input: R,
    prompt: W,
}

impl<R: BufRead, W: Write> LineReader<R, W> {
    pub fn new(input: R, prompt: W) -> Self {
        LineReader { input, prompt }
    }
}

impl<R: BufRead, W: Write> CommandSource for LineReader<R, W> {
    fn next_command(&mut self) -> io::Result<Option<Command>> {
        loop {
            write!(self.prompt, "> ")?;
            self.prompt.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            if line.trim().is_empty() {
                continue;
            }
            return Ok(Some(Command::parse(&line)));
        }
    }
}

/// A fixed list of commands, handy for tests and demos.
#[derive(Debug, Default)]
pub struct Script {
    commands: VecDeque<Command>,
}

impl Script {
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        Script {
            commands: lines.into_iter().map(Command::parse).collect(),
        }
    }
}

impl CommandSource for Script {
    fn next_command(&mut self) -> io::Result<Option<Command>> {
        Ok(self.commands.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_verb_and_argument() {
        let cmd = Command::parse("go north");
        assert_eq!(cmd.verb(), Some(Verb::Go));
        assert_eq!(cmd.argument(), Some("north"));
        assert!(!cmd.is_unknown());
    }

    #[test]
    fn extra_words_are_ignored() {
        let cmd = Command::parse("  take   the apple  ");
        assert_eq!(cmd.verb(), Some(Verb::Take));
        assert_eq!(cmd.argument(), Some("the"));
    }

    #[test]
    fn verbs_ignore_case() {
        assert_eq!(Command::parse("LOOK").verb(), Some(Verb::Look));
        assert_eq!(Command::parse("Items").verb(), Some(Verb::Items));
    }

    #[test]
    fn unknown_words_and_blank_lines() {
        assert!(Command::parse("dance wildly").is_unknown());
        assert!(Command::parse("").is_unknown());
        assert!(!Command::parse("quit").has_argument());
    }

    #[test]
    fn every_verb_round_trips_through_its_word() {
        for verb in Verb::ALL {
            assert_eq!(verb.as_str().parse::<Verb>(), Ok(verb));
        }
    }

    #[test]
    fn line_reader_skips_blank_lines_and_prompts() {
        let input = "\n   \ngo west\nquit\n";
        let mut prompt = Vec::new();
        let mut reader = LineReader::new(input.as_bytes(), &mut prompt);

        assert_eq!(
            reader.next_command().unwrap(),
            Some(Command::new(Verb::Go, Some("west")))
        );
        assert_eq!(
            reader.next_command().unwrap(),
            Some(Command::new(Verb::Quit, None))
        );
        assert_eq!(reader.next_command().unwrap(), None);
        drop(reader);

        assert_eq!(String::from_utf8(prompt).unwrap(), "> ".repeat(5));
    }

    #[test]
    fn script_drains_in_order() {
        let mut script = Script::from_lines(["look", "eat apple"]);
        assert_eq!(
            script.next_command().unwrap(),
            Some(Command::new(Verb::Look, None))
        );
        assert_eq!(
            script.next_command().unwrap(),
            Some(Command::new(Verb::Eat, Some("apple")))
        );
        assert_eq!(script.next_command().unwrap(), None);
    }
}
