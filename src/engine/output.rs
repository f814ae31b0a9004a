use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum OutputBlock {
    Title(String),
    Text(String),
    Event(String),
    Exits(String),
}

impl OutputBlock {
    pub fn as_str(&self) -> &str {
        match self {
            OutputBlock::Title(s)
            | OutputBlock::Text(s)
            | OutputBlock::Event(s)
            | OutputBlock::Exits(s) => s,
        }
    }
}

/// Everything one turn wants to show, in order.
#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }

    pub fn set_exits(&mut self, s: impl Into<String>) {
        let s = s.into();
        if s.trim().is_empty() {
            return;
        }

        // at most one Exits block per turn
        self.blocks.retain(|b| !matches!(b, OutputBlock::Exits(_)));
        self.blocks.push(OutputBlock::Exits(s));
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All blocks joined by newlines, without any layout.
    pub fn text(&self) -> String {
        self.blocks
            .iter()
            .map(OutputBlock::as_str)
            .collect::<Vec<&str>>()
            .join("\n")
    }
}

/// Terminal layout: a blank line above each title, and one more before the
/// first event when something was already shown.
impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut started_events = false;

        for (i, block) in self.blocks.iter().enumerate() {
            match block {
                OutputBlock::Title(t) => writeln!(f, "\n{}", t)?,
                OutputBlock::Event(ev) => {
                    if !started_events && i > 0 {
                        writeln!(f)?;
                    }
                    started_events = true;
                    writeln!(f, "{}", ev)?;
                }
                OutputBlock::Text(line) | OutputBlock::Exits(line) => writeln!(f, "{}", line)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_dropped() {
        let mut out = Output::new();
        out.say("  ");
        out.event("");
        out.title("\n");
        assert!(out.is_empty());
    }

    #[test]
    fn only_one_exits_block_survives() {
        let mut out = Output::new();
        out.set_exits("Exits: north");
        out.say("hello");
        out.set_exits("Exits: south");

        assert_eq!(
            out.blocks,
            vec![
                OutputBlock::Text("hello".to_string()),
                OutputBlock::Exits("Exits: south".to_string()),
            ]
        );
        assert_eq!(out.text(), "hello\nExits: south");
    }

    #[test]
    fn display_spaces_titles_and_events() {
        let mut out = Output::new();
        out.title("Kitchen");
        out.say("You are in the kitchen");
        out.event("Something growls");
        out.event("Run!");
        out.set_exits("Exits: west");

        assert_eq!(
            out.to_string(),
            "\nKitchen\nYou are in the kitchen\n\nSomething growls\nRun!\nExits: west\n"
        );
    }

    #[test]
    fn leading_event_gets_no_blank_line() {
        let mut out = Output::new();
        out.event("The beast caught you");
        out.say("Good bye.");
        assert_eq!(out.to_string(), "The beast caught you\nGood bye.\n");
        assert_eq!(Output::new().to_string(), "");
    }
}
