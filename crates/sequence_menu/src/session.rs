use std::io::{self, BufRead, Write};

use sequence::{ALL_BACKINGS, ALL_ELEMENT_TYPES, AnySequence, Backing, ElementType, Value};
use thiserror::Error;

use crate::input::{Tokens, parse_int, parse_value};

#[derive(Debug, Error)]
pub enum MenuError {
    #[error(transparent)]
    Sequence(#[from] sequence::Error),
    #[error("console I/O failed")]
    Io(#[from] io::Error),
    #[error("end of input")]
    EndOfInput,
}

type MenuResult<T> = std::result::Result<T, MenuError>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    Show,
    Append,
    Prepend,
    Remove,
    InsertAt,
    Get,
    Subsequence,
    Concat,
    AddSequence,
    RemoveSequence,
    Exit,
}

pub const ALL_ACTIONS: [Action; 11] = [
    Action::Show,
    Action::Append,
    Action::Prepend,
    Action::Remove,
    Action::InsertAt,
    Action::Get,
    Action::Subsequence,
    Action::Concat,
    Action::AddSequence,
    Action::RemoveSequence,
    Action::Exit,
];

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Self::Show => "Show",
            Self::Append => "Append",
            Self::Prepend => "Prepend",
            Self::Remove => "Remove element",
            Self::InsertAt => "Insert element at index",
            Self::Get => "Get element by index",
            Self::Subsequence => "Get subsequence",
            Self::Concat => "Concat sequences",
            Self::AddSequence => "Add sequence",
            Self::RemoveSequence => "Remove sequence",
            Self::Exit => "Exit",
        }
    }

    /// Menu choices are numbered from 1.
    pub fn from_choice(choice: i64) -> Option<Self> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        ALL_ACTIONS.get(index).copied()
    }

    pub fn needs_sequences(self) -> bool {
        !matches!(self, Self::AddSequence | Self::Exit)
    }
}

enum Flow {
    Continue,
    Exit,
}

/// One interactive session over a growing collection of sequences.
pub struct Session<R, W> {
    tokens: Tokens<R>,
    out: W,
    sequences: Vec<AnySequence>,
    quiet: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            tokens: Tokens::new(input),
            out,
            sequences: Vec::new(),
            quiet: false,
        }
    }

    /// Skip the action list before each prompt.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn sequences(&self) -> &[AnySequence] {
        &self.sequences
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs until Exit or end of input. Errors from an action are printed and the loop
    /// goes on; only I/O failures end the session early.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) | Err(MenuError::EndOfInput) => {
                    writeln!(self.out, "Exiting...")?;
                    return self.out.flush();
                }
                Err(MenuError::Sequence(err)) => writeln!(self.out, "Error: {err}")?,
                Err(MenuError::Io(err)) => return Err(err),
            }
        }
    }

    fn step(&mut self) -> MenuResult<Flow> {
        if !self.quiet {
            writeln!(self.out)?;
            for (i, action) in ALL_ACTIONS.iter().enumerate() {
                writeln!(self.out, "{}. {}", i + 1, action.label())?;
            }
        }
        let choice = self.read_int("\nChoose action: ")?;
        let action = Action::from_choice(choice);
        if action.is_none_or(Action::needs_sequences) && self.sequences.is_empty() {
            writeln!(self.out, "No sequences yet. Add a sequence first.\n")?;
            return Ok(Flow::Continue);
        }
        let Some(action) = action else {
            writeln!(self.out, "Invalid action.")?;
            return Ok(Flow::Continue);
        };

        match action {
            Action::Show => self.show()?,
            Action::Append | Action::Prepend => {
                let idx = self.pick_sequence("Choose sequence index")?;
                let element = self.sequences[idx].element_type();
                let prompt = match action {
                    Action::Append => "Enter value to append: ",
                    _ => "Enter value to prepend: ",
                };
                let value = self.read_value(element, prompt)?;
                match action {
                    Action::Append => self.sequences[idx].append(value)?,
                    _ => self.sequences[idx].prepend(value)?,
                }
            }
            Action::Remove => {
                let idx = self.pick_sequence("Choose sequence index")?;
                let len = self.sequences[idx].len();
                writeln!(self.out, "Valid index: 0 to {}", len as i64 - 1)?;
                let index = self.read_int("Enter index to remove: ")?;
                let removed = self.sequences[idx].remove(index)?;
                writeln!(self.out, "Removed: {removed}")?;
            }
            Action::InsertAt => {
                let idx = self.pick_sequence("Choose sequence index")?;
                let len = self.sequences[idx].len();
                writeln!(self.out, "Valid position: 0 to {len}")?;
                let index = self.read_int("Enter position: ")?;
                if index < 0 || index as u64 > len as u64 {
                    return Err(sequence::Error::IndexOutOfRange { index, len }.into());
                }
                let element = self.sequences[idx].element_type();
                let value = self.read_value(element, "Enter value: ")?;
                self.sequences[idx].insert_at(value, index)?;
            }
            Action::Get => {
                let idx = self.pick_sequence("Choose sequence index")?;
                let len = self.sequences[idx].len();
                writeln!(self.out, "Valid index: 0 to {}", len as i64 - 1)?;
                let index = self.read_int("Enter index to get: ")?;
                let value = self.sequences[idx].get(index)?;
                writeln!(self.out, "Element: {value}")?;
            }
            Action::Subsequence => {
                let idx = self.pick_sequence("Choose sequence index")?;
                let len = self.sequences[idx].len();
                writeln!(self.out, "Valid range: 0 to {}", len as i64 - 1)?;
                let start = self.read_int("Enter start: ")?;
                let end = self.read_int("Enter end: ")?;
                let sub = self.sequences[idx].subsequence(start, end)?;
                self.sequences.push(sub);
                writeln!(
                    self.out,
                    "Subsequence added as index {}",
                    self.sequences.len() - 1
                )?;
            }
            Action::Concat => {
                let first = self.pick_sequence("First sequence index")?;
                let second = self.pick_sequence("Second sequence index")?;
                let joined = self.sequences[first].concat(&self.sequences[second])?;
                self.sequences.push(joined);
                writeln!(
                    self.out,
                    "Concatenated sequence added as index {}",
                    self.sequences.len() - 1
                )?;
            }
            Action::AddSequence => {
                let element = self.pick_element_type()?;
                let backing = self.pick_backing()?;
                self.sequences.push(AnySequence::new(element, backing));
                writeln!(
                    self.out,
                    "Sequence added as index {}",
                    self.sequences.len() - 1
                )?;
            }
            Action::RemoveSequence => {
                let idx = self.pick_sequence("Index to remove")?;
                self.sequences.remove(idx);
            }
            Action::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn show(&mut self) -> MenuResult<()> {
        for (i, seq) in self.sequences.iter().enumerate() {
            let mut items = String::from("[ ");
            for value in seq.values() {
                items.push_str(&value.to_string());
                items.push(' ');
            }
            items.push(']');
            writeln!(
                self.out,
                "{i}: {items} (Type: {}, Structure: {})",
                seq.element_type(),
                seq.backing()
            )?;
        }
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> MenuResult<String> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        self.tokens.next_token()?.ok_or(MenuError::EndOfInput)
    }

    fn read_int(&mut self, prompt: &str) -> MenuResult<i64> {
        let token = self.prompt(prompt)?;
        parse_int(&token).map_err(|err| {
            self.tokens.discard_line();
            err.into()
        })
    }

    fn read_value(&mut self, element: ElementType, prompt: &str) -> MenuResult<Value> {
        let token = self.prompt(prompt)?;
        parse_value(element, token).map_err(|err| {
            self.tokens.discard_line();
            err.into()
        })
    }

    fn pick_sequence(&mut self, label: &str) -> MenuResult<usize> {
        let len = self.sequences.len();
        let index = self.read_int(&format!("{label} (0 to {}): ", len - 1))?;
        usize::try_from(index)
            .ok()
            .filter(|&i| i < len)
            .ok_or(sequence::Error::IndexOutOfRange { index, len }.into())
    }

    fn pick_element_type(&mut self) -> MenuResult<ElementType> {
        writeln!(self.out, "\nSelect type:")?;
        for (i, element) in ALL_ELEMENT_TYPES.iter().enumerate() {
            writeln!(self.out, "{}. {element}", i + 1)?;
        }
        let choice = self.read_int("Enter type: ")?;
        pick(&ALL_ELEMENT_TYPES, choice).ok_or_else(|| {
            sequence::Error::InvalidArgument(format!("no type numbered {choice}")).into()
        })
    }

    fn pick_backing(&mut self) -> MenuResult<Backing> {
        writeln!(self.out, "\nSelect structure:")?;
        for (i, backing) in ALL_BACKINGS.iter().enumerate() {
            writeln!(self.out, "{}. {backing}", i + 1)?;
        }
        let choice = self.read_int("Enter structure: ")?;
        pick(&ALL_BACKINGS, choice).ok_or_else(|| {
            sequence::Error::InvalidArgument(format!("no structure numbered {choice}")).into()
        })
    }
}

fn pick<T: Copy>(options: &[T], choice: i64) -> Option<T> {
    let index = usize::try_from(choice).ok()?.checked_sub(1)?;
    options.get(index).copied()
}
