#[cfg(test)]
mod test;

use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufRead, BufReader, Write as IoWrite},
    path::PathBuf,
};

#[derive(PartialEq, Eq, Debug, Hash, Clone)]
pub enum Source {
    File { path: PathBuf },
    Interactive { label: String },
}

impl Source {
    pub fn label(&self) -> String {
        match self {
            Source::File { path } => path.display().to_string(),
            Source::Interactive { label } => label.clone(),
        }
    }
}

/// A 1-indexed line and column.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Clone, Copy)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

#[derive(PartialEq, Eq, Debug, Hash, Clone)]
pub struct Location {
    pub source: Source,
    pub position: Option<Position>,
}

#[derive(PartialEq, Eq, Debug, Hash, Clone)]
pub struct Message {
    pub content: String,
    pub addendum: Option<String>,
}

#[derive(Default)]
pub struct Diagnostic {
    items: Vec<Message>,
    located_items: Vec<(Location, Message)>,
}

impl Diagnostic {
    pub fn new() -> Self {
        Diagnostic {
            items: Vec::new(),
            located_items: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.located_items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len() + self.located_items.len()
    }

    pub fn item(&mut self, location: Option<Location>, message: Message) {
        match location {
            None => self.items.push(message),
            Some(location) => {
                // Items at the same position keep their insertion order.
                match self
                    .located_items
                    .binary_search_by_key(&location.position, |i| i.0.position)
                {
                    Err(ix) => self.located_items.insert(ix, (location, message)),
                    Ok(ix) => self.located_items.insert(ix + 1, (location, message)),
                }
            }
        }
    }

    pub fn report_error_heading(path: &str, position: Option<Position>, message: &str) -> String {
        let mut str = String::from(path);
        str.push(':');
        if let Some(position) = position {
            str.push_str(&format!("{}:{}:", position.line, position.column));
        }
        str.push(' ');
        str.push_str("error: ");
        str.push_str(message);
        str
    }

    pub fn report_located_message(
        line: usize,
        column: usize,
        path: &str,
        line_str: &str,
        message: &Message,
    ) -> String {
        let mut result = String::new();
        let caret: String = {
            let mut caret: String = " ".repeat(column.saturating_sub(1));
            caret.push('^');
            caret
        };
        let line1 =
            Self::report_error_heading(path, Some(Position { line, column }), &message.content);
        let padding: String = " ".repeat(line.to_string().len());

        let line2 = format!("{} |", padding);
        let line3 = format!("{} | {}", line, line_str);
        let line4 = format!("{} | {}", padding, caret);

        result.push_str(&line1);
        result.push('\n');
        result.push_str(&line2);
        result.push('\n');
        result.push_str(&line3);
        result.push('\n');
        result.push_str(&line4);
        if let Some(addendum) = &message.addendum {
            result.push('\n');
            result.push_str(addendum.as_str());
        }
        result
    }

    fn report_message(message: &Message) -> String {
        let mut result = format!("error: {}", message.content);
        if let Some(addendum) = &message.addendum {
            result.push('\n');
            result.push_str(addendum.as_str());
        }
        result
    }

    /// Write every item to `out`, unlocated items first.
    ///
    /// Items located in a file are shown with an excerpt of the offending line
    /// when that line can still be read.
    pub fn report_all(self, out: &mut dyn IoWrite) -> io::Result<()> {
        for message in self.items.iter() {
            writeln!(out, "{}", Self::report_message(message))?;
        }

        let mut lines: HashMap<PathBuf, Vec<String>> = HashMap::new();
        for (location, message) in self.located_items.iter() {
            let label = location.source.label();
            let result = match (&location.source, location.position) {
                (Source::File { path }, Some(position)) => {
                    let file_lines = lines
                        .entry(path.clone())
                        .or_insert_with(|| read_lines(path).unwrap_or_default());
                    match position
                        .line
                        .checked_sub(1)
                        .and_then(|ix| file_lines.get(ix))
                    {
                        Some(line_str) => Self::report_located_message(
                            position.line,
                            position.column,
                            &label,
                            line_str,
                            message,
                        ),
                        None => Self::report_error_heading(
                            &label,
                            Some(position),
                            &message.content,
                        ),
                    }
                }
                (_, position) => {
                    let mut heading =
                        Self::report_error_heading(&label, position, &message.content);
                    if let Some(addendum) = &message.addendum {
                        heading.push('\n');
                        heading.push_str(addendum);
                    }
                    heading
                }
            };
            writeln!(out, "{}", result)?;
        }
        Ok(())
    }
}

fn read_lines(path: &PathBuf) -> io::Result<Vec<String>> {
    let file = BufReader::new(File::open(path)?);
    file.lines().collect()
}
