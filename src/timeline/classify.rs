use regex::Regex;

/// How a single line of day text participates in the timeline grammar.
#[derive(Debug, PartialEq)]
pub enum LineClass<'a> {
    /// `>` followed by a label; only honored on the first line
    DayHeader(&'a str),
    /// `--` with an optional `H:MM AM|PM --` time token, then title text
    EventStart {
        time: Option<&'a str>,
        title: &'a str,
    },
    /// Anything else attaches to the currently open event
    Continuation(&'a str),
}

pub struct Classifier {
    header_re: Regex,
    event_re: Regex,
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            header_re: Regex::new(r"^>\s*(\S.*)$").expect("static pattern"),
            event_re: Regex::new(r"^--\s*(?:(\d{1,2}:\d{2}\s*(?:AM|PM))\s*--)?\s*(.*)$")
                .expect("static pattern"),
        }
    }

    /// Classify a line at the start of the input, where a day header is valid
    pub fn classify_first<'a>(&self, line: &'a str) -> LineClass<'a> {
        if let Some(caps) = self.header_re.captures(line) {
            if let Some(label) = caps.get(1) {
                return LineClass::DayHeader(label.as_str().trim());
            }
        }
        self.classify(line)
    }

    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if let Some(caps) = self.event_re.captures(line) {
            let time = caps.get(1).map(|m| m.as_str().trim());
            let title = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
            return LineClass::EventStart { time, title };
        }
        LineClass::Continuation(line)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
