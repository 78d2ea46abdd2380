//! Directive template parsing for log output.
//!
//! Templates are scanned left to right; `%` introduces a one-character
//! directive, any other character is copied verbatim. Unknown directives
//! (and a lone trailing `%`) are dropped silently.

use chrono::{Datelike, Local, Timelike};

use crate::output::LogRecord;

/// A one-character substitution recognized after `%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `%Y` — full year.
    Year,
    /// `%M` — month, 1-12.
    Month,
    /// `%D` — day of month.
    Day,
    /// `%H` — hour, 0-23.
    Hour,
    /// `%m` — minute.
    Minute,
    /// `%S` — second.
    Second,
    /// `%N` — nanosecond within the current second.
    Nanosecond,
    /// `%d` — composite date, `YYYY-MM-DD@HH-MM-SS`.
    Date,
    /// `%h` — composite time, `HH:MM:SS:` plus nine nanosecond digits.
    Clock,
    /// `%T` — the record's call-site trace.
    Trace,
    /// `%C` — the record's content.
    Content,
    /// `%n` — the record's sequence number.
    Sequence,
    /// `%t` — the level's display name.
    LevelName,
}

impl Directive {
    const fn from_char(c: char) -> Option<Self> {
        match c {
            'Y' => Some(Self::Year),
            'M' => Some(Self::Month),
            'D' => Some(Self::Day),
            'H' => Some(Self::Hour),
            'm' => Some(Self::Minute),
            'S' => Some(Self::Second),
            'N' => Some(Self::Nanosecond),
            'd' => Some(Self::Date),
            'h' => Some(Self::Clock),
            'T' => Some(Self::Trace),
            'C' => Some(Self::Content),
            'n' => Some(Self::Sequence),
            't' => Some(Self::LevelName),
            _ => None,
        }
    }
}

/// A parsed segment of a template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text copied verbatim.
    Literal(String),
    /// A directive to be substituted.
    Directive(Directive),
}

/// A parsed directive template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    segments: Vec<Segment>,
}

impl FormatTemplate {
    /// Parses a template string.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars();

        while let Some(c) = chars.next() {
            if c == '%' {
                // The next character is consumed either way; unknown
                // directives and a trailing '%' render as nothing.
                if let Some(directive) = chars.next().and_then(Directive::from_char) {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Directive(directive));
                }
            } else {
                literal.push(c);
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    /// Returns the parsed segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Renders the template against a record.
    ///
    /// Time directives sample the wall clock independently of one another;
    /// the window between two directives in one template is sub-millisecond.
    /// Single-field numerics render as plain decimal; only the composite
    /// `%d`/`%h` forms are zero-padded.
    #[must_use]
    pub fn render(&self, record: &LogRecord) -> String {
        let mut out = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Directive(directive) => match directive {
                    Directive::Year => out.push_str(&Local::now().year().to_string()),
                    Directive::Month => out.push_str(&Local::now().month().to_string()),
                    Directive::Day => out.push_str(&Local::now().day().to_string()),
                    Directive::Hour => out.push_str(&Local::now().hour().to_string()),
                    Directive::Minute => out.push_str(&Local::now().minute().to_string()),
                    Directive::Second => out.push_str(&Local::now().second().to_string()),
                    Directive::Nanosecond => {
                        out.push_str(&Local::now().nanosecond().to_string());
                    }
                    Directive::Date => out.push_str(&current_date()),
                    Directive::Clock => out.push_str(&current_clock()),
                    Directive::Trace => out.push_str(&record.trace),
                    Directive::Content => out.push_str(&record.content),
                    Directive::Sequence => out.push_str(&record.sequence.to_string()),
                    Directive::LevelName => out.push_str(record.level.as_str()),
                },
            }
        }

        out
    }
}

/// Zero-padded `YYYY-MM-DD@HH-MM-SS`, also used for session file names.
pub(crate) fn current_date() -> String {
    Local::now().format("%Y-%m-%d@%H-%M-%S").to_string()
}

/// Zero-padded `HH:MM:SS:` followed by nine nanosecond digits.
fn current_clock() -> String {
    Local::now().format("%H:%M:%S:%f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    fn record() -> LogRecord {
        LogRecord {
            sequence: 3,
            level: Level::Debug,
            trace: "main:10".to_string(),
            content: "hello\n".to_string(),
        }
    }

    #[test]
    fn parse_splits_literals_and_directives() {
        let template = FormatTemplate::parse("[%T]\t%C");
        assert_eq!(
            template.segments(),
            &[
                Segment::Literal("[".to_string()),
                Segment::Directive(Directive::Trace),
                Segment::Literal("]\t".to_string()),
                Segment::Directive(Directive::Content),
            ]
        );
    }

    #[test]
    fn unknown_directive_is_dropped() {
        let template = FormatTemplate::parse("a%zb");
        assert_eq!(template.render(&record()), "ab");
    }

    #[test]
    fn trailing_percent_is_dropped() {
        let template = FormatTemplate::parse("abc%");
        assert_eq!(template.render(&record()), "abc");
    }

    #[test]
    fn renders_record_fields() {
        let template = FormatTemplate::parse("[%n-%t]\t[%T]\t%C");
        assert_eq!(template.render(&record()), "[3-DEBUG]\t[main:10]\thello\n");
    }

    #[test]
    fn composite_date_shape() {
        let date = current_date();
        assert_eq!(date.len(), "2026-01-01@00-00-00".len());
        assert_eq!(&date[4..5], "-");
        assert_eq!(&date[10..11], "@");
    }
}
