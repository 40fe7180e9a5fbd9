use std::borrow::Cow;

use crate::span::Span;

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub struct Error {
    message: Cow<'static, str>,
    span: Span,
}

#[inline]
pub fn error_span(message: impl Into<Cow<'static, str>>, span: Span) -> Error {
    Error {
        message: message.into(),
        span,
    }
}

impl Error {
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Render the error against the source it was produced from.
    pub fn render<'a>(&'a self, src: &'a str) -> Render<'a> {
        Render { error: self, src }
    }
}

impl<T> From<Error> for Result<T> {
    #[inline]
    fn from(value: Error) -> Self {
        Err(value)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error at {}: {}", self.span, self.message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

pub struct Render<'a> {
    error: &'a Error,
    src: &'a str,
}

impl std::fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "error: {}", self.error.message)?;

        let span = self.error.span;

        // spans produced from a different source are rendered without a snippet
        let start = span.start();
        if start > self.src.len() || !self.src.is_char_boundary(start) {
            return Ok(());
        }

        let line_start = self.src[..start].rfind('\n').map(|i| i + 1).unwrap_or(0);
        let line_end = self.src[start..]
            .find('\n')
            .map(|i| start + i)
            .unwrap_or(self.src.len());
        let line_no = self.src[..line_start].matches('\n').count() + 1;
        let line = &self.src[line_start..line_end];

        let gutter = line_no.to_string();
        let pad = " ".repeat(gutter.len());
        let column = self.src[line_start..start].chars().count();
        let width = span.end().min(line_end).saturating_sub(start).max(1);

        writeln!(f, "{pad} |")?;
        writeln!(f, "{gutter} | {line}")?;
        write!(f, "{pad} | {}{}", " ".repeat(column), "^".repeat(width))
    }
}
