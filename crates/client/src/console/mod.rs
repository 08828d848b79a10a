//! Foreground colour stack for console output.
//!
//! Each `ColorStack` owns its writer and the colours it has replaced, so
//! independent outputs never share state.

use std::io::Write;

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use tracing::debug;

use crate::config::ConsoleConfig;
use crate::ConsoleError;

/// Stack of foreground colours applied to a writer.
///
/// `None` stands for the terminal's default colour.
#[derive(Debug)]
pub struct ColorStack<W: Write> {
    out: W,
    current: Option<Color>,
    saved: Vec<Option<Color>>,
    enabled: bool,
    ignore_errors: bool,
}

impl<W: Write> ColorStack<W> {
    /// Create a stack that surfaces errors unless `ignore_errors` is set.
    pub fn new(out: W, ignore_errors: bool) -> Self {
        Self {
            out,
            current: None,
            saved: Vec::new(),
            enabled: true,
            ignore_errors,
        }
    }

    pub fn from_config(out: W, config: &ConsoleConfig) -> Self {
        let mut stack = Self::new(out, config.ignore_errors);
        stack.enabled = config.colors;
        stack
    }

    /// Number of colours that can still be popped.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn current(&self) -> Option<Color> {
        self.current
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Save the current colour and switch to `color`.
    ///
    /// A write failure that is returned to the caller leaves the stack as it was.
    pub fn push(&mut self, color: Color) -> Result<(), ConsoleError> {
        let previous = self.current;
        self.saved.push(previous);
        self.current = Some(color);
        let result = self.apply(Some(color));
        let result = self.check(result);
        if result.is_err() {
            self.saved.pop();
            self.current = previous;
        }
        result
    }

    /// Restore the colour saved by the matching `push`.
    pub fn pop(&mut self) -> Result<(), ConsoleError> {
        let Some(previous) = self.saved.pop() else {
            return self.check(Err(ConsoleError::EmptyStack));
        };
        self.current = previous;
        let result = self.apply(previous);
        self.check(result)
    }

    /// Run `f` with `color` pushed, popping afterwards.
    pub fn scoped<T>(
        &mut self,
        color: Color,
        f: impl FnOnce(&mut W) -> T,
    ) -> Result<T, ConsoleError> {
        self.push(color)?;
        let value = f(&mut self.out);
        self.pop()?;
        Ok(value)
    }

    fn apply(&mut self, color: Option<Color>) -> Result<(), ConsoleError> {
        if !self.enabled {
            return Ok(());
        }
        match color {
            Some(c) => self.out.queue(SetForegroundColor(c))?,
            None => self.out.queue(ResetColor)?,
        };
        self.out.flush()?;
        Ok(())
    }

    fn check(&self, result: Result<(), ConsoleError>) -> Result<(), ConsoleError> {
        match result {
            Err(e) if self.ignore_errors => {
                debug!(error = %e, "Ignoring console error");
                Ok(())
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn ansi(color: Option<Color>) -> Vec<u8> {
        let mut out: Vec<u8> = Vec::new();
        match color {
            Some(c) => out.queue(SetForegroundColor(c)).unwrap(),
            None => out.queue(ResetColor).unwrap(),
        };
        out
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_push_pop_restores_previous() {
        let mut stack = ColorStack::new(Vec::<u8>::new(), false);
        stack.push(Color::Red).unwrap();
        stack.push(Color::Green).unwrap();
        assert_eq!(stack.depth(), 2);

        stack.pop().unwrap();
        assert_eq!(stack.current(), Some(Color::Red));
        stack.pop().unwrap();
        assert_eq!(stack.current(), None);

        let mut expected = ansi(Some(Color::Red));
        expected.extend(ansi(Some(Color::Green)));
        expected.extend(ansi(Some(Color::Red)));
        expected.extend(ansi(None));
        assert_eq!(stack.into_inner(), expected);
    }

    #[test]
    fn test_pop_empty_is_error() {
        let mut stack = ColorStack::new(Vec::<u8>::new(), false);
        assert!(matches!(stack.pop(), Err(ConsoleError::EmptyStack)));
    }

    #[test]
    fn test_pop_empty_ignored_by_policy() {
        let mut stack = ColorStack::new(Vec::<u8>::new(), true);
        assert!(stack.pop().is_ok());
        assert!(stack.into_inner().is_empty());
    }

    #[test]
    fn test_write_failure_surfaces() {
        let mut stack = ColorStack::new(BrokenPipe, false);
        assert!(matches!(stack.push(Color::Blue), Err(ConsoleError::Io(_))));
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.current(), None);
    }

    #[test]
    fn test_scoped_write_failure_leaves_stack_unchanged() {
        let mut stack = ColorStack::new(BrokenPipe, false);
        let mut ran = false;
        let result = stack.scoped(Color::Red, |_| ran = true);
        assert!(matches!(result, Err(ConsoleError::Io(_))));
        assert!(!ran);
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.current(), None);
        assert!(matches!(stack.pop(), Err(ConsoleError::EmptyStack)));
    }

    #[test]
    fn test_write_failure_ignored_by_policy() {
        let mut stack = ColorStack::new(BrokenPipe, true);
        assert!(stack.push(Color::Blue).is_ok());
        assert!(stack.pop().is_ok());
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_scoped_wraps_output() {
        let mut stack = ColorStack::new(Vec::<u8>::new(), false);
        let n = stack
            .scoped(Color::Yellow, |out| out.write(b"hi").unwrap())
            .unwrap();
        assert_eq!(n, 2);
        assert_eq!(stack.depth(), 0);

        let mut expected = ansi(Some(Color::Yellow));
        expected.extend_from_slice(b"hi");
        expected.extend(ansi(None));
        assert_eq!(stack.into_inner(), expected);
    }

    #[test]
    fn test_disabled_writes_nothing() {
        let config = ConsoleConfig {
            colors: false,
            ignore_errors: false,
        };
        let mut stack = ColorStack::from_config(Vec::<u8>::new(), &config);
        stack.push(Color::Red).unwrap();
        assert_eq!(stack.current(), Some(Color::Red));
        stack.pop().unwrap();
        assert!(stack.into_inner().is_empty());
    }
}
