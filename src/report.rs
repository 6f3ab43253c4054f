//! Reporting capability handed to every component.
//!
//! Components never talk to a global logger directly; they receive a `&dyn Reporter`.
//! The binary passes [`LogReporter`], which forwards to the `log` facade, and tests pass a
//! [`MemoryReporter`] to assert on what was emitted.
use log::Level;
use std::cell::RefCell;

pub trait Reporter {
    /// Emits one message at the given level.
    fn report(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.report(Level::Info, message)
    }

    fn warn(&self, message: &str) {
        self.report(Level::Warn, message)
    }

    fn error(&self, message: &str) {
        self.report(Level::Error, message)
    }

    fn debug(&self, message: &str) {
        self.report(Level::Debug, message)
    }
}

/// Forwards messages to whichever `log` backend the process installed.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, level: Level, message: &str) {
        log::log!(target: "sheetdb", level, "{message}");
    }
}

/// Keeps every message in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    messages: RefCell<Vec<(Level, String)>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages emitted so far, in order.
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.borrow().clone()
    }

    /// Messages emitted at exactly `level`.
    pub fn at(&self, level: Level) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(message_level, _)| *message_level == level)
            .map(|(_, message)| message.to_owned())
            .collect()
    }

    pub fn contains(&self, level: Level, fragment: &str) -> bool {
        self.at(level).iter().any(|message| message.contains(fragment))
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, level: Level, message: &str) {
        self.messages.borrow_mut().push((level, message.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_reporter_keeps_order_and_level() {
        let reporter = MemoryReporter::new();
        reporter.info("opening");
        reporter.warn("dropped sheet 'X'");
        reporter.info("done");

        assert_eq!(reporter.messages().len(), 3);
        assert_eq!(reporter.at(Level::Info), vec!["opening", "done"]);
        assert!(reporter.contains(Level::Warn, "'X'"));
        assert!(!reporter.contains(Level::Error, "'X'"));
    }
}
