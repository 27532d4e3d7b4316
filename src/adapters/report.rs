use crate::domain::model::{Report, ReportLevel};
use crate::domain::ports::ReportSink;
use std::io::Write;

/// Writes each report as one line of text, errors prefixed with `Error:`.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl ConsoleReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ReportSink for ConsoleReporter<W> {
    fn report(&mut self, report: Report) {
        let written = match report.level {
            ReportLevel::Error => writeln!(self.writer, "Error: {}", report.message),
            ReportLevel::Info | ReportLevel::Warning => writeln!(self.writer, "{}", report.message),
        };
        if let Err(e) = written.and_then(|_| self.writer.flush()) {
            tracing::error!("❌ Failed to write report: {}", e);
        }
    }
}

/// Keeps every report in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryReporter {
    reports: Vec<Report>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn messages(&self) -> Vec<&str> {
        self.reports.iter().map(|r| r.message.as_str()).collect()
    }

    pub fn last(&self) -> Option<&Report> {
        self.reports.last()
    }

    pub fn take(&mut self) -> Vec<Report> {
        std::mem::take(&mut self.reports)
    }
}

impl ReportSink for MemoryReporter {
    fn report(&mut self, report: Report) {
        self.reports.push(report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_reporter_prefixes_errors() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.report(Report::info("Container KON-L-0001 loaded onto Ship 1."));
        reporter.report(Report::warning("Cannot load container. Maximum weight exceeded."));
        reporter.report(Report::error("Invalid ship number."));

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            output,
            "Container KON-L-0001 loaded onto Ship 1.\n\
             Cannot load container. Maximum weight exceeded.\n\
             Error: Invalid ship number.\n"
        );
    }

    #[test]
    fn test_memory_reporter_take_drains() {
        let mut reporter = MemoryReporter::new();
        reporter.report(Report::info("one"));
        reporter.report(Report::warning("two"));
        assert_eq!(reporter.messages(), vec!["one", "two"]);
        assert_eq!(reporter.last().map(|r| r.level), Some(ReportLevel::Warning));

        assert_eq!(reporter.take().len(), 2);
        assert!(reporter.reports().is_empty());
    }
}
