use crate::core::{Announcement, ConfigProvider};
use crate::utils::error::Result;
use std::io::Write;

pub struct StatusPrinter<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> StatusPrinter<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn announcement(&self) -> Announcement {
        Announcement::from_config(&self.config)
    }

    /// Writes the announcement to standard output.
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle)
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let announcement = self.announcement();
        tracing::debug!("Announcing {} on port {}", announcement.benchmark_name, announcement.port);

        for line in announcement.lines() {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;

        tracing::debug!("Status lines written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DEFAULT_PORT;

    struct FixedConfig;

    impl ConfigProvider for FixedConfig {
        fn benchmark_name(&self) -> &str {
            "Test Bench"
        }

        fn port(&self) -> u16 {
            DEFAULT_PORT
        }

        fn visit_hint(&self) -> &str {
            "Open the page"
        }
    }

    #[test]
    fn test_write_to_buffer() {
        let printer = StatusPrinter::new(FixedConfig);
        let mut buffer = Vec::new();
        printer.write_to(&mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "Starting Test Bench...\nApplication is running on port 7860. Open the page\n"
        );
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let printer = StatusPrinter::new(FixedConfig);
        let err = printer.write_to(&mut ClosedPipe).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
