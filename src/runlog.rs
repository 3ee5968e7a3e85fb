use tracing::info;

/// Ordered diagnostics for one run. The log ships inside the digest itself
/// under the reserved bucket, so operators see failures without separate
/// monitoring. Created at run start, sealed at run end, never persisted.
#[derive(Debug, Default)]
pub struct RunLog {
    lines: Vec<String>,
}

impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, line: impl Into<String>) {
        let line = line.into();
        info!("{}", line);
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Seal the log into a single bucket entry; None when nothing was logged.
    pub fn into_entry(self, separator: &str) -> Option<String> {
        if self.lines.is_empty() {
            None
        } else {
            Some(self.lines.join(separator))
        }
    }
}
