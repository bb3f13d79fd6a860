use crate::history::ConversionHistory;
use crate::session::command::parse_batch_line;
use crate::session::converter::convert_text;
use crate::units::{Domain, UnknownUnitPolicy};
use tracing::{info, warn};

/// A line of batch input that could not be converted
#[derive(Debug, Clone, PartialEq)]
pub struct BatchFailure {
    /// 1-based line number in the input
    pub line: usize,
    pub message: String,
}

/// Successful conversions in input order, plus every line that failed
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub history: ConversionHistory,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn converted(&self) -> usize {
        self.history.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Convert every line of `content`. Blank lines and `#` comments are skipped,
/// and a failing line never stops the lines after it.
pub fn run_batch(content: &str, policy: UnknownUnitPolicy) -> BatchReport {
    let mut history = ConversionHistory::new();
    let mut failures = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        let parsed = match parse_batch_line(line) {
            None => continue,
            Some(parsed) => parsed,
        };

        let outcome = parsed.and_then(|line| {
            let domain: Domain = line.domain.parse().map_err(|e| format!("{}", e))?;
            convert_text(domain, &line.value, &line.from_unit, &line.to_unit, policy)
                .map_err(|e| e.user_message())
        });

        match outcome {
            Ok(record) => history.append(record),
            Err(message) => {
                warn!(line = line_no, %message, "batch line skipped");
                failures.push(BatchFailure {
                    line: line_no,
                    message,
                });
            }
        }
    }

    info!(converted = history.len(), failures = failures.len(), "batch finished");
    BatchReport { history, failures }
}
