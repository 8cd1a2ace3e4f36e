use crate::{Transaction, Verdict, VerdictStatus, validation::TransactionValidator};
use anyhow::Context;
use serde::Deserialize;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// One validation request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub authenticated_account: String,
    pub transaction: Transaction,
}

/// Totals for a processed request stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub accepted: usize,
    pub rejected: usize,
    pub malformed: usize,
}

impl Summary {
    fn record(&mut self, verdict: &Verdict) {
        match verdict.status {
            VerdictStatus::Accepted => self.accepted += 1,
            VerdictStatus::Rejected => self.rejected += 1,
            VerdictStatus::Malformed => self.malformed += 1,
        }
    }
}

/// Validate the request on a single line
///
/// A line that is not a valid request yields a `malformed` verdict rather
/// than an error, so one bad line never stops the stream.
pub fn process_line(validator: &TransactionValidator, line: usize, text: &str) -> Verdict {
    let request: Request = match serde_json::from_str(text) {
        Ok(request) => request,
        Err(e) => {
            warn!("Line {}: malformed request: {}", line, e);
            return Verdict::malformed(line, e.to_string());
        }
    };

    match validator.validate(&request.authenticated_account, &request.transaction) {
        Ok(()) => {
            debug!("Line {}: transaction accepted", line);
            Verdict::accepted(line)
        }
        Err(e) => {
            info!("Line {}: transaction rejected: {}", line, e);
            Verdict::rejected(line, e)
        }
    }
}

/// Process every request in `reader`, writing verdicts as JSON lines to `writer`
///
/// Blank lines are skipped but still counted for line numbering. Lines that
/// are not UTF-8 get a `malformed` verdict. Only I/O and serialization
/// failures are returned as errors.
pub fn process_requests<R: BufRead, W: Write>(
    validator: &TransactionValidator,
    reader: R,
    mut writer: W,
) -> anyhow::Result<Summary> {
    let mut summary = Summary::default();

    for (index, bytes) in reader.split(b'\n').enumerate() {
        let line = index + 1;
        let bytes = bytes.with_context(|| format!("failed to read request line {}", line))?;

        let verdict = match std::str::from_utf8(&bytes) {
            Ok(text) if text.trim().is_empty() => continue,
            Ok(text) => process_line(validator, line, text),
            Err(e) => {
                warn!("Line {}: request is not valid UTF-8: {}", line, e);
                Verdict::malformed(line, e.to_string())
            }
        };
        summary.record(&verdict);

        serde_json::to_writer(&mut writer, &verdict)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(summary)
}
