use std::io::{BufRead, Write};

use crate::core::errors::{Result, TrustError};

/// The human (or script) driving a trust batch.
///
/// Every message goes to `output` (stderr in the binary) so stdout stays
/// clean; `input` is read only to answer the trust prompt.
pub struct Operator<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Operator<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of text.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Ask a yes/no question until the answer is exactly `yes` or `no`.
    ///
    /// End of input before a valid answer is an error, never an implicit no.
    /// An answer must be terminated by a newline.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        loop {
            self.say(question)?;

            let mut line = String::new();
            self.input
                .read_line(&mut line)
                .map_err(|e| TrustError::Input {
                    reason: e.to_string(),
                })?;
            let Some(answer) = line.strip_suffix('\n') else {
                return Err(TrustError::Input {
                    reason: "unexpected end of input".into(),
                });
            };
            let answer = answer.strip_suffix('\r').unwrap_or(answer);
            match answer {
                "yes" => return Ok(true),
                "no" => return Ok(false),
                _ => self.say("Please enter 'yes' or 'no'")?,
            }
        }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }
}
