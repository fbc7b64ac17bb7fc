use crate::core::{OperatorPrompt, ValidationRecord};
use crate::utils::error::{ProvisionError, Result};
use std::io::{BufRead, BufReader, Stderr, Stdin, Write};
use std::sync::Mutex;

/// Shows the validation record and blocks until the operator presses Enter.
pub struct ConsolePrompt<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
}

impl<R, W> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }
}

impl ConsolePrompt<BufReader<Stdin>, Stderr> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stderr())
    }
}

impl<R, W> OperatorPrompt for ConsolePrompt<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn confirm(&self, record: &ValidationRecord) -> Result<()> {
        {
            let mut output = self.output.lock().map_err(|_| poisoned())?;
            writeln!(output, "\nAdd this CNAME record to the domain's DNS zone:")?;
            writeln!(output, "  Name:  {}", record.name)?;
            writeln!(output, "  Value: {}", record.value)?;
            write!(output, "Press Enter once the record is published... ")?;
            output.flush()?;
        }

        let mut line = String::new();
        let read = self
            .input
            .lock()
            .map_err(|_| poisoned())?
            .read_line(&mut line)?;
        if read == 0 {
            return Err(ProvisionError::ConfirmationAborted {
                message: "input closed before confirmation".to_string(),
            });
        }

        tracing::info!("👍 Operator confirmed DNS record {}", record.name);
        Ok(())
    }
}

fn poisoned() -> ProvisionError {
    ProvisionError::ConfirmationAborted {
        message: "prompt lock poisoned".to_string(),
    }
}

/// Confirms immediately, for automated environments.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl OperatorPrompt for AutoConfirm {
    fn confirm(&self, record: &ValidationRecord) -> Result<()> {
        tracing::info!(
            "Skipping confirmation prompt, assuming {} is published",
            record.name
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tokio_test::assert_ok;

    fn record() -> ValidationRecord {
        ValidationRecord::new("_acme.example.com", "tokenVal")
    }

    #[test]
    fn test_enter_confirms_and_shows_record() {
        let prompt = ConsolePrompt::new(Cursor::new(b"\n".to_vec()), Vec::new());
        assert_ok!(prompt.confirm(&record()));

        let shown = String::from_utf8(prompt.output.into_inner().unwrap()).unwrap();
        assert!(shown.contains("_acme.example.com"));
        assert!(shown.contains("tokenVal"));
    }

    #[test]
    fn test_closed_input_aborts() {
        let prompt = ConsolePrompt::new(Cursor::new(Vec::new()), Vec::new());
        assert!(matches!(
            prompt.confirm(&record()),
            Err(ProvisionError::ConfirmationAborted { .. })
        ));
    }

    #[test]
    fn test_auto_confirm() {
        assert_ok!(AutoConfirm.confirm(&record()));
    }
}
