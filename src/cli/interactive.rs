use super::convert::{convert_with_spinner, display_error};
use super::ui;
use crate::core::{BASE_CURRENCY, RateFetcher};
use anyhow::{Context, Result};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

/// Reads amounts line by line until an empty line, `q` or EOF.
///
/// Every line shares `fetcher`, so rates are reused across lines while the
/// cache is fresh. A failed line is rendered and the session continues.
pub async fn run<R, W>(input: R, out: &mut W, fetcher: &RateFetcher) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let prompt = ui::style_text(&format!("Amount ({BASE_CURRENCY}):"), ui::StyleType::TotalLabel);
    let mut lines = input.lines();

    loop {
        write!(out, "{prompt} ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() || line.eq_ignore_ascii_case("q") {
            break;
        }

        match convert_with_spinner(line, fetcher).await {
            Ok(result) => writeln!(out, "{}\n", result.display_as_table())?,
            Err(e) => {
                debug!(input = line, error = %e, "Conversion failed");
                writeln!(out, "{}\n", display_error(&e))?
            }
        }
    }

    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RateCache;
    use crate::core::fetcher::tests::MockQuoteProvider;
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn test_session_reuses_cached_rates() {
        let provider = MockQuoteProvider::new(5.0, 6.0);
        let calls = Arc::clone(&provider.calls);
        let fetcher = RateFetcher::new(Box::new(provider), Arc::new(RateCache::new()));

        let input: &[u8] = b"100\n-5\nabc\n50\nq\n999\n";
        let mut out = Vec::new();
        run(input, &mut out, &fetcher).await.unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("US$ 20,00"));
        assert!(output.contains("US$ 10,00"));
        assert_eq!(
            output
                .matches("Please enter a valid amount greater than zero.")
                .count(),
            2
        );
        // Stopped at "q"
        assert!(!output.contains("R$ 999,00"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_session_continues_after_network_error() {
        let provider = MockQuoteProvider::new(5.0, 6.0);
        let fail = Arc::clone(&provider.fail);
        fail.store(true, Ordering::SeqCst);
        let fetcher = RateFetcher::new(Box::new(provider), Arc::new(RateCache::new()));

        let input: &[u8] = b"50\n";
        let mut out = Vec::new();
        run(input, &mut out, &fetcher).await.unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Could not fetch exchange rates. Please try again."));
        assert!(!output.contains("US$"));
    }
}
