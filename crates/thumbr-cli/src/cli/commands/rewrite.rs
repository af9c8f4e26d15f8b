//! `thumbr rewrite [URL]...` – print the URL to render for each reference.

use anyhow::{Context, Result};
use serde_json::Value;
use std::io::{self, BufRead, Read, Write};
use thumbr_core::config::RewriterConfig;
use thumbr_core::ImageRewriter;

pub fn run_rewrite(cfg: RewriterConfig, urls: &[String], json: bool) -> Result<()> {
    let rewriter = ImageRewriter::new(cfg)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        rewrite_json(&rewriter, io::stdin().lock(), &mut out)?;
    } else if urls.is_empty() {
        rewrite_lines(&rewriter, io::stdin().lock(), &mut out)?;
    } else {
        for url in urls {
            writeln!(out, "{}", rewriter.optimize(url.as_str()))?;
        }
    }
    out.flush()?;
    Ok(())
}

/// One reference per line; `\n` and `\r\n` endings are stripped, nothing else is.
/// A line that is not valid UTF-8 is not text and gets the placeholder.
pub(crate) fn rewrite_lines<R: BufRead, W: Write>(
    rewriter: &ImageRewriter,
    input: R,
    out: &mut W,
) -> Result<()> {
    for line in input.split(b'\n') {
        let line = line.context("read stdin")?;
        let line = line.strip_suffix(b"\r").unwrap_or(line.as_slice());
        let rewritten = match std::str::from_utf8(line) {
            Ok(text) => rewriter.optimize(text),
            Err(e) => {
                tracing::debug!(error = %e, "non-UTF-8 line on stdin");
                rewriter.optimize(None::<&str>)
            }
        };
        writeln!(out, "{}", rewritten)?;
    }
    Ok(())
}

/// A JSON array rewrites element-wise; any other value is a single reference.
pub(crate) fn rewrite_json<R: Read, W: Write>(
    rewriter: &ImageRewriter,
    input: R,
    out: &mut W,
) -> Result<()> {
    let value: Value = serde_json::from_reader(input).context("parse JSON from stdin")?;
    match &value {
        Value::Array(items) => {
            for item in items {
                writeln!(out, "{}", rewriter.optimize(item))?;
            }
        }
        other => writeln!(out, "{}", rewriter.optimize(other))?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use thumbr_core::config::PLACEHOLDER_URL;

    fn lines_of(buf: Vec<u8>) -> Vec<String> {
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn rewrites_each_line() {
        let rewriter = ImageRewriter::default();
        let input = Cursor::new("https://example.com/a.jpg\n/lesson-images/b.png\n\n");
        let mut out = Vec::new();
        rewrite_lines(&rewriter, input, &mut out).unwrap();
        assert_eq!(
            lines_of(out),
            vec![
                "https://images.weserv.nl/?url=https%3A%2F%2Fexample.com%2Fa.jpg&w=480&q=80",
                "/lesson-images/b.png",
                PLACEHOLDER_URL,
            ]
        );
    }

    #[test]
    fn invalid_utf8_line_gets_placeholder_and_batch_continues() {
        let rewriter = ImageRewriter::default();
        let input = Cursor::new(b"https://a/x.jpg\n\xff\xfe\r\nhttps://b/y.jpg\r\n".to_vec());
        let mut out = Vec::new();
        rewrite_lines(&rewriter, input, &mut out).unwrap();
        assert_eq!(
            lines_of(out),
            vec![
                "https://images.weserv.nl/?url=https%3A%2F%2Fa%2Fx.jpg&w=480&q=80",
                PLACEHOLDER_URL,
                "https://images.weserv.nl/?url=https%3A%2F%2Fb%2Fy.jpg&w=480&q=80",
            ]
        );
    }

    #[test]
    fn rewrites_json_array() {
        let rewriter = ImageRewriter::default();
        let input = Cursor::new(r#"[null, 42, "", "https://images.weserv.nl/?url=x"]"#);
        let mut out = Vec::new();
        rewrite_json(&rewriter, input, &mut out).unwrap();
        assert_eq!(
            lines_of(out),
            vec![
                PLACEHOLDER_URL,
                PLACEHOLDER_URL,
                PLACEHOLDER_URL,
                "https://images.weserv.nl/?url=x",
            ]
        );
    }

    #[test]
    fn rewrites_single_json_value() {
        let rewriter = ImageRewriter::default();
        let mut out = Vec::new();
        rewrite_json(&rewriter, Cursor::new("{\"a\": 1}"), &mut out).unwrap();
        assert_eq!(lines_of(out), vec![PLACEHOLDER_URL]);
    }

    #[test]
    fn rejects_malformed_json() {
        let rewriter = ImageRewriter::default();
        let mut out = Vec::new();
        assert!(rewrite_json(&rewriter, Cursor::new("[1,"), &mut out).is_err());
    }
}
