// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::{self, Write};

use crate::config::OutputFormat;

/// Write results one per line as they are produced.
///
/// Nothing is buffered beyond the writer's own buffer, so this is the path for
/// ranges of any length. Returns the number of lines written.
pub fn write_lines<W, I>(out: &mut W, results: I) -> io::Result<u64>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    let mut written = 0;
    for result in results {
        out.write_all(result.as_bytes())?;
        out.write_all(b"\n")?;
        written += 1;
    }
    Ok(written)
}

/// Render results in the requested format.
///
/// `Lines` output ends with a newline after the last result; the structured
/// formats are left to their serializers.
pub fn render(results: &[String], format: OutputFormat) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Lines => {
            let mut text = results.join("\n");
            if !results.is_empty() {
                text.push('\n');
            }
            text
        }
        OutputFormat::Json => {
            let mut text = serde_json::to_string_pretty(results)?;
            text.push('\n');
            text
        }
        OutputFormat::Yaml => serde_yaml::to_string(results)?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<String> {
        vec!["1".to_string(), "2".to_string(), "Fizz".to_string()]
    }

    #[test]
    fn test_lines() {
        assert_eq!(render(&sample(), OutputFormat::Lines).unwrap(), "1\n2\nFizz\n");
        assert_eq!(render(&[], OutputFormat::Lines).unwrap(), "");
    }

    #[test]
    fn test_write_lines_matches_render() {
        let mut out = Vec::new();
        let written = write_lines(&mut out, sample()).unwrap();
        assert_eq!(written, 3);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            render(&sample(), OutputFormat::Lines).unwrap()
        );
    }

    #[test]
    fn test_write_lines_consumes_lazily() {
        let mut out = Vec::new();
        let endless = (1..).map(|n: u64| n.to_string());
        write_lines(&mut out, endless.take(4)).unwrap();
        assert_eq!(out, b"1\n2\n3\n4\n");
    }

    #[test]
    fn test_json_keeps_numbers_as_strings() {
        let text = render(&sample(), OutputFormat::Json).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, sample());
        assert!(text.contains("\"1\""));
    }

    #[test]
    fn test_yaml_keeps_numbers_as_strings() {
        let text = render(&sample(), OutputFormat::Yaml).unwrap();
        let parsed: Vec<String> = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed, sample());
    }
}
