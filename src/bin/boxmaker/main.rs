//! Boxmaker entrypoint: draw a bordered box around a title and content.
//!
//! Content comes from the second argument, or from standard input when it is
//! `-` or omitted.

use anyhow::{Context, Result};
use boxmaker::config::CliConfig;
use boxmaker::telemetry::init_tracing;
use std::io::{self, Read, Write};

fn main() -> Result<()> {
    let config = CliConfig::parse_args()?;
    init_tracing(&config);

    let content = if config.reads_stdin() {
        read_stdin()?
    } else {
        config.content.clone().unwrap_or_default()
    };

    let text_box = config.to_text_box(config.color_mode())?;
    let rendered = text_box.render(&config.title, &content)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("failed to write box to stdout")?;
    stdout.flush()?;
    Ok(())
}

/// Read all of stdin, dropping the final line terminator so piped text does
/// not gain a blank line at the bottom of the box.
fn read_stdin() -> Result<String> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("failed to read content from stdin")?;
    if content.ends_with('\n') {
        content.pop();
        if content.ends_with('\r') {
            content.pop();
        }
    }
    Ok(content)
}
