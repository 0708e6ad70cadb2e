use anyhow::Result;
use colored::Colorize;
use launcher_core::Envelope;

/// Write the envelope to stdout as a single JSON document
pub fn print_envelope(envelope: &Envelope, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(envelope)?
    } else {
        serde_json::to_string(envelope)?
    };
    println!("{}", json);
    Ok(())
}

pub fn output_error(err: &anyhow::Error) {
    eprintln!("{}: {:#}", "Error".red().bold(), err);
}
