use std::io::Write;

use anyhow::Result;

fn main() -> Result<()> {
    // Diagnostics go to stderr at a default level that emits nothing;
    // stdout carries only the report lines.
    tracing_subscriber::fmt()
        .with_env_filter("lapbench=info")
        .with_writer(std::io::stderr)
        .init();

    let report = lapbench::run();

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(lapbench::format_report(&report).as_bytes())?;
    stdout.flush()?;

    Ok(())
}
