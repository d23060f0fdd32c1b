// ABOUTME: CLI for validating RSS documents with the cascade-rss binding engine.
// ABOUTME: Reads a feed from file or stdin and prints JSON, or re-emits XML in roundtrip mode.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use cascade_rss::{read_bytes, write, WriteOptions};
use clap::Parser;
use serde_json::json;

/// Validate one or more RSS 2.0 documents and output JSON.
#[derive(Parser, Debug)]
#[command(name = "cascade-cli")]
#[command(about = "Validate RSS documents with cascade-rss and print JSON", long_about = None)]
struct Args {
    /// Local file path(s). Use "-" to read one document from stdin.
    #[arg(required = true)]
    targets: Vec<String>,

    /// Re-emit the parsed document as XML instead of a JSON report
    /// (only valid when a single target is provided).
    #[arg(long, default_value_t = false)]
    roundtrip: bool,

    /// In roundtrip mode, keep the source generator element instead of
    /// stamping this tool's own.
    #[arg(long, default_value_t = false)]
    keep_generator: bool,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.roundtrip && args.targets.len() > 1 {
        bail!("--roundtrip is only valid when parsing a single target");
    }

    if args.roundtrip {
        let target = &args.targets[0];
        let parsed = read_bytes(&load_bytes(target)?)
            .map_err(|err| anyhow!("{}: {}", target, err))?;
        let options = WriteOptions {
            stamp_generator: !args.keep_generator,
        };
        println!("{}", write(&parsed.rss, &parsed.session, &options)?);
        return Ok(());
    }

    let mut results = Vec::new();

    for target in &args.targets {
        match load_bytes(target).and_then(|bytes| read_bytes(&bytes).map_err(anyhow::Error::new)) {
            Ok(parsed) => results.push(json!({
                "target": target,
                "ok": true,
                "rss": parsed.rss,
                "error": null
            })),
            Err(err) => results.push(json!({
                "target": target,
                "ok": false,
                "rss": null,
                "error": err.to_string()
            })),
        }
    }

    // Output format:
    // - Single target and ok => emit the rss object on its own
    // - Otherwise emit an envelope with a documents array and counts
    let output = if args.targets.len() == 1 {
        if let Some(first) = results.first() {
            if first.get("ok").and_then(|v| v.as_bool()) == Some(true) {
                first.get("rss").cloned().unwrap_or_else(|| json!({}))
            } else {
                json!({ "documents": results, "total": results.len(), "parsed": 0, "failed": 1 })
            }
        } else {
            json!({})
        }
    } else {
        let parsed = results
            .iter()
            .filter(|r| r.get("ok").and_then(|v| v.as_bool()) == Some(true))
            .count();
        let failed = results.len() - parsed;
        json!({
            "documents": results,
            "total": results.len(),
            "parsed": parsed,
            "failed": failed
        })
    };

    if args.compact {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}

fn load_bytes(target: &str) -> Result<Vec<u8>> {
    if target == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    Ok(fs::read(path)?)
}
