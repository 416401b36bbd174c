use super::render::print_entry;
use super::ParseArgs;
use crate::timeline::parse_day;
use anyhow::Context;
use std::io::Read;

pub fn execute(args: ParseArgs) -> anyhow::Result<()> {
    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read day text from stdin")?;
            buffer
        }
    };

    let entries = parse_day(&text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("(no timeline entries recognized)");
        return Ok(());
    }
    for entry in &entries {
        print_entry(entry);
    }
    Ok(())
}
