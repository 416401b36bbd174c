use super::InitArgs;
use crate::config::Config;
use anyhow::{bail, Context};

pub fn execute(args: InitArgs) -> anyhow::Result<()> {
    if args.path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        );
    }

    let yaml = serde_yaml::to_string(&Config::default())?;
    std::fs::write(&args.path, yaml)
        .with_context(|| format!("failed to write {}", args.path.display()))?;

    println!("Wrote {}", args.path.display());
    println!("Edit the agent and flow base URLs, then run `tripflow profile --phone <number>`.");
    Ok(())
}
