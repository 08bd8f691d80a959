use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory submitted documents are written to
    #[arg(short, long, default_value = "submitted")]
    pub out_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing curriculum workspace...".bright_blue().bold()
    );

    let config = Config {
        out_dir: args.out_dir,
        ..Config::default()
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    let out_dir = config.get_out_dir(cwd);
    if !out_dir.exists() {
        fs::create_dir_all(&out_dir)?;
        println!("  {} Created {}/", "✓".green(), config.out_dir);
    }

    println!();
    println!("{}", "✨ Workspace initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Put a generated course JSON in this directory");
    println!("  2. Run {} to check it", "curriculum validate <file>".cyan());
    println!(
        "  3. Run {} to send it",
        "curriculum submit <file> --id <generation>".cyan()
    );

    Ok(())
}
