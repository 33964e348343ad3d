use colored::*;
use directories::ProjectDirs;
use shipmate::commands::{self, CmdMessage, MessageLevel};
use shipmate::config::ShipmateConfig;
use shipmate::converter::CommandConverter;
use shipmate::error::Result;
use shipmate::prompt::{self, PauseMode};
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    config: ShipmateConfig,
    project_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context();

    match cli.command {
        Commands::Checklist { file, section } => handle_checklist(&ctx, file, section),
        Commands::Credentials { file, converter } => handle_credentials(&ctx, file, converter),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_context() -> AppContext {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_dir = cwd.join(".shipmate");

    // Project config wins; otherwise the per-user config dir; a malformed
    // file falls back to defaults rather than aborting.
    let config = if project_dir.join("config.json").exists() {
        ShipmateConfig::load(&project_dir).unwrap_or_default()
    } else if let Some(proj_dirs) = ProjectDirs::from("com", "shipmate", "shipmate") {
        ShipmateConfig::load(proj_dirs.config_dir()).unwrap_or_default()
    } else {
        ShipmateConfig::default()
    };

    AppContext {
        config,
        project_dir,
    }
}

fn handle_checklist(
    ctx: &AppContext,
    file: Option<PathBuf>,
    section: Option<String>,
) -> Result<()> {
    let path = file.unwrap_or_else(|| PathBuf::from(&ctx.config.checklist_path));
    let marker = section.unwrap_or_else(|| ctx.config.checklist_section.clone());

    let result = commands::checklist::run(&path, &marker)?;
    for item in &result.items {
        println!("{}", item);
    }
    print_messages(&result.messages);

    if !result.items.is_empty() {
        prompt::pause(PauseMode::detect())?;
    }
    Ok(())
}

fn handle_credentials(
    ctx: &AppContext,
    file: Option<PathBuf>,
    converter: Option<String>,
) -> Result<()> {
    let path = file.unwrap_or_else(|| PathBuf::from(&ctx.config.credentials_path));
    let program = converter.unwrap_or_else(|| ctx.config.converter_command.clone());

    let converter = CommandConverter::new(program);
    let result = commands::credentials::run(&converter, &path);
    if let Some(dump) = &result.dump {
        // Verbatim: no trailing newline added beyond what the dump carries
        print!("{}", dump);
        io::stdout().flush()?;
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for (key, value) in ctx.config.entries() {
                println!("{} = {}", key, value);
            }
        }
        (Some(key), None) => match ctx.config.get(&key) {
            Some(value) => println!("{} = {}", key, value),
            None => println!("Unknown config key: {}", key),
        },
        (Some(key), Some(value)) => {
            let mut config = ctx.config.clone();
            if !config.set(&key, &value) {
                println!("Unknown config key: {}", key);
                return Ok(());
            }
            config.save(&ctx.project_dir)?;
            print_messages(&[CmdMessage::success(format!("{} = {}", key, value))]);
        }
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
