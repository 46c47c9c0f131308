//! Profile Form - interactive demo.
//!
//! Drives the form core from a terminal: edits pass through the same
//! pipeline a UI would use, phone input is masked as typed, and error
//! messages appear once a field has been touched.

use anyhow::Result;
use profile_form::{Config, FieldId, ProfileForm};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr, so the prompt stays readable on stdout)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let mut form = ProfileForm::from_config(&config);

    println!("Profile settings");
    println!("Commands: show | set <field> <value> | touch <field> | submit | quit");
    println!("Fields: full_name, username, bio, email, phone");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, args) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match command {
            "show" => show(&form),
            "set" => {
                let (name, value) = match args.split_once(char::is_whitespace) {
                    Some((name, value)) => (name, value.trim()),
                    None => (args, ""),
                };
                match FieldId::from_name(name) {
                    Some(field) => {
                        let verdict = form.edit(field, value);
                        form.touch(field);
                        println!("{} = {:?} ({:?})", field, form.value(field), verdict);
                        if let Some(message) = form.error_message(field) {
                            println!("  {}", message);
                        }
                    }
                    None => println!("Unknown field: {}", name),
                }
            }
            "touch" => match FieldId::from_name(args) {
                Some(field) => form.touch(field),
                None => println!("Unknown field: {}", args),
            },
            "submit" => match form.submit() {
                Some(snapshot) => println!("Submitted: {}", serde_json::to_string(&snapshot)?),
                None => {
                    println!("Form is invalid:");
                    for field in FieldId::ALL {
                        if let Some(kind) = form.verdict(field).error() {
                            println!("  {}: {}", field, profile_form::message(field, kind));
                        }
                    }
                }
            },
            "quit" | "exit" => break,
            other => {
                error!("unknown command: {}", other);
                println!("Unknown command: {}", other);
            }
        }
    }

    info!("Profile form demo shutdown complete");
    Ok(())
}

fn show(form: &ProfileForm) {
    for field in FieldId::ALL {
        let marker = if form.verdict(field).is_valid() { "ok" } else { "!!" };
        println!("  [{}] {} = {:?}", marker, field, form.value(field));
        if let Some(message) = form.error_message(field) {
            println!("       {}", message);
        }
    }
    println!(
        "  form {}",
        if form.is_valid() { "valid" } else { "invalid" }
    );
}
