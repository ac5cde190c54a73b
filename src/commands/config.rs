//! Config subcommands handler

use anyhow::Result;
use std::fs;
use std::io::{self, BufRead, Write};

use webmem::config::migrate_config;
use webmem::Config;

/// Show current configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    print!("{}", toml_str);
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;

    // Ensure config exists
    if !config_path.exists() {
        let config = Config::default();
        config.save()?;
    }

    // Get editor from environment
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!("Opening {} with {}", config_path.display(), editor);

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;

    Ok(())
}

/// Migrate config file by adding missing fields.
///
/// Reads the existing config file (or empty if it doesn't exist),
/// adds any missing fields from the current default config,
/// shows a preview of changes, and prompts for confirmation.
pub fn handle_migrate() -> Result<()> {
    let config_path = Config::config_path()?;
    let file_exists = config_path.exists();

    // Read existing content (empty string if file doesn't exist)
    let content = if file_exists {
        fs::read_to_string(&config_path)?
    } else {
        String::new()
    };

    // Run migration
    let result = migrate_config(&content)?;

    // Case 1: No changes needed
    if !result.has_changes() {
        println!("Config is already up to date.");
        return Ok(());
    }

    // Case 2: Config file doesn't exist - offer to create with full defaults
    if !file_exists {
        println!("Config file does not exist. Will create with default settings.");
        println!();
        print_preview(&result.content, &result.added_fields, true);
        println!();

        if !prompt_confirmation(&format!("Create {}?", config_path.display()))? {
            println!("No changes made.");
            return Ok(());
        }

        // Create config directory and write file
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, &result.content)?;
        println!("Config file created successfully.");
        return Ok(());
    }

    // Case 3: Config exists but has missing fields - show diff and confirm
    let total_fields = result.added_fields.len();
    let total_sections = result.sections_added.len();

    if total_sections > 0 {
        println!(
            "Found {} missing field(s) in {} new section(s):",
            total_fields, total_sections
        );
    } else {
        println!("Found {} missing field(s):", total_fields);
    }
    println!();

    print_preview(&result.content, &result.added_fields, false);
    println!();

    if !prompt_confirmation(&format!(
        "Apply these changes to {}?",
        config_path.display()
    ))? {
        println!("No changes made.");
        return Ok(());
    }

    fs::write(&config_path, &result.content)?;
    println!("Config updated successfully.");

    Ok(())
}

/// Print a diff-style preview of the config changes.
///
/// Shows lines that contain added fields with a `+` prefix.
/// For new files, shows all content as additions.
fn print_preview(new_content: &str, added_fields: &[String], is_new_file: bool) {
    // Build a set of field names (without section prefix) for quick lookup
    let added_keys: std::collections::HashSet<&str> = added_fields
        .iter()
        .filter_map(|f| f.split('.').next_back())
        .collect();

    let mut current_section = String::new();

    for line in new_content.lines() {
        let trimmed = line.trim();

        // Track section headers
        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            let section_name = &trimmed[1..trimmed.len() - 1];
            let is_added_section = added_fields
                .iter()
                .any(|f| f.starts_with(&format!("{}.", section_name)));

            current_section = section_name.to_string();

            if is_new_file || is_added_section {
                println!("+ {}", line);
            } else {
                println!("  {}", line);
            }
            continue;
        }

        // Check if this line is a field assignment
        if let Some(eq_pos) = trimmed.find('=') {
            let key = trimmed[..eq_pos].trim();
            let is_added = added_keys.contains(key)
                && added_fields.contains(&format!("{}.{}", current_section, key));

            if is_new_file || is_added {
                println!("+ {}", line);
            } else {
                println!("  {}", line);
            }
        } else if !trimmed.is_empty() {
            println!("  {}", line);
        }
    }
}

/// Prompt user for yes/no confirmation.
///
/// Returns true if user confirms (y/yes), false otherwise.
/// If stdin is not a TTY (non-interactive), returns false.
fn prompt_confirmation(message: &str) -> Result<bool> {
    // Check if stdin is a TTY - if not, skip prompt and return false
    if !atty::is(atty::Stream::Stdin) {
        println!("Non-interactive mode: no changes applied");
        return Ok(false);
    }

    print!("{} [y/N] ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
