//! Implementation of the `promptpad templates` subcommands.

use crate::cli::{ExportArgs, ShowArgs};
use crate::config::Config;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::templates::{Catalog, Template};
use std::fmt::Write;
use std::path::Path;

/// Execute `promptpad templates list`.
pub fn cmd_list(config_path: Option<&Path>) -> Result<()> {
    let catalog = Config::resolve(config_path)?.catalog()?;
    print!("{}", render_list(&catalog));
    Ok(())
}

/// Execute `promptpad templates show <id>`.
pub fn cmd_show(config_path: Option<&Path>, args: ShowArgs) -> Result<()> {
    let catalog = Config::resolve(config_path)?.catalog()?;
    let template = catalog.require(&args.id)?;
    print!("{}", render_template(template));
    Ok(())
}

/// Execute `promptpad templates export`.
pub fn cmd_export(config_path: Option<&Path>, args: ExportArgs) -> Result<()> {
    let catalog = Config::resolve(config_path)?.catalog()?;
    let yaml = catalog.to_yaml()?;

    match args.out {
        Some(path) => {
            atomic_write_file(&path, &yaml)?;
            println!(
                "Exported {} templates to {}",
                catalog.templates().count(),
                path.display()
            );
        }
        None => print!("{}", yaml),
    }

    Ok(())
}

fn render_list(catalog: &Catalog) -> String {
    let mut out = String::new();

    for group in catalog.groups() {
        let _ = writeln!(out, "{}:", group.name);
        for template in &group.templates {
            let count = template.examples().len();
            let _ = writeln!(
                out,
                "  {:<26} {} ({} example{})",
                template.id,
                template.name,
                count,
                if count == 1 { "" } else { "s" }
            );
        }
        out.push('\n');
    }

    out
}

fn render_template(template: &Template) -> String {
    let payload = &template.action_payload;
    let mut out = String::new();

    let _ = writeln!(out, "{} ({})", template.name, template.id);
    let _ = writeln!(out, "Tab: {}", payload.tab_index);

    let overrides = &payload.overrides;
    if !overrides.is_empty() {
        let _ = writeln!(out, "Overrides:");
        if let Some(v) = overrides.temperature {
            let _ = writeln!(out, "  temperature: {}", v);
        }
        if let Some(v) = overrides.top_p {
            let _ = writeln!(out, "  top_p: {}", v);
        }
        if let Some(v) = overrides.frequency_penalty {
            let _ = writeln!(out, "  frequency_penalty: {}", v);
        }
        if let Some(v) = overrides.presence_penalty {
            let _ = writeln!(out, "  presence_penalty: {}", v);
        }
        if let Some(v) = overrides.max_tokens {
            let _ = writeln!(out, "  max_tokens: {}", v);
        }
        if let Some(symbols) = &overrides.stop_symbols {
            let quoted: Vec<String> = symbols.iter().map(|s| format!("{:?}", s)).collect();
            let _ = writeln!(out, "  stop_symbols: [{}]", quoted.join(", "));
        }
    }

    let _ = writeln!(out, "Examples:");
    if payload.examples.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for (i, example) in payload.examples.iter().enumerate() {
        let first_line = example.text.lines().next().unwrap_or("");
        let more = if example.text.lines().count() > 1 { " ..." } else { "" };
        let _ = writeln!(out, "  [{}] {}{}", i, first_line, more);
    }

    let _ = writeln!(out, "Prompt:");
    let _ = writeln!(out, "{}", payload.prompt);

    out
}
