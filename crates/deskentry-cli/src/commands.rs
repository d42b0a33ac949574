//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result};
use deskentry_core::{
    build, platform, Category, DesktopEntryDocument, InstallTarget, Installer, Settings,
};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::args::{CreateArgs, FieldArgs};

/// Build the launcher and install it, printing the success message.
pub fn create(args: &CreateArgs, settings: &Settings) -> Result<()> {
    let spec = args.fields.to_spec()?;
    let doc = build(&spec)?;
    debug!("Built {}:\n{}", doc.file_name(), doc);

    let target = InstallTarget::from_selection(
        args.target.map(|t| t.as_str()),
        args.dir.as_deref(),
    )?;

    let installer = Installer::new(settings)?;

    if args.dry_run {
        let destination = installer.destination_for(&doc, target.as_ref())?;
        println!("{}", destination.display());
        return Ok(());
    }

    if let Some(InstallTarget::System) = &target {
        let helper = &installer.elevation().helper;
        if !platform::command_exists(helper) {
            warn!("Elevation helper '{}' was not found in PATH", helper);
        }
    }

    let installed = installer.install(&doc, target.as_ref())?;
    info!("Launcher written to {}", installed.display());

    if let Some(target) = &target {
        println!("{}", success_message(target));
    }
    Ok(())
}

/// Print the rendered document without installing it.
pub fn preview(fields: &FieldArgs) -> Result<()> {
    let doc = build(&fields.to_spec()?)?;
    print!("{}", doc);
    Ok(())
}

/// Print the keys of an existing desktop file.
pub fn inspect(file: &Path, as_json: bool) -> Result<()> {
    let doc = DesktopEntryDocument::read_from_file(file)
        .with_context(|| format!("Failed to inspect {}", file.display()))?;

    if as_json {
        let entries: serde_json::Map<String, serde_json::Value> = doc
            .entries()
            .iter()
            .map(|(k, v)| (k.clone(), json!(v)))
            .collect();
        let categories = doc.categories();
        let categories: Vec<&str> = categories.iter().map(Category::as_str).collect();
        let output = json!({
            "file_name": doc.file_name(),
            "entries": entries,
            "categories": categories,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for (key, value) in doc.entries() {
            println!("{:<12} {}", key, value);
        }
    }
    Ok(())
}

/// List the selectable categories in menu order.
pub fn categories() {
    for category in Category::ALL {
        println!("{}", category);
    }
}

pub fn success_message(target: &InstallTarget) -> String {
    match target {
        InstallTarget::System => "Desktop file created successfully (system-wide).".to_string(),
        other => format!(
            "Desktop file created successfully in {}!",
            other.description()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_success_messages() {
        assert_eq!(
            success_message(&InstallTarget::User),
            "Desktop file created successfully in user-only location!"
        );
        assert_eq!(
            success_message(&InstallTarget::Custom(PathBuf::from("/srv"))),
            "Desktop file created successfully in custom location!"
        );
        assert_eq!(
            success_message(&InstallTarget::System),
            "Desktop file created successfully (system-wide)."
        );
    }
}
