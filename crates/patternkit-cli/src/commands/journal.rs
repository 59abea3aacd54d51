//! `patternkit journal` - the single-responsibility demo.
//!
//! The journal only keeps entries; saving is done by
//! [`JournalPersistence`] on top of the local filesystem adapter.

use std::path::PathBuf;

use patternkit_adapters::LocalFilesystem;
use patternkit_core::{
    application::JournalPersistence, domain::principles::single_responsibility::Journal,
};
use tracing::instrument;

use crate::{cli::JournalArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(entries = args.entries.len()))]
pub fn execute(args: JournalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let journal = build_journal(&args.entries);
    for line in journal.to_string().lines() {
        output.print(line)?;
    }

    let Some(path) = save_target(&args, &config) else {
        return Ok(());
    };
    let overwrite = args.force || config.journal.overwrite;

    let persistence = JournalPersistence::new(Box::new(LocalFilesystem::new()));
    if persistence.save(&journal, &path, overwrite)? {
        output.success(&format!("Journal saved to {}", path.display()))?;
    } else {
        output.warning(&format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ))?;
    }

    Ok(())
}

fn build_journal(entries: &[String]) -> Journal {
    let mut journal = Journal::new();
    for entry in entries {
        journal.add_entry(entry);
    }
    journal
}

/// `--output` wins; `--save` uses `journal.path`; neither means print only.
fn save_target(args: &JournalArgs, config: &AppConfig) -> Option<PathBuf> {
    match (&args.output, args.save) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(config.journal.path.clone()),
        (None, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(output: Option<&str>, save: bool) -> JournalArgs {
        JournalArgs {
            entries: vec!["I cried today".into(), "I ate a bug".into()],
            output: output.map(PathBuf::from),
            save,
            force: false,
        }
    }

    #[test]
    fn entries_are_numbered_in_order() {
        let journal = build_journal(&args(None, false).entries);
        assert_eq!(journal.to_string(), "1: I cried today\n2: I ate a bug");
    }

    #[test]
    fn save_target_resolution() {
        let config = AppConfig::default();
        assert_eq!(save_target(&args(None, false), &config), None);
        assert_eq!(
            save_target(&args(None, true), &config),
            Some(PathBuf::from("journal.txt"))
        );
        assert_eq!(
            save_target(&args(Some("notes/j.txt"), false), &config),
            Some(PathBuf::from("notes/j.txt"))
        );
    }
}
