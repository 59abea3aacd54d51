//! Journal persistence, kept apart from the journal itself.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::ports::Filesystem, domain::principles::single_responsibility::Journal,
    error::PatternResult,
};

/// Saves journals through a [`Filesystem`].
pub struct JournalPersistence {
    filesystem: Box<dyn Filesystem>,
}

impl JournalPersistence {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Write `journal` to `path`.
    ///
    /// An existing file is only replaced when `overwrite` is set. Returns
    /// whether anything was written. Missing parent directories are created.
    #[instrument(
        skip_all,
        fields(path = %path.as_ref().display(), entries = journal.len(), overwrite = overwrite)
    )]
    pub fn save(
        &self,
        journal: &Journal,
        path: impl AsRef<Path>,
        overwrite: bool,
    ) -> PatternResult<bool> {
        let path = path.as_ref();

        if !overwrite && self.filesystem.exists(path) {
            info!("Journal file exists, leaving it alone");
            return Ok(false);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, &journal.to_string())?;

        info!("Journal saved");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        path::PathBuf,
        sync::{Arc, Mutex},
    };

    use super::*;

    #[derive(Clone, Default)]
    struct FakeFs {
        files: Arc<Mutex<HashMap<PathBuf, String>>>,
    }

    impl Filesystem for FakeFs {
        fn create_dir_all(&self, _path: &Path) -> PatternResult<()> {
            Ok(())
        }

        fn write_file(&self, path: &Path, content: &str) -> PatternResult<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }
    }

    fn journal(entries: &[&str]) -> Journal {
        let mut j = Journal::new();
        for e in entries {
            j.add_entry(e);
        }
        j
    }

    #[test]
    fn saves_when_missing() {
        let fs = FakeFs::default();
        let persistence = JournalPersistence::new(Box::new(fs.clone()));

        let wrote = persistence
            .save(&journal(&["I cried today", "I ate a bug"]), "journal.txt", false)
            .unwrap();

        assert!(wrote);
        assert_eq!(
            fs.files.lock().unwrap()[Path::new("journal.txt")],
            "1: I cried today\n2: I ate a bug"
        );
    }

    #[test]
    fn keeps_existing_file_unless_overwrite() {
        let fs = FakeFs::default();
        let persistence = JournalPersistence::new(Box::new(fs.clone()));
        persistence.save(&journal(&["first"]), "j.txt", false).unwrap();

        assert!(!persistence.save(&journal(&["second"]), "j.txt", false).unwrap());
        assert_eq!(fs.files.lock().unwrap()[Path::new("j.txt")], "1: first");

        assert!(persistence.save(&journal(&["second"]), "j.txt", true).unwrap());
        assert_eq!(fs.files.lock().unwrap()[Path::new("j.txt")], "1: second");
    }
}
