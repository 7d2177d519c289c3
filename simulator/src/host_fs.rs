//! [`FileSystem`] over a directory of the host machine.

use std::fs;
use std::io;
use std::path::PathBuf;

use pico_screen_ui::services::{DirListing, EntryKind, FileSystem, FsError, MAX_DIR_ENTRIES};

/// Browses `root` and below. Never climbs above `root`.
pub struct HostFs {
    root: PathBuf,
    cwd: PathBuf,
}

impl HostFs {
    pub fn new(root: PathBuf) -> Self {
        Self {
            cwd: root.clone(),
            root,
        }
    }
}

fn fs_error(err: &io::Error) -> FsError {
    match err.kind() {
        io::ErrorKind::NotFound => FsError::NotFound,
        _ => FsError::Io,
    }
}

impl FileSystem for HostFs {
    fn reset(&mut self) { self.cwd.clone_from(&self.root); }

    fn is_root(&self) -> bool { self.cwd == self.root }

    fn read_dir(
        &mut self,
        out: &mut DirListing,
    ) -> Result<(), FsError> {
        out.clear();
        for entry in fs::read_dir(&self.cwd).map_err(|err| fs_error(&err))? {
            let entry = entry.map_err(|err| fs_error(&err))?;
            let kind = match entry.file_type() {
                Ok(file_type) if file_type.is_dir() => EntryKind::Folder,
                Ok(_) => EntryKind::File,
                Err(err) => return Err(fs_error(&err)),
            };
            out.insert(&entry.file_name().to_string_lossy(), kind);
        }
        Ok(())
    }

    fn change_dir(
        &mut self,
        name: &str,
    ) -> Result<(), FsError> {
        let next = self.cwd.join(name);
        let meta = fs::metadata(&next).map_err(|err| fs_error(&err))?;
        if !meta.is_dir() {
            return Err(FsError::NotADirectory);
        }
        self.cwd = next;
        Ok(())
    }

    fn parent(&mut self) -> Result<(), FsError> {
        if !self.is_root() {
            self.cwd.pop();
        }
        Ok(())
    }
}
