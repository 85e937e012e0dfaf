use std::path::Path;

use super::*;

impl Market {
    pub fn init(root: &Path, force: bool) -> Result<Self> {
        let store = LocalStore::init(root, force)?;
        Ok(Self {
            root: root.to_path_buf(),
            store,
            ids: SystemIdGen,
            clock: SystemClock,
        })
    }

    pub fn discover(start: &Path) -> Result<Self> {
        let start = start
            .canonicalize()
            .with_context(|| format!("canonicalize {}", start.display()))?;
        for dir in start.ancestors() {
            let board_dir = LocalStore::board_dir(dir);
            if board_dir.is_dir() {
                let store = LocalStore::open(dir)?;
                return Ok(Self {
                    root: dir.to_path_buf(),
                    store,
                    ids: SystemIdGen,
                    clock: SystemClock,
                });
            }
        }
        Err(anyhow!(
            "No .campus-circle directory found (run `campus-circle init`)"
        ))
    }
}

impl<I: IdGen, C: Clock> Market<I, C> {
    pub fn with_parts(root: PathBuf, store: LocalStore, ids: I, clock: C) -> Self {
        Self {
            root,
            store,
            ids,
            clock,
        }
    }
}
