use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::model::{BoardConfig, Identity, Listing, ListingKind};

const STORE_DIR: &str = ".campus-circle";
const CONFIG_FILE: &str = "config.json";
const SESSION_FILE: &str = "session.json";

/// JSON-file persistence under `.campus-circle/`. Collections are read and
/// written as whole snapshots; there are no partial updates or transactions.
/// The read-modify-write cycle is not atomic across processes, so two
/// concurrent writers can lose an update (last `save` wins) - single-writer
/// use is assumed.
#[derive(Clone, Debug)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn board_dir(root: &Path) -> PathBuf {
        root.join(STORE_DIR)
    }

    pub fn open(board_root: &Path) -> Result<Self> {
        let root = Self::board_dir(board_root);
        if !root.is_dir() {
            return Err(anyhow!(
                "No {} directory found at {} (run `campus-circle init`)",
                STORE_DIR,
                root.display()
            ));
        }
        Ok(Self { root })
    }

    pub fn init(board_root: &Path, force: bool) -> Result<Self> {
        let root = Self::board_dir(board_root);
        if root.exists() && !force {
            return Err(anyhow!(
                "{} already exists at {} (use --force to re-init)",
                STORE_DIR,
                root.display()
            ));
        }

        fs::create_dir_all(&root).context("create board dir")?;

        let cfg = BoardConfig::default();
        let bytes = serde_json::to_vec_pretty(&cfg).context("serialize board config")?;
        write_atomic(&root.join(CONFIG_FILE), &bytes).context("write config.json")?;

        Ok(Self { root })
    }

    /// A missing or corrupt config is replaced with defaults rather than
    /// surfaced as an error.
    pub fn read_config(&self) -> Result<BoardConfig> {
        let path = self.root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(BoardConfig::default());
        }
        let bytes = fs::read(&path).context("read config.json")?;
        match serde_json::from_slice(&bytes) {
            Ok(cfg) => Ok(cfg),
            Err(err) => {
                tracing::warn!(error = %err, "config.json is corrupt, resetting to defaults");
                let cfg = BoardConfig::default();
                self.write_config(&cfg)?;
                Ok(cfg)
            }
        }
    }

    pub fn write_config(&self, cfg: &BoardConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize board config")?;
        write_atomic(&self.root.join(CONFIG_FILE), &bytes).context("write config.json")
    }

    fn collection_path(&self, kind: ListingKind) -> PathBuf {
        self.root.join(kind.storage_file())
    }

    /// Loads one collection in insertion order. An absent file is an empty
    /// collection; a corrupt file is cleared and also treated as empty.
    pub fn load_listings(&self, kind: ListingKind) -> Result<Vec<Listing>> {
        let path = self.collection_path(kind);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let bytes =
            fs::read(&path).with_context(|| format!("read {}", kind.storage_file()))?;
        match serde_json::from_slice(&bytes) {
            Ok(listings) => Ok(listings),
            Err(err) => {
                tracing::warn!(
                    file = kind.storage_file(),
                    error = %err,
                    "collection file is corrupt, clearing it"
                );
                fs::remove_file(&path)
                    .with_context(|| format!("remove corrupt {}", kind.storage_file()))?;
                Ok(Vec::new())
            }
        }
    }

    /// Overwrites the whole persisted collection for `kind`.
    pub fn save_listings(&self, kind: ListingKind, listings: &[Listing]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(listings)
            .with_context(|| format!("serialize {}", kind.storage_file()))?;
        write_atomic(&self.collection_path(kind), &bytes)
            .with_context(|| format!("write {}", kind.storage_file()))
    }

    pub fn read_session(&self) -> Result<Option<Identity>> {
        let path = self.root.join(SESSION_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path).context("read session.json")?;
        match serde_json::from_slice(&bytes) {
            Ok(identity) => Ok(Some(identity)),
            Err(err) => {
                tracing::warn!(error = %err, "session.json is corrupt, clearing it");
                fs::remove_file(&path).context("remove corrupt session.json")?;
                Ok(None)
            }
        }
    }

    pub fn write_session(&self, identity: &Identity) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(identity).context("serialize session")?;
        write_atomic(&self.root.join(SESSION_FILE), &bytes).context("write session.json")
    }

    pub fn clear_session(&self) -> Result<()> {
        let path = self.root.join(SESSION_FILE);
        if path.exists() {
            fs::remove_file(&path).context("remove session.json")?;
        }
        Ok(())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}
