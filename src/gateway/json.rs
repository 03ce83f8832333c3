//! JSON file-backed gateway implementation.
//!
//! This module provides a simple, human-readable [`PersistenceGateway`] backend
//! using JSON serialization. It uses atomic file writes (write-to-temp + rename)
//! to prevent corruption on crashes, and serves two purposes: offline annotation
//! sessions without a remote service, and a real backend for the crate's own
//! scenario tests.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - loads the entire file into memory once
//! - **Write**: O(n) - serializes and writes the entire dataset
//! - **Best for**: corpora of a few thousand pairs, interactive write rates

use crate::domain::error::{LexalignError, Result};
use crate::domain::link::AlignmentLink;
use crate::domain::pair::{PairSummary, SentencePair};
use crate::gateway::contract::{PairWithLinks, PersistenceGateway};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// JSON gateway container format.
///
/// This is the top-level structure serialized to disk. Wraps pairs and links
/// in a single object with a version field for future extensibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GatewayData {
    /// Version of the file format for future migrations.
    version: u32,

    /// All stored sentence pairs, in creation order.
    #[serde(default)]
    pairs: Vec<SentencePair>,

    /// All stored alignment links across all pairs, in creation order.
    /// Every stored link carries a confirmed id.
    #[serde(default)]
    links: Vec<AlignmentLink>,

    /// Next id to assign to a sentence pair.
    #[serde(default = "first_id")]
    next_pair_id: i64,

    /// Next id to assign to an alignment link.
    #[serde(default = "first_id")]
    next_link_id: i64,
}

const fn first_id() -> i64 {
    1
}

impl Default for GatewayData {
    fn default() -> Self {
        Self {
            version: 1,
            pairs: Vec::new(),
            links: Vec::new(),
            next_pair_id: first_id(),
            next_link_id: first_id(),
        }
    }
}

/// JSON file gateway backend.
///
/// Stores sentence pairs and alignment links in a human-readable JSON file
/// with atomic writes. The entire dataset is kept in memory and persisted on
/// modification.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`; it is designed to be driven from a
/// single runtime loop, matching the engine's single-threaded event model.
pub struct JsonGateway {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data cache, loaded on creation.
    data: GatewayData,

    /// Tracks whether data has been modified since the last save.
    dirty: bool,
}

impl JsonGateway {
    /// Creates or opens a JSON gateway backend.
    ///
    /// If the file exists, loads existing data. Otherwise starts empty. Parent
    /// directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON gateway");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            GatewayData::default()
        };

        tracing::debug!(
            pair_count = data.pairs.len(),
            link_count = data.links.len(),
            "gateway initialized"
        );

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Loads gateway data from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    fn load_from_file(path: &PathBuf) -> Result<GatewayData> {
        let contents = std::fs::read_to_string(path)?;
        let data: GatewayData = serde_json::from_str(&contents)
            .map_err(|e| LexalignError::Gateway(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            pairs = data.pairs.len(),
            links = data.links.len(),
            "loaded gateway data"
        );

        Ok(data)
    }

    /// Saves gateway data to disk using an atomic write.
    ///
    /// Writes to a temporary file first, then renames it over the target path,
    /// so the file is never left in a corrupt state even if the process crashes.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write, or the rename fails.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        tracing::debug!(path = ?self.file_path, "saving gateway data");

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| LexalignError::Gateway(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        Ok(())
    }

    /// Seeds a new sentence pair, assigning it the next pair id.
    ///
    /// Not part of the [`PersistenceGateway`] contract — the interaction engine
    /// never creates pairs — but needed to populate an offline corpus file and
    /// the test fixtures.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the new pair fails.
    pub fn add_pair(
        &mut self,
        source_language: &str,
        target_language: &str,
        source_sentence: &str,
        target_sentence: &str,
    ) -> Result<SentencePair> {
        let pair = SentencePair::new(
            self.data.next_pair_id,
            source_language.to_string(),
            target_language.to_string(),
            source_sentence.to_string(),
            target_sentence.to_string(),
        );
        self.data.next_pair_id += 1;
        self.data.pairs.push(pair.clone());
        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!(pair_id = pair.id, "sentence pair added");
        Ok(pair)
    }

    fn find_pair(&self, pair_id: i64) -> Result<&SentencePair> {
        self.data
            .pairs
            .iter()
            .find(|pair| pair.id == pair_id)
            .ok_or_else(|| LexalignError::Gateway(format!("sentence pair not found: {pair_id}")))
    }
}

impl PersistenceGateway for JsonGateway {
    fn list_pairs(&self) -> Result<Vec<PairSummary>> {
        let _span = tracing::debug_span!("json_list_pairs").entered();

        let pairs: Vec<PairSummary> = self.data.pairs.iter().map(PairSummary::from).collect();

        tracing::debug!(count = pairs.len(), "pairs listed");
        Ok(pairs)
    }

    fn fetch_pair(&self, pair_id: i64) -> Result<PairWithLinks> {
        let _span = tracing::debug_span!("json_fetch_pair", pair_id).entered();

        let pair = self.find_pair(pair_id)?.clone();
        let links: Vec<AlignmentLink> = self
            .data
            .links
            .iter()
            .filter(|link| link.sentence_pair_id == pair_id)
            .cloned()
            .collect();

        tracing::debug!(link_count = links.len(), "pair fetched");
        Ok(PairWithLinks { pair, links })
    }

    fn create_link(&mut self, link: &AlignmentLink) -> Result<AlignmentLink> {
        let _span = tracing::debug_span!("json_create_link", key = %link.key()).entered();

        // Reject links against pairs this store has never seen; a dangling
        // pair id would otherwise persist silently.
        self.find_pair(link.sentence_pair_id)?;

        let mut confirmed = link.clone();
        confirmed.id = Some(self.data.next_link_id);
        self.data.next_link_id += 1;

        self.data.links.push(confirmed.clone());
        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!(id = ?confirmed.id, "link created");
        Ok(confirmed)
    }

    fn delete_link(&mut self, id: i64) -> Result<()> {
        let _span = tracing::debug_span!("json_delete_link", id).entered();

        let index = self
            .data
            .links
            .iter()
            .position(|link| link.id == Some(id))
            .ok_or(LexalignError::NotFound(id))?;

        self.data.links.remove(index);
        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!("link deleted");
        Ok(())
    }

    fn update_pair(
        &mut self,
        pair_id: i64,
        source_sentence: &str,
        target_sentence: &str,
    ) -> Result<SentencePair> {
        let _span = tracing::debug_span!("json_update_pair", pair_id).entered();

        let pair = self
            .data
            .pairs
            .iter_mut()
            .find(|pair| pair.id == pair_id)
            .ok_or_else(|| LexalignError::Gateway(format!("sentence pair not found: {pair_id}")))?;

        pair.source_sentence = source_sentence.to_string();
        pair.target_sentence = target_sentence.to_string();
        let updated = pair.clone();

        // Token positions no longer describe the new tokenization; the pair's
        // links are invalid and must go with the edit.
        let before = self.data.links.len();
        self.data.links.retain(|link| link.sentence_pair_id != pair_id);
        let cascaded = before - self.data.links.len();

        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!(cascaded_links = cascaded, "pair updated");
        Ok(updated)
    }

    fn reset_all_links(&mut self) -> Result<()> {
        let _span = tracing::debug_span!("json_reset_all_links").entered();

        let discarded = self.data.links.len();
        self.data.links.clear();
        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!(discarded, "all links reset");
        Ok(())
    }
}

impl Drop for JsonGateway {
    /// Ensures unsaved data reaches disk even if a save was skipped.
    fn drop(&mut self) {
        if self.dirty {
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}
