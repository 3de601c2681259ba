use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::Difficulty;
use crate::error::ScoreError;

const APP_DIR_NAME: &str = "neon-snake";
const SCORE_FILE_NAME: &str = "scores.json";

/// Best score per difficulty.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct HighScores {
    #[serde(default)]
    pub easy: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub hard: u32,
}

impl HighScores {
    #[must_use]
    pub fn get(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    fn slot_mut(&mut self, difficulty: Difficulty) -> &mut u32 {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    /// Raises the stored value if `score` beats it. Returns `true` on a new record.
    pub fn record(&mut self, difficulty: Difficulty, score: u32) -> bool {
        let slot = self.slot_mut(difficulty);
        if score > *slot {
            *slot = score;
            true
        } else {
            false
        }
    }
}

/// Key-value high-score storage keyed by difficulty.
pub trait ScoreStore {
    fn get(&self, difficulty: Difficulty) -> u32;

    /// Stores `score` only if it beats the current best; returns `true` if it did.
    fn set(&mut self, difficulty: Difficulty, score: u32) -> bool;

    fn all(&self) -> HighScores;

    fn clear(&mut self);
}

/// In-memory store, used by tests and when no data directory exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    scores: HighScores,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self, difficulty: Difficulty) -> u32 {
        self.scores.get(difficulty)
    }

    fn set(&mut self, difficulty: Difficulty, score: u32) -> bool {
        self.scores.record(difficulty, score)
    }

    fn all(&self) -> HighScores {
        self.scores
    }

    fn clear(&mut self) {
        self.scores = HighScores::default();
    }
}

/// JSON-file store. Reads once on open and writes through on every change.
///
/// Persistence is best effort: write failures are logged and the in-memory
/// value still updates, so a read-only disk never interrupts play.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
    scores: HighScores,
}

impl FileScoreStore {
    /// Opens the store at `path`.
    ///
    /// A missing file means no scores yet. A file that exists but cannot be
    /// read or parsed is an error, so the caller can report it before the
    /// terminal switches to raw mode.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ScoreError> {
        let path = path.into();
        let scores = load_scores_from_path(&path)?;
        log::debug!("loaded high scores from {}: {scores:?}", path.display());
        Ok(Self { path, scores })
    }

    /// Opens the store, falling back to empty scores when the file is unusable.
    #[must_use]
    pub fn open_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match load_scores_from_path(&path) {
            Ok(scores) => Self { path, scores },
            Err(error) => {
                log::warn!("ignoring unreadable high scores: {error}");
                Self {
                    path,
                    scores: HighScores::default(),
                }
            }
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        if let Err(error) = save_scores_to_path(&self.path, &self.scores) {
            log::warn!("failed to save high scores: {error}");
        }
    }
}

impl ScoreStore for FileScoreStore {
    fn get(&self, difficulty: Difficulty) -> u32 {
        self.scores.get(difficulty)
    }

    fn set(&mut self, difficulty: Difficulty, score: u32) -> bool {
        if !self.scores.record(difficulty, score) {
            return false;
        }

        log::info!("new {} high score: {score}", difficulty.key());
        self.persist();
        true
    }

    fn all(&self) -> HighScores {
        self.scores
    }

    fn clear(&mut self) {
        self.scores = HighScores::default();
        self.persist();
    }
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

fn load_scores_from_path(path: &Path) -> Result<HighScores, ScoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HighScores::default()),
        Err(source) => {
            return Err(ScoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&raw).map_err(|source| ScoreError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

fn save_scores_to_path(path: &Path, scores: &HighScores) -> Result<(), ScoreError> {
    let io_error = |source| ScoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let json = serde_json::to_string_pretty(scores).map_err(|source| ScoreError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, json).map_err(io_error)
}
