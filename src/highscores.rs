//! High score leaderboard system
//!
//! Persisted to a small text file, tracks the top 10 `(name, score)` pairs.
//! Two on-disk formats:
//! - `Ranked`: `name,score` lines, no header, rewritten whole on every save
//! - `DeathLog`: `score,deathcount` rows under a header, append-only

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

const DEATH_LOG_HEADER: &str = "score,deathcount";

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Leaderboard {
    pub entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build from unordered entries (stable: equal scores keep their order)
    pub fn from_entries(mut entries: Vec<ScoreEntry>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        Self { entries }
    }

    /// Check if a score would make the top list
    pub fn qualifies(&self, score: u32) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a new score, keeping the list sorted and trimmed.
    /// Returns the rank achieved (1-indexed) or None if it fell off the end.
    pub fn add_score(&mut self, name: &str, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = ScoreEntry::new(name, score);

        // After any equal scores, matching a stable sort of the appended list
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    /// First `n` entries
    pub fn top(&self, n: usize) -> &[ScoreEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Parse `name,score` lines, keeping the best ten. Names are taken as
    /// written. Lines without a separator or with a bad score are skipped.
    pub fn parse_ranked(text: &str) -> Self {
        let entries = text
            .lines()
            .filter_map(|line| {
                let line = line.trim_end_matches('\r');
                let parsed = line
                    .rsplit_once(',')
                    .and_then(|(name, score)| Some(ScoreEntry::new(name, score.trim().parse().ok()?)));
                if parsed.is_none() && !line.trim().is_empty() {
                    log::debug!("Skipping malformed leaderboard line: {:?}", line);
                }
                parsed
            })
            .collect();
        let mut board = Self::from_entries(entries);
        board.entries.truncate(MAX_HIGH_SCORES);
        board
    }

    /// Parse a `score,deathcount` log; each row becomes `run <deathcount>`
    pub fn parse_death_log(text: &str) -> Self {
        let entries = text
            .lines()
            .map(str::trim)
            .filter(|line| *line != DEATH_LOG_HEADER)
            .filter_map(|line| {
                let (score, deaths) = line.split_once(',')?;
                let score: u32 = score.trim().parse().ok()?;
                let deaths: u32 = deaths.trim().parse().ok()?;
                Some(ScoreEntry::new(format!("run {}", deaths), score))
            })
            .collect();
        Self::from_entries(entries)
    }

    /// Serialize as `name,score` lines
    pub fn to_ranked_string(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{},{}\n", e.name, e.score))
            .collect()
    }
}

/// Leaderboard persistence errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read leaderboard {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write leaderboard {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where finished runs are recorded
pub trait ScoreStore {
    /// Current leaderboard. A store that does not exist yet is empty.
    fn load(&self) -> Result<Leaderboard, StoreError>;

    /// Record a finished run and return the updated leaderboard
    fn record(&mut self, name: &str, score: u32, deaths: u32) -> Result<Leaderboard, StoreError>;
}

/// On-disk layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LeaderboardFormat {
    #[default]
    Ranked,
    DeathLog,
}

/// Text file store
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    format: LeaderboardFormat,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>, format: LeaderboardFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_text(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write_error(&self, source: io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }

    /// Rewrite the whole file via a temp file + rename
    fn overwrite(&self, contents: &str) -> Result<(), StoreError> {
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, contents).map_err(|e| self.write_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.write_error(e))
    }

    fn append_row(&self, score: u32, deaths: u32) -> Result<(), StoreError> {
        let needs_header = fs::metadata(&self.path).map(|m| m.len() == 0).unwrap_or(true);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.write_error(e))?;
        if needs_header {
            writeln!(file, "{}", DEATH_LOG_HEADER).map_err(|e| self.write_error(e))?;
        }
        writeln!(file, "{},{}", score, deaths).map_err(|e| self.write_error(e))
    }
}

impl ScoreStore for FileStore {
    fn load(&self) -> Result<Leaderboard, StoreError> {
        let Some(text) = self.read_text()? else {
            log::info!("No leaderboard at {}, starting fresh", self.path.display());
            return Ok(Leaderboard::new());
        };
        let board = match self.format {
            LeaderboardFormat::Ranked => Leaderboard::parse_ranked(&text),
            LeaderboardFormat::DeathLog => Leaderboard::parse_death_log(&text),
        };
        log::info!("Loaded {} high scores", board.len());
        Ok(board)
    }

    fn record(&mut self, name: &str, score: u32, deaths: u32) -> Result<Leaderboard, StoreError> {
        match self.format {
            LeaderboardFormat::Ranked => {
                let mut board = self.load()?;
                board.add_score(&sanitize_name(name), score);
                self.overwrite(&board.to_ranked_string())?;
                log::info!("High scores saved ({} entries)", board.len());
                Ok(board)
            }
            LeaderboardFormat::DeathLog => {
                self.append_row(score, deaths)?;
                log::info!("Logged score {} for death #{}", score, deaths);
                self.load()
            }
        }
    }
}

/// In-memory store for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub board: Leaderboard,
    /// Number of `record` calls
    pub saves: usize,
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Result<Leaderboard, StoreError> {
        Ok(self.board.clone())
    }

    fn record(&mut self, name: &str, score: u32, _deaths: u32) -> Result<Leaderboard, StoreError> {
        self.board.add_score(name, score);
        self.saves += 1;
        Ok(self.board.clone())
    }
}

/// Names must stay on one line in the ranked format
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
