//! Configuration management for the coderag engine.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{RagError, Result};
use crate::core::security::normalize_lexically;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub indexing: IndexingConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub snapshot: SnapshotConfig,
    #[serde(default)]
    pub completion: CompletionConfig,
}

/// Project configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectConfig {
    /// Root every indexing request is confined to
    #[serde(default = "default_project_root")]
    pub root: PathBuf,
}

/// Indexing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexingConfig {
    /// Characters per chunk (not bytes!)
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Character overlap between consecutive chunks
    #[serde(default = "default_overlap")]
    pub overlap: usize,

    /// Files read concurrently before waiting for the batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Default cap on files per indexing call
    #[serde(default = "default_max_files")]
    pub max_files: usize,

    /// Maximum directory depth below the indexed directory
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Maximum file size in MB (skip larger files)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,

    /// Characters kept as a document preview
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,

    /// Supported file extensions (without dot, case-insensitive)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Entry-name substrings that exclude a file or directory
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Default number of results to return
    #[serde(default = "default_top_k")]
    pub default_top_k: usize,

    /// Maximum results per query
    #[serde(default = "default_max_top_k")]
    pub max_top_k: usize,

    /// Candidates scoring at or below this are dropped
    #[serde(default = "default_min_score")]
    pub min_score: f64,

    /// Maximum query string length
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

/// Snapshot persistence configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnapshotConfig {
    /// Write a snapshot after indexing and load it on startup
    #[serde(default = "default_snapshot_enabled")]
    pub enabled: bool,

    /// Snapshot file, relative paths resolve against the project root
    #[serde(default = "default_snapshot_path")]
    pub path: PathBuf,
}

/// Completion backend configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompletionConfig {
    /// OpenAI-compatible API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Model used when a query does not name one
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

// Default value functions
fn default_project_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_chunk_size() -> usize {
    1000
}

fn default_overlap() -> usize {
    200
}

fn default_batch_size() -> usize {
    8
}

fn default_max_files() -> usize {
    500
}

fn default_max_depth() -> usize {
    10
}

fn default_max_file_size() -> usize {
    10
}

fn default_preview_chars() -> usize {
    5000
}

fn default_top_k() -> usize {
    5
}

fn default_max_top_k() -> usize {
    50
}

fn default_min_score() -> f64 {
    0.1
}

fn default_max_query_length() -> usize {
    1000
}

fn default_snapshot_enabled() -> bool {
    true
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from(".jules/rag-index.json")
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_timeout() -> u64 {
    120
}

fn default_extensions() -> Vec<String> {
    [
        // Code
        "js", "jsx", "ts", "tsx", "mjs", "cjs", "py", "rb", "go", "rs", "java", "kt", "scala",
        "swift", "c", "h", "cpp", "hpp", "cc", "cs", "php", "lua", "dart", "ex", "exs",
        // Markup and styles
        "html", "css", "scss", "vue", "svelte", "md", "mdx", "txt",
        // Config
        "json", "yaml", "yml", "toml", "xml", "ini",
        // Scripts and queries
        "sh", "bash", "sql", "graphql",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_exclude_patterns() -> Vec<String> {
    [
        "node_modules",
        ".git",
        "dist",
        "build",
        "coverage",
        "__pycache__",
        ".next",
        "target",
        "vendor",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: default_project_root(),
        }
    }
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            overlap: default_overlap(),
            batch_size: default_batch_size(),
            max_files: default_max_files(),
            max_depth: default_max_depth(),
            max_file_size_mb: default_max_file_size(),
            preview_chars: default_preview_chars(),
            extensions: default_extensions(),
            exclude_patterns: default_exclude_patterns(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_top_k: default_top_k(),
            max_top_k: default_max_top_k(),
            min_score: default_min_score(),
            max_query_length: default_max_query_length(),
        }
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            enabled: default_snapshot_enabled(),
            path: default_snapshot_path(),
        }
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            default_model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| RagError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. CODERAG_CONFIG env var
    /// 2. XDG config file (~/.config/coderag/config.toml)
    /// 3. ./coderag.toml in the working directory
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("CODERAG_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("coderag.toml").exists() {
                Self::from_file("coderag.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(root) = env::var("CODERAG_PROJECT_ROOT") {
            self.project.root = PathBuf::from(root);
        }

        // Indexing configuration
        if let Ok(chunk_size) = env::var("CODERAG_CHUNK_SIZE") {
            if let Ok(size) = chunk_size.parse() {
                self.indexing.chunk_size = size;
            }
        }
        if let Ok(overlap) = env::var("CODERAG_OVERLAP") {
            if let Ok(o) = overlap.parse() {
                self.indexing.overlap = o;
            }
        }
        if let Ok(batch) = env::var("CODERAG_BATCH_SIZE") {
            if let Ok(b) = batch.parse() {
                self.indexing.batch_size = b;
            }
        }
        if let Ok(max_files) = env::var("CODERAG_MAX_FILES") {
            if let Ok(m) = max_files.parse() {
                self.indexing.max_files = m;
            }
        }
        if let Ok(max_size) = env::var("CODERAG_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.indexing.max_file_size_mb = size;
            }
        }

        // Search configuration
        if let Ok(top_k) = env::var("CODERAG_DEFAULT_TOP_K") {
            if let Ok(k) = top_k.parse() {
                self.search.default_top_k = k;
            }
        }
        if let Ok(max_k) = env::var("CODERAG_MAX_TOP_K") {
            if let Ok(k) = max_k.parse() {
                self.search.max_top_k = k;
            }
        }

        // Snapshot configuration
        if let Ok(enabled) = env::var("CODERAG_SNAPSHOT_ENABLED") {
            if let Ok(e) = enabled.parse() {
                self.snapshot.enabled = e;
            }
        }
        if let Ok(path) = env::var("CODERAG_SNAPSHOT_PATH") {
            self.snapshot.path = PathBuf::from(path);
        }

        // Completion configuration
        if let Ok(url) = env::var("CODERAG_COMPLETION_URL") {
            self.completion.base_url = url;
        }
        if let Ok(model) = env::var("CODERAG_MODEL") {
            self.completion.default_model = model;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.indexing.chunk_size == 0 {
            return Err(RagError::ConfigError(
                "Chunk size must be non-zero".to_string(),
            ));
        }

        if self.indexing.overlap >= self.indexing.chunk_size {
            return Err(RagError::ConfigError(
                "Overlap must be less than chunk size".to_string(),
            ));
        }

        if self.indexing.batch_size == 0 {
            return Err(RagError::ConfigError(
                "Batch size must be non-zero".to_string(),
            ));
        }

        if self.indexing.max_files == 0 {
            return Err(RagError::ConfigError(
                "Max files must be non-zero".to_string(),
            ));
        }

        if self.indexing.extensions.is_empty() {
            return Err(RagError::ConfigError(
                "At least one file extension must be configured".to_string(),
            ));
        }

        if self.search.default_top_k == 0 {
            return Err(RagError::ConfigError(
                "Default top_k must be non-zero".to_string(),
            ));
        }

        if self.search.default_top_k > self.search.max_top_k {
            return Err(RagError::ConfigError(
                "Default top_k cannot exceed max top_k".to_string(),
            ));
        }

        if !(0.0..1.0).contains(&self.search.min_score) {
            return Err(RagError::ConfigError(
                "Min score must be in [0, 1)".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(RagError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Absolute, normalized project root
    pub fn project_root(&self) -> Result<PathBuf> {
        let root = if self.project.root.is_absolute() {
            self.project.root.clone()
        } else {
            env::current_dir()?.join(&self.project.root)
        };
        Ok(normalize_lexically(&root))
    }

    /// Absolute snapshot file location
    pub fn snapshot_path(&self) -> Result<PathBuf> {
        if self.snapshot.path.is_absolute() {
            Ok(self.snapshot.path.clone())
        } else {
            Ok(self.project_root()?.join(&self.snapshot.path))
        }
    }

    /// Log configuration (redacting sensitive values)
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Project root: {:?}", self.project.root);
        tracing::info!("  Chunk size: {} chars", self.indexing.chunk_size);
        tracing::info!("  Overlap: {} chars", self.indexing.overlap);
        tracing::info!("  Batch size: {} files", self.indexing.batch_size);
        tracing::info!("  Max files: {}", self.indexing.max_files);
        tracing::info!("  Extensions: {} supported", self.indexing.extensions.len());
        tracing::info!(
            "  Exclude patterns: {} patterns",
            self.indexing.exclude_patterns.len()
        );
        tracing::info!("  Default top_k: {}", self.search.default_top_k);
        tracing::info!("  Min score: {}", self.search.min_score);
        tracing::info!(
            "  Snapshot: {} ({:?})",
            if self.snapshot.enabled { "on" } else { "off" },
            self.snapshot.path
        );
        tracing::info!("  Completion endpoint: {}", self.completion.base_url);
        tracing::info!("  Default model: {}", self.completion.default_model);
    }
}
