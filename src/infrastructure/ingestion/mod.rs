//! Document ingestion: filesystem loading, text extraction and the
//! per-mode knowledge base build.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::domain::{chunk, ChunkingConfig, DomainError, Embedder, KnowledgeBase, Mode};

/// File kinds read as raw UTF-8 text.
const TEXT_EXTENSIONS: [&str; 3] = ["txt", "md", "vue"];

/// Build the knowledge base for one mode from its configured source
/// directories, in order. Chunks are embedded one at a time, strictly in
/// file-then-chunk order; that order assigns index positions and thereby
/// distance tie-breaks at query time.
///
/// Per-file problems (missing directory, unsupported or unreadable file,
/// empty content) are logged and skipped. An embedding failure stops
/// ingestion for this mode and propagates; chunks already added remain in
/// the knowledge base.
pub async fn ingest_sources(
    kb: &mut KnowledgeBase,
    sources: &[PathBuf],
    config: &ChunkingConfig,
    embedder: &dyn Embedder,
) -> Result<(), DomainError> {
    config.validate()?;
    let mode = kb.mode();

    for dir in sources {
        if !dir.is_dir() {
            warn!(%mode, directory = %dir.display(), "source directory not found, skipping");
            continue;
        }

        for path in list_candidate_files(dir) {
            let Some(content) = extract_content(&path) else {
                continue;
            };

            if content.trim().is_empty() {
                warn!(%mode, file = %path.display(), "no extractable content, skipping");
                continue;
            }

            info!(%mode, file = %path.display(), "ingesting file");
            let source = file_name(&path);

            for piece in chunk(&content, config)? {
                let vector = embedder.embed(&piece).await?;
                kb.push(piece, source.clone(), vector)?;
            }
        }
    }

    info!(
        %mode,
        chunks = kb.document_count(),
        ready = kb.is_ready(),
        "ingestion complete"
    );

    Ok(())
}

/// Build a fresh knowledge base for `mode`. Convenience wrapper used at
/// startup; callers that need the partial-state-on-failure behavior keep
/// the returned base either way.
pub async fn build_knowledge_base(
    mode: Mode,
    sources: &[PathBuf],
    config: &ChunkingConfig,
    embedder: &dyn Embedder,
) -> (KnowledgeBase, Result<(), DomainError>) {
    let mut kb = KnowledgeBase::new(mode);
    let result = ingest_sources(&mut kb, sources, config, embedder).await;
    (kb, result)
}

/// Supported files directly under `dir`, sorted by filename so position
/// assignment is deterministic across platforms.
fn list_candidate_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(directory = %dir.display(), error = %e, "failed to read source directory");
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_supported(path))
        .collect();

    files.sort();
    files
}

fn is_supported(path: &Path) -> bool {
    match extension(path) {
        Some(ext) => ext == "pdf" || TEXT_EXTENSIONS.contains(&ext.as_str()),
        None => false,
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Read a file's text content. Unreadable files are logged and yield
/// `None` so the pipeline moves on.
fn extract_content(path: &Path) -> Option<String> {
    let result = match extension(path).as_deref() {
        Some("pdf") => pdf_extract::extract_text(path)
            .map_err(|e| format!("PDF extraction failed: {}", e)),
        Some(_) => fs::read_to_string(path).map_err(|e| e.to_string()),
        None => return None,
    };

    match result {
        Ok(content) => Some(content),
        Err(error) => {
            warn!(file = %path.display(), %error, "failed to read file, skipping");
            None
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
