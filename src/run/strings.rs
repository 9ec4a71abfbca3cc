//! String relocator pipeline: discover languages, copy their packages

use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::core::error::ToolError;
use crate::core::paths::resolve_root;
use crate::core::rules::StringRules;
use crate::scanner::language::discover_languages;
use crate::scanner::relocator::relocate_language;
use crate::ui::opener::FolderOpener;

use super::events::EventSink;

/// Inputs of one relocation run.
#[derive(Debug, Clone)]
pub struct RelocationJob {
    pub root: PathBuf,
    pub destination: PathBuf,
    pub rules: StringRules,
}

impl RelocationJob {
    pub fn new(root: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            destination: destination.into(),
            rules: StringRules::sims4(),
        }
    }

    pub fn with_rules(mut self, rules: StringRules) -> Self {
        self.rules = rules;
        self
    }
}

/// Outcome of a completed relocation run.
#[derive(Debug, Clone, Default)]
pub struct RelocationSummary {
    pub languages: Vec<String>,
    /// `(language code, path relative to the scan root)` per copied file.
    pub copied: Vec<(String, PathBuf)>,
}

/// Run the string relocator end to end.
///
/// Finding no languages is not an error. The first copy failure aborts the
/// whole run with no rollback. When an opener is given, the destination is
/// opened after the last language; its failure never changes the result.
pub fn run_relocation(
    job: &RelocationJob,
    sink: &dyn EventSink,
    opener: Option<&dyn FolderOpener>,
) -> Result<RelocationSummary, ToolError> {
    let summary = relocate_all(job, sink).inspect_err(|e| {
        warn!(error = %e, "relocation failed");
        sink.log(format!("❌ ERROR: {e}"));
    })?;

    if let Some(opener) = opener {
        if let Err(e) = opener.open(&job.destination) {
            debug!(dir = %job.destination.display(), error = %e, "could not open destination");
        }
    }

    Ok(summary)
}

fn relocate_all(job: &RelocationJob, sink: &dyn EventSink) -> Result<RelocationSummary, ToolError> {
    let root = resolve_root(&job.root)?;
    let languages = discover_languages(&root, &job.rules);

    if languages.is_empty() {
        sink.log(format!("⚠️ No languages detected in {}.", job.rules.client_dir));
    }

    let mut summary = RelocationSummary::default();
    for code in languages {
        sink.log(format!("▶ Processing: {code}"));
        let copied = relocate_language(&root, &job.destination, &code, &job.rules, sink)?;
        info!(language = %code, files = copied.len(), "language relocated");
        summary
            .copied
            .extend(copied.into_iter().map(|rel| (code.clone(), rel)));
        summary.languages.push(code);
    }

    Ok(summary)
}
