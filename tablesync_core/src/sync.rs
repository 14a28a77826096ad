use std::path::PathBuf;

use crate::SpliceOutcome;
use crate::SyncTarget;
use crate::TablesyncError;
use crate::TablesyncResult;
use crate::load_catalog;
use crate::render_table;
use crate::splice_table;

/// Result of regenerating the table for one document.
#[derive(Debug)]
pub struct SyncResult {
	/// Path of the document the table lives in.
	pub document_path: PathBuf,
	/// The document as it was read from disk.
	pub original: String,
	/// The document with the regenerated table spliced in.
	pub updated: String,
	/// Number of records rendered into the table.
	pub record_count: usize,
	/// Whether an existing table was found and replaced.
	pub outcome: SpliceOutcome,
}

impl SyncResult {
	/// Returns true if writing would change the document.
	pub fn is_changed(&self) -> bool {
		self.original != self.updated
	}
}

/// Result of checking whether a document's table is current.
#[derive(Debug)]
pub struct CheckResult {
	pub document_path: PathBuf,
	/// The table text currently in the document, if one was found.
	pub current_table: Option<String>,
	/// The table the catalog renders to.
	pub expected_table: String,
	pub outcome: SpliceOutcome,
	stale: bool,
}

impl CheckResult {
	/// Returns true if the table is up to date. A document without a marker
	/// has nothing to update and counts as up to date.
	pub fn is_ok(&self) -> bool {
		!self.stale
	}
}

/// Load the catalog and document for `target` and compute the updated
/// document. Nothing is written.
pub fn compute_sync(target: &SyncTarget) -> TablesyncResult<SyncResult> {
	compute_with_table(target).map(|(result, _)| result)
}

fn compute_with_table(target: &SyncTarget) -> TablesyncResult<(SyncResult, String)> {
	let catalog = load_catalog(&target.catalog)?;
	let table = render_table(&catalog);

	let original = read_document(target)?;
	let spliced = splice_table(&original, &table);

	match &spliced.outcome {
		SpliceOutcome::Replaced(span) => {
			tracing::debug!(
				document = %target.document.display(),
				start = span.range.start,
				end = span.range.end,
				lines = span.lines,
				"replacing existing table"
			);
		}
		SpliceOutcome::MarkerNotFound => {
			tracing::warn!(
				document = %target.document.display(),
				"table header not found, document left unchanged"
			);
		}
	}

	let result = SyncResult {
		document_path: target.document.clone(),
		original,
		updated: spliced.content,
		record_count: catalog.len(),
		outcome: spliced.outcome,
	};

	Ok((result, table))
}

/// Overwrite the document with the updated content. The write happens even
/// when nothing changed.
pub fn write_sync(result: &SyncResult) -> TablesyncResult<()> {
	std::fs::write(&result.document_path, &result.updated).map_err(|e| {
		TablesyncError::WriteFile {
			path: result.document_path.display().to_string(),
			reason: e.to_string(),
		}
	})?;
	tracing::debug!(document = %result.document_path.display(), "wrote document");

	Ok(())
}

/// Check whether the table in the target document matches the catalog.
pub fn check_sync(target: &SyncTarget) -> TablesyncResult<CheckResult> {
	let (result, expected_table) = compute_with_table(target)?;
	let current_table = match &result.outcome {
		SpliceOutcome::Replaced(span) => Some(result.original[span.range.clone()].to_string()),
		SpliceOutcome::MarkerNotFound => None,
	};

	Ok(CheckResult {
		document_path: result.document_path.clone(),
		stale: result.is_changed(),
		current_table,
		expected_table,
		outcome: result.outcome,
	})
}

fn read_document(target: &SyncTarget) -> TablesyncResult<String> {
	std::fs::read_to_string(&target.document).map_err(|e| {
		TablesyncError::ReadFile {
			path: target.document.display().to_string(),
			reason: e.to_string(),
		}
	})
}
