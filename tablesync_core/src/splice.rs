use std::ops::Range;

use crate::marker;

/// The byte range of an existing table inside a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpan {
	/// Starts at the marker and ends after the last row, excluding that row's
	/// line terminator.
	pub range: Range<usize>,
	/// Number of lines in the span, header and separator included.
	pub lines: usize,
}

/// What happened when splicing a table into a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpliceOutcome {
	/// The existing table at `span` was replaced.
	Replaced(TableSpan),
	/// No usable marker was found and the document was left untouched. This
	/// also covers a marker whose line doesn't look like a table row.
	MarkerNotFound,
}

impl SpliceOutcome {
	pub fn is_replaced(&self) -> bool {
		matches!(self, Self::Replaced(_))
	}
}

/// A document with a freshly rendered table spliced in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplicedDocument {
	pub content: String,
	pub outcome: SpliceOutcome,
}

enum ScanState {
	LookingForHeader,
	ConsumingRows { start: usize, end: usize, lines: usize },
	Done(Option<TableSpan>),
}

/// Find the first table whose header row is the marker.
///
/// Scanning starts at the first occurrence of the marker and consumes every
/// following line that starts and ends with `|` (ignoring surrounding
/// whitespace). The first line that doesn't ends the table.
pub fn locate_table(document: &str) -> Option<TableSpan> {
	let marker = marker();
	let mut state = ScanState::LookingForHeader;
	let mut offset = 0;

	for line in document.split('\n') {
		state = match state {
			ScanState::LookingForHeader => {
				match line.find(&marker) {
					Some(column) => {
						let rest = &line[column..];
						if is_table_row(rest) {
							let start = offset + column;
							ScanState::ConsumingRows {
								start,
								end: start + rest.len(),
								lines: 1,
							}
						} else {
							ScanState::Done(None)
						}
					}
					None => ScanState::LookingForHeader,
				}
			}
			ScanState::ConsumingRows { start, end, lines } => {
				if is_table_row(line) {
					ScanState::ConsumingRows {
						start,
						end: offset + line.len(),
						lines: lines + 1,
					}
				} else {
					ScanState::Done(Some(TableSpan {
						range: start..end,
						lines,
					}))
				}
			}
			done @ ScanState::Done(_) => done,
		};

		if let ScanState::Done(_) = state {
			break;
		}

		offset += line.len() + 1;
	}

	match state {
		ScanState::LookingForHeader => None,
		ScanState::ConsumingRows { start, end, lines } => {
			Some(TableSpan {
				range: start..end,
				lines,
			})
		}
		ScanState::Done(span) => span,
	}
}

/// Replace the existing table in `document` with `table`.
///
/// Content outside the matched span is preserved byte for byte. When no table
/// is found the document is returned unchanged.
pub fn splice_table(document: &str, table: &str) -> SplicedDocument {
	let Some(span) = locate_table(document) else {
		return SplicedDocument {
			content: document.to_string(),
			outcome: SpliceOutcome::MarkerNotFound,
		};
	};

	let Range { start, end } = span.range;
	let mut content = String::with_capacity(document.len() - (end - start) + table.len());
	content.push_str(&document[..start]);
	content.push_str(table);
	content.push_str(&document[end..]);

	SplicedDocument {
		content,
		outcome: SpliceOutcome::Replaced(span),
	}
}

fn is_table_row(line: &str) -> bool {
	let line = line.trim();
	line.starts_with('|') && line.ends_with('|')
}
