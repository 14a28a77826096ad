use crate::Catalog;
use crate::Record;
use crate::render_field;
use crate::render_links;
use crate::render_task;

/// Table columns in display order. The header row built from these is also
/// the marker used to find the table in a document.
pub const COLUMNS: [&str; 12] = [
	"id",
	"name",
	"year",
	"organs",
	"staining",
	"size",
	"data",
	"task",
	"type",
	"other",
	"links",
	"description",
];

const SEPARATOR_CELL: &str = "---";

/// The header row, e.g. `| id | name | ... | description |`.
pub fn header_row() -> String {
	format_row(COLUMNS.iter().copied())
}

/// The literal text the splicer searches for. Identical to [`header_row`].
pub fn marker() -> String {
	header_row()
}

/// The `| --- | --- | ... |` row placed under the header.
pub fn separator_row() -> String {
	format_row(COLUMNS.iter().map(|_| SEPARATOR_CELL))
}

/// Render a single record into a table row.
pub fn record_row(record: &Record) -> String {
	let cells: Vec<String> = COLUMNS
		.iter()
		.map(|column| render_cell(record, column))
		.collect();
	format_row(cells.iter().map(String::as_str))
}

/// Render the whole table: header, separator and one row per record, joined
/// with `\n` and without a trailing newline.
pub fn render_table(catalog: &Catalog) -> String {
	let mut lines = Vec::with_capacity(catalog.len() + 2);
	lines.push(header_row());
	lines.push(separator_row());
	lines.extend(catalog.iter().map(record_row));
	lines.join("\n")
}

fn render_cell(record: &Record, column: &str) -> String {
	let value = record.field(column);
	match column {
		"task" => render_task(value),
		"links" => render_links(value),
		_ => render_field(value),
	}
}

fn format_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
	format!("| {} |", cells.collect::<Vec<_>>().join(" | "))
}
