use serde_json::Value;

/// Convert a field value into a single-line, table-safe cell.
///
/// Absent values render as an empty string. Line breaks collapse to a single
/// space and `|` is escaped so it can't be read as a column boundary.
pub fn render_field(value: Option<&Value>) -> String {
	value.map(stringify).map_or_else(String::new, |s| escape_cell(&s))
}

/// Render the `task` field. Sequences are joined with `", "`.
pub fn render_task(value: Option<&Value>) -> String {
	let Some(value) = value else {
		return String::new();
	};

	let text = match value {
		Value::Array(items) => {
			items
				.iter()
				.map(stringify)
				.collect::<Vec<_>>()
				.join(", ")
		}
		other => stringify(other),
	};

	escape_cell(&text)
}

/// Render the `links` field as space-separated `[label](<url>)` links.
///
/// Entries with an empty URL are skipped. Anything other than a non-empty
/// mapping renders as an empty string.
pub fn render_links(value: Option<&Value>) -> String {
	let Some(Value::Object(links)) = value else {
		return String::new();
	};

	let parts: Vec<String> = links
		.iter()
		.filter_map(|(label, url)| {
			let url = stringify(url);
			let url = url.trim();
			if url.is_empty() {
				return None;
			}

			// `|` would still split the row inside the angle brackets.
			Some(format!("[{label}](<{}>)", url.replace('|', "%7C")))
		})
		.collect();

	escape_cell(&parts.join(" "))
}

/// Collapse line breaks to spaces and escape column separators.
pub fn escape_cell(text: &str) -> String {
	text.replace("\r\n", " ")
		.replace('\n', " ")
		.replace('|', "\\|")
}

fn stringify(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		Value::Bool(b) => b.to_string(),
		Value::Number(n) => n.to_string(),
		Value::Array(_) | Value::Object(_) => value.to_string(),
	}
}
