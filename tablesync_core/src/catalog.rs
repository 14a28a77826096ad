use std::path::Path;

use derive_more::Deref;
use derive_more::DerefMut;
use serde_json::Map;
use serde_json::Value;

use crate::TablesyncError;
use crate::TablesyncResult;

/// Default location of the catalog, relative to the project root.
pub const DEFAULT_CATALOG_PATH: &str = "datasets/_datasets.json";

/// One dataset's metadata entry.
///
/// Fields are kept in the order they appear in the source file. Fields the
/// table doesn't know about are kept but never rendered.
#[derive(Debug, Clone, Default, PartialEq, Deref, DerefMut)]
pub struct Record(Map<String, Value>);

impl Record {
	pub fn new(fields: Map<String, Value>) -> Self {
		Self(fields)
	}

	/// Returns the value of `name`, treating an explicit `null` the same as a
	/// missing field.
	pub fn field(&self, name: &str) -> Option<&Value> {
		self.0.get(name).filter(|value| !value.is_null())
	}
}

/// The full ordered list of records.
#[derive(Debug, Clone, Default, PartialEq, Deref, DerefMut)]
pub struct Catalog(Vec<Record>);

impl Catalog {
	pub fn new(records: Vec<Record>) -> Self {
		Self(records)
	}

	pub fn into_records(self) -> Vec<Record> {
		self.0
	}
}

impl FromIterator<Record> for Catalog {
	fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

/// Read and parse the catalog at `path`. The format is taken from the file
/// extension.
pub fn load_catalog(path: &Path) -> TablesyncResult<Catalog> {
	let path_display = path.display().to_string();
	let content = std::fs::read_to_string(path).map_err(|e| TablesyncError::ReadFile {
		path: path_display.clone(),
		reason: e.to_string(),
	})?;
	let format = path
		.extension()
		.and_then(|e| e.to_str())
		.unwrap_or("")
		.to_ascii_lowercase();

	let catalog = parse_catalog(&content, &format, &path_display)?;
	tracing::debug!(path = %path_display, records = catalog.len(), "loaded catalog");

	Ok(catalog)
}

/// Parse catalog `content` written in `format`.
pub fn parse_catalog(content: &str, format: &str, path_display: &str) -> TablesyncResult<Catalog> {
	let value: Value = match format {
		"json" => serde_json::from_str(content).map_err(|e| TablesyncError::CatalogParse {
			path: path_display.to_string(),
			reason: e.to_string(),
		})?,
		"yaml" | "yml" => {
			serde_yaml_ng::from_str(content).map_err(|e| TablesyncError::CatalogParse {
				path: path_display.to_string(),
				reason: e.to_string(),
			})?
		}
		other => return Err(TablesyncError::UnsupportedCatalogFormat(other.to_string())),
	};

	catalog_from_value(value, path_display)
}

fn catalog_from_value(value: Value, path_display: &str) -> TablesyncResult<Catalog> {
	let Value::Array(items) = value else {
		return Err(TablesyncError::CatalogShape {
			path: path_display.to_string(),
			reason: format!("expected a sequence of records, found {}", kind_of(&value)),
		});
	};

	items
		.into_iter()
		.enumerate()
		.map(|(index, item)| {
			match item {
				Value::Object(fields) => Ok(Record::new(fields)),
				other => {
					Err(TablesyncError::CatalogShape {
						path: path_display.to_string(),
						reason: format!("record {index} is {}, not a mapping", kind_of(&other)),
					})
				}
			}
		})
		.collect()
}

fn kind_of(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "a sequence",
		Value::Object(_) => "a mapping",
	}
}
