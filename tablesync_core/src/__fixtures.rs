use serde_json::Value;
use serde_json::json;

use crate::Catalog;
use crate::Record;

pub const HEADER: &str =
	"| id | name | year | organs | staining | size | data | task | type | other | links | description |";
pub const SEPARATOR: &str =
	"| --- | --- | --- | --- | --- | --- | --- | --- | --- | --- | --- | --- |";
pub const ALPHA_ROW: &str = "| ds-1 | Alpha | 2019 | Colon | H&E | 100 WSIs | WSI | segmentation, \
                             detection | public |  | [paper](<https://x>) | Line one line two |";
pub const BETA_ROW: &str = "| ds-2 | Beta |  |  |  |  |  |  |  |  |  |  |";

pub fn record(value: Value) -> Record {
	match value {
		Value::Object(fields) => Record::new(fields),
		other => panic!("fixture record must be an object, got {other}"),
	}
}

pub fn alpha_record() -> Record {
	record(json!({
		"id": "ds-1",
		"name": "Alpha",
		"year": 2019,
		"organs": "Colon",
		"staining": "H&E",
		"size": "100 WSIs",
		"data": "WSI",
		"task": ["segmentation", "detection"],
		"type": "public",
		"other": null,
		"links": { "paper": "https://x", "code": "" },
		"description": "Line one\nline two"
	}))
}

pub fn beta_record() -> Record {
	record(json!({ "id": "ds-2", "name": "Beta" }))
}

pub fn two_record_catalog() -> Catalog {
	Catalog::new(vec![alpha_record(), beta_record()])
}

pub fn two_record_table() -> String {
	[HEADER, SEPARATOR, ALPHA_ROW, BETA_ROW].join("\n")
}

pub const CATALOG_JSON: &str = r#"[
  {
    "id": "ds-1",
    "name": "Alpha",
    "year": 2019,
    "organs": "Colon",
    "staining": "H&E",
    "size": "100 WSIs",
    "data": "WSI",
    "task": ["segmentation", "detection"],
    "type": "public",
    "other": null,
    "links": { "paper": "https://x", "code": "" },
    "description": "Line one\nline two"
  },
  { "id": "ds-2", "name": "Beta" }
]
"#;

/// A document with a header, a separator and three stale rows followed by
/// unrelated text.
pub fn stale_document() -> String {
	format!(
		"# Datasets\n\nSome intro.\n\n{HEADER}\n{SEPARATOR}\n| old-1 | x |\n| old-2 | y |\n| old-3 | z \
		 |\n\n## Trailing\n\nUnrelated text.\n"
	)
}
