#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub const HEADER: &str =
	"| id | name | year | organs | staining | size | data | task | type | other | links | description |";
pub const SEPARATOR: &str =
	"| --- | --- | --- | --- | --- | --- | --- | --- | --- | --- | --- | --- |";

pub const CATALOG_JSON: &str = r#"[
  {
    "id": "ds-1",
    "name": "Alpha",
    "year": 2019,
    "task": ["segmentation", "detection"],
    "links": { "paper": "https://x", "code": "" },
    "description": "Line one\nline two | more"
  },
  { "id": "ds-2", "name": "Beta" }
]
"#;

pub const ALPHA_ROW: &str = "| ds-1 | Alpha | 2019 |  |  |  |  | segmentation, detection |  |  | \
                             [paper](<https://x>) | Line one line two \\| more |";
pub const BETA_ROW: &str = "| ds-2 | Beta |  |  |  |  |  |  |  |  |  |  |";

pub fn tablesync_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("tablesync"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd
}

pub fn expected_table() -> String {
	[HEADER, SEPARATOR, ALPHA_ROW, BETA_ROW].join("\n")
}

pub fn stale_readme() -> String {
	format!(
		"# Datasets\n\n{HEADER}\n{SEPARATOR}\n| old-1 | x |\n| old-2 | y |\n| old-3 | z |\n\nTrailing \
		 text.\n"
	)
}

/// Create a project with the default catalog location and a `README.md`.
pub fn write_project(root: &Path, readme: &str) -> std::io::Result<()> {
	std::fs::create_dir_all(root.join("datasets"))?;
	std::fs::write(root.join("datasets/_datasets.json"), CATALOG_JSON)?;
	std::fs::write(root.join("README.md"), readme)
}
