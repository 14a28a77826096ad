mod common;

use common::*;
use tablesync_core::AnyEmptyResult;

#[test]
fn print_writes_table_to_stdout() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let readme = stale_readme();
	write_project(tmp.path(), &readme)?;

	tablesync_cmd()
		.arg("print")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::diff(format!("{}\n", expected_table())));

	let content = std::fs::read_to_string(tmp.path().join("README.md"))?;
	assert_eq!(content, readme);

	Ok(())
}

#[test]
fn print_does_not_need_a_document() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join("datasets"))?;
	std::fs::write(tmp.path().join("datasets/_datasets.json"), "[]")?;

	tablesync_cmd()
		.arg("print")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::diff(format!("{HEADER}\n{SEPARATOR}\n")));

	Ok(())
}
