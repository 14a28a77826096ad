use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Regenerate the dataset table in a markdown document from a catalog file.",
	long_about = "tablesync reads a dataset catalog (JSON or YAML) and rewrites the markdown table \
	              whose header row is `| id | name | year | ... | description |` inside a \
	              documentation file. Everything around the table is left untouched.\n\nRunning \
	              without a subcommand is the same as `tablesync update`.\n\nQuick start:\n  \
	              tablesync         Regenerate the table in README.md\n  tablesync check   \
	              Verify the table is up to date\n  tablesync print   Print the rendered table"
)]
pub struct TablesyncCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Catalog file, relative to the project root. Defaults to
	/// `datasets/_datasets.json` unless set in `tablesync.toml`.
	#[arg(long, global = true)]
	pub catalog: Option<PathBuf>,

	/// Document containing the table, relative to the project root. Defaults
	/// to `README.md` unless set in `tablesync.toml`.
	#[arg(long, global = true)]
	pub document: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Regenerate the table and write the document.
	///
	/// Reads the catalog, renders every record into a row, and replaces the
	/// existing table in the document. When the table header is missing the
	/// document is written back unchanged.
	Update {
		/// Show what would change without writing the document.
		#[arg(long, default_value_t = false)]
		dry_run: bool,

		/// Watch for file changes and re-run the update automatically.
		#[arg(long, default_value_t = false)]
		watch: bool,
	},
	/// Check that the table matches the catalog.
	///
	/// Exits with a non-zero status code when the table is out of date, which
	/// makes it suitable for CI.
	Check {
		/// Show a line diff between the current and the expected table.
		#[arg(long, default_value_t = false)]
		diff: bool,
	},
	/// Print the rendered table to stdout without touching any file.
	Print,
}
