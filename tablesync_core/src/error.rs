use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum TablesyncError {
	#[error(transparent)]
	#[diagnostic(code(tablesync::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to read `{path}`: {reason}")]
	#[diagnostic(
		code(tablesync::read_file),
		help("check that the path exists relative to the project root")
	)]
	ReadFile { path: String, reason: String },

	#[error("failed to parse catalog `{path}`: {reason}")]
	#[diagnostic(code(tablesync::catalog_parse))]
	CatalogParse { path: String, reason: String },

	#[error("catalog `{path}` has an unexpected shape: {reason}")]
	#[diagnostic(
		code(tablesync::catalog_shape),
		help("the catalog must be a sequence of record mappings")
	)]
	CatalogShape { path: String, reason: String },

	#[error("unsupported catalog format: `{0}`")]
	#[diagnostic(
		code(tablesync::unsupported_format),
		help("supported formats: json, yaml, yml")
	)]
	UnsupportedCatalogFormat(String),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(tablesync::config_parse),
		help("check that tablesync.toml is valid TOML with `catalog` and/or `document` keys")
	)]
	ConfigParse(String),

	#[error("failed to write `{path}`: {reason}")]
	#[diagnostic(code(tablesync::write_file))]
	WriteFile { path: String, reason: String },

	#[error("table in {file} is out of date")]
	#[diagnostic(
		code(tablesync::stale_table),
		help("run `tablesync update` to regenerate the table")
	)]
	StaleTable { file: String },
}

pub type TablesyncResult<T> = Result<T, TablesyncError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
