use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::DEFAULT_CATALOG_PATH;
use crate::TablesyncError;
use crate::TablesyncResult;

/// Default location of the document holding the table, relative to the
/// project root.
pub const DEFAULT_DOCUMENT_PATH: &str = "README.md";

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"tablesync.toml",
	".tablesync.toml",
	".config/tablesync.toml",
];

/// Configuration loaded from a `tablesync.toml` file.
///
/// ```toml
/// catalog = "datasets/_datasets.json"
/// document = "README.md"
/// ```
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TablesyncConfig {
	/// Catalog path relative to the project root.
	#[serde(default)]
	pub catalog: Option<PathBuf>,
	/// Document path relative to the project root.
	#[serde(default)]
	pub document: Option<PathBuf>,
}

impl TablesyncConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> TablesyncResult<Option<TablesyncConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::parse(&content)?;
		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}

	pub fn parse(content: &str) -> TablesyncResult<TablesyncConfig> {
		toml::from_str(content).map_err(|e| TablesyncError::ConfigParse(e.to_string()))
	}
}

/// Paths to read from and write to for one sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncTarget {
	pub root: PathBuf,
	pub catalog: PathBuf,
	pub document: PathBuf,
}

impl SyncTarget {
	/// Target using the default catalog and document locations under `root`.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		let root = root.into();
		Self {
			catalog: root.join(DEFAULT_CATALOG_PATH),
			document: root.join(DEFAULT_DOCUMENT_PATH),
			root,
		}
	}

	/// Resolve the target for `root`. Explicit overrides win over the config
	/// file, which wins over the defaults. Relative paths are joined to `root`.
	pub fn resolve(
		root: &Path,
		catalog: Option<&Path>,
		document: Option<&Path>,
	) -> TablesyncResult<Self> {
		let config = TablesyncConfig::load(root)?.unwrap_or_default();
		Ok(Self::from_config(root, &config, catalog, document))
	}

	pub fn from_config(
		root: &Path,
		config: &TablesyncConfig,
		catalog: Option<&Path>,
		document: Option<&Path>,
	) -> Self {
		let catalog = catalog
			.or(config.catalog.as_deref())
			.unwrap_or(Path::new(DEFAULT_CATALOG_PATH));
		let document = document
			.or(config.document.as_deref())
			.unwrap_or(Path::new(DEFAULT_DOCUMENT_PATH));

		Self {
			root: root.to_path_buf(),
			catalog: root.join(catalog),
			document: root.join(document),
		}
	}
}
