use std::path::Path;
use std::path::PathBuf;
use std::process;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use tablesync_cli::Commands;
use tablesync_cli::TablesyncCli;
use tablesync_core::SpliceOutcome;
use tablesync_core::SyncTarget;
use tablesync_core::TablesyncError;
use tablesync_core::check_sync;
use tablesync_core::compute_sync;
use tablesync_core::load_catalog;
use tablesync_core::render_table;
use tablesync_core::write_sync;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = TablesyncCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match args.command {
		None => run_update(&args, false, false),
		Some(Commands::Update { dry_run, watch }) => run_update(&args, dry_run, watch),
		Some(Commands::Check { diff }) => run_check(&args, diff),
		Some(Commands::Print) => run_print(&args),
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<TablesyncError>() {
			Ok(err) => {
				let report: miette::Report = (*err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn init_tracing(verbose: bool, use_color: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.without_time()
		.init();
}

fn resolve_root(args: &TablesyncCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn resolve_target(args: &TablesyncCli) -> Result<SyncTarget, Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let target = SyncTarget::resolve(&root, args.catalog.as_deref(), args.document.as_deref())?;
	tracing::debug!(
		catalog = %target.catalog.display(),
		document = %target.document.display(),
		"resolved sync target"
	);

	Ok(target)
}

fn run_update(
	args: &TablesyncCli,
	dry_run: bool,
	watch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let target = resolve_target(args)?;

	// Run the initial update.
	run_update_once(args, &target, dry_run)?;

	if !watch || dry_run {
		return Ok(());
	}

	// Watch mode
	println!("\nWatching the catalog for changes... (press Ctrl+C to stop)");

	let catalog_dir = target
		.catalog
		.parent()
		.map_or_else(|| target.root.clone(), Path::to_path_buf);
	let catalog_name = target.catalog.file_name().map(ToOwned::to_owned);
	let (tx, rx) = mpsc::channel();

	let mut watcher =
		notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
			if let Ok(event) = res {
				// The document is written on every run, so only react to the
				// catalog itself.
				let touches_catalog = event
					.paths
					.iter()
					.any(|path| path.file_name() == catalog_name.as_deref());
				if touches_catalog
					&& matches!(
						event.kind,
						notify::EventKind::Modify(_) | notify::EventKind::Create(_)
					) {
					let _ = tx.send(());
				}
			}
		})?;

	use notify::Watcher;
	watcher.watch(&catalog_dir, notify::RecursiveMode::NonRecursive)?;

	loop {
		rx.recv()?;
		// Debounce: drain additional events within 200ms.
		while rx.recv_timeout(Duration::from_millis(200)).is_ok() {}

		println!("\nCatalog change detected, updating...");
		if let Err(e) = run_update_once(args, &target, false) {
			eprintln!("{} {e}", colored!("error:", red));
		}
	}
}

fn run_update_once(
	args: &TablesyncCli,
	target: &SyncTarget,
	dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let result = compute_sync(target)?;
	let document = make_relative(&result.document_path, &target.root);

	if dry_run {
		if result.is_changed() {
			println!(
				"Dry run: would update the table in {document} with {} record(s).",
				result.record_count
			);
			if args.verbose {
				print_diff(&result.original, &result.updated);
			}
		} else {
			println!("Dry run: the table in {document} is already up to date.");
		}
		return Ok(());
	}

	write_sync(&result)?;

	match &result.outcome {
		SpliceOutcome::MarkerNotFound => {
			println!(
				"{} no table header found in {document}, nothing to update.",
				colored!("warning:", yellow)
			);
		}
		SpliceOutcome::Replaced(_) if result.is_changed() => {
			println!(
				"Updated the table in {document} with {} record(s).",
				result.record_count
			);
		}
		SpliceOutcome::Replaced(_) => {
			println!("The table in {document} is already up to date.");
		}
	}

	Ok(())
}

fn run_check(args: &TablesyncCli, show_diff: bool) -> Result<(), Box<dyn std::error::Error>> {
	let target = resolve_target(args)?;
	let result = check_sync(&target)?;
	let document = make_relative(&result.document_path, &target.root);

	if result.is_ok() {
		if result.outcome == SpliceOutcome::MarkerNotFound {
			println!(
				"{} no table header found in {document}, nothing to check.",
				colored!("warning:", yellow)
			);
		} else {
			println!(
				"{} the table in {document} is up to date.",
				colored!("Check passed:", green)
			);
		}
		return Ok(());
	}

	let report: miette::Report = TablesyncError::StaleTable {
		file: document,
	}
	.into();
	eprintln!("{report:?}");

	if show_diff {
		let current = result.current_table.as_deref().unwrap_or_default();
		eprintln!();
		print_diff(current, &result.expected_table);
	}

	process::exit(1);
}

fn run_print(args: &TablesyncCli) -> Result<(), Box<dyn std::error::Error>> {
	let target = resolve_target(args)?;
	let catalog = load_catalog(&target.catalog)?;
	println!("{}", render_table(&catalog));

	Ok(())
}

fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		let line = change.value().trim_end_matches('\n');
		match change.tag() {
			ChangeTag::Delete => {
				eprintln!("  {}", colored!(format!("-{line}"), red));
			}
			ChangeTag::Insert => {
				eprintln!("  {}", colored!(format!("+{line}"), green));
			}
			ChangeTag::Equal => {
				eprintln!("   {line}");
			}
		}
	}
}

fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
