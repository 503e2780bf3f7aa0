use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Style;
use skel_cli::Commands;
use skel_cli::OutputFormat;
use skel_cli::SkelCli;
use skel_core::DELIMITER;
use skel_core::DEFAULT_LOCATION;
use skel_core::NEWLINE;
use skel_core::SECTION_COUNT;
use skel_core::SkelConfig;
use skel_core::Skeleton;
use skel_core::SkeletonLoader;
use skel_core::SkeletonOptions;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Style `text` unless color output is disabled.
fn paint(text: &str, style: Style) -> String {
	if color_enabled() {
		text.style(style).to_string()
	} else {
		text.to_string()
	}
}

fn main() {
	let args = SkelCli::parse();

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
		Some(Commands::Check) => run_check(&args),
		Some(Commands::List { format }) => run_list(&args, format),
		Some(Commands::Emit { raw }) => run_emit(&args, raw),
		None => {
			eprintln!("No subcommand specified. Run `skel --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		match e.downcast::<skel_core::SkelError>() {
			Ok(skel_err) => {
				let report: miette::Report = (*skel_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", paint("error:", Style::new().red()));
			}
		}
		process::exit(2);
	}
}

/// Loader messages go to stderr. `--verbose` shows `info` messages,
/// otherwise only errors; `RUST_LOG` overrides both.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_level = if verbose { "info" } else { "error" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.without_time()
		.init();
}

fn resolve_root(args: &SkelCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Config values first, command line flags on top.
fn skeleton_options(args: &SkelCli) -> Result<SkeletonOptions, Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = SkelConfig::load(&root)?;
	let mut options = SkeletonOptions::from_config(config.as_ref(), &root);

	if let Some(path) = &args.skeleton {
		options.skeleton_path = Some(path.clone());
	}

	if args.private {
		options.make_private = true;
	}

	Ok(options)
}

fn prepare_skeleton(
	args: &SkelCli,
) -> Result<(Skeleton, SkeletonOptions), Box<dyn std::error::Error>> {
	let options = skeleton_options(args)?;
	let skeleton = SkeletonLoader::new().prepare(&options)?;

	Ok((skeleton, options))
}

fn source_name(options: &SkeletonOptions) -> String {
	options.skeleton_path.as_ref().map_or_else(
		|| DEFAULT_LOCATION.to_string(),
		|path| path.display().to_string(),
	)
}

fn run_check(args: &SkelCli) -> Result<(), Box<dyn std::error::Error>> {
	let (skeleton, options) = prepare_skeleton(args)?;

	println!(
		"{} {} has {} sections.",
		paint("Check passed:", Style::new().green()),
		source_name(&options),
		skeleton.len()
	);

	if options.make_private {
		println!("Public members were rewritten to private.");
	}

	Ok(())
}

fn run_list(args: &SkelCli, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
	let (skeleton, options) = prepare_skeleton(args)?;

	match format {
		OutputFormat::Json => {
			let sections: Vec<serde_json::Value> = skeleton
				.iter()
				.enumerate()
				.map(|(index, section)| {
					serde_json::json!({
						"index": index,
						"lines": section.lines().count(),
						"bytes": section.len(),
					})
				})
				.collect();
			let output = serde_json::json!({
				"source": source_name(&options),
				"private": options.make_private,
				"sections": sections,
			});
			println!("{}", serde_json::to_string_pretty(&output)?);
		}
		OutputFormat::Text => {
			println!(
				"{}",
				paint(
					&format!("Sections of {}:", source_name(&options)),
					Style::new().bold()
				)
			);
			for (index, section) in skeleton.iter().enumerate() {
				let first_line = section
					.lines()
					.map(str::trim)
					.find(|line| !line.is_empty())
					.unwrap_or("");
				println!(
					"  {index:>2}  {:>4} line(s)  {:>6} byte(s)  {first_line}",
					section.lines().count(),
					section.len()
				);
			}
		}
	}

	Ok(())
}

fn run_emit(args: &SkelCli, raw: bool) -> Result<(), Box<dyn std::error::Error>> {
	let (skeleton, _) = prepare_skeleton(args)?;
	let stdout = std::io::stdout();
	let mut cursor = skeleton.cursor(stdout.lock());

	for index in 0..SECTION_COUNT {
		if index > 0 {
			let out = cursor.get_mut();
			if raw {
				write!(out, "{DELIMITER}{NEWLINE}")?;
			} else {
				write!(out, "{DELIMITER} section {index}{NEWLINE}")?;
			}
		}
		cursor.emit_next()?;
	}

	cursor.get_mut().flush()?;

	Ok(())
}
