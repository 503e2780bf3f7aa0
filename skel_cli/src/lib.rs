use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Inspect, validate and emit scanner skeleton templates.",
	long_about = "skel manages the skeleton of generated scanners: the boilerplate source that a \
	              scanner generator interleaves with generated tables and actions.\n\nThe \
	              bundled default skeleton is always loaded first. A `skel.toml` file or the \
	              `--skeleton` flag can replace it, and `--private` rewrites public members to \
	              private.\n\nQuick start:\n  skel check  Validate the skeleton\n  skel list   \
	              Show every section\n  skel emit   Print the skeleton section by section"
)]
pub struct SkelCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory used for `skel.toml` discovery.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Skeleton file to use instead of the bundled default.
	#[arg(long, short, global = true)]
	pub skeleton: Option<PathBuf>,

	/// Replace every ` public ` in the skeleton with ` private `.
	#[arg(long, global = true, default_value_t = false)]
	pub private: bool,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Check that the skeleton loads and has the expected number of sections.
	///
	/// Exits with a non-zero status code and a diagnostic naming the
	/// skeleton when it cannot be read or is malformed.
	Check,
	/// List every section of the skeleton with its line and byte counts.
	List {
		/// Output format. Use `text` for human-readable output or `json`
		/// for programmatic consumption.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Emit the skeleton to stdout, one section at a time.
	///
	/// Sections are separated by `--- section N` marker lines naming the
	/// section that follows. The output can be loaded again with
	/// `--skeleton`.
	Emit {
		/// Separate sections with bare `---` lines instead of numbered
		/// markers.
		#[arg(long, default_value_t = false)]
		raw: bool,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
