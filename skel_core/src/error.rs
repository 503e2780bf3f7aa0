use miette::Diagnostic;
use thiserror::Error;

use crate::SECTION_COUNT;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum SkelError {
	#[error(transparent)]
	#[diagnostic(code(skel::io_error))]
	Io(#[from] std::io::Error),

	#[error("{0} must not be empty")]
	#[diagnostic(code(skel::invalid_argument))]
	InvalidArgument(&'static str),

	#[error("cannot read skeleton `{source_name}`")]
	#[diagnostic(
		code(skel::resource_unavailable),
		help("check that the skeleton exists and is a readable file")
	)]
	ResourceUnavailable { source_name: String },

	#[error("failed to read skeleton `{source_name}`")]
	#[diagnostic(code(skel::read_failure))]
	ReadFailure {
		source_name: String,
		#[source]
		source: std::io::Error,
	},

	#[error(
		"skeleton `{source_name}` has {found} section(s), expected {expected}",
		expected = SECTION_COUNT
	)]
	#[diagnostic(
		code(skel::malformed_skeleton),
		help("a skeleton needs exactly 20 `---` delimiter lines")
	)]
	MalformedSkeleton { source_name: String, found: usize },

	#[error("all {0} skeleton sections have already been emitted")]
	#[diagnostic(
		code(skel::emission_exhausted),
		help("the generator asked for more skeleton sections than the skeleton defines")
	)]
	EmissionExhausted(usize),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(skel::config_parse),
		help("check that skel.toml is valid TOML with a [skeleton] section")
	)]
	ConfigParse(String),
}

pub type SkelResult<T> = Result<T, SkelError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
