use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::SkelError;
use crate::SkelResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["skel.toml", ".skel.toml", ".config/skel.toml"];

/// Configuration loaded from a `skel.toml` file.
///
/// ```toml
/// [skeleton]
/// path = "templates/scanner.skel"
/// private = true
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct SkelConfig {
	#[serde(default)]
	pub skeleton: SkeletonConfig,
}

/// The `[skeleton]` table.
#[derive(Debug, Default, Deserialize)]
pub struct SkeletonConfig {
	/// Skeleton file used instead of the bundled default, relative to the
	/// project root.
	#[serde(default)]
	pub path: Option<PathBuf>,
	/// Rewrite `public` members of the skeleton to `private`.
	#[serde(default)]
	pub private: bool,
}

impl SkelConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if there is no config file.
	pub fn load(root: &Path) -> SkelResult<Option<SkelConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: SkelConfig =
			toml::from_str(&content).map_err(|e| SkelError::ConfigParse(e.to_string()))?;

		Ok(Some(config))
	}
}

/// What to do to the skeleton before emission starts.
///
/// Use [`SkeletonOptions::default()`] for the unmodified bundled skeleton or
/// [`SkeletonOptions::from_config`] to construct from a [`SkelConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkeletonOptions {
	/// Skeleton file replacing the bundled default.
	pub skeleton_path: Option<PathBuf>,
	/// Apply the visibility transform.
	pub make_private: bool,
}

impl SkeletonOptions {
	/// Construct [`SkeletonOptions`] from a [`SkelConfig`], resolving the
	/// configured skeleton path against `root`.
	pub fn from_config(config: Option<&SkelConfig>, root: &Path) -> Self {
		let Some(config) = config else {
			return Self::default();
		};

		Self {
			skeleton_path: config.skeleton.path.as_ref().map(|path| root.join(path)),
			make_private: config.skeleton.private,
		}
	}
}
