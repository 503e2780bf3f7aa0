use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::DEFAULT_LOCATION;
use crate::Diagnostics;
use crate::MessageKind;
use crate::ResourceRegistry;
use crate::SkelError;
use crate::SkelResult;
use crate::Skeleton;
use crate::SkeletonOptions;
use crate::TracingDiagnostics;

/// Loads skeletons from named resources, readers and files.
///
/// Every `load_*` method replaces the given [`Skeleton`] only once the new
/// text has been read and validated. On any failure the previous skeleton is
/// left as it was, the failure is reported through the loader's
/// [`Diagnostics`] and the error is returned for the driver to abort on.
#[derive(Debug, Clone)]
pub struct SkeletonLoader<D = TracingDiagnostics> {
	resources: ResourceRegistry,
	diagnostics: D,
}

impl SkeletonLoader {
	/// A loader over the bundled resources that reports through `tracing`.
	pub fn new() -> Self {
		Self::with_diagnostics(ResourceRegistry::bundled(), TracingDiagnostics)
	}
}

impl Default for SkeletonLoader {
	fn default() -> Self {
		Self::new()
	}
}

impl<D: Diagnostics> SkeletonLoader<D> {
	pub fn with_diagnostics(resources: ResourceRegistry, diagnostics: D) -> Self {
		Self {
			resources,
			diagnostics,
		}
	}

	pub fn resources(&self) -> &ResourceRegistry {
		&self.resources
	}

	/// Load the bundled default skeleton.
	///
	/// This must succeed before any generation work starts; there is no
	/// fallback when it fails.
	pub fn bootstrap(&self) -> SkelResult<Skeleton> {
		self.read_default()
	}

	/// Replace `skeleton` with the bundled default.
	pub fn reload_default(&self, skeleton: &mut Skeleton) -> SkelResult<()> {
		*skeleton = self.read_default()?;
		Ok(())
	}

	/// Replace `skeleton` with the registered resource `name`.
	pub fn load_from_resource(&self, skeleton: &mut Skeleton, name: &str) -> SkelResult<()> {
		if name.is_empty() {
			return Err(self.invalid_argument("skeleton resource name"));
		}

		let Some(content) = self.resources.get(name) else {
			self.diagnostics.error(MessageKind::CannotReadSkeleton, name);
			return Err(SkelError::ResourceUnavailable {
				source_name: name.to_string(),
			});
		};

		self.diagnostics.info(MessageKind::ReadingSkeleton, name);
		*skeleton = self.parse(content, name)?;

		Ok(())
	}

	/// Replace `skeleton` with the UTF-8 text read from `reader`. The
	/// `label` names the stream in diagnostics.
	pub fn load_from_reader<R: Read>(
		&self,
		skeleton: &mut Skeleton,
		reader: R,
		label: &str,
	) -> SkelResult<()> {
		if label.is_empty() {
			return Err(self.invalid_argument("skeleton stream label"));
		}

		self.diagnostics.info(MessageKind::ReadingSkeleton, label);
		let content = self.read_all(reader, label)?;
		*skeleton = self.parse(&content, label)?;

		Ok(())
	}

	/// Replace `skeleton` with the contents of the file at `path`.
	pub fn load_from_file(&self, skeleton: &mut Skeleton, path: &Path) -> SkelResult<()> {
		if path.as_os_str().is_empty() {
			return Err(self.invalid_argument("skeleton path"));
		}

		let source_name = path.display().to_string();
		let file = if path.is_file() {
			File::open(path).ok()
		} else {
			None
		};

		let Some(file) = file else {
			self.diagnostics
				.error(MessageKind::CannotReadSkeleton, &source_name);
			return Err(SkelError::ResourceUnavailable { source_name });
		};

		self.diagnostics
			.info(MessageKind::ReadingSkeleton, &source_name);
		let content = self.read_all(file, &source_name)?;
		*skeleton = self.parse(&content, &source_name)?;

		Ok(())
	}

	/// Run the whole mutation phase described by `options`: load the
	/// default, optionally replace it with a skeleton file and optionally
	/// make it private. The result is ready for emission.
	pub fn prepare(&self, options: &SkeletonOptions) -> SkelResult<Skeleton> {
		let mut skeleton = self.bootstrap()?;

		if let Some(path) = &options.skeleton_path {
			self.load_from_file(&mut skeleton, path)?;
		}

		if options.make_private {
			skeleton.make_private();
		}

		Ok(skeleton)
	}

	fn invalid_argument(&self, what: &'static str) -> SkelError {
		self.diagnostics.error(MessageKind::InvalidArgument, what);
		SkelError::InvalidArgument(what)
	}

	/// Reads the registry entry directly instead of going through
	/// `load_from_resource`, so a failure is reported as a default skeleton
	/// problem rather than an ordinary unreadable resource.
	fn read_default(&self) -> SkelResult<Skeleton> {
		let Some(content) = self.resources.get(DEFAULT_LOCATION) else {
			self.diagnostics
				.error(MessageKind::DefaultSkeletonIoError, DEFAULT_LOCATION);
			return Err(SkelError::ResourceUnavailable {
				source_name: DEFAULT_LOCATION.to_string(),
			});
		};

		self.parse(content, DEFAULT_LOCATION)
	}

	fn read_all<R: Read>(&self, mut reader: R, source_name: &str) -> SkelResult<String> {
		let mut content = String::new();

		if let Err(source) = reader.read_to_string(&mut content) {
			self.diagnostics
				.error(MessageKind::SkeletonIoError, source_name);
			return Err(SkelError::ReadFailure {
				source_name: source_name.to_string(),
				source,
			});
		}

		Ok(content)
	}

	fn parse(&self, content: &str, source_name: &str) -> SkelResult<Skeleton> {
		Skeleton::parse(content).map_err(|found| {
			self.diagnostics
				.error(MessageKind::WrongSkeleton, source_name);
			SkelError::MalformedSkeleton {
				source_name: source_name.to_string(),
				found,
			}
		})
	}
}
