use std::fmt;

/// The messages the skeleton loader reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MessageKind {
	/// A load was requested with an empty name, path or label.
	InvalidArgument,
	/// A skeleton source is about to be read.
	ReadingSkeleton,
	/// A skeleton source could not be found or opened.
	CannotReadSkeleton,
	/// Reading an opened skeleton source failed.
	SkeletonIoError,
	/// The bundled default skeleton could not be loaded.
	DefaultSkeletonIoError,
	/// A skeleton had the wrong number of sections.
	WrongSkeleton,
}

impl MessageKind {
	/// Stable identifier used as a structured logging field.
	pub fn code(self) -> &'static str {
		match self {
			Self::InvalidArgument => "invalid_argument",
			Self::ReadingSkeleton => "reading_skeleton",
			Self::CannotReadSkeleton => "cannot_read_skeleton",
			Self::SkeletonIoError => "skeleton_io_error",
			Self::DefaultSkeletonIoError => "default_skeleton_io_error",
			Self::WrongSkeleton => "wrong_skeleton",
		}
	}
}

impl fmt::Display for MessageKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let message = match self {
			Self::InvalidArgument => "Skeleton source must not be empty",
			Self::ReadingSkeleton => "Reading skeleton file",
			Self::CannotReadSkeleton => "Cannot read skeleton file",
			Self::SkeletonIoError => "IO problem reading skeleton file",
			Self::DefaultSkeletonIoError => "IO problem reading default skeleton file",
			Self::WrongSkeleton => "Skeleton file has the wrong number of sections",
		};

		f.write_str(message)
	}
}

/// Receiver for loader progress and failure messages.
///
/// Every `error` is followed by the loader returning an error, which the
/// driver is expected to treat as fatal. [`SectionCursor`] holds no
/// diagnostics: its `EmissionExhausted` and write errors are only returned,
/// and the driver reports them.
///
/// [`SectionCursor`]: crate::SectionCursor
pub trait Diagnostics {
	fn info(&self, kind: MessageKind, detail: &str);
	fn error(&self, kind: MessageKind, detail: &str);
}

impl<T: Diagnostics + ?Sized> Diagnostics for &T {
	fn info(&self, kind: MessageKind, detail: &str) {
		(**self).info(kind, detail);
	}

	fn error(&self, kind: MessageKind, detail: &str) {
		(**self).error(kind, detail);
	}
}

/// Forwards messages to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
	fn info(&self, kind: MessageKind, detail: &str) {
		tracing::info!(kind = kind.code(), detail, "{kind}");
	}

	fn error(&self, kind: MessageKind, detail: &str) {
		tracing::error!(kind = kind.code(), detail, "{kind}");
	}
}
