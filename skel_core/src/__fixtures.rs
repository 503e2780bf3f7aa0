use std::cell::RefCell;
use std::io;
use std::io::Read;

use crate::DELIMITER;
use crate::Diagnostics;
use crate::MessageKind;
use crate::NEWLINE;
use crate::ResourceRegistry;
use crate::SkeletonLoader;

/// Skeleton text with `delimiters` plain `---` lines. Section `i` holds the
/// single line `section i`.
pub fn template(delimiters: usize) -> String {
	let mut content = String::new();

	for index in 0..=delimiters {
		content.push_str(&format!("section {index}{NEWLINE}"));

		if index < delimiters {
			content.push_str(DELIMITER);
			content.push_str(NEWLINE);
		}
	}

	content
}

/// The sections [`template`] is expected to produce.
pub fn template_sections(delimiters: usize) -> Vec<String> {
	(0..=delimiters)
		.map(|index| format!("section {index}{NEWLINE}"))
		.collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Level {
	Info,
	Error,
}

/// Collects every message reported by a loader.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
	messages: RefCell<Vec<(Level, MessageKind, String)>>,
}

impl RecordingDiagnostics {
	pub fn messages(&self) -> Vec<(Level, MessageKind, String)> {
		self.messages.borrow().clone()
	}

	pub fn errors(&self) -> Vec<(MessageKind, String)> {
		self.messages
			.borrow()
			.iter()
			.filter(|(level, ..)| *level == Level::Error)
			.map(|(_, kind, detail)| (*kind, detail.clone()))
			.collect()
	}
}

impl Diagnostics for RecordingDiagnostics {
	fn info(&self, kind: MessageKind, detail: &str) {
		self.messages
			.borrow_mut()
			.push((Level::Info, kind, detail.to_string()));
	}

	fn error(&self, kind: MessageKind, detail: &str) {
		self.messages
			.borrow_mut()
			.push((Level::Error, kind, detail.to_string()));
	}
}

pub fn recording_loader(
	resources: ResourceRegistry,
	diagnostics: &RecordingDiagnostics,
) -> SkeletonLoader<&RecordingDiagnostics> {
	SkeletonLoader::with_diagnostics(resources, diagnostics)
}

/// A reader that fails on the first read.
pub struct FailingReader;

impl Read for FailingReader {
	fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
		Err(io::Error::other("device unplugged"))
	}
}

pub fn utf8(bytes: &[u8]) -> String {
	String::from_utf8_lossy(bytes).to_string()
}
