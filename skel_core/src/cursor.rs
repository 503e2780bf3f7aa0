use std::io::Write;

use crate::SkelError;
use crate::SkelResult;
use crate::Skeleton;

/// Emits the sections of a [`Skeleton`] to one output, one section per call.
///
/// Generated code is written to the same output between calls, so the
/// number of [`emit_next`](SectionCursor::emit_next) calls has to line up
/// with the skeleton exactly. Asking for a section past the last one is an
/// error rather than a no-op.
#[derive(Debug)]
pub struct SectionCursor<'a, W> {
	skeleton: &'a Skeleton,
	out: W,
	pos: usize,
}

impl<'a, W: Write> SectionCursor<'a, W> {
	pub fn new(skeleton: &'a Skeleton, out: W) -> Self {
		Self {
			skeleton,
			out,
			pos: 0,
		}
	}

	/// Write the next section verbatim and advance.
	pub fn emit_next(&mut self) -> SkelResult<()> {
		let Some(section) = self.skeleton.get(self.pos) else {
			return Err(SkelError::EmissionExhausted(self.skeleton.len()));
		};

		self.out.write_all(section.as_bytes())?;
		self.pos += 1;

		Ok(())
	}

	/// The output, for writing generated code between sections.
	pub fn get_mut(&mut self) -> &mut W {
		&mut self.out
	}

	pub fn into_inner(self) -> W {
		self.out
	}
}
