use std::io::Write;

use derive_more::Deref;

use crate::DELIMITER;
use crate::NEWLINE;
use crate::SECTION_COUNT;
use crate::SectionCursor;
use crate::parser::parse_sections;
use crate::text::replace;

/// The token rewritten by [`Skeleton::make_private`].
pub const PUBLIC_TOKEN: &str = " public ";
/// The replacement written by [`Skeleton::make_private`].
pub const PRIVATE_TOKEN: &str = " private ";

/// The validated section table of a skeleton.
///
/// A `Skeleton` always holds exactly [`SECTION_COUNT`] sections in source
/// order. It dereferences to the section array for read access; the only
/// mutations are wholesale replacement (see [`SkeletonLoader`]) and
/// [`Skeleton::make_private`], both of which must happen before any
/// [`SectionCursor`] starts emitting.
///
/// [`SkeletonLoader`]: crate::SkeletonLoader
#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct Skeleton {
	sections: [String; SECTION_COUNT],
}

impl Skeleton {
	/// Build a skeleton from already split sections. Returns the sections
	/// back when their number is not [`SECTION_COUNT`].
	pub fn from_sections(sections: Vec<String>) -> Result<Self, Vec<String>> {
		let sections = <[String; SECTION_COUNT]>::try_from(sections)?;
		Ok(Self { sections })
	}

	/// Parse skeleton text. On a wrong section count the number of sections
	/// found is returned instead.
	pub fn parse(content: &str) -> Result<Self, usize> {
		Self::from_sections(parse_sections(content)).map_err(|sections| sections.len())
	}

	/// Replace every `" public "` with `" private "` in all sections.
	///
	/// The section count and order are untouched and applying it twice is
	/// the same as applying it once. Adjacent tokens share a space, so a
	/// single replace pass over `" public public "` leaves the second token;
	/// passes repeat until no token is left.
	pub fn make_private(&mut self) {
		for section in &mut self.sections {
			while section.contains(PUBLIC_TOKEN) {
				*section = replace(PUBLIC_TOKEN, PRIVATE_TOKEN, section);
			}
		}
	}

	/// Start emitting this skeleton's sections to `out`.
	pub fn cursor<W: Write>(&self, out: W) -> SectionCursor<'_, W> {
		SectionCursor::new(self, out)
	}

	/// Reassemble the skeleton text with a delimiter line between sections.
	pub fn to_template_string(&self) -> String {
		let separator = format!("{DELIMITER}{NEWLINE}");
		self.sections.join(separator.as_str())
	}
}
