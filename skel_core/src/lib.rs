//! `skel_core` stores the skeleton of generated scanners: the boilerplate
//! source text that a scanner generator interleaves with the code it
//! generates.
//!
//! ## Skeleton Format
//!
//! A skeleton is plain UTF-8 text split into sections by delimiter lines. Any
//! line that starts with `---` ends the current section; the rest of that
//! line is ignored. A valid skeleton has exactly 20 delimiter lines and
//! therefore [`SECTION_COUNT`] (21) sections.
//!
//! ```text
//!   /** This character denotes the end of file */
//!   public static final int YYEOF = -1;
//! --- lexical states
//!   /** ZZ_LEXSTATE[l] is the state in the DFA for the lexical state l */
//! ...
//! ```
//!
//! ## Lifecycle
//!
//! ```text
//! SkeletonLoader::bootstrap (bundled default)
//!   → optional load_from_file / load_from_reader / load_from_resource
//!   → optional Skeleton::make_private
//!   → one SectionCursor per output, emit_next() between generated code
//! ```
//!
//! All mutation happens before the first cursor is created. Cursors borrow
//! the [`Skeleton`] immutably, so the borrow checker keeps the two phases
//! apart and cursors on different outputs can run side by side.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use skel_core::SkeletonLoader;
//!
//! let loader = SkeletonLoader::new();
//! let mut skeleton = loader.bootstrap().unwrap();
//! skeleton.make_private();
//!
//! let mut out = Vec::new();
//! let mut cursor = skeleton.cursor(&mut out);
//! cursor.emit_next().unwrap();
//! // ... generated code ...
//! cursor.emit_next().unwrap();
//! ```

pub use config::*;
pub use cursor::*;
pub use diagnostics::*;
pub use error::*;
pub use loader::*;
pub use parser::*;
pub use resources::*;
pub use skeleton::*;
pub use text::*;

pub mod config;
mod cursor;
mod diagnostics;
#[allow(unused_assignments)]
mod error;
mod loader;
mod parser;
mod resources;
mod skeleton;
mod text;

/// Number of sections in a valid skeleton.
pub const SECTION_COUNT: usize = 21;

/// Marker that starts a section delimiter line.
pub const DELIMITER: &str = "---";

/// Line terminator written after every line of a section.
pub const NEWLINE: &str = if cfg!(windows) { "\r\n" } else { "\n" };

#[cfg(test)]
mod __fixtures;
