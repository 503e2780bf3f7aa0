use std::borrow::Cow;
use std::collections::BTreeMap;

/// Name of the bundled default skeleton.
pub const DEFAULT_LOCATION: &str = "skeleton.default";

const DEFAULT_SKELETON: &str = include_str!("../resources/skeleton.default");

/// Named skeleton texts that can be loaded with
/// [`SkeletonLoader::load_from_resource`](crate::SkeletonLoader::load_from_resource).
///
/// [`ResourceRegistry::bundled`] contains the default skeleton under
/// [`DEFAULT_LOCATION`]. More entries can be registered, or the default
/// replaced, with [`ResourceRegistry::insert`].
#[derive(Debug, Clone)]
pub struct ResourceRegistry {
	entries: BTreeMap<String, Cow<'static, str>>,
}

impl ResourceRegistry {
	/// A registry with no resources at all.
	pub fn empty() -> Self {
		Self {
			entries: BTreeMap::new(),
		}
	}

	/// A registry holding the resources shipped with this crate.
	pub fn bundled() -> Self {
		let mut registry = Self::empty();
		registry.insert(DEFAULT_LOCATION, DEFAULT_SKELETON);
		registry
	}

	pub fn insert(&mut self, name: impl Into<String>, content: impl Into<Cow<'static, str>>) {
		self.entries.insert(name.into(), content.into());
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries.get(name).map(|content| &**content)
	}
}

impl Default for ResourceRegistry {
	fn default() -> Self {
		Self::bundled()
	}
}
