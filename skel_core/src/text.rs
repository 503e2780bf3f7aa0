/// Replace every occurrence of `target` in `source` with `replacement`.
///
/// Matching is literal and runs left to right. Each match consumes the whole
/// target before the search resumes, so matches never overlap. An empty
/// `target` matches nothing and returns `source` unchanged.
pub fn replace(target: &str, replacement: &str, source: &str) -> String {
	if target.is_empty() {
		return source.to_string();
	}

	let mut result = String::with_capacity(source.len());
	let mut last = 0;

	for (start, matched) in source.match_indices(target) {
		result.push_str(&source[last..start]);
		result.push_str(replacement);
		last = start + matched.len();
	}

	result.push_str(&source[last..]);
	result
}
