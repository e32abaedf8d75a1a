//! Path coercion and common prefix resolution

/// Rewrite `{pk}` path variables to `{id}`
///
/// # Example
///
/// ```rust
/// use swagger_missing_core::coerce_path;
///
/// assert_eq!(coerce_path("/pizza/{pk}/"), "/pizza/{id}/");
/// assert_eq!(coerce_path("/pizza/{pk_list}/"), "/pizza/{pk_list}/");
/// ```
pub fn coerce_path(path: &str) -> String {
	path.replace("{pk}", "{id}")
}

/// Determine the path prefix shared by all paths
///
/// For each path, the candidate prefix is its leading literal segments (up to
/// the first `{variable}` segment) minus the last one. If any path has an
/// empty candidate the prefix is `/`; otherwise it is the longest run of
/// segments common to every candidate, with leading and trailing slashes.
///
/// Returns `None` for an empty path list.
///
/// # Example
///
/// ```rust
/// use swagger_missing_core::determine_path_prefix;
///
/// let prefix = determine_path_prefix(&[
///     "/api/v1/pizza/",
///     "/api/v1/pizza/{id}/",
///     "/api/v1/topping/",
/// ]);
/// assert_eq!(prefix.as_deref(), Some("/api/v1/"));
/// ```
pub fn determine_path_prefix<S: AsRef<str>>(paths: &[S]) -> Option<String> {
	if paths.is_empty() {
		return None;
	}

	let mut common: Option<Vec<&str>> = None;
	for path in paths {
		let mut initial: Vec<&str> = path
			.as_ref()
			.trim_matches('/')
			.split('/')
			.take_while(|segment| !segment.contains('{'))
			.filter(|segment| !segment.is_empty())
			.collect();
		initial.pop();

		if initial.is_empty() {
			return Some("/".to_string());
		}

		common = Some(match common {
			None => initial,
			Some(current) => current
				.into_iter()
				.zip(initial)
				.take_while(|(a, b)| a == b)
				.map(|(a, _)| a)
				.collect(),
		});
	}

	match common {
		Some(segments) if !segments.is_empty() => Some(format!("/{}/", segments.join("/"))),
		_ => Some("/".to_string()),
	}
}
