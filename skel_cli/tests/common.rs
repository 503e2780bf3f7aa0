use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn skel_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("skel"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd
}

/// Skeleton text with `delimiters` delimiter lines. Section `i` holds the
/// line `  public int section{i}() {}`.
#[allow(dead_code)]
pub fn skeleton_text(delimiters: usize) -> String {
	let mut content = String::new();

	for index in 0..=delimiters {
		content.push_str(&format!("  public int section{index}() {{}}\n"));

		if index < delimiters {
			content.push_str(&format!("--- before section {}\n", index + 1));
		}
	}

	content
}
