mod common;

use skel_core::AnyEmptyResult;

#[test]
fn check_passes_with_bundled_skeleton() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::skel_cmd()
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Check passed"))
		.stdout(predicates::str::contains("skeleton.default has 21 sections"));

	Ok(())
}

#[test]
fn check_passes_with_custom_skeleton() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let skeleton_path = tmp.path().join("scanner.skel");
	std::fs::write(&skeleton_path, common::skeleton_text(20))?;

	common::skel_cmd()
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.arg("--skeleton")
		.arg(&skeleton_path)
		.assert()
		.success()
		.stdout(predicates::str::contains("has 21 sections"));

	Ok(())
}

#[test]
fn check_fails_on_malformed_skeleton() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let skeleton_path = tmp.path().join("broken.skel");
	std::fs::write(&skeleton_path, common::skeleton_text(2))?;

	common::skel_cmd()
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.arg("--skeleton")
		.arg(&skeleton_path)
		.assert()
		.code(2)
		.stderr(predicates::str::contains("skel::malformed_skeleton"))
		.stderr(predicates::str::contains(
			"Skeleton file has the wrong number of sections",
		));

	Ok(())
}

#[test]
fn check_fails_on_missing_skeleton() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::skel_cmd()
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.arg("--skeleton")
		.arg(tmp.path().join("missing.skel"))
		.assert()
		.code(2)
		.stderr(predicates::str::contains("skel::resource_unavailable"))
		.stderr(predicates::str::contains("Cannot read skeleton file"));

	Ok(())
}

#[test]
fn check_uses_skeleton_from_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::create_dir_all(tmp.path().join("templates"))?;
	std::fs::write(
		tmp.path().join("templates/scanner.skel"),
		common::skeleton_text(20),
	)?;
	std::fs::write(
		tmp.path().join("skel.toml"),
		"[skeleton]\npath = \"templates/scanner.skel\"\nprivate = true\n",
	)?;

	common::skel_cmd()
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("scanner.skel has 21 sections"))
		.stdout(predicates::str::contains("rewritten to private"));

	Ok(())
}

#[test]
fn check_fails_on_invalid_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("skel.toml"), "[skeleton\n")?;

	common::skel_cmd()
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("skel::config_parse"));

	Ok(())
}

#[test]
fn verbose_check_logs_reading_skeleton() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let skeleton_path = tmp.path().join("scanner.skel");
	std::fs::write(&skeleton_path, common::skeleton_text(20))?;

	common::skel_cmd()
		.arg("check")
		.arg("--verbose")
		.arg("--path")
		.arg(tmp.path())
		.arg("--skeleton")
		.arg(&skeleton_path)
		.assert()
		.success()
		.stderr(predicates::str::contains("Reading skeleton file"));

	Ok(())
}

#[test]
fn missing_subcommand_fails() {
	common::skel_cmd().assert().code(1);
}
