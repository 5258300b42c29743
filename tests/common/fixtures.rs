//! Reusable test content.

/// Maintainer used by most tests
pub const MAINTAINER: &str = "tester";

/// `.pypirc` holding tokens for both indexes
pub const PYPIRC_WITH_TOKENS: &str = "[distutils]
index-servers =
    pypi
    testpypi

[pypi]
username = __token__
password = pypi-prod-token

[testpypi]
repository = https://test.pypi.org/legacy/
username = __token__
password = pypi-test-token
";

/// Config that allows `tester` and replaces every tool with plain shell.
///
/// The upload command records the repository it was asked for in
/// `upload.txt` so tests can see where the package would have gone.
pub fn shell_config(check: &str) -> String {
    format!(
        r#"[deploy]
allowed_users = ["{MAINTAINER}"]

[commands]
clean = "rm -rf dist"
build = "mkdir -p dist && echo \"$ENV\" > dist/env.txt"
check = "{check}"
upload = "echo {{repository}} > upload.txt"
"#
    )
}
