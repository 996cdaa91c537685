/// Banner shown for `--version` and above `--help`.
pub fn get_signature(version: &str) -> String {
    format!(
        r#"
  ⚒️  bump-version (release bumper for LazyArmaDev)

  package.json / package-lock.json / CHANGELOG.md

  https://github.com/DartRuffian/LazyArmaDev
  v{}
"#,
        version
    )
}
