use iap_fs::{NormalizedPath, validate_relative_path};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("root", "a/b", "root/a/b")]
#[case("root/", "a", "root/a")]
#[case("root", "./a", "root/a")]
#[case("root", "", "root")]
#[case("", "a", "a")]
#[case("C:\\work", "out\\x.md", "C:/work/out/x.md")]
fn test_join(#[case] base: &str, #[case] segment: &str, #[case] expected: &str) {
    assert_eq!(NormalizedPath::new(base).join(segment).as_str(), expected);
}

#[rstest]
#[case(".cursor/rules", true)]
#[case("CLAUDE.md", true)]
#[case(".github/copilot-instructions.md", true)]
#[case("../outside", false)]
#[case("a/../../b", false)]
#[case("/etc/passwd", false)]
#[case("C:/Windows", false)]
#[case("", false)]
fn test_validate_relative_path(#[case] input: &str, #[case] ok: bool) {
    assert_eq!(validate_relative_path(input).is_ok(), ok);
}

#[test]
fn test_file_name_and_extension() {
    let path = NormalizedPath::new("out/.claude/skills/python-architecture/SKILL.md");
    assert_eq!(path.file_name(), Some("SKILL.md"));
    assert_eq!(path.extension(), Some("md"));
}

#[test]
fn test_hidden_file_has_no_extension() {
    assert_eq!(NormalizedPath::new("dir/.cursorrules").extension(), None);
}
