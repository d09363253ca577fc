use pretty_assertions::assert_eq;

use super::*;

// ── Fixture rewriting ────────────────────────────────────────

const IMPLICIT_RETURN_TYPE: &str = include_str!("../../tests/fixtures/implicit_return_type.c");
const IMPLICIT_RETURN_TYPE_EXPECTED: &str =
    include_str!("../../tests/fixtures/implicit_return_type_expected.c");

#[test]
fn session_decoder_fixture() {
    assert_eq!(rewrite(IMPLICIT_RETURN_TYPE), IMPLICIT_RETURN_TYPE_EXPECTED);
}

#[test]
fn session_decoder_fixture_bindings() {
    let names: Vec<_> = renamed_pairs(IMPLICIT_RETURN_TYPE)
        .into_iter()
        .map(|(original, _)| original)
        .collect();
    assert_eq!(names, vec!["p", "name", "endptr", "current", "tmp"]);
}

#[test]
fn session_decoder_fixture_is_stable_on_rerun() {
    let once = rewrite(IMPLICIT_RETURN_TYPE);
    assert_eq!(rewrite(&once), once);
}
