use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

const SAMPLES: [&str; 4] = [
    "void f(int *p, int n) { int *q = p; for (int i = 0; i < n; i++) q[i] = 0; }",
    "void h(int *p) { { int *p = 0; p[0]=0; } p[1]=1; }",
    "char *g;\nvoid a(char *s, char t[]) { char **u = &s; u[0] = t; }\nvoid b(void) { g++; }\n",
    "int add(int a, int b) { return a + b; }\n",
];

#[rstest]
#[case(SAMPLES[0])]
#[case(SAMPLES[1])]
#[case(SAMPLES[2])]
#[case(SAMPLES[3])]
fn rewriting_is_idempotent(#[case] source: &str) {
    let once = rewrite(source);
    assert_eq!(rewrite(&once), once);
}

#[rstest]
#[case(SAMPLES[0])]
#[case(SAMPLES[1])]
#[case(SAMPLES[2])]
fn names_are_sequential_without_gaps(#[case] source: &str) {
    let result = rename_buffers(source).expect("rewrite should succeed");
    let expected: Vec<_> = (1..=result.bindings.len())
        .map(|n| format!("buffer{n}"))
        .collect();
    let actual: Vec<_> = result.bindings.iter().map(|b| b.renamed.clone()).collect();
    assert_eq!(actual, expected);
}

#[rstest]
#[case(SAMPLES[0])]
#[case(SAMPLES[1])]
#[case(SAMPLES[2])]
fn declaration_order_follows_source_order(#[case] source: &str) {
    let result = rename_buffers(source).expect("rewrite should succeed");
    let starts: Vec<_> = result.bindings.iter().map(|b| b.span.start).collect();
    let mut sorted = starts.clone();
    sorted.sort_unstable();
    assert_eq!(starts, sorted);
}

#[test]
fn output_length_matches_edit_deltas() {
    let source = SAMPLES[0];
    let result = rename_buffers(source).expect("rewrite should succeed");
    // p -> buffer1 twice, q -> buffer2 twice; each grows by six bytes.
    assert_eq!(result.edit_count, 4);
    assert_eq!(result.output.len(), source.len() + 4 * 6);
}

#[test]
fn every_occurrence_gets_the_same_name() {
    let source = "void f(char *s) { s[0] = s[1]; s++; if (s) s--; }";
    let output = rewrite(source);
    assert_eq!(output.matches("buffer1").count(), 6);
    assert!(!output.contains(" s"));
}
