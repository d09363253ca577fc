use pretty_assertions::assert_eq;

use super::*;

// ── Declarator shapes ────────────────────────────────────────

#[test]
fn mixed_declarator_list() {
    assert_eq!(
        rewrite("void f(void) { int n, *p, a[3], m; p = a; n = m; }"),
        "void f(void) { int n, *buffer1, buffer2[3], m; buffer1 = buffer2; n = m; }"
    );
}

#[test]
fn pointer_to_array_and_array_of_pointers() {
    assert_eq!(
        rewrite("void f(void) { int (*rows)[4]; char *names[8]; rows[0][1] = 0; names[2] = 0; }"),
        "void f(void) { int (*buffer1)[4]; char *buffer2[8]; buffer1[0][1] = 0; buffer2[2] = 0; }"
    );
}

#[test]
fn pointer_to_pointer_and_multidimensional_array() {
    assert_eq!(
        rewrite("void f(char **argv) { int grid[2][2]; grid[0][0] = argv[0][0]; }"),
        "void f(char **buffer1) { int buffer2[2][2]; buffer2[0][0] = buffer1[0][0]; }"
    );
}

#[test]
fn function_pointer_local_is_a_buffer() {
    assert_eq!(
        rewrite("void f(void) { int (*cb)(int) = 0; cb(1); }"),
        "void f(void) { int (*buffer1)(int) = 0; buffer1(1); }"
    );
}

#[test]
fn initializer_references_are_resolved() {
    assert_eq!(
        rewrite("void f(const char *val, int len) { const char *end = val + len; while (val < end) val++; }"),
        "void f(const char *buffer1, int len) { const char *buffer2 = buffer1 + len; while (buffer1 < buffer2) buffer1++; }"
    );
}

#[test]
fn array_size_expressions_are_walked() {
    assert_eq!(
        rewrite("void f(int n, char *src) { char dst[n]; dst[0] = src[n - 1]; }"),
        "void f(int n, char *buffer1) { char buffer2[n]; buffer2[0] = buffer1[n - 1]; }"
    );
}

#[test]
fn casts_and_sizeof() {
    assert_eq!(
        rewrite("void f(void *raw) { char *bytes = (char *) raw; bytes[0] = sizeof(*bytes); }"),
        "void f(void *buffer1) { char *buffer2 = (char *) buffer1; buffer2[0] = sizeof(*buffer2); }"
    );
}

// ── Things that are never renamed ────────────────────────────

#[test]
fn plain_locals_and_parameters_are_untouched() {
    let source = "int f(int a, unsigned long b) { int c = a; long d = b; return c + d; }";
    assert_eq!(rewrite(source), source);
}

#[test]
fn typedef_pointer_types_are_not_resolved() {
    let source = "typedef char *str;\nvoid f(str s) { s[0] = 0; }\n";
    assert_eq!(rewrite(source), source);
}

#[test]
fn struct_fields_keep_their_names() {
    assert_eq!(
        rewrite("struct s { char *data; };\nvoid f(struct s *obj) { obj->data[0] = 0; }\n"),
        "struct s { char *data; };\nvoid f(struct s *buffer1) { buffer1->data[0] = 0; }\n"
    );
}

#[test]
fn function_names_returning_pointers_are_untouched() {
    assert_eq!(
        rewrite("char *dup(const char *s) { char *out = 0; return out; }"),
        "char *dup(const char *buffer1) { char *buffer2 = 0; return buffer2; }"
    );
}

#[test]
fn pointer_returning_prototype_keeps_its_name() {
    assert_eq!(
        rewrite("char *strdup(const char *s);\n"),
        "char *strdup(const char *buffer1);\n"
    );
}

#[test]
fn unnamed_prototype_parameters_are_skipped() {
    let source = "int cmp(const void *, const void *);\n";
    assert_eq!(rewrite(source), source);
}

// ── Binding log ──────────────────────────────────────────────

#[test]
fn bindings_follow_source_order() {
    assert_eq!(
        renamed_pairs("void f(char *a, int n, char b[]) { char *c; { int *d; } }"),
        vec![
            ("a".to_string(), "buffer1".to_string()),
            ("b".to_string(), "buffer2".to_string()),
            ("c".to_string(), "buffer3".to_string()),
            ("d".to_string(), "buffer4".to_string()),
        ]
    );
}
