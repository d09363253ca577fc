use super::*;

mod declarations;
mod fixture_rewrite;
mod properties;

fn rewrite(source: &str) -> String {
    rename_buffers(source)
        .expect("rewrite should succeed")
        .output
}

fn renamed_pairs(source: &str) -> Vec<(String, String)> {
    rename_buffers(source)
        .expect("rewrite should succeed")
        .bindings
        .into_iter()
        .map(|b| (b.original, b.renamed))
        .collect()
}
