use super::RawImport;

/// Regex scan for import specifiers, used when a file defeats the syntax
/// parser. Coarser than the tree walk (it sees only single-line static
/// imports and `require` calls) but keeps the file's imports contributing to
/// the used-sets.
pub fn scan_imports_fallback(contents: &str) -> Vec<RawImport> {
    let import_pattern =
        regex::Regex::new(r#"(?:import\s+.*?from\s+|require\(|import\()\s*['"]([^'";]+)['"]"#)
            .unwrap();

    import_pattern
        .captures_iter(contents)
        .filter_map(|captures| {
            let matched = captures.get(1)?;
            let line = contents[..matched.start()].matches('\n').count() + 1;
            Some(RawImport {
                specifier: matched.as_str().to_string(),
                line,
            })
        })
        .collect()
}
