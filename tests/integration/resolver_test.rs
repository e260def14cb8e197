//! Integration tests for module resolution against a real filesystem

use deadweight::resolver::{lexical_canonical, ModuleResolver, Resolution};
use std::path::PathBuf;

fn write_file(root: &std::path::Path, rel: &str, contents: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_extension_probe_round_trip_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let root = lexical_canonical(dir.path());
    write_file(&root, "src/a.ts", "export const a = 1;\n");

    let resolver = ModuleResolver::new(&root, "@/", "src");

    // importing "./a" from src/ must land on a.ts regardless of which
    // candidate extension matched
    let resolution = resolver.resolve("./a", &root.join("src"));
    let expected = lexical_canonical(&root.join("src/a.ts"));
    assert_eq!(resolution, Resolution::Module(expected));
}

#[test]
fn test_literal_path_wins_over_probing() {
    let dir = tempfile::tempdir().unwrap();
    let root = lexical_canonical(dir.path());
    write_file(&root, "src/a.ts", "export const a = 1;\n");

    let resolver = ModuleResolver::new(&root, "@/", "src");

    let resolution = resolver.resolve("./a.ts", &root.join("src"));
    let expected = lexical_canonical(&root.join("src/a.ts"));
    assert_eq!(resolution, Resolution::Module(expected));
}

#[test]
fn test_alias_resolves_under_source_root() {
    let dir = tempfile::tempdir().unwrap();
    let root = lexical_canonical(dir.path());
    write_file(&root, "src/components/Button.tsx", "export default 1;\n");

    let resolver = ModuleResolver::new(&root, "@/", "src");

    // the containing directory is irrelevant for aliased specifiers
    let resolution = resolver.resolve("@/components/Button", &root.join("src/app/deep/nested"));
    let expected = lexical_canonical(&root.join("src/components/Button.tsx"));
    assert_eq!(resolution, Resolution::Module(expected));
}

#[test]
fn test_separator_formatting_collapses_to_one_target() {
    let dir = tempfile::tempdir().unwrap();
    let root = lexical_canonical(dir.path());
    write_file(&root, "src/shared.ts", "export const s = 1;\n");

    // Two spellings of the same physical file must canonicalize equally
    let slashed = lexical_canonical(&root.join("src/shared.ts"));
    let mixed = lexical_canonical(&PathBuf::from(format!(
        "{}\\src\\shared.ts",
        root.display()
    )));
    let dotted = lexical_canonical(&root.join("src/./x/../shared.ts"));

    assert_eq!(slashed, mixed);
    assert_eq!(slashed, dotted);
}

#[test]
fn test_missing_target_is_unresolved() {
    let dir = tempfile::tempdir().unwrap();
    let root = lexical_canonical(dir.path());

    let resolver = ModuleResolver::new(&root, "@/", "src");
    assert_eq!(
        resolver.resolve("./not-there", &root.join("src")),
        Resolution::Unresolved
    );
}

#[test]
fn test_package_specifiers_never_touch_the_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    let root = lexical_canonical(dir.path());

    let resolver = ModuleResolver::new(&root, "@/", "src");
    assert_eq!(
        resolver.resolve("react", &root.join("src")),
        Resolution::Package("react".to_string())
    );
    assert_eq!(
        resolver.resolve("@scope/pkg/sub/path", &root.join("src")),
        Resolution::Package("@scope/pkg".to_string())
    );
}
