use std::{
    fs::{create_dir_all, remove_dir_all, write},
    path::PathBuf,
    process,
};

/// Builds a small served tree under the system temp directory.
///
/// ```text
/// a.txt            "hello"
/// sub/index.html   "<h1>hi</h1>"
/// docs/B.md
/// docs/a file.txt
/// docs/nested/
/// ```
pub fn site(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("cors-file-server-{name}-{}", process::id()));
    let _ = remove_dir_all(&root);

    create_dir_all(root.join("sub")).unwrap();
    create_dir_all(root.join("docs/nested")).unwrap();
    write(root.join("a.txt"), "hello").unwrap();
    write(root.join("sub/index.html"), "<h1>hi</h1>").unwrap();
    write(root.join("docs/B.md"), "# B").unwrap();
    write(root.join("docs/a file.txt"), "spaced").unwrap();

    root.canonicalize().unwrap()
}
