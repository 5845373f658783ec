//! A shell-script stand-in for `otool`, for tests running the binary
//!
//! The script answers `-L <file>` with canned output for a small graph:
//!
//! - `<dir>/bin/app` links `@executable_path/../lib/libfoo.dylib` and libSystem
//! - `<dir>/lib/libfoo.dylib` links itself through `@loader_path/` and libSystem
//! - `<dir>/bin/fat` is a universal binary with two architecture slices
//! - `<dir>/bin/odd` prints a line that is not a dependency line
//!
//! Any other file fails with `can't open file` on stderr.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

const SCRIPT: &str = r#"#!/bin/sh
if [ "$1" != "-L" ]; then
    echo "usage: fake-otool -L file" >&2
    exit 2
fi
case "$2" in
    */bin/app)
        printf '%s:\n' "$2"
        printf '\t@executable_path/../lib/libfoo.dylib (compatibility version 1.0.0, current version 2.0.0)\n'
        printf '\t/usr/lib/libSystem.B.dylib (compatibility version 1.0.0, current version 1311.0.0)\n'
        ;;
    */lib/libfoo.dylib)
        printf '%s:\n' "$2"
        printf '\t@loader_path/libfoo.dylib (compatibility version 1.0.0, current version 2.0.0)\n'
        printf '\t/usr/lib/libSystem.B.dylib (compatibility version 1.0.0, current version 1311.0.0)\n'
        ;;
    */bin/fat)
        printf '%s (architecture x86_64):\n' "$2"
        printf '\t/usr/lib/libSystem.B.dylib (compatibility version 1.0.0, current version 1311.0.0)\n'
        printf '%s (architecture arm64e):\n' "$2"
        printf '\t/usr/lib/libSystem.B.dylib (compatibility version 1.0.0, current version 1311.0.0)\n'
        ;;
    /usr/lib/libSystem.B.dylib)
        printf '%s:\n' "$2"
        printf '\t/usr/lib/libSystem.B.dylib (compatibility version 1.0.0, current version 1311.0.0)\n'
        ;;
    */bin/odd)
        printf '%s:\n' "$2"
        printf 'Archive : %s\n' "$2"
        ;;
    *)
        echo "fake-otool: can't open file: $2" >&2
        exit 1
        ;;
esac
"#;

/// Writes the fake utility into `dir` and returns its path.
pub fn write_fake_otool(dir: &Path) -> PathBuf {
    let path = dir.join("fake-otool");
    fs::write(&path, SCRIPT).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

pub fn app_path(dir: &Path) -> String {
    dir.join("bin/app").display().to_string()
}

/// Plain text listing expected for `<dir>/bin/app`
pub fn text_listing(dir: &Path) -> String {
    format!(
        "{d}/bin/app:\n\t{d}/lib/libfoo.dylib\n\t/usr/lib/libSystem.B.dylib\n",
        d = dir.display()
    )
}

/// Verbose text listing expected for `<dir>/bin/app`
pub fn verbose_listing(dir: &Path) -> String {
    format!(
        "{d}/bin/app:\n\
         \t{d}/lib/libfoo.dylib (compatibility version 1.0.0, current version 2.0.0)\n\
         \t/usr/lib/libSystem.B.dylib (compatibility version 1.0.0, current version 1311.0.0)\n",
        d = dir.display()
    )
}

/// Dot graph expected for `<dir>/bin/app`
pub fn dot_listing(dir: &Path) -> String {
    format!(
        "digraph G {{\n\
         \t\"{d}/bin/app\" -> \"{d}/lib/libfoo.dylib\";\n\
         \t\"{d}/bin/app\" -> \"/usr/lib/libSystem.B.dylib\";\n\
         \t\"{d}/lib/libfoo.dylib\" -> \"/usr/lib/libSystem.B.dylib\";\n\
         }}\n",
        d = dir.display()
    )
}
