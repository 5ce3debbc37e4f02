use crate::common::file::{FileSpec, create_directory, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

/// A scratch directory holding the `new` and `old` roots
pub struct Roots {
    pub dir: TempDir,
}

impl Roots {
    pub fn new_root(&self) -> PathBuf {
        self.dir.path().join("new")
    }

    pub fn old_root(&self) -> PathBuf {
        self.dir.path().join("old")
    }

    pub fn write_new(&self, relative_path: &str, content: &str) {
        write_file(FileSpec::new(
            self.new_root().join(relative_path),
            content.to_string(),
        ));
    }

    pub fn write_old(&self, relative_path: &str, content: &str) {
        write_file(FileSpec::new(
            self.old_root().join(relative_path),
            content.to_string(),
        ));
    }

    pub fn mkdir_new(&self, relative_path: &str) {
        create_directory(&self.new_root().join(relative_path));
    }

    pub fn mkdir_old(&self, relative_path: &str) {
        create_directory(&self.old_root().join(relative_path));
    }

    /// First line of every successful report
    pub fn header(&self) -> String {
        format!(
            "diff {} {}\n",
            canonical(&self.new_root()).display(),
            canonical(&self.old_root()).display()
        )
    }
}

#[fixture]
pub fn roots() -> Roots {
    let dir = TempDir::new().expect("Failed to create temp dir");
    create_directory(&dir.path().join("new"));
    create_directory(&dir.path().join("old"));

    Roots { dir }
}

/// The scenario used throughout: one file resized, one untouched, one removed
#[fixture]
pub fn populated_roots(roots: Roots) -> Roots {
    roots.write_new("a.txt", "hello");
    roots.write_new("b.txt", "same");
    roots.write_old("a.txt", "hi");
    roots.write_old("b.txt", "same");
    roots.write_old("c.txt", "x");

    roots
}

pub fn canonical(path: &Path) -> PathBuf {
    path.canonicalize()
        .unwrap_or_else(|e| panic!("Failed to canonicalize {:?}: {}", path, e))
}

pub fn run_dirdiff_command(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("dirdiff").expect("Failed to find dirdiff binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn dirdiff(roots: &Roots, extra_args: &[&str]) -> Command {
    let new_root = roots.new_root();
    let old_root = roots.old_root();
    let mut args = vec![
        new_root.to_str().expect("Invalid new root"),
        old_root.to_str().expect("Invalid old root"),
    ];
    args.extend_from_slice(extra_args);

    run_dirdiff_command(&args)
}

pub fn dirdiff_stdout(roots: &Roots, extra_args: &[&str]) -> String {
    let output = dirdiff(roots, extra_args).assert().success();
    String::from_utf8(output.get_output().stdout.clone()).expect("Invalid UTF-8 output")
}
