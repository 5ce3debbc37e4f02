use crate::common::command::{Roots, dirdiff_stdout, roots};
use crate::common::file::{copy_tree, write_generated_files};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_nothing_for_identical_trees(roots: Roots) -> Result<(), Box<dyn std::error::Error>> {
    write_generated_files(&roots.new_root(), 5);
    write_generated_files(&roots.new_root().join("nested").join("deeper"), 3);
    roots.mkdir_new("empty");
    std::fs::remove_dir_all(roots.old_root())?;
    copy_tree(&roots.new_root(), &roots.old_root());

    let expected_output = format!("{}Changed: 0\n", roots.header());
    let actual_output = dirdiff_stdout(&roots, &[]);

    assert_eq!(actual_output, expected_output);

    Ok(())
}
