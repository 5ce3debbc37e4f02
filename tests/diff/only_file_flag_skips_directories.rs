use crate::common::command::{Roots, dirdiff_stdout, roots};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("--onlyFile")]
#[case("--only-file")]
fn only_file_flag_skips_directories(
    roots: Roots,
    #[case] flag: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    roots.write_new("a.txt", "a");
    roots.mkdir_new("sub");
    roots.write_old("a.txt", "a");
    roots.write_old("sub/b.txt", "b");
    roots.mkdir_old("only-old-dir");

    let expected_output = format!("{}Changed: 1\n- sub/b.txt\n", roots.header());
    let actual_output = dirdiff_stdout(&roots, &[flag]);

    assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn directories_are_reported_without_only_file_flag(
    roots: Roots,
) -> Result<(), Box<dyn std::error::Error>> {
    roots.mkdir_old("only-old-dir");

    let expected_output = format!("{}Changed: 1\n- only-old-dir\n", roots.header());
    let actual_output = dirdiff_stdout(&roots, &[]);

    assert_eq!(actual_output, expected_output);

    Ok(())
}
