use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use quill_cli::{Args, run};

/// Collects all .toml files from a directory
fn collect_source_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demos live at the workspace root, not in the crate
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args_for(input: &Path, output: PathBuf) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        indentation: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_source_files(demos_dir());

    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!("{}.out", demo_path.file_stem().unwrap().to_string_lossy());
        let output_path = temp_dir.path().join(output_filename);

        if let Err(e) = run(&args_for(demo_path, output_path.clone())) {
            failed_demos.push((demo_path.clone(), e));
            continue;
        }

        let output = fs::read_to_string(&output_path).expect("Failed to read output");
        assert!(
            !output.is_empty(),
            "{} rendered an empty document",
            demo_path.display()
        );
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_source_files(demos_dir().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_filename = format!(
            "error_{}.out",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if run(&args_for(demo_path, output_path)).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "All {} error demos failed as expected",
        error_demos.len()
    );
}

#[test]
fn e2e_indentation_flag_overrides_source() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("fragment.toml");
    fs::write(
        &input,
        r#"
        format = "fragment"
        indentation = { kind = "spaces", count = 8 }

        [[nodes]]
        type = "element"
        name = "ul"
        children = [{ type = "element", name = "li", children = [{ type = "text", value = "x" }] }]
        "#,
    )
    .expect("Failed to write source");
    let output = temp_dir.path().join("fragment.html");

    let mut args = args_for(&input, output.clone());
    args.indentation = Some("tabs".parse().expect("Valid indentation"));
    run(&args).expect("Failed to render");

    assert_eq!(
        fs::read_to_string(&output).expect("Failed to read output"),
        "<ul>\n\t<li>x</li>\n</ul>"
    );
}
