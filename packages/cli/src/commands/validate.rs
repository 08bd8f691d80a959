use super::load_document;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use curriculum_validator::{validate_document, ValidationReport};
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Course JSON file or directory of them
    pub input: PathBuf,

    /// Also list files that pass
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

/// One entry of the `--format json` output
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub file: PathBuf,
    pub report: ValidationReport,
}

pub fn validate(args: ValidateArgs, _cwd: &Path) -> Result<()> {
    let json = args.format == "json";
    if !json {
        println!("🔍 {} Curriculum validator", "Starting".green().bold());
        println!("   Input: {}", args.input.display());
        println!();
    }

    let files = if args.input.is_file() {
        vec![args.input.clone()]
    } else if args.input.is_dir() {
        let files = find_json_files(&args.input);
        if !json {
            println!("   Found {} .json files", files.len());
            println!();
        }
        files
    } else {
        return Err(anyhow::anyhow!(
            "Input path does not exist: {}",
            args.input.display()
        ));
    };

    let mut invalid_files = 0;
    let mut total_violations = 0;
    let mut file_reports = Vec::new();

    for file in &files {
        let report = validate_file(file)?;
        total_violations += report.violations().len();
        if !report.is_valid() {
            invalid_files += 1;
        }

        if json {
            file_reports.push(FileReport {
                file: file.clone(),
                report,
            });
        } else {
            print_report(file, &report, args.verbose);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&file_reports)?);
    } else {
        println!();
        println!(
            "✨ {} Validation complete!",
            if invalid_files > 0 {
                "Done".red().bold()
            } else {
                "Done".green().bold()
            }
        );
        println!("   Files checked: {}", files.len());

        if total_violations > 0 {
            println!("   {} {}", "Violations:".red(), total_violations);
        } else {
            println!("   {} No issues found!", "✓".green());
        }
    }

    // Exit with error code if any document is invalid
    if invalid_files > 0 {
        std::process::exit(1);
    }

    Ok(())
}

pub fn validate_file(path: &Path) -> Result<ValidationReport> {
    let document = load_document(path)?;
    let report = validate_document(&document);
    tracing::debug!(
        file = %path.display(),
        violations = report.violations().len(),
        "validated"
    );
    Ok(report)
}

fn print_report(file_path: &Path, report: &ValidationReport, verbose: bool) {
    if report.is_valid() {
        if verbose {
            println!("{} {}", "✓".green(), file_path.display());
        }
        return;
    }

    println!("{} {}", "✗".red(), file_path.display());
    for violation in report.violations() {
        println!(
            "  {} [{}] {}",
            "error".red().bold(),
            violation.rule,
            violation.message
        );
    }
    println!();
}

fn find_json_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|path| {
            path.is_file() && path.extension().map(|e| e == "json").unwrap_or(false)
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const NO_LESSONS: &str =
        r#"{ "name": "Tennis", "description": "Basics", "level": "BEGINNER", "lessons": [] }"#;

    #[test]
    fn test_validate_file_reports_violations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("course.json");
        fs::write(&path, NO_LESSONS).unwrap();

        let report = validate_file(&path).unwrap();
        assert_eq!(report.messages(), vec!["Course must have at least 1 lesson."]);
    }

    #[test]
    fn test_validate_file_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ nope").unwrap();

        let err = validate_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_json_output_labels_each_file() {
        let entries = vec![
            FileReport {
                file: PathBuf::from("a.json"),
                report: ValidationReport::Valid,
            },
            FileReport {
                file: PathBuf::from("b.json"),
                report: validate_document(&curriculum_model::CurriculumDocument::default()),
            },
        ];

        let value = serde_json::to_value(&entries).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["file"], "a.json");
        assert_eq!(array[0]["report"]["status"], "valid");
        assert_eq!(array[1]["file"], "b.json");
        assert_eq!(array[1]["report"]["status"], "invalid");
    }

    #[test]
    fn test_find_json_files_skips_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.json"), NO_LESSONS).unwrap();
        fs::write(dir.path().join("nested/a.json"), NO_LESSONS).unwrap();
        fs::write(dir.path().join("notes.txt"), "hi").unwrap();

        let files = find_json_files(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() == "json"));
    }
}
