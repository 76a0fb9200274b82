//! Tests for the application entry sequence

use skeleton::app;
use skeleton::output::OutputMode;

fn run_human() -> (i32, String) {
    let mut buf = Vec::new();
    let status = app::run(OutputMode::Human, &mut buf).unwrap();
    (status, String::from_utf8(buf).unwrap())
}

#[test]
fn run_returns_success() {
    assert_eq!(run_human().0, 0);
}

#[test]
fn run_prints_exact_lines() {
    let (_, out) = run_human();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        [
            "Welcome to the Python Application Skeleton!",
            "Hello, World!",
            "Sum of 10 and 20 is: 30",
        ]
    );
}

#[test]
fn summary_uses_module_functions() {
    let summary = app::summary();
    assert_eq!(summary.welcome, app::WELCOME);
    assert_eq!(summary.greeting, "Hello, World!");
    assert_eq!(summary.sum, "Sum of 10 and 20 is: 30");
}

#[test]
fn run_reports_write_failure() {
    struct Broken;

    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let err = app::run(OutputMode::Human, &mut Broken).unwrap_err();
    assert!(err.to_string().contains("failed to write output"));
}
