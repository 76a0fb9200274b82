//! Tests for the Output module
//!
//! A summary renders either as the plain console lines or as JSON.

use skeleton::output::{OutputMode, Summary};

fn sample() -> Summary {
    Summary {
        welcome: "Welcome!".to_string(),
        greeting: "Hello, Bob!".to_string(),
        sum: "Sum of 1 and 2 is: 3".to_string(),
    }
}

fn render(summary: &Summary, mode: OutputMode) -> String {
    let mut buf = Vec::new();
    summary.render(mode, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn summary_renders_three_lines() {
    let text = render(&sample(), OutputMode::Human);
    assert_eq!(text, "Welcome!\nHello, Bob!\nSum of 1 and 2 is: 3\n");
}

#[test]
fn summary_renders_json() {
    let text = render(&sample(), OutputMode::Json);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["welcome"], "Welcome!");
    assert_eq!(value["greeting"], "Hello, Bob!");
    assert_eq!(value["sum"], "Sum of 1 and 2 is: 3");
    assert!(text.ends_with('\n'));
}
