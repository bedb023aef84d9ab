//! `lexmatch suggest` and `lexmatch distance` end to end.

use serde_json::Value;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn lexmatch(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lexmatch"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run lexmatch")
}

fn word_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn stdout_json(output: &Output) -> Value {
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn test_suggest_from_line_list() {
    let words = word_file("distance\ndistances\ndistane\ndestance\ndistence\n");
    let path = words.path().to_str().unwrap();

    let output = lexmatch(&["suggest", "dist", "--words", path, "--options", "prefixed", "--json"]);
    let json = stdout_json(&output);

    assert_eq!(json[0]["query"], "dist");
    assert_eq!(json[0]["result"]["best"]["distance"], 0);
    let best: Vec<&str> = json[0]["result"]["best"]["matches"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(best, ["distance", "distances", "distane", "distence"]);
    assert!(json[0]["result"].get("second_best").is_none());
}

#[test]
fn test_suggest_objects_by_field() {
    let words = word_file(
        r#"[{"headword": "cat", "id": 1}, {"gloss": "bat"}, {"headword": "cart", "id": 3}]"#,
    );
    let path = words.path().to_str().unwrap();

    let output = lexmatch(&[
        "suggest", "cat", "--words", path, "--field", "headword", "--options", "next-closest",
        "--json",
    ]);
    let json = stdout_json(&output);
    let result = &json[0]["result"];
    assert_eq!(result["best"]["matches"][0]["id"], 1);
    assert_eq!(result["second_best"]["distance"], 1);
    assert_eq!(result["second_best"]["matches"][0]["id"], 3);
}

#[test]
fn test_config_file_and_flag_override() {
    let words = word_file("cat\ncart\ncarts\n");
    let mut config = NamedTempFile::new().unwrap();
    write!(config, r#"{{"options": "next-closest", "maxDistance": 0}}"#).unwrap();
    let (words, config) = (words.path().to_str().unwrap(), config.path().to_str().unwrap());

    let json = stdout_json(&lexmatch(&["suggest", "cat", "-w", words, "-c", config, "--json"]));
    assert_eq!(json[0]["result"]["second_best"]["distance"], Value::Null);

    let json = stdout_json(&lexmatch(&[
        "suggest", "cat", "-w", words, "-c", config, "-d", "2", "--json",
    ]));
    assert_eq!(json[0]["result"]["second_best"]["matches"][0], "cart");
}

#[test]
fn test_suggest_text_output() {
    let words = word_file("cat\nbat\nhat\n");
    let output = lexmatch(&["suggest", "xat", "--words", words.path().to_str().unwrap()]);
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.starts_with("xat\n"), "{text}");
    assert!(text.contains("best (3)"));
    for word in ["cat", "bat", "hat"] {
        assert!(text.contains(word));
    }
}

#[test]
fn test_missing_word_list_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.txt");
    let output = lexmatch(&["suggest", "cat", "--words", missing.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("absent.txt"));
}

#[test]
fn test_distance_command() {
    let run = |args: &[&str]| {
        let output = lexmatch(args);
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    };
    assert_eq!(run(&["distance", "ab", "ba"]), "1");
    assert_eq!(run(&["distance", "cat", "catalog", "--prefix"]), "0");
    assert_eq!(run(&["distance", "cat", "catalog", "-d", "2"]), ">max");
    assert_eq!(run(&["distance", "caf\u{e9}", "cafe\u{301}"]), "0");
}
