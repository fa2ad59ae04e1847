// Shared test utilities
use std::fs;
use std::path::Path;

/// Split a fixture into lines, asserting the file ends with a newline
pub fn read_lines(path: &Path) -> Vec<String> {
    let text = fs::read_to_string(path).expect("Failed to read fixture");
    if text.is_empty() {
        return Vec::new();
    }
    assert!(text.ends_with('\n'), "fixture must end with a newline");
    text.lines().map(str::to_string).collect()
}

/// Assert one line is `<bit_count> <value>` with both fields in range
pub fn assert_valid_line(line: &str) {
    let tokens: Vec<&str> = line.split(' ').collect();
    assert_eq!(tokens.len(), 2, "line {:?} should have two fields", line);

    let bit_count: u32 = tokens[0]
        .parse()
        .unwrap_or_else(|_| panic!("bit count in {:?} is not an integer", line));
    let value: u32 = tokens[1]
        .parse()
        .unwrap_or_else(|_| panic!("value in {:?} is not an integer", line));

    assert!((1..=8).contains(&bit_count), "bit count out of range: {:?}", line);
    assert!(value <= 255, "value out of range: {:?}", line);
    for token in &tokens {
        assert!(
            token.len() == 1 || !token.starts_with('0'),
            "leading zero in {:?}",
            line
        );
    }
}
