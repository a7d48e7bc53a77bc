use super::*;

#[test]
fn parse_header_valid() -> AppResult<()> {
    let parsed = parse_header("Content-Type: application/json");
    match parsed {
        Ok((key, value)) => {
            if key != "Content-Type" {
                return Err(AppError::validation(format!("Unexpected key: {}", key)));
            }
            if value != "application/json" {
                return Err(AppError::validation(format!("Unexpected value: {}", value)));
            }
            Ok(())
        }
        Err(err) => Err(AppError::validation(format!(
            "Expected Ok, got Err: {}",
            err
        ))),
    }
}

#[test]
fn parse_header_invalid() -> AppResult<()> {
    if parse_header("MissingDelimiter").is_ok() {
        return Err(AppError::validation("Expected Err for invalid header"));
    }
    if parse_header(":value-without-key").is_ok() {
        return Err(AppError::validation("Expected Err for empty header key"));
    }
    Ok(())
}

#[test]
fn parse_header_list_keeps_order_and_duplicates() -> AppResult<()> {
    let parsed = parse_header_list("x-user-token:a.b.c&Accept:text/plain&x-user-token:d")?;
    let expected = vec![
        ("x-user-token".to_owned(), "a.b.c".to_owned()),
        ("Accept".to_owned(), "text/plain".to_owned()),
        ("x-user-token".to_owned(), "d".to_owned()),
    ];
    if parsed.0 != expected {
        return Err(AppError::validation(format!("Unexpected pairs: {:?}", parsed)));
    }
    Ok(())
}

#[test]
fn parse_header_list_splits_value_on_first_colon_only() -> AppResult<()> {
    let parsed = parse_header_list("Referer:http://example.com:8080/x")?;
    match parsed.0.first() {
        Some((key, value)) if key == "Referer" && value == "http://example.com:8080/x" => Ok(()),
        other => Err(AppError::validation(format!("Unexpected pair: {:?}", other))),
    }
}

#[test]
fn parse_header_list_empty_input_is_empty() -> AppResult<()> {
    let parsed = parse_header_list("  ")?;
    if !parsed.0.is_empty() {
        return Err(AppError::validation("Expected no headers"));
    }
    Ok(())
}

#[test]
fn parse_header_list_rejects_malformed_entry() -> AppResult<()> {
    if parse_header_list("Accept:text/plain&broken").is_ok() {
        return Err(AppError::validation("Expected Err for malformed entry"));
    }
    Ok(())
}

#[test]
fn header_flags_flatten_in_order() -> AppResult<()> {
    let args = parse_test_args([
        "volley",
        "-u",
        "localhost",
        "-H",
        "a:1&b:2",
        "-H",
        "c: 3",
    ])?;
    let pairs = args.header_pairs();
    let keys: Vec<&str> = pairs.iter().map(|(key, _)| key.as_str()).collect();
    if keys != ["a", "b", "c"] {
        return Err(AppError::validation(format!("Unexpected keys: {:?}", keys)));
    }
    Ok(())
}
