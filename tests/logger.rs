use etg::logger::Logger;
use std::fs;

#[test]
fn test_config_based_logging_disabled() {
    // Test with logging disabled
    let logger = Logger::from_config(false).unwrap();
    assert!(!logger.is_enabled());

    // Lines are discarded without a file
    logger.log("Test message");
    logger.flush();
}

#[test]
fn test_config_based_logging_enabled() {
    // Test with logging enabled
    let logger = Logger::from_config(true).unwrap();
    assert!(logger.is_enabled());

    let marker = format!("Test message with file {}", std::process::id());
    logger.log(&marker);
    logger.flush();

    let log_path = Logger::get_log_file_path().unwrap();
    let file_content = fs::read_to_string(&log_path).unwrap_or_default();
    assert!(file_content.contains(&marker));
}

#[test]
fn test_log_file_path() {
    let path = Logger::get_log_file_path().unwrap();
    assert!(path.ends_with("etg/etg.log"));
}
