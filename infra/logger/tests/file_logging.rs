use smenum::prelude::*;
use smenum_logger::{Logger, Rotation};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn registry_events_reach_the_json_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("cards")
        .console(false)
        .directory(&log_dir)
        .rotation(Rotation::NEVER)
        .json(true)
        .level_str("info")?
        .env_filter("smenum_registry=trace")
        .init()?;
    assert!(logger.has_file_output());

    // First access builds the family registry, then both lookups miss.
    assert_eq!(CreditCard::from_code(99), None);
    assert_eq!(CreditCard::from_name("gold"), None);
    tracing::info!(card = %CreditCard::Gold, "quote issued");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    assert!(contents.trim_start().starts_with('{'), "file log should be JSON: {contents}");
    assert!(contents.contains("Variant registry built"), "{contents}");
    assert!(contents.contains("Unknown variant code"), "{contents}");
    assert!(contents.contains("\"code\":99"), "{contents}");
    assert!(contents.contains("Unknown variant name"), "{contents}");
    assert!(contents.contains("quote issued"), "{contents}");

    Ok(())
}
