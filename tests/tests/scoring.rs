//! End-to-end scoring runs

use checkdigit_algorithms::{alphabet, catalog, FieldScheme};
use checkdigit_fuzz::{standard_batteries, FuzzScorer, ScoringConfig, Subject};

const CONFIG: &str = r#"
battery_size = 30
attempts_per_payload = 10
payload_length = 12
seed = 7
"#;

#[test]
fn toml_config_is_applied() {
    let config = ScoringConfig::from_toml_str(CONFIG).unwrap();
    assert_eq!(config.battery_size, 30);
    assert_eq!(config.payload_length, 12);
    assert_eq!(config.max_retries, ScoringConfig::default().max_retries);
    assert!(ScoringConfig::from_toml_str("unknown = 1").is_err());
}

#[test]
fn report_is_reproducible_across_thread_counts() {
    let base = ScoringConfig::from_toml_str(CONFIG).unwrap();
    let entry = catalog::find("base32check-fold").unwrap();
    let checker = entry.build().unwrap();
    let subject = Subject::from_entry(entry, &*checker);

    let single = FuzzScorer::new(base.clone().with_threads(1))
        .unwrap()
        .score(&subject)
        .unwrap();
    let many = FuzzScorer::new(base.with_threads(3))
        .unwrap()
        .score(&subject)
        .unwrap();
    assert_eq!(single, many);
    assert_eq!(single.batteries.len(), standard_batteries().len());
}

#[test]
fn field_schemes_detect_every_single_substitution() {
    let config = ScoringConfig::from_toml_str(CONFIG).unwrap();
    let scorer = FuzzScorer::new(config).unwrap();
    for scheme in [
        FieldScheme::base32check1().unwrap(),
        FieldScheme::base32check2().unwrap(),
    ] {
        let report = scorer
            .score(&Subject::new(&scheme, alphabet::base32()))
            .unwrap();
        let stats = report.battery("1 substitution").unwrap();
        assert_eq!(stats.error_rate, 0.0);
        assert!(stats.collisions.is_empty());
        assert!(report.human_error_detection_rate > 0.9);
        assert!(report.human_error_detection_rate <= 1.0);
    }
}

#[test]
fn two_check_characters_beat_one() {
    let config = ScoringConfig::from_toml_str(CONFIG).unwrap();
    let scorer = FuzzScorer::new(config).unwrap();
    let one = FieldScheme::base32check1().unwrap();
    let two = FieldScheme::base32check2().unwrap();
    let r1 = scorer.score(&Subject::new(&one, alphabet::base32())).unwrap();
    let r2 = scorer.score(&Subject::new(&two, alphabet::base32())).unwrap();
    assert!(r2.human_error_detection_rate >= r1.human_error_detection_rate);
}

#[test]
fn json_report_has_every_battery() {
    let config = ScoringConfig::from_toml_str(CONFIG).unwrap();
    let scorer = FuzzScorer::new(config).unwrap();
    let checker = catalog::build("mod11-10").unwrap();
    let entry = catalog::find("mod11-10").unwrap();
    let report = scorer.score(&Subject::from_entry(entry, &*checker)).unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["label"], "mod11-10");
    assert_eq!(
        value["batteries"].as_array().unwrap().len(),
        standard_batteries().len()
    );
    let text = report.to_string();
    assert!(text.contains("Score:"));
}
