//! # Configuration Tests
//!
//! Defaults, JSON deserialization, file loading, validation, and operator
//! policy selection.

use std::io::Write;

use rstest::rstest;

use cachesim_core::CacheError;
use cachesim_core::config::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.cache.capacity, 16);
    assert_eq!(config.cache.policy, ReplacementPolicy::Lru);
    assert_eq!(config.simulation.memory_size, 32);
    assert_eq!(config.simulation.workers, 4);
    assert_eq!(config.simulation.accesses_per_worker, 10);
    assert_eq!(config.simulation.access_delay_ms, 100);
    assert_eq!(config.simulation.seed, None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_json_uses_defaults() {
    let config = Config::from_json_str("{}").unwrap();
    assert_eq!(config.cache.capacity, 16);
    assert_eq!(config.simulation.workers, 4);
}

#[rstest]
#[case("\"LRU\"", ReplacementPolicy::Lru)]
#[case("\"Lru\"", ReplacementPolicy::Lru)]
#[case("\"lru\"", ReplacementPolicy::Lru)]
#[case("\"LFU\"", ReplacementPolicy::Lfu)]
#[case("\"Lfu\"", ReplacementPolicy::Lfu)]
#[case("\"lfu\"", ReplacementPolicy::Lfu)]
fn test_policy_deserialization(#[case] json: &str, #[case] expected: ReplacementPolicy) {
    let policy: ReplacementPolicy = serde_json::from_str(json).unwrap();
    assert_eq!(policy, expected);
}

#[test]
fn test_unknown_policy_in_json_is_rejected() {
    let err = Config::from_json_str(r#"{"cache": {"policy": "ARC"}}"#).unwrap_err();
    assert!(matches!(err, CacheError::Parse(_)));
}

#[rstest]
#[case(r#"{"cache": {"capacity": 0}}"#, "cache.capacity")]
#[case(r#"{"simulation": {"memory_size": 0}}"#, "simulation.memory_size")]
#[case(r#"{"simulation": {"workers": 0}}"#, "simulation.workers")]
fn test_validation_rejects_zero(#[case] json: &str, #[case] field: &str) {
    match Config::from_json_str(json) {
        Err(CacheError::InvalidConfig(msg)) => assert!(msg.contains(field), "{msg}"),
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn test_zero_accesses_is_valid() {
    let config = Config::from_json_str(r#"{"simulation": {"accesses_per_worker": 0}}"#).unwrap();
    assert_eq!(config.simulation.accesses_per_worker, 0);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"cache": {{"capacity": 2, "policy": "LFU"}}, "simulation": {{"seed": 99}}}}"#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.cache.capacity, 2);
    assert_eq!(config.cache.policy, ReplacementPolicy::Lfu);
    assert_eq!(config.simulation.seed, Some(99));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CacheError::Io { .. }));
}

#[rstest]
#[case("1", ReplacementPolicy::Lru, false)]
#[case("2", ReplacementPolicy::Lfu, false)]
#[case("lru", ReplacementPolicy::Lru, false)]
#[case(" LFU\n", ReplacementPolicy::Lfu, false)]
#[case("3", ReplacementPolicy::Lru, true)]
#[case("", ReplacementPolicy::Lru, true)]
#[case("mru", ReplacementPolicy::Lru, true)]
fn test_policy_selection(
    #[case] choice: &str,
    #[case] policy: ReplacementPolicy,
    #[case] fallback: bool,
) {
    assert_eq!(
        ReplacementPolicy::select(choice),
        PolicySelection { policy, fallback }
    );
}

#[test]
fn test_access_delay_duration() {
    let sim = SimulationConfig::default();
    assert_eq!(sim.access_delay(), std::time::Duration::from_millis(100));
    assert_eq!(ReplacementPolicy::Lfu.name(), "LFU");
}
