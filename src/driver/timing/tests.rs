//! Unit tests for the timing table.
use super::*;

#[test]
/// Every supported bitrate resolves, and always to the same tuple.
fn test_resolve_is_deterministic() {
    for bitrate in SUPPORTED_BITRATES {
        let first = resolve_timing(bitrate).expect("supported bitrate must resolve");
        let second = resolve_timing(bitrate).unwrap();
        assert_eq!(first, second);
        assert!(!first.triple_sampling);
        assert_eq!(first.sjw, 3);
    }
}

#[test]
/// Table keys and the public list stay in sync.
fn test_supported_list_matches_table() {
    let keys: [u32; 8] = core::array::from_fn(|i| TIMING_TABLE[i].0);
    assert_eq!(keys, SUPPORTED_BITRATES);
}

#[test]
/// Register values match the known-good presets.
fn test_known_presets() {
    assert_eq!(
        resolve_timing(25_000).unwrap(),
        TimingConfig {
            prescaler: 128,
            tseg_1: 16,
            tseg_2: 8,
            sjw: 3,
            triple_sampling: false,
        }
    );
    assert_eq!(resolve_timing(125_000).unwrap().prescaler, 32);
    assert_eq!(resolve_timing(500_000).unwrap().prescaler, 8);
    assert_eq!(resolve_timing(800_000).unwrap().prescaler, 5);
    assert_eq!(resolve_timing(1_000_000).unwrap().prescaler, 4);
}

#[test]
/// Each preset produces exactly its bitrate on the 80 MHz clock.
fn test_presets_hit_their_bitrate() {
    for (bitrate, timing) in TIMING_TABLE.iter() {
        assert_eq!(effective_bitrate(timing), *bitrate, "bitrate {bitrate}");
    }
}

#[test]
/// Sample points sit at 80% (68% for the 25 kbit/s preset).
fn test_sample_point() {
    assert_eq!(resolve_timing(500_000).unwrap().sample_point_permille(), 800);
    assert_eq!(resolve_timing(25_000).unwrap().sample_point_permille(), 680);
}

#[test]
/// Anything outside the table is rejected with the requested value.
fn test_unsupported_bitrates() {
    for bitrate in [0, 1, 24_999, 33_333, 200_000, 1_000_001, u32::MAX] {
        assert_eq!(resolve_timing(bitrate), Err(UnsupportedBitrate(bitrate)));
        assert!(!is_supported(bitrate));
    }
}
