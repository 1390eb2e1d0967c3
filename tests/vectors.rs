//! Acceptance suite: reference vectors checked against the public
//! surface, plus the cross-cutting properties a conforming engine must
//! hold. the keno vectors come from an independent implementation of the
//! same commitment scheme and pin the exact byte and splice semantics.

use fairscan::api;
use fairscan::games::baccarat;
use fairscan::games::plinko;
use fairscan::games::wheel;
use fairscan::games::Game;
use fairscan::games::RawParams;
use fairscan::games::Risk;
use fairscan::rng::floats;
use fairscan::rng::Seeds;
use fairscan::scan::Op;
use fairscan::scan::Predicate;
use fairscan::scan::ScanRequest;

fn test_seeds() -> Seeds {
    Seeds::new("test_server", "test_client")
}

#[test]
fn dice_is_deterministic_and_in_range() {
    let seeds = test_seeds();
    let first = api::verify("dice", &seeds, 1, &RawParams::new()).unwrap();
    let second = api::verify("dice", &seeds, 1, &RawParams::new()).unwrap();
    assert!((0.0..=100.0).contains(&first.metric));
    assert_eq!(first.metric, second.metric);
    assert_eq!(first.details, second.details);
}

#[test]
fn keno_draw_set_matches_the_external_reference() {
    let seeds = Seeds::new(
        "fb30c5e2bbd8537b76c6df8e8e86533121cbeeae0bda9d306117147e656ad46e",
        "56e27fed-ece3-4279-ab56-96f71fe9b2ee",
    );
    let result = api::verify("keno", &seeds, 1, &RawParams::new()).unwrap();
    let mut drawn: Vec<u64> = result.details["draws"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_u64().unwrap())
        .collect();
    drawn.sort_unstable();
    assert_eq!(drawn, vec![2, 6, 7, 12, 16, 26, 31, 34, 36, 38]);
}

#[test]
fn keno_draw_order_pins_the_splice_semantics() {
    let seeds = Seeds::new(
        "62571ad3a67f014963feb7578e1b4f56c9f2469bbde16cc0773af6803412490c",
        "56e27fed-ece3-4279-ab56-96f71fe9b2ee",
    );
    let result = api::verify("keno", &seeds, 1, &RawParams::new()).unwrap();
    let drawn: Vec<u64> = result.details["draws"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_u64().unwrap())
        .collect();
    assert_eq!(drawn, vec![23, 0, 3, 14, 36, 27, 33, 22, 10, 5]);
}

#[test]
fn baccarat_natural_nine_reference() {
    let floats = [8.5 / 52.0, 0.5 / 52.0, 12.5 / 52.0, 4.5 / 52.0, 0.5, 0.5];
    let result = baccarat::evaluate(&floats);
    assert_eq!(result.details["player_score"], 9);
    assert_eq!(result.details["player_draws"], false);
    assert_eq!(result.details["banker_draws"], false);
    assert_eq!(result.details["winner"], "player");
}

#[test]
fn wheel_high_risk_last_slot_reference() {
    assert_eq!(wheel::evaluate(0.999, 50, Risk::High).metric, 49.5);
    assert_eq!(wheel::evaluate(0.999, 10, Risk::High).metric, 9.9);
}

#[test]
fn plinko_fourteen_row_high_risk_reference() {
    let floats = [
        0.75, 0.6, 0.9, 0.55, 0.99, 0.51, 0.1, 0.8, 0.6, 0.3, 0.7, 0.2, 0.1, 0.3,
    ];
    let result = plinko::evaluate(&floats, 14, Risk::High);
    assert_eq!(result.details["prize_index"], 9);
    assert_eq!(result.metric, 0.3);
}

#[test]
fn bounded_dice_scan_invariants() {
    let outcome = api::scan(ScanRequest {
        game: "dice".to_string(),
        seeds: test_seeds(),
        nonce_start: 0,
        nonce_end: 200_000,
        params: RawParams::new(),
        predicate: Predicate {
            op: Op::Ge,
            target: 99.0,
            tolerance: 0.0,
        },
        hit_limit: 10,
        timeout_ms: 0,
        with_details: false,
    })
    .unwrap();
    assert!(outcome.hits.len() <= 10);
    assert!(outcome.hits.windows(2).all(|w| w[0].nonce < w[1].nonce));
    assert!(outcome.hits.iter().all(|h| h.metric >= 99.0));
    assert!(outcome.summary.total_evaluated <= 200_001);
}

#[test]
fn float_sequences_extend_as_strict_prefixes() {
    let seeds = test_seeds();
    for n in [0usize, 1, 7, 8, 9, 31] {
        let shorter = floats(&seeds, 5, 0, n);
        let longer = floats(&seeds, 5, 0, n + 1);
        assert_eq!(shorter[..], longer[..n]);
    }
}

#[test]
fn scan_completeness_equals_verify_over_the_range() {
    let seeds = test_seeds();
    let outcome = api::scan(ScanRequest {
        game: "limbo".to_string(),
        seeds: seeds.clone(),
        nonce_start: 50,
        nonce_end: 1_050,
        params: RawParams::new(),
        predicate: Predicate {
            op: Op::Ge,
            target: 10.0,
            tolerance: 0.0,
        },
        hit_limit: 0,
        timeout_ms: 0,
        with_details: false,
    })
    .unwrap();
    let expected: Vec<u64> = (50..=1_050)
        .filter(|&n| {
            api::verify("limbo", &seeds, n, &RawParams::new())
                .unwrap()
                .metric
                >= 10.0
        })
        .collect();
    let got: Vec<u64> = outcome.hits.iter().map(|h| h.nonce).collect();
    assert_eq!(got, expected);
}

#[test]
fn splice_games_never_repeat_an_element() {
    let seeds = test_seeds();
    for nonce in 0..50 {
        let result = api::verify("keno", &seeds, nonce, &RawParams::new()).unwrap();
        let mut drawn: Vec<u64> = result.details["draws"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_u64().unwrap())
            .collect();
        drawn.sort_unstable();
        drawn.dedup();
        assert_eq!(drawn.len(), 10);
    }
}

#[test]
fn keno_hit_count_is_the_intersection_size() {
    let seeds = test_seeds();
    let bare = api::verify("keno", &seeds, 9, &RawParams::new()).unwrap();
    let draws: Vec<u64> = bare.details["draws"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_u64().unwrap())
        .collect();
    let picks: Vec<u64> = draws[..4].to_vec();
    let raw = serde_json::json!({ "picks": picks });
    let result = api::verify("keno", &seeds, 9, raw.as_object().unwrap()).unwrap();
    assert_eq!(result.details["hits"], 4);
}

#[test]
fn baccarat_winner_tracks_scores_across_real_nonces() {
    let seeds = test_seeds();
    for nonce in 0..200 {
        let result = api::verify("baccarat", &seeds, nonce, &RawParams::new()).unwrap();
        let p = result.details["player_score"].as_u64().unwrap();
        let b = result.details["banker_score"].as_u64().unwrap();
        let winner = result.details["winner"].as_str().unwrap();
        match winner {
            "player" => assert!(p > b),
            "banker" => assert!(b > p),
            "tie" => assert_eq!(p, b),
            other => panic!("unexpected winner {}", other),
        }
    }
}

#[test]
fn verify_metric_is_bit_identical_across_calls() {
    let seeds = test_seeds();
    for game in Game::ALL {
        let raw = RawParams::new();
        let a = api::verify(game.id(), &seeds, 42, &raw).unwrap();
        let b = api::verify(game.id(), &seeds, 42, &raw).unwrap();
        assert_eq!(
            a.metric.to_bits(),
            b.metric.to_bits(),
            "metric drift in {}",
            game.id()
        );
    }
}

#[test]
fn determinism_holds_for_arbitrary_seeds() {
    use fairscan::Arbitrary;
    for _ in 0..5 {
        let seeds = Seeds::random();
        for game in ["dice", "keno", "baccarat", "plinko"] {
            let a = api::verify(game, &seeds, 3, &RawParams::new()).unwrap();
            let b = api::verify(game, &seeds, 3, &RawParams::new()).unwrap();
            assert_eq!(a.metric.to_bits(), b.metric.to_bits());
        }
    }
}

#[test]
fn server_seed_hash_is_sha256_hex() {
    let hash = api::hash_server_seed("test_server");
    assert_eq!(hash.len(), 64);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
}
