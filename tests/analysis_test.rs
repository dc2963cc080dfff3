//! End-to-end tests from CSV text through deck enumeration and analysis.

use deck_stats::{
    analyze, canonicalize, decks_of, extract_cards, opponent_cards, parse_and_dedup, Session,
    Side,
};

const HEADER: &str = "team_0_cards_0_name,team_0_cards_0_evolutionLevel,team_0_cards_1_name,\
opponent_0_cards_0_name,opponent_0_cards_1_name,team_0_crowns,opponent_0_crowns,battleTime";

fn log(rows: &[&str]) -> String {
    let mut csv = String::from(HEADER);
    for row in rows {
        csv.push('\n');
        csv.push_str(row);
    }
    csv.push('\n');
    csv
}

fn scenario_log() -> String {
    log(&[
        "A,,B,X,,2,0,t1",
        "B,,A,X,Y,1,1,t2",
        "A,,B,Y,,0,3,t3",
    ])
}

const NO_FILTER: &[&str] = &[];

#[test]
fn test_scenario_without_filter() {
    let records = parse_and_dedup(&[scenario_log()]).unwrap();
    assert_eq!(decks_of(&records), vec!["A,B"]);

    let result = analyze(&records, "A,B", NO_FILTER, false);
    assert_eq!(result.overall.total_games, 2);
    assert_eq!(result.overall.win_count, 1);

    let x = result.find("X").unwrap();
    assert_eq!((x.total_games, x.win_count, x.win_rate), (1, 1, 100));
    let y = result.find("Y").unwrap();
    assert_eq!((y.total_games, y.win_count, y.win_rate), (1, 0, 0));
    assert_eq!(result.card_stats.len(), 2);
}

#[test]
fn test_scenario_with_filter() {
    let records = parse_and_dedup(&[scenario_log()]).unwrap();

    let result = analyze(&records, "A,B", &["X"], false);
    assert_eq!(result.overall.total_games, 1);
    assert_eq!(result.overall.win_count, 1);
    assert!(result.card_stats.is_empty());
    assert!(result.find("X").is_none());
}

#[test]
fn test_evolved_deck_is_a_different_deck() {
    let records = parse_and_dedup(&[log(&["A,1,B,X,,1,0,t1", "A,,B,X,,0,1,t2"])]).unwrap();
    assert_eq!(decks_of(&records), vec!["Evo A,B", "A,B"]);

    let evolved = analyze(&records, "Evo A,B", NO_FILTER, true);
    assert_eq!(evolved.overall.total_games, 1);
    assert_eq!(evolved.overall.win_count, 1);

    let base = analyze(&records, "A,B", NO_FILTER, true);
    assert_eq!(base.overall.total_games, 1);
    assert_eq!(base.overall.win_count, 0);
}

#[test]
fn test_duplicates_across_files_are_dropped() {
    let first = log(&["A,,B,X,,2,0,t1", "A,,B,Y,,0,3,t3"]);
    let second = log(&["A,,B,Y,,0,3,t3", "A,,B,Z,,3,0,t4"]);
    let records = parse_and_dedup(&[first, second]).unwrap();
    assert_eq!(records.len(), 3);

    let times: Vec<&str> = records.iter().filter_map(|r| r.get("battleTime")).collect();
    assert_eq!(times, vec!["t1", "t3", "t4"]);

    let result = analyze(&records, "A,B", NO_FILTER, true);
    assert_eq!(result.overall.total_games, 3);
    assert_eq!(result.overall.win_count, 2);
    assert_eq!(result.overall.win_rate, 67);
}

#[test]
fn test_gap_in_slots_truncates_cards() {
    let records = parse_and_dedup(&[log(&["A,,B,,Y,1,0,t1"])]).unwrap();
    assert!(extract_cards(&records[0], Side::Opponent, true).is_empty());
    assert_eq!(extract_cards(&records[0], Side::Team, true), vec!["A", "B"]);

    let result = analyze(&records, "A,B", NO_FILTER, true);
    assert_eq!(result.overall.total_games, 1);
    assert!(result.card_stats.is_empty());
}

#[test]
fn test_malformed_crowns_count_as_draw() {
    let records = parse_and_dedup(&[log(&["A,,B,X,,three,0,t1"])]).unwrap();
    let result = analyze(&records, "A,B", NO_FILTER, true);
    assert_eq!(result.overall.total_games, 0);
    assert_eq!(result.overall.win_rate, 0);
}

#[test]
fn test_stats_invariants() {
    let records = parse_and_dedup(&[log(&[
        "A,,B,X,Y,2,0,t1",
        "A,,B,X,,1,2,t2",
        "A,,B,Y,Z,3,1,t3",
        "A,,B,Z,X,0,0,t4",
        "B,,A,Y,,1,0,t5",
    ])])
    .unwrap();

    for filter in [vec![], vec!["X"], vec!["Y"], vec!["X", "Y"]] {
        let result = analyze(&records, "A,B", filter.as_slice(), true);
        let overall = &result.overall;
        assert!(overall.win_count <= overall.total_games);
        assert!(overall.total_games <= 4);
        assert!(overall.win_rate <= 100);
        for row in &result.card_stats {
            assert!(!filter.contains(&row.card_name.as_str()));
            assert!(row.win_rate <= 100);
            assert!(row.total_games <= overall.total_games);
        }
    }
}

#[test]
fn test_canonicalize_matches_deck_enumeration() {
    let records = parse_and_dedup(&[log(&["Zap,,Knight,X,,1,0,t1"])]).unwrap();
    assert_eq!(decks_of(&records), vec![canonicalize(&["Knight", "Zap"])]);
    assert_eq!(opponent_cards(&records, true), vec!["X"]);
}

#[test]
fn test_session_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("battles.csv");
    std::fs::write(&path, scenario_log()).unwrap();

    let mut session = Session::new();
    session.load_files(&[path]).unwrap();
    assert_eq!(session.selected_deck(), Some("A,B"));

    session.set_filter_cards(vec!["X".to_string()]);
    let result = session.analysis().unwrap();
    assert_eq!(result.overall.total_games, 1);
    assert_eq!(result.overall.win_count, 1);
}
