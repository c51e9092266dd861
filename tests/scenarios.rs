use friendgraph::seed::sample_graph;
use friendgraph::{RankingMode, RecommendationEngine, SocialGraph, Suggestion, User};

fn find<'a>(suggestions: &'a [Suggestion], id: &str) -> &'a Suggestion {
    suggestions
        .iter()
        .find(|s| s.friend_id == id)
        .unwrap_or_else(|| panic!("{} missing from suggestions", id))
}

#[test]
fn alice_gets_eve_then_diego() {
    let graph = sample_graph();
    let suggestions = RecommendationEngine::new().suggest_friends(&graph, "Alice");

    let ids: Vec<&str> = suggestions.iter().map(|s| s.friend_id.as_str()).collect();
    assert_eq!(ids, vec!["Eve", "Diego"]);

    // Alice {Bob, Charlie, David}; Eve {Bob, Charlie, David}
    let eve = find(&suggestions, "Eve");
    assert_eq!(eve.mutual_friends_count, 3);
    assert_eq!(eve.jaccard_similarity, 1.0);
    assert_eq!(eve.visits_count, 2);
    assert_eq!(eve.combined_score, 1.8);

    // Diego {Bob, David}: 2 shared out of 3
    let diego = find(&suggestions, "Diego");
    assert_eq!(diego.mutual_friends_count, 2);
    assert_eq!(diego.jaccard_similarity, 0.67);
    assert_eq!(diego.visits_count, 2);
    assert_eq!(diego.combined_score, 1.34);
}

#[test]
fn alice_never_sees_herself_or_friends() {
    let graph = sample_graph();
    for mode in [RankingMode::Weighted, RankingMode::Jaccard] {
        let suggestions = RecommendationEngine::new()
            .with_mode(mode)
            .suggest_friends(&graph, "Alice");
        for excluded in ["Alice", "Bob", "Charlie", "David"] {
            assert!(suggestions.iter().all(|s| s.friend_id != excluded));
        }
    }
}

#[test]
fn exclusion_holds_for_every_user() {
    let graph = sample_graph();
    let engine = RecommendationEngine::new();
    for user in graph.users() {
        for s in engine.suggest_friends(&graph, user.id()) {
            assert_ne!(s.friend_id, user.id());
            assert!(!user.is_friend_with(&s.friend_id));
            assert!(s.jaccard_similarity > 0.0 && s.jaccard_similarity <= 1.0);
            assert!(s.mutual_friends_count >= 1);
        }
    }
}

#[test]
fn pablo_reaches_the_star_through_pedro() {
    let graph = sample_graph();
    let suggestions = RecommendationEngine::new().suggest_friends(&graph, "Pablo");

    let ids: Vec<&str> = suggestions.iter().map(|s| s.friend_id.as_str()).collect();
    assert_eq!(ids, vec!["Aldo", "Pau"]);
    for s in &suggestions {
        assert_eq!(s.mutual_friends_count, 1);
        assert_eq!(s.jaccard_similarity, 1.0);
        assert_eq!(s.visits_count, 0);
        assert_eq!(s.combined_score, 0.8);
    }
}

#[test]
fn pedro_has_no_second_hop() {
    let graph = sample_graph();
    assert!(RecommendationEngine::new()
        .suggest_friends(&graph, "Pedro")
        .is_empty());
}

#[test]
fn unknown_user_gets_empty_list() {
    let graph = sample_graph();
    let engine = RecommendationEngine::new();
    assert!(engine.suggest_friends(&graph, "unknown-id").is_empty());
    assert!(engine.try_suggest_friends(&graph, "unknown-id").is_err());
}

#[test]
fn repeated_queries_are_identical() {
    let graph = sample_graph();
    let engine = RecommendationEngine::new();
    for user in ["Alice", "Bob", "Pablo", "Eve"] {
        assert_eq!(
            engine.suggest_friends(&graph, user),
            engine.suggest_friends(&graph, user)
        );
    }
}

#[test]
fn new_visits_show_up_immediately() {
    let mut graph = sample_graph();
    let engine = RecommendationEngine::new();

    for _ in 0..3 {
        graph.record_visit("Pau", "Pablo");
    }
    let suggestions = engine.suggest_friends(&graph, "Pablo");
    assert_eq!(suggestions[0].friend_id, "Pau");
    assert_eq!(suggestions[0].visits_count, 3);
    assert_eq!(suggestions[0].combined_score, 1.4);

    // Pablo's own record is untouched by Pau's visits
    assert_eq!(graph.visit_count("Pablo", "Pau"), 0);
}

#[test]
fn new_friendship_removes_candidate() {
    let mut graph = sample_graph();
    let engine = RecommendationEngine::new();

    assert!(graph.add_friendship("Alice", "Eve"));
    let ids: Vec<String> = engine
        .suggest_friends(&graph, "Alice")
        .into_iter()
        .map(|s| s.friend_id)
        .collect();
    assert_eq!(ids, vec!["Diego".to_string()]);
}

#[test]
fn friendship_symmetry_and_idempotence() {
    let mut graph = SocialGraph::new();
    graph.add_user(User::new("x", "X"));
    graph.add_user(User::new("y", "Y"));

    graph.add_friendship("x", "y");
    let once = graph.clone();
    graph.add_friendship("x", "y");

    assert!(graph.user("x").unwrap().is_friend_with("y"));
    assert!(graph.user("y").unwrap().is_friend_with("x"));
    assert_eq!(graph.user("x"), once.user("x"));
    assert_eq!(graph.user("y"), once.user("y"));
}

#[test]
fn limit_keeps_top_ranked() {
    let graph = sample_graph();
    let suggestions = RecommendationEngine::new()
        .with_limit(Some(1))
        .suggest_friends(&graph, "Alice");
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].friend_id, "Eve");
}
