use friendgraph::seed::{load_graph, GraphSeed};
use friendgraph::RecommendationEngine;
use std::io::Write;
use tempfile::Builder;

const TOML_GRAPH: &str = r#"
users = [
    { id = "ana", name = "Ana" },
    { id = "ben", name = "Ben" },
    { id = "cai", name = "Cai" },
]
friendships = [["ana", "ben"], ["ben", "cai"], ["cai", "nobody"]]
visits = [{ visitor = "cai", visited = "ana", count = 2 }]
"#;

#[test]
fn loads_toml_graph_file() {
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(TOML_GRAPH.as_bytes()).unwrap();

    let graph = load_graph(file.path()).unwrap();
    assert_eq!(graph.len(), 3);
    assert_eq!(graph.friends_of("cai"), vec!["ben"]);

    let suggestions = RecommendationEngine::new().suggest_friends(&graph, "ana");
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].friend_id, "cai");
    assert_eq!(suggestions[0].visits_count, 2);
    // 0.5 * 1.0 + 0.3 * 1 + 0.2 * 2
    assert_eq!(suggestions[0].combined_score, 1.2);
}

#[test]
fn loads_json_graph_file() {
    let seed = GraphSeed::from_toml_str(TOML_GRAPH).unwrap();
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(serde_json::to_string(&seed).unwrap().as_bytes())
        .unwrap();

    let graph = load_graph(file.path()).unwrap();
    assert_eq!(graph.visit_count("cai", "ana"), 2);
    assert_eq!(graph.friends_of("ben"), vec!["ana", "cai"]);
}

#[test]
fn missing_file_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_graph(dir.path().join("absent.toml")).unwrap_err();
    assert_eq!(err.error_code(), "IO_ERROR");
}
