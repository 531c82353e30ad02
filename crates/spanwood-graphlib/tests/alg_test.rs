use spanwood_graphlib::alg::{self, Violation};
use spanwood_graphlib::{Edge, WeightedEdge, total_weight};

fn e(v: &str, w: &str, weight: f64) -> WeightedEdge {
    WeightedEdge::new(v, w, weight)
}

#[test]
fn preorder_follows_edge_direction() {
    let edges = vec![e("a", "b", 1.0), e("b", "c", 1.0), e("d", "a", 1.0)];
    assert_eq!(alg::preorder(&edges, "a"), vec!["a", "b", "c"]);
    assert_eq!(alg::preorder(&edges, "d"), vec!["d", "a", "b", "c"]);
    assert_eq!(alg::preorder(&edges, "c"), vec!["c"]);
}

#[test]
fn preorder_of_unknown_root_is_empty() {
    let edges = vec![e("a", "b", 1.0)];
    assert_eq!(alg::preorder(&edges, "z"), Vec::<String>::new());
}

#[test]
fn components_ignore_direction() {
    let edges = vec![
        e("a", "b", 1.0),
        e("c", "b", 1.0),
        e("x", "y", 1.0),
        e("z", "z", 1.0),
    ];
    assert_eq!(
        alg::components(&edges),
        vec![
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec!["x".to_string(), "y".to_string()],
            vec!["z".to_string()],
        ]
    );
}

#[test]
fn verify_accepts_a_spanning_arborescence() {
    let tree = vec![e("r", "a", 1.0), e("r", "b", 2.0), e("b", "c", 3.0)];
    assert_eq!(
        alg::verify_arborescence("r", ["a", "b", "c"], &tree),
        Ok(())
    );
}

#[test]
fn verify_rejects_an_edge_into_the_root() {
    let tree = vec![e("a", "r", 1.0), e("r", "a", 1.0)];
    assert_eq!(
        alg::verify_arborescence("r", ["a"], &tree),
        Err(Violation::RootHasParent {
            root: "r".to_string()
        })
    );
}

#[test]
fn verify_rejects_two_parents() {
    let tree = vec![e("r", "a", 1.0), e("r", "b", 1.0), e("b", "a", 1.0)];
    assert_eq!(
        alg::verify_arborescence("r", ["a", "b"], &tree),
        Err(Violation::MultipleParents {
            vertex: "a".to_string()
        })
    );
}

#[test]
fn verify_rejects_a_detached_cycle() {
    let tree = vec![e("r", "a", 1.0), e("b", "c", 1.0), e("c", "b", 1.0)];
    assert_eq!(
        alg::verify_arborescence("r", ["a", "b", "c"], &tree),
        Err(Violation::Unreached {
            vertex: "b".to_string()
        })
    );
}

#[test]
fn verify_rejects_a_missing_vertex() {
    let tree = vec![e("r", "a", 1.0)];
    assert_eq!(
        alg::verify_arborescence("r", ["a", "b"], &tree),
        Err(Violation::Uncovered {
            vertex: "b".to_string()
        })
    );
}

#[test]
fn references_satisfy_the_edge_contract() {
    let edges = vec![e("a", "b", 1.5), e("b", "c", 2.5)];
    let refs: Vec<&WeightedEdge> = edges.iter().collect();
    assert_eq!(refs[1].source(), "b");
    assert_eq!(total_weight(&refs), 4.0);
    assert_eq!(edges[0].to_string(), "a->b 1.5");
}
