//! Quotient graph checker scenarios, including the collaborator payload.

use exact_quotient::{
    analyze, check_quotient_graph, AdjacencyMatrix, Checked, QuotientError, QuotientGraphInput,
    SignClass, SignClassSource, F4_SIGN_CLASS_COUNT,
};

/// A stand-in for the upstream sign-class construction: 48 classes joined
/// in two rings of 24 linked by a single bridge.
struct TwoRings;

impl SignClassSource for TwoRings {
    type Error = QuotientError;

    fn quotient_graph(&self) -> Result<QuotientGraphInput, QuotientError> {
        let n = F4_SIGN_CLASS_COUNT;
        let half = n / 2;
        let mut adjacency = vec![vec![0u8; n]; n];
        for ring in [0, half] {
            for k in 0..half {
                let i = ring + k;
                let j = ring + (k + 1) % half;
                adjacency[i][j] = 1;
                adjacency[j][i] = 1;
            }
        }
        adjacency[0][half] = 1;
        adjacency[half][0] = 1;

        let sign_classes = (0..n)
            .map(|i| SignClass {
                label: Some(format!("±v{i}")),
                members: vec![i, i + n],
            })
            .collect();
        Ok(QuotientGraphInput {
            sign_classes,
            adjacency_matrix: adjacency,
            degree_sequence: None,
        })
    }
}

#[test]
fn path_graph() {
    let m: Vec<Vec<u8>> = vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]];
    let report = check_quotient_graph(&m).unwrap();
    assert!(report.connected);
    assert_eq!(report.edge_count, 2);
    assert_eq!(report.degree_sequence, [1, 2, 1]);
}

#[test]
fn isolated_pair() {
    let m: Vec<Vec<u8>> = vec![vec![0, 0], vec![0, 0]];
    let report = check_quotient_graph(&m).unwrap();
    assert!(!report.connected);
    assert_eq!(report.edge_count, 0);
}

#[test]
fn empty_graph_convention() {
    let report = check_quotient_graph(&[]).unwrap();
    assert!(!report.connected);
}

#[test]
fn rows_disagreeing_with_vertex_count() {
    let m: Vec<Vec<u8>> = vec![vec![0, 1, 1], vec![1, 0], vec![1, 0, 0]];
    assert_eq!(
        check_quotient_graph(&m).unwrap_err(),
        QuotientError::ShapeMismatch {
            row: 1,
            expected: 3,
            actual: 2
        }
    );
}

#[test]
fn f4_two_rings_from_source() {
    let input = TwoRings.quotient_graph().unwrap();
    let report = input.check().unwrap();

    assert_eq!(report.vertex_count, 48);
    assert!(report.connected);
    assert_eq!(report.visited, 48);
    assert_eq!(report.edge_count, 49);
    assert_eq!(report.degree_sequence[0], 3);
    assert_eq!(report.degree_sequence[24], 3);
    assert_eq!(report.min_degree, Some(2));
    assert_eq!(report.max_degree, Some(3));
    assert!(report.all_passed());
}

#[test]
fn analyze_prevalidated_matrix() {
    let input = TwoRings.quotient_graph().unwrap();
    let matrix = AdjacencyMatrix::new(&input.adjacency_matrix).unwrap();
    assert_eq!(matrix.degree(F4_SIGN_CLASS_COUNT), None);

    let report = analyze(&matrix);
    assert_eq!(report, check_quotient_graph(&input.adjacency_matrix).unwrap());
    assert_eq!(report.degree_sequence.len(), F4_SIGN_CLASS_COUNT);
}

#[test]
fn f4_rings_without_bridge_disconnect() {
    let mut input = TwoRings.quotient_graph().unwrap();
    input.adjacency_matrix[0][24] = 0;
    input.adjacency_matrix[24][0] = 0;
    let report = input.check().unwrap();
    assert!(!report.connected);
    assert_eq!(report.visited, 24);
    assert_eq!(report.check("connected"), Some(false));
}

#[cfg(feature = "serde")]
#[test]
fn payload_from_json() {
    let json = r#"{
        "sign_classes": [{"label": "a"}, {"label": "b", "members": [1, 97]}, {}],
        "adjacency_matrix": [[0, 1, 0], [1, 0, 1], [0, 1, 0]],
        "degree_sequence": [1, 2, 1]
    }"#;
    let input: QuotientGraphInput = serde_json::from_str(json).unwrap();
    assert_eq!(input.sign_classes[1].members, [1, 97]);
    assert_eq!(input.sign_classes[2].label, None);

    let report = input.check().unwrap();
    assert_eq!(report.check("degree_sequence_matches"), Some(true));
    assert!(report.all_passed());
}

#[cfg(feature = "serde")]
#[test]
fn report_serializes_exactly() {
    let m: Vec<Vec<u8>> = vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]];
    let report = check_quotient_graph(&m).unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["average_degree"], serde_json::json!(["4", "3"]));
    assert_eq!(value["degree_sequence"], serde_json::json!([1, 2, 1]));
    assert_eq!(value["connected"], serde_json::json!(true));
}
