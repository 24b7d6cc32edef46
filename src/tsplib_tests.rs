use super::*;
use std::path::PathBuf;

fn test_path() -> PathBuf {
    PathBuf::from("test.tsp")
}

#[test]
fn test_parse_header_fields() {
    let content = r#"
NAME: gr3
TYPE: TSP
COMMENT: A simple test
DIMENSION: 3
EDGE_WEIGHT_TYPE: EXPLICIT
EDGE_WEIGHT_FORMAT: LOWER_DIAG_ROW
EDGE_WEIGHT_SECTION
0
10 0
20 30 0
EOF
"#;

    let file = TsplibParser::parse(content, &test_path()).expect("should parse");

    assert_eq!(file.name, "gr3");
    assert_eq!(file.problem_type, ProblemType::Tsp);
    assert_eq!(file.comment, Some("A simple test".into()));
    assert_eq!(file.dimension, 3);
    assert_eq!(file.edge_weight_type.as_deref(), Some("EXPLICIT"));
    assert_eq!(file.edge_weight_format.as_deref(), Some("LOWER_DIAG_ROW"));
    assert_eq!(
        file.edge_weights,
        Some(vec![0.0, 10.0, 0.0, 20.0, 30.0, 0.0])
    );
}

#[test]
fn test_spaced_header_keys() {
    let content = r#"
NAME : br17
TYPE : ATSP
DIMENSION : 2
EDGE_WEIGHT_TYPE : EXPLICIT
EDGE_WEIGHT_FORMAT : FULL_MATRIX
EDGE_WEIGHT_SECTION
 9999 3
 5 9999
EOF
"#;

    let file = TsplibParser::parse(content, &test_path()).expect("should parse");
    assert_eq!(file.name, "br17");
    assert_eq!(file.problem_type, ProblemType::Atsp);
    assert_eq!(file.edge_weights, Some(vec![9999.0, 3.0, 5.0, 9999.0]));
}

#[test]
fn test_section_ends_at_next_keyword() {
    let content = r#"
NAME: vrp
TYPE: CVRP
DIMENSION: 3
CAPACITY: 30
EDGE_WEIGHT_TYPE: EXPLICIT
EDGE_WEIGHT_FORMAT: LOWER_ROW
EDGE_WEIGHT_SECTION
4
5 6
DEMAND_SECTION
1 0
2 12
3 7
DEPOT_SECTION
1
-1
EOF
"#;

    let file = TsplibParser::parse(content, &test_path()).expect("should parse");
    assert_eq!(file.capacity, Some(30.0));
    assert_eq!(file.edge_weights, Some(vec![4.0, 5.0, 6.0]));
    assert_eq!(file.demands, vec![(1, 0.0), (2, 12.0), (3, 7.0)]);
    assert_eq!(file.depot_ids, vec![1, -1]);
}

#[test]
fn test_section_ends_at_header_line() {
    let content = r#"
DIMENSION: 2
EDGE_WEIGHT_SECTION
7
EDGE_WEIGHT_FORMAT: UPPER_ROW
EOF
"#;

    let file = TsplibParser::parse(content, &test_path()).expect("should parse");
    assert_eq!(file.edge_weights, Some(vec![7.0]));
    assert_eq!(file.edge_weight_format.as_deref(), Some("UPPER_ROW"));
}

#[test]
fn test_content_after_eof_ignored() {
    let content = "DIMENSION: 2\nEDGE_WEIGHT_SECTION\n1\nEOF\n2 3 4\n";
    let file = TsplibParser::parse(content, &test_path()).expect("should parse");
    assert_eq!(file.edge_weights, Some(vec![1.0]));
}

#[test]
fn test_empty_edge_weight_section_is_present() {
    let content = "DIMENSION: 1\nEDGE_WEIGHT_FORMAT: LOWER_ROW\nEDGE_WEIGHT_SECTION\nEOF\n";
    let file = TsplibParser::parse(content, &test_path()).expect("should parse");
    assert_eq!(file.edge_weights, Some(Vec::new()));
}

#[test]
fn test_no_edge_weight_section() {
    let content = r#"
NAME: coords
DIMENSION: 2
EDGE_WEIGHT_TYPE: EUC_2D
NODE_COORD_SECTION
1 0.0 0.0
2 3.0 4.0
EOF
"#;

    let file = TsplibParser::parse(content, &test_path()).expect("should parse");
    assert!(file.edge_weights.is_none());
    assert_eq!(file.edge_weight_type.as_deref(), Some("EUC_2D"));
}

#[test]
fn test_tour_file() {
    let content = r#"
NAME : gr5.opt.tour
TYPE : TOUR
DIMENSION : 5
TOUR_SECTION
1
5
3
2 4
-1
EOF
"#;

    let file = TsplibParser::parse(content, &test_path()).expect("should parse");
    assert_eq!(file.problem_type, ProblemType::Tour);
    assert_eq!(file.tour_ids, vec![1, 5, 3, 2, 4, -1]);
}

#[test]
fn test_parse_missing_dimension() {
    let content = r#"
NAME: test
EDGE_WEIGHT_SECTION
1 2 3
EOF
"#;

    let result = TsplibParser::parse(content, &test_path());
    assert!(result.is_err());
    let err = result.unwrap_err().to_string();
    assert!(err.contains("DIMENSION"));
}

#[test]
fn test_parse_invalid_dimension() {
    let content = "DIMENSION: many\n";
    let err = TsplibParser::parse(content, &test_path()).unwrap_err();
    assert!(matches!(err, TsplibError::Parse { line: Some(1), .. }));
    assert!(err.to_string().contains("Invalid dimension: many"));
}

#[test]
fn test_parse_invalid_edge_weight() {
    let content = r#"DIMENSION: 3
EDGE_WEIGHT_SECTION
1 2
3 x
EOF
"#;

    let err = TsplibParser::parse(content, &test_path()).unwrap_err();
    match err {
        TsplibError::ValueParse { line, token, .. } => {
            assert_eq!(line, 4);
            assert_eq!(token, "x");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_invalid_tour_id() {
    let content = "DIMENSION: 3\nTOUR_SECTION\n1 2.5 3\n-1\n";
    let err = TsplibParser::parse(content, &test_path()).unwrap_err();
    assert!(matches!(err, TsplibError::ValueParse { ref token, .. } if token == "2.5"));
}

#[test]
fn test_parse_malformed_demand() {
    let content = "DIMENSION: 2\nDEMAND_SECTION\n1 0 9\n";
    let err = TsplibParser::parse(content, &test_path()).unwrap_err();
    assert!(err.to_string().contains("node demand"));
}

#[test]
fn test_multiple_comments_joined() {
    let content = "COMMENT: first\nCOMMENT: second\nDIMENSION: 1\n";
    let file = TsplibParser::parse(content, &test_path()).expect("should parse");
    assert_eq!(file.comment.as_deref(), Some("first second"));
}

#[test]
fn test_name_defaults_to_filename() {
    let content = "DIMENSION: 2\n";
    let file =
        TsplibParser::parse(content, &PathBuf::from("my_instance.atsp")).expect("should parse");
    assert_eq!(file.name, "my_instance");
}

#[test]
fn test_problem_type_parse() {
    assert_eq!(ProblemType::parse(" cvrp "), ProblemType::Cvrp);
    assert_eq!(ProblemType::parse("SOP"), ProblemType::Sop);
    assert_eq!(
        ProblemType::parse("PDTSP"),
        ProblemType::Other("PDTSP".into())
    );
    assert_eq!(ProblemType::Other("PDTSP".into()).to_string(), "PDTSP");
}

#[test]
fn test_problem_type_symmetry_heuristic() {
    assert!(ProblemType::Tsp.assumes_symmetric());
    assert!(ProblemType::Cvrp.assumes_symmetric());
    assert!(ProblemType::Hcp.assumes_symmetric());
    assert!(ProblemType::Other("X".into()).assumes_symmetric());
    assert!(!ProblemType::Atsp.assumes_symmetric());
    assert!(!ProblemType::Sop.assumes_symmetric());
}

#[test]
fn test_parse_file_reads_disk() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("tiny.sop");
    std::fs::write(&path, "TYPE: SOP\nDIMENSION: 1\n").expect("write");
    let file = TsplibParser::parse_file(&path).expect("should parse");
    assert_eq!(file.name, "tiny");
    assert_eq!(file.problem_type, ProblemType::Sop);
}

#[test]
fn test_parse_file_missing() {
    let err = TsplibParser::parse_file(Path::new("/nonexistent/x.tsp")).unwrap_err();
    assert!(matches!(err, TsplibError::Io(_)));
}

#[test]
fn test_unknown_section_closes_open_section() {
    let content = r#"
NAME: vrptw
TYPE: CVRP
DIMENSION: 2
EDGE_WEIGHT_FORMAT: UPPER_ROW
EDGE_WEIGHT_SECTION
4
TIME_WINDOW_SECTION
1 0 100
2 10 50
DEPOT_SECTION
1
-1
BACKHAUL_SECTION
2
-1
EOF
"#;

    let file = TsplibParser::parse(content, &test_path()).expect("should parse");
    assert_eq!(file.edge_weights, Some(vec![4.0]));
    assert_eq!(file.depot_ids, vec![1, -1]);
}

#[test]
fn test_sop_leading_dimension_dropped() {
    let content = "NAME: ESC3\nTYPE: SOP\nDIMENSION: 3\nEDGE_WEIGHT_TYPE: EXPLICIT\n\
                   EDGE_WEIGHT_FORMAT: FULL_MATRIX\nEDGE_WEIGHT_SECTION\n3\n\
                   0 5 1000000\n-1 0 7\n-1 -1 0\nEOF\n";
    let file = TsplibParser::parse(content, &test_path()).expect("should parse");
    let weights = file.edge_weights.expect("weights");
    assert_eq!(weights.len(), 9);
    assert_eq!(weights[0], 0.0);
    assert_eq!(weights[2], 1_000_000.0);
}

#[test]
fn test_sop_exact_count_kept() {
    // First matrix value equals the dimension but the count already fits.
    let content = "TYPE: SOP\nDIMENSION: 2\nEDGE_WEIGHT_FORMAT: FULL_MATRIX\n\
                   EDGE_WEIGHT_SECTION\n2 1\n1 0\nEOF\n";
    let file = TsplibParser::parse(content, &test_path()).expect("should parse");
    assert_eq!(file.edge_weights, Some(vec![2.0, 1.0, 1.0, 0.0]));
}

#[test]
fn test_leading_dimension_kept_for_other_types() {
    let content = "TYPE: ATSP\nDIMENSION: 2\nEDGE_WEIGHT_FORMAT: FULL_MATRIX\n\
                   EDGE_WEIGHT_SECTION\n2\n0 1\n1 0\nEOF\n";
    let file = TsplibParser::parse(content, &test_path()).expect("should parse");
    assert_eq!(file.edge_weights.map(|w| w.len()), Some(5));
}
