use std::io::Write;

use camino::Utf8PathBuf;
use macroplan::importer::{LabeledMatrix, import_file, import_matrix, import_str};
use macroplan::{Floorplan, FloorplanError};

fn write_table(dir: &tempfile::TempDir, name: &str, text: &str) -> Utf8PathBuf {
    let path = Utf8PathBuf::from_path_buf(dir.path().join(name)).unwrap();
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(text.as_bytes()).unwrap();
    path
}

#[test]
fn three_block_example() {
    let plan = import_str(",A,B,C\nA,4,0,2\nB,0,9,0\nC,2,0,16\n").unwrap();
    let dims: Vec<(&str, f64, f64, f64)> = plan
        .blocks
        .iter()
        .map(|b| (b.name.as_str(), b.area, b.width, b.height))
        .collect();
    assert_eq!(
        dims,
        vec![("A", 4.0, 2.0, 2.0), ("B", 9.0, 3.0, 3.0), ("C", 16.0, 4.0, 4.0)]
    );
    assert_eq!(plan.connections.len(), 1);
    let c = &plan.connections[0];
    assert_eq!((c.from, c.to, c.from_name.as_str(), c.to_name.as_str()), (0, 2, "A", "C"));
    assert_eq!(c.weight, 2.0);
}

#[test]
fn counts_match_matrix() {
    let n = 7;
    let mut text = String::from("idx");
    for i in 0..n {
        text.push_str(&format!(",M{}", i));
    }
    text.push('\n');
    let mut expected_conns = 0;
    for i in 0..n {
        text.push_str(&format!("M{}", i));
        for j in 0..n {
            let v = if i == j {
                ((i + 1) * 100) as f64
            } else {
                // some positive, some zero, some negative entries
                ((i * 3 + j * 5) % 4) as f64 - 1.0
            };
            if j > i && v > 0.0 {
                expected_conns += 1;
            }
            text.push_str(&format!(",{}", v));
        }
        text.push('\n');
    }
    let plan = import_str(&text).unwrap();
    assert_eq!(plan.blocks.len(), n);
    assert_eq!(plan.connections.len(), expected_conns);
    for (i, b) in plan.blocks.iter().enumerate() {
        assert_eq!(b.id, i);
        assert_eq!(b.area, ((i + 1) * 100) as f64);
        assert_eq!(b.width, b.area.sqrt());
        assert_eq!(b.height, b.area.sqrt());
    }
    assert!(plan.connections.iter().all(|c| c.from < c.to && c.weight > 0.0));
}

#[test]
fn initial_grid_does_not_overlap_small_blocks() {
    let plan =
        import_str(",A,B,C,D\nA,100,0,0,0\nB,0,100,0,0\nC,0,0,100,0\nD,0,0,0,100\n").unwrap();
    let origins: Vec<(f64, f64)> = plan.blocks.iter().map(|b| (b.x, b.y)).collect();
    assert_eq!(
        origins,
        vec![(100.0, 100.0), (300.0, 100.0), (500.0, 100.0), (100.0, 300.0)]
    );
}

#[test]
fn non_square_is_validation_error() {
    let m = LabeledMatrix {
        row_labels: vec!["A".into(), "B".into(), "C".into()],
        col_labels: vec!["A".into(), "B".into()],
        values: vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.0, 0.0]],
    };
    assert!(matches!(import_matrix(&m), Err(FloorplanError::Validation(_))));

    let m = LabeledMatrix {
        row_labels: vec!["A".into(), "B".into()],
        col_labels: vec!["A".into(), "B".into()],
        values: vec![vec![1.0, 0.0, 3.0], vec![0.0, 1.0, 3.0]],
    };
    let err = import_matrix(&m).unwrap_err();
    assert_eq!(err.to_string(), "Matrix must be square");
}

#[test]
fn failed_load_keeps_previous_floorplan() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_table(&dir, "good.csv", ",A,B\nA,25,4\nB,4,36\n");
    let bad = write_table(&dir, "bad.csv", ",A,B\nA,1,0\nB,0,1\nC,0,0\n");

    let mut plan = Floorplan::default();
    plan.load_file(&good).unwrap();
    plan.blocks[0].x = 42.0;
    let before = plan.clone();

    let err = plan.load_file(&bad).unwrap_err();
    assert!(matches!(err, FloorplanError::Validation(_)));
    assert_eq!(plan, before);

    let missing = Utf8PathBuf::from_path_buf(dir.path().join("nope.csv")).unwrap();
    assert!(matches!(plan.load_file(&missing), Err(FloorplanError::Io { .. })));
    assert_eq!(plan, before);
}

#[test]
fn reload_replaces_everything() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_table(&dir, "a.csv", ",A,B\nA,25,4\nB,4,36\n");
    let second = write_table(&dir, "b.tsv", "name\tX\nX\t49\n");

    let mut plan = Floorplan::default();
    plan.load_file(&first).unwrap();
    plan.load_file(&second).unwrap();
    assert_eq!(plan.blocks.len(), 1);
    assert_eq!(plan.blocks[0].name, "X");
    assert_eq!(plan.blocks[0].width, 7.0);
    assert!(plan.connections.is_empty());
}

#[test]
fn import_file_reports_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_table(&dir, "broken.csv", ",A,B\nA,1,x\nB,0,1\n");
    match import_file(&path) {
        Err(FloorplanError::Parse { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn quoted_names_with_line_breaks_survive_import() {
    let plan = import_str(",\"CPU\ncore\",B\n\"CPU\ncore\",4,1\nB,1,9\n").unwrap();
    let names: Vec<&str> = plan.blocks.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["CPU\ncore", "B"]);
    assert_eq!(plan.connections.len(), 1);
    assert_eq!(plan.connections[0].from_name, "CPU\ncore");
}

#[test]
fn non_utf8_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(dir.path().join("latin1.csv")).unwrap();
    std::fs::write(&path, b",A\n\xC4,4\n").unwrap();
    match import_file(&path) {
        Err(FloorplanError::Io { source, .. }) => {
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData)
        }
        other => panic!("expected io error, got {:?}", other),
    }
}
