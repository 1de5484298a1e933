//! Text and JSON formatting of experiment results.

use std::fmt::Write;

use maze_core::Point;
use maze_search::{ExperimentReport, ResultRecord};
use serde::Serialize;

/// Fixed-width comparison table for one experiment.
pub fn table(report: &ExperimentReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Start {}", report.start);
    let _ = writeln!(
        out,
        "{:<18} {:>8} {:>10} {:>12} {:>10}",
        "algorithm", "length", "expanded", "time (s)", "branching"
    );
    for r in report {
        let length = r
            .path_len()
            .map_or_else(|| "-".to_string(), |n| n.to_string());
        let _ = writeln!(
            out,
            "{:<18} {:>8} {:>10} {:>12.6} {:>10.2}",
            r.label(),
            length,
            r.nodes_expanded,
            r.elapsed,
            r.branching_factor
        );
    }
    out
}

#[derive(Serialize)]
struct JsonRun<'a> {
    start: Point,
    results: Vec<JsonRecord<'a>>,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    label: &'static str,
    path_len: Option<usize>,
    #[serde(flatten)]
    record: &'a ResultRecord,
}

/// Pretty JSON array with one object per experiment.
pub fn to_json(reports: &[ExperimentReport]) -> serde_json::Result<String> {
    let runs: Vec<JsonRun<'_>> = reports
        .iter()
        .map(|r| JsonRun {
            start: r.start,
            results: r
                .iter()
                .map(|record| JsonRecord {
                    label: record.label(),
                    path_len: record.path_len(),
                    record,
                })
                .collect(),
        })
        .collect();
    serde_json::to_string_pretty(&runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Maze;
    use maze_search::run_experiment;

    fn report(text: &str) -> ExperimentReport {
        let m = Maze::parse(text).unwrap();
        run_experiment(m.grid(), m.first_start(), m.goals()).unwrap()
    }

    #[test]
    fn table_lists_every_strategy() {
        let t = table(&report("2,0\n1,3"));
        assert!(t.starts_with("Start (0, 0)"));
        for label in ["DFS", "BFS", "Greedy_Manhattan", "A*_Euclidean"] {
            assert!(t.contains(label), "{label} missing:\n{t}");
        }
    }

    #[test]
    fn table_marks_missing_paths() {
        let t = table(&report("2,1\n1,3"));
        let bfs = t.lines().find(|l| l.starts_with("BFS")).unwrap();
        assert!(bfs.contains(" - "));
    }

    #[test]
    fn json_carries_labels_and_lengths() {
        let json = to_json(&[report("2,0\n1,3")]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        let results = v[0]["results"].as_array().unwrap();
        assert_eq!(results.len(), 6);
        assert_eq!(results[4]["label"], "A*_Manhattan");
        assert_eq!(results[4]["path_len"], 3);
        assert_eq!(results[4]["nodes_expanded"], 3);
        assert_eq!(v[0]["start"]["row"], 0);
    }
}
