use std::io::{self, Write};
use std::time::Duration;

use degrees_core::{GraphStore, SearchReport};
use serde_json::{json, Value};

fn person_name<'g>(graph: &'g GraphStore, id: &'g str) -> &'g str {
    graph.person(id).map(|p| p.name.as_str()).unwrap_or(id)
}

fn work_title<'g>(graph: &'g GraphStore, id: &'g str) -> &'g str {
    graph.work(id).map(|w| w.title.as_str()).unwrap_or(id)
}

/// Human-readable result, one line per hop.
pub fn render_text<W: Write>(
    out: &mut W,
    graph: &GraphStore,
    source: &str,
    report: &SearchReport,
    elapsed: Duration,
) -> io::Result<()> {
    match &report.path {
        None => writeln!(out, "Not connected.")?,
        Some(path) => {
            writeln!(out, "{} degrees of separation.", path.degrees())?;
            let mut previous = source;
            for (i, hop) in path.hops.iter().enumerate() {
                writeln!(
                    out,
                    "{}: {} and {} starred in {}",
                    i + 1,
                    person_name(graph, previous),
                    person_name(graph, &hop.person_id),
                    work_title(graph, &hop.work_id)
                )?;
                previous = hop.person_id.as_str();
            }
        }
    }
    writeln!(
        out,
        "Explored {} nodes in {:.3} sec",
        report.nodes_explored,
        elapsed.as_secs_f64()
    )
}

/// Machine-readable result. `degrees` is null when the two people are not connected.
pub fn render_json(
    graph: &GraphStore,
    source: &str,
    target: &str,
    report: &SearchReport,
    elapsed: Duration,
) -> Value {
    let hops: Vec<Value> = report
        .path
        .iter()
        .flat_map(|path| path.hops.iter())
        .map(|hop| {
            json!({
                "work_id": hop.work_id,
                "title": work_title(graph, &hop.work_id),
                "person_id": hop.person_id,
                "name": person_name(graph, &hop.person_id),
            })
        })
        .collect();

    json!({
        "source": { "id": source, "name": person_name(graph, source) },
        "target": { "id": target, "name": person_name(graph, target) },
        "degrees": report.path.as_ref().map(|p| p.degrees()),
        "hops": hops,
        "nodes_explored": report.nodes_explored,
        "frontier_peak": report.frontier_peak,
        "elapsed_ms": elapsed.as_secs_f64() * 1000.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use degrees_core::{search, SearchOptions};

    fn graph() -> GraphStore {
        let mut g = GraphStore::new();
        g.add_person("a", "Alice", None).unwrap();
        g.add_person("b", "Bob", None).unwrap();
        g.add_person("c", "Carol", None).unwrap();
        g.add_person("d", "Dan", None).unwrap();
        g.add_work("w1", "First Film", Some(2001)).unwrap();
        g.add_work("w2", "Second Film", Some(2002)).unwrap();
        for (p, w) in [("a", "w1"), ("b", "w1"), ("b", "w2"), ("c", "w2")] {
            g.add_credit(p, w).unwrap();
        }
        g
    }

    fn run(g: &GraphStore, source: &str, target: &str) -> SearchReport {
        search(g, source, target, &SearchOptions::default()).unwrap()
    }

    #[test]
    fn test_text_connected() {
        let g = graph();
        let report = run(&g, "a", "c");
        let mut out = Vec::new();
        render_text(&mut out, &g, "a", &report, Duration::from_millis(5)).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "2 degrees of separation.");
        assert_eq!(lines[1], "1: Alice and Bob starred in First Film");
        assert_eq!(lines[2], "2: Bob and Carol starred in Second Film");
        assert!(lines[3].starts_with("Explored "));
    }

    #[test]
    fn test_text_not_connected() {
        let g = graph();
        let report = run(&g, "a", "d");
        let mut out = Vec::new();
        render_text(&mut out, &g, "a", &report, Duration::ZERO).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("Not connected.\n"));
    }

    #[test]
    fn test_text_same_person() {
        let g = graph();
        let report = run(&g, "b", "b");
        let mut out = Vec::new();
        render_text(&mut out, &g, "b", &report, Duration::ZERO).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().next(), Some("0 degrees of separation."));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_json_connected() {
        let g = graph();
        let report = run(&g, "a", "c");
        let value = render_json(&g, "a", "c", &report, Duration::from_millis(2));
        assert_eq!(value["degrees"], 2);
        assert_eq!(value["source"]["name"], "Alice");
        assert_eq!(value["hops"][0]["title"], "First Film");
        assert_eq!(value["hops"][1]["person_id"], "c");
        assert_eq!(value["hops"][1]["name"], "Carol");
    }

    #[test]
    fn test_json_not_connected() {
        let g = graph();
        let report = run(&g, "a", "d");
        let value = render_json(&g, "a", "d", &report, Duration::ZERO);
        assert!(value["degrees"].is_null());
        assert_eq!(value["hops"].as_array().unwrap().len(), 0);
    }
}
