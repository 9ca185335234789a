use std::collections::VecDeque;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use degrees_core::{search, Discipline, GraphError, GraphStore, SearchOptions};
use tracing_subscriber::EnvFilter;

/// Benchmark the degrees-of-separation search on synthetic collaboration graphs.
#[derive(Parser, Debug)]
#[command(name = "degrees-bench")]
struct Args {
    /// Graph shape to generate
    #[arg(value_enum, default_value_t = Mode::All)]
    mode: Mode,

    /// Number of people to generate
    #[arg(default_value_t = 200_000)]
    people: u64,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Run every generator
    All,
    /// Branching tree of two-person works (deep paths)
    Tree,
    /// Preferential casting (hub-and-spoke stars)
    Scalefree,
    /// Ring of overlapping casts plus random shortcuts
    Smallworld,
    /// Uniformly random casts
    Random,
    /// Two dense clusters joined by a thin bridge
    Barbell,
}

type Generator = fn(u64) -> Result<GraphStore, GraphError>;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    println!("degrees-bench");
    println!("=============");
    println!();

    let generators: Vec<(&str, Generator)> = match args.mode {
        Mode::Tree => vec![("Tree", gen_tree)],
        Mode::Scalefree => vec![("Scale-free casting", gen_scale_free)],
        Mode::Smallworld => vec![("Small-world ring", gen_small_world)],
        Mode::Random => vec![("Random casts", gen_random)],
        Mode::Barbell => vec![("Barbell (cluster-bridge-cluster)", gen_barbell)],
        Mode::All => vec![
            ("Tree", gen_tree as Generator),
            ("Scale-free casting", gen_scale_free),
            ("Small-world ring", gen_small_world),
            ("Random casts", gen_random),
            ("Barbell (cluster-bridge-cluster)", gen_barbell),
        ],
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, args.people)?;
    }
    Ok(())
}

fn run_benchmark(name: &str, generator: Generator, people: u64) -> anyhow::Result<()> {
    println!("--- {} ---", name);
    println!("Target: {} people", people);

    let t = Instant::now();
    let graph = generator(people)?;
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s: {} people, {} works, {} credits, ~{:.0}MB",
        gen_time.as_secs_f64(),
        graph.person_count(),
        graph.work_count(),
        graph.credit_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    let source = person_id(0);
    let target = person_id(people.saturating_sub(1));

    println!();
    println!(
        "{:>10} {:>8} {:>10} {:>10} {:>10}",
        "frontier", "degrees", "explored", "peak", "time"
    );
    println!("{:->10} {:->8} {:->10} {:->10} {:->10}", "", "", "", "", "");

    for (label, discipline) in [("queue", Discipline::Breadth), ("stack", Discipline::Depth)] {
        let options = SearchOptions {
            discipline,
            max_degrees: None,
        };
        let t = Instant::now();
        let report = search(&graph, &source, &target, &options)?;
        let elapsed = t.elapsed();
        let degrees = report
            .path
            .as_ref()
            .map(|p| p.degrees().to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>10} {:>8} {:>10} {:>10} {:>8.1}ms",
            label,
            degrees,
            report.nodes_explored,
            report.frontier_peak,
            elapsed.as_secs_f64() * 1000.0
        );
    }
    println!();
    Ok(())
}

// ---------------------------------------------------------------------------
// Generators: deterministic, single-threaded, O(people + credits)
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn person_id(i: u64) -> String {
    format!("p{}", i)
}

fn add_people(graph: &mut GraphStore, people: u64) -> Result<(), GraphError> {
    for i in 0..people {
        graph.add_person(person_id(i), format!("Person {}", i), Some(1900 + (i % 100) as i32))?;
    }
    Ok(())
}

/// Register work number `work` and credit everyone in `cast`.
fn add_cast(graph: &mut GraphStore, work: u64, cast: &[u64]) -> Result<(), GraphError> {
    let id = format!("w{}", work);
    graph.add_work(id.clone(), format!("Work {}", work), Some(1950 + (work % 70) as i32))?;
    for &p in cast {
        graph.add_credit(&person_id(p), &id)?;
    }
    Ok(())
}

/// Branching tree: each person appears in one two-person work with each of
/// their three children. Distance from the root to the last person is ~log3(n).
fn gen_tree(people: u64) -> Result<GraphStore, GraphError> {
    let mut graph = GraphStore::with_capacity(people as usize, people as usize);
    add_people(&mut graph, people)?;

    let branching = 3u64;
    let mut next_id: u64 = 1;
    let mut work: u64 = 0;
    let mut frontier: VecDeque<u64> = VecDeque::from([0]);

    while let Some(parent) = frontier.pop_front() {
        for _ in 0..branching {
            if next_id >= people {
                return Ok(graph);
            }
            add_cast(&mut graph, work, &[parent, next_id])?;
            work += 1;
            frontier.push_back(next_id);
            next_id += 1;
        }
    }

    Ok(graph)
}

/// Preferential casting via credit-endpoint sampling (O(credits), not O(n²)).
///
/// Each new person gets a work whose other cast members are drawn from the
/// list of past credits, so prolific people are cast again more often.
fn gen_scale_free(people: u64) -> Result<GraphStore, GraphError> {
    let co_stars = 4u64;
    let mut graph = GraphStore::with_capacity(people as usize, people as usize);
    let mut rng = FastRng::new(12345);
    add_people(&mut graph, people)?;

    let mut credited: Vec<u64> = Vec::with_capacity((people * (co_stars + 1)) as usize);

    // Seed: one ensemble work
    let seed: Vec<u64> = (0..people.min(5)).collect();
    add_cast(&mut graph, 0, &seed)?;
    credited.extend(&seed);

    for new_person in seed.len() as u64..people {
        let mut cast = vec![new_person];
        for _ in 0..co_stars {
            // Proportional to how many works they already appear in
            let pick = credited[rng.next(credited.len() as u64) as usize];
            if !cast.contains(&pick) {
                cast.push(pick);
            }
        }
        add_cast(&mut graph, new_person, &cast)?;
        credited.extend(&cast);
    }

    Ok(graph)
}

/// Small-world: work i casts people i..i+k around a ring; with probability p
/// one extra member is drawn from anywhere, creating shortcuts.
fn gen_small_world(people: u64) -> Result<GraphStore, GraphError> {
    let k = 4u64;
    let p = 0.05f64;
    let mut graph = GraphStore::with_capacity(people as usize, people as usize);
    let mut rng = FastRng::new(67890);
    add_people(&mut graph, people)?;

    for i in 0..people {
        let mut cast: Vec<u64> = (0..k.min(people)).map(|j| (i + j) % people).collect();
        if rng.next_f64() < p {
            let shortcut = rng.next(people);
            if !cast.contains(&shortcut) {
                cast.push(shortcut);
            }
        }
        add_cast(&mut graph, i, &cast)?;
    }

    Ok(graph)
}

/// Uniformly random casts of 2..=6 people, about one work per two people.
fn gen_random(people: u64) -> Result<GraphStore, GraphError> {
    let works = people / 2;
    let mut graph = GraphStore::with_capacity(people as usize, works as usize);
    let mut rng = FastRng::new(54321);
    add_people(&mut graph, people)?;

    for w in 0..works {
        let size = 2 + rng.next(5);
        let cast: Vec<u64> = (0..size).map(|_| rng.next(people)).collect();
        add_cast(&mut graph, w, &cast)?;
    }

    Ok(graph)
}

/// Barbell: two densely cast clusters joined by a chain of two-person works.
///
/// Worst case for "find a path through a bottleneck": the search floods the
/// first cluster before crossing.
fn gen_barbell(people: u64) -> Result<GraphStore, GraphError> {
    let bridge_len = 10u64.min(people);
    let cluster = (people - bridge_len) / 2;
    let mut graph = GraphStore::with_capacity(people as usize, people as usize);
    let mut rng = FastRng::new(99999);
    add_people(&mut graph, people)?;

    let mut work = 0u64;
    // Each cluster is a ring of works with one random extra member per work
    let mut cast_cluster =
        |graph: &mut GraphStore, offset: u64, work: &mut u64| -> Result<(), GraphError> {
            if cluster < 2 {
                return Ok(());
            }
            for i in 0..cluster {
                let cast = [
                    offset + i,
                    offset + (i + 1) % cluster,
                    offset + rng.next(cluster),
                ];
                add_cast(graph, *work, &cast)?;
                *work += 1;
            }
            Ok(())
        };

    // Cluster A: people 0..cluster
    cast_cluster(&mut graph, 0, &mut work)?;

    // Bridge: chain from the last member of A through the bridge people
    let bridge_start = cluster;
    let mut previous = cluster.saturating_sub(1);
    for i in 0..bridge_len {
        let id = bridge_start + i;
        add_cast(&mut graph, work, &[previous, id])?;
        work += 1;
        previous = id;
    }

    // Cluster B: everyone after the bridge
    let b_start = bridge_start + bridge_len;
    if b_start < people {
        add_cast(&mut graph, work, &[previous, b_start])?;
        work += 1;
    }
    cast_cluster(&mut graph, b_start, &mut work)?;

    // Odd leftover shares a work with the first member of B
    for extra in (b_start + cluster)..people {
        add_cast(&mut graph, work, &[extra, b_start])?;
        work += 1;
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use degrees_core::find_shortest_path;

    #[test]
    fn test_tree_depth() {
        // 1 + 3 + 9 + 27 = 40 people: the last one sits three levels down
        let g = gen_tree(40).unwrap();
        assert_eq!(g.person_count(), 40);
        assert_eq!(g.work_count(), 39);
        let path = find_shortest_path(&g, "p0", "p39").unwrap().unwrap();
        assert_eq!(path.degrees(), 3);
    }

    #[test]
    fn test_generators_connect_endpoints() {
        let generators: [(&str, Generator); 4] = [
            ("tree", gen_tree),
            ("scalefree", gen_scale_free),
            ("smallworld", gen_small_world),
            ("barbell", gen_barbell),
        ];
        for (name, generator) in generators {
            let g = generator(500).unwrap();
            assert_eq!(g.person_count(), 500, "{name}");
            let path = find_shortest_path(&g, "p0", "p499").unwrap();
            assert!(path.is_some(), "{name}: endpoints should be connected");
        }
    }

    #[test]
    fn test_barbell_crosses_bridge() {
        let g = gen_barbell(210).unwrap();
        let path = find_shortest_path(&g, "p0", "p209").unwrap().unwrap();
        // Every route to cluster B runs through all ten bridge people
        assert!(path.degrees() > 10);
        assert!(path.hops.iter().any(|h| h.person_id == "p104"));
    }

    #[test]
    fn test_random_is_deterministic() {
        let a = gen_random(300).unwrap();
        let b = gen_random(300).unwrap();
        assert_eq!(a.credit_count(), b.credit_count());
        assert_eq!(
            find_shortest_path(&a, "p0", "p299").unwrap().map(|p| p.degrees()),
            find_shortest_path(&b, "p0", "p299").unwrap().map(|p| p.degrees())
        );
    }
}
