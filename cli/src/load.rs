use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use degrees_core::GraphStore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use tracing::{debug, info, warn};

pub const PEOPLE_FILE: &str = "people.csv";
pub const MOVIES_FILE: &str = "movies.csv";
pub const STARS_FILE: &str = "stars.csv";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error while reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Counts gathered while loading a dataset directory.
#[derive(Debug, Clone, Default)]
pub struct LoadSummary {
    pub people: usize,
    pub works: usize,
    pub credits: usize,
    /// Rows that could not be parsed.
    pub malformed_rows: usize,
    /// People or works whose id was already registered.
    pub duplicate_ids: usize,
    /// Credits naming a person or work that does not exist.
    pub dangling_credits: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    #[serde(default, deserialize_with = "lenient_year")]
    birth: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    #[serde(default, deserialize_with = "lenient_year")]
    year: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

/// Blank or non-numeric years become `None` instead of failing the row.
fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}

/// Load `people.csv`, `movies.csv` and `stars.csv` from `dir` into a new store.
///
/// People and works load first, then credits. Malformed rows, duplicate ids
/// and credits pointing at unknown records are skipped and counted.
pub fn load_directory(dir: &Path) -> Result<(GraphStore, LoadSummary), LoadError> {
    let start = Instant::now();
    let mut graph = GraphStore::new();
    let mut summary = LoadSummary::default();

    let people_path = dir.join(PEOPLE_FILE);
    for_each_row(&people_path, &mut summary, |row: PersonRow, summary| {
        match graph.add_person(row.id, row.name, row.birth) {
            Ok(()) => summary.people += 1,
            Err(e) => {
                debug!("{}: {}", PEOPLE_FILE, e);
                summary.duplicate_ids += 1;
            }
        }
    })?;

    let movies_path = dir.join(MOVIES_FILE);
    for_each_row(&movies_path, &mut summary, |row: MovieRow, summary| {
        match graph.add_work(row.id, row.title, row.year) {
            Ok(()) => summary.works += 1,
            Err(e) => {
                debug!("{}: {}", MOVIES_FILE, e);
                summary.duplicate_ids += 1;
            }
        }
    })?;

    let stars_path = dir.join(STARS_FILE);
    for_each_row(&stars_path, &mut summary, |row: StarRow, summary| {
        if let Err(e) = graph.add_credit(&row.person_id, &row.movie_id) {
            debug!("{}: {}", STARS_FILE, e);
            summary.dangling_credits += 1;
        }
    })?;

    summary.credits = graph.credit_count();
    summary.elapsed = start.elapsed();

    if summary.malformed_rows + summary.duplicate_ids + summary.dangling_credits > 0 {
        warn!(
            malformed_rows = summary.malformed_rows,
            duplicate_ids = summary.duplicate_ids,
            dangling_credits = summary.dangling_credits,
            "skipped rows while loading {}",
            dir.display()
        );
    }
    info!(
        people = summary.people,
        works = summary.works,
        credits = summary.credits,
        elapsed_ms = summary.elapsed.as_secs_f64() * 1000.0,
        "data loaded"
    );

    Ok((graph, summary))
}

/// Deserialize every row of a headered CSV file, handing each to `apply`.
///
/// Unparsable rows are skipped; I/O failures abort the load.
fn for_each_row<T, F>(path: &Path, summary: &mut LoadSummary, mut apply: F) -> Result<(), LoadError>
where
    T: DeserializeOwned,
    F: FnMut(T, &mut LoadSummary),
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    for result in reader.deserialize::<T>() {
        match result {
            Ok(row) => apply(row, summary),
            Err(e) if e.is_io_error() => {
                return Err(LoadError::Read {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
            Err(e) => {
                debug!("{}: skipping row: {}", path.display(), e);
                summary.malformed_rows += 1;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use degrees_core::find_shortest_path;
    use tempfile::TempDir;

    fn write_dataset(people: &str, movies: &str, stars: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PEOPLE_FILE), people).unwrap();
        fs::write(dir.path().join(MOVIES_FILE), movies).unwrap();
        fs::write(dir.path().join(STARS_FILE), stars).unwrap();
        dir
    }

    fn small_dataset() -> TempDir {
        write_dataset(
            "id,name,birth\n\
             102,Kevin Bacon,1958\n\
             129,Tom Cruise,1962\n\
             158,Tom Hanks,1956\n\
             1697,Chris Sarandon,\n",
            "id,title,year\n\
             104257,A Few Good Men,1992\n\
             112384,Apollo 13,1995\n",
            "person_id,movie_id\n\
             102,104257\n\
             129,104257\n\
             102,112384\n\
             158,112384\n",
        )
    }

    #[test]
    fn test_load_small_dataset() {
        let dir = small_dataset();
        let (graph, summary) = load_directory(dir.path()).unwrap();

        assert_eq!(summary.people, 4);
        assert_eq!(summary.works, 2);
        assert_eq!(summary.credits, 4);
        assert_eq!(summary.malformed_rows, 0);
        assert_eq!(summary.dangling_credits, 0);

        let bacon = graph.person("102").unwrap();
        assert_eq!(bacon.name, "Kevin Bacon");
        assert_eq!(bacon.birth, Some(1958));
        assert_eq!(bacon.works.len(), 2);
        assert_eq!(graph.person("1697").unwrap().birth, None);
        assert_eq!(graph.work("112384").unwrap().year, Some(1995));
    }

    #[test]
    fn test_loaded_graph_is_searchable() {
        let dir = small_dataset();
        let (graph, _) = load_directory(dir.path()).unwrap();

        let path = find_shortest_path(&graph, "129", "158").unwrap().unwrap();
        assert_eq!(path.pairs(), vec![("104257", "102"), ("112384", "158")]);
        assert_eq!(find_shortest_path(&graph, "129", "1697").unwrap(), None);
    }

    #[test]
    fn test_dangling_credits_skipped() {
        let dir = write_dataset(
            "id,name,birth\n1,A,\n",
            "id,title,year\n10,W,2000\n",
            "person_id,movie_id\n1,10\n2,10\n1,11\n",
        );
        let (graph, summary) = load_directory(dir.path()).unwrap();
        assert_eq!(summary.credits, 1);
        assert_eq!(summary.dangling_credits, 2);
        assert_eq!(graph.work("10").unwrap().credits.len(), 1);
    }

    #[test]
    fn test_duplicate_and_malformed_rows() {
        let dir = write_dataset(
            "id,name,birth\n1,A,1970\n1,A again,1971\n2\n",
            "id,title,year\n10,W,not-a-year\n",
            "person_id,movie_id\n1,10\n",
        );
        let (graph, summary) = load_directory(dir.path()).unwrap();
        assert_eq!(summary.people, 1);
        assert_eq!(summary.duplicate_ids, 1);
        assert_eq!(summary.malformed_rows, 1);
        assert_eq!(graph.person("1").unwrap().name, "A");
        assert_eq!(graph.work("10").unwrap().year, None);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let Err(err) = load_directory(dir.path()) else {
            panic!("expected load error");
        };
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().contains(PEOPLE_FILE));
    }
}
