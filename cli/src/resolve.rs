use std::io::{self, BufRead, Write};

use degrees_core::GraphStore;

/// Print `prompt` and read one trimmed line. `None` on end of input.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Resolve a display name to a person identity.
///
/// A name shared by several people lists every candidate and asks for an id;
/// only one of the listed ids is accepted. Returns `None` when nothing matches.
pub fn person_id_for_name<R: BufRead, W: Write>(
    graph: &GraphStore,
    name: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<String>> {
    let candidates = graph.person_ids_for_name(name);

    match candidates.as_slice() {
        [] => Ok(None),
        [only] => Ok(Some(only.to_string())),
        _ => {
            writeln!(out, "Which '{}'?", name)?;
            for id in &candidates {
                let Some(person) = graph.person(id) else { continue };
                let birth = person.birth.map(|b| b.to_string()).unwrap_or_default();
                writeln!(out, "ID: {}, Name: {}, Birth: {}", id, person.name, birth)?;
            }

            let chosen = prompt_line(input, out, "Intended Person ID: ")?;
            Ok(chosen.filter(|id| candidates.contains(&id.as_str())))
        }
    }
}
