//! Interactive query prompt.
//!
//! A thin rustyline loop over a frozen graph: read a line, split it with
//! shlex, dispatch, print one result line, repeat. EOF or `exit` leaves;
//! Ctrl-C only discards the current line. History persists across sessions
//! in the working directory.

use hopgraph_core::{HopError, HopResult, VertexId};
use hopgraph_engine::ConnectionGraph;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::output;

const HISTORY_FILE: &str = ".hop_history";
const PROMPT: &str = "hop> ";

enum ReplControl {
    Continue,
    Exit,
}

/// Runs the prompt until EOF or an exit command.
pub fn run(graph: &ConnectionGraph, json_mode: bool) -> HopResult<()> {
    let mut editor = DefaultEditor::new().map_err(|e| HopError::Io {
        message: format!("cannot initialize line editor: {e}"),
        source: None,
    })?;
    let _ = editor.load_history(HISTORY_FILE);

    println!("interactive prompt; `help` lists commands, `exit` leaves");

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Eof) => break,
            Err(ReadlineError::Interrupted) => continue,
            Err(e) => {
                return Err(HopError::Io {
                    message: format!("readline failed: {e}"),
                    source: None,
                })
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(line);

        match dispatch(graph, line, json_mode) {
            Ok(ReplControl::Continue) => {}
            Ok(ReplControl::Exit) => break,
            Err(err) => println!("{}", output::error_line(&err, json_mode)),
        }
    }

    let _ = editor.save_history(HISTORY_FILE);
    Ok(())
}

fn dispatch(graph: &ConnectionGraph, line: &str, json_mode: bool) -> HopResult<ReplControl> {
    let tokens = shlex::split(line)
        .ok_or_else(|| HopError::invalid_input("unbalanced quoting in command"))?;
    if tokens.is_empty() {
        return Ok(ReplControl::Continue);
    }
    let command = tokens[0].as_str();
    let args = &tokens[1..];

    match command {
        "path" | "p" => {
            let (origin, destination) = parse_pair(args)?;
            let result = graph.shortest_path(origin, destination);
            println!("{}", output::query_outcome_line(&result, json_mode));
        }
        "neighbors" | "n" => {
            let id = parse_one(args)?;
            let result = graph.neighbors_of(id);
            println!("{}", output::neighbors_outcome_line(id, &result, json_mode));
        }
        "stats" => {
            println!("{}", output::stats_line(&graph.stats(), json_mode));
        }
        "help" => print_help(),
        "exit" | "quit" => return Ok(ReplControl::Exit),
        other => {
            return Err(HopError::invalid_input(format!(
                "unknown command `{other}`; try `help`"
            )))
        }
    }

    Ok(ReplControl::Continue)
}

fn parse_pair(args: &[String]) -> HopResult<(VertexId, VertexId)> {
    match args {
        [origin, destination] => Ok((parse_id(origin)?, parse_id(destination)?)),
        _ => Err(HopError::invalid_input(
            "expected two identifiers: path <origin> <destination>",
        )),
    }
}

fn parse_one(args: &[String]) -> HopResult<VertexId> {
    match args {
        [id] => parse_id(id),
        _ => Err(HopError::invalid_input(
            "expected one identifier: neighbors <id>",
        )),
    }
}

fn parse_id(token: &str) -> HopResult<VertexId> {
    token
        .parse::<VertexId>()
        .map_err(|_| HopError::invalid_input(format!("`{token}` is not an integer identifier")))
}

fn print_help() {
    println!("commands:");
    println!("  path <origin> <destination>   fewest-hop path between two identifiers (alias: p)");
    println!("  neighbors <id>                direct neighbors of an identifier (alias: n)");
    println!("  stats                         vertex and connection counts");
    println!("  help                          this summary");
    println!("  exit | quit                   leave the prompt");
}
