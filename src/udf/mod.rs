//! Line-oriented request processing for the ClickHouse executable user defined functions.
//!
//! Every input line is one `JSONEachRow` request carrying a list of pairs.
//! Each line is answered by one output line computed on a fresh structure,
//! so requests never share state.

mod error;
mod request;

use std::io::{BufRead, Write};

use clap::ValueEnum;
use tracing::{debug, info, instrument, warn};

use crate::{BipartiteValueUnionFind, ValueUnionFind};

pub use error::UdfError;
pub use request::{
    AssociationEntry, EdgesRequest, ErrorRecord, GroupEntry, RelationsRequest, Response,
};

/// ClickHouse configuration declaring both functions.
pub const UDF_MANIFEST: &str = include_str!("clickhouse_udfs.xml");

/// The function served by a request stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Group the values of `edges` and report the root value of every value.
    #[value(name = "unionfind")]
    UnionFind,
    /// Group the `V` values of `relations` and report the `V` root of every `U` value.
    #[value(name = "bipartite")]
    Bipartite,
}

impl Mode {
    /// The name of the function in the ClickHouse configuration.
    pub fn function_name(self) -> &'static str {
        match self {
            Self::UnionFind => "unionFind",
            Self::Bipartite => "bipartiteUnionFind",
        }
    }
}

/// Counts reported after a request stream has been processed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines that were answered with a result.
    pub processed: usize,
    /// Lines that were answered with an error record.
    pub rejected: usize,
}

/// Groups every value of `edges` and pairs it with the root value of its group.
///
/// Values are reported in the order they first appear.
pub fn group_values(edges: &[(String, String)]) -> Vec<GroupEntry> {
    let mut union_find: ValueUnionFind<String> = ValueUnionFind::with_capacity(edges.len() * 2);

    for (first, second) in edges {
        union_find.union(first.as_str(), second.as_str());
    }

    union_find
        .representatives()
        .map(|(value, root)| GroupEntry {
            value: value.clone(),
            root: root.clone(),
        })
        .collect()
}

/// Clusters the `V` values of `relations` and pairs every `U` value with the root
/// value of its `V` cluster.
///
/// `U` values are reported in the order they first appear.
pub fn associate_values(relations: &[(String, String)]) -> Vec<AssociationEntry> {
    let mut bipartite: BipartiteValueUnionFind<String, String> =
        BipartiteValueUnionFind::with_capacity(relations.len() * 2);

    for (u, v) in relations {
        bipartite.union(u.as_str(), v.as_str());
    }

    bipartite
        .associations()
        .map(|(u, v_root)| AssociationEntry {
            u: u.clone(),
            v_root: v_root.clone(),
        })
        .collect()
}

/// Answers a single request line.
///
/// # Errors
/// Returns [`UdfError::Parse`] if the line is not a request of the shape `mode` expects
/// and [`UdfError::Encode`] if the response cannot be serialised.
pub fn process_line(mode: Mode, line_number: usize, line: &[u8]) -> Result<String, UdfError> {
    let parse_error = |source| UdfError::Parse {
        line: line_number,
        source,
    };

    let encoded = match mode {
        Mode::UnionFind => {
            let request: EdgesRequest = serde_json::from_slice(line).map_err(parse_error)?;
            debug!(line = line_number, pairs = request.edges.len(), "processing edges");
            serde_json::to_string(&Response {
                result: group_values(&request.edges),
            })
        }
        Mode::Bipartite => {
            let request: RelationsRequest = serde_json::from_slice(line).map_err(parse_error)?;
            debug!(line = line_number, pairs = request.relations.len(), "processing relations");
            serde_json::to_string(&Response {
                result: associate_values(&request.relations),
            })
        }
    };

    encoded.map_err(UdfError::Encode)
}

/// Answers every request line of `reader` on `writer`.
///
/// Blank lines are skipped. A line that cannot be parsed is logged and answered with an
/// [`ErrorRecord`], after which processing continues with the next line.
///
/// # Errors
/// Returns [`UdfError::Io`] if reading or writing fails and [`UdfError::Encode`] if a
/// response cannot be serialised.
#[instrument(level = "debug", skip(reader, writer))]
pub fn run<R, W>(mode: Mode, reader: R, mut writer: W) -> Result<RunSummary, UdfError> where
    R: BufRead,
    W: Write,
{
    let mut summary = RunSummary::default();

    for (index, line) in reader.split(b'\n').enumerate() {
        let mut line = line?;
        let line_number = index + 1;

        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        match process_line(mode, line_number, &line) {
            Ok(response) => {
                writeln!(writer, "{response}")?;
                summary.processed += 1;
            }
            Err(err) if err.is_line_local() => {
                warn!(function = mode.function_name(), error = %err, "rejected request line");
                let record = ErrorRecord {
                    error: err.to_string(),
                };
                let encoded = serde_json::to_string(&record).map_err(UdfError::Encode)?;
                writeln!(writer, "{encoded}")?;
                summary.rejected += 1;
            }
            Err(err) => return Err(err),
        }
    }

    writer.flush()?;
    info!(
        function = mode.function_name(),
        processed = summary.processed,
        rejected = summary.rejected,
        "finished request stream"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests;
