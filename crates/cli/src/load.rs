//! Rotation-system input: CSV (`vertex,neighbor` rows) or JSON (`{"rotations": [[..], ..]}`).
//!
//! CSV rows for one vertex appear in counter-clockwise order; rows of
//! different vertices may interleave.

use std::path::Path;

use anyhow::{bail, Context, Result};
use planar::VertexId;
use polars::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RotationFile {
    pub rotations: Vec<Vec<VertexId>>,
}

/// Per-vertex neighbour lists, dispatched on the file extension.
pub fn read_rotations(path: &Path) -> Result<Vec<Vec<VertexId>>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_csv(path),
        Some("json") => read_json(path),
        other => bail!(
            "unsupported input {} (extension {:?}; expected .csv or .json)",
            path.display(),
            other
        ),
    }
}

fn read_json(path: &Path) -> Result<Vec<Vec<VertexId>>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let file: RotationFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing rotations from {}", path.display()))?;
    Ok(file.rotations)
}

fn read_csv(path: &Path) -> Result<Vec<Vec<VertexId>>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("vertex").cast(DataType::Int64),
            col("neighbor").cast(DataType::Int64),
        ])
        .collect()
        .with_context(|| format!("reading vertex/neighbor columns of {}", path.display()))?;
    tracing::debug!(rows = df.height(), "rotation csv loaded");
    let vertex = df.column("vertex")?.i64()?;
    let neighbor = df.column("neighbor")?.i64()?;
    rows_to_rotations(vertex.into_iter().zip(neighbor.into_iter()))
}

/// Group `(vertex, neighbor)` rows into neighbour lists, keeping row order.
pub fn rows_to_rotations<I>(rows: I) -> Result<Vec<Vec<VertexId>>>
where
    I: IntoIterator<Item = (Option<i64>, Option<i64>)>,
{
    let mut rotations: Vec<Vec<VertexId>> = Vec::new();
    for (row, pair) in rows.into_iter().enumerate() {
        let (Some(v), Some(w)) = pair else {
            bail!("row {row}: missing vertex or neighbor");
        };
        let v = VertexId::try_from(v).with_context(|| format!("row {row}: vertex {v}"))?;
        let w = VertexId::try_from(w).with_context(|| format!("row {row}: neighbor {w}"))?;
        let needed = v.max(w) as usize + 1;
        if rotations.len() < needed {
            rotations.resize_with(needed, Vec::new);
        }
        rotations[v as usize].push(w);
    }
    Ok(rotations)
}
