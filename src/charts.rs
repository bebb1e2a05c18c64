use serde::{Deserialize, Serialize};

use crate::analytics::{DEFAULT_SLICES, Field};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
}

/// Immutable description of one chart instance. Sessions hold a list of
/// these; every control action is a pure transition producing a new list,
/// never an in-place field mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub dataset: Field,
    pub slices: usize,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            kind: ChartKind::Bar,
            dataset: Field::Developers,
            slices: DEFAULT_SLICES,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ChartOp {
    SetKind { kind: ChartKind },
    SetDataset { dataset: Field },
    SetSlices { slices: usize },
}

/// Applies `op` to the spec at `index`; an out-of-range index leaves the
/// list unchanged.
pub fn apply(charts: &[ChartSpec], index: usize, op: ChartOp) -> Vec<ChartSpec> {
    charts
        .iter()
        .enumerate()
        .map(|(at, spec)| if at == index { step(*spec, op) } else { *spec })
        .collect()
}

fn step(spec: ChartSpec, op: ChartOp) -> ChartSpec {
    match op {
        ChartOp::SetKind { kind } => ChartSpec { kind, ..spec },
        ChartOp::SetDataset { dataset } => ChartSpec { dataset, ..spec },
        ChartOp::SetSlices { slices } => ChartSpec {
            slices: slices.max(1),
            ..spec
        },
    }
}

pub fn push_default(charts: &[ChartSpec]) -> Vec<ChartSpec> {
    let mut next = charts.to_vec();
    next.push(ChartSpec::default());
    next
}

pub fn remove(charts: &[ChartSpec], index: usize) -> Vec<ChartSpec> {
    charts
        .iter()
        .enumerate()
        .filter(|(at, _)| *at != index)
        .map(|(_, spec)| *spec)
        .collect()
}
