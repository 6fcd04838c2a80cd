//! Connectivity-matrix importer.
//!
//! Turns a labeled square table into a [`Floorplan`]: the diagonal gives each
//! block's area, the strictly upper triangle gives connection weights.
//! Sub-modules:
//!
//! - [`source`] – where table text comes from (filesystem vs. memory)
//! - [`table`] – delimited-text parsing into a [`LabeledMatrix`]

pub mod source;
pub mod table;

pub use source::{FsSource, MemorySource, TableSource};
pub use table::{Delimiter, LabeledMatrix, parse_table};

use camino::Utf8Path;
use tracing::info;

use crate::error::{FloorplanError, Result};
use crate::model::{Block, Connection, Floorplan};

/// Blocks are laid out on a grid this many columns wide at load time.
pub const GRID_COLUMNS: usize = 3;
/// Distance between grid slots.
pub const GRID_SPACING: f64 = 200.0;
/// Position of the first grid slot on both axes.
pub const GRID_ORIGIN: f64 = 100.0;

/// Initial position of block `index`.
pub fn grid_position(index: usize) -> (f64, f64) {
    let col = (index % GRID_COLUMNS) as f64;
    let row = (index / GRID_COLUMNS) as f64;
    (
        GRID_ORIGIN + col * GRID_SPACING,
        GRID_ORIGIN + row * GRID_SPACING,
    )
}

/// Build blocks and connections from a labeled matrix.
pub fn import_matrix(matrix: &LabeledMatrix) -> Result<Floorplan> {
    if matrix.row_labels.len() != matrix.col_labels.len() {
        return Err(FloorplanError::Validation(
            "Number of row names must match number of column names".to_string(),
        ));
    }
    if !matrix.is_square() || matrix.rows() != matrix.cols() {
        return Err(FloorplanError::Validation("Matrix must be square".to_string()));
    }

    let n = matrix.rows();
    let names = &matrix.row_labels;
    let m = &matrix.values;

    let mut blocks = Vec::with_capacity(n);
    for i in 0..n {
        let area = m[i][i];
        if area < 0.0 {
            return Err(FloorplanError::Validation(format!(
                "Block {} has negative area {}",
                names[i], area
            )));
        }
        let (x, y) = grid_position(i);
        blocks.push(Block::square(i, names[i].clone(), area, x, y));
    }

    let mut connections = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if m[i][j] > 0.0 {
                connections.push(Connection {
                    from: i,
                    to: j,
                    from_name: names[i].clone(),
                    to_name: names[j].clone(),
                    weight: m[i][j],
                });
            }
        }
    }

    Ok(Floorplan::new(blocks, connections))
}

/// Parse and import table text in one go.
pub fn import_str(text: &str) -> Result<Floorplan> {
    import_matrix(&parse_table(text)?)
}

/// Read, parse and import the table at `path` from `source`.
pub fn import_from<S: TableSource>(source: &mut S, path: &Utf8Path) -> Result<Floorplan> {
    let text = source.read_to_string(path)?;
    let plan = import_str(&text)?;
    info!(
        "imported {}: {} blocks, {} connections",
        path,
        plan.blocks.len(),
        plan.connections.len()
    );
    Ok(plan)
}

/// Read a table from the filesystem.
pub fn import_file(path: &Utf8Path) -> Result<Floorplan> {
    import_from(&mut FsSource, path)
}

impl Floorplan {
    /// Load `path` into this floorplan. On any error the current contents
    /// are left exactly as they were.
    pub fn load_from<S: TableSource>(&mut self, source: &mut S, path: &Utf8Path) -> Result<()> {
        let plan = import_from(source, path)?;
        self.replace_with(plan);
        Ok(())
    }

    pub fn load_file(&mut self, path: &Utf8Path) -> Result<()> {
        self.load_from(&mut FsSource, path)
    }
}
