use std::io::{BufRead, Write};

use anyhow::{Result, bail};

use crate::cluster::{ClusterCatalog, ClusterDescriptor};

// ---------------------------------------------------------------------------
// Menu input validation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Invalid input. Please enter a valid number.")]
    NotANumber(String),
    #[error("Invalid choice. Please enter a number between 1 and {count}.")]
    OutOfRange { choice: i64, count: usize },
}

/// Turn a 1-based menu choice into a 0-based index into a list of `count`.
pub fn parse_selection(input: &str, count: usize) -> Result<usize, SelectionError> {
    let choice: i64 = input
        .trim()
        .parse()
        .map_err(|_| SelectionError::NotANumber(input.trim().to_string()))?;
    if choice < 1 || choice as u64 > count as u64 {
        return Err(SelectionError::OutOfRange { choice, count });
    }
    Ok(choice as usize - 1)
}

// ---------------------------------------------------------------------------
// Console driver
// ---------------------------------------------------------------------------

/// Print the numbered menu and read choices until one is valid.
pub fn prompt_cluster<'a, R: BufRead, W: Write>(
    catalog: &'a ClusterCatalog,
    mut input: R,
    mut out: W,
) -> Result<&'a ClusterDescriptor> {
    writeln!(out, "Which file would you like to open?")?;
    for (i, cluster) in catalog.clusters().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, cluster.file_name)?;
    }

    let mut line = String::new();
    loop {
        write!(out, "\nEnter the number corresponding to your choice: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before a cluster was chosen");
        }

        match parse_selection(&line, catalog.len()) {
            Ok(index) => {
                let cluster = &catalog.clusters()[index];
                writeln!(out, "You selected to view data for: {}\n", cluster.name)?;
                return Ok(cluster);
            }
            Err(e) => {
                log::debug!("Rejected menu input {:?}: {e:?}", line.trim());
                writeln!(out, "{e}")?;
            }
        }
    }
}
