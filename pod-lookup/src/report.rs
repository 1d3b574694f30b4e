//! Printing lookup outcomes.
use std::io::{self, Write};

use kube::Client;

use crate::{LookupPath, LookupTarget};

/// Write one line for a lookup: the name it found, or the error it hit.
///
/// Missing objects and transport or auth failures are printed the same way.
pub fn report<W: Write>(out: &mut W, outcome: &kube::Result<String>) -> io::Result<()> {
    match outcome {
        Ok(name) => writeln!(out, "{name}"),
        Err(err) => writeln!(out, "{err}"),
    }
}

/// Run every [`LookupPath`] against `target` in order, one line each.
///
/// A failed lookup is written out and the next path still runs. Only a
/// failure to write to `out` ends the run early.
pub async fn run<W: Write>(client: Client, target: &LookupTarget, out: &mut W) -> io::Result<()> {
    for path in LookupPath::ALL {
        tracing::info!("fetching {target} via {path} lookup");
        let outcome = path.fetch_name(client.clone(), target).await;
        if let Err(err) = &outcome {
            tracing::debug!("{path} lookup failed: {err:?}");
        }
        report(out, &outcome)?;
        out.flush()?;
    }
    Ok(())
}
