use std::io::{Write, stdout};

use crate::{
    core::{
        color::AnsiCode,
        error::EdaError,
        style::{Grid, Style},
    },
    data::{Catalog, load_catalog},
    render::TerminalViewer,
    report,
};

use super::parse::Options;

/// Style, load, then every chart in turn.
pub fn analyze(o: &Options) -> Result<(), EdaError> {
    let mut style = Style::configure().with_accent(AnsiCode::from_name(&o.color)?);
    if o.plain {
        style = style.with_grid(Grid::Plain);
    }
    let catalog = load_catalog(&o.data)?;
    let mut viewer = TerminalViewer::open(style)?;
    report::run(&catalog, o.top_n, &mut viewer)
}

/// Dataset overview on stdout.
pub fn info(o: &Options) -> Result<(), EdaError> {
    let catalog = load_catalog(&o.data)?;
    let mut out = stdout().lock();
    write_info(&catalog, &mut out)?;
    out.flush()?;
    Ok(())
}

/// `(rows, columns)`, then one `name  dtype` line per column in file order.
fn write_info<W: Write>(catalog: &Catalog, out: &mut W) -> Result<(), EdaError> {
    let (rows, columns) = catalog.shape();
    writeln!(out, "({rows}, {columns})")?;
    let schema = catalog.schema();
    let width = schema.iter().map(|(n, _)| n.len()).max().unwrap_or(0);
    for (name, dtype) in schema {
        writeln!(out, "{name:<width$}  {dtype}")?;
    }
    Ok(())
}
