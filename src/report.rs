use crate::MstResult;
use std::io::{self, Write};

/// Writes one result block: the cost line, the edge count line, then one `u v` line per edge.
///
/// # Arguments
///
/// * `writer` - Destination of the block, e.g. the output file.
/// * `result` - The result to report. Its edges are written in the order they are stored.
pub fn write_result<W: Write>(writer: &mut W, result: &MstResult) -> io::Result<()> {
    writeln!(writer, "{}", result.total_cost)?;
    writeln!(writer, "{}", result.edge_count())?;
    for edge in &result.edges {
        writeln!(writer, "{} {}", edge.u, edge.v)?;
    }
    Ok(())
}

/// Renders a result block into a string.
pub fn format_result(result: &MstResult) -> String {
    let mut buffer = Vec::new();
    write_result(&mut buffer, result).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buffer).into_owned()
}
