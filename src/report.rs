//! Tab-separated reports of search results.
//!
//! - [`write_hits_tsv`]: one row per hit (`motif`, `position`, `window`, `mismatches`).
//! - [`write_counts_tsv`]: one row per motif (`motif`, `mismatches`, `count`).
//!
//! Both write a header row and use the `csv` crate with a tab delimiter.
use std::io::Write;
use crate::matcher::MotifHit;

/// Summary line printed by the CLI for one search.
pub fn positions_line(motif: &str, max_mismatches: usize, positions: &[usize]) -> String {
    let list = positions.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(", ");
    format!("Motif '{motif}' with {max_mismatches} mismatches found at positions: [{list}]")
}

fn tsv_writer<W: Write>(w: W) -> csv::Writer<W> {
    csv::WriterBuilder::new().delimiter(b'\t').from_writer(w)
}

/// Write one row per hit. `sequence` supplies the matched window text.
pub fn write_hits_tsv<W: Write>(w: W, sequence: &[u8], motif: &str, hits: &[MotifHit]) -> Result<(), csv::Error> {
    let mut out = tsv_writer(w);
    out.write_record(["motif", "position", "window", "mismatches"])?;
    let m = motif.len();
    for h in hits {
        let window = String::from_utf8_lossy(&sequence[h.position..h.position + m]);
        let (pos, mm) = (h.position.to_string(), h.mismatches.to_string());
        out.write_record([motif, pos.as_str(), &*window, mm.as_str()])?;
    }
    out.flush()?;
    Ok(())
}

/// Write one row per `(motif, count)` pair, all searched with `max_mismatches`.
pub fn write_counts_tsv<W: Write>(w: W, max_mismatches: usize, counts: &[(String, usize)]) -> Result<(), csv::Error> {
    let mut out = tsv_writer(w);
    out.write_record(["motif", "mismatches", "count"])?;
    for (motif, count) in counts {
        let (mm, n) = (max_mismatches.to_string(), count.to_string());
        out.write_record([motif.as_str(), mm.as_str(), n.as_str()])?;
    }
    out.flush()?;
    Ok(())
}
