//! CLI for `gma count` (several motifs, one genome, TSV counts).
use std::fs::File;
use std::io;
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Args;
use gma::*;

#[derive(Debug, Args)]
pub struct CountCmd {
    /// Genome FASTA file (first record used).
    #[arg(value_name="FILE")]
    pub file: PathBuf,
    /// Motifs to count (repeat or comma-separate).
    #[arg(short='m', long="motif", required=true, value_delimiter=',')]
    pub motifs: Vec<String>,
    /// Allowed mismatches per window, shared by all motifs.
    #[arg(short='n', long, default_value_t=0, allow_negative_numbers=true)]
    pub mismatches: i64,
    /// Output TSV. Writes to stdout when omitted.
    #[arg(long, value_name="FILE")]
    pub outfile: Option<PathBuf>,
}

pub fn run(cmd: CountCmd) -> Result<()> {
    let k = mismatch_threshold(cmd.mismatches)?;
    let mut genome = Genome::load(GenomeSource::path(&cmd.file))?;

    let mut counts = Vec::with_capacity(cmd.motifs.len());
    for motif in &cmd.motifs {
        genome.find_motif(motif, k)?;
        counts.push((motif.clone(), genome.count_motif(motif)));
    }

    match &cmd.outfile {
        Some(path) => {
            let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
            write_counts_tsv(f, k, &counts).with_context(|| format!("write {}", path.display()))?;
        }
        None => write_counts_tsv(io::stdout().lock(), k, &counts)?,
    }
    Ok(())
}
