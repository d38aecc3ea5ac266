//! CLI for `gma find` (one motif, optional plot and per-hit report).
use std::fs::File;
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Args;
use gma::*;

/// Options for the `find` subcommand.
#[derive(Debug, Args)]
pub struct FindCmd {
    /// Genome FASTA file (first record used).
    #[arg(value_name="FILE")]
    pub file: PathBuf,
    /// Motif to search for.
    #[arg(short='m', long)]
    pub motif: String,
    /// Allowed mismatches per window.
    #[arg(short='n', long, default_value_t=0, allow_negative_numbers=true)]
    pub mismatches: i64,
    /// Plot the motif positions.
    #[arg(short='v', long, default_value_t=false)]
    pub visualize: bool,
    /// Plot path. Defaults to `<outdir>/<genome>_<motif>_plot.svg`.
    #[arg(short='o', long, value_name="FILE")]
    pub output: Option<PathBuf>,
    /// Directory for plots written without --output.
    #[arg(long, value_name="DIR", default_value="visualizations")]
    pub outdir: PathBuf,
    /// Optional TSV with one row per hit (position, window, mismatches).
    #[arg(long, value_name="FILE")]
    pub report: Option<PathBuf>,
}

pub fn run(cmd: FindCmd) -> Result<()> {
    let k = mismatch_threshold(cmd.mismatches)?;
    let mut genome = Genome::load(GenomeSource::path(&cmd.file))?;

    let hits = genome.find_hits(&cmd.motif, k)?;
    println!("{}", positions_line(&cmd.motif, k, genome.positions_of(&cmd.motif)));

    if let Some(path) = &cmd.report {
        let f = File::create(path).with_context(|| format!("create report {}", path.display()))?;
        write_hits_tsv(f, genome.sequence(), &cmd.motif, &hits)
            .with_context(|| format!("write report {}", path.display()))?;
    }

    if cmd.visualize {
        let opts = PlotOptions{ output_dir: cmd.outdir.clone(), ..Default::default() };
        match genome.visualize_motif(&cmd.motif, cmd.output.as_deref(), &opts)? {
            Visualization::Written(p) => println!("Plot saved to {}", p.display()),
            Visualization::NoOccurrences => println!("No occurrences of motif '{}' found.", cmd.motif),
        }
    }
    Ok(())
}
