//! A loaded genome and its motif search session.
//!
//! A [`Genome`] owns one sequence (the first FASTA record of its source), the
//! name derived from the source file, and a [`MatchStore`] holding the latest
//! result for every motif searched so far. Sessions share nothing: two
//! genomes never see each other's results.
//!
//! ### Example
//! ```rust,no_run
//! use gma::{Genome, GenomeSource, PlotOptions, Visualization};
//! let mut g = Genome::load(GenomeSource::path("chr1.fa")).unwrap();
//! let hits = g.find_motif("ATG", 1).unwrap();
//! println!("{} hits", hits.len());
//! if let Visualization::Written(p) = g.visualize_motif("ATG", None, &PlotOptions::default()).unwrap() {
//!     println!("plot written to {}", p.display());
//! }
//! ```
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use bio::io::fasta;
use log::{debug, info};
use crate::common::{GmaError, Visualization};
use crate::matcher::{find_hits, MotifHit};
use crate::plot::{PositionPlot, Renderer, SvgRenderer};
use crate::store::MatchStore;

/// Where a genome comes from. Resolved once, at load time.
#[derive(Debug)]
pub enum GenomeSource {
    /// A FASTA file on disk.
    Path(PathBuf),
    /// FASTA bytes already in memory (e.g. an upload) and the file name they came with.
    Stream { file_name: String, data: Vec<u8> },
}

impl GenomeSource {
    pub fn path(p: impl Into<PathBuf>) -> Self {
        GenomeSource::Path(p.into())
    }

    /// Read all of `reader` into memory.
    pub fn stream(file_name: impl Into<String>, mut reader: impl Read) -> Result<Self, GmaError> {
        let file_name = file_name.into();
        let mut data = Vec::new();
        reader
            .read_to_end(&mut data)
            .map_err(|e| GmaError::Load { source_name: file_name.clone(), reason: e.to_string() })?;
        Ok(GenomeSource::Stream { file_name, data })
    }

    /// Human-readable source identifier used in messages.
    pub fn display_name(&self) -> String {
        match self {
            GenomeSource::Path(p) => p.display().to_string(),
            GenomeSource::Stream { file_name, .. } => file_name.clone(),
        }
    }

    /// Genome name: the file name up to its first `.`.
    pub fn genome_name(&self) -> String {
        let file_name = match self {
            GenomeSource::Path(p) => p.file_name().map(|f| f.to_string_lossy().into_owned()).unwrap_or_default(),
            GenomeSource::Stream { file_name, .. } => {
                Path::new(file_name).file_name().map(|f| f.to_string_lossy().into_owned()).unwrap_or_default()
            }
        };
        file_name.split('.').next().unwrap_or_default().to_string()
    }
}

/// Options for [`Genome::visualize_motif`].
#[derive(Clone, Debug)]
pub struct PlotOptions {
    /// Directory for plots written without an explicit path. Created on demand.
    pub output_dir: PathBuf,
    pub renderer: SvgRenderer,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self { output_dir: PathBuf::from("visualizations"), renderer: SvgRenderer::default() }
    }
}

/// Parse the first FASTA record from `reader`.
fn read_first_record<R: Read>(reader: R, source_name: &str) -> Result<Vec<u8>, GmaError> {
    let load_err = |reason: String| GmaError::Load { source_name: source_name.to_string(), reason };
    let record = fasta::Reader::new(reader)
        .records()
        .next()
        .ok_or_else(|| load_err("no FASTA records".to_string()))?
        .map_err(|e| load_err(e.to_string()))?;
    Ok(record.seq().to_vec())
}

/// One genome sequence plus its search results.
#[derive(Debug)]
pub struct Genome {
    name: String,
    sequence: Vec<u8>,
    store: MatchStore,
}

impl Genome {
    /// Load the first record of `source`.
    ///
    /// A missing or unreadable file, an empty input, or text that is not
    /// FASTA is a [`GmaError::Load`]. Later records are ignored.
    pub fn load(source: GenomeSource) -> Result<Self, GmaError> {
        let name = source.genome_name();
        let source_name = source.display_name();
        let sequence = match source {
            GenomeSource::Path(p) => {
                let file = File::open(&p).map_err(|e| GmaError::Load { source_name: source_name.clone(), reason: e.to_string() })?;
                read_first_record(file, &source_name)?
            }
            GenomeSource::Stream { data, .. } => read_first_record(data.as_slice(), &source_name)?,
        };
        info!("Loaded genome {}. Sequence length: {}", name, sequence.len());
        Ok(Self::from_sequence(name, sequence))
    }

    /// Wrap an in-memory sequence.
    pub fn from_sequence(name: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self { name: name.into(), sequence: sequence.into(), store: MatchStore::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn store(&self) -> &MatchStore {
        &self.store
    }

    /// Search for `motif` and record the hits, replacing any earlier result.
    pub fn find_hits(&mut self, motif: &str, max_mismatches: usize) -> Result<Vec<MotifHit>, GmaError> {
        let hits = find_hits(&self.sequence, motif.as_bytes(), max_mismatches)?;
        debug!("motif {motif:?} with <= {max_mismatches} mismatches: {} hits in {}", hits.len(), self.name);
        self.store.record(motif, hits.iter().map(|h| h.position).collect());
        Ok(hits)
    }

    /// Search for `motif` and record the positions, replacing any earlier result.
    pub fn find_motif(&mut self, motif: &str, max_mismatches: usize) -> Result<Vec<usize>, GmaError> {
        self.find_hits(motif, max_mismatches)?;
        Ok(self.store.positions_of(motif).to_vec())
    }

    /// Number of positions stored for `motif` (0 if never searched).
    pub fn count_motif(&self, motif: &str) -> usize {
        self.store.count(motif)
    }

    pub fn positions_of(&self, motif: &str) -> &[usize] {
        self.store.positions_of(motif)
    }

    /// Forget all search results.
    pub fn reset(&mut self) {
        self.store.clear();
    }

    /// Default plot path: `{output_dir}/{name}_{motif}_plot.{ext}`.
    ///
    /// Path separators in the motif are replaced by `_` so the file always
    /// lands directly in `output_dir`.
    pub fn default_plot_path(&self, motif: &str, opts: &PlotOptions) -> PathBuf {
        self.plot_path_in(&opts.output_dir, motif, opts.renderer.extension())
    }

    fn plot_path_in(&self, dir: &Path, motif: &str, extension: &str) -> PathBuf {
        let motif: String = motif.chars().map(|c| if std::path::is_separator(c) { '_' } else { c }).collect();
        dir.join(format!("{}_{}_plot.{}", self.name, motif, extension))
    }

    /// Plot the stored positions of `motif` using the options' SVG renderer.
    ///
    /// See [`Genome::visualize_with`].
    pub fn visualize_motif(&self, motif: &str, output_path: Option<&Path>, opts: &PlotOptions) -> Result<Visualization, GmaError> {
        self.visualize_with(motif, output_path, opts, &opts.renderer)
    }

    /// Plot the stored positions of `motif` with `renderer`.
    ///
    /// Returns [`Visualization::NoOccurrences`] without touching the
    /// filesystem when nothing is stored. Without `output_path` the plot goes
    /// to [`Genome::default_plot_path`], creating `opts.output_dir` if needed.
    pub fn visualize_with(
        &self,
        motif: &str,
        output_path: Option<&Path>,
        opts: &PlotOptions,
        renderer: &dyn Renderer,
    ) -> Result<Visualization, GmaError> {
        let positions = self.store.positions_of(motif);
        if positions.is_empty() {
            info!("No occurrences of motif '{motif}' found.");
            return Ok(Visualization::NoOccurrences);
        }
        let path = match output_path {
            Some(p) => p.to_path_buf(),
            None => {
                std::fs::create_dir_all(&opts.output_dir).map_err(|e| GmaError::render(&opts.output_dir, e))?;
                self.plot_path_in(&opts.output_dir, motif, renderer.extension())
            }
        };
        let plot = PositionPlot::for_positions(format!("Motif '{}' positions in genome {}", motif, self.name), positions);
        renderer.render(&plot, &path)?;
        info!("wrote {} positions of '{motif}' to {}", positions.len(), path.display());
        Ok(Visualization::Written(path))
    }
}
