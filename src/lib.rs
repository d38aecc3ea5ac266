//! # gma
//!
//! Genome motif analyzer: approximate motif search over a single FASTA
//! sequence, with position plots.
//!
//! A motif matches at offset `p` when the window `sequence[p..p + motif.len()]`
//! differs from it in at most `K` positions (Hamming distance, substitutions
//! only). Every such offset is reported in ascending order.
//!
//! ## Layout
//! - [`distance`]: Hamming distance, full and early-exit.
//! - [`matcher`]: the sliding-window search.
//! - [`store`]: per-session motif -> positions map.
//! - [`genome`]: FASTA loading and the search/plot session ([`Genome`]).
//! - [`plot`]: renderer-neutral plot description and the SVG renderer.
//! - [`report`]: TSV output.
//!
//! ### Example
//! ```
//! use gma::{Genome, Visualization, PlotOptions};
//! let mut g = Genome::from_sequence("demo", "ATGCATGCATGC");
//! assert_eq!(g.find_motif("ATG", 0).unwrap(), vec![0, 4, 8]);
//! assert_eq!(g.count_motif("ATG"), 3);
//! assert_eq!(g.count_motif("TTT"), 0);
//! g.find_motif("TTT", 0).unwrap();
//! assert_eq!(g.visualize_motif("TTT", None, &PlotOptions::default()).unwrap(), Visualization::NoOccurrences);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod common;
pub mod distance;
pub mod matcher;
pub mod store;
pub mod genome;
pub mod plot;
pub mod report;

pub use common::{mismatch_threshold, GmaError, Visualization};
pub use distance::{hamming_distance, hamming_within};
pub use matcher::{find_hits, find_motif, MotifHit};
pub use store::MatchStore;
pub use genome::{Genome, GenomeSource, PlotOptions};
pub use plot::{PositionPlot, Renderer, SvgRenderer};
pub use report::{positions_line, write_counts_tsv, write_hits_tsv};
