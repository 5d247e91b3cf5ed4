use crate::criteria_args::CriteriaArgs;

use folio_core::GalleryType;
use folio_filter::{SortBy, SortOrder};

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the records one gallery view would show
    Filter {
        /// JSON file holding an array of content records
        input: PathBuf,

        /// Gallery view: all, develop, video, design, video&design, other
        #[arg(long)]
        gallery: GalleryType,

        #[command(flatten)]
        criteria: CriteriaArgs,

        /// createdAt, updatedAt, title, priority or effectiveDate (default from config)
        #[arg(long)]
        sort_by: Option<SortBy>,

        /// asc or desc (default from config)
        #[arg(long)]
        order: Option<SortOrder>,
    },

    /// Run several gallery views over one export
    Batch {
        /// JSON file holding an array of content records
        input: PathBuf,

        /// Gallery view (repeatable)
        #[arg(long = "gallery", required = true)]
        galleries: Vec<GalleryType>,

        #[command(flatten)]
        criteria: CriteriaArgs,
    },

    /// Count records by category, year and status
    Stats {
        /// JSON file holding an array of content records
        input: PathBuf,

        /// Restrict the counts to one gallery view
        #[arg(long)]
        gallery: Option<GalleryType>,

        #[command(flatten)]
        criteria: CriteriaArgs,
    },
}
