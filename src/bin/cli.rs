//! photopager CLI
//!
//! Command-line browser for a remote photo collection.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use photopager::client::{HttpPhotoSource, PhotoSource, SnapshotSource};
use photopager::snapshot::{Snapshot, SnapshotWriter};
use photopager::{Config, Filter, Gallery, GalleryView, Phase, SortKey};
use tracing_subscriber::{fmt, EnvFilter};

/// photopager CLI
#[derive(Parser, Debug)]
#[command(name = "photopager")]
#[command(about = "Browse a remote photo collection page by page")]
#[command(version)]
struct Args {
    /// API root (the `/photos` segment is appended)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Photos per page
    #[arg(short, long)]
    per_page: Option<usize>,

    /// Request timeout in milliseconds (0 = none)
    #[arg(short, long)]
    timeout_ms: Option<u64>,

    /// Directory holding the offline snapshot
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Read from the snapshot instead of the API
    #[arg(short, long)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the collection and store it as the offline snapshot
    Fetch,

    /// Print one page of the collection
    Page {
        /// One-based page number
        #[arg(default_value = "1")]
        page: usize,

        /// Sort order: id, album or title
        #[arg(short, long, default_value = "id")]
        sort: SortKey,

        /// Only show this album
        #[arg(short, long)]
        album: Option<u64>,

        /// Only show titles containing this text
        #[arg(short = 'q', long)]
        title: Option<String>,
    },

    /// Show the enlarged view of one photo
    Show {
        /// Photo id
        id: u64,
    },

    /// Delete a photo and print the page it was on
    Delete {
        /// Photo id
        id: u64,

        /// Page to print afterwards
        #[arg(short, long, default_value = "1")]
        page: usize,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,photopager=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = config_from(&args);

    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        std::process::exit(2);
    }

    if let Err(e) = run(&args, &config) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

/// Start from `Config::default()`, overriding only what was passed
fn config_from(args: &Args) -> Config {
    let mut builder = Config::builder();
    if let Some(base_url) = &args.base_url {
        builder = builder.base_url(base_url);
    }
    if let Some(per_page) = args.per_page {
        builder = builder.per_page(per_page);
    }
    if let Some(timeout_ms) = args.timeout_ms {
        builder = builder.request_timeout_ms(timeout_ms);
    }
    if let Some(data_dir) = &args.data_dir {
        builder = builder.data_dir(data_dir);
    }
    builder.build()
}

fn run(args: &Args, config: &Config) -> photopager::Result<()> {
    let command = match &args.command {
        Commands::Fetch => return fetch(config),
        command => command,
    };

    let source = open_source(args.offline, config)?;
    tracing::debug!("Using {}", source.describe());

    let gallery = Arc::new(Gallery::from_config(config)?);
    gallery.spawn_load(Arc::clone(&source))?.wait()?;

    let view = gallery.view();
    if let Some(status) = view.status_line() {
        println!("{}", status);
        if matches!(view.phase, Phase::Failed { .. }) {
            std::process::exit(1);
        }
    }

    match command {
        // Handled before loading
        Commands::Fetch => {}
        Commands::Page {
            page,
            sort,
            album,
            title,
        } => {
            let filter = Filter {
                album_id: *album,
                title_contains: title.clone(),
            };
            if !filter.is_empty() {
                gallery.filter(filter)?;
            }
            gallery.sort_by(*sort)?;
            gallery.change_page(*page)?;
            print_page(&gallery.view());
        }
        Commands::Show { id } => {
            let photo = gallery.select(*id)?;
            println!("#{} (album {})", photo.id, photo.album_id);
            println!("  {}", photo.title);
            println!("  image:     {}", photo.url);
            println!("  thumbnail: {}", photo.thumbnail_url);
            gallery.close_detail();
        }
        Commands::Delete { id, page } => {
            if gallery.delete(source.as_ref(), *id)? {
                println!("Deleted photo {}", id);
            } else {
                println!("Photo {} was not deleted", id);
            }
            gallery.change_page(*page)?;
            print_page(&gallery.view());
        }
    }

    Ok(())
}

fn open_source(offline: bool, config: &Config) -> photopager::Result<Arc<dyn PhotoSource>> {
    if offline {
        Ok(Arc::new(SnapshotSource::in_dir(&config.data_dir)))
    } else {
        Ok(Arc::new(HttpPhotoSource::from_config(config)?))
    }
}

fn fetch(config: &Config) -> photopager::Result<()> {
    let source = HttpPhotoSource::from_config(config)?;
    let photos = source.fetch_photos()?;
    let count = photos.len();
    let path = Snapshot::path_in(&config.data_dir);
    let written = SnapshotWriter::write(&path, &Snapshot::now(photos))?;
    println!(
        "Stored {} photos ({} bytes) in {}",
        count,
        written,
        path.display()
    );
    Ok(())
}

fn print_page(view: &GalleryView) {
    let state = &view.pagination;
    for photo in state.visible() {
        println!("{:>6}  album {:>4}  {}", photo.id, photo.album_id, photo.title);
    }
    println!(
        "-- page {}/{} ({} of {} photos) --",
        state.current_page(),
        state.total_pages(),
        state.len(),
        view.collection_len
    );
}
