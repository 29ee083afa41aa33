mod app;
mod catalog;
mod error;
mod logging;
mod page;
mod search;
mod settings;
mod state;
mod theme;

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;

#[derive(Debug, Parser)]
#[command(author, version, about = "Browse and search a local video gallery")]
struct Args {
    /// JSON catalog of videos; overrides the saved catalog for this session.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Folder to scan for video files (repeatable).
    #[arg(long = "folder")]
    folders: Vec<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting gallery");

    let options = app::StartupOptions {
        catalog: args.catalog,
        folders: args.folders,
    };
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1024.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "SnapStream Gallery",
        native_options,
        Box::new(move |cc| Box::new(app::GalleryApp::new(cc, options))),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_folders_and_verbosity() {
        let args = Args::parse_from([
            "snapstream_gallery",
            "--catalog",
            "videos.json",
            "--folder",
            "a",
            "--folder",
            "b",
            "-vv",
        ]);
        assert_eq!(args.catalog, Some(PathBuf::from("videos.json")));
        assert_eq!(args.folders, vec![PathBuf::from("a"), PathBuf::from("b")]);
        assert_eq!(args.verbose, 2);
    }
}
