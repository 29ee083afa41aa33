use std::path::PathBuf;

use eframe::CreationContext;
use eframe::egui::{self, RichText};

use crate::catalog::{self, VideoRecord};
use crate::page::{Page, VideoCard};
use crate::search::{self, FilterSummary};
use crate::settings::{self, AppSettings};
use crate::state::AppState;
use crate::theme;

/// Fixed card width in the grid (logical pixels).
const CARD_WIDTH: f32 = 220.0;

/// Sources passed on the command line for this session.
#[derive(Debug, Default)]
pub struct StartupOptions {
    pub catalog: Option<PathBuf>,
    pub folders: Vec<PathBuf>,
}

pub struct GalleryApp {
    page: Page,
    state: AppState,
    settings: AppSettings,
    selected: Option<String>,
    status: String,
}

impl GalleryApp {
    pub fn new(cc: &CreationContext<'_>, options: StartupOptions) -> Self {
        let settings = settings::load();
        let mut state = AppState::from_settings(&settings);
        if options.catalog.is_some() {
            state.catalog = options.catalog;
        }
        for folder in options.folders {
            state.add_folder(folder);
        }

        let page = Page::default();
        theme::apply_theme(&cc.egui_ctx, &page.body);

        let mut app = Self {
            page,
            state,
            settings,
            selected: None,
            status: String::new(),
        };
        app.reload();
        app
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new("SnapStream").strong());
                ui.separator();

                let search = ui.add(
                    egui::TextEdit::singleline(&mut self.page.search_input.value)
                        .hint_text("Search videos")
                        .desired_width(260.0),
                );
                if search.changed() {
                    let summary = search::search_videos(&mut self.page);
                    self.status = summary_text(summary);
                    self.prune_selection();
                }

                let label = if theme::is_light(&self.page.body) {
                    "Dark mode"
                } else {
                    "Light mode"
                };
                if ui.button(label).clicked() {
                    theme::toggle_theme(&mut self.page);
                    theme::apply_theme(ctx, &self.page.body);
                }
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", self.status));
        });

        let selected = self
            .selected
            .as_deref()
            .and_then(|id| self.page.visible_cards().find(|card| card.id == id));
        if let Some(card) = selected {
            egui::TopBottomPanel::bottom("details").show(ctx, |ui| details(ui, card));
        }

        egui::SidePanel::left("sources")
            .resizable(true)
            .show(ctx, |ui| self.sources_ui(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut clicked = None;
            egui::ScrollArea::vertical().id_source("cards").show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for card in self.page.visible_cards() {
                        let selected = self.selected.as_deref() == Some(card.id.as_str());
                        if card_tile(ui, card, selected) {
                            clicked = Some(card.id.clone());
                        }
                    }
                });
            });
            if clicked.is_some() {
                self.selected = clicked;
            }
        });
    }

    fn sources_ui(&mut self, ui: &mut egui::Ui) {
        let mut changed = false;

        ui.label(RichText::new("Catalog").strong());
        ui.horizontal(|ui| {
            let text = self
                .state
                .catalog
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "none".to_string());
            ui.label(text);
        });
        ui.horizontal(|ui| {
            if ui.button("Choose…").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Catalog", &["json"])
                    .pick_file()
                {
                    self.state.catalog = Some(path);
                    changed = true;
                }
            }
            if self.state.catalog.is_some() && ui.button("Clear").clicked() {
                self.state.catalog = None;
                changed = true;
            }
        });

        ui.separator();
        ui.label(RichText::new("Folders").strong());
        if ui.button("Add folder").clicked() {
            if let Some(path) = rfd::FileDialog::new().pick_folder() {
                changed |= self.state.add_folder(path);
            }
        }

        let mut to_remove = Vec::new();
        for (idx, folder) in self.state.folders.iter_mut().enumerate() {
            ui.horizontal(|ui| {
                ui.label(folder.path.display().to_string());
                changed |= ui
                    .checkbox(&mut folder.include_subfolders, "Subfolders")
                    .changed();
                if ui.button("✕").clicked() {
                    to_remove.push(idx);
                }
            });
        }
        for idx in to_remove.into_iter().rev() {
            self.state.folders.remove(idx);
            changed = true;
        }

        ui.separator();
        if ui.button("Reload").clicked() {
            self.reload();
        }

        if changed {
            self.persist();
            self.reload();
        }
    }

    /// Rebuild the cards from the configured sources and re-apply the query.
    fn reload(&mut self) {
        match catalog::collect(self.state.catalog.as_deref(), &self.state.folders) {
            Ok(records) => {
                let cards = records.into_iter().map(VideoRecord::into_card).collect();
                self.page.replace_cards(cards);
                let summary = search::search_videos(&mut self.page);
                tracing::info!(videos = self.page.cards().len(), "gallery reloaded");
                self.status = summary_text(summary);
            }
            Err(err) => {
                tracing::warn!("reload failed: {err}");
                self.status = err.to_string();
            }
        }

        self.prune_selection();
    }

    /// Drop the selection once its card is gone or hidden.
    fn prune_selection(&mut self) {
        let keep = self
            .selected
            .as_deref()
            .and_then(|id| self.page.card(id))
            .is_some_and(VideoCard::is_visible);
        if !keep {
            self.selected = None;
        }
    }

    fn persist(&mut self) {
        self.state.apply_to_settings(&mut self.settings);
        if let Err(err) = settings::save(&self.settings) {
            tracing::warn!("failed to save settings: {err:#}");
            self.status = err.to_string();
        }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

/// Draw one card and report whether it was clicked.
fn card_tile(ui: &mut egui::Ui, card: &VideoCard, selected: bool) -> bool {
    let mut frame = egui::Frame::group(ui.style());
    if selected {
        frame = frame.stroke(ui.visuals().selection.stroke);
    }
    let response = frame
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.label(RichText::new(&card.title).heading());
            ui.label(format!("{} · {} views", card.uploader, card.views));
            if let Some(date) = &card.uploaded_at {
                ui.small(date);
            }
        })
        .response;
    response.interact(egui::Sense::click()).clicked()
}

fn details(ui: &mut egui::Ui, card: &VideoCard) {
    ui.label(RichText::new(&card.title).strong());
    if !card.description.is_empty() {
        ui.label(&card.description);
    }
    ui.horizontal(|ui| {
        ui.label(format!("Uploader: {}", card.uploader));
        ui.separator();
        ui.label(format!("Views: {}", card.views));
        if let Some(date) = &card.uploaded_at {
            ui.separator();
            ui.label(format!("Uploaded: {date}"));
        }
    });
    if let Some(file) = &card.filename {
        ui.label(format!("File: {}", file.display()));
    }
}

fn summary_text(summary: FilterSummary) -> String {
    format!("showing {} of {} videos", summary.shown, summary.total())
}
