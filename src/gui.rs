use crate::config::Config;
use crate::library::logger::interface::Logger;
use crate::render::{Block, Page, Section};
use crate::waste_classifier::WasteClassifier;
use eframe::egui;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const PREVIEW_WIDTH: f32 = 400.0;

struct Upload {
    path: PathBuf,
    bytes: Vec<u8>,
    preview: Option<egui::TextureHandle>,
}

struct ClassifierWindow {
    waste_classifier: WasteClassifier,
    logger: Arc<dyn Logger + Send + Sync>,
    path_input: String,
    upload: Option<Upload>,
    page: Option<Page>,
    notice: Option<String>,
}

impl ClassifierWindow {
    fn select(&mut self, ctx: &egui::Context, path: PathBuf) {
        self.page = None;

        if !Config::accepts_path(&path) {
            self.notice = Some(format!(
                "Unsupported file type. Choose one of: {}",
                Config::IMAGE_EXTENSIONS.join(", ")
            ));
            self.upload = None;
            return;
        }

        match std::fs::read(&path) {
            Ok(bytes) => {
                let _ = self
                    .logger
                    .info(&format!("Selected {} ({} bytes)", path.display(), bytes.len()));
                let preview = load_preview(ctx, &bytes);
                self.notice = None;
                self.upload = Some(Upload {
                    path,
                    bytes,
                    preview,
                });
            }
            Err(e) => {
                self.notice = Some(format!("Could not read {}: {}", path.display(), e));
                self.upload = None;
            }
        }
    }

    fn dropped_file(&self, ctx: &egui::Context) -> Option<PathBuf> {
        ctx.input(|i| i.raw.dropped_files.iter().find_map(|file| file.path.clone()))
    }
}

fn load_preview(ctx: &egui::Context, bytes: &[u8]) -> Option<egui::TextureHandle> {
    let rgba = image::load_from_memory(bytes).ok()?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());

    Some(ctx.load_texture("upload-preview", color_image, Default::default()))
}

fn show_section(ui: &mut egui::Ui, section: &Section) {
    ui.label(egui::RichText::new(&section.heading).strong());
    ui.add_space(8.0);

    for block in &section.blocks {
        match block {
            Block::Text(text) => {
                ui.label(text);
            }
            Block::Numbered {
                number,
                text,
                url: Some(url),
            } => {
                ui.hyperlink_to(format!("{}. {}", number, text), url);
            }
            Block::Numbered { number, text, .. } => {
                ui.label(format!("{}. {}", number, text));
            }
            Block::Error(message) => {
                ui.colored_label(egui::Color32::from_rgb(200, 40, 40), message);
            }
        }
        ui.add_space(4.0);
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl eframe::App for ClassifierWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(path) = self.dropped_file(ctx) {
            self.path_input = path.display().to_string();
            self.select(ctx, path);
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Waste Classifier App");
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Enter your Image");
                ui.text_edit_singleline(&mut self.path_input);
                if ui.button("Open").clicked() {
                    let path = PathBuf::from(self.path_input.trim());
                    self.select(ctx, path);
                }
            });
            ui.label("…or drop a JPEG or PNG file onto this window.");

            if let Some(notice) = &self.notice {
                ui.colored_label(egui::Color32::from_rgb(200, 40, 40), notice);
            }

            if !self.waste_classifier.is_ready() {
                ui.colored_label(
                    egui::Color32::from_rgb(200, 120, 0),
                    "The model could not be loaded; classification will report the error.",
                );
            }

            if let Some(upload) = &self.upload {
                ui.horizontal(|ui| {
                    ui.label(file_name(&upload.path));
                    if ui.button("Classify").clicked() {
                        self.page = Some(self.waste_classifier.run(&upload.bytes));
                    }
                });
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(page) = &self.page else {
                return;
            };

            egui::ScrollArea::vertical().show(ui, |ui| {
                let preview = self.upload.as_ref().and_then(|u| u.preview.as_ref());
                let columns = page.sections.len().max(1);

                ui.columns(columns, |cols| {
                    for (i, (col, section)) in cols.iter_mut().zip(&page.sections).enumerate() {
                        show_section(col, section);
                        if i == 0 && !page.has_error() {
                            if let Some(texture) = preview {
                                let [w, h]: [f32; 2] = texture.size_vec2().into();
                                let scale = (PREVIEW_WIDTH / w).min(col.available_width() / w);
                                col.image(egui::load::SizedTexture::new(
                                    texture.id(),
                                    egui::vec2(w * scale, h * scale),
                                ));
                            }
                        }
                    }
                });
            });
        });
    }
}

/// Opens the window and blocks until it is closed.
pub fn run(
    config: &Config,
    waste_classifier: WasteClassifier,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<(), eframe::Error> {
    let logger = logger.with_namespace("gui");
    let _ = logger.info("Opening window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(config.window_size),
        ..Default::default()
    };

    let window = ClassifierWindow {
        waste_classifier,
        logger,
        path_input: String::new(),
        upload: None,
        page: None,
        notice: None,
    };

    eframe::run_native(
        "Waste Classifier",
        options,
        Box::new(|_cc| Box::new(window)),
    )
}
