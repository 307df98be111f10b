#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;
use egui_islands::{
    AdaptiveToolbar, DraggableTabs, DraggableTabsOptions, Island, IslandsBuilder, Tab, TabBehavior,
};

#[derive(Clone, Debug)]
enum Document {
    Source(String),
    Terminal(Vec<String>),
}

struct App {
    tabs: DraggableTabs<Document>,
    behavior: Behavior,
    indexing: f32,
    show_log: bool,
}

#[derive(Default)]
struct Behavior {
    closed: Vec<String>,
}

impl TabBehavior<Document> for Behavior {
    fn content_ui(&mut self, ui: &mut egui::Ui, tab: &mut Tab<Document>) {
        ui.add_space(6.0);
        match &mut tab.content {
            Document::Source(text) => {
                let response = ui.add_sized(
                    ui.available_size(),
                    egui::TextEdit::multiline(text).code_editor(),
                );
                if response.changed() {
                    tab.is_modified = true;
                }
            }
            Document::Terminal(lines) => {
                for line in lines.iter() {
                    ui.monospace(line);
                }
            }
        }
    }

    fn on_close(&mut self, tab: &Tab<Document>) -> bool {
        self.closed.push(tab.title.clone());
        true
    }
}

fn initial_layout() -> Vec<Island<Document>> {
    let mut builder = IslandsBuilder::new();
    let editor = builder.add_island();
    let tools = builder.add_island();

    let source = |text: &str| Document::Source(text.to_owned());
    let output = |lines: &[&str]| Document::Terminal(lines.iter().map(|l| (*l).to_owned()).collect());

    builder.push(editor, "main.rs", source("fn main() {\n    println!(\"hello\");\n}\n")).icon =
        Some("🦀".to_owned());
    builder.push(editor, "lib.rs", source("pub mod islands;\n")).icon = Some("🦀".to_owned());
    builder.push(editor, "Cargo.toml", source("[package]\nname = \"demo\"\n"));
    builder.push(tools, "Terminal", output(&["$ cargo build", "   Finished"]));
    builder.push(tools, "Problems", output(&["No problems"]));

    builder.finish()
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut reset_layout = false;
        let mut reindex = false;
        let progress = self.indexing;

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            AdaptiveToolbar::new("ide_toolbar").show(
                ui,
                |ui| {
                    reset_layout = ui.button("☰").on_hover_text("Reset layout").clicked();
                    reindex = ui.button("▶ Index").clicked();
                },
                |ui| {
                    ui.label("📁 fleet-air-demo");
                },
                |ui, layout| {
                    if progress >= 1.0 {
                        ui.label("✔");
                    } else if layout.progress_collapsed {
                        ui.spinner();
                    } else {
                        ui.add(egui::ProgressBar::new(progress).text("Indexing…"));
                    }
                },
                |ui| {
                    if ui.button("⚙").on_hover_text("Event log").clicked() {
                        self.show_log = !self.show_log;
                    }
                },
            );
        });

        if reset_layout {
            self.tabs.set_islands(initial_layout());
        }
        if reindex {
            self.indexing = 0.0;
        }
        if self.indexing < 1.0 {
            self.indexing = (self.indexing + ctx.input(|i| i.stable_dt) * 0.2).min(1.0);
            ctx.request_repaint();
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            let closed = self.behavior.closed.join(", ");
            ui.label(format!(
                "dragging: {:?}   closed: {}",
                self.tabs.active_id(),
                if closed.is_empty() { "-" } else { closed.as_str() }
            ));
            if self.show_log {
                for line in self.tabs.debug_log() {
                    ui.monospace(line);
                }
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.tabs.ui(ui, &mut self.behavior);
        });
    }
}

fn main() -> eframe::Result {
    env_logger::init(); // Use `RUST_LOG=debug` to see drag decisions.

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 700.0]),
        ..Default::default()
    };

    eframe::run_native(
        "egui_islands demo",
        options,
        Box::new(|_cc| {
            Ok(Box::new(App {
                tabs: DraggableTabs::new_with_options(
                    "ide_islands",
                    initial_layout(),
                    DraggableTabsOptions {
                        debug_event_log: true,
                        debug_event_log_capacity: 8,
                        debug_integrity: true,
                        ..Default::default()
                    },
                ),
                behavior: Behavior::default(),
                indexing: 0.0,
                show_log: false,
            }))
        }),
    )
}
