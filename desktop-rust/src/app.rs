use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use eframe::egui::{self, Color32, RichText};
use image::ImageReader;
use pizza_co_common::availability::is_open_now;
use pizza_co_common::storefront::{
    FooterState, MenuState, CLEAR_BUTTON, MENU_HEADING, MENU_INTRO, NO_ORDERS, NO_RESULTS,
    ORDERS_HEADING, ORDER_BUTTON, SEARCH_PLACEHOLDER, SHOP_NAME,
};
use pizza_co_common::PizzaRecord;

use crate::io::image_path;
use crate::model::{AppState, PendingAction};

const ACCENT: Color32 = Color32::from_rgb(237, 200, 75);
const THUMB_SIZE: egui::Vec2 = egui::vec2(120.0, 120.0);

/// メニュー・注文画面
pub struct PizzaApp {
    state: AppState,
    image_dir: PathBuf,
    thumbs: HashMap<&'static str, egui::TextureHandle>,
    thumb_rx: Receiver<ThumbData>,
    thumb_tx: Sender<ThumbData>,
    thumb_inflight: HashSet<&'static str>,
    thumb_missing: HashSet<&'static str>,
}

struct ThumbData {
    image_ref: &'static str,
    size: [usize; 2],
    pixels: Vec<u8>,
}

impl PizzaApp {
    pub fn new(image_dir: PathBuf) -> Self {
        let (thumb_tx, thumb_rx) = mpsc::channel();
        Self {
            state: AppState::default(),
            image_dir,
            thumbs: HashMap::new(),
            thumb_rx,
            thumb_tx,
            thumb_inflight: HashSet::new(),
            thumb_missing: HashSet::new(),
        }
    }

    /// サムネイルを別スレッドで読み込む
    fn request_thumbnail(&mut self, image_ref: &'static str) {
        if self.thumbs.contains_key(image_ref)
            || self.thumb_missing.contains(image_ref)
            || !self.thumb_inflight.insert(image_ref)
        {
            return;
        }
        let sender = self.thumb_tx.clone();
        let path = image_path(&self.image_dir, image_ref);

        std::thread::spawn(move || {
            let image = ImageReader::open(&path).ok().and_then(|r| r.decode().ok());
            let msg = match image {
                Some(image) => {
                    let thumb = image.thumbnail(240, 240);
                    ThumbData {
                        image_ref,
                        size: [thumb.width() as usize, thumb.height() as usize],
                        pixels: thumb.to_rgba8().into_raw(),
                    }
                }
                None => {
                    tracing::warn!(path = %path.display(), "ピザ画像が見つかりません");
                    ThumbData { image_ref, size: [0, 0], pixels: Vec::new() }
                }
            };
            let _ = sender.send(msg);
        });
    }

    fn process_thumbs(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.thumb_rx.try_recv() {
            self.thumb_inflight.remove(msg.image_ref);
            if msg.size[0] == 0 || msg.size[1] == 0 {
                // 毎フレーム再読み込みしない
                self.thumb_missing.insert(msg.image_ref);
                continue;
            }
            let color_image = egui::ColorImage::from_rgba_unmultiplied(msg.size, &msg.pixels);
            let texture = ctx.load_texture(msg.image_ref, color_image, egui::TextureOptions::default());
            self.thumbs.insert(msg.image_ref, texture);
        }
    }

    fn render_card(&mut self, ui: &mut egui::Ui, pizza: &'static PizzaRecord) {
        let frame = egui::Frame::none()
            .fill(Color32::from_rgb(24, 28, 40))
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(40)))
            .rounding(egui::Rounding::same(10.0))
            .inner_margin(egui::Margin::same(10.0));

        frame.show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                if let Some(texture) = self.thumbs.get(pizza.image_ref) {
                    ui.add(egui::Image::new(texture).fit_to_exact_size(THUMB_SIZE));
                } else {
                    self.request_thumbnail(pizza.image_ref);
                    ui.allocate_ui_with_layout(
                        THUMB_SIZE,
                        egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                        |ui| {
                            ui.label("🍕");
                        },
                    );
                }

                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(pizza.name).size(18.0).strong());
                    ui.label(RichText::new(pizza.ingredients).color(Color32::from_gray(200)));
                    ui.label(RichText::new(pizza.price_label()).color(ACCENT));
                    if ui.button(ORDER_BUTTON).clicked() {
                        self.state.request(PendingAction::Add(*pizza));
                    }
                });
            });
        });
    }

    fn render_menu(&mut self, ui: &mut egui::Ui) {
        ui.heading(MENU_HEADING);
        ui.label(MENU_INTRO);
        ui.separator();

        match self.state.shop.menu() {
            MenuState::Items(items) => {
                for pizza in items {
                    self.render_card(ui, pizza);
                    ui.add_space(8.0);
                }
            }
            MenuState::NoResults => {
                ui.label(RichText::new(NO_RESULTS).italics());
            }
        }
    }

    fn render_footer(&mut self, ui: &mut egui::Ui) {
        // 時計はフレームごとに1回だけ読む
        let footer = self.state.shop.footer(is_open_now());
        ui.label(RichText::new(footer.status_text()).strong());

        match footer {
            FooterState::Closed => {}
            FooterState::OpenEmpty => {
                ui.label(NO_ORDERS);
            }
            FooterState::OpenWithOrders(labels) => {
                ui.label(ORDERS_HEADING);
                for label in labels {
                    ui.label(format!("• {label}"));
                }
                if ui.button(CLEAR_BUTTON).clicked() {
                    self.state.request(PendingAction::ClearAll);
                }
            }
        }

        if !self.state.status.is_empty() {
            ui.label(RichText::new(&self.state.status).color(Color32::from_gray(170)));
        }
    }

    /// OK/Cancel の確認ダイアログ
    fn render_confirm(&mut self, ctx: &egui::Context) {
        let Some(action) = self.state.pending else {
            return;
        };

        let mut answer = None;
        egui::Window::new("Confirm")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(action.prompt());
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        answer = Some(true);
                    }
                    if ui.button("Cancel").clicked() {
                        answer = Some(false);
                    }
                });
            });

        if let Some(answer) = answer {
            let outcome = self.state.resolve(answer);
            tracing::info!(?action, ?outcome, "確認ダイアログの回答");
        }
    }
}

impl eframe::App for PizzaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.thumb_inflight.is_empty() {
            ctx.request_repaint();
        }
        self.process_thumbs(ctx);

        // 確認ダイアログ表示中は他のパネルを無効化
        let interactive = self.state.pending.is_none();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_enabled_ui(interactive, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(RichText::new(SHOP_NAME).color(ACCENT).size(28.0));
                });
                let mut text = self.state.shop.filter().to_string();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut text)
                        .hint_text(SEARCH_PLACEHOLDER)
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    tracing::debug!(filter = %text, "フィルタ変更");
                    self.state.shop.set_filter(text);
                }
                ui.add_space(4.0);
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_enabled_ui(interactive, |ui| {
                ui.add_space(4.0);
                self.render_footer(ui);
                ui.add_space(4.0);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(interactive, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.render_menu(ui);
                    });
            });
        });

        self.render_confirm(ctx);
    }
}
