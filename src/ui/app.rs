//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, ComboBox, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::{Phase, Seat, Session};
use super::theme::*;
use crate::config::GameConfig;
use crate::player::PlayerKind;
use crate::Stone;

/// Main Gomoku application
pub struct GomokuApp {
    /// Settings for the next new game, edited in the options dialog
    config: GameConfig,
    session: Session,
    board_view: BoardView,
    show_options: bool,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        let session = Session::new(&config);
        Self {
            config,
            session,
            board_view: BoardView::default(),
            show_options: false,
        }
    }

    fn new_game(&mut self) {
        self.session = Session::new(&self.config);
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New game").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    if ui.button("Options…").clicked() {
                        self.show_options = true;
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{} vs {}",
                        self.session.seat(Stone::White).name(),
                        self.session.seat(Stone::Black).name()
                    ));
                });
            });
        });
    }

    /// Seat selection per color, applied on the next new game
    fn render_options(&mut self, ctx: &Context) {
        if !self.show_options {
            return;
        }
        let mut open = true;
        egui::Window::new("Options")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                for color in [Stone::White, Stone::Black] {
                    let mut kind = self.config.player(color);
                    ComboBox::from_label(color.to_string())
                        .selected_text(kind.name())
                        .show_ui(ui, |ui| {
                            for option in PlayerKind::all() {
                                ui.selectable_value(&mut kind, option, option.name());
                            }
                        });
                    self.config.set_player(color, kind);
                }
                ui.add_space(6.0);
                ui.label(RichText::new("Changes apply to the next new game.").size(11.0).color(TEXT_MUTED));
                if ui.button("Close").clicked() {
                    self.show_options = false;
                }
            });
        if !open {
            self.show_options = false;
        }
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                if let Some(text) = self.session.result_text() {
                    if self.render_result_card(ui, text) {
                        self.new_game();
                    }
                    ui.add_space(10.0);
                }
                if let Phase::Aborted(error) = &self.session.phase {
                    Self::render_note(ui, error, ERROR_BG);
                    ui.add_space(10.0);
                }
                if let Some(msg) = &self.session.message {
                    Self::render_note(ui, msg, MESSAGE_BG);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.session.board.in_turn();
            let (accent, ink) = match turn {
                Stone::White => (WHITE_STONE, BLACK_STONE),
                _ => (BLACK_STONE, WHITE_STONE),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, accent);
                ui.painter().circle_stroke(rect.center(), 18.0, egui::Stroke::new(1.0, ink));
                ui.add_space(10.0);

                ui.vertical(|ui| {
                    ui.label(RichText::new(turn.to_string()).size(18.0).strong().color(TEXT_PRIMARY));
                    let (status, color) = if self.session.is_over() {
                        ("Game over", TEXT_SECONDARY)
                    } else if self.session.is_human_turn() {
                        ("Your turn", STATUS_ACTIVE)
                    } else {
                        ("Computer is playing", STATUS_WAITING)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });

            ui.add_space(8.0);
            for color in [Stone::White, Stone::Black] {
                let seat = self.session.seat(color);
                let kind = match seat {
                    Seat::Human => "Human",
                    Seat::Computer(_) => "Computer",
                };
                ui.label(
                    RichText::new(format!("{color}: {} ({kind})", seat.name()))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
            }
            ui.label(
                RichText::new(format!(
                    "Move #{} · {} cells left",
                    self.session.board.log().len(),
                    self.session.board.moves_left()
                ))
                .size(11.0)
                .color(TEXT_MUTED),
            );
        });
    }

    /// Returns true when "New game" was clicked
    fn render_result_card(&self, ui: &mut egui::Ui, text: &str) -> bool {
        let mut restart = false;
        Frame::new()
            .fill(RESULT_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(6.0);
                    ui.label(RichText::new(text).size(20.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(10.0);
                    restart = ui.button("New game").clicked();
                });
            });
        restart
    }

    fn render_note(ui: &mut egui::Ui, msg: &str, fill: egui::Color32) {
        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let preview = (self.session.is_human_turn() && !self.show_options)
                .then(|| self.session.board.in_turn());
            let clicked = self.board_view.show(ui, &self.session.board, self.session.winning_line(), preview);

            if let Some(pos) = clicked {
                self.session.click(pos, self.show_options);
                if self.session.is_computer_turn() {
                    ctx.request_repaint();
                }
            }
        });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // One computer move per frame keeps the window responsive
        if !self.show_options && self.session.step() {
            ctx.request_repaint();
        }

        self.render_menu_bar(ctx);
        self.render_options(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
