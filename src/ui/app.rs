//! Main application for the Isolation GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::config::AgentConfig;
use crate::error::ConfigError;
use crate::{Player, SearchOutcome, Pos};

use super::board_view::{BoardOverlay, BoardView};
use super::session::{GameMode, GameResult, GameSession};
use super::theme::*;

/// Main Isolation application
pub struct IsolationApp {
    session: GameSession,
    board_view: BoardView,
    show_debug: bool,
}

impl IsolationApp {
    /// Build the app from a validated agent configuration.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AgentConfig) -> Result<Self, ConfigError> {
        let search = config.search_config()?;
        let board = config.board()?;
        Ok(Self {
            session: GameSession::new(GameMode::default(), config, search, board),
            board_view: BoardView::default(),
            show_debug: true,
        })
    }

    fn new_game(&mut self, mode: GameMode) {
        self.session.restart(mode);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (play first)").clicked() {
                        self.new_game(GameMode::HumanVsAgent { human: Player::First });
                        ui.close_menu();
                    }
                    if ui.button("New Game (play second)").clicked() {
                        self.new_game(GameMode::HumanVsAgent { human: Player::Second });
                        ui.close_menu();
                    }
                    if ui.button("New Game (agent vs agent)").clicked() {
                        self.new_game(GameMode::AgentVsAgent);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.session.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Search Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.session.mode {
                        GameMode::HumanVsAgent { human } => format!("You: {human}"),
                        GameMode::AgentVsAgent => "Agent vs Agent".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and the last search report
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_timer_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_search_card(ui);
                }

                if let Some(result) = self.session.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, result);
                }

                if let Some(msg) = &self.session.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        let config = self.session.config();
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("ISOLATION").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!(
                    "{}x{} board, {} heuristic",
                    config.width, config.height, config.heuristic
                ))
                .size(11.0)
                .color(TEXT_MUTED),
            );
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.session.current_turn();
            let (accent, glyph) = match turn {
                Player::First => (FIRST_PIECE, TEXT_PRIMARY),
                Player::Second => (SECOND_PIECE, FIRST_PIECE),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    match turn {
                        Player::First => "1",
                        Player::Second => "2",
                    },
                    egui::FontId::proportional(22.0),
                    glyph,
                );
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(turn.to_string()).size(18.0).strong().color(TEXT_PRIMARY));
                    let (status, color) = if self.session.game_over.is_some() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else if self.session.is_agent_thinking() {
                        ("Agent thinking...", TIMER_WARNING)
                    } else {
                        ("Your turn", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.session.agent_thinking_elapsed() {
                let budget = self.session.config().turn_budget().as_secs_f32();
                let secs = elapsed.as_secs_f32();
                let color = if secs < budget * 0.5 {
                    TIMER_NORMAL
                } else if secs < budget {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{secs:.3}s")).size(28.0).strong().color(color));
            } else {
                let elapsed = self.session.move_timer.elapsed();
                ui.label(
                    RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                        .size(24.0)
                        .color(TEXT_PRIMARY),
                );
            }

            if let Some(agent_time) = self.session.move_timer.agent_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last agent turn: {:.3}s", agent_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    let label = egui::Label::new(RichText::new("New Game").size(12.0).color(TEXT_PRIMARY));
                    if ui.add(label.sense(egui::Sense::click())).clicked() {
                        self.new_game(self.session.mode);
                    }
                });
                ui.add_space(4.0);
                btn_frame.show(ui, |ui| {
                    let label = egui::Label::new(RichText::new("Undo").size(12.0).color(TEXT_PRIMARY));
                    if ui.add(label.sense(egui::Sense::click())).clicked() {
                        self.session.undo();
                    }
                });
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.session.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Last search report
    fn render_search_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SEARCH").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match &self.session.last_report {
                Some((player, outcome)) => Self::render_outcome(ui, *player, outcome),
                None => {
                    ui.label(RichText::new("Waiting for agent...").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    fn render_outcome(ui: &mut egui::Ui, player: Player, outcome: &SearchOutcome<Pos>) {
        let color = if outcome.is_complete() { TIMER_NORMAL } else { TIMER_WARNING };
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(player.to_string()).size(11.0).strong().color(TEXT_PRIMARY));
                ui.label(RichText::new(outcome.termination.to_string()).size(10.0).color(color));
                ui.label(
                    RichText::new(format!("Depth {}  Score {}", outcome.depth, outcome.score))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(format!("{}ms", outcome.elapsed.as_millis()))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.label(RichText::new(format!("{} nodes", outcome.nodes)).size(10.0).color(TEXT_MUTED));
                });
            });
        });

        if let Some(pos) = outcome.best_move {
            ui.add_space(4.0);
            ui.label(RichText::new(format!("-> {pos}")).size(12.0).strong().color(WIN_HIGHLIGHT));
        }
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: GameResult) {
        let reason = match result {
            GameResult::Isolated { .. } => "opponent isolated",
            GameResult::Forfeit { .. } => "opponent out of time",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!("{} wins", result.winner()))
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.label(RichText::new(reason).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let label = egui::Label::new(
                                RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY),
                            );
                            if ui.add(label.sense(egui::Sense::click())).clicked() {
                                self.new_game(self.session.mode);
                            }
                        });
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let interactive = self.session.game_over.is_none()
                && self.session.is_human_turn()
                && !self.session.is_agent_thinking();
            let legal_moves = if self.session.game_over.is_none() {
                self.session.legal_moves()
            } else {
                Vec::new()
            };
            let overlay = BoardOverlay {
                last_move: self.session.last_move,
                legal_moves: &legal_moves,
                winner: self.session.game_over.map(GameResult::winner),
                interactive,
            };

            if let Some(pos) = self.board_view.show(ui, &self.session.board, &overlay) {
                if let Err(msg) = self.session.try_move(pos) {
                    self.session.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, undo, toggle_debug) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::D),
            )
        });
        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if undo {
            self.session.undo();
        }
        if new_game {
            self.new_game(self.session.mode);
        }
    }
}

impl eframe::App for IsolationApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.session.check_agent_result();

        if self.session.is_agent_turn()
            && !self.session.is_agent_thinking()
            && self.session.game_over.is_none()
        {
            self.session.start_agent_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep polling the worker and the timer
        if self.session.is_agent_thinking() || self.session.game_over.is_none() {
            ctx.request_repaint();
        }
    }
}
