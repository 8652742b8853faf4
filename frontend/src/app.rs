use crate::{describe_fetch_error, fetch_users, load_config, Config, User, CONFIG_PATH};
use anyhow::Result;
use eframe::emath::Align;
use egui::{Button, Grid, ScrollArea};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

pub const LOAD_LABEL: &str = "Load users from DynamoDB";
pub const LOADING_LABEL: &str = "Loading...";

pub struct UsersViewer {
    config: Result<Config, String>,
    users: Vec<User>,
    error: Option<String>,
    pending: Option<Receiver<Result<Vec<User>>>>,
}

impl Default for UsersViewer {
    fn default() -> Self {
        let config = load_config(CONFIG_PATH).map_err(|e| {
            log::error!("{:#}", e);
            format!("{:#}", e)
        });

        Self::with_config(config)
    }
}

impl UsersViewer {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Default::default()
    }

    pub fn with_config(config: Result<Config, String>) -> Self {
        Self {
            config,
            users: Vec::new(),
            error: None,
            pending: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn can_load(&self) -> bool {
        self.config.is_ok() && !self.is_loading()
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_loading() {
            LOADING_LABEL
        } else {
            LOAD_LABEL
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn start_loading(&mut self, ctx: &egui::Context) {
        let api_url = match &self.config {
            Ok(config) => config.api_url.clone(),
            Err(_) => return,
        };

        let (tx, rx) = mpsc::channel();
        let ctx = ctx.clone();
        thread::spawn(move || {
            if tx.send(fetch_users(&api_url)).is_ok() {
                ctx.request_repaint();
            }
        });

        self.error = None;
        self.pending = Some(rx);
    }

    fn poll(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };

        match rx.try_recv() {
            Ok(result) => {
                self.pending = None;
                self.finish(result);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                self.error = Some("Error when fetching users: request aborted".to_string());
            }
        }
    }

    fn finish(&mut self, result: Result<Vec<User>>) {
        match result {
            Ok(users) => {
                log::info!("{} user(s) loaded", users.len());
                self.users = users;
            }
            Err(e) => {
                log::error!("{:?}", e);
                self.error = Some(describe_fetch_error(&e));
            }
        }
    }
}

impl eframe::App for UsersViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.with_layout(egui::Layout::left_to_right(Align::Center), |ui| {
                    ui.heading("Users");
                    if let Ok(config) = &self.config {
                        ui.separator();
                        ui.label(format!("Environment: {}", config.env));
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                    egui::widgets::global_dark_light_mode_buttons(ui);
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let button = Button::new(self.button_label());
            if ui.add_enabled(self.can_load(), button).clicked() {
                self.start_loading(ctx);
            }

            let error_color = ui.visuals().error_fg_color;
            if let Err(e) = &self.config {
                ui.colored_label(error_color, e.as_str());
            }
            if let Some(error) = &self.error {
                ui.colored_label(error_color, error.as_str());
            }

            ui.separator();

            ScrollArea::vertical().show(ui, |ui| {
                Grid::new("users_grid")
                    .num_columns(3)
                    .striped(true)
                    .show(ui, |ui| {
                        ui.strong("Id");
                        ui.strong("Name");
                        ui.strong("Address");
                        ui.end_row();

                        for user in &self.users {
                            ui.label(user.id.as_str());
                            ui.label(user.name.as_str());
                            ui.label(user.address.as_str());
                            ui.end_row();
                        }
                    });
            });
        });
    }
}
