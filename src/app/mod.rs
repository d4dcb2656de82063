// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the demo screen.
//!
//! The `App` struct owns the three feedback components (toast, flash, busy)
//! and the diagnostics collector, and translates messages into state changes
//! and simulated asynchronous work. Policy decisions (window sizing, config
//! clamping, theme resolution) stay close to the update loop so user-facing
//! behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, SimulatedOp};

use crate::config::{self, Config};
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
use crate::ui::notifications::{BusyIndicator, FlashCenter, Notification, ToastCenter};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state bridging the demo screen, the feedback
/// subsystem, and persisted preferences.
#[derive(Debug)]
pub struct App {
    theme_mode: ThemeMode,
    /// Config override for toast auto-dismiss, in milliseconds.
    toast_duration_ms: Option<i64>,
    /// Config override for flash auto-dismiss, in milliseconds.
    flash_duration_ms: Option<i64>,
    /// Where preferences are persisted; `None` uses the platform default.
    config_path: Option<PathBuf>,
    toasts: ToastCenter,
    flash: FlashCenter,
    busy: BusyIndicator,
    diagnostics: DiagnosticsCollector,
}

impl Default for App {
    fn default() -> Self {
        let (diagnostics, handle) = DiagnosticsCollector::new(BufferCapacity::default());
        let mut toasts = ToastCenter::new();
        toasts.set_diagnostics(handle);

        Self {
            theme_mode: ThemeMode::System,
            toast_duration_ms: None,
            flash_duration_ms: None,
            config_path: None,
            toasts,
            flash: FlashCenter::new(),
            busy: BusyIndicator::new(),
            diagnostics,
        }
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from persisted preferences and CLI
    /// flags. A broken settings file falls back to defaults and surfaces a
    /// warning toast instead of aborting startup.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let load_result = match &flags.config_path {
            Some(path) => config::load_from_path(path),
            None => config::load(),
        };
        let (config, config_warning) = match load_result {
            Ok(config) => (config, None),
            Err(error) => (Config::default(), Some(error)),
        };

        let capacity = BufferCapacity::new(
            config
                .diagnostics_capacity
                .unwrap_or(config::DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        );
        let (diagnostics, handle) = DiagnosticsCollector::new(capacity);
        let mut toasts = ToastCenter::new();
        toasts.set_diagnostics(handle);

        let theme_mode = flags
            .theme
            .as_deref()
            .and_then(ThemeMode::parse)
            .unwrap_or(config.theme_mode);

        let mut app = App {
            theme_mode,
            toast_duration_ms: config.toast_duration_ms,
            flash_duration_ms: config.flash_duration_ms,
            config_path: flags.config_path,
            toasts,
            diagnostics,
            ..Self::default()
        };

        if let Some(error) = config_warning {
            app.toasts.push(
                Notification::warning("Settings not loaded")
                    .with_message(format!("Using defaults: {error}")),
            );
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Alankara Studio")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.toasts.has_toasts() || self.flash.has_messages(),
            self.busy.is_active(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            theme_mode: &mut self.theme_mode,
            toast_duration_ms: self.toast_duration_ms,
            flash_duration_ms: self.flash_duration_ms,
            config_path: self.config_path.as_deref(),
            toasts: &mut self.toasts,
            flash: &mut self.flash,
            busy: &mut self.busy,
            diagnostics: &mut self.diagnostics,
        };

        match message {
            Message::Toast(toast_message) => {
                ctx.toasts.handle_message(&toast_message);
                Task::none()
            }
            Message::Flash(flash_message) => {
                ctx.flash.handle_message(&flash_message);
                Task::none()
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::StartOperation(op) => update::handle_start_operation(&mut ctx, op),
            Message::OperationAdvanced(op) => update::handle_operation_advanced(&mut ctx, op),
            Message::OperationFinished(op) => update::handle_operation_finished(&mut ctx, op),
            Message::ShowToast(kind) => update::handle_show_toast(&mut ctx, kind),
            Message::ShowFlash(kind) => update::handle_show_flash(&mut ctx, kind),
            Message::ShowPersistentFlash => update::handle_show_persistent_flash(&mut ctx),
            Message::CycleTheme => update::handle_cycle_theme(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            theme_mode: self.theme_mode,
            toasts: &self.toasts,
            flash: &self.flash,
            busy: &self.busy,
        })
    }
}
