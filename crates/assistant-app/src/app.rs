//! Main egui application — composes the panels and owns the adapters.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use egui::{self, CentralPanel, Frame};

use assistant_core::client::ChatClient;
use assistant_core::event_bus::EventBus;
use assistant_core::mock_responder::MockBackend;
use assistant_core::ports::{ClockPort, PageMetrics, ViewportPort};
use assistant_core::surface::PendingTurn;
use assistant_platform::{
    load_page_config, AutoScrollDriver, BrowserClock, BrowserViewport, HttpChatBackend,
    SelectionListener,
};
use assistant_types::config::AssistantConfig;
use assistant_types::i18n::Language;
use assistant_ui::panels::auto_scroll::{auto_scroll_control, AutoScrollAction, AutoScrollView};
use assistant_ui::panels::chat::{self, ChatPanelOutput};
use assistant_ui::panels::launcher;
use assistant_ui::state::UiState;
use assistant_ui::theme;

const URDU_FONT_URL: &str = "NotoNastaliqUrdu-Regular.ttf";
/// How often to look at the bus and the route while nothing else repaints
const IDLE_POLL: Duration = Duration::from_millis(250);

pub struct AssistantApp {
    ui_state: UiState,
    config: AssistantConfig,
    event_bus: EventBus,
    client: Rc<ChatClient>,
    viewport: Rc<dyn ViewportPort>,
    auto_scroll: AutoScrollDriver,
    /// Detaches the document listener when the app goes away
    _selection: Option<SelectionListener>,
    first_frame: bool,
    font_loaded: Rc<RefCell<bool>>,
}

impl AssistantApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let page = load_page_config();
        let config = page.config;
        let event_bus = EventBus::new();

        let clock: Rc<dyn ClockPort> = Rc::new(BrowserClock::new());
        let viewport: Rc<dyn ViewportPort> = match BrowserViewport::new() {
            Ok(v) => Rc::new(v),
            Err(e) => {
                log::warn!("Viewport unavailable: {}. Page features disabled.", e);
                Rc::new(DetachedViewport)
            }
        };

        let remote = Rc::new(HttpChatBackend::new(&config.backend));
        let fallback = Rc::new(MockBackend::new(clock.clone(), config.mock.clone()));
        let client = Rc::new(ChatClient::new(remote, fallback));

        let selection = match SelectionListener::attach(viewport.clone(), event_bus.clone()) {
            Ok(listener) => Some(listener),
            Err(e) => {
                log::warn!("Selection capture unavailable: {}", e);
                None
            }
        };

        let auto_scroll =
            AutoScrollDriver::new(config.auto_scroll.clone(), viewport.clone(), clock);
        let ui_state = UiState::new(&config, page.language, &viewport.pathname());

        log::info!(
            "Assistant ready (language: {}, backend: {})",
            page.language.code(),
            config.backend.base_url
        );

        Self {
            ui_state,
            config,
            event_bus,
            client,
            viewport,
            auto_scroll,
            _selection: selection,
            first_frame: true,
            font_loaded: Rc::new(RefCell::new(false)),
        }
    }

    /// Probe the backend once and post the result on the bus (async)
    fn check_health(&self, ctx: &egui::Context) {
        let client = self.client.clone();
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            client.report_health(&bus).await;
            ctx.request_repaint();
        });
    }

    /// Run a submitted turn against the backend (async)
    fn dispatch_turn(&self, turn: PendingTurn, ctx: &egui::Context) {
        let client = self.client.clone();
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            client.dispatch(turn, &bus).await;
            ctx.request_repaint();
        });
    }

    /// Fetch a Nastaliq font from the server and install it into egui.
    /// egui's bundled fonts have no Arabic-script glyphs.
    fn load_urdu_font(ctx: egui::Context, loaded_flag: Rc<RefCell<bool>>) {
        wasm_bindgen_futures::spawn_local(async move {
            let window = match web_sys::window() {
                Some(w) => w,
                None => return,
            };
            let resp = match wasm_bindgen_futures::JsFuture::from(
                window.fetch_with_str(URDU_FONT_URL),
            )
            .await
            {
                Ok(r) => r,
                Err(e) => {
                    log::warn!("Failed to fetch Urdu font: {:?}", e);
                    return;
                }
            };
            let resp: web_sys::Response = resp.into();
            if !resp.ok() {
                log::warn!("Urdu font request returned HTTP {}", resp.status());
                return;
            }
            let buf = match resp.array_buffer() {
                Ok(p) => match wasm_bindgen_futures::JsFuture::from(p).await {
                    Ok(b) => b,
                    Err(_) => return,
                },
                Err(_) => return,
            };
            let bytes = js_sys::Uint8Array::new(&buf).to_vec();

            let mut fonts = egui::FontDefinitions::default();
            fonts.font_data.insert(
                "noto_nastaliq_urdu".to_owned(),
                egui::FontData::from_owned(bytes).into(),
            );
            fonts
                .families
                .entry(egui::FontFamily::Proportional)
                .or_default()
                .push("noto_nastaliq_urdu".to_owned());

            ctx.set_fonts(fonts);
            *loaded_flag.borrow_mut() = true;
            ctx.request_repaint();
            log::info!("Urdu font loaded");
        });
    }

    fn follow_route(&mut self) {
        let path = self.viewport.pathname();
        if self.ui_state.navigate(&self.config.routes, &path) {
            self.auto_scroll.stop();
        }
    }

    fn handle_chat_output(&mut self, output: ChatPanelOutput, ctx: &egui::Context) {
        if let Some(turn) = output.submitted {
            self.dispatch_turn(turn, ctx);
        }
        if let Some(text) = output.copy_requested {
            self.viewport.copy_to_clipboard(&text);
        }
    }

    fn handle_auto_scroll(&mut self, action: AutoScrollAction) {
        match action {
            AutoScrollAction::None => {}
            AutoScrollAction::Toggle => self.auto_scroll.toggle(),
            AutoScrollAction::Reset => self.auto_scroll.reset(),
            AutoScrollAction::SetSpeed(speed) => self.auto_scroll.set_speed(speed),
        }
    }
}

impl eframe::App for AssistantApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            if self.ui_state.surface.language() == Language::Ur && !*self.font_loaded.borrow() {
                Self::load_urdu_font(ctx.clone(), self.font_loaded.clone());
            }
            self.check_health(ctx);
            self.first_frame = false;
        }

        self.follow_route();
        self.auto_scroll.sync();

        // Drain async outcomes and selections
        let events = self.event_bus.drain();
        if !events.is_empty() && self.ui_state.process_events(events) {
            ctx.request_repaint();
        }

        if self.ui_state.is_busy() || self.auto_scroll.is_playing() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(IDLE_POLL);
        }

        let strings = self.ui_state.strings();

        // ── Chat ─────────────────────────────────────────────
        if self.ui_state.page.launcher_visible {
            CentralPanel::default().frame(Frame::NONE).show(ctx, |_ui| {});
            launcher::launcher_button(ctx, &mut self.ui_state.launcher, strings);
            let output = launcher::chat_overlay(ctx, &mut self.ui_state);
            self.handle_chat_output(output, ctx);
        } else {
            let output = CentralPanel::default()
                .show(ctx, |ui| chat::chat_panel(ui, &mut self.ui_state))
                .inner;
            self.handle_chat_output(output, ctx);
        }

        // ── Reading aid ──────────────────────────────────────
        if self.ui_state.page.auto_scroll_available {
            let view = AutoScrollView {
                playing: self.auto_scroll.is_playing(),
                speed: self.auto_scroll.speed(),
                range: self.auto_scroll.speed_range(),
            };
            let action = auto_scroll_control(ctx, &view, strings);
            self.handle_auto_scroll(action);
        }
    }
}

// ─── Stub viewport for when there is no window ───────────────

struct DetachedViewport;

impl ViewportPort for DetachedViewport {
    fn pathname(&self) -> String {
        "/".to_string()
    }

    fn page_metrics(&self) -> PageMetrics {
        PageMetrics::default()
    }

    fn scroll_by(&self, _dy: f64) {}

    fn scroll_to_top(&self) {}

    fn selection_text(&self) -> Option<String> {
        None
    }

    fn copy_to_clipboard(&self, _text: &str) {
        log::warn!("Clipboard unavailable");
    }
}
