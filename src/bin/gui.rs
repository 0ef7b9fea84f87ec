#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use ni_savings_calculator::{
    app, config,
    controller::{RecomputeController, SavingsEvents},
    display::{DisplayBoard, DisplayTarget},
    i18n, logging,
    schemes::SchemeId,
    state::ToggleOption,
};
use std::{env, fs, path::Path, time::Instant};
use tracing::warn;

fn main() -> Result<(), eframe::Error> {
    logging::init();
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-gb/ko-kr)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([720.0, 640.0])
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let app_cfg = app::load_config();
    let lang = i18n::resolve_language(cli_lang.as_deref(), &app_cfg.language);
    eframe::run_native(
        "NI Savings Calculator",
        options,
        Box::new(move |cc| {
            if lang.starts_with("ko") {
                if let Err(e) = setup_fonts(&cc.egui_ctx) {
                    warn!("font error: {e}");
                }
            }
            Box::new(GuiApp::new_with_language(app_cfg.clone(), &lang))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    // 기본 폰트 뒤에 둬서 £ 등 라틴 글리프는 기본 폰트를 쓴다.
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .push(font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시용 폰트를 찾아 등록한다.
/// 1) assets/fonts/ 아래 폰트
/// 2) Windows 시스템 폰트(맑은 고딕/굴림)
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    for cand in ["assets/fonts/malgun.ttf", "assets/fonts/NanumGothic.ttf"] {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "gulim.ttc"] {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    Err("Korean font not found; place one under assets/fonts/.".into())
}

/// 한 프레임 동안 모인 입력 이벤트.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UiEvent {
    EmployeesChanged,
    SalaryChanged,
    ToggleSelected(SchemeId, ToggleOption),
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    controller: RecomputeController,
    board: DisplayBoard,
    employees_input: String,
    salary_input: String,
    // 설정
    lang_input: String,
    window_alpha: f32,
    animation_ms: u64,
    save_status: Option<String>,
    show_settings_modal: bool,
    show_formula_modal: bool,
}

impl GuiApp {
    #[cfg(test)]
    fn new(config: config::Config) -> Self {
        let lang = i18n::resolve_language(None, &config.language);
        Self::new_with_language(config, &lang)
    }

    fn new_with_language(config: config::Config, lang: &str) -> Self {
        let tr = i18n::Translator::new_with_pack(lang, config.language_pack_dir.as_deref());
        let mut controller = RecomputeController::new(config.animation_duration());
        let mut board = DisplayBoard::new();
        controller.recompute(&mut board);
        Self {
            tr,
            controller,
            board,
            employees_input: String::new(),
            salary_input: String::new(),
            lang_input: config.language.clone(),
            window_alpha: config.window_alpha,
            animation_ms: config.animation_ms,
            save_status: None,
            show_settings_modal: false,
            show_formula_modal: false,
            config,
        }
    }

    fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::EmployeesChanged => self
                .controller
                .on_employees_changed(&self.employees_input, &mut self.board),
            UiEvent::SalaryChanged => self
                .controller
                .on_salary_changed(&self.salary_input, &mut self.board),
            UiEvent::ToggleSelected(scheme, option) => {
                self.controller
                    .on_toggle_selected(scheme, option, &mut self.board)
            }
        }
    }

    fn save_settings(&mut self) {
        self.config.language = self.lang_input.clone();
        self.config.window_alpha = self.window_alpha;
        self.config.animation_ms = self.animation_ms;
        self.controller
            .set_duration(self.config.animation_duration());
        let resolved = i18n::resolve_language(None, &self.config.language);
        self.tr =
            i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
        self.save_status = Some(match self.config.save() {
            Ok(()) => self
                .tr
                .lookup("gui.settings.saved")
                .unwrap_or_else(|| "Saved.".to_string()),
            Err(e) => format!("Save error: {e}"),
        });
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui, events: &mut Vec<UiEvent>) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.inputs.heading", "Your organisation"));
        egui::Grid::new("inputs_grid")
            .num_columns(2)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.label(txt("gui.inputs.employees", "Number of employees"));
                if ui.text_edit_singleline(&mut self.employees_input).changed() {
                    events.push(UiEvent::EmployeesChanged);
                }
                ui.end_row();
                ui.label(txt("gui.inputs.salary", "Average salary (£)"));
                if ui.text_edit_singleline(&mut self.salary_input).changed() {
                    events.push(UiEvent::SalaryChanged);
                }
                ui.end_row();
            });
        ui.label(
            egui::RichText::new(txt("gui.inputs.hint", "Empty or invalid entries count as 0."))
                .small(),
        );
    }

    fn ui_results(&mut self, ui: &mut egui::Ui, events: &mut Vec<UiEvent>, now: Instant) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.results.heading", "Estimated annual employer NI savings"));
        egui::Grid::new("results_grid")
            .num_columns(3)
            .striped(true)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                for scheme in SchemeId::ALL {
                    ui.label(tr.scheme_label(scheme));
                    ui.horizontal(|ui| {
                        for option in ToggleOption::ALL {
                            let label = match option {
                                ToggleOption::Yes => txt("gui.toggle.yes", "Yes"),
                                ToggleOption::No => txt("gui.toggle.no", "No"),
                            };
                            let selected = self.controller.state().is_selected(scheme, option);
                            if ui.selectable_label(selected, label).clicked() {
                                events.push(UiEvent::ToggleSelected(scheme, option));
                            }
                        }
                    });
                    ui.label(
                        egui::RichText::new(
                            self.board.text_at(DisplayTarget::Scheme(scheme), now),
                        )
                        .monospace(),
                    );
                    ui.end_row();
                }
            });
        ui.separator();
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(txt("gui.results.total", "Total savings")).size(20.0));
            ui.label(
                egui::RichText::new(self.board.text_at(DisplayTarget::Total, now))
                    .size(24.0)
                    .strong(),
            );
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.app_title", "NI Savings Calculator"));
                ui.separator();
                if ui.button(txt("gui.formula.button", "Formula reference")).clicked() {
                    self.show_formula_modal = true;
                }
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut save_clicked = false;
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(self.lang_input.clone())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                txt("gui.settings.lang.auto", "System"),
                            );
                            ui.selectable_value(&mut self.lang_input, "en-gb".into(), "English (UK)");
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });
                    ui.separator();
                    ui.label(txt("gui.settings.animation", "Transition time (ms)"));
                    ui.add(egui::Slider::new(&mut self.animation_ms, 0..=3000).suffix(" ms"));
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                    ui.separator();
                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        save_clicked = true;
                    }
                    if let Some(msg) = &self.save_status {
                        ui.label(msg);
                    }
                });
            if save_clicked {
                self.save_settings();
            }
        }

        if self.show_formula_modal {
            egui::Window::new(txt("gui.formula.title", "Formula reference"))
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    for scheme in SchemeId::ALL {
                        let key = format!("gui.formula.{}", scheme.key());
                        ui.label(txt(&key, scheme.default_label()));
                    }
                });
        }

        let now = Instant::now();
        let mut events = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.ui_inputs(ui, &mut events);
                    ui.add_space(12.0);
                    self.ui_results(ui, &mut events, now);
                });
        });
        for event in events {
            self.apply(event);
        }

        if self.board.tick(Instant::now()) {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn settled(app: &GuiApp, target: DisplayTarget) -> f64 {
        app.board
            .value_at(target, Instant::now() + Duration::from_secs(10))
    }

    #[test]
    fn typing_inputs_drives_board_targets() {
        let mut app = GuiApp::new(config::Config::default());
        app.employees_input = "100".into();
        app.apply(UiEvent::EmployeesChanged);
        app.salary_input = "30000".into();
        app.apply(UiEvent::SalaryChanged);
        assert!((settled(&app, DisplayTarget::Scheme(SchemeId::Pension)) - 22_500.0).abs() < 1e-6);
        assert!((settled(&app, DisplayTarget::Total) - 47_669.230_769).abs() < 1e-3);
    }

    #[test]
    fn toggle_no_zeroes_scheme_on_board() {
        let mut app = GuiApp::new(config::Config::default());
        app.employees_input = "100".into();
        app.apply(UiEvent::EmployeesChanged);
        app.apply(UiEvent::ToggleSelected(SchemeId::Cycle, ToggleOption::No));
        assert_eq!(settled(&app, DisplayTarget::Scheme(SchemeId::Cycle)), 0.0);
        assert!(app
            .controller
            .state()
            .is_selected(SchemeId::Cycle, ToggleOption::No));
        // 연봉이 0이어도 전기차는 직원 수만으로 계산된다.
        assert!((settled(&app, DisplayTarget::Total) - 5_850.0).abs() < 1e-6);
    }
}
