use clap::Parser;
use ni_savings_calculator::{
    app,
    controller::{RecomputeController, SavingsEvents},
    display::Transition,
    i18n, logging,
    schemes::SchemeId,
    state::ToggleOption,
    ui_cli,
};

/// 회사 NI 절감액 계산기 (터미널).
#[derive(Debug, Parser)]
#[command(name = "ni_savings_calculator_cli", version, about = "Employer NI savings calculator")]
struct Args {
    /// Number of employees (invalid or empty counts as 0)
    #[arg(short, long)]
    employees: Option<String>,
    /// Average salary in pounds (invalid or empty counts as 0)
    #[arg(short, long)]
    salary: Option<String>,
    /// Exclude a scheme from the total (repeatable)
    #[arg(short, long, value_enum)]
    disable: Vec<SchemeId>,
    /// Language: auto, en-gb, ko-kr
    #[arg(short = 'L', long)]
    lang: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    logging::init();
    if let Err(err) = try_run(Args::parse()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn try_run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = app::load_config();
    let lang = i18n::resolve_language(args.lang.as_deref(), &cfg.language);
    let mut tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    let mut controller = RecomputeController::new(cfg.animation_duration());

    let mut sink: Vec<Transition> = Vec::new();
    for scheme in &args.disable {
        controller.on_toggle_selected(*scheme, ToggleOption::No, &mut sink);
    }
    if let Some(raw) = &args.employees {
        controller.on_employees_changed(raw, &mut sink);
    }
    if let Some(raw) = &args.salary {
        controller.on_salary_changed(raw, &mut sink);
    }
    controller.recompute(&mut sink);

    if args.employees.is_some() || args.salary.is_some() {
        let mut out = std::io::stdout();
        ui_cli::print_breakdown(&mut out, &tr, controller.inputs(), &controller)?;
        return Ok(());
    }

    app::run(&mut cfg, &mut tr, &mut controller)?;
    Ok(())
}
