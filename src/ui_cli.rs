use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::controller::{RecomputeController, SavingsEvents};
use crate::display::{format_currency, DisplayTarget, Transition};
use crate::i18n::{fill_template, keys, Translator};
use crate::inputs::Inputs;
use crate::schemes::SchemeId;
use crate::state::ToggleOption;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Employees,
    Salary,
    Toggle,
    Breakdown,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_EMPLOYEES,
        keys::MAIN_MENU_SALARY,
        keys::MAIN_MENU_TOGGLE,
        keys::MAIN_MENU_BREAKDOWN,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match parse_menu_choice(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn parse_menu_choice(sel: &str) -> Option<MenuChoice> {
    match sel.trim() {
        "1" => Some(MenuChoice::Employees),
        "2" => Some(MenuChoice::Salary),
        "3" => Some(MenuChoice::Toggle),
        "4" => Some(MenuChoice::Breakdown),
        "5" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 직원 수 입력을 처리한다. 잘못된 입력은 0으로 계산된다.
pub fn handle_employees<W: Write>(
    tr: &Translator,
    controller: &mut RecomputeController,
    out: &mut W,
) -> Result<(), AppError> {
    let raw = read_line(&tr.t(keys::PROMPT_EMPLOYEES))?;
    let mut changes: Vec<Transition> = Vec::new();
    controller.on_employees_changed(raw.trim(), &mut changes);
    print_changes(out, tr, &changes)
}

/// 평균 연봉 입력을 처리한다.
pub fn handle_salary<W: Write>(
    tr: &Translator,
    controller: &mut RecomputeController,
    out: &mut W,
) -> Result<(), AppError> {
    let raw = read_line(&tr.t(keys::PROMPT_SALARY))?;
    let mut changes: Vec<Transition> = Vec::new();
    controller.on_salary_changed(raw.trim(), &mut changes);
    print_changes(out, tr, &changes)
}

/// 제도 포함/제외 토글을 처리한다.
pub fn handle_toggle<W: Write>(
    tr: &Translator,
    controller: &mut RecomputeController,
    out: &mut W,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::TOGGLE_HEADING));
    for (i, scheme) in SchemeId::ALL.iter().enumerate() {
        let mark = if controller.state().is_enabled(*scheme) {
            "[y]"
        } else {
            "[n]"
        };
        println!("{}) {} {mark}", i + 1, tr.scheme_label(*scheme));
    }
    let sel = read_line(&tr.t(keys::PROMPT_SCHEME))?;
    let scheme = match parse_scheme_number(&sel) {
        Some(s) => s,
        None => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            return Ok(());
        }
    };
    let answer = read_line(&tr.t(keys::PROMPT_YES_NO))?;
    let option = match parse_toggle_option(&answer) {
        Some(o) => o,
        None => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            return Ok(());
        }
    };
    let mut changes: Vec<Transition> = Vec::new();
    controller.on_toggle_selected(scheme, option, &mut changes);
    print_changes(out, tr, &changes)
}

fn parse_scheme_number(sel: &str) -> Option<SchemeId> {
    let n = sel.trim().parse::<usize>().ok()?;
    n.checked_sub(1).and_then(|i| SchemeId::ALL.get(i).copied())
}

fn parse_toggle_option(answer: &str) -> Option<ToggleOption> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" | "예" => Some(ToggleOption::Yes),
        "n" | "no" | "아니오" => Some(ToggleOption::No),
        _ => None,
    }
}

/// 값이 바뀐 대상만 "새값 (이전값)" 형태로 출력한다. 합계는 항상 출력한다.
pub fn print_changes<W: Write>(
    out: &mut W,
    tr: &Translator,
    changes: &[Transition],
) -> Result<(), AppError> {
    for change in changes {
        let label = target_label(tr, change.target);
        if change.target == DisplayTarget::Total {
            writeln!(
                out,
                "{label}: {} ({} {})",
                format_currency(change.to),
                tr.t(keys::BREAKDOWN_CHANGE),
                format_currency(change.from)
            )?;
        } else if change.from != change.to {
            writeln!(
                out,
                "  {label}: {} ({} {})",
                format_currency(change.to),
                tr.t(keys::BREAKDOWN_CHANGE),
                format_currency(change.from)
            )?;
        }
    }
    Ok(())
}

/// 현재 결과를 제도별로 출력한다.
pub fn print_breakdown<W: Write>(
    out: &mut W,
    tr: &Translator,
    inputs: Inputs,
    controller: &RecomputeController,
) -> Result<(), AppError> {
    let result = controller.latest();
    writeln!(out, "{}", tr.t(keys::BREAKDOWN_HEADING))?;
    writeln!(
        out,
        "{}",
        fill_template(
            &tr.t(keys::BREAKDOWN_INPUTS),
            &[
                ("employees", inputs.num_employees.to_string()),
                ("salary", format_currency(inputs.avg_salary)),
            ],
        )
    )?;
    for (scheme, amount) in result.iter() {
        let suffix = if controller.state().is_enabled(scheme) {
            String::new()
        } else {
            format!(" {}", tr.t(keys::BREAKDOWN_DISABLED))
        };
        writeln!(
            out,
            "  {:<22} {:>14}{suffix}",
            tr.scheme_label(scheme),
            format_currency(amount)
        )?;
    }
    writeln!(
        out,
        "  {:<22} {:>14}",
        tr.t(keys::BREAKDOWN_TOTAL),
        format_currency(result.total())
    )?;
    Ok(())
}

fn target_label(tr: &Translator, target: DisplayTarget) -> String {
    match target {
        DisplayTarget::Scheme(s) => tr.scheme_label(s),
        DisplayTarget::Total => tr.t(keys::BREAKDOWN_TOTAL),
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {} ({})",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language,
        tr.language_code()
    );
    let lang = read_line(&tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    match lang.trim().to_lowercase().as_str() {
        "" => {}
        code @ ("auto" | "en" | "en-gb" | "ko" | "ko-kr") => cfg.language = code.to_string(),
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    let ms = read_line(&tr.t(keys::SETTINGS_PROMPT_ANIMATION))?;
    if !ms.trim().is_empty() {
        match ms.trim().parse::<u64>() {
            Ok(v) => cfg.animation_ms = v,
            Err(_) => println!("{}", tr.t(keys::SETTINGS_INVALID)),
        }
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_and_scheme_selection_parse() {
        assert_eq!(parse_menu_choice(" 4\n"), Some(MenuChoice::Breakdown));
        assert_eq!(parse_menu_choice("9"), None);
        assert_eq!(parse_scheme_number("3"), Some(SchemeId::Ev));
        assert_eq!(parse_scheme_number("0"), None);
        assert_eq!(parse_scheme_number("7"), None);
        assert_eq!(parse_toggle_option("No\n"), Some(ToggleOption::No));
        assert_eq!(parse_toggle_option("maybe"), None);
    }

    #[test]
    fn breakdown_lists_every_scheme_and_total() {
        let tr = Translator::new("en-gb");
        let mut controller = RecomputeController::default();
        let mut sink: Vec<Transition> = Vec::new();
        controller.on_employees_changed("100", &mut sink);
        controller.on_salary_changed("30000", &mut sink);
        controller.on_toggle_selected(SchemeId::Ev, ToggleOption::No, &mut sink);

        let mut buf = Vec::new();
        print_breakdown(&mut buf, &tr, controller.inputs(), &controller).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("100 employees, average salary £30,000"));
        assert!(text.contains("£22,500"));
        assert!(text.contains("(excluded)"));
        assert!(text.contains("£41,819"), "{text}");
    }

    #[test]
    fn changes_skip_unchanged_schemes() {
        let tr = Translator::new("en-gb");
        let changes = [
            Transition {
                target: DisplayTarget::Scheme(SchemeId::Pension),
                from: 0.0,
                to: 0.0,
            },
            Transition {
                target: DisplayTarget::Scheme(SchemeId::Cycle),
                from: 0.0,
                to: 3800.0,
            },
            Transition {
                target: DisplayTarget::Total,
                from: 0.0,
                to: 3800.0,
            },
        ];
        let mut buf = Vec::new();
        print_changes(&mut buf, &tr, &changes).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(!text.contains("Pension"));
        assert!(text.contains("Cycle to Work: £3,800 (was £0)"));
        assert!(text.contains("Total savings: £3,800 (was £0)"));
    }
}
