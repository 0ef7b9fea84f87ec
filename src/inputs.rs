//! 입력 필드의 원시 문자열을 계산 가능한 값으로 정리한다.
//!
//! 잘못된 입력이나 빈 입력은 오류로 보고하지 않고 0으로 처리한다.

/// 정리된 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Inputs {
    /// 직원 수
    pub num_employees: u64,
    /// 평균 연봉 [£]
    pub avg_salary: f64,
}

impl Inputs {
    pub fn new(num_employees: u64, avg_salary: f64) -> Self {
        Self {
            num_employees,
            avg_salary: sanitize_amount(avg_salary),
        }
    }

    /// 두 입력 필드의 원시 문자열로부터 입력을 만든다.
    pub fn from_raw(employees_raw: &str, salary_raw: &str) -> Self {
        Self {
            num_employees: parse_employees(employees_raw),
            avg_salary: parse_salary(salary_raw),
        }
    }

    /// 계산식에 넣을 직원 수(실수).
    pub fn employees(&self) -> f64 {
        self.num_employees as f64
    }
}

/// 직원 수를 읽는다. 앞쪽의 정수 부분만 사용한다 ("12명" → 12, "1.9" → 1).
/// 숫자로 시작하지 않거나 음수이면 0.
pub fn parse_employees(raw: &str) -> u64 {
    let (negative, rest) = split_sign(raw.trim_start());
    let digits = leading_digits(rest);
    if negative || digits.is_empty() {
        return 0;
    }
    digits.parse::<u64>().unwrap_or(u64::MAX)
}

/// 평균 연봉을 읽는다. 앞쪽의 실수 부분만 사용한다 ("30000.5abc" → 30000.5, "3e4" → 30000).
/// 실패, 음수, 무한대는 0.
pub fn parse_salary(raw: &str) -> f64 {
    let s = raw.trim_start();
    let len = float_prefix_len(s);
    if len == 0 {
        return 0.0;
    }
    let value = s[..len].parse::<f64>().unwrap_or(0.0);
    sanitize_amount(value)
}

/// 음수/NaN/무한대를 0으로 정리한다.
pub fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

fn leading_digits(s: &str) -> &str {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    &s[..end]
}

/// `[+-]digits[.digits][(e|E)[+-]digits]` 형태의 접두부 길이. 숫자가 하나도 없으면 0.
fn float_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        if mantissa_digits > 0 {
            i = j;
        }
    }
    if mantissa_digits == 0 {
        return 0;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employees_invalid_or_empty_is_zero() {
        assert_eq!(parse_employees(""), 0);
        assert_eq!(parse_employees("   "), 0);
        assert_eq!(parse_employees("abc"), 0);
        assert_eq!(parse_employees("-5"), 0);
    }

    #[test]
    fn employees_uses_leading_integer() {
        assert_eq!(parse_employees("100"), 100);
        assert_eq!(parse_employees(" 42 staff"), 42);
        assert_eq!(parse_employees("1.9"), 1);
        assert_eq!(parse_employees("+7"), 7);
    }

    #[test]
    fn salary_invalid_or_empty_is_zero() {
        assert_eq!(parse_salary(""), 0.0);
        assert_eq!(parse_salary("."), 0.0);
        assert_eq!(parse_salary("£30000"), 0.0);
        assert_eq!(parse_salary("-30000"), 0.0);
        assert_eq!(parse_salary("1e999"), 0.0);
    }

    #[test]
    fn salary_uses_leading_real() {
        assert_eq!(parse_salary("30000"), 30000.0);
        assert_eq!(parse_salary("30000.5abc"), 30000.5);
        assert_eq!(parse_salary(".5"), 0.5);
        assert_eq!(parse_salary("3e4"), 30000.0);
        assert_eq!(parse_salary("25e"), 25.0);
        assert_eq!(parse_salary("12.k"), 12.0);
    }

    #[test]
    fn from_raw_sanitizes_both_fields() {
        let inputs = Inputs::from_raw("ten", "");
        assert_eq!(inputs, Inputs::default());
        let inputs = Inputs::from_raw("100", "30000");
        assert_eq!(inputs.num_employees, 100);
        assert_eq!(inputs.avg_salary, 30000.0);
    }
}
