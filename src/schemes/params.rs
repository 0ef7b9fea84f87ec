/// 회사 부담 국민보험(NI) 요율. 희생된 급여 1파운드당 절감되는 비율.
pub const COMPANY_NI_RATE: f64 = 0.15;

/// 연간 근무일수. 일급 환산에 사용한다.
pub const WORKING_DAYS: f64 = 260.0;

/// 연간 개월 수.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// 제도별 상수 파라미터. 한 번 정의되고 변하지 않는다.
///
/// 제도마다 쓰는 필드가 다르며, 쓰지 않는 필드는 0이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemeParameters {
    /// 참여율(전체 직원 대비 참여 비율, 0~1)
    pub take_up_rate: f64,
    /// 급여 대비 희생 비율 (연금 기여율, 보너스 비율)
    pub salary_rate: f64,
    /// 월 납입액 [£/월] (전기차 리스, 자전거)
    pub monthly_payment: f64,
    /// 참여자 1인당 연간 VAT 절감액 [£]
    pub vat_saving: f64,
    /// 일수 (구매 휴가일, 1인당 손실 근무일)
    pub days: f64,
}

impl SchemeParameters {
    const ZERO: SchemeParameters = SchemeParameters {
        take_up_rate: 0.0,
        salary_rate: 0.0,
        monthly_payment: 0.0,
        vat_saving: 0.0,
        days: 0.0,
    };

    /// 참여 직원 수. 정수로 반올림하지 않는다.
    pub fn participating(&self, num_employees: f64) -> f64 {
        num_employees * self.take_up_rate
    }

    /// 연간 납입액 [£/년].
    pub fn annual_payment(&self) -> f64 {
        self.monthly_payment * MONTHS_PER_YEAR
    }
}

/// 연금: 전 직원이 급여의 5%를 기여한다.
pub const PENSION: SchemeParameters = SchemeParameters {
    take_up_rate: 1.0,
    salary_rate: 0.05,
    ..SchemeParameters::ZERO
};

/// 보너스 희생: 10% 참여, 급여의 20%를 보너스로 본다.
pub const BONUS: SchemeParameters = SchemeParameters {
    take_up_rate: 0.10,
    salary_rate: 0.20,
    ..SchemeParameters::ZERO
};

/// 전기차 리스: 5% 참여, 월 £650.
/// VAT 절감 항은 수식에 남겨두되 가중치 0으로 고정한다.
pub const EV: SchemeParameters = SchemeParameters {
    take_up_rate: 0.05,
    monthly_payment: 650.0,
    vat_saving: 0.0,
    ..SchemeParameters::ZERO
};

/// 자전거 출퇴근: 10% 참여, 월 £100, 참여자당 연 £200 VAT 절감.
pub const CYCLE: SchemeParameters = SchemeParameters {
    take_up_rate: 0.10,
    monthly_payment: 100.0,
    vat_saving: 200.0,
    ..SchemeParameters::ZERO
};

/// 휴가 구매: 10% 참여, 1인당 5일.
pub const HOLIDAY: SchemeParameters = SchemeParameters {
    take_up_rate: 0.10,
    days: 5.0,
    ..SchemeParameters::ZERO
};

/// 재정 웰빙: 10%가 영향을 받고 1인당 4.9일의 근무 손실을 본다.
pub const WELLBEING: SchemeParameters = SchemeParameters {
    take_up_rate: 0.10,
    days: 4.9,
    ..SchemeParameters::ZERO
};
