pub const WATTS_PER_KILOWATT: u32 = 1_000;
pub const HOURS_PER_DAY: u32 = 24;
/// Billing month used throughout; no calendar awareness.
pub const DAYS_PER_MONTH: u32 = 30;
pub const DAYS_PER_YEAR: u32 = 365;
pub const MONTHS_PER_YEAR: u32 = 12;
pub const PERCENT: f64 = 100.;

/// Decimal places shown for energy (kWh) and percentage figures.
pub const ENERGY_DECIMAL_PLACES: i32 = 1;
/// Decimal places shown for money figures.
pub const MONEY_DECIMAL_PLACES: i32 = 2;

/// Round to the given number of decimal places, sending exact ties to the even neighbour.
///
/// Ties are judged on the exact value held, not on the scaled product: 30.450000000000003 is
/// above 30.45 and rounds to 30.5 even though scaling it by 10 lands exactly on 304.5.
///
/// Non-finite values pass through untouched so that an infinite payback period
/// survives display rounding.
pub fn round_to_places(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    // exact error of the scaled product
    let residual = value.mul_add(factor, -scaled);

    let rounded = if scaled.fract().abs() == 0.5 && residual != 0. {
        if residual > 0. {
            scaled.ceil()
        } else {
            scaled.floor()
        }
    } else {
        scaled.round_ties_even()
    };

    rounded / factor
}

pub fn round_energy(kwh: f64) -> f64 {
    round_to_places(kwh, ENERGY_DECIMAL_PLACES)
}

pub fn round_percent(percent: f64) -> f64 {
    round_to_places(percent, ENERGY_DECIMAL_PLACES)
}

pub fn round_money(amount: f64) -> f64 {
    round_to_places(amount, MONEY_DECIMAL_PLACES)
}
