/// Flat fees that are added once per stay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fees {
    pub cleaning: f64,
    pub service: f64,
}

impl Fees {
    pub const DEFAULT_CLEANING: f64 = 150.0;
    pub const DEFAULT_SERVICE: f64 = 280.0;
}

impl Default for Fees {
    fn default() -> Self {
        Self {
            cleaning: Self::DEFAULT_CLEANING,
            service: Self::DEFAULT_SERVICE,
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceBreakdown {
    pub nightly_rate : f64,
    pub nights       : u32,
    pub subtotal     : f64,
    pub cleaning_fee : f64,
    pub service_fee  : f64,
    pub total        : f64,
}

impl PriceBreakdown {
    /// Without any night nothing is charged, not even the fees.
    pub fn calculate(nightly_rate: f64, nights: u32, fees: &Fees) -> Self {
        if nights == 0 {
            return Self {
                nightly_rate,
                ..Default::default()
            };
        }
        let subtotal = f64::from(nights) * nightly_rate;
        Self {
            nightly_rate,
            nights,
            subtotal,
            cleaning_fee: fees.cleaning,
            service_fee: fees.service,
            total: subtotal + fees.cleaning + fees.service,
        }
    }
}

/// Formats an amount with thousands separators.
///
/// Cents are only shown if there are any.
pub fn format_amount(amount: f64) -> String {
    // saturating cast, NaN becomes 0
    let cents = (amount * 100.0).round() as i64;
    let (whole, fraction) = (cents.unsigned_abs() / 100, cents.unsigned_abs() % 100);
    let digits = whole.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    if cents < 0 {
        formatted.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }
    if fraction != 0 {
        formatted.push_str(&format!(".{fraction:02}"));
    }
    formatted
}
