/// Production base URL of the v3 API. Paths are appended verbatim.
pub const API_ENDPOINT: &str = "https://payment.yandex.net/api/v3/";

/// Header carrying the per-request idempotence key on every POST.
pub const IDEMPOTENCE_KEY_HEADER: &str = "Idempotence-Key";

/// Tax system codes (`receipt.tax_system_code`).
pub mod tax_system {
    pub const GENERAL: u8 = 1;
    /// Simplified system, income.
    pub const USN_INCOME: u8 = 2;
    /// Simplified system, income minus expenses.
    pub const USN_PROFIT: u8 = 3;
    /// Unified tax on imputed income.
    pub const ENVD: u8 = 4;
    /// Unified agricultural tax.
    pub const ESN: u8 = 5;
    pub const PATENT: u8 = 6;
}

/// VAT codes (`receipt.items[].vat_code`).
pub mod vat_code {
    pub const WITHOUT_VAT: u8 = 1;
    pub const VAT_0: u8 = 2;
    pub const VAT_10: u8 = 3;
    pub const VAT_20: u8 = 4;
    /// Calculated rate 10/110.
    pub const VAT_10_110: u8 = 5;
    /// Calculated rate 20/120.
    pub const VAT_20_120: u8 = 6;
}
