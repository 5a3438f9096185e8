//! Locale-aware formatting of numbers, currencies, and dates.

mod composite;
mod datetime;
mod number;

pub use composite::{FormatItem, format_dotnet_number};
pub use datetime::{
    DateTimeKind, DateTimeStyle, PatternDialect, format_date_pattern, format_dotnet_date,
    format_temporal, skeleton_style,
};
pub use number::{
    CurrencyFormatter, DecimalPattern, NumberFormatter, NumericStyle, NumericStyleOptions,
    format_compact, format_currency, format_integer, format_number, format_percent, format_plain,
    format_scientific,
};
