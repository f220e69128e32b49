pub mod format;
pub mod locale;

use tokio::sync::watch;
use tracing::debug;

use crate::market_data::types::PricedInstrument;
use crate::state::snapshot::MarketSnapshot;

use format::{Direction, change_indicator, format_price};
use locale::Locale;

// Fixed dashboard copy.
const BRAND: &str = "Golden Price";
const NOTICE: &str =
    "دیتا ممکن است با تاخیر آپدیت شوند چون سامانه در حال تست است. کش حداقل ۳۰ دقیقه ای وجود دارد.";
const LOADING_TEXT: &str = "در حال دریافت داده‌ها...";
const GOLD_TITLE: &str = "قیمت طلا و سکه";
const CRYPTO_TITLE: &str = "ارزهای دیجیتال";
const CURRENCY_TITLE: &str = "قیمت ارزها";
const LAST_UPDATED_LABEL: &str = "آخرین بروزرسانی";
const RIAL_SUFFIX: &str = "ریال";
const FOOTER: &str =
    "تمامی دیتاها از طریق سامانه https://brsapi.ir/ استخراج شده است و دامنه مسئولیتی در مورد دیتای خروجی ندارد.";

/// Reprints the dashboard whenever the refresher publishes a snapshot.
/// Pure consumer of the watch channel, no state of its own.
pub async fn run_renderer(mut snapshot_rx: watch::Receiver<MarketSnapshot>, locale: &'static Locale) {
    loop {
        let rendered = render_dashboard(&snapshot_rx.borrow_and_update(), locale);
        println!("{rendered}");

        if snapshot_rx.changed().await.is_err() {
            debug!("snapshot channel closed, renderer exiting");
            break;
        }
    }
}

/// How a section attaches its currency unit to a price.
#[derive(Clone, Copy)]
enum PriceStyle {
    RialSuffix,
    DollarPrefix,
}

/// Render one snapshot as terminal cards. Pure: same snapshot, same text.
pub fn render_dashboard(snapshot: &MarketSnapshot, locale: &Locale) -> String {
    let mut out = String::new();

    out.push_str(&format!("== {BRAND} ==\n{NOTICE}\n"));

    if let Some(error) = &snapshot.error {
        out.push_str(&format!("\n!! {error}\n"));
    }

    if snapshot.loading {
        out.push_str(&format!("\n{LOADING_TEXT}\n"));
    }

    let last_updated = snapshot
        .last_updated
        .map(|at| format!("{LAST_UPDATED_LABEL}: {}", locale.localize_time(at)));

    out.push_str(&render_section(
        GOLD_TITLE,
        &snapshot.gold,
        PriceStyle::RialSuffix,
        locale,
        last_updated.as_deref(),
    ));
    out.push_str(&render_section(
        CRYPTO_TITLE,
        &snapshot.cryptocurrency,
        PriceStyle::DollarPrefix,
        locale,
        None,
    ));
    out.push_str(&render_section(
        CURRENCY_TITLE,
        &snapshot.currency,
        PriceStyle::RialSuffix,
        locale,
        None,
    ));

    out.push_str(&format!("\n{FOOTER}\n"));
    out
}

fn render_section(
    title: &str,
    items: &[PricedInstrument],
    style: PriceStyle,
    locale: &Locale,
    header_extra: Option<&str>,
) -> String {
    let mut out = String::new();

    match header_extra {
        Some(extra) => out.push_str(&format!("\n── {title} ── {extra}\n")),
        None => out.push_str(&format!("\n── {title} ──\n")),
    }

    for item in items {
        out.push_str(&format!(
            "  {:<24} {}  {}\n",
            item.name,
            price_cell(item, style, locale),
            indicator_cell(item.change_percent),
        ));
    }

    out
}

fn price_cell(item: &PricedInstrument, style: PriceStyle, locale: &Locale) -> String {
    match style {
        PriceStyle::RialSuffix => format!("{} {RIAL_SUFFIX}", format_price(item.price, locale)),
        PriceStyle::DollarPrefix => format!("${}", format_price(item.price, locale)),
    }
}

fn indicator_cell(change_percent: f64) -> String {
    let indicator = change_indicator(change_percent);
    let glyph = match indicator.direction {
        Direction::Up => "▲",
        Direction::Down => "▼",
    };
    format!("{glyph} {}%", indicator.magnitude)
}
