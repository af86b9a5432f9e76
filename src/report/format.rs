//! Text rendering of KPIs, the narrative summary, captions and dataset cards.

use crate::domain::{DatasetDescriptor, DerivedMetrics, GdpUnit, PreviewKind, PreviewRow};

/// Shown wherever a number is missing or `NaN`.
pub const PLACEHOLDER: &str = "—";

/// Year marked on charts when the covered range includes it.
pub const MARKER_YEAR: i64 = 1994;

pub fn fmt_num(v: f64, places: usize) -> String {
    if v.is_finite() {
        format!("{v:.places$}")
    } else {
        PLACEHOLDER.to_string()
    }
}

/// GDP in the display unit. Raw values are shown unformatted.
pub fn fmt_gdp(v: f64, unit: GdpUnit) -> String {
    if !v.is_finite() {
        return PLACEHOLDER.to_string();
    }
    match unit {
        GdpUnit::Raw => v.to_string(),
        GdpUnit::ZarB => format!("R {v:.1}B"),
    }
}

fn fmt_year(year: Option<i64>) -> String {
    year.map(|y| y.to_string()).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Plain-language strength of a correlation coefficient.
pub fn correlation_label(r: f64) -> &'static str {
    if !r.is_finite() {
        return "no clear link";
    }
    let a = r.abs();
    if a < 0.2 {
        "no clear link"
    } else if a < 0.4 {
        if r > 0.0 { "weak positive" } else { "weak negative" }
    } else if a < 0.6 {
        if r > 0.0 { "moderate positive" } else { "moderate negative" }
    } else if r > 0.0 {
        "strong positive"
    } else {
        "strong negative"
    }
}

pub fn format_kpis(metrics: &DerivedMetrics, unit: GdpUnit) -> String {
    let k = &metrics.kpi;
    let mut out = String::new();
    out.push_str("KPIs:\n");
    out.push_str(&format!("- records        : {}\n", k.records));
    out.push_str(&format!("- unique years   : {}\n", k.unique_years));
    out.push_str(&format!(
        "- inflation      : mean={} std={} range=[{}, {}]\n",
        fmt_num(k.inflation_mean, 2),
        fmt_num(k.inflation_std, 2),
        fmt_num(k.inflation_min, 2),
        fmt_num(k.inflation_max, 2),
    ));
    out.push_str(&format!(
        "- gdp            : mean={} std={} max={}\n",
        fmt_gdp(unit.scale(k.gdp_mean), unit),
        fmt_gdp(unit.scale(k.gdp_std), unit),
        fmt_gdp(unit.scale(k.gdp_max), unit),
    ));
    out.push_str(&format!(
        "- corr(gdp, infl): {} ({})\n",
        fmt_num(k.corr_gdp_inflation, 3),
        correlation_label(k.corr_gdp_inflation)
    ));
    out
}

/// The short narrative shown above the charts.
pub fn format_story(metrics: &DerivedMetrics) -> String {
    let years = &metrics.series.years;
    let (Some(first), Some(last)) = (years.first(), years.last()) else {
        return "No data loaded.\n".to_string();
    };

    let x = &metrics.extremes;
    let eras = &metrics.eras;
    let mut out = String::new();
    out.push_str(&format!("We cover {first}-{last} ({} years).\n", years.len()));
    out.push_str(&format!(
        "Average inflation: {}%. High: {} (~{}%). Low: {} (~{}%).\n",
        fmt_num(metrics.kpi.inflation_mean, 2),
        fmt_year(x.worst_infl.year),
        fmt_num(x.worst_infl.value, 2),
        fmt_year(x.best_infl.year),
        fmt_num(x.best_infl.value, 2),
    ));
    out.push_str(&format!(
        "Strongest GDP growth: {} ({}%). Weakest: {} ({}%).\n",
        fmt_year(x.best_gdp.year),
        fmt_num(x.best_gdp.value, 2),
        fmt_year(x.worst_gdp.year),
        fmt_num(x.worst_gdp.value, 2),
    ));
    out.push_str(&format!(
        "Cumulative GDP growth over the period: {}.\n",
        fmt_num(metrics.extra.cum_gdp.last().copied().unwrap_or(0.0), 2)
    ));
    if eras.counts.pre_years > 0 && eras.counts.post_years > 0 {
        out.push_str(&format!(
            "Before {p}: GDP {gp}%, inflation {ip}% on average ({n} years). From {p}: GDP {ga}%, inflation {ia}% ({m} years).\n",
            p = eras.pivot,
            gp = fmt_num(eras.means.gdp_pre, 2),
            ip = fmt_num(eras.means.infl_pre, 2),
            n = eras.counts.pre_years,
            ga = fmt_num(eras.means.gdp_post, 2),
            ia = fmt_num(eras.means.infl_post, 2),
            m = eras.counts.post_years,
        ));
    }
    out.push_str(&format!(
        "GDP and inflation show a {} relationship (r ≈ {}).\n",
        correlation_label(metrics.kpi.corr_gdp_inflation),
        fmt_num(metrics.kpi.corr_gdp_inflation, 3),
    ));
    out
}

/// One caption per chart, keyed by chart id.
pub fn captions(metrics: &DerivedMetrics) -> Vec<(&'static str, String)> {
    let years = &metrics.series.years;
    let (Some(&first), Some(&last)) = (years.first(), years.last()) else {
        return Vec::new();
    };
    let marker = if first <= MARKER_YEAR && last >= MARKER_YEAR {
        format!("; dashed line marks {MARKER_YEAR}")
    } else {
        String::new()
    };
    let window = metrics.rolling.window;

    vec![
        ("gdp", format!("GDP from {first}-{last}{marker}.")),
        ("infl", format!("Inflation from {first}-{last}{marker}.")),
        ("overlay", "GDP (left) and inflation (right) together; compare co-movement.".to_string()),
        ("scatter", "Each year: x = inflation (%), y = GDP growth (%). Trend summarizes the tendency.".to_string()),
        ("yoy", "GDP year-over-year change (Δ). Above 0 = expansion; below 0 = contraction.".to_string()),
        ("donut", "Share of positive / negative / zero GDP-YoY years.".to_string()),
        ("decade", "Decade averages for GDP & inflation.".to_string()),
        ("rolling", format!("{window}-year rolling means (smoother trends).")),
        ("hist", "Histogram of inflation (%); wider spread means more volatility.".to_string()),
        ("cum", "Cumulative sum of GDP growth from the first year.".to_string()),
        ("vol", format!("Inflation volatility ({window}-year rolling std).")),
        ("yoysc", "YoY scatter: x = Δinflation, y = ΔGDP.".to_string()),
    ]
}

pub fn format_captions(metrics: &DerivedMetrics) -> String {
    let mut out = String::new();
    for (id, text) in captions(metrics) {
        out.push_str(&format!("{id:<8} {text}\n"));
    }
    out
}

/// Sign tally plus decade means, the two small summary charts.
pub fn format_breakdown(metrics: &DerivedMetrics) -> String {
    let s = metrics.yoy.summary;
    let mut out = String::new();
    out.push_str(&format!(
        "GDP YoY: {} positive / {} negative / {} zero\n",
        s.positive, s.negative, s.zero
    ));
    out.push_str(&format!("{:<8} {:>10} {:>10}\n", "decade", "gdp", "inflation"));
    for ((label, g), i) in metrics
        .decades
        .labels
        .iter()
        .zip(&metrics.decades.gdp_mean)
        .zip(&metrics.decades.infl_mean)
    {
        out.push_str(&format!("{label:<8} {:>10} {:>10}\n", fmt_num(*g, 2), fmt_num(*i, 2)));
    }
    let r = &metrics.regression;
    out.push_str(&format!(
        "Trend: gdp = {} + {} * inflation over [{}, {}] (gdp {} to {})\n",
        fmt_num(r.intercept, 3),
        fmt_num(r.slope, 3),
        fmt_num(r.x_min, 2),
        fmt_num(r.x_max, 2),
        fmt_num(r.predict(r.x_min), 2),
        fmt_num(r.predict(r.x_max), 2),
    ));
    out
}

pub fn format_dataset_card(d: &DatasetDescriptor) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", d.name));
    out.push_str(&format!("  Rows: {}\n", d.row_count));
    out.push_str(&format!("  Years: {}-{}\n", fmt_year(d.year_min), fmt_year(d.year_max)));
    out.push_str(&format!("  Non-null: {}, Nulls: {}\n", d.non_null_points, d.null_points));
    out.push_str(&format!("  Columns: {}\n", d.columns_preview.join(", ")));
    out
}

pub fn format_dataset_cards(metrics: &DerivedMetrics) -> String {
    match &metrics.meta.datasets {
        Some(ds) => format!("{}\n{}", format_dataset_card(&ds.gdp), format_dataset_card(&ds.inflation)),
        None => "No dataset descriptors in payload.\n".to_string(),
    }
}

pub fn format_preview(kind: PreviewKind, rows: &[PreviewRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Preview ({}):\n", kind.as_str()));
    out.push_str(&format!("{:>6} {:>12}\n", "year", "value"));
    for r in rows {
        out.push_str(&format!("{:>6} {:>12}\n", r.year, fmt_num(r.value, 3)));
    }
    if rows.is_empty() {
        out.push_str("No rows.\n");
    }
    out
}
