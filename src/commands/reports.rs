// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{Analysis, DEFAULT_TOP_CATEGORIES, PlotArea};
use crate::config::AppConfig;
use crate::models::LedgerEntry;
use crate::store::EntryStore;
use crate::utils::{criteria_from, fmt_money, maybe_print_json, pretty_table};
use anyhow::{Result, anyhow};

pub fn handle(store: &dyn EntryStore, cfg: &AppConfig, m: &clap::ArgMatches) -> Result<()> {
    let Some((name, sub)) = m.subcommand() else {
        return Ok(());
    };
    let entries = store.fetch()?;
    let analysis = analyze(&entries, sub)?;
    match name {
        "summary" => summary(&analysis, cfg, sub)?,
        "trend" => trend(&analysis, cfg, sub)?,
        "categories" => categories(&analysis, cfg, sub)?,
        "chart" => chart(&analysis, sub)?,
        _ => {}
    }
    Ok(())
}

/// Run the pipeline over `entries` with the filter flags of `sub`.
pub fn analyze<'a>(entries: &'a [LedgerEntry], sub: &clap::ArgMatches) -> Result<Analysis<'a>> {
    let criteria = criteria_from(sub)?;
    let limit = sub
        .try_get_one::<usize>("limit")
        .ok()
        .flatten()
        .copied()
        .unwrap_or(DEFAULT_TOP_CATEGORIES);
    tracing::debug!(?criteria, limit, "analyzing view");
    Ok(Analysis::compute(entries, &criteria, limit))
}

/// Plot area from `--width/--height/--padding`.
pub fn plot_area(sub: &clap::ArgMatches) -> Result<PlotArea> {
    let mut area = PlotArea::default();
    if let Ok(Some(w)) = sub.try_get_one::<f64>("width") {
        area.width = *w;
    }
    if let Ok(Some(h)) = sub.try_get_one::<f64>("height") {
        area.height = *h;
    }
    if let Ok(Some(p)) = sub.try_get_one::<f64>("padding") {
        area.padding = *p;
    }
    if area.width <= 0.0 || area.height <= 0.0 || area.padding < 0.0 {
        return Err(anyhow!("Width and height must be positive, padding non-negative"));
    }
    if area.padding * 2.0 >= area.width || area.padding * 2.0 >= area.height {
        return Err(anyhow!("Padding must be less than half the width and height"));
    }
    Ok(area)
}

fn summary(a: &Analysis<'_>, cfg: &AppConfig, sub: &clap::ArgMatches) -> Result<()> {
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &a.metrics)? {
        return Ok(());
    }
    let m = &a.metrics;
    let data = vec![vec![
        fmt_money(&m.balance, &cfg.currency, &cfg.locale),
        fmt_money(&m.income, &cfg.currency, &cfg.locale),
        fmt_money(&m.expense, &cfg.currency, &cfg.locale),
        m.count.to_string(),
    ]];
    println!(
        "{}",
        pretty_table(&["Balance", "Income", "Expense", "Entries"], data)
    );
    Ok(())
}

fn trend(a: &Analysis<'_>, cfg: &AppConfig, sub: &clap::ArgMatches) -> Result<()> {
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &a.trend)? {
        return Ok(());
    }
    let data: Vec<Vec<String>> = a
        .trend
        .iter()
        .map(|p| vec![p.date.clone(), fmt_money(&p.val, &cfg.currency, &cfg.locale)])
        .collect();
    println!("{}", pretty_table(&["Date", "Running balance"], data));
    Ok(())
}

fn categories(a: &Analysis<'_>, cfg: &AppConfig, sub: &clap::ArgMatches) -> Result<()> {
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &a.top_categories)? {
        return Ok(());
    }
    let data: Vec<Vec<String>> = a
        .top_categories
        .iter()
        .map(|c| {
            vec![
                c.category.clone(),
                fmt_money(&c.total, &cfg.currency, &cfg.locale),
                format!("{:.1}%", c.pct),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Spent", "Share"], data));
    Ok(())
}

fn chart(a: &Analysis<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let chart = a.chart(&plot_area(sub)?);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &chart)? {
        return Ok(());
    }
    let first = a.trend.first().map(|p| p.date.as_str()).unwrap_or("");
    let last = a.trend.last().map(|p| p.date.as_str()).unwrap_or("");
    println!(
        "{}",
        pretty_table(
            &["Field", "Value"],
            vec![
                vec!["viewBox".into(), format!("0 0 {} {}", chart.area.width, chart.area.height)],
                vec!["points".into(), chart.polyline.clone()],
                vec!["area".into(), chart.area_path.clone()],
                vec!["from".into(), first.to_string()],
                vec!["to".into(), last.to_string()],
            ],
        )
    );
    Ok(())
}
