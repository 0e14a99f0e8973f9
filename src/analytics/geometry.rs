// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ChartDataPoint;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Canvas size in plot units. Origin is top-left, so larger values go up by
/// getting a smaller `y`. `padding` must be below `width / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for PlotArea {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 150.0,
            padding: 20.0,
        }
    }
}

impl PlotArea {
    fn mid_y(&self) -> f64 {
        self.height / 2.0
    }
}

/// Map a value series onto plot coordinates.
///
/// A single point cannot show a trend and is drawn as a flat line across the
/// plot at mid height. A series whose values are all equal is also flat.
pub fn project_points(series: &[ChartDataPoint], area: &PlotArea) -> Vec<Point> {
    let PlotArea {
        width,
        height,
        padding,
    } = *area;
    match series.len() {
        0 => Vec::new(),
        1 => vec![
            Point {
                x: padding,
                y: area.mid_y(),
            },
            Point {
                x: width - padding,
                y: area.mid_y(),
            },
        ],
        n => {
            let vals: Vec<f64> = series
                .iter()
                .map(|p| p.val.to_f64().unwrap_or_default())
                .collect();
            let min = vals.iter().copied().fold(f64::INFINITY, f64::min);
            let max = vals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let range = max - min;
            let span_x = width - 2.0 * padding;
            let span_y = height - 2.0 * padding;
            vals.iter()
                .enumerate()
                .map(|(i, v)| {
                    let x = i as f64 / (n - 1) as f64 * span_x + padding;
                    let y = if range == 0.0 {
                        area.mid_y()
                    } else {
                        height - padding - (v - min) / range * span_y
                    };
                    Point { x, y }
                })
                .collect()
        }
    }
}

/// Closed polygon for a filled area under the line: the points, then the
/// bottom-right and bottom-left corners at `y = height`.
pub fn area_path(points: &[Point], area: &PlotArea) -> Vec<Point> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Vec::new();
    };
    let mut path = points.to_vec();
    path.push(Point {
        x: last.x,
        y: area.height,
    });
    path.push(Point {
        x: first.x,
        y: area.height,
    });
    path
}

/// `"x,y x,y ..."`, the form an SVG polyline `points` attribute takes.
pub fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// SVG path data for [`area_path`], closed with `Z`. Empty when there are no
/// points.
pub fn area_path_d(points: &[Point], area: &PlotArea) -> String {
    let path = area_path(points, area);
    let mut out = String::new();
    for (i, p) in path.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { " L" };
        out.push_str(&format!("{} {},{}", cmd, p.x, p.y));
    }
    if !out.is_empty() {
        out.push_str(" Z");
    }
    out
}
