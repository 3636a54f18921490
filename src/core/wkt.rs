//! GeoJSON geometry to Well-Known Text
//!
//! Output uses the `TAG (…)` layout: one space after the tag, coordinates
//! of a position joined by spaces, positions joined by `", "`, and each ring
//! or part wrapped in its own parentheses. Multi-points list bare positions.
//! Line strings, polygons, multi-geometries and collections with no members
//! are written as `TAG EMPTY`. A point parsed from GeoJSON always carries a
//! position, since `geojson` rejects positions shorter than two ordinates.
//!
//! Positions are written with every ordinate they carry; no `Z`/`M`
//! qualifier is added. Ordinates use JavaScript number notation: the
//! shortest round-trip digits, plain decimals for magnitudes in
//! `[1e-6, 1e21)` and exponent form (`1e-7`, `1e+21`) outside it.

use geojson::{Geometry, Value};
use std::fmt::Write;

/// Render a geometry as WKT
pub fn to_wkt(geometry: &Geometry) -> String {
    let mut out = String::new();
    write_value(&mut out, &geometry.value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Point(position) => {
            tagged(out, "POINT", position.is_empty(), |out| {
                write_position(out, position)
            });
        }
        Value::MultiPoint(points) => {
            tagged(out, "MULTIPOINT", points.is_empty(), |out| {
                write_positions(out, points)
            });
        }
        Value::LineString(line) => {
            tagged(out, "LINESTRING", line.is_empty(), |out| {
                write_positions(out, line)
            });
        }
        Value::MultiLineString(lines) => {
            tagged(out, "MULTILINESTRING", lines.is_empty(), |out| {
                write_rings(out, lines)
            });
        }
        Value::Polygon(rings) => {
            tagged(out, "POLYGON", rings.is_empty(), |out| write_rings(out, rings));
        }
        Value::MultiPolygon(polygons) => {
            tagged(out, "MULTIPOLYGON", polygons.is_empty(), |out| {
                for (i, rings) in polygons.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push('(');
                    write_rings(out, rings);
                    out.push(')');
                }
            });
        }
        Value::GeometryCollection(geometries) => {
            tagged(out, "GEOMETRYCOLLECTION", geometries.is_empty(), |out| {
                for (i, geometry) in geometries.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    write_value(out, &geometry.value);
                }
            });
        }
    }
}

fn tagged(out: &mut String, tag: &str, empty: bool, body: impl FnOnce(&mut String)) {
    out.push_str(tag);
    if empty {
        out.push_str(" EMPTY");
        return;
    }
    out.push_str(" (");
    body(out);
    out.push(')');
}

fn write_position(out: &mut String, position: &[f64]) {
    for (i, ordinate) in position.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_number(out, *ordinate);
    }
}

/// Append `value` the way JavaScript's `Number.prototype.toString` prints it
fn write_number(out: &mut String, value: f64) {
    // -0 prints as "0"
    if value == 0.0 {
        out.push('0');
        return;
    }
    if !value.is_finite() {
        let _ = write!(out, "{}", value);
        return;
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-1.2345e2"
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        let _ = write!(out, "{}", value);
        return;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        let _ = write!(out, "{}", value);
        return;
    };

    if value < 0.0 {
        out.push('-');
    }
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = digits.len() as i32;
    let n = exponent + 1;

    if k <= n && n <= 21 {
        out.push_str(&digits);
        out.push_str(&"0".repeat((n - k) as usize));
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else if -6 < n && n <= 0 {
        out.push_str("0.");
        out.push_str(&"0".repeat((-n) as usize));
        out.push_str(&digits);
    } else {
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        let _ = write!(out, "e{}{}", if n - 1 < 0 { '-' } else { '+' }, (n - 1).abs());
    }
}

fn write_positions(out: &mut String, positions: &[Vec<f64>]) {
    for (i, position) in positions.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_position(out, position);
    }
}

fn write_rings(out: &mut String, rings: &[Vec<Vec<f64>>]) {
    for (i, ring) in rings.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('(');
        write_positions(out, ring);
        out.push(')');
    }
}
