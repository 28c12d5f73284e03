use super::new_table;
use comfy_table::{Attribute, Cell, CellAlignment};
use fitrank::presentation::format_time;
use fitrank::tables::{Gender, Lift, RunningMetric};
use strum::IntoEnumIterator;

pub fn running_table() {
    println!("\n🏃 Running reference times");
    let mut table = new_table();
    table.set_header(vec![
        "Distance", "Elite", "Good", "Average", "Beginner", "Slower",
    ]);

    for metric in RunningMetric::iter() {
        let t = metric.thresholds();
        let mut row = vec![Cell::new(metric.label()).add_attribute(Attribute::Bold)];
        for secs in [t.elite, t.good, t.average, t.beginner] {
            row.push(Cell::new(format!("≤ {}", format_time(secs as u64))));
        }
        row.push(Cell::new(format!("{} pts", metric.fallback_band())));
        table.add_row(row);
    }
    for i in 1..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("{}", table);
}

fn lift_threshold(lift: Lift, value: f64) -> String {
    if lift.is_rep_count() {
        format!("≥ {} reps", value)
    } else {
        format!("≥ {}×", value)
    }
}

pub fn lifting_table(gender: Gender) {
    println!("\n🏋️ Weightlifting reference ({})", gender);
    let mut table = new_table();
    table.set_header(vec!["Lift", "Elite", "Good", "Average", "Beginner"]);

    for lift in Lift::iter() {
        let t = lift.thresholds(gender);
        let mut row = vec![Cell::new(lift.label()).add_attribute(Attribute::Bold)];
        for v in [t.elite, t.good, t.average, t.beginner] {
            row.push(Cell::new(lift_threshold(lift, v)).set_alignment(CellAlignment::Right));
        }
        table.add_row(row);
    }
    println!("{}", table);
}

pub fn weight_ranges(gender: Gender) {
    println!("\nPreset options ({})", gender);
    let mut table = new_table();
    table.set_header(vec!["Lift", "Option", "Value"]);

    for lift in Lift::iter() {
        for (i, range) in lift.weight_ranges(gender).iter().enumerate() {
            let name = if i == 0 { lift.label() } else { "" };
            table.add_row(vec![
                Cell::new(name).add_attribute(Attribute::Bold),
                Cell::new(range.label),
                Cell::new(range.value).set_alignment(CellAlignment::Right),
            ]);
        }
    }
    println!("{}", table);
}
