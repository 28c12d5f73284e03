use super::{level_color, new_table, paint, shade_color};
use crate::cmd::batch::RankedAthlete;
use comfy_table::{Attribute, Cell, CellAlignment, Color};
use fitrank::api::{LiftResultItem, LiftingAssessment, RunningAssessment};
use fitrank::presentation::{format_weight, Discipline, PerformanceLevel};
use fitrank::tables::Tier;

fn print_headline(
    title: &str,
    score: u32,
    level: PerformanceLevel,
    message: &str,
    tip: &str,
    color: bool,
) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(title).add_attribute(Attribute::Bold),
        paint(
            Cell::new(format!("{}%", score)).add_attribute(Attribute::Bold),
            level_color(level),
            color,
        ),
        paint(Cell::new(level.to_string()), level_color(level), color),
    ]);
    println!("\n{}", table);
    println!("{}", message);
    println!("💡 {}", tip);
}

fn tier_cell(tier: Tier, color: bool) -> Cell {
    let c = match tier {
        Tier::Elite => Color::Green,
        Tier::Good => Color::DarkGreen,
        Tier::Average => Color::Yellow,
        Tier::Beginner => Color::DarkYellow,
        Tier::Below => Color::Red,
    };
    paint(Cell::new(tier.to_string()), c, color)
}

pub fn running(a: &RunningAssessment, color: bool) {
    print_headline("Running Performance", a.score, a.level, a.message, a.tip, color);

    if a.results.is_empty() {
        println!("\nNo times entered; showing the default score.");
        return;
    }

    let mut table = new_table();
    table.set_header(vec!["Distance", "Time", "Seconds", "Elite", "Tier", "Points"]);
    for item in &a.results {
        let seconds = item
            .seconds
            .map(|s| s.to_string())
            .unwrap_or_else(|| "?".to_string());
        table.add_row(vec![
            Cell::new(item.label).add_attribute(Attribute::Bold),
            Cell::new(&item.time),
            Cell::new(seconds).set_alignment(CellAlignment::Right),
            Cell::new(&item.elite_time).set_alignment(CellAlignment::Right),
            tier_cell(item.tier, color),
            Cell::new(item.band).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("\n{}", table);
}

fn entry_text(item: &LiftResultItem) -> String {
    match item.value {
        Some(v) if item.lift.is_rep_count() => format!("{} reps", v),
        Some(v) => format!("{:.2}× BW", v),
        None => format!("{} (?)", item.raw),
    }
}

pub fn weightlifting(a: &LiftingAssessment, color: bool) {
    print_headline("Weightlifting Performance", a.score, a.level, a.message, a.tip, color);

    match &a.bodyweight_display {
        Some(bw) => println!("Bodyweight: {} ({})", bw, a.gender),
        None => {
            println!("\nNo bodyweight entered; showing the default score.");
            return;
        }
    }

    if a.results.is_empty() {
        println!("\nNo lifts entered; showing the default score.");
        return;
    }

    let mut table = new_table();
    table.set_header(vec![
        "Lift", "Entry", "Weight", "Elite", "% Elite", "Tier", "Points",
    ]);
    for item in &a.results {
        let weight = item
            .actual_weight_kg
            .map(format_weight)
            .unwrap_or_else(|| "-".to_string());
        let elite = match item.elite_target_kg {
            Some(kg) => format!("{} ({}×)", format_weight(kg), item.elite_value),
            None => format!("{} reps", item.elite_value),
        };
        let percent = match (item.percent_of_elite, item.shade) {
            (Some(p), Some(shade)) => paint(Cell::new(format!("{}%", p)), shade_color(shade), color),
            _ => Cell::new("-"),
        };

        table.add_row(vec![
            Cell::new(item.label).add_attribute(Attribute::Bold),
            Cell::new(entry_text(item)),
            Cell::new(weight).set_alignment(CellAlignment::Right),
            Cell::new(elite).set_alignment(CellAlignment::Right),
            percent.set_alignment(CellAlignment::Right),
            tier_cell(item.tier, color),
            Cell::new(item.band).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("\n{}", table);
}

pub fn ranking(discipline: Discipline, ranking: &[RankedAthlete], color: bool) {
    println!("\n🏆 {} ranking ({} athletes)", discipline, ranking.len());

    let mut table = new_table();
    table.set_header(vec!["Rank", "Athlete", "Score", "Level", "Metrics"]);
    for r in ranking {
        table.add_row(vec![
            Cell::new(r.rank).set_alignment(CellAlignment::Right),
            Cell::new(&r.name).add_attribute(Attribute::Bold),
            paint(
                Cell::new(r.score).set_alignment(CellAlignment::Right),
                level_color(r.level),
                color,
            ),
            paint(Cell::new(r.level.to_string()), level_color(r.level), color),
            Cell::new(r.metrics).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
}
