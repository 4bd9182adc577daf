//! Plain-text rendering for terminal output.

use jyotish_engine::{ChartResult, TransitReport};
use jyotish_vedic_base::dasha::{DashaNode, DashaSnapshot, DashaTree};
use jyotish_vedic_base::{PlanetPosition, format_longitude};

const DATE_FMT: &str = "%Y-%m-%d";

fn position_line(p: &PlanetPosition, house: Option<u8>) -> String {
    let house = house.map_or_else(|| "  -".to_string(), |h| format!("{h:>3}"));
    format!(
        "  {:<8} {:<22} {:<18} pada {} house {}{}",
        p.graha.name(),
        format_longitude(p.longitude),
        p.nakshatra.name(),
        p.pada,
        house,
        if p.retrograde { "  (R)" } else { "" },
    )
}

fn period_line(node: &DashaNode, indent: usize) -> String {
    format!(
        "{:indent$}{:<10} {} .. {}",
        "",
        node.label,
        node.start.format(DATE_FMT),
        node.end.format(DATE_FMT),
        indent = indent,
    )
}

pub fn print_chart(chart: &ChartResult) {
    let base = &chart.base;
    println!("Birth:      {}", base.birth);
    println!(
        "Ayanamsha:  {} {:.6} deg (nodes: {:?})",
        base.ayanamsha.name, base.ayanamsha.degrees, base.node_mode
    );
    match &base.ascendant {
        Some(asc) => println!(
            "Lagna:      {} ({}, pada {})",
            format_longitude(asc.longitude),
            asc.nakshatra,
            asc.pada
        ),
        None => println!("Lagna:      unknown"),
    }
    println!();
    println!("Positions:");
    for p in &base.positions {
        let house = base.houses.as_ref().and_then(|h| h.house_of(p.graha));
        println!("{}", position_line(p, house));
    }

    if !chart.vargas.is_empty() {
        println!();
        println!("Vargas:");
        for v in &chart.vargas {
            let signs: Vec<String> = v
                .positions
                .iter()
                .map(|p| format!("{} {}", p.graha.name(), p.point.rashi))
                .collect();
            let lagna = v
                .ascendant
                .map_or_else(|| "-".to_string(), |a| a.rashi.to_string());
            println!("  {:<4} lagna {:<12} {}", v.varga, lagna, signs.join(", "));
        }
    }

    println!();
    println!(
        "Dasha ({}): starts with {} ({:.2} years remaining at birth)",
        chart.dasha.system,
        chart.dasha.balance.label,
        chart.dasha.balance.remaining_years()
    );
    if let Some(now) = &chart.current_dasha {
        let chain: Vec<&str> = now.periods.iter().map(|p| p.label).collect();
        println!("  running at {}: {}", now.instant.format(DATE_FMT), chain.join(" / "));
    }

    if let Some(scores) = &chart.shadbala {
        println!();
        println!("Shadbala (rupas / required):");
        for s in scores {
            println!(
                "  {:<8} {:>6.2} / {:>4.2}{}",
                s.graha.name(),
                s.rupas,
                s.required / 60.0,
                if s.is_strong { "  strong" } else { "" }
            );
        }
    }

    if let Some(grid) = &chart.ashtakavarga {
        println!();
        let row: Vec<String> = grid.sarva.iter().map(|b| format!("{b:>2}")).collect();
        println!("Sarvashtakavarga from {}: {}", grid.lagna, row.join(" "));
    }

    if let Some(yogas) = &chart.yogas {
        println!();
        if yogas.is_empty() {
            println!("Yogas: none");
        } else {
            println!("Yogas:");
            for y in yogas {
                println!(
                    "  {:<20} {:?}{}",
                    y.name,
                    y.category,
                    if y.dasha_active { "  (dasha active)" } else { "" }
                );
            }
        }
    }

    if let Some(t) = &chart.transit {
        println!();
        print_transit(t);
    }

    if !chart.unavailable.is_empty() {
        println!();
        println!("Unavailable without birth time: {:?}", chart.unavailable);
    }
}

pub fn print_dasha(tree: &DashaTree, running: &DashaSnapshot) {
    println!(
        "{} dasha, cycle {} .. {}",
        tree.system,
        tree.cycle_start.format(DATE_FMT),
        tree.cycle_end.format(DATE_FMT)
    );
    println!(
        "Birth balance: {} with {:.4} years remaining",
        tree.balance.label,
        tree.balance.remaining_years()
    );
    for maha in &tree.periods {
        println!("{}", period_line(maha, 2));
        for antara in &maha.children {
            println!("{}", period_line(antara, 6));
        }
    }
    if !running.periods.is_empty() {
        let chain: Vec<&str> = running.periods.iter().map(|p| p.label).collect();
        println!(
            "Running at {}: {}",
            running.instant.format(DATE_FMT),
            chain.join(" / ")
        );
    }
}

pub fn print_transit(report: &TransitReport) {
    let g = &report.gochara;
    println!(
        "Transits at {} from natal Moon in {}:",
        report.instant.format("%Y-%m-%d %H:%M UTC"),
        g.natal_moon_rashi
    );
    for p in &g.positions {
        println!(
            "  {:<8} {:<22} house {:>2}  {:?}{}",
            p.graha.name(),
            format_longitude(p.longitude),
            p.house_from_moon,
            p.favorability,
            if p.retrograde { "  (R)" } else { "" }
        );
    }
    if let Some(phase) = g.sade_sati_phase {
        println!("  Sade sati: {phase:?}");
    }
}
