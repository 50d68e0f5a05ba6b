use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::network::{Network, StationId};
use crate::output::display_name;
use crate::routing::RoutePlan;
use crate::timetable::Timetable;

/// Out-degree above which a stop on the route is drawn as a double circle.
const HUB_DEGREE: usize = 3;

/// Render the network as a Graphviz document.
///
/// With a plan, the origin and destination are filled octagons, the
/// intermediate stops and traversed connections are bold. Every connection
/// is rendered with its travel time as the label; parallel connections each
/// get their own edge line.
pub fn render_dot(timetable: &Timetable, plan: Option<&RoutePlan>) -> Result<String> {
    let network = timetable.network();
    let mut doc = String::new();
    let _ = writeln!(doc, "digraph {} {{", graph_id(timetable.title()));

    let mut on_path: HashSet<(StationId, StationId)> = HashSet::new();
    if let Some(plan) = plan {
        for pair in plan.stops.windows(2) {
            on_path.insert((pair[0], pair[1]));
        }

        let _ = writeln!(
            doc,
            "{} [shape=octagon, style=filled, color=\"darkgreen\"]",
            node(network, plan.origin)
        );
        let _ = writeln!(
            doc,
            "{} [shape=octagon, style=filled, color=\"skyblue\"]",
            node(network, plan.destination)
        );
        for &stop in &plan.stops {
            if stop == plan.origin || stop == plan.destination {
                continue;
            }
            if network.degree(stop)? > HUB_DEGREE {
                let _ = writeln!(doc, "{} [style=bold, shape=doublecircle]", node(network, stop));
            } else {
                let _ = writeln!(doc, "{} [style=bold]", node(network, stop));
            }
        }
    }

    for (_, connection) in network.all_edges() {
        let hours = connection.minutes / 60;
        let minutes = connection.minutes % 60;
        let style = if on_path.contains(&(connection.from, connection.to)) {
            ", style=bold"
        } else {
            ""
        };
        let _ = writeln!(
            doc,
            "{} -> {} [label=\"{}h {}m\"{}]",
            node(network, connection.from),
            node(network, connection.to),
            hours,
            minutes,
            style
        );
    }

    doc.push_str("}\n");
    Ok(doc)
}

/// Render the network and write the document to `path`.
pub fn write_dot(timetable: &Timetable, plan: Option<&RoutePlan>, path: &Path) -> Result<()> {
    let doc = render_dot(timetable, plan)?;
    fs::write(path, doc)?;
    Ok(())
}

fn node(network: &Network, station: StationId) -> String {
    let name = network.station_name(station).unwrap_or("<unknown>");
    format!("\"{}\"", display_name(name))
}

/// Reduce a timetable title to a valid Graphviz identifier.
fn graph_id(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect();
    if cleaned.chars().next().is_none_or(|ch| ch.is_ascii_digit()) {
        format!("_{cleaned}")
    } else {
        cleaned
    }
}
