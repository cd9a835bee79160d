// SPDX-License-Identifier: MIT

use std::fmt;

use crate::{Error, Graph, PathOracle, VertexKind};

/// One human-readable step of a rendered direction list.
///
/// The display form is
/// `"{Continue|Proceed} on {street} {distance} ft towards {destination}"`,
/// with an ` Exhibit` suffix when the destination is an exhibit vertex.
/// `Continue` is used when the step stays on the previous step's street.
/// Distances are truncated to whole feet, not rounded.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionStep {
    pub street: String,
    pub distance: f64,
    pub destination: String,
    pub exhibit: bool,
    pub continues: bool,
}

impl fmt::Display for DirectionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.continues { "Continue" } else { "Proceed" };
        write!(
            f,
            "{} on {} {} ft towards {}",
            verb, self.street, self.distance as i64, self.destination
        )?;
        if self.exhibit {
            write!(f, " Exhibit")?;
        }
        Ok(())
    }
}

/// Joins rendered steps into one display string, one step per line.
pub fn collate(steps: &[DirectionStep]) -> String {
    let mut text = String::new();
    for step in steps {
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(&step.to_string());
    }
    text
}

/// Merges each run of consecutive same-street steps into a single step:
/// the run's summed distance, its final destination, and `Proceed` phrasing
/// (a merged run is by definition a street change).
pub fn merge_same_street(steps: Vec<DirectionStep>) -> Vec<DirectionStep> {
    let mut merged: Vec<DirectionStep> = vec![];
    for step in steps {
        let same_street = merged.last().is_some_and(|last| last.street == step.street);
        if same_street {
            if let Some(last) = merged.last_mut() {
                last.distance += step.distance;
                last.destination = step.destination;
                last.exhibit = step.exhibit;
            }
        } else {
            merged.push(DirectionStep {
                continues: false,
                ..step
            });
        }
    }
    merged
}

/// Renders the shortest path from `start_id` to `end_id` as direction steps.
///
/// Walks the oracle's edge list keeping a current-location pointer seeded at
/// the (group-aliased) start; for each edge, the endpoint not equal to the
/// current location becomes the new location. `prev_street` is the street of
/// the last step rendered before this call, so a "continue" can span a
/// waypoint boundary; the returned street is the one to carry into the next
/// call (unchanged if the path is empty).
pub(crate) fn render(
    graph: &Graph,
    oracle: &PathOracle,
    start_id: &str,
    end_id: &str,
    prev_street: Option<&str>,
) -> Result<(Vec<DirectionStep>, Option<String>), Error> {
    let mut at = graph.resolve(start_id)?.to_string();
    let mut street = prev_street.map(str::to_string);
    let mut steps = vec![];

    for edge in oracle.path(start_id, end_id)? {
        let next = edge.other_endpoint(&at).to_string();
        let destination = graph.vertex(&next)?;

        steps.push(DirectionStep {
            street: edge.street.clone(),
            distance: edge.weight,
            destination: destination.name.clone(),
            exhibit: destination.kind == VertexKind::Exhibit,
            continues: street.as_deref() == Some(edge.street.as_str()),
        });

        street = Some(edge.street.clone());
        at = next;
    }

    Ok((steps, street))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Edge, Vertex};

    fn step(street: &str, distance: f64, destination: &str, continues: bool) -> DirectionStep {
        DirectionStep {
            street: street.to_string(),
            distance,
            destination: destination.to_string(),
            exhibit: false,
            continues,
        }
    }

    #[test]
    fn display_truncates_distance() {
        let mut s = step("Gate Path", 25.9, "Front Plaza", false);
        assert_eq!(s.to_string(), "Proceed on Gate Path 25 ft towards Front Plaza");

        s.continues = true;
        s.exhibit = true;
        assert_eq!(
            s.to_string(),
            "Continue on Gate Path 25 ft towards Front Plaza Exhibit"
        );
    }

    #[test]
    fn collate_one_step_per_line() {
        let steps = vec![
            step("A", 10.0, "x", false),
            step("B", 20.0, "y", false),
        ];
        assert_eq!(
            collate(&steps),
            "Proceed on A 10 ft towards x\nProceed on B 20 ft towards y"
        );
        assert_eq!(collate(&[]), "");
    }

    #[test]
    fn merge_sums_same_street_runs() {
        let steps = vec![
            step("A", 10.0, "x", false),
            step("A", 15.5, "y", true),
            step("B", 20.0, "z", false),
            step("A", 5.0, "w", false),
        ];
        let merged = merge_same_street(steps);
        assert_eq!(
            merged,
            vec![
                step("A", 25.5, "y", false),
                step("B", 20.0, "z", false),
                step("A", 5.0, "w", false),
            ]
        );
    }

    #[test]
    fn render_disambiguates_undirected_edges() {
        //  gate ──Gate Path,10── plaza ──Gate Path,20── lions
        //
        // Edge endpoints are deliberately stored "backwards" relative to the
        // walk to exercise the current-location pointer.
        let vertex = |id: &str, kind, name: &str| Vertex {
            id: id.to_string(),
            kind,
            name: name.to_string(),
            group_id: None,
            lat: 0.0,
            lng: 0.0,
            tags: vec![],
        };
        let g = Graph::new(
            vec![
                vertex("gate", VertexKind::Gate, "Entrance Gate"),
                vertex("plaza", VertexKind::Intersection, "Front Plaza"),
                vertex("lions", VertexKind::Exhibit, "Lions"),
            ],
            vec![
                Edge {
                    id: "e0".to_string(),
                    endpoint_a: "plaza".to_string(),
                    endpoint_b: "gate".to_string(),
                    weight: 10.0,
                    street: "Gate Path".to_string(),
                },
                Edge {
                    id: "e1".to_string(),
                    endpoint_a: "lions".to_string(),
                    endpoint_b: "plaza".to_string(),
                    weight: 20.0,
                    street: "Gate Path".to_string(),
                },
            ],
        )
        .unwrap();
        let oracle = PathOracle::new(&g);

        let (steps, carried) = render(&g, &oracle, "gate", "lions", None).unwrap();
        assert_eq!(
            steps.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
            [
                "Proceed on Gate Path 10 ft towards Front Plaza",
                "Continue on Gate Path 20 ft towards Lions Exhibit",
            ]
        );
        assert_eq!(carried.as_deref(), Some("Gate Path"));

        // An empty path carries the incoming street through unchanged.
        let (steps, carried) = render(&g, &oracle, "gate", "gate", Some("Gate Path")).unwrap();
        assert!(steps.is_empty());
        assert_eq!(carried.as_deref(), Some("Gate Path"));
    }
}
