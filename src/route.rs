// SPDX-License-Identifier: MIT

use serde::Serialize;

use crate::directions::{self, merge_same_street, DirectionStep};
use crate::{Error, Graph, PathOracle};

/// A stop in the planned visiting order: a vertex view plus progress state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waypoint {
    pub id: String,
    pub name: String,

    /// Display name of the owning exhibit group, if the stop is a member.
    pub group_name: Option<String>,

    pub lat: f32,
    pub lng: f32,

    /// Cumulative path weight from the start of the plan along the
    /// constructed order. The terminal gate waypoint carries the full
    /// tour length.
    pub distance: f64,

    pub visited: bool,
}

/// An active walking tour: the planned waypoint sequence and the walker's
/// progress through it.
///
/// Construction ([Route::plan]) builds the visiting order with a greedy
/// nearest-neighbor heuristic: from the current position, the cheapest
/// remaining target (by shortest-path weight) is appended next, with ties
/// broken towards the first target in input order. The sequence always ends
/// with the venue's gate vertex, so it is never empty.
///
/// The sequence is mutated in place by [advance](Route::advance),
/// [retreat](Route::retreat), [skip](Route::skip) and
/// [reroute](Route::reroute). Exactly the waypoints before the next-unvisited
/// index are marked visited; `retreat` un-marks only the most recently
/// visited entry. One `Route` represents one session and must be driven by
/// one caller at a time; nothing is persisted across sessions.
pub struct Route<'a> {
    graph: &'a Graph,
    oracle: PathOracle<'a>,
    order: Vec<Waypoint>,

    /// Street of the last rendered step, carried across advance/retreat
    /// calls so a same-street "continue" can span a waypoint boundary.
    last_street: Option<String>,
}

impl<'a> Route<'a> {
    /// Plans a tour visiting every target, starting at `start_id` and
    /// ending at the venue's gate vertex.
    ///
    /// An empty target set yields the degenerate one-element sequence
    /// containing only the gate waypoint. Fails with [Error::NotFound] on
    /// unknown ids and [Error::Unreachable] if any target cannot be reached;
    /// no partial plan is produced.
    pub fn plan(graph: &'a Graph, target_ids: &[&str], start_id: &str) -> Result<Self, Error> {
        graph.vertex(start_id)?;

        let mut route = Self {
            graph,
            oracle: PathOracle::new(graph),
            order: Vec::with_capacity(target_ids.len() + 1),
            last_street: None,
        };
        let targets = target_ids.iter().map(|&t| t.to_string()).collect();
        route.append_tour(start_id, targets, 0.0)?;

        log::debug!(
            "planned tour: {:?}",
            route.order.iter().map(|w| w.id.as_str()).collect::<Vec<_>>()
        );
        Ok(route)
    }

    /// The planned waypoint sequence, visited prefix first, gate last.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.order
    }

    /// Index of the first unvisited waypoint.
    /// Fails with [Error::AtEnd] once the whole sequence is visited.
    pub fn next_index(&self) -> Result<usize, Error> {
        self.next_unvisited().ok_or(Error::AtEnd)
    }

    /// True once the terminal gate waypoint has been visited.
    pub fn reached_end(&self) -> bool {
        // The sequence is never empty: it at least contains the gate.
        self.order[self.order.len() - 1].visited
    }

    /// True while nothing has been visited yet.
    pub fn at_start(&self) -> bool {
        self.next_unvisited() == Some(0)
    }

    /// Renders directions from the caller's position to the next unvisited
    /// waypoint and marks that waypoint visited.
    pub fn advance(&mut self, from_id: &str) -> Result<Vec<DirectionStep>, Error> {
        let next = self.next_unvisited().ok_or(Error::AtEnd)?;
        let (steps, street) = directions::render(
            self.graph,
            &self.oracle,
            from_id,
            &self.order[next].id,
            self.last_street.as_deref(),
        )?;

        self.order[next].visited = true;
        self.last_street = street;
        Ok(steps)
    }

    /// Renders directions from the caller's position back to the most
    /// recently visited waypoint and un-marks it, undoing one advance.
    /// Fails with [Error::AtStart] when nothing has been visited.
    pub fn retreat(&mut self, from_id: &str) -> Result<Vec<DirectionStep>, Error> {
        let next = self.next_unvisited().unwrap_or(self.order.len());
        if next == 0 {
            return Err(Error::AtStart);
        }

        let previous = next - 1;
        let (steps, street) = directions::render(
            self.graph,
            &self.oracle,
            from_id,
            &self.order[previous].id,
            self.last_street.as_deref(),
        )?;

        self.order[previous].visited = false;
        self.last_street = street;
        Ok(steps)
    }

    /// Renders directions from the caller's position to the next unvisited
    /// waypoint without touching any progress state, for re-display on
    /// live position updates. `brief` merges consecutive same-street steps.
    pub fn directions_to_next(
        &self,
        from_id: &str,
        brief: bool,
    ) -> Result<Vec<DirectionStep>, Error> {
        let next = self.next_unvisited().ok_or(Error::AtEnd)?;
        let (steps, _) = directions::render(
            self.graph,
            &self.oracle,
            from_id,
            &self.order[next].id,
            self.last_street.as_deref(),
        )?;
        Ok(if brief { merge_same_street(steps) } else { steps })
    }

    /// Decides whether the plan should be interrupted: true when some
    /// unvisited waypoint planned after the designated next one is now
    /// strictly closer to the walker than the next one itself. The terminal
    /// gate is never considered. Pure query; acting on it (usually by
    /// calling [reroute](Route::reroute)) is the caller's decision.
    pub fn is_off_track(&self, position_id: &str) -> Result<bool, Error> {
        let next = match self.next_unvisited() {
            Some(index) => index,
            None => return Ok(false),
        };
        let last = self.order.len() - 1;
        if next >= last {
            return Ok(false);
        }

        let next_weight = self.oracle.path_weight(position_id, &self.order[next].id)?;
        for candidate in &self.order[next + 1..last] {
            if self.oracle.path_weight(position_id, &candidate.id)? < next_weight {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Rebuilds the unvisited tail of the plan from a new starting position,
    /// leaving the visited prefix untouched. The unvisited targets are
    /// re-ordered by the same nearest-neighbor heuristic anchored at
    /// `from_id`, and the gate waypoint is re-appended.
    pub fn reroute(&mut self, from_id: &str) -> Result<(), Error> {
        self.graph.vertex(from_id)?;
        let next = self.next_unvisited().ok_or(Error::AtEnd)?;

        // Everything unvisited except the terminal gate gets replanned.
        let targets: Vec<String> = self.order[next..self.order.len() - 1]
            .iter()
            .map(|w| w.id.clone())
            .collect();
        self.order.truncate(next);
        let base = self.order.last().map(|w| w.distance).unwrap_or(0.0);

        log::debug!("rerouting {} stops from {}", targets.len(), from_id);
        self.append_tour(from_id, targets, base)
    }

    /// Drops the next unvisited waypoint from the plan outright (it will not
    /// be visited), then reroutes the remainder from the caller's position.
    /// Fails with [Error::AtEnd] when only the gate remains.
    pub fn skip(&mut self, from_id: &str) -> Result<(), Error> {
        let next = self.next_unvisited().ok_or(Error::AtEnd)?;
        if next + 1 == self.order.len() {
            // The gate itself is not skippable.
            return Err(Error::AtEnd);
        }

        let dropped = self.order.remove(next);
        log::debug!("skipping {}", dropped.id);
        self.reroute(from_id)
    }

    fn next_unvisited(&self) -> Option<usize> {
        self.order.iter().position(|w| !w.visited)
    }

    /// The greedy construction loop: repeatedly appends the cheapest
    /// remaining target (first minimum wins on ties), accumulating the
    /// running distance total, then appends the gate waypoint.
    fn append_tour(
        &mut self,
        start_id: &str,
        mut targets: Vec<String>,
        mut total: f64,
    ) -> Result<(), Error> {
        let mut current = start_id.to_string();

        while !targets.is_empty() {
            let mut closest = 0;
            let mut closest_weight = f64::INFINITY;
            for (index, target) in targets.iter().enumerate() {
                let weight = self.oracle.path_weight(&current, target)?;
                if weight < closest_weight {
                    closest = index;
                    closest_weight = weight;
                }
            }

            current = targets.remove(closest);
            total += closest_weight;
            self.order.push(self.waypoint(&current, total)?);
        }

        total += self.oracle.path_weight(&current, &self.graph.gate().id)?;
        let gate = self.waypoint(&self.graph.gate().id, total)?;
        self.order.push(gate);
        Ok(())
    }

    fn waypoint(&self, id: &str, distance: f64) -> Result<Waypoint, Error> {
        let vertex = self.graph.vertex(id)?;
        let group_name = match &vertex.group_id {
            Some(group) => Some(self.graph.vertex(group)?.name.clone()),
            None => None,
        };

        Ok(Waypoint {
            id: vertex.id.clone(),
            name: vertex.name.clone(),
            group_name,
            lat: vertex.lat,
            lng: vertex.lng,
            distance,
            visited: false,
        })
    }
}
