//! Incidence queries, boundary walking and core reduction.

use tracing::{debug, info};

use super::extract::Dissection;
use super::geom::{colinear, colinear_and_ordered, is_down_right, sq_distance, Pt, Triangle};
use super::types::Phase;
use crate::error::DissectionError;

impl Dissection {
    /// Vertices joined to `v` by an edge: the other vertices of its incident
    /// triangles, minus any point hidden behind a nearer one on the same ray.
    /// Sorted.
    pub fn neighbours(&self, v: &Pt) -> Vec<Pt> {
        let mut candidates: Vec<&Pt> = self
            .incident(v)
            .iter()
            .flat_map(|t| t.others(v))
            .collect();
        candidates.sort();
        candidates.dedup();
        candidates
            .iter()
            .filter(|&&q| {
                !candidates
                    .iter()
                    .any(|&p| p != q && colinear_and_ordered(v, p, q))
            })
            .map(|&q| q.clone())
            .collect()
    }

    pub fn degree(&self, v: &Pt) -> usize {
        self.neighbours(v).len()
    }

    fn nearest_neighbour(&self, v: &Pt, keep: impl Fn(&Pt) -> bool) -> Option<Pt> {
        let mut best: Option<(Pt, _)> = None;
        for q in self.neighbours(v).into_iter().filter(|q| keep(q)) {
            let d = sq_distance(v, &q);
            if best.as_ref().map_or(true, |(_, bd)| d < *bd) {
                best = Some((q, d));
            }
        }
        best.map(|(q, _)| q)
    }

    /// Nearest neighbour straight below `v`.
    pub fn walk_down(&self, v: &Pt) -> Option<Pt> {
        self.nearest_neighbour(v, |q| q.x == v.x && q.y < v.y)
    }

    /// Nearest neighbour strictly right of and below `v`.
    pub fn walk_down_right(&self, v: &Pt) -> Option<Pt> {
        self.nearest_neighbour(v, |q| is_down_right(v, q))
    }

    /// Corner `i` touches exactly one triangle.
    pub fn can_remove_triangle(&self, i: usize) -> bool {
        self.corners
            .get(i)
            .map_or(false, |c| self.incident(c).len() == 1)
    }

    fn sole_triangle(&self, i: usize) -> Result<&Triangle, DissectionError> {
        match self.corners.get(i).map(|c| self.incident(c)) {
            Some([t]) => Ok(t),
            _ => Err(DissectionError::CornerNotRemovable { corner: i }),
        }
    }

    /// Vertex of the triangle at corner `i` that comes before it on the boundary:
    /// the previous corner itself, or the vertex on the side running towards it.
    pub fn previous_vertex(&self, i: usize) -> Result<Pt, DissectionError> {
        let t = self.sole_triangle(i)?;
        let corner = &self.corners[i];
        let prev = &self.corners[(i + self.corners.len() - 1) % self.corners.len()];
        let others: Vec<&Pt> = t.others(corner).collect();
        if let Some(&p) = others.iter().find(|&&p| p == prev) {
            return Ok(p.clone());
        }
        others
            .into_iter()
            .find(|p| colinear(prev, p, corner))
            .cloned()
            .ok_or_else(|| DissectionError::BrokenBoundary {
                reason: format!("no vertex of {t} leads back from corner {corner} to {prev}"),
            })
    }

    /// Vertex of the triangle at corner `i` that follows it on the boundary.
    pub fn next_vertex(&self, i: usize) -> Result<Pt, DissectionError> {
        let prev = self.previous_vertex(i)?;
        let t = self.sole_triangle(i)?;
        let corner = &self.corners[i];
        t.others(corner)
            .find(|&p| *p != prev)
            .cloned()
            .ok_or_else(|| DissectionError::BrokenBoundary {
                reason: format!("triangle {t} has no vertex after {prev}"),
            })
    }

    /// Remove the only triangle at corner `i` and splice its other two vertices
    /// into the boundary in place of the corner.
    pub fn remove_triangle(&mut self, i: usize) -> Result<(), DissectionError> {
        let t = self.sole_triangle(i)?.clone();
        let prev = self.previous_vertex(i)?;
        let next = self.next_vertex(i)?;

        self.corners.insert(i, prev);
        self.corners[i + 1] = next;
        self.corners.dedup();
        while self.corners.len() > 1 && self.corners.first() == self.corners.last() {
            self.corners.pop();
        }

        for v in t.vertices() {
            if let Some(incident) = self.points.get_mut(v) {
                incident.retain(|u| *u != t);
                if incident.is_empty() {
                    self.points.remove(v);
                }
            }
        }
        self.triangles.remove(&t);
        self.phase = Phase::Reduced;
        debug!(
            triangle = %t,
            triangles = self.triangles.len(),
            corners = self.corners.len(),
            "boundary triangle removed"
        );
        Ok(())
    }

    /// Strip boundary triangles until one triangle is left or no corner is
    /// removable. Returns the number of triangles removed.
    pub fn core(&mut self) -> Result<usize, DissectionError> {
        let mut removed = 0;
        while self.triangles.len() > 1 {
            let Some(i) = (0..self.corners.len()).find(|&i| self.can_remove_triangle(i)) else {
                break;
            };
            self.remove_triangle(i)?;
            removed += 1;
        }
        info!(
            removed,
            triangles = self.triangles.len(),
            corners = self.corners.len(),
            "core reached"
        );
        Ok(removed)
    }

    /// The other triangle on the edge `r`–`s` of `t`, with its third vertex.
    pub fn adjacent_triangle(
        &self,
        t: &Triangle,
        r: &Pt,
        s: &Pt,
    ) -> Result<(Triangle, Pt), DissectionError> {
        let none = || DissectionError::NoAdjacentTriangle {
            triangle: t.clone(),
        };
        if r == s || !t.contains(r) || !t.contains(s) || !self.triangles.contains(t) {
            return Err(none());
        }
        let u = self
            .incident(r)
            .iter()
            .find(|u| *u != t && u.contains(s))
            .ok_or_else(none)?;
        let third = u
            .vertices()
            .iter()
            .find(|p| *p != r && *p != s)
            .ok_or_else(none)?;
        Ok((u.clone(), third.clone()))
    }

    /// With six boundary corners: some pair of opposite corners is joined by a
    /// straight run of dissection edges.
    pub fn has_dividing_line(&self) -> Result<bool, DissectionError> {
        if self.corners.len() != 6 {
            return Err(DissectionError::CornerCount {
                expected: 6,
                found: self.corners.len(),
            });
        }
        Ok((0..6).any(|z| self.joins(&self.corners[z], &self.corners[(z + 3) % 6])))
    }

    /// Walk from `from` to `to` through neighbours strictly inside the segment.
    fn joins(&self, from: &Pt, to: &Pt) -> bool {
        let mut line = vec![from.clone()];
        loop {
            let last = &line[line.len() - 1];
            let prev = line.len().checked_sub(2).map(|k| &line[k]);
            let mut step = None;
            for q in self.neighbours(last) {
                // A single edge between the two corners is already a dividing line.
                if q == *to {
                    return true;
                }
                if prev == Some(&q) {
                    continue;
                }
                if colinear_and_ordered(from, &q, to) {
                    step = Some(q);
                    break;
                }
            }
            match step {
                Some(q) => line.push(q),
                None => return false,
            }
        }
    }
}
