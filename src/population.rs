use crate::moth::{Area, Coloration, Moth};
use bevy::prelude::*;
use rand::Rng;
use std::collections::VecDeque;

/// The current generation of moths, in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Population {
    moths: Vec<Moth>,
}

impl Population {
    pub fn from_moths(moths: Vec<Moth>) -> Self {
        Self { moths }
    }

    /// Fresh population of `count` moths, colorations 50/50 and positions uniform over the area
    pub fn generate(area: &Area, count: usize, rng: &mut impl Rng) -> Self {
        Self {
            moths: (0..count).map(|_| Moth::random(area, rng)).collect(),
        }
    }

    pub fn moths(&self) -> &[Moth] {
        &self.moths
    }

    pub fn len(&self) -> usize {
        self.moths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moths.is_empty()
    }

    /// Remove the moth at `index`. Out-of-range indices remove nothing.
    pub fn remove_at(&mut self, index: usize) -> Option<Moth> {
        if index < self.moths.len() {
            Some(self.moths.remove(index))
        } else {
            None
        }
    }

    /// Remove the first moth (in population order) whose centre lies strictly
    /// within `radius` of `point`
    pub fn remove_near(&mut self, point: Vec2, radius: f32) -> Option<Moth> {
        let index = self
            .moths
            .iter()
            .position(|moth| moth.position.distance(point) < radius)?;
        self.remove_at(index)
    }

    /// Scatter every live moth to a new random point; colorations are untouched
    pub fn reposition(&mut self, area: &Area, rng: &mut impl Rng) {
        for moth in self.moths.iter_mut() {
            moth.position = area.random_point(rng);
        }
    }

    pub fn counts(&self) -> HistoryEntry {
        let light = self
            .moths
            .iter()
            .filter(|moth| moth.coloration == Coloration::Light)
            .count();
        HistoryEntry {
            light,
            dark: self.moths.len() - light,
        }
    }
}

/// Light/dark counts of one generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryEntry {
    pub light: usize,
    pub dark: usize,
}

impl HistoryEntry {
    pub fn total(&self) -> usize {
        self.light + self.dark
    }
}

/// Bounded record of per-generation counts, oldest first
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest once over capacity
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
