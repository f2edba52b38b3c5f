//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::{catalog::Exercise, models::ScheduledWorkout};

/// Newtype wrapper for displaying a generated schedule.
///
/// Workouts are grouped under phase and week headings in the order given.
///
/// # Examples
///
/// ```rust
/// use periodize_core::display::Schedule;
///
/// let schedule = Schedule(vec![]);
/// assert_eq!(schedule.to_string(), "No workouts scheduled.\n");
/// ```
pub struct Schedule(pub Vec<ScheduledWorkout>);

impl Schedule {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduledWorkout> {
        self.0.iter()
    }
}

impl Index<usize> for Schedule {
    type Output = ScheduledWorkout;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Schedule {
    type Item = ScheduledWorkout;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduledWorkout;
    type IntoIter = std::slice::Iter<'a, ScheduledWorkout>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No workouts scheduled.");
        }

        let mut current_phase = None;
        let mut current_week = None;
        for workout in &self.0 {
            if current_phase != Some(workout.phase_index) {
                current_phase = Some(workout.phase_index);
                current_week = None;
                writeln!(f, "# Phase {}: {}", workout.phase_index + 1, workout.phase.display_name())?;
                writeln!(f)?;
            }
            if current_week != Some(workout.week_index) {
                current_week = Some(workout.week_index);
                writeln!(f, "## Week {}", workout.week_index + 1)?;
                writeln!(f)?;
            }
            write!(f, "{workout}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying catalog listings.
pub struct Exercises<'a>(pub Vec<&'a Exercise>);

impl Exercises<'_> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Exercises<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No exercises found.")
        } else {
            for exercise in &self.0 {
                write!(f, "{exercise}")?;
            }
            Ok(())
        }
    }
}
