//! Load operations: recommendations, metabolic estimates and catalog queries.

use log::{debug, info};

use super::Planner;
use crate::{
    catalog::Exercise,
    error::{PlanError, Result},
    metabolic::{self, MetabolicSet, ZoneClassification},
    optimizer::{self, OptimizerRecommendations, OptimizerRequest},
    params::{CatalogQuery, Recommend},
};

impl Planner {
    /// Computes recommendations for the athlete at `now_ms`.
    ///
    /// When a block is given its phase context, goal bias and volume
    /// tolerance feed the optimizer; the request's own tolerance wins over
    /// the block's.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` for an invalid block, sleep quality
    /// or volume tolerance.
    pub fn recommend(&self, params: &Recommend, now_ms: i64) -> Result<OptimizerRecommendations> {
        if let Some(quality) = params.profile.sleep_quality {
            if !(1..=5).contains(&quality) {
                return Err(PlanError::invalid_input("profile.sleepQuality")
                    .with_reason(format!("must be between 1 and 5, got {quality}")));
            }
        }
        if let Some(tolerance) = params.volume_tolerance {
            if !tolerance.is_finite() || tolerance <= 0.0 {
                return Err(PlanError::invalid_input("volumeTolerance")
                    .with_reason(format!("must be a positive number, got {tolerance}")));
            }
        }

        let block = params.block.as_ref();
        if let Some(block) = block {
            block.validate()?;
        }

        let phase_context = block.and_then(|b| self.resolve_current_phase(b, now_ms));
        if block.is_some() && phase_context.is_none() {
            debug!("block is not running at {now_ms}; using goal defaults");
        }

        let config = params.config.as_ref().unwrap_or(&self.settings.optimizer);
        let request = OptimizerRequest {
            config,
            profile: &params.profile,
            history: &params.history,
            phase_context: phase_context.as_ref(),
            goal_bias: block.and_then(|b| b.goal_bias),
            volume_tolerance: params
                .volume_tolerance
                .or_else(|| block.and_then(|b| b.volume_tolerance)),
            now_ms,
        };

        let recommendations = optimizer::compute_optimizer_recommendations(&request, &self.settings.tuning);
        info!(
            "Recommended {} sets/exercise at {}-{}% (fatigue {:.0})",
            recommendations.target_volume,
            recommendations.target_intensity.min_pct,
            recommendations.target_intensity.max_pct,
            recommendations.fatigue.score
        );
        Ok(recommendations)
    }

    /// Metabolic load of one set.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` for intensity outside 0-100 or RPE
    /// outside 1-10.
    pub fn set_load(&self, set: &MetabolicSet) -> Result<f64> {
        validate_set(set, "set")?;
        Ok(metabolic::calculate_set_metabolic_load(
            set.intensity_pct,
            set.reps,
            set.rpe,
        ))
    }

    /// Metabolic load of a session.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` naming the first invalid set.
    pub fn session_load(&self, sets: &[MetabolicSet]) -> Result<f64> {
        for (index, set) in sets.iter().enumerate() {
            validate_set(set, &format!("sets[{index}]"))?;
        }
        Ok(metabolic::calculate_session_metabolic_load(sets))
    }

    /// Classifies a load into a metabolic zone.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` for negative or non-finite loads.
    pub fn zone(&self, load: f64) -> Result<ZoneClassification> {
        if !load.is_finite() || load < 0.0 {
            return Err(PlanError::invalid_input("load")
                .with_reason(format!("must be a non-negative number, got {load}")));
        }
        Ok(metabolic::get_metabolic_zone(load))
    }

    /// Catalog exercises matching the query, ordered by id.
    pub fn list_exercises(&self, query: &CatalogQuery) -> Vec<&Exercise> {
        self.catalog
            .iter()
            .filter(|e| query.pattern.map_or(true, |p| e.movement_pattern == p))
            .filter(|e| query.muscle.map_or(true, |m| e.muscle_groups.contains(&m)))
            .collect()
    }
}

fn validate_set(set: &MetabolicSet, field: &str) -> Result<()> {
    if !set.intensity_pct.is_finite() || !(0.0..=100.0).contains(&set.intensity_pct) {
        return Err(PlanError::invalid_input(format!("{field}.intensityPct"))
            .with_reason(format!("must be between 0 and 100, got {}", set.intensity_pct)));
    }
    if !set.rpe.is_finite() || !(1.0..=10.0).contains(&set.rpe) {
        return Err(PlanError::invalid_input(format!("{field}.rpe"))
            .with_reason(format!("must be between 1 and 10, got {}", set.rpe)));
    }
    Ok(())
}
