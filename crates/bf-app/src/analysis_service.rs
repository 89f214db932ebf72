//! Analysis execution.

use std::time::Instant;

use bf_core::{radps, s};
use bf_lti::TransferFunctionModel;
use bf_response::{BodeAxes, FrequencyResponseEngine, FrequencySweep};

use crate::cache::ResponseCache;
use crate::error::AppResult;
use crate::report::BodeReport;
use crate::schema::{AnalysisDef, AnalysisFile, SweepConfig};

/// Build the (possibly delay-augmented) model described by `def`.
pub fn build_model(def: &AnalysisDef) -> AppResult<TransferFunctionModel> {
    let mut builder = TransferFunctionModel::builder()
        .numerator(def.numerator.clone())
        .denominator(def.denominator.clone())
        .pade(def.pade);
    if let Some(seconds) = def.delay {
        builder = builder.delay_time(s(seconds));
    }
    Ok(builder.build()?)
}

/// Generate the sweep described by `config`.
pub fn build_sweep(config: &SweepConfig) -> AppResult<FrequencySweep> {
    Ok(FrequencySweep::between(
        radps(config.start),
        radps(config.stop),
        config.points,
        config.spacing,
    )?)
}

/// Run one analysis, reusing a cached response when the same model and sweep
/// were evaluated recently.
pub fn run_analysis(def: &AnalysisDef, cache: &mut ResponseCache) -> AppResult<BodeReport> {
    let start = Instant::now();

    let model = build_model(def)?;
    let sweep = build_sweep(&def.sweep)?;
    let engine = FrequencyResponseEngine::new(def.on_singular);
    let (response, from_cache) = cache.get_or_evaluate(&model, &sweep, &engine)?;

    tracing::info!(
        analysis = %def.name,
        samples = response.len(),
        from_cache,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "analysis complete"
    );

    Ok(BodeReport {
        name: def.name.clone(),
        model,
        response,
        axes: BodeAxes::default(),
        from_cache,
    })
}

/// Run every analysis in a file in order, stopping at the first failure.
pub fn run_analysis_file(
    file: &AnalysisFile,
    cache: &mut ResponseCache,
) -> AppResult<Vec<BodeReport>> {
    file.analyses
        .iter()
        .map(|def| run_analysis(def, cache))
        .collect()
}
