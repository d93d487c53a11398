use rayon::prelude::*;

use crate::assets::normalize::{NormalizedImages, normalize_images};
use crate::config::{CompositorConfig, Threading};
use crate::effects::generate::{EffectClip, EffectParams, generate};
use crate::foundation::core::Canvas;
use crate::foundation::error::{FlipbookError, FlipbookResult};
use crate::render::canvas::resolve_canvas;
use crate::render::frame::center;
use crate::sequence::entry::{SequenceEntry, SequenceRequest};
use crate::sequence::timeline::Timeline;

/// Build the flipbook timeline for `request`.
///
/// Pipeline:
/// 1. normalize every distinct referenced image into `config.max_size`
/// 2. size one square canvas from the largest normalized diagonal
/// 3. center each entry's image on the canvas and run its effect `repeat` times
/// 4. concatenate the clips in entry order
///
/// Entries naming an unknown effect contribute no frames, but their images still count toward
/// the canvas size.
#[tracing::instrument(skip_all, fields(entries = request.entries().len()))]
pub fn assemble(request: &SequenceRequest, config: &CompositorConfig) -> FlipbookResult<Timeline> {
    config.validate()?;
    if request.is_empty() {
        return Err(FlipbookError::EmptyTimeline);
    }

    let images = normalize_images(request.arena(), request.referenced_handles(), config.max_size)?;
    let canvas = resolve_canvas(images.sizes(), config.canvas_limit)?;
    tracing::debug!(
        canvas = canvas.side,
        distinct_images = images.len(),
        resized = images.resize_count(),
        "resolved canvas"
    );

    let params = config.effect_params();
    let clips = if config.threading.parallel {
        render_entries_parallel(request.entries(), &images, canvas, &params, &config.threading)?
    } else {
        request
            .entries()
            .iter()
            .map(|entry| render_entry(entry, &images, canvas, &params))
            .collect::<FlipbookResult<Vec<_>>>()?
    };

    let timeline = Timeline::from_clips(canvas, clips.into_iter().flatten())?;
    tracing::info!(
        frames = timeline.len(),
        canvas = canvas.side,
        total_ms = timeline.total_duration_ms(),
        "assembled timeline"
    );
    Ok(timeline)
}

fn render_entry(
    entry: &SequenceEntry,
    images: &NormalizedImages,
    canvas: Canvas,
    params: &EffectParams,
) -> FlipbookResult<Option<EffectClip>> {
    let Some(kind) = entry.effect_kind() else {
        tracing::warn!(effect = %entry.effect, "skipping entry with unknown effect");
        return Ok(None);
    };
    let image = images.get(entry.image).ok_or_else(|| {
        FlipbookError::validation(format!(
            "image handle {} was not normalized",
            entry.image.index()
        ))
    })?;

    let base = center(image, canvas);
    let clip = generate(kind, &base, entry.duration_ms, params).repeated(entry.effective_repeat());
    tracing::trace!(effect = %kind, frames = clip.len(), "rendered entry");
    Ok(Some(clip))
}

fn render_entries_parallel(
    entries: &[SequenceEntry],
    images: &NormalizedImages,
    canvas: Canvas,
    params: &EffectParams,
    threading: &Threading,
) -> FlipbookResult<Vec<Option<EffectClip>>> {
    let pool = build_thread_pool(threading.threads)?;
    pool.install(|| {
        entries
            .par_iter()
            .map(|entry| render_entry(entry, images, canvas, params))
            .collect::<FlipbookResult<Vec<_>>>()
    })
}

fn build_thread_pool(threads: Option<usize>) -> FlipbookResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(FlipbookError::validation(
            "threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| FlipbookError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/assembler.rs"]
mod tests;
