//! Use-Case: Wartenden Tap per Hit-Test in einen Anker umsetzen.

use crate::app::state::FrameStats;
use crate::app::tap_queue::TapQueue;
use crate::core::{AnchorSet, PlacementOutcome, ProviderError, TrackingProvider};

/// Entnimmt höchstens einen Tap und versucht, dort einen Anker zu setzen.
///
/// Ohne Kamera-Tracking wird der Tap verbraucht und verworfen. Eine abgelehnte
/// Anker-Erstellung ist ein No-Op, der Tap wird nicht erneut eingereiht.
/// Nur ein fehlschlagender Hit-Test wird als Fehler propagiert.
pub fn handle_pending_tap<P: TrackingProvider>(
    taps: &TapQueue,
    anchors: &mut AnchorSet<P::Anchor>,
    provider: &mut P,
    camera_tracking: bool,
    stats: &mut FrameStats,
) -> Result<Option<PlacementOutcome>, ProviderError> {
    let Some(tap) = taps.dequeue_one() else {
        return Ok(None);
    };
    stats.taps_consumed += 1;

    if !camera_tracking {
        stats.taps_discarded += 1;
        log::debug!("Tap #{} verworfen: Kamera trackt nicht", tap.event_id);
        return Ok(None);
    }

    let hits = provider.hit_test(tap.screen_pos)?;
    let mut rejected = false;
    let outcome = anchors.try_place(&hits, |hit| {
        provider.create_anchor(hit).inspect_err(|_| rejected = true)
    });

    match outcome {
        PlacementOutcome::Placed => stats.anchors_placed += 1,
        PlacementOutcome::Replaced => stats.anchors_replaced += 1,
        PlacementOutcome::NoOp if rejected => stats.anchor_rejections += 1,
        PlacementOutcome::NoOp => {}
    }

    log::debug!(
        "Tap #{} bei ({:.0}, {:.0}): {} Treffer → {:?}, {} Anker",
        tap.event_id,
        tap.screen_pos.x,
        tap.screen_pos.y,
        hits.len(),
        outcome,
        anchors.len()
    );

    Ok(Some(outcome))
}
