use crate::foundation::error::ShapecastResult;
use crate::host::model::HostSymbol;
use crate::publish::session::PublishSession;
use crate::publish::writer::FrameRecord;
use crate::render::slice::SliceGuides;
use crate::timeline::frame::FrameBuilder;
use crate::timeline::tween::TweenRegistry;

/// Write every timeline frame of `symbol`: each keyframe is resolved once and released for
/// each position it spans. The label goes on the keyframe's first frame.
pub(crate) fn build_timeline(
    session: &mut PublishSession<'_>,
    symbol: &HostSymbol,
    tweens: &TweenRegistry,
) -> ShapecastResult<()> {
    let guides = symbol.scale9_grid.as_ref().map(SliceGuides::from_guides);
    let mut builder = FrameBuilder::new(session.config()).with_slice_guides(guides);
    for (index, frame) in symbol.frames.iter().enumerate() {
        builder.update(session, frame, tweens)?;
        tracing::trace!(
            keyframe = index,
            duration = builder.duration(),
            elements = builder.len(),
            "keyframe resolved"
        );
        for position in 0..builder.duration() {
            let entries = builder.entries_at(session, position)?;
            let label = if position == 0 {
                builder.label().map(str::to_owned)
            } else {
                None
            };
            session.write_frame(FrameRecord { label, entries })?;
        }
    }
    Ok(())
}
