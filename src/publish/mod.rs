pub mod config;
pub mod session;
pub mod writer;

use crate::foundation::error::ShapecastResult;
use crate::host::document::Document;
use crate::publish::session::{PublishSession, PublishStats};
use crate::publish::writer::PublishWriter;
use crate::timeline::tween::TweenRegistry;

/// Publish every symbol of `doc` into `writer` with the document's config.
#[tracing::instrument(skip_all, fields(symbols = doc.symbols.len()))]
pub fn publish_document(
    doc: &Document,
    writer: &mut dyn PublishWriter,
) -> ShapecastResult<PublishStats> {
    let tweens = TweenRegistry::from_defs(&doc.tweeners, doc.config.curve_mode())?;
    let mut session = PublishSession::new(doc.config.clone(), writer)?;
    for symbol in &doc.symbols {
        session.publish_symbol(symbol, &tweens)?;
    }
    Ok(session.finish())
}
