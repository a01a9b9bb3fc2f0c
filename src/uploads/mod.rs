pub mod handlers;

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::state::AppState;

// Headroom for multipart framing around the file bytes, so the size check in
// the handler is what rejects oversized files.
const MULTIPART_OVERHEAD: usize = 1024 * 1024;

pub(crate) fn raw_body_cap(max_upload_bytes: usize) -> usize {
    max_upload_bytes + MULTIPART_OVERHEAD
}

pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/uploads", post(handlers::upload_file))
        .layer(DefaultBodyLimit::max(raw_body_cap(max_upload_bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_body_cap_tracks_the_configured_maximum() {
        for mb in [1usize, 5, 25, 100] {
            let max = mb * 1024 * 1024;
            // A body exactly at the allowed size always reaches the handler.
            assert!(raw_body_cap(max) > max);
        }
        assert!(raw_body_cap(25 * 1024 * 1024) > raw_body_cap(5 * 1024 * 1024));
    }
}
