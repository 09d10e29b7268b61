//! Request handlers and shared state.
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use hexmap::prelude::{HexCoord, HexMap, Location};
use parking_lot::Mutex;
use tracing::debug;

use crate::error::ServerError;

/// Shared handler state: the memoizing map behind a mutex, plus the
/// location of the UI asset.
#[derive(Clone)]
pub struct AppState {
    map: Arc<Mutex<HexMap>>,
    ui_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(seed: i64, ui_path: PathBuf) -> Self {
        Self {
            map: Arc::new(Mutex::new(HexMap::with_seed(seed))),
            ui_path: Arc::new(ui_path),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_ui))
        .route("/locations", post(locations))
        .with_state(state)
}

/// Serves the static UI page.
async fn serve_ui(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    let html = tokio::fs::read_to_string(state.ui_path.as_ref()).await?;
    Ok(Html(html))
}

/// Resolves a batch of coordinates to locations, in request order.
async fn locations(
    State(state): State<AppState>,
    Json(coords): Json<Vec<HexCoord>>,
) -> Json<Vec<Location>> {
    debug!(count = coords.len(), "resolving locations");
    let mut map = state.map.lock();
    let locs = coords.into_iter().map(|coord| map.get(coord)).collect();
    Json(locs)
}

#[cfg(test)]
mod tests {
    use hexmap::prelude::Shape;

    use super::*;

    fn state() -> AppState {
        AppState::new(0, PathBuf::from("web/ui.html"))
    }

    #[tokio::test]
    async fn batch_preserves_request_order() {
        let coords = vec![
            HexCoord::new(5, 5),
            HexCoord::new(-1, 0),
            HexCoord::new(5, 5),
            HexCoord::new(0, 0),
        ];
        let Json(locs) = locations(State(state()), Json(coords.clone())).await;

        assert_eq!(locs.len(), coords.len());
        for (coord, loc) in coords.iter().zip(&locs) {
            assert_eq!(loc.coord(), *coord);
        }
        // Duplicate coordinates resolve identically.
        assert_eq!(locs[0], locs[2]);
    }

    #[tokio::test]
    async fn empty_batch_yields_empty_response() {
        let Json(locs) = locations(State(state()), Json(Vec::new())).await;
        assert!(locs.is_empty());
    }

    #[tokio::test]
    async fn repeated_requests_are_deterministic() {
        let shared = state();
        let coords: Vec<HexCoord> = (0..100).map(|i| HexCoord::new(i, -i)).collect();
        let Json(first) = locations(State(shared.clone()), Json(coords.clone())).await;
        let Json(second) = locations(State(shared), Json(coords)).await;
        assert_eq!(first, second);
    }

    #[test]
    fn wire_format_uses_integer_shape_codes() {
        let loc = Location {
            q: 2,
            r: 0,
            shape: Shape::Circle,
        };
        let json = serde_json::to_value(loc).unwrap();
        assert_eq!(json, serde_json::json!({"q": 2, "r": 0, "shape": 1}));

        let coords: Vec<HexCoord> = serde_json::from_str(r#"[{"q":0,"r":0},{"q":-3,"r":7}]"#).unwrap();
        assert_eq!(coords, vec![HexCoord::new(0, 0), HexCoord::new(-3, 7)]);
    }

    #[test]
    fn malformed_shape_tag_is_rejected() {
        let result: Result<Location, _> = serde_json::from_str(r#"{"q":0,"r":0,"shape":9}"#);
        assert!(result.is_err());
    }
}
