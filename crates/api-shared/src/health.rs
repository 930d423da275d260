use crate::dto::HealthRes;
use wishlist_core::{PlaceStore, WishlistService};

/// Health reporting shared by the HTTP surfaces.
///
/// A wishlist is only healthy when its store answers queries; the report reflects a live
/// round trip to the store rather than a constant.
#[derive(Clone, Copy, Debug, Default)]
pub struct HealthService;

impl HealthService {
    /// Pings the service's store and describes the outcome.
    pub fn check_health<S: PlaceStore>(service: &WishlistService<S>) -> HealthRes {
        match service.ping() {
            Ok(()) => HealthRes {
                ok: true,
                message: "Wishlist is alive".into(),
            },
            Err(err) => {
                tracing::error!(error = %err, "health check failed");
                HealthRes {
                    ok: false,
                    message: "Wishlist store is unavailable".into(),
                }
            }
        }
    }
}
