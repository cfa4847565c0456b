use serde::Deserialize;
use utoipa::IntoParams;

/// Upper bound applied to every `limit` query parameter.
pub const MAX_LIMIT: u64 = 1000;

/// Optional `limit` query parameter of the list endpoints.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitQuery {
    /// Maximum number of rows to return, clamped to 1000
    pub limit: Option<u64>,
}

impl LimitQuery {
    /// The requested limit, or `default` when absent, never above [`MAX_LIMIT`].
    pub fn resolve(&self, default: u64) -> u64 {
        self.limit.unwrap_or(default).min(MAX_LIMIT)
    }
}
