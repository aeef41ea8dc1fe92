//! Wallet handlers

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::server::AppState;
use crate::models::pagination::{Page, PageParams};
use crate::models::wallet::{Wallet, PointTransaction, TransactionKind};
use crate::utils::errors::ClubHubError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Signed adjustment applied by staff: positive credits, negative debits
#[derive(Debug, Deserialize)]
pub struct AdjustBody {
    pub amount: i64,
    pub reference: Option<String>,
}

async fn require_user(state: &AppState, user_id: i64) -> Result<(), ClubHubError> {
    state.db.users.find_by_id(user_id).await?
        .map(|_| ())
        .ok_or(ClubHubError::UserNotFound { user_id })
}

/// Current balance; wallets materialize on first read
pub async fn balance(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Wallet>, ClubHubError> {
    require_user(&state, id).await?;

    let wallet = state.db.wallets.get_or_create(id).await?;
    Ok(Json(wallet))
}

/// Transaction history, newest first
pub async fn transactions(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<PointTransaction>>, ClubHubError> {
    require_user(&state, id).await?;

    let params = PageParams { limit: query.limit, offset: query.offset };
    let items = state.db.wallets.history(id, params.limit(), params.offset()).await?;
    let total = state.db.wallets.count_history(id).await?;

    Ok(Json(Page::new(items, total, params)))
}

/// Apply a signed point adjustment
pub async fn adjust(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<AdjustBody>,
) -> Result<Json<Wallet>, ClubHubError> {
    require_user(&state, id).await?;

    if body.amount == 0 {
        return Err(ClubHubError::InvalidInput("Adjustment amount cannot be zero".to_string()));
    }

    let reference = body.reference.as_deref();

    let wallet = if body.amount > 0 {
        state.db.wallets
            .credit(id, body.amount, TransactionKind::Adjustment, reference)
            .await?
    } else {
        state.db.wallets
            .debit(id, -body.amount, TransactionKind::Adjustment, reference)
            .await?
    };

    crate::utils::logging::log_wallet_movement(id, body.amount, "adjustment", reference);
    Ok(Json(wallet))
}
