//! Request handlers and wire types.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use lumen_types::{Asset, Balance};
use lumen_wallet::{Ledger, WalletService};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;

// ── Create ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct WalletResponse {
    pub public_key: String,
    pub secret_key: String,
    pub message: String,
}

/// `POST /api/v1/wallets/create`
///
/// The only moment the new secret key crosses the wire. It is not kept
/// server-side, so a lost response means a lost wallet.
pub async fn create_wallet<L: Ledger>(
    State(service): State<Arc<WalletService<L>>>,
) -> Result<Json<WalletResponse>, ApiError> {
    let created = service.create_wallet().await.map_err(ApiError::from)?;
    let message = format!(
        "Wallet created, trusted {}, and funded successfully. Hash: {}",
        service.asset().code.as_str(),
        created.tx_hash
    );
    Ok(Json(WalletResponse {
        public_key: created.address.to_string(),
        secret_key: created.secret,
        message,
    }))
}

// ── Details ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct WalletDetailsResponse {
    pub public_key: String,
    pub exists: bool,
    pub balances: Vec<BalanceEntry>,
    pub sequence_number: i64,
}

#[derive(Serialize)]
pub struct BalanceEntry {
    pub asset_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    pub balance: String,
}

fn balance_entry(line: &Balance) -> BalanceEntry {
    let (asset_code, issuer) = match &line.asset {
        Asset::Native => (None, None),
        Asset::Credit(credit) => (
            Some(credit.code.as_str().to_string()),
            Some(credit.issuer.to_string()),
        ),
    };
    BalanceEntry {
        asset_type: line.asset.type_str().to_string(),
        asset_code,
        issuer,
        balance: line.amount.to_string(),
    }
}

/// `GET /api/v1/wallets/:public_key`
///
/// Answers 200 whether or not the account exists; an account the ledger
/// has never seen reports `exists: false` with no balances. Only a
/// malformed address or an unreachable node is an error.
pub async fn wallet_details<L: Ledger>(
    State(service): State<Arc<WalletService<L>>>,
    Path(public_key): Path<String>,
) -> Result<Json<WalletDetailsResponse>, ApiError> {
    let details = service
        .wallet_details(&public_key)
        .await
        .map_err(ApiError::from)?;
    Ok(Json(WalletDetailsResponse {
        public_key: details.address.to_string(),
        exists: details.exists,
        balances: details.balances.iter().map(balance_entry).collect(),
        sequence_number: details.sequence,
    }))
}

// ── Transfer ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct TransferRequest {
    pub from_secret_key: String,
    pub to_public_key: String,
    pub amount: String,
}

#[derive(Serialize)]
pub struct TransferResponse {
    pub transaction_hash: String,
    pub message: String,
}

/// `POST /api/v1/wallets/transfer`
pub async fn transfer<L: Ledger>(
    State(service): State<Arc<WalletService<L>>>,
    body: Result<Json<TransferRequest>, JsonRejection>,
) -> Result<Json<TransferResponse>, ApiError> {
    let Json(req) = body
        .map_err(|rejection| ApiError::bad_request(format!("invalid request body: {rejection}")))?;
    let hash = service
        .transfer(&req.from_secret_key, &req.to_public_key, &req.amount)
        .await
        .map_err(ApiError::from)?;
    Ok(Json(TransferResponse {
        transaction_hash: hash.to_string(),
        message: format!(
            "{} transferred successfully",
            service.asset().code.as_str()
        ),
    }))
}

// ── Router ───────────────────────────────────────────────────────────────

/// Builds the full route table over a shared service.
pub fn router<L: Ledger + 'static>(service: Arc<WalletService<L>>) -> Router {
    Router::new()
        .route("/api/v1/wallets/create", post(create_wallet::<L>))
        .route("/api/v1/wallets/:public_key", get(wallet_details::<L>))
        .route("/api/v1/wallets/transfer", post(transfer::<L>))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
