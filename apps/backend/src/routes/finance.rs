use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::repos::transactions::Transaction;
use crate::services::transactions::{self as txn_service, NewTransaction};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddTransactionRequest {
    pub category: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// A stored transaction as returned to its owner.
#[derive(Debug, Serialize)]
pub struct TransactionView {
    pub category: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub mobile: String,
}

impl From<Transaction> for TransactionView {
    fn from(t: Transaction) -> Self {
        Self {
            category: t.category,
            amount: t.amount,
            kind: t.kind,
            note: t.note,
            mobile: t.owner_mobile,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionView>,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: &'static str,
}

async fn list_transactions(
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let transactions = txn_service::list_transactions(app_state.transactions.as_ref(), &user.mobile)
        .await?
        .into_iter()
        .map(TransactionView::from)
        .collect();

    Ok(HttpResponse::Ok().json(TransactionsResponse { transactions }))
}

async fn add_transaction(
    user: CurrentUser,
    body: ValidatedJson<AddTransactionRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let AddTransactionRequest {
        category,
        amount,
        kind,
        note,
    } = body.into_inner();

    txn_service::add_transaction(
        app_state.transactions.as_ref(),
        &user.mobile,
        NewTransaction {
            category,
            amount,
            kind,
            note,
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Transaction added successfully",
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/transactions", web::get().to(list_transactions))
        .route("/add-transaction", web::post().to(add_transaction));
}
