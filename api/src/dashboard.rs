//! Wire contract and typed model for the dashboard fetch.
//!
//! The backend answers with an `ok`/`data`/`error` envelope whose field
//! names it dictates; everything downstream of [`DashboardEnvelope::into_result`]
//! works with the typed model instead.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::money::Currency;
use crate::money::Money;

/// Opaque identifier of the user behind a payment row. Used for navigation
/// only; nothing in this crate inspects the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A failed dashboard fetch, split by where the failure happened.
///
/// Both variants carry the final user-facing message; the defaults are
/// applied at construction so callers can display the error as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request completed but the envelope signalled failure (`ok=false`
    /// or a missing `data` object).
    #[error("{0}")]
    Api(String),
    /// The request itself failed: connect, timeout, or a malformed body.
    #[error("{0}")]
    Network(String),
}

impl FetchError {
    /// Application-level failure, with the envelope's message when it sent one.
    pub fn api(message: Option<String>) -> Self {
        Self::Api(
            message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "API error".to_string()),
        )
    }

    /// Transport-level failure, with the underlying error's message when it
    /// has one.
    pub fn network(err: impl fmt::Display) -> Self {
        let message = err.to_string();
        if message.is_empty() {
            Self::Network("Network error".to_string())
        } else {
            Self::Network(message)
        }
    }
}

//=============================================================================
// Wire representation (field names fixed by the backend)
//=============================================================================

/// Raw response envelope as served by `GET /api/mobile/dashboard`.
#[derive(Debug, Deserialize)]
pub struct DashboardEnvelope {
    pub ok: bool,
    #[serde(default)]
    pub data: Option<DashboardData>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Raw `data` object of the envelope.
#[derive(Debug, Deserialize)]
pub struct DashboardData {
    pub totalusers: u32,
    pub pendingrequests: u32,
    pub accountamount: f64,
    #[serde(default)]
    pub latest: Vec<PaymentRowData>,
}

/// Raw payment row.
#[derive(Debug, Deserialize)]
pub struct PaymentRowData {
    pub id: UserId,
    pub companyname: String,
    #[serde(default)]
    pub referentimeprezime: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub paymentstatus: Option<String>,
}

impl DashboardEnvelope {
    /// Applies the envelope protocol: `ok` with a `data` object is success,
    /// anything else is an application error carrying the envelope's
    /// message (or the default).
    pub fn into_result(self) -> Result<DashboardSummary, FetchError> {
        match self.data {
            Some(data) if self.ok => Ok(data.into()),
            _ => Err(FetchError::api(self.error)),
        }
    }
}

//=============================================================================
// Typed model
//=============================================================================

/// One fetched snapshot of the dashboard.
///
/// Immutable once built; a new fetch replaces the whole value. The row
/// order is the backend's and is preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_users: u32,
    /// Held for other surfaces of the app; the landing screen does not
    /// render it.
    pub pending_requests: u32,
    pub account_amount: Money,
    pub latest: Vec<PaymentRow>,
}

/// One payment record in the latest-payments feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRow {
    pub id: UserId,
    pub company_name: String,
    pub referent_name: Option<String>,
    pub amount: Option<Money>,
    /// Raw server status string. Mapping to a label and tone happens at the
    /// presentation boundary.
    pub payment_status: Option<String>,
}

impl From<DashboardData> for DashboardSummary {
    fn from(data: DashboardData) -> Self {
        Self {
            total_users: data.totalusers,
            pending_requests: data.pendingrequests,
            account_amount: Money::from_float(data.accountamount, Currency::BAM),
            latest: data.latest.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<PaymentRowData> for PaymentRow {
    fn from(row: PaymentRowData) -> Self {
        Self {
            id: row.id,
            company_name: row.companyname,
            referent_name: row.referentimeprezime,
            amount: row.amount.map(|a| Money::from_float(a, Currency::BAM)),
            payment_status: row.paymentstatus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(ok: bool, data: Option<DashboardData>, error: Option<&str>) -> DashboardEnvelope {
        DashboardEnvelope {
            ok,
            data,
            error: error.map(str::to_string),
        }
    }

    fn sample_data() -> DashboardData {
        DashboardData {
            totalusers: 12,
            pendingrequests: 3,
            accountamount: 1520.5,
            latest: vec![
                PaymentRowData {
                    id: UserId(7),
                    companyname: "Prva firma d.o.o.".to_string(),
                    referentimeprezime: Some("Amira Begić".to_string()),
                    amount: Some(42.5),
                    paymentstatus: Some("paid".to_string()),
                },
                PaymentRowData {
                    id: UserId(9),
                    companyname: "Druga firma d.o.o.".to_string(),
                    referentimeprezime: None,
                    amount: None,
                    paymentstatus: None,
                },
            ],
        }
    }

    #[test]
    fn success_envelope_maps_every_field() {
        let summary = envelope(true, Some(sample_data()), None)
            .into_result()
            .unwrap();

        assert_eq!(summary.total_users, 12);
        assert_eq!(summary.pending_requests, 3);
        assert_eq!(summary.account_amount, Money::from_minor(152050, Currency::BAM));
        assert_eq!(summary.latest.len(), 2);
        // Server order survives the conversion.
        assert_eq!(summary.latest[0].id, UserId(7));
        assert_eq!(summary.latest[1].id, UserId(9));
        assert_eq!(summary.latest[0].amount, Some(Money::from_minor(4250, Currency::BAM)));
        assert_eq!(summary.latest[1].amount, None);
        assert_eq!(summary.latest[1].referent_name, None);
    }

    #[test]
    fn failure_envelope_carries_backend_message() {
        let err = envelope(false, None, Some("Nema podataka"))
            .into_result()
            .unwrap_err();
        assert_eq!(err, FetchError::Api("Nema podataka".to_string()));
    }

    #[test]
    fn failure_envelope_without_message_uses_default() {
        let err = envelope(false, None, None).into_result().unwrap_err();
        assert_eq!(err, FetchError::Api("API error".to_string()));

        // An empty message counts as no message.
        let err = envelope(false, None, Some("")).into_result().unwrap_err();
        assert_eq!(err, FetchError::Api("API error".to_string()));
    }

    #[test]
    fn ok_without_data_is_an_application_error() {
        let err = envelope(true, None, None).into_result().unwrap_err();
        assert_eq!(err, FetchError::Api("API error".to_string()));
    }

    #[test]
    fn network_error_keeps_message_or_defaults() {
        assert_eq!(
            FetchError::network("connection refused"),
            FetchError::Network("connection refused".to_string())
        );
        assert_eq!(
            FetchError::network(""),
            FetchError::Network("Network error".to_string())
        );
    }
}
