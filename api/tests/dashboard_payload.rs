//! Deserializes a captured backend payload end-to-end, through the wire
//! envelope into the typed summary.

use api::dashboard::DashboardEnvelope;
use api::dashboard::FetchError;
use api::dashboard::UserId;
use api::money::Currency;
use api::money::Money;

const CAPTURED_PAYLOAD: &str = r#"{
  "ok": true,
  "data": {
    "totalusers": 248,
    "pendingrequests": 5,
    "accountamount": 10432.75,
    "latest": [
      {
        "id": 101,
        "companyname": "Elektrodistribucija Sarajevo d.o.o.",
        "referentimeprezime": "Jasmin Hodžić",
        "amount": 250.0,
        "paymentstatus": "paid"
      },
      {
        "id": 102,
        "companyname": "Gradska toplana a.d.",
        "amount": 99.9,
        "paymentstatus": "pending"
      },
      {
        "id": 103,
        "companyname": "Komunalno Brčko",
        "referentimeprezime": "Sanja Perić",
        "paymentstatus": "storno"
      },
      {
        "id": 104,
        "companyname": "Vodovod i kanalizacija"
      }
    ]
  }
}"#;

#[test]
fn captured_payload_deserializes_into_summary() {
    let envelope: DashboardEnvelope = serde_json::from_str(CAPTURED_PAYLOAD).unwrap();
    let summary = envelope.into_result().unwrap();

    assert_eq!(summary.total_users, 248);
    assert_eq!(summary.pending_requests, 5);
    assert_eq!(
        summary.account_amount,
        Money::from_minor(1_043_275, Currency::BAM)
    );

    // Backend row order is preserved as-is.
    let ids: Vec<UserId> = summary.latest.iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![UserId(101), UserId(102), UserId(103), UserId(104)]);

    // Optional fields survive as options; defaults are left to presentation.
    assert_eq!(
        summary.latest[0].referent_name.as_deref(),
        Some("Jasmin Hodžić")
    );
    assert_eq!(summary.latest[1].referent_name, None);
    assert_eq!(
        summary.latest[1].amount,
        Some(Money::from_minor(9990, Currency::BAM))
    );
    assert_eq!(summary.latest[2].amount, None);
    assert_eq!(summary.latest[2].payment_status.as_deref(), Some("storno"));
    assert_eq!(summary.latest[3].payment_status, None);
}

#[test]
fn failure_payload_surfaces_backend_message() {
    let envelope: DashboardEnvelope =
        serde_json::from_str(r#"{ "ok": false, "error": "Sesija istekla" }"#).unwrap();
    assert_eq!(
        envelope.into_result().unwrap_err(),
        FetchError::Api("Sesija istekla".to_string())
    );
}

#[test]
fn failure_payload_without_message_gets_default() {
    let envelope: DashboardEnvelope = serde_json::from_str(r#"{ "ok": false }"#).unwrap();
    assert_eq!(
        envelope.into_result().unwrap_err(),
        FetchError::Api("API error".to_string())
    );
}
