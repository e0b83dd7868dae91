//! Command-line access to a shop's Yandex.Checkout account.
//!
//! Credentials come from `YACHECKOUT_*` variables (a `.env` file is loaded
//! first). Results are printed as pretty JSON on stdout. Exit status is 1 for
//! local failures and 2 when the API rejected the request.

use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use yacheckout::types::Payment;
use yacheckout::{new_idempotence_key, Checkout, CheckoutConfig, CheckoutError, ReceiptFilter};

const USAGE: &str = "\
usage: yacheckout <command>

commands:
  me                          show shop settings
  payment get <id>            show a payment
  payment capture <id>        capture the full authorized amount
  payment cancel <id>         cancel a payment waiting for capture
  refund get <id>             show a refund
  receipt get <id>            show a receipt
  receipts payment <id>       list receipts of a payment
  receipts refund <id>        list receipts of a refund
  webhooks                    list webhook subscriptions (OAuth only)
  webhook delete <id>         remove a webhook subscription (OAuth only)

environment:
  YACHECKOUT_SHOP_ID, YACHECKOUT_SECRET_KEY, YACHECKOUT_OAUTH_TOKEN,
  YACHECKOUT_API_URL, YACHECKOUT_TIMEOUT_SECS, RUST_LOG";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Me,
    GetPayment(String),
    CapturePayment(String),
    CancelPayment(String),
    GetRefund(String),
    GetReceipt(String),
    PaymentReceipts(String),
    RefundReceipts(String),
    Webhooks,
    DeleteWebhook(String),
}

fn parse(args: &[String]) -> Option<Command> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let command = match args.as_slice() {
        ["me"] => Command::Me,
        ["payment", "get", id] => Command::GetPayment(id.to_string()),
        ["payment", "capture", id] => Command::CapturePayment(id.to_string()),
        ["payment", "cancel", id] => Command::CancelPayment(id.to_string()),
        ["refund", "get", id] => Command::GetRefund(id.to_string()),
        ["receipt", "get", id] => Command::GetReceipt(id.to_string()),
        ["receipts", "payment", id] => Command::PaymentReceipts(id.to_string()),
        ["receipts", "refund", id] => Command::RefundReceipts(id.to_string()),
        ["webhooks"] => Command::Webhooks,
        ["webhook", "delete", id] => Command::DeleteWebhook(id.to_string()),
        _ => return None,
    };
    Some(command)
}

async fn run(client: &Checkout, command: Command) -> Result<serde_json::Value, CheckoutError> {
    let value = match command {
        Command::Me => serde_json::to_value(client.get_me().await?)?,
        Command::GetPayment(id) => serde_json::to_value(client.get_payment(&id).await?)?,
        Command::CapturePayment(id) => {
            let key = new_idempotence_key();
            tracing::info!(payment_id = %id, idempotence_key = %key, "capturing payment");
            serde_json::to_value(client.capture_payment(&key, &id, &Payment::default()).await?)?
        }
        Command::CancelPayment(id) => {
            let key = new_idempotence_key();
            tracing::info!(payment_id = %id, idempotence_key = %key, "canceling payment");
            serde_json::to_value(client.cancel_payment(&key, &id).await?)?
        }
        Command::GetRefund(id) => serde_json::to_value(client.get_refund(&id).await?)?,
        Command::GetReceipt(id) => serde_json::to_value(client.get_receipt(&id).await?)?,
        Command::PaymentReceipts(id) => {
            serde_json::to_value(client.get_receipts(ReceiptFilter::Payment(&id)).await?)?
        }
        Command::RefundReceipts(id) => {
            serde_json::to_value(client.get_receipts(ReceiptFilter::Refund(&id)).await?)?
        }
        Command::Webhooks => serde_json::to_value(client.get_webhooks().await?)?,
        Command::DeleteWebhook(id) => {
            client.delete_webhook(&id).await?;
            serde_json::json!({ "deleted": id })
        }
    };
    Ok(value)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = parse(&args) else {
        eprintln!("{USAGE}");
        return ExitCode::from(1);
    };

    let client = match CheckoutConfig::from_env().and_then(|c| Checkout::from_config(&c)) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    match run(&client, command).await {
        Ok(value) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&value).unwrap_or_default()
            );
            ExitCode::SUCCESS
        }
        Err(e) => match e.api_error() {
            Some(api) => {
                eprintln!("{}", serde_json::to_string_pretty(api).unwrap_or_default());
                ExitCode::from(2)
            }
            None => {
                tracing::error!(error = %e, "request failed");
                eprintln!("Error: {e}");
                ExitCode::from(1)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse(&args("me")), Some(Command::Me));
        assert_eq!(
            parse(&args("payment get 2a3b")),
            Some(Command::GetPayment("2a3b".to_string()))
        );
        assert_eq!(
            parse(&args("receipts refund r-1")),
            Some(Command::RefundReceipts("r-1".to_string()))
        );
        assert_eq!(
            parse(&args("webhook delete wh-1")),
            Some(Command::DeleteWebhook("wh-1".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_or_incomplete() {
        assert_eq!(parse(&args("")), None);
        assert_eq!(parse(&args("payment get")), None);
        assert_eq!(parse(&args("payment refund p-1")), None);
        assert_eq!(parse(&args("me extra")), None);
    }
}
